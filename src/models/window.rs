use clap::ValueEnum;

/// Time window selector for listing, stats and export.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Window {
    /// Records from today (local calendar date)
    Day,
    /// Records since Monday 00:00 of the current ISO week
    Week,
    /// Records from the current calendar month
    Month,
    /// The entire archive
    All,
}

impl Window {
    pub fn as_str(&self) -> &'static str {
        match self {
            Window::Day => "day",
            Window::Week => "week",
            Window::Month => "month",
            Window::All => "all",
        }
    }
}
