//! Colored status lines for CLI output.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

fn status_line<T: fmt::Display>(color: u8, icon: &str, msg: T) {
    println!("\x1b[{color}m{BOLD}{icon} {RESET}{msg}");
}

pub fn info<T: fmt::Display>(msg: T) {
    status_line(34, "ℹ️", msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    status_line(32, "✅", msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    status_line(33, "⚠️", msg);
}

/// Section header for multi-part outputs such as `stats`.
pub fn header<T: fmt::Display>(msg: T) {
    println!("\x1b[34m{BOLD}=== {msg} ==={RESET}");
}
