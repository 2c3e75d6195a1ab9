use crate::export::ExportFormat;
use crate::models::Window;
use clap::{Parser, Subcommand};

/// Command-line interface definition for tardylog
/// CLI application to track student tardiness
#[derive(Parser)]
#[command(
    name = "tardylog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple tardiness logging CLI: record late arrivals, keep a roster, and mirror to a cloud table store",
    long_about = None
)]
pub struct Cli {
    /// Override the storage directory (useful for tests or portable setups)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and storage directory
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print the internal operation log")]
        print: bool,
    },

    /// Record a tardy event for a student
    Add {
        /// Student number (nis); looked up in the roster
        nis: String,

        /// Student name (required when the student is not in the roster)
        #[arg(long)]
        name: Option<String>,

        /// Class name (required when the student is not in the roster)
        #[arg(long = "class")]
        class_name: Option<String>,
    },

    /// Delete a tardy record by id
    Del {
        /// Record id as shown by `list`
        id: String,

        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// List tardy records
    List {
        /// Time window to show
        #[arg(long, value_enum, default_value = "all")]
        window: Window,

        /// Only records for this class (exact match)
        #[arg(long = "class")]
        class_name: Option<String>,
    },

    /// Show aggregate statistics
    Stats {
        /// How many top offenders to show
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Import roster entries from a spreadsheet (CSV)
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Export the visible record set
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Time window to export
        #[arg(long, value_enum, default_value = "all")]
        window: Window,

        /// Only records for this class (exact match)
        #[arg(long = "class")]
        class_name: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Write a backup snapshot of the roster and records
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Replace all local data with a backup snapshot
    Restore {
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// Configure or trigger cloud mirroring
    Cloud {
        /// Cloud backend URL
        #[arg(long)]
        url: Option<String>,

        /// Cloud access key
        #[arg(long)]
        key: Option<String>,

        /// Disable cloud mirroring and forget the stored credentials
        #[arg(long)]
        clear: bool,

        /// Pull both tables from the cloud and replace local state
        #[arg(long)]
        sync: bool,
    },
}
