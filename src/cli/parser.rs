use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rollbook
/// CLI attendance register over SQLite
#[derive(Parser)]
#[command(
    name = "rollbook",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance register CLI: class rosters, presence matrices and archive snapshots",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override archive root directory
    #[arg(global = true, long = "archive")]
    pub archive: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage classes (create, delete, list, settings)
    Class {
        #[command(subcommand)]
        action: ClassAction,
    },

    /// Open the attendance window for a class (closes any other)
    Open {
        /// Class name
        class: String,
    },

    /// Close the attendance window for a class
    Close {
        /// Class name
        class: String,
    },

    /// Record a presence event (student console)
    Mark {
        /// Class name
        class: String,

        /// Roll number
        roll: String,

        /// Student name
        name: String,

        #[arg(long = "code", help = "Class code handed out by the teacher")]
        code: String,

        #[arg(long = "date", help = "Date of the event (YYYY-MM-DD, default today)")]
        date: Option<String>,
    },

    /// Show the dense attendance matrix of a class
    Matrix {
        /// Class name
        class: String,

        #[arg(long = "roll", help = "Only show the row for this roll number")]
        roll: Option<String>,
    },

    /// Show per-student summary statistics for a class
    Summary {
        /// Class name
        class: String,

        #[arg(long = "top", help = "Only the best N students by percentage")]
        top: Option<usize>,

        #[arg(long = "bottom", help = "Only the worst N students by percentage")]
        bottom: Option<usize>,

        #[arg(
            long = "range",
            value_name = "LO:HI",
            help = "Only students with percentage within LO:HI (inclusive)"
        )]
        range: Option<String>,
    },

    /// Export the attendance matrix of a class
    Export {
        /// Class name
        class: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Push a matrix snapshot to the archive
    Push {
        /// Class name
        class: String,

        #[arg(long = "date", help = "Snapshot date (YYYY-MM-DD, default today in America/New_York)")]
        date: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ClassAction {
    /// Create a new class (starts closed)
    Add {
        /// Class name
        name: String,

        #[arg(long = "code", help = "Class code students must present")]
        code: Option<String>,

        #[arg(long = "limit", help = "Max submissions recorded per day")]
        limit: Option<i64>,
    },

    /// Delete a class and all of its attendance data
    Del {
        /// Class name
        name: String,

        #[arg(long = "confirm", help = "Type DELETE to confirm")]
        confirm: Option<String>,
    },

    /// List classes
    List,

    /// Show the roll registry of a class
    Roster {
        /// Class name
        name: String,
    },

    /// Update class code and daily limit
    Set {
        /// Class name
        name: String,

        #[arg(long = "code")]
        code: String,

        #[arg(long = "limit")]
        limit: i64,
    },
}
