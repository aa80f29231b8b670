use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for Frecuencia
/// CLI application to log recurring episodes and derive interval statistics
#[derive(Parser)]
#[command(
    name = "frecuencia",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple episode logging CLI: register recurring events and derive interval statistics",
    long_about = None
)]
pub struct Cli {
    /// Override storage file path (useful for tests or custom locations)
    #[arg(global = true, long = "storage")]
    pub storage: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty episode log
    Init,

    /// Register an episode happening right now
    Reg,

    /// Backfill an episode at an arbitrary past date and time
    Add {
        /// Date of the episode (YYYY-MM-DD)
        date: String,

        /// Time of the episode (HH:MM)
        time: String,

        #[arg(long, help = "Free-text notes attached to the episode")]
        notes: Option<String>,
    },

    /// Remove the most recent episode (undo the last registration)
    Undo,

    /// Edit an episode's time of day and notes (the calendar date never changes)
    Edit {
        /// Episode id
        id: String,

        #[arg(long, help = "New time of day (HH:MM)")]
        time: String,

        #[arg(long, help = "Replacement notes (omit to keep the current ones)")]
        notes: Option<String>,
    },

    /// Delete an episode by id
    Del {
        /// Episode id
        id: String,
    },

    /// List the episodes of one calendar day
    List {
        /// Day to list (YYYY-MM-DD, defaults to today)
        date: Option<String>,
    },

    /// Show the dashboard: last episode, elapsed time, today's count
    Status,

    /// Rolling three-day report with filtered interval averages
    Report,

    /// Overall statistics over the whole log
    Stats,

    /// Export the episode log
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Import episodes from a JSON dump, replacing the whole log
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Skip the confirmation prompt")]
        yes: bool,
    },
}
