// src/cli/args.rs
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to a TOML config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Notes API base URL, overrides config and NOTEPAD_API_URL
    #[arg(short, long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the intro page
    Intro,

    /// List notes, optionally filtered by a search term
    List {
        /// Case-insensitive search over title and content
        #[arg(value_name = "SEARCH")]
        search: Option<String>,

        /// Output notes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a new note
    Create {
        #[arg(short, long)]
        title: String,

        #[arg(short = 'C', long, default_value = "")]
        content: String,

        /// Output the created note as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replace title and content of a note
    Update {
        /// Note ID to update
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,

        #[arg(short, long)]
        title: String,

        #[arg(short = 'C', long, default_value = "")]
        content: String,

        /// Output the updated note as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a note
    Delete {
        /// Note ID to delete
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,
    },

    /// Show or change the dark mode preference
    Theme {
        #[arg(value_enum, value_name = "MODE")]
        mode: Option<ThemeMode>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
    Toggle,
}
