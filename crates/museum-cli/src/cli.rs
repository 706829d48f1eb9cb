//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Museum: CLI museum inventory manager
#[derive(Parser)]
#[command(name = "museum")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the inventory file
    #[arg(short, long, global = true, default_value = "museum_exhibits.json")]
    pub file: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Catalogue a new exhibit (interactive)
    Add,

    /// Search exhibits; prints the first match
    Search {
        /// Search term, matched case-insensitively across all fields
        #[arg(value_name = "TERM")]
        term: String,
    },

    /// List all exhibits
    List,

    /// Edit an exhibit's fields (interactive; empty input keeps a field)
    Edit {
        /// Id of the exhibit to edit
        #[arg(value_name = "ID")]
        id: u64,
    },

    /// Show inventory summary
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage galleries
    Gallery {
        #[command(subcommand)]
        command: GalleryCommands,
    },
}

#[derive(Subcommand)]
pub enum GalleryCommands {
    /// Create a new gallery (interactive)
    Create,

    /// List galleries with their numbers
    List,

    /// Show one gallery's members
    Show {
        /// Gallery number as printed by `gallery list`
        #[arg(value_name = "NUMBER")]
        number: usize,
    },

    /// Add an exhibit to a gallery
    Add {
        /// Gallery number as printed by `gallery list`
        #[arg(value_name = "NUMBER")]
        number: usize,

        /// Id of the exhibit to add
        #[arg(value_name = "EXHIBIT_ID")]
        exhibit_id: u64,

        /// Answer confirmation prompts with yes
        #[arg(short, long)]
        yes: bool,
    },

    /// Remove an exhibit from a gallery
    Remove {
        /// Gallery number as printed by `gallery list`
        #[arg(value_name = "NUMBER")]
        number: usize,

        /// Id of the exhibit to remove
        #[arg(value_name = "EXHIBIT_ID")]
        exhibit_id: u64,

        /// Answer confirmation prompts with yes
        #[arg(short, long)]
        yes: bool,
    },
}
