//! Museum CLI - inventory manager for exhibits and galleries.

mod cli;
mod commands;
mod prompt;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add => commands::add::run(&cli.file, cli.verbose),

        Commands::Search { term } => commands::search::run(&cli.file, &term),

        Commands::List => commands::list::run(&cli.file),

        Commands::Edit { id } => commands::edit::run(&cli.file, id),

        Commands::Status { json } => commands::status::run(&cli.file, json),

        Commands::Gallery { command } => commands::gallery::run(&cli.file, command),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
