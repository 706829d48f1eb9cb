//! Search command - first case-insensitive match across all fields.

use std::path::Path;

use colored::Colorize;
use museum::{service, MuseumStore};

pub fn run(file: &Path, term: &str) -> Result<(), Box<dyn std::error::Error>> {
    let store = MuseumStore::load(file)?;

    match service::search(&store, term) {
        Some(exhibit) => {
            println!("{} \"{}\":", "Match for".green().bold(), term);
            println!("{}", exhibit.describe());
        }
        None => {
            println!("{} \"{}\".", "No results for".yellow(), term);
        }
    }

    Ok(())
}
