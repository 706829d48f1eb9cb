//! List command - render every exhibit plus a total count.

use std::path::Path;

use colored::Colorize;
use museum::MuseumStore;

pub fn run(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let store = MuseumStore::load(file)?;

    if store.exhibits().is_empty() {
        println!("{}", "The inventory is empty.".yellow());
        return Ok(());
    }

    for exhibit in store.exhibits() {
        println!("{}", exhibit.describe());
    }
    println!(
        "{} {}",
        "Total:".cyan().bold(),
        format!("{} exhibits", store.exhibits().len()).white()
    );

    Ok(())
}
