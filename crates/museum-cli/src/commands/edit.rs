//! Edit command - per-field update with "empty keeps current" semantics.

use std::path::Path;

use colored::Colorize;
use museum::{service, ExhibitUpdate, MuseumStore, UpdateOutcome, Year};

use crate::prompt;

pub fn run(file: &Path, id: u64) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = MuseumStore::load(file)?;

    let current = match store.exhibit_by_id(id) {
        Some(exhibit) => exhibit.clone(),
        None => {
            println!("{} {}.", "No exhibit with id".yellow(), id);
            return Ok(());
        }
    };

    println!("{}", "Editing exhibit (empty input keeps a field):".cyan().bold());
    println!("{}", current.describe());

    let update = ExhibitUpdate {
        title: prompt::optional("Titel", &current.title)?,
        creator: prompt::optional("Schöpfer/Künstler", &current.creator)?,
        year: prompt::optional("Jahr", &current.year().to_string())?
            .map(|input| Year::parse(&input)),
        description: prompt::optional("Beschreibung", &current.description)?,
        status: prompt::select_status(true)?,
    };

    if update.is_empty() {
        println!("{}", "Nothing changed.".yellow());
        return Ok(());
    }

    match service::update_exhibit(&mut store, id, update) {
        UpdateOutcome::Updated => {
            store.save(file)?;
            let exhibit = store.exhibit_by_id(id).expect("updated exhibit");
            println!();
            println!("{}", "Exhibit updated:".green().bold());
            println!("{}", exhibit.describe());
        }
        UpdateOutcome::NotFound => {
            println!("{} {}.", "No exhibit with id".yellow(), id);
        }
    }

    Ok(())
}
