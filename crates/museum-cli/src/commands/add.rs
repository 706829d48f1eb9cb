//! Add command - catalogue a new exhibit interactively.

use std::path::Path;

use colored::Colorize;
use museum::{service, ExhibitDraft, MuseumStore, Year};

use crate::prompt;

pub fn run(file: &Path, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = MuseumStore::load(file)?;

    let title = prompt::required("Titel")?;
    let creator = prompt::required("Schöpfer/Künstler")?;
    let year = Year::parse(&prompt::read_line("Jahr")?);
    let description = prompt::read_line("Beschreibung")?;
    let status = prompt::select_status(false)?.expect("selection without keep-option");

    let draft = ExhibitDraft {
        title,
        creator,
        year,
        description,
        status,
    };
    let id = service::add_exhibit(&mut store, draft);
    store.save(file)?;

    let exhibit = store.exhibit_by_id(id).expect("just added");
    println!();
    println!("{}", "Exhibit catalogued:".green().bold());
    println!("{}", exhibit.describe());
    if verbose {
        println!("uid: {}", exhibit.uid());
        println!("Saved to {}", file.display());
    }

    Ok(())
}
