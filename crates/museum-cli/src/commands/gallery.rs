//! Gallery commands - create, list, show, and membership changes.

use std::path::Path;

use colored::Colorize;
use museum::{service, GalleryDraft, MembershipOutcome, MuseumStore};

use crate::cli::GalleryCommands;
use crate::prompt;

pub fn run(file: &Path, command: GalleryCommands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        GalleryCommands::Create => create(file),
        GalleryCommands::List => list(file),
        GalleryCommands::Show { number } => show(file, number),
        GalleryCommands::Add {
            number,
            exhibit_id,
            yes,
        } => add(file, number, exhibit_id, yes),
        GalleryCommands::Remove {
            number,
            exhibit_id,
            yes,
        } => remove(file, number, exhibit_id, yes),
    }
}

fn create(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = MuseumStore::load(file)?;

    let draft = GalleryDraft {
        name: prompt::required("Name")?,
        start: prompt::read_line("Beginn")?,
        end: prompt::read_line("Ende")?,
        location: prompt::read_line("Ort")?,
    };

    let index = service::create_gallery(&mut store, draft)?;
    store.save(file)?;

    println!(
        "{} {} ({})",
        "Gallery created:".green().bold(),
        store.gallery(index).expect("just created").name,
        index + 1
    );
    Ok(())
}

fn list(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let store = MuseumStore::load(file)?;

    if store.galleries().is_empty() {
        println!("{}", "No galleries yet.".yellow());
        return Ok(());
    }

    println!("{}", "Galleries:".cyan().bold());
    for (i, gallery) in store.galleries().iter().enumerate() {
        println!(
            "  [{}] {} ({} exhibits)",
            i + 1,
            gallery.name,
            gallery.len()
        );
    }
    Ok(())
}

fn show(file: &Path, number: usize) -> Result<(), Box<dyn std::error::Error>> {
    let store = MuseumStore::load(file)?;

    match store.gallery(index_from_number(number)) {
        Some(gallery) => println!("{}", gallery.describe(store.exhibits())),
        None => println!("{} {}.", "No gallery with number".yellow(), number),
    }
    Ok(())
}

fn add(
    file: &Path,
    number: usize,
    exhibit_id: u64,
    yes: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = MuseumStore::load(file)?;

    let outcome = service::add_to_gallery(
        &mut store,
        index_from_number(number),
        exhibit_id,
        |exhibit| {
            if yes {
                return true;
            }
            println!(
                "{} \"{}\" {}",
                "Exhibit".yellow(),
                exhibit.title,
                "is currently on display.".yellow()
            );
            prompt::confirm("Add it to this gallery anyway?").unwrap_or(false)
        },
    );

    report(outcome);
    if outcome.changed() {
        store.save(file)?;
    }
    Ok(())
}

fn remove(
    file: &Path,
    number: usize,
    exhibit_id: u64,
    yes: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = MuseumStore::load(file)?;

    let outcome = service::remove_from_gallery(
        &mut store,
        index_from_number(number),
        exhibit_id,
        || {
            if yes {
                return true;
            }
            prompt::confirm(&format!(
                "Remove exhibit {} from this gallery?",
                exhibit_id
            ))
            .unwrap_or(false)
        },
    );

    report(outcome);
    if outcome.changed() {
        store.save(file)?;
    }
    Ok(())
}

/// Gallery numbers are 1-based in the CLI; 0 maps to an out-of-range index.
fn index_from_number(number: usize) -> usize {
    number.checked_sub(1).unwrap_or(usize::MAX)
}

fn report(outcome: MembershipOutcome) {
    if outcome.changed() {
        println!("{}", outcome.label().green());
    } else {
        println!("{}", outcome.label().yellow());
    }
}
