//! Inventory service operations.
//!
//! Stateless functions mediating between the CLI flows and the store.
//! Confirmation of destructive or surprising steps is an injected closure,
//! never an interactive read inside the core, so every flow is testable.

use crate::error::Result;
use crate::exhibit::{Exhibit, ExhibitDraft, ExhibitUpdate};
use crate::gallery::{Gallery, GalleryDraft};
use crate::store::MuseumStore;

use super::outcome::{MembershipOutcome, UpdateOutcome};

/// Catalogue a new exhibit and return its assigned id.
pub fn add_exhibit(store: &mut MuseumStore, draft: ExhibitDraft) -> u64 {
    store.create_exhibit(draft).id()
}

/// Case-insensitive substring search across title, creator, year,
/// description, and status.
///
/// Returns the first match in store order - not all matches. That mirrors
/// the historical behavior of the search loop and is kept deliberately.
pub fn search<'a>(store: &'a MuseumStore, term: &str) -> Option<&'a Exhibit> {
    let needle = term.to_lowercase();
    store.exhibits().iter().find(|exhibit| exhibit.matches(&needle))
}

/// Apply a partial update to the exhibit with the given id.
pub fn update_exhibit(store: &mut MuseumStore, id: u64, update: ExhibitUpdate) -> UpdateOutcome {
    match store.exhibit_by_id_mut(id) {
        Some(exhibit) => {
            exhibit.apply(update);
            UpdateOutcome::Updated
        }
        None => UpdateOutcome::NotFound,
    }
}

/// Create a gallery and return its index in the store's gallery list.
///
/// Fails with a Validation error on an empty name; the caller re-prompts or
/// aborts.
pub fn create_gallery(store: &mut MuseumStore, draft: GalleryDraft) -> Result<usize> {
    let gallery = Gallery::new(draft)?;
    Ok(store.add_gallery(gallery))
}

/// Add an exhibit to a gallery.
///
/// If the exhibit is currently on display, `confirm` is consulted before
/// anything changes - a gallery may reference an already-displayed item, but
/// the caller is warned against accidental double staging. Membership is
/// checked first, so no confirmation fires for a no-op.
pub fn add_to_gallery(
    store: &mut MuseumStore,
    gallery_index: usize,
    exhibit_id: u64,
    confirm: impl FnOnce(&Exhibit) -> bool,
) -> MembershipOutcome {
    let needs_confirmation = match store.exhibit_by_id(exhibit_id) {
        Some(exhibit) => exhibit.status().is_on_display(),
        None => return MembershipOutcome::ExhibitNotFound,
    };
    match store.gallery(gallery_index) {
        Some(gallery) if gallery.contains(exhibit_id) => {
            return MembershipOutcome::AlreadyMember;
        }
        Some(_) => {}
        None => return MembershipOutcome::GalleryNotFound,
    }
    if needs_confirmation {
        let exhibit = store.exhibit_by_id(exhibit_id).expect("checked above");
        if !confirm(exhibit) {
            return MembershipOutcome::Declined;
        }
    }

    let gallery = store.gallery_mut(gallery_index).expect("checked above");
    gallery.add_member(exhibit_id);
    MembershipOutcome::Added
}

/// Remove an exhibit from a gallery.
///
/// Removal always requires confirmation; without it the membership stays
/// untouched. Works on the raw id, so dangling references can be cleaned up.
pub fn remove_from_gallery(
    store: &mut MuseumStore,
    gallery_index: usize,
    exhibit_id: u64,
    confirm: impl FnOnce() -> bool,
) -> MembershipOutcome {
    match store.gallery(gallery_index) {
        Some(gallery) if !gallery.contains(exhibit_id) => {
            return MembershipOutcome::NotAMember;
        }
        Some(_) => {}
        None => return MembershipOutcome::GalleryNotFound,
    }
    if !confirm() {
        return MembershipOutcome::Declined;
    }

    let gallery = store.gallery_mut(gallery_index).expect("checked above");
    gallery.remove_member(exhibit_id);
    MembershipOutcome::Removed
}
