//! Gallery entity: a named curated subset referencing exhibits by id.
//!
//! A gallery only stores references, not the exhibits themselves, so a
//! member id may dangle (for example after loading a hand-edited file).
//! Rendering reports such ids individually instead of failing.

use indexmap::IndexSet;

use crate::error::{MuseumError, Result};
use crate::exhibit::Exhibit;

/// Fields collected when creating a gallery.
#[derive(Debug, Clone, Default)]
pub struct GalleryDraft {
    pub name: String,
    pub start: String,
    pub end: String,
    pub location: String,
}

/// A named curated collection of exhibits.
///
/// Membership is ordered (insertion order is the display order) and
/// duplicate-free by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    pub name: String,
    pub start: String,
    pub end: String,
    pub location: String,
    exhibit_ids: IndexSet<u64>,
}

impl Gallery {
    /// Create an empty gallery; the name must not be blank.
    pub fn new(draft: GalleryDraft) -> Result<Self> {
        if draft.name.trim().is_empty() {
            return Err(MuseumError::Validation(
                "Gallery name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            name: draft.name,
            start: draft.start,
            end: draft.end,
            location: draft.location,
            exhibit_ids: IndexSet::new(),
        })
    }

    /// Rehydrate a gallery from persisted fields, keeping membership order
    /// and silently dropping duplicate ids.
    pub(crate) fn from_parts(
        name: String,
        start: String,
        end: String,
        location: String,
        exhibit_ids: impl IntoIterator<Item = u64>,
    ) -> Self {
        Self {
            name,
            start,
            end,
            location,
            exhibit_ids: exhibit_ids.into_iter().collect(),
        }
    }

    /// Member ids in display order.
    pub fn exhibit_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.exhibit_ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.exhibit_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exhibit_ids.is_empty()
    }

    pub fn contains(&self, exhibit_id: u64) -> bool {
        self.exhibit_ids.contains(&exhibit_id)
    }

    /// Append a member id; returns false if it was already present.
    pub fn add_member(&mut self, exhibit_id: u64) -> bool {
        self.exhibit_ids.insert(exhibit_id)
    }

    /// Remove a member id, preserving the order of the remaining members;
    /// returns false if it was not a member.
    pub fn remove_member(&mut self, exhibit_id: u64) -> bool {
        self.exhibit_ids.shift_remove(&exhibit_id)
    }

    /// Multi-line rendering with member titles resolved against the store's
    /// exhibit list. Dangling ids are reported per line, not treated as an
    /// error.
    pub fn describe(&self, exhibits: &[Exhibit]) -> String {
        let mut out = format!(
            "Galerie: {}\n Laufzeit: {} – {}\n Ort: {}\n Exponate ({}):\n",
            self.name,
            self.start,
            self.end,
            self.location,
            self.exhibit_ids.len()
        );
        for id in &self.exhibit_ids {
            match exhibits.iter().find(|ex| ex.id() == *id) {
                Some(exhibit) => {
                    out.push_str(&format!("  [{}] {}\n", id, exhibit.title));
                }
                None => {
                    out.push_str(&format!("  [{}] (nicht im Bestand gefunden)\n", id));
                }
            }
        }
        out
    }
}
