//! The inventory store: aggregate root owning exhibits and galleries.

use std::collections::HashSet;

use crate::error::{MuseumError, Result};
use crate::exhibit::{Exhibit, ExhibitDraft};
use crate::gallery::Gallery;

/// Owns all exhibits and galleries and enforces identity uniqueness.
///
/// The numeric id counter lives here, not in a process-wide static: it is
/// seeded past the highest id seen while loading, so reused inventory files
/// never hand out colliding ids.
#[derive(Debug, Clone, Default)]
pub struct MuseumStore {
    exhibits: Vec<Exhibit>,
    galleries: Vec<Gallery>,
    used_ids: HashSet<u64>,
    used_uids: HashSet<String>,
    next_id: u64,
}

impl MuseumStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            exhibits: Vec::new(),
            galleries: Vec::new(),
            used_ids: HashSet::new(),
            used_uids: HashSet::new(),
            next_id: 1,
        }
    }

    /// Exhibits in insertion order.
    pub fn exhibits(&self) -> &[Exhibit] {
        &self.exhibits
    }

    /// Galleries in insertion order.
    pub fn galleries(&self) -> &[Gallery] {
        &self.galleries
    }

    pub fn gallery(&self, index: usize) -> Option<&Gallery> {
        self.galleries.get(index)
    }

    pub fn gallery_mut(&mut self, index: usize) -> Option<&mut Gallery> {
        self.galleries.get_mut(index)
    }

    /// Catalogue a new exhibit: allocates a fresh id and a collision-checked
    /// uid, inserts, and returns a reference to the stored exhibit.
    pub fn create_exhibit(&mut self, draft: ExhibitDraft) -> &Exhibit {
        let id = self.allocate_id();
        let uid = self.generate_uid();
        let exhibit = Exhibit::new(id, uid.clone(), draft);

        self.used_ids.insert(id);
        self.used_uids.insert(uid);
        self.exhibits.push(exhibit);
        self.exhibits.last().expect("exhibit was just pushed")
    }

    /// Insert an exhibit that already carries its identity (rehydration).
    ///
    /// Uniqueness is checked before any mutation: on a duplicate id or uid
    /// the store is left untouched. The id counter is advanced past the
    /// inserted id.
    pub fn insert_exhibit(&mut self, exhibit: Exhibit) -> Result<()> {
        if self.used_ids.contains(&exhibit.id()) {
            return Err(MuseumError::DuplicateId(exhibit.id()));
        }
        if self.used_uids.contains(exhibit.uid()) {
            return Err(MuseumError::DuplicateUid(exhibit.uid().to_string()));
        }

        self.used_ids.insert(exhibit.id());
        self.used_uids.insert(exhibit.uid().to_string());
        if exhibit.id() >= self.next_id {
            self.next_id = exhibit.id() + 1;
        }
        self.exhibits.push(exhibit);
        Ok(())
    }

    /// Linear lookup by id; absence is an outcome, not an error.
    pub fn exhibit_by_id(&self, id: u64) -> Option<&Exhibit> {
        self.exhibits.iter().find(|ex| ex.id() == id)
    }

    pub fn exhibit_by_id_mut(&mut self, id: u64) -> Option<&mut Exhibit> {
        self.exhibits.iter_mut().find(|ex| ex.id() == id)
    }

    /// Append a gallery; names are not required to be unique.
    pub fn add_gallery(&mut self, gallery: Gallery) -> usize {
        self.galleries.push(gallery);
        self.galleries.len() - 1
    }

    /// Allocate the next numeric id.
    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Generate a random uid not yet present in the store.
    fn generate_uid(&self) -> String {
        loop {
            let uid = format!("{:016x}", fastrand::u64(..));
            if !self.used_uids.contains(&uid) {
                return uid;
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn next_id(&self) -> u64 {
        self.next_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exhibit::{ExhibitStatus, Year};

    fn draft(title: &str) -> ExhibitDraft {
        ExhibitDraft {
            title: title.to_string(),
            creator: "Unbekannt".to_string(),
            year: Year::Numeric(1900),
            description: String::new(),
            status: ExhibitStatus::InStorage,
        }
    }

    #[test]
    fn test_create_assigns_sequential_ids_and_unique_uids() {
        let mut store = MuseumStore::new();

        let first = store.create_exhibit(draft("Erstes")).id();
        let second = store.create_exhibit(draft("Zweites")).id();

        assert_eq!(first, 1);
        assert_eq!(second, 2);

        let uids: HashSet<_> = store.exhibits().iter().map(|ex| ex.uid()).collect();
        assert_eq!(uids.len(), 2);
    }

    #[test]
    fn test_insert_rejects_duplicate_id_without_mutation() {
        let mut store = MuseumStore::new();
        let existing = store.create_exhibit(draft("Erstes")).clone();

        let clash = Exhibit::new(existing.id(), "otheruid".to_string(), draft("Zweites"));
        let result = store.insert_exhibit(clash);

        assert!(matches!(result, Err(MuseumError::DuplicateId(_))));
        assert_eq!(store.exhibits().len(), 1);
        assert!(!store.used_uids.contains("otheruid"));
    }

    #[test]
    fn test_insert_rejects_duplicate_uid() {
        let mut store = MuseumStore::new();
        let existing = store.create_exhibit(draft("Erstes")).clone();

        let clash = Exhibit::new(999, existing.uid().to_string(), draft("Zweites"));
        let result = store.insert_exhibit(clash);

        assert!(matches!(result, Err(MuseumError::DuplicateUid(_))));
        assert_eq!(store.exhibits().len(), 1);
        assert!(!store.used_ids.contains(&999));
    }

    #[test]
    fn test_insert_seeds_counter_past_existing_ids() {
        let mut store = MuseumStore::new();
        store
            .insert_exhibit(Exhibit::new(41, "uid41".to_string(), draft("Altbestand")))
            .expect("insert");

        assert_eq!(store.next_id(), 42);
        assert_eq!(store.create_exhibit(draft("Neuzugang")).id(), 42);
    }

    #[test]
    fn test_lookup_miss_is_none() {
        let store = MuseumStore::new();
        assert!(store.exhibit_by_id(1).is_none());
    }
}
