//! Persisted document shapes and the versioned decoder.
//!
//! One shape is written: the envelope object wrapping exhibits and galleries
//! under named keys, tagged with a format version and save timestamp. Two
//! shapes are read: the envelope, and the legacy flat exhibit array that
//! earlier versions of the app wrote. Unrecognized fields are rejected
//! explicitly; legacy key names are mapped via serde aliases.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{MuseumError, Result};
use crate::exhibit::{Exhibit, ExhibitDraft, ExhibitStatus, Year};
use crate::gallery::Gallery;

use super::inventory::MuseumStore;

/// Current version of the inventory file format.
pub const MUSEUM_FORMAT_VERSION: &str = "2.0.0";

/// Persisted form of an exhibit.
///
/// `_id` and `_uid` are optional on read: the earliest saved shapes predate
/// both fields. `kh_epoche` is written for readability but recomputed from
/// the year on load, never trusted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExhibitRecord {
    #[serde(rename = "_uid", alias = "uid", default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(alias = "name")]
    pub title: String,
    pub creator: String,
    pub year: Year,
    pub description: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kh_epoche: Option<String>,
}

impl ExhibitRecord {
    fn from_exhibit(exhibit: &Exhibit) -> Self {
        Self {
            uid: Some(exhibit.uid().to_string()),
            id: Some(exhibit.id()),
            title: exhibit.title.clone(),
            creator: exhibit.creator.clone(),
            year: exhibit.year().clone(),
            description: exhibit.description.clone(),
            status: exhibit.status().label().to_string(),
            kh_epoche: Some(exhibit.period().label().to_string()),
        }
    }
}

/// Persisted form of a gallery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GalleryRecord {
    pub name: String,
    pub start: String,
    pub end: String,
    pub location: String,
    #[serde(default)]
    pub exhibit_ids: Vec<u64>,
}

impl GalleryRecord {
    fn from_gallery(gallery: &Gallery) -> Self {
        Self {
            name: gallery.name.clone(),
            start: gallery.start.clone(),
            end: gallery.end.clone(),
            location: gallery.location.clone(),
            exhibit_ids: gallery.exhibit_ids().collect(),
        }
    }
}

/// The envelope document wrapping both collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreDocument {
    #[serde(default)]
    pub format_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub exhibits: Vec<ExhibitRecord>,
    #[serde(default)]
    pub galleries: Vec<GalleryRecord>,
}

impl StoreDocument {
    /// Snapshot a store into the envelope write shape.
    pub fn from_store(store: &MuseumStore) -> Self {
        Self {
            format_version: MUSEUM_FORMAT_VERSION.to_string(),
            saved_at: Some(Utc::now()),
            exhibits: store.exhibits().iter().map(ExhibitRecord::from_exhibit).collect(),
            galleries: store.galleries().iter().map(GalleryRecord::from_gallery).collect(),
        }
    }

    /// Decode either supported read shape from a parsed JSON value:
    /// the envelope object, or the legacy flat exhibit array.
    pub fn decode(value: Value) -> Result<Self> {
        if value.is_array() {
            let exhibits: Vec<ExhibitRecord> = serde_json::from_value(value)?;
            return Ok(Self {
                format_version: String::new(),
                saved_at: None,
                exhibits,
                galleries: Vec::new(),
            });
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Rehydrate a store from the document.
    ///
    /// Ids and uids are reused where present; records without them get fresh
    /// allocations after the id counter has been seeded past every explicit
    /// id in the file. Period labels in the file are discarded and
    /// recomputed; unrecognized status labels degrade to `Ungewiss`.
    pub fn into_store(self) -> Result<MuseumStore> {
        let mut store = MuseumStore::new();

        let mut next_id = self
            .exhibits
            .iter()
            .filter_map(|record| record.id)
            .max()
            .map_or(1, |max| max + 1);
        let explicit_uids: HashSet<String> =
            self.exhibits.iter().filter_map(|record| record.uid.clone()).collect();

        for record in self.exhibits {
            let id = match record.id {
                Some(id) => id,
                None => {
                    let id = next_id;
                    next_id += 1;
                    id
                }
            };
            let uid = match record.uid {
                Some(uid) => uid,
                None => generate_uid(&explicit_uids),
            };
            let status = ExhibitStatus::from_label(&record.status).unwrap_or_default();

            let exhibit = Exhibit::new(
                id,
                uid,
                ExhibitDraft {
                    title: record.title,
                    creator: record.creator,
                    year: record.year,
                    description: record.description,
                    status,
                },
            );
            store.insert_exhibit(exhibit).map_err(|e| {
                MuseumError::Persistence(format!("Invalid inventory file: {}", e))
            })?;
        }

        for record in self.galleries {
            store.add_gallery(Gallery::from_parts(
                record.name,
                record.start,
                record.end,
                record.location,
                record.exhibit_ids,
            ));
        }

        Ok(store)
    }
}

/// Random uid avoiding every uid named explicitly in the file.
fn generate_uid(taken: &HashSet<String>) -> String {
    loop {
        let uid = format!("{:016x}", fastrand::u64(..));
        if !taken.contains(&uid) {
            return uid;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exhibit::Period;
    use serde_json::json;

    #[test]
    fn test_decode_envelope() {
        let value = json!({
            "format_version": "2.0.0",
            "exhibits": [{
                "_uid": "abc123", "_id": 4, "title": "Der Kuss", "creator": "Klimt",
                "year": 1908, "description": "", "status": "Ausgestellt",
                "kh_epoche": "Moderne"
            }],
            "galleries": [{
                "name": "Wien 1900", "start": "2026-01-01", "end": "2026-06-30",
                "location": "Saal 3", "exhibit_ids": [4]
            }]
        });

        let store = StoreDocument::decode(value)
            .and_then(StoreDocument::into_store)
            .expect("decode envelope");

        assert_eq!(store.exhibits().len(), 1);
        let exhibit = store.exhibit_by_id(4).expect("exhibit 4");
        assert_eq!(exhibit.uid(), "abc123");
        assert_eq!(exhibit.period(), Period::Modern);
        assert_eq!(store.galleries().len(), 1);
        assert_eq!(store.galleries()[0].exhibit_ids().collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn test_decode_legacy_flat_array() {
        // Earliest shape: python __dict__ dumps with `id`/`name` keys,
        // no uid, stringly-typed year
        let value = json!([{
            "id": 1, "name": "Mona Lisa", "creator": "Leonardo da Vinci",
            "year": "1503", "description": "Porträt", "status": "Ausgestellt",
            "kh_epoche": "Renaissance"
        }]);

        let store = StoreDocument::decode(value)
            .and_then(StoreDocument::into_store)
            .expect("decode legacy");

        let exhibit = store.exhibit_by_id(1).expect("exhibit 1");
        assert_eq!(exhibit.title, "Mona Lisa");
        // stringly year is normalized, so the period is recomputed
        assert_eq!(exhibit.year(), &Year::Numeric(1503));
        assert_eq!(exhibit.period(), Period::Renaissance);
        assert!(!exhibit.uid().is_empty());
    }

    #[test]
    fn test_legacy_and_envelope_produce_same_exhibits() {
        let record = json!({
            "_uid": "feed01", "_id": 2, "title": "Guernica", "creator": "Picasso",
            "year": 1937, "description": "", "status": "Im Lager"
        });
        let legacy = StoreDocument::decode(json!([record]))
            .and_then(StoreDocument::into_store)
            .expect("legacy");
        let envelope = StoreDocument::decode(json!({"exhibits": [record], "galleries": []}))
            .and_then(StoreDocument::into_store)
            .expect("envelope");

        assert_eq!(legacy.exhibits(), envelope.exhibits());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let value = json!({
            "exhibits": [],
            "galleries": [],
            "curator_notes": "should not be absorbed"
        });
        assert!(StoreDocument::decode(value).is_err());
    }

    #[test]
    fn test_unknown_status_degrades_to_uncertain() {
        let value = json!([{
            "id": 1, "name": "Torso", "creator": "Unbekannt", "year": -200,
            "description": "", "status": "verliehen"
        }]);

        let store = StoreDocument::decode(value)
            .and_then(StoreDocument::into_store)
            .expect("decode");
        assert_eq!(
            store.exhibit_by_id(1).expect("exhibit").status(),
            ExhibitStatus::Uncertain
        );
    }

    #[test]
    fn test_duplicate_id_in_file_is_persistence_error() {
        let value = json!([
            {"id": 1, "name": "A", "creator": "", "year": 1900, "description": "", "status": "Im Lager"},
            {"id": 1, "name": "B", "creator": "", "year": 1901, "description": "", "status": "Im Lager"}
        ]);

        let result = StoreDocument::decode(value).and_then(StoreDocument::into_store);
        assert!(matches!(result, Err(MuseumError::Persistence(_))));
    }

    #[test]
    fn test_records_without_ids_get_fresh_allocations() {
        let value = json!([
            {"id": 7, "name": "Alt", "creator": "", "year": 1800, "description": "", "status": "Im Lager"},
            {"name": "Neu", "creator": "", "year": 1900, "description": "", "status": "Im Lager"}
        ]);

        let store = StoreDocument::decode(value)
            .and_then(StoreDocument::into_store)
            .expect("decode");

        // fresh id allocated past the highest explicit id
        assert!(store.exhibit_by_id(8).is_some());
    }
}
