//! Inventory store: aggregate root and its JSON persistence.
//!
//! The store owns all exhibits and galleries, enforces id/uid uniqueness,
//! and round-trips to a single pretty-printed JSON document:
//!
//! ```text
//! museum_exhibits.json      # envelope: {format_version, saved_at, exhibits, galleries}
//! ```
//!
//! Older files written as a flat exhibit array still load; see
//! [`StoreDocument::decode`].

mod document;
mod inventory;
mod persistence;

pub use document::{ExhibitRecord, GalleryRecord, StoreDocument, MUSEUM_FORMAT_VERSION};
pub use inventory::MuseumStore;
pub use persistence::DEFAULT_STORE_FILE;
