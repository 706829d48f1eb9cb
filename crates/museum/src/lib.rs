//! Museum: core library for a CLI-driven museum inventory manager.
//!
//! Exhibits and galleries live in a single in-memory store that round-trips
//! to one pretty-printed JSON file. The store enforces id/uid uniqueness,
//! derives each exhibit's art-historical period from its year, and loads
//! both the current envelope format and the legacy flat-array format.
//!
//! # Example
//!
//! ```no_run
//! use museum::{service, ExhibitDraft, ExhibitStatus, MuseumStore, Year};
//!
//! let mut store = MuseumStore::load("museum_exhibits.json").unwrap();
//!
//! let id = service::add_exhibit(&mut store, ExhibitDraft {
//!     title: "Die Nachtwache".into(),
//!     creator: "Rembrandt".into(),
//!     year: Year::parse("1642"),
//!     description: "Gruppenporträt".into(),
//!     status: ExhibitStatus::OnDisplay,
//! });
//!
//! println!("Catalogued as id {}", id);
//! store.save("museum_exhibits.json").unwrap();
//! ```

pub mod error;
pub mod exhibit;
pub mod gallery;
pub mod service;
pub mod store;

pub use error::{MuseumError, Result};
pub use exhibit::{classify, Exhibit, ExhibitDraft, ExhibitStatus, ExhibitUpdate, Period, Year};
pub use gallery::{Gallery, GalleryDraft};
pub use service::{InventorySummary, MembershipOutcome, UpdateOutcome};
pub use store::{MuseumStore, StoreDocument, DEFAULT_STORE_FILE, MUSEUM_FORMAT_VERSION};
