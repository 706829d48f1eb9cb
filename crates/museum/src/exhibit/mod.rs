//! Exhibit entity: identity, descriptive fields, and derived period.
//!
//! An exhibit carries two identifiers: a store-scoped numeric `id` used for
//! lookups and gallery membership, and a random string `uid` that stays
//! stable even if ids are ever renumbered. Its art-historical period is
//! derived from the year and recomputed on every change.

mod period;
mod record;
mod status;

pub use period::{classify, Period};
pub use record::{Exhibit, ExhibitDraft, ExhibitUpdate, Year};
pub use status::ExhibitStatus;
