//! Inventory service: the operations layer between CLI flows and the store.
//!
//! Every operation is a stateless function over a `MuseumStore`; multi-step
//! concerns like confirmation prompts enter as injected closures.

mod flows;
mod outcome;
mod summary;

pub use flows::{
    add_exhibit, add_to_gallery, create_gallery, remove_from_gallery, search, update_exhibit,
};
pub use outcome::{MembershipOutcome, UpdateOutcome};
pub use summary::{summarize, InventorySummary, StatusCounts};
