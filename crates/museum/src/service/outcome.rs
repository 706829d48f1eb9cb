//! Outcome types for service operations.
//!
//! Not-found, already-member, and declined-confirmation are expected results
//! of interactive flows, not failures, so they are modeled as outcome enums
//! that callers report rather than as errors.

/// Result of an exhibit update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The exhibit was found and the update applied.
    Updated,
    /// No exhibit with the given id exists.
    NotFound,
}

impl UpdateOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, UpdateOutcome::Updated)
    }
}

/// Result of a gallery membership change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipOutcome {
    /// The exhibit was appended to the gallery.
    Added,
    /// The exhibit was already a member; nothing changed.
    AlreadyMember,
    /// The exhibit was removed from the gallery.
    Removed,
    /// The exhibit is not a member; nothing changed.
    NotAMember,
    /// No exhibit with the given id exists in the store.
    ExhibitNotFound,
    /// No gallery with the given index exists.
    GalleryNotFound,
    /// The confirmation callback declined; nothing changed.
    Declined,
}

impl MembershipOutcome {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            MembershipOutcome::Added => "Exhibit added to gallery",
            MembershipOutcome::AlreadyMember => "Exhibit is already in this gallery",
            MembershipOutcome::Removed => "Exhibit removed from gallery",
            MembershipOutcome::NotAMember => "Exhibit is not in this gallery",
            MembershipOutcome::ExhibitNotFound => "No exhibit with this id",
            MembershipOutcome::GalleryNotFound => "No gallery with this number",
            MembershipOutcome::Declined => "Cancelled, nothing changed",
        }
    }

    /// Returns true if the gallery's membership was mutated.
    pub fn changed(&self) -> bool {
        matches!(self, MembershipOutcome::Added | MembershipOutcome::Removed)
    }
}
