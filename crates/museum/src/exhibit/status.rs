//! Display status of an exhibit.

use serde::{Deserialize, Serialize};

/// Where an exhibit currently is.
///
/// Closed set; the serialized form is the German label. Older inventory files
/// carried free-text status strings, so rehydration goes through the lenient
/// [`ExhibitStatus::from_label`] instead of serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExhibitStatus {
    /// In the depot, not visible to visitors.
    #[serde(rename = "Im Lager")]
    InStorage,
    /// Currently part of a running exhibition.
    #[serde(rename = "Ausgestellt")]
    OnDisplay,
    /// Whereabouts not reliably recorded.
    #[serde(rename = "Ungewiss")]
    Uncertain,
}

impl ExhibitStatus {
    /// All statuses in selector order.
    pub const ALL: [ExhibitStatus; 3] = [
        ExhibitStatus::InStorage,
        ExhibitStatus::OnDisplay,
        ExhibitStatus::Uncertain,
    ];

    /// Get the display label (German, as persisted).
    pub fn label(&self) -> &'static str {
        match self {
            ExhibitStatus::InStorage => "Im Lager",
            ExhibitStatus::OnDisplay => "Ausgestellt",
            ExhibitStatus::Uncertain => "Ungewiss",
        }
    }

    /// Parse a persisted status label, case-insensitively.
    ///
    /// Accepts the German labels and the English variant names as aliases.
    /// Returns `None` for anything outside the set.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "im lager" | "instorage" | "in_storage" => Some(ExhibitStatus::InStorage),
            "ausgestellt" | "ondisplay" | "on_display" => Some(ExhibitStatus::OnDisplay),
            "ungewiss" | "uncertain" => Some(ExhibitStatus::Uncertain),
            _ => None,
        }
    }

    /// Returns true if the exhibit is staged in a running exhibition.
    pub fn is_on_display(&self) -> bool {
        matches!(self, ExhibitStatus::OnDisplay)
    }
}

impl Default for ExhibitStatus {
    fn default() -> Self {
        ExhibitStatus::Uncertain
    }
}

impl std::fmt::Display for ExhibitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
