//! The exhibit entity: a catalogued museum item.

use serde::{Deserialize, Serialize};

use super::period::{classify, Period};
use super::status::ExhibitStatus;

/// Year of creation of an exhibit.
///
/// Non-numeric input ("ca. 1650", "unbekannt") is retained as text instead of
/// being rejected; such exhibits classify as [`Period::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Numeric(i32),
    Text(String),
}

impl Year {
    /// Parse user input: integers become numeric, everything else is kept
    /// as the original string.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.parse::<i32>() {
            Ok(y) => Year::Numeric(y),
            Err(_) => Year::Text(input.to_string()),
        }
    }

    /// Numeric value, if the year is an integer.
    pub fn as_number(&self) -> Option<i32> {
        match self {
            Year::Numeric(y) => Some(*y),
            Year::Text(_) => None,
        }
    }

    /// Coerce textual years that parse as integers to numeric.
    ///
    /// Older inventory files stored every year as a string; normalizing on
    /// rehydration keeps period classification working for them.
    pub fn normalized(self) -> Self {
        match self {
            Year::Text(ref s) => match s.trim().parse::<i32>() {
                Ok(y) => Year::Numeric(y),
                Err(_) => self,
            },
            numeric => numeric,
        }
    }
}

impl std::fmt::Display for Year {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Year::Numeric(y) => write!(f, "{}", y),
            Year::Text(s) => f.write_str(s),
        }
    }
}

/// Fields collected when cataloguing a new exhibit.
///
/// Identity (`id`, `uid`) is assigned by the store, not the caller.
#[derive(Debug, Clone)]
pub struct ExhibitDraft {
    pub title: String,
    pub creator: String,
    pub year: Year,
    pub description: String,
    pub status: ExhibitStatus,
}

/// Partial update of an exhibit's mutable fields.
///
/// `None` keeps the current value ("leave unchanged if input empty" in the
/// edit flow). Identity is never part of an update.
#[derive(Debug, Clone, Default)]
pub struct ExhibitUpdate {
    pub title: Option<String>,
    pub creator: Option<String>,
    pub year: Option<Year>,
    pub description: Option<String>,
    pub status: Option<ExhibitStatus>,
}

impl ExhibitUpdate {
    /// An update that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.creator.is_none()
            && self.year.is_none()
            && self.description.is_none()
            && self.status.is_none()
    }
}

/// A catalogued museum item.
///
/// `id` and `uid` are fixed at creation; `period` is derived from `year` and
/// recomputed on every change, so the two can never drift apart.
#[derive(Debug, Clone, PartialEq)]
pub struct Exhibit {
    id: u64,
    uid: String,
    pub title: String,
    pub creator: String,
    year: Year,
    pub description: String,
    status: ExhibitStatus,
    period: Period,
}

impl Exhibit {
    /// Build an exhibit from a draft under a store-assigned identity.
    pub fn new(id: u64, uid: String, draft: ExhibitDraft) -> Self {
        let year = draft.year.normalized();
        let period = classify(&year);
        Self {
            id,
            uid,
            title: draft.title,
            creator: draft.creator,
            year,
            description: draft.description,
            status: draft.status,
            period,
        }
    }

    /// Store-wide numeric id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Stable random identifier, independent of id renumbering.
    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn year(&self) -> &Year {
        &self.year
    }

    pub fn status(&self) -> ExhibitStatus {
        self.status
    }

    /// Derived art-historical period, always consistent with `year`.
    pub fn period(&self) -> Period {
        self.period
    }

    pub fn set_year(&mut self, year: Year) {
        self.year = year.normalized();
        self.period = classify(&self.year);
    }

    pub fn set_status(&mut self, status: ExhibitStatus) {
        self.status = status;
    }

    /// Apply a partial update; untouched fields keep their value, identity
    /// never changes, the period is recomputed.
    pub fn apply(&mut self, update: ExhibitUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(creator) = update.creator {
            self.creator = creator;
        }
        if let Some(year) = update.year {
            self.set_year(year);
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
    }

    /// Case-insensitive substring match across all descriptive fields.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.creator.to_lowercase().contains(needle)
            || self.year.to_string().to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.status.label().to_lowercase().contains(needle)
    }

    /// Multi-line human-readable rendering.
    pub fn describe(&self) -> String {
        format!(
            "ID: {}\n Titel: {}\n Schöpfer: {}\n Jahr: {}\n Beschreibung: {}\n Status: {}\n Kunsthistorische Epoche: {}\n",
            self.id, self.title, self.creator, self.year, self.description, self.status, self.period
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ExhibitDraft {
        ExhibitDraft {
            title: "Die Nachtwache".to_string(),
            creator: "Rembrandt".to_string(),
            year: Year::parse("1642"),
            description: "Gruppenporträt der Amsterdamer Schützengilde".to_string(),
            status: ExhibitStatus::OnDisplay,
        }
    }

    #[test]
    fn test_year_parse() {
        assert_eq!(Year::parse("1642"), Year::Numeric(1642));
        assert_eq!(Year::parse(" -500 "), Year::Numeric(-500));
        assert_eq!(
            Year::parse("ca. 1650"),
            Year::Text("ca. 1650".to_string())
        );
    }

    #[test]
    fn test_year_normalized() {
        assert_eq!(
            Year::Text("1905".to_string()).normalized(),
            Year::Numeric(1905)
        );
        assert_eq!(
            Year::Text("unbekannt".to_string()).normalized(),
            Year::Text("unbekannt".to_string())
        );
    }

    #[test]
    fn test_new_exhibit_derives_period() {
        let exhibit = Exhibit::new(1, "ab12".to_string(), draft());
        assert_eq!(exhibit.period(), Period::Baroque);
        assert_eq!(exhibit.id(), 1);
        assert_eq!(exhibit.uid(), "ab12");
    }

    #[test]
    fn test_update_keeps_unset_fields_and_identity() {
        let mut exhibit = Exhibit::new(7, "deadbeef".to_string(), draft());

        let update = ExhibitUpdate {
            creator: Some("Rembrandt van Rijn".to_string()),
            ..ExhibitUpdate::new()
        };
        exhibit.apply(update);

        assert_eq!(exhibit.creator, "Rembrandt van Rijn");
        assert_eq!(exhibit.title, "Die Nachtwache");
        assert_eq!(exhibit.id(), 7);
        assert_eq!(exhibit.uid(), "deadbeef");
        assert_eq!(exhibit.period(), Period::Baroque);
    }

    #[test]
    fn test_update_to_textual_year_resets_period() {
        let mut exhibit = Exhibit::new(1, "ab12".to_string(), draft());

        let update = ExhibitUpdate {
            year: Some(Year::parse("frühes 17. Jh.")),
            ..ExhibitUpdate::new()
        };
        exhibit.apply(update);

        assert_eq!(
            exhibit.year(),
            &Year::Text("frühes 17. Jh.".to_string())
        );
        assert_eq!(exhibit.period(), Period::Unknown);
        assert_eq!(exhibit.id(), 1);
        assert_eq!(exhibit.uid(), "ab12");
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let exhibit = Exhibit::new(1, "ab12".to_string(), draft());
        assert!(exhibit.matches("rembrandt"));
        assert!(exhibit.matches("1642"));
        assert!(exhibit.matches("ausgestellt"));
        assert!(!exhibit.matches("vermeer"));
    }

    #[test]
    fn test_describe_contains_all_fields() {
        let exhibit = Exhibit::new(3, "ab12".to_string(), draft());
        let text = exhibit.describe();

        assert!(text.contains("ID: 3"));
        assert!(text.contains("Titel: Die Nachtwache"));
        assert!(text.contains("Jahr: 1642"));
        assert!(text.contains("Status: Ausgestellt"));
        assert!(text.contains("Kunsthistorische Epoche: Barock"));
    }

    #[test]
    fn test_empty_update_is_noop() {
        let mut exhibit = Exhibit::new(1, "ab12".to_string(), draft());
        let before = exhibit.clone();

        assert!(ExhibitUpdate::new().is_empty());
        exhibit.apply(ExhibitUpdate::new());

        assert_eq!(exhibit, before);
    }
}
