//! Historical period classification derived from an exhibit's year.

use serde::{Deserialize, Serialize};

use super::record::Year;

/// Art-historical period of an exhibit.
///
/// The serialized form is the German label shown in the CLI and written to
/// the inventory file; the value is always derived from the exhibit's year,
/// never entered directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "Zeitgenössische Kunst")]
    Contemporary,
    #[serde(rename = "Moderne")]
    Modern,
    #[serde(rename = "Realismus")]
    Realism,
    #[serde(rename = "Klassizismus / Romantik")]
    Classicism,
    #[serde(rename = "Barock")]
    Baroque,
    #[serde(rename = "Renaissance")]
    Renaissance,
    #[serde(rename = "Mittelalter")]
    Medieval,
    #[serde(rename = "Antike")]
    Antiquity,
    /// Year is non-numeric or outside every known range.
    #[serde(rename = "Unbekannt")]
    Unknown,
}

impl Period {
    /// Get the display label (German, as persisted).
    pub fn label(&self) -> &'static str {
        match self {
            Period::Contemporary => "Zeitgenössische Kunst",
            Period::Modern => "Moderne",
            Period::Realism => "Realismus",
            Period::Classicism => "Klassizismus / Romantik",
            Period::Baroque => "Barock",
            Period::Renaissance => "Renaissance",
            Period::Medieval => "Mittelalter",
            Period::Antiquity => "Antike",
            Period::Unknown => "Unbekannt",
        }
    }

    /// Returns true if the year could not be classified.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Period::Unknown)
    }
}

impl Default for Period {
    fn default() -> Self {
        Period::Unknown
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered classification table: (start inclusive, end exclusive, period).
/// First matching range wins; together the ranges cover -3000..2026.
const PERIOD_TABLE: [(i32, i32, Period); 8] = [
    (1945, 2026, Period::Contemporary),
    (1890, 1945, Period::Modern),
    (1848, 1890, Period::Realism),
    (1750, 1848, Period::Classicism),
    (1600, 1750, Period::Baroque),
    (1400, 1600, Period::Renaissance),
    (500, 1400, Period::Medieval),
    (-3000, 500, Period::Antiquity),
];

/// Classify a year into its art-historical period.
///
/// Pure function of the year alone: textual years and years outside every
/// range classify as [`Period::Unknown`].
pub fn classify(year: &Year) -> Period {
    if let Some(y) = year.as_number() {
        for (start, end, period) in PERIOD_TABLE {
            if start <= y && y < end {
                return period;
            }
        }
    }
    Period::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_years() {
        assert_eq!(classify(&Year::Numeric(2024)), Period::Contemporary);
        assert_eq!(classify(&Year::Numeric(1700)), Period::Baroque);
        assert_eq!(classify(&Year::Numeric(1889)), Period::Realism);
        assert_eq!(classify(&Year::Numeric(800)), Period::Medieval);
        assert_eq!(classify(&Year::Numeric(-500)), Period::Antiquity);
    }

    #[test]
    fn test_classify_boundaries_start_inclusive_end_exclusive() {
        // 1600 belongs to Barock, not Renaissance
        assert_eq!(classify(&Year::Numeric(1600)), Period::Baroque);
        assert_eq!(classify(&Year::Numeric(1599)), Period::Renaissance);
        assert_eq!(classify(&Year::Numeric(1945)), Period::Contemporary);
        assert_eq!(classify(&Year::Numeric(-3000)), Period::Antiquity);
    }

    #[test]
    fn test_classify_out_of_range() {
        assert_eq!(classify(&Year::Numeric(2026)), Period::Unknown);
        assert_eq!(classify(&Year::Numeric(-3001)), Period::Unknown);
    }

    #[test]
    fn test_classify_textual_year() {
        let year = Year::Text("ca. 17. Jahrhundert".to_string());
        assert_eq!(classify(&year), Period::Unknown);
        assert!(classify(&year).is_unknown());
    }

    #[test]
    fn test_period_labels() {
        assert_eq!(Period::Baroque.label(), "Barock");
        assert_eq!(Period::Contemporary.label(), "Zeitgenössische Kunst");
        assert_eq!(Period::Unknown.label(), "Unbekannt");
    }

    #[test]
    fn test_table_covers_domain_without_gaps() {
        for y in -3000..2026 {
            assert_ne!(
                classify(&Year::Numeric(y)),
                Period::Unknown,
                "year {} fell through the period table",
                y
            );
        }
    }
}
