//! Inventory summary statistics.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::store::MuseumStore;

/// Counts of exhibits by display status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub in_storage: usize,
    pub on_display: usize,
    pub uncertain: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.in_storage + self.on_display + self.uncertain
    }
}

/// Snapshot of the inventory for the `status` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventorySummary {
    /// Total number of exhibits.
    pub total_exhibits: usize,
    /// Total number of galleries.
    pub total_galleries: usize,
    /// Exhibits by display status.
    pub by_status: StatusCounts,
    /// Exhibits by derived period label.
    pub by_period: HashMap<String, usize>,
}

/// Summarize a store.
pub fn summarize(store: &MuseumStore) -> InventorySummary {
    use crate::exhibit::ExhibitStatus;

    let mut by_status = StatusCounts::default();
    let mut by_period: HashMap<String, usize> = HashMap::new();

    for exhibit in store.exhibits() {
        match exhibit.status() {
            ExhibitStatus::InStorage => by_status.in_storage += 1,
            ExhibitStatus::OnDisplay => by_status.on_display += 1,
            ExhibitStatus::Uncertain => by_status.uncertain += 1,
        }
        *by_period.entry(exhibit.period().label().to_string()).or_insert(0) += 1;
    }

    InventorySummary {
        total_exhibits: store.exhibits().len(),
        total_galleries: store.galleries().len(),
        by_status,
        by_period,
    }
}
