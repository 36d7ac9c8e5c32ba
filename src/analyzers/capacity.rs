//! Shelter capacity versus counted homeless population.

use crate::records::{RegionCount, ShelterRecord};
use crate::report::{Section, group_thousands, group_thousands_signed};
use crate::stats::{group_sum, pct, sum_by};

/// Capacity per shelter type, sorted by beds descending.
pub struct TypeCapacity {
    pub shelter_type: String,
    pub beds: u32,
    pub share_pct: f64,
}

pub struct CapacityAnalysis {
    pub total_capacity: u32,
    pub total_homeless: u32,
    pub sheltered: u32,
    pub unsheltered: u32,
    pub utilization_pct: f64,
    /// People counted beyond available beds; negative means surplus beds.
    pub gap: i64,
    pub gap_pct: f64,
    pub by_type: Vec<TypeCapacity>,
}

impl CapacityAnalysis {
    pub fn from_tables(shelters: &[ShelterRecord], regions: &[RegionCount]) -> Self {
        let total_capacity = sum_by(shelters, |s| f64::from(s.capacity)) as u32;
        let total_homeless = sum_by(regions, |r| f64::from(r.total_count)) as u32;
        let sheltered = sum_by(regions, |r| f64::from(r.sheltered_count)) as u32;
        let unsheltered = sum_by(regions, |r| f64::from(r.unsheltered_count)) as u32;

        let gap = i64::from(total_homeless) - i64::from(total_capacity);

        let totals = group_sum(
            shelters,
            |s| s.shelter_type.clone(),
            |s| f64::from(s.capacity),
        );
        let mut by_type: Vec<TypeCapacity> = totals
            .into_iter()
            .map(|(shelter_type, beds)| TypeCapacity {
                shelter_type,
                beds: beds as u32,
                share_pct: pct(beds, f64::from(total_capacity)),
            })
            .collect();
        // Beds descending, name as a deterministic tie-break.
        by_type.sort_by(|a, b| {
            b.beds
                .cmp(&a.beds)
                .then_with(|| a.shelter_type.cmp(&b.shelter_type))
        });

        Self {
            total_capacity,
            total_homeless,
            sheltered,
            unsheltered,
            utilization_pct: pct(f64::from(sheltered), f64::from(total_capacity)),
            gap,
            gap_pct: pct(gap as f64, f64::from(total_homeless)),
            by_type,
        }
    }

    pub fn section(&self) -> Section {
        let mut section = Section::new("CAPACITY ANALYSIS");

        section.push(format!(
            "Total Shelter Capacity:      {} beds",
            group_thousands(u64::from(self.total_capacity))
        ));
        section.push(format!(
            "Total Homeless Population:   {} people",
            group_thousands(u64::from(self.total_homeless))
        ));
        section.push(format!(
            "Currently Sheltered:         {} people",
            group_thousands(u64::from(self.sheltered))
        ));
        section.push(format!(
            "Currently Unsheltered:       {} people",
            group_thousands(u64::from(self.unsheltered))
        ));
        section.push_blank();
        section.push(format!(
            "Capacity Utilization:        {:.1}%",
            self.utilization_pct
        ));
        section.push(format!(
            "Capacity Gap:                {} beds ({:.1}% of need)",
            group_thousands_signed(self.gap),
            self.gap_pct
        ));
        section.push_blank();
        section.push("Shelter Capacity by Type:");
        for entry in &self.by_type {
            section.push(format!(
                "  {:<30}: {:>4} beds ({:>5.1}%)",
                entry.shelter_type, entry.beds, entry.share_pct
            ));
        }

        section
    }
}
