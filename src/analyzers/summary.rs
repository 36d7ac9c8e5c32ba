//! Overall dataset statistics and the condensed export report.

use crate::records::{EvictionRecord, RegionCount, ShelterRecord};
use crate::report::{RULE_WIDTH, Section, group_thousands};
use crate::stats::{EmptyInputError, mean_by, median_by, pct, sum_by};

pub struct DatasetSummary {
    pub facility_count: usize,
    pub total_capacity: u32,
    pub mean_capacity: f64,
    pub median_capacity: f64,
    /// Max minus min shelter latitude, in degrees.
    pub latitude_spread_deg: f64,

    pub region_count: usize,
    pub total_homeless: u32,
    pub sheltered: u32,
    pub sheltered_pct: f64,
    pub unsheltered: u32,
    pub unsheltered_pct: f64,
    pub mean_per_region: f64,

    pub zip_count: usize,
    pub total_filings: u32,
    pub total_judgments: u32,
    pub mean_filings_per_zip: f64,
    pub judgment_rate_pct: f64,
}

impl DatasetSummary {
    /// # Errors
    ///
    /// Returns [`EmptyInputError`] if any table is empty; means and
    /// medians are undefined there.
    pub fn from_tables(
        shelters: &[ShelterRecord],
        regions: &[RegionCount],
        evictions: &[EvictionRecord],
    ) -> Result<Self, EmptyInputError> {
        let total_capacity = sum_by(shelters, |s| f64::from(s.capacity)) as u32;
        let total_homeless = sum_by(regions, |r| f64::from(r.total_count)) as u32;
        let sheltered = sum_by(regions, |r| f64::from(r.sheltered_count)) as u32;
        let unsheltered = sum_by(regions, |r| f64::from(r.unsheltered_count)) as u32;
        let total_filings = sum_by(evictions, |e| f64::from(e.eviction_filings)) as u32;
        let total_judgments = sum_by(evictions, |e| f64::from(e.eviction_judgments)) as u32;

        if shelters.is_empty() {
            return Err(EmptyInputError);
        }
        let lat_max = shelters.iter().map(|s| s.latitude).fold(f64::MIN, f64::max);
        let lat_min = shelters.iter().map(|s| s.latitude).fold(f64::MAX, f64::min);

        Ok(Self {
            facility_count: shelters.len(),
            total_capacity,
            mean_capacity: mean_by(shelters, |s| f64::from(s.capacity))?,
            median_capacity: median_by(shelters, |s| f64::from(s.capacity))?,
            latitude_spread_deg: lat_max - lat_min,

            region_count: regions.len(),
            total_homeless,
            sheltered,
            sheltered_pct: pct(f64::from(sheltered), f64::from(total_homeless)),
            unsheltered,
            unsheltered_pct: pct(f64::from(unsheltered), f64::from(total_homeless)),
            mean_per_region: mean_by(regions, |r| f64::from(r.total_count))?,

            zip_count: evictions.len(),
            total_filings,
            total_judgments,
            mean_filings_per_zip: mean_by(evictions, |e| f64::from(e.eviction_filings))?,
            judgment_rate_pct: pct(f64::from(total_judgments), f64::from(total_filings)),
        })
    }

    pub fn section(&self) -> Section {
        let mut section = Section::new("SUMMARY STATISTICS");

        section.push("Shelter Data:");
        section.push(format!("  - Number of facilities: {}", self.facility_count));
        section.push(format!(
            "  - Total capacity: {} beds",
            group_thousands(u64::from(self.total_capacity))
        ));
        section.push(format!("  - Average capacity: {:.1} beds", self.mean_capacity));
        section.push(format!("  - Median capacity: {:.1} beds", self.median_capacity));
        section.push(format!(
            "  - Geographic spread: {:.4}° lat",
            self.latitude_spread_deg
        ));
        section.push_blank();
        section.push("Homeless Population (PIT Count):");
        section.push(format!(
            "  - Total homeless: {}",
            group_thousands(u64::from(self.total_homeless))
        ));
        section.push(format!(
            "  - Sheltered: {} ({:.1}%)",
            group_thousands(u64::from(self.sheltered)),
            self.sheltered_pct
        ));
        section.push(format!(
            "  - Unsheltered: {} ({:.1}%)",
            group_thousands(u64::from(self.unsheltered)),
            self.unsheltered_pct
        ));
        section.push(format!("  - Average per region: {:.1}", self.mean_per_region));
        section.push_blank();
        section.push("Eviction Data:");
        section.push(format!(
            "  - Total filings: {}",
            group_thousands(u64::from(self.total_filings))
        ));
        section.push(format!(
            "  - Total judgments: {}",
            group_thousands(u64::from(self.total_judgments))
        ));
        section.push(format!(
            "  - Average filings per ZIP: {:.1}",
            self.mean_filings_per_zip
        ));
        section.push(format!("  - Judgment rate: {:.1}%", self.judgment_rate_pct));

        section
    }
}

/// Condensed plain-text report body persisted by the `analyze` command.
pub fn condensed_report(
    shelters: &[ShelterRecord],
    regions: &[RegionCount],
    evictions: &[EvictionRecord],
) -> String {
    let total_capacity = sum_by(shelters, |s| f64::from(s.capacity)) as u64;
    let total_homeless = sum_by(regions, |r| f64::from(r.total_count)) as u64;
    let sheltered = sum_by(regions, |r| f64::from(r.sheltered_count)) as u64;
    let unsheltered = sum_by(regions, |r| f64::from(r.unsheltered_count)) as u64;
    let filings = sum_by(evictions, |e| f64::from(e.eviction_filings)) as u64;
    let judgments = sum_by(evictions, |e| f64::from(e.eviction_judgments)) as u64;

    let mut lines = Vec::new();
    lines.push("San Diego Homelessness Data Analysis Report".to_string());
    lines.push("=".repeat(RULE_WIDTH));
    lines.push(String::new());
    lines.push("SHELTER CAPACITY".to_string());
    lines.push(format!("Total Shelters: {}", shelters.len()));
    lines.push(format!("Total Capacity: {} beds", group_thousands(total_capacity)));
    lines.push(String::new());
    lines.push("HOMELESS POPULATION".to_string());
    lines.push(format!("Total: {}", group_thousands(total_homeless)));
    lines.push(format!("Sheltered: {}", group_thousands(sheltered)));
    lines.push(format!("Unsheltered: {}", group_thousands(unsheltered)));
    lines.push(String::new());
    lines.push("EVICTIONS".to_string());
    lines.push(format!("Total Filings: {}", group_thousands(filings)));
    lines.push(format!("Total Judgments: {}", group_thousands(judgments)));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_summary_over_fixtures() {
        let summary = DatasetSummary::from_tables(
            &fixtures::sample_shelters(),
            &fixtures::sample_pit_counts(),
            &fixtures::sample_evictions(),
        )
        .unwrap();

        assert_eq!(summary.facility_count, 5);
        assert_eq!(summary.mean_capacity, 244.0);
        assert_eq!(summary.median_capacity, 200.0);
        assert!((summary.sheltered_pct - 33.5).abs() < 0.05);
        assert!((summary.unsheltered_pct - 66.5).abs() < 0.05);
        assert!((summary.mean_per_region - 518.8).abs() < 1e-9);
        assert!((summary.mean_filings_per_zip - 33.2).abs() < 1e-9);
        assert!((summary.judgment_rate_pct - 69.3).abs() < 0.05);
    }

    #[test]
    fn test_latitude_spread() {
        let summary = DatasetSummary::from_tables(
            &fixtures::sample_shelters(),
            &fixtures::sample_pit_counts(),
            &fixtures::sample_evictions(),
        )
        .unwrap();

        // Veterans Village (32.7541) down to Rachel's (32.7072)
        assert!((summary.latitude_spread_deg - 0.0469).abs() < 1e-9);
    }

    #[test]
    fn test_empty_shelters_fails() {
        let result = DatasetSummary::from_tables(
            &[],
            &fixtures::sample_pit_counts(),
            &fixtures::sample_evictions(),
        );
        assert!(matches!(result, Err(EmptyInputError)));
    }

    #[test]
    fn test_condensed_report_contains_golden_sums() {
        let text = condensed_report(
            &fixtures::sample_shelters(),
            &fixtures::sample_pit_counts(),
            &fixtures::sample_evictions(),
        );

        assert!(text.starts_with("San Diego Homelessness Data Analysis Report"));
        assert!(text.contains("Total Capacity: 1,220 beds"));
        assert!(text.contains("Total: 2,594"));
        assert!(text.contains("Total Filings: 166"));
    }
}
