//! Geographic distribution of the counted population.

use crate::records::RegionCount;
use crate::report::{Section, group_thousands};
use crate::stats::{pct, ratio};

pub struct RegionRow {
    pub region_name: String,
    pub total_count: u32,
    pub unsheltered_count: u32,
    pub unsheltered_rate_pct: f64,
    pub density_per_sq_mile: f64,
}

pub struct RegionDistribution {
    /// Rows sorted by total count descending.
    pub rows: Vec<RegionRow>,
    pub total_count: u32,
    pub total_unsheltered: u32,
}

impl RegionDistribution {
    pub fn from_table(regions: &[RegionCount]) -> Self {
        let mut rows: Vec<RegionRow> = regions
            .iter()
            .map(|region| RegionRow {
                region_name: region.region_name.clone(),
                total_count: region.total_count,
                unsheltered_count: region.unsheltered_count,
                unsheltered_rate_pct: pct(
                    f64::from(region.unsheltered_count),
                    f64::from(region.total_count),
                ),
                density_per_sq_mile: ratio(f64::from(region.total_count), region.area_sq_miles),
            })
            .collect();
        rows.sort_by(|a, b| {
            b.total_count
                .cmp(&a.total_count)
                .then_with(|| a.region_name.cmp(&b.region_name))
        });

        Self {
            rows,
            total_count: regions.iter().map(|r| r.total_count).sum(),
            total_unsheltered: regions.iter().map(|r| r.unsheltered_count).sum(),
        }
    }

    pub fn section(&self) -> Section {
        let mut section = Section::new("GEOGRAPHIC DISTRIBUTION ANALYSIS");

        section.push("Homeless Population by Region:");
        section.push(format!(
            "{:<25} {:>8} {:>12} {:>8} {:>10}",
            "Region", "Total", "Unsheltered", "Rate", "Density"
        ));
        section.push("-".repeat(70));

        for row in &self.rows {
            section.push(format!(
                "{:<25} {:>8} {:>12} {:>7.1}% {:>9.1}/mi²",
                row.region_name,
                group_thousands(u64::from(row.total_count)),
                group_thousands(u64::from(row.unsheltered_count)),
                row.unsheltered_rate_pct,
                row.density_per_sq_mile
            ));
        }

        section.push_blank();
        section.push(format!(
            "{:<25} {:>8} {:>12}",
            "TOTAL",
            group_thousands(u64::from(self.total_count)),
            group_thousands(u64::from(self.total_unsheltered))
        ));

        section
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_rows_sorted_by_total_descending() {
        let distribution = RegionDistribution::from_table(&fixtures::sample_pit_counts());

        let names: Vec<&str> = distribution
            .rows
            .iter()
            .map(|r| r.region_name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Downtown San Diego",
                "East Village",
                "Midway District",
                "North Park",
                "Pacific Beach",
            ]
        );
    }

    #[test]
    fn test_density_and_rate_for_downtown() {
        let distribution = RegionDistribution::from_table(&fixtures::sample_pit_counts());
        let downtown = &distribution.rows[0];

        // 1268 people over 1.7 square miles
        assert!((downtown.density_per_sq_mile - 745.9).abs() < 0.05);
        // 845 of 1268 unsheltered
        assert!((downtown.unsheltered_rate_pct - 66.6).abs() < 0.05);
    }

    #[test]
    fn test_totals_row() {
        let distribution = RegionDistribution::from_table(&fixtures::sample_pit_counts());
        assert_eq!(distribution.total_count, 2594);
        assert_eq!(distribution.total_unsheltered, 1725);
    }

    #[test]
    fn test_empty_table_renders_without_rows() {
        let distribution = RegionDistribution::from_table(&[]);
        assert!(distribution.rows.is_empty());
        assert_eq!(distribution.total_count, 0);

        let section = distribution.section();
        assert!(section.lines.iter().any(|l| l.starts_with("TOTAL")));
    }
}
