//! Distance from each counted region to its nearest shelter.

use crate::geo::nearest;
use crate::records::{RegionCount, ShelterRecord};
use crate::report::Section;
use crate::stats::EmptyInputError;

pub struct AccessRow {
    pub region_name: String,
    pub nearest_shelter: String,
    pub distance_miles: f64,
}

pub struct ShelterAccess {
    /// One row per region, in the regions' own order.
    pub rows: Vec<AccessRow>,
}

impl ShelterAccess {
    /// Matches every region to its nearest shelter by great-circle
    /// distance.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyInputError`] when there are regions to match but no
    /// shelters to match against.
    pub fn from_tables(
        regions: &[RegionCount],
        shelters: &[ShelterRecord],
    ) -> Result<Self, EmptyInputError> {
        let mut rows = Vec::with_capacity(regions.len());

        for region in regions {
            let (shelter, distance_miles) = nearest(region.latitude, region.longitude, shelters)?;
            rows.push(AccessRow {
                region_name: region.region_name.clone(),
                nearest_shelter: shelter.name.clone(),
                distance_miles,
            });
        }

        Ok(Self { rows })
    }

    pub fn section(&self) -> Section {
        let mut section = Section::new("GEOGRAPHIC DISTANCE ANALYSIS");

        section.push("Distance from High-Need Areas to Nearest Shelter:");
        section.push(format!(
            "{:<25} {:<30} {:>10}",
            "Region", "Nearest Shelter", "Distance"
        ));
        section.push("-".repeat(70));

        for row in &self.rows {
            section.push(format!(
                "{:<25} {:<30} {:>9.2} mi",
                row.region_name, row.nearest_shelter, row.distance_miles
            ));
        }

        section
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_downtown_matches_rescue_mission() {
        let access =
            ShelterAccess::from_tables(&fixtures::sample_pit_counts(), &fixtures::sample_shelters())
                .unwrap();

        let downtown = &access.rows[0];
        assert_eq!(downtown.region_name, "Downtown San Diego");
        assert_eq!(downtown.nearest_shelter, "San Diego Rescue Mission");
        assert!(downtown.distance_miles < 0.5, "got {}", downtown.distance_miles);
    }

    #[test]
    fn test_every_region_gets_a_match() {
        let regions = fixtures::sample_pit_counts();
        let access =
            ShelterAccess::from_tables(&regions, &fixtures::sample_shelters()).unwrap();

        assert_eq!(access.rows.len(), regions.len());
        assert!(access.rows.iter().all(|r| r.distance_miles.is_finite()));
        assert!(access.rows.iter().all(|r| r.distance_miles >= 0.0));
        // All sample regions sit within a few miles of some shelter.
        assert!(access.rows.iter().all(|r| r.distance_miles < 10.0));
    }

    #[test]
    fn test_no_shelters_fails() {
        let result = ShelterAccess::from_tables(&fixtures::sample_pit_counts(), &[]);
        assert!(matches!(result, Err(EmptyInputError)));
    }

    #[test]
    fn test_no_regions_is_fine() {
        let access = ShelterAccess::from_tables(&[], &fixtures::sample_shelters()).unwrap();
        assert!(access.rows.is_empty());
    }
}
