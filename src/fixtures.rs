//! Literal seed datasets for the producer step.
//!
//! These are demonstration rows modeled on known San Diego facilities and
//! county regions; they stand in for live open-data portal pulls, which
//! are out of scope.

use crate::records::{EvictionRecord, RegionCount, ShelterRecord};

fn shelter(
    name: &str,
    address: &str,
    latitude: f64,
    longitude: f64,
    capacity: u32,
    shelter_type: &str,
    phone: &str,
) -> ShelterRecord {
    ShelterRecord {
        name: name.to_string(),
        address: address.to_string(),
        latitude,
        longitude,
        capacity,
        shelter_type: shelter_type.to_string(),
        phone: phone.to_string(),
    }
}

pub fn sample_shelters() -> Vec<ShelterRecord> {
    vec![
        shelter(
            "Father Joe's Villages",
            "3350 E St, San Diego, CA 92102",
            32.7095,
            -117.1292,
            350,
            "Emergency Shelter",
            "(619) 699-1247",
        ),
        shelter(
            "San Diego Rescue Mission",
            "120 Elm St, San Diego, CA 92101",
            32.7143,
            -117.1628,
            200,
            "Emergency Shelter",
            "(619) 819-1100",
        ),
        shelter(
            "Rachel's Women's Center",
            "3030 K St, San Diego, CA 92102",
            32.7072,
            -117.1351,
            120,
            "Women's Shelter",
            "(619) 615-0885",
        ),
        shelter(
            "Veterans Village of San Diego",
            "4141 Pacific Hwy, San Diego, CA 92110",
            32.7541,
            -117.2012,
            400,
            "Veterans Shelter",
            "(858) 453-2400",
        ),
        shelter(
            "Connections Housing Downtown",
            "1250 6th Ave, San Diego, CA 92101",
            32.7179,
            -117.1600,
            150,
            "Transitional Housing",
            "(619) 238-2772",
        ),
    ]
}

fn region(
    region_name: &str,
    region_code: &str,
    unsheltered_count: u32,
    sheltered_count: u32,
    latitude: f64,
    longitude: f64,
    area_sq_miles: f64,
) -> RegionCount {
    RegionCount {
        region_name: region_name.to_string(),
        region_code: region_code.to_string(),
        year: 2024,
        unsheltered_count,
        sheltered_count,
        total_count: unsheltered_count + sheltered_count,
        latitude,
        longitude,
        area_sq_miles,
    }
}

pub fn sample_pit_counts() -> Vec<RegionCount> {
    vec![
        region("Downtown San Diego", "DT", 845, 423, 32.7157, -117.1611, 1.7),
        region("East Village", "EV", 312, 156, 32.7089, -117.1434, 0.8),
        region("North Park", "NP", 178, 89, 32.7427, -117.1294, 2.1),
        region("Pacific Beach", "PB", 156, 34, 32.7942, -117.2324, 2.8),
        region("Midway District", "MD", 234, 167, 32.7533, -117.2069, 3.2),
    ]
}

fn eviction(
    zip_code: &str,
    neighborhood: &str,
    eviction_filings: u32,
    eviction_judgments: u32,
    latitude: f64,
    longitude: f64,
) -> EvictionRecord {
    EvictionRecord {
        zip_code: zip_code.to_string(),
        neighborhood: neighborhood.to_string(),
        year: 2024,
        month: "January".to_string(),
        eviction_filings,
        eviction_judgments,
        latitude,
        longitude,
    }
}

pub fn sample_evictions() -> Vec<EvictionRecord> {
    vec![
        eviction("92101", "Downtown", 45, 32, 32.7157, -117.1611),
        eviction("92102", "Golden Hill", 28, 19, 32.7178, -117.1292),
        eviction("92103", "Hillcrest", 31, 22, 32.7496, -117.1645),
        eviction("92104", "North Park", 38, 27, 32.7427, -117.1294),
        eviction("92109", "Pacific Beach", 24, 15, 32.7942, -117.2324),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Dataset;

    #[test]
    fn test_all_fixture_rows_pass_their_invariants() {
        assert!(sample_shelters().iter().all(|r| r.check().is_ok()));
        assert!(sample_pit_counts().iter().all(|r| r.check().is_ok()));
        assert!(sample_evictions().iter().all(|r| r.check().is_ok()));
    }

    #[test]
    fn test_total_shelter_capacity() {
        let total: u32 = sample_shelters().iter().map(|s| s.capacity).sum();
        assert_eq!(total, 1220);
    }

    #[test]
    fn test_total_pit_count() {
        let regions = sample_pit_counts();
        let total: u32 = regions.iter().map(|r| r.total_count).sum();
        let unsheltered: u32 = regions.iter().map(|r| r.unsheltered_count).sum();
        let sheltered: u32 = regions.iter().map(|r| r.sheltered_count).sum();

        assert_eq!(total, 2594);
        assert_eq!(unsheltered, 1725);
        assert_eq!(sheltered, 869);
    }

    #[test]
    fn test_eviction_totals() {
        let evictions = sample_evictions();
        let filings: u32 = evictions.iter().map(|e| e.eviction_filings).sum();
        let judgments: u32 = evictions.iter().map(|e| e.eviction_judgments).sum();

        assert_eq!(filings, 166);
        assert_eq!(judgments, 115);
    }
}
