//! Record types for the three flat datasets.
//!
//! Each struct maps one CSV row shape. Count fields are unsigned, so
//! negative counts are unrepresentable; the remaining cross-field
//! invariants are checked by [`Dataset::check`] at load time.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Ties a record type to its backing CSV file and row-level invariants.
/// The store is generic over this trait.
pub trait Dataset: Serialize + DeserializeOwned {
    /// File name under the store's `raw/` directory.
    const FILE_NAME: &'static str;

    /// Human-readable dataset label used in log output.
    const LABEL: &'static str;

    /// Validates cross-field invariants for a single row.
    ///
    /// Returns a description of the violation, if any.
    fn check(&self) -> Result<(), String>;
}

/// WGS84 coordinate accessor shared by all geolocated records.
pub trait Coordinates {
    fn coordinates(&self) -> (f64, f64);
}

/// A homeless shelter or service provider location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelterRecord {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub capacity: u32,
    #[serde(rename = "type")]
    pub shelter_type: String,
    pub phone: String,
}

/// Point-in-time homeless count for one geographic region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionCount {
    pub region_name: String,
    pub region_code: String,
    pub year: i32,
    pub unsheltered_count: u32,
    pub sheltered_count: u32,
    pub total_count: u32,
    pub latitude: f64,
    pub longitude: f64,
    pub area_sq_miles: f64,
}

/// Monthly eviction filings and judgments for one ZIP code area.
///
/// `zip_code` stays a string so leading zeros survive a round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvictionRecord {
    pub zip_code: String,
    pub neighborhood: String,
    pub year: i32,
    pub month: String,
    pub eviction_filings: u32,
    pub eviction_judgments: u32,
    pub latitude: f64,
    pub longitude: f64,
}

fn check_coordinates(latitude: f64, longitude: f64) -> Result<(), String> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(format!("latitude {} outside [-90, 90]", latitude));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(format!("longitude {} outside [-180, 180]", longitude));
    }
    Ok(())
}

impl Dataset for ShelterRecord {
    const FILE_NAME: &'static str = "sd_shelter_locations.csv";
    const LABEL: &'static str = "shelter locations";

    fn check(&self) -> Result<(), String> {
        check_coordinates(self.latitude, self.longitude)
    }
}

impl Dataset for RegionCount {
    const FILE_NAME: &'static str = "sd_pit_count_2024.csv";
    const LABEL: &'static str = "PIT count regions";

    fn check(&self) -> Result<(), String> {
        check_coordinates(self.latitude, self.longitude)?;
        if self.total_count != self.unsheltered_count + self.sheltered_count {
            return Err(format!(
                "total_count {} != unsheltered_count {} + sheltered_count {}",
                self.total_count, self.unsheltered_count, self.sheltered_count
            ));
        }
        if self.area_sq_miles <= 0.0 {
            return Err(format!("area_sq_miles {} must be positive", self.area_sq_miles));
        }
        Ok(())
    }
}

impl Dataset for EvictionRecord {
    const FILE_NAME: &'static str = "sd_eviction_data_2024.csv";
    const LABEL: &'static str = "eviction records";

    fn check(&self) -> Result<(), String> {
        check_coordinates(self.latitude, self.longitude)?;
        if self.eviction_judgments > self.eviction_filings {
            return Err(format!(
                "eviction_judgments {} exceeds eviction_filings {}",
                self.eviction_judgments, self.eviction_filings
            ));
        }
        Ok(())
    }
}

impl Coordinates for ShelterRecord {
    fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

impl Coordinates for RegionCount {
    fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

impl Coordinates for EvictionRecord {
    fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}
