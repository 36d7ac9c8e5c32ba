//! Descriptive analyses over the loaded tables.
//!
//! Each submodule owns one report section: shelter capacity versus
//! counted population, geographic distribution, eviction outcomes,
//! shelter access distances, and overall dataset statistics.

pub mod access;
pub mod capacity;
pub mod evictions;
pub mod geography;
pub mod summary;

use crate::records::{EvictionRecord, RegionCount, ShelterRecord};
use crate::report::Report;
use crate::stats::EmptyInputError;

/// Builds the full analysis report over the three loaded tables.
pub fn build_report(
    shelters: &[ShelterRecord],
    regions: &[RegionCount],
    evictions: &[EvictionRecord],
) -> Result<Report, EmptyInputError> {
    let sections = vec![
        capacity::CapacityAnalysis::from_tables(shelters, regions).section(),
        geography::RegionDistribution::from_table(regions).section(),
        evictions::EvictionAnalysis::from_table(evictions).section(),
        access::ShelterAccess::from_tables(regions, shelters)?.section(),
        summary::DatasetSummary::from_tables(shelters, regions, evictions)?.section(),
    ];
    Ok(Report::new(sections))
}
