//! Producer step: materializes the sample datasets, provenance metadata,
//! and a human-readable download summary.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;
use tracing::{info, warn};

use crate::fixtures;
use crate::records::{Dataset, EvictionRecord, RegionCount, ShelterRecord};
use crate::report::{RULE_WIDTH, group_thousands};
use crate::store::{DatasetStore, StoreError};

pub const METADATA_FILE: &str = "metadata/data_sources.json";
pub const SUMMARY_FILE: &str = "DOWNLOAD_SUMMARY.txt";

/// Which dataset the producer should materialize.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DatasetSelection {
    Shelters,
    Pit,
    Evictions,
    All,
}

impl DatasetSelection {
    fn includes(self, other: DatasetSelection) -> bool {
        self == DatasetSelection::All || self == other
    }
}

/// Provenance for one materialized dataset.
#[derive(Serialize)]
pub struct SourceDescription {
    pub(crate) name: &'static str,
    pub(crate) source: &'static str,
    pub(crate) description: &'static str,
    pub(crate) geographic_coverage: &'static str,
    pub(crate) includes_coordinates: bool,
    pub(crate) file: &'static str,
}

/// Top-level metadata artifact written alongside the raw datasets.
#[derive(Serialize)]
pub struct DownloadMetadata {
    pub(crate) download_date: DateTime<Utc>,
    pub(crate) data_sources: Vec<SourceDescription>,
    pub(crate) notes: Vec<&'static str>,
}

pub fn metadata() -> DownloadMetadata {
    DownloadMetadata {
        download_date: Utc::now(),
        data_sources: vec![
            SourceDescription {
                name: "San Diego Shelter Locations",
                source: "San Diego Open Data Portal / Public Records",
                description: "Locations of homeless shelters and service providers in San Diego",
                geographic_coverage: "San Diego County",
                includes_coordinates: true,
                file: ShelterRecord::FILE_NAME,
            },
            SourceDescription {
                name: "Point-in-Time Count Data",
                source: "San Diego Regional Task Force on Homelessness",
                description: "Annual homeless census data by geographic region",
                geographic_coverage: "San Diego County regions",
                includes_coordinates: true,
                file: RegionCount::FILE_NAME,
            },
            SourceDescription {
                name: "Eviction Data",
                source: "San Diego Court Records / Housing Authority",
                description: "Eviction filings and judgments by ZIP code",
                geographic_coverage: "San Diego County ZIP codes",
                includes_coordinates: true,
                file: EvictionRecord::FILE_NAME,
            },
        ],
        notes: vec![
            "All coordinates are in WGS84 (EPSG:4326) format",
            "Data represents sample/demonstration datasets",
            "For production use, connect to live APIs from San Diego Open Data Portal",
            "Some data may be anonymized or aggregated for privacy",
        ],
    }
}

/// Materializes the selected datasets, then the metadata and summary
/// artifacts.
pub fn run(store: &DatasetStore, selection: DatasetSelection) -> Result<()> {
    if selection.includes(DatasetSelection::Shelters) {
        let shelters = fixtures::sample_shelters();
        let total_capacity: u32 = shelters.iter().map(|s| s.capacity).sum();
        let path = store.save(&shelters)?;
        info!(
            records = shelters.len(),
            total_capacity,
            path = %path.display(),
            "Shelter locations saved"
        );
    }

    if selection.includes(DatasetSelection::Pit) {
        let regions = fixtures::sample_pit_counts();
        let total_counted: u32 = regions.iter().map(|r| r.total_count).sum();
        let path = store.save(&regions)?;
        info!(
            records = regions.len(),
            total_counted,
            path = %path.display(),
            "PIT count data saved"
        );
    }

    if selection.includes(DatasetSelection::Evictions) {
        let evictions = fixtures::sample_evictions();
        let total_filings: u32 = evictions.iter().map(|e| e.eviction_filings).sum();
        let path = store.save(&evictions)?;
        info!(
            records = evictions.len(),
            total_filings,
            path = %path.display(),
            "Eviction data saved"
        );
    }

    let metadata_path = store.write_json(METADATA_FILE, &metadata())?;
    info!(path = %metadata_path.display(), "Metadata saved");

    let summary = download_summary(store)?;
    let summary_path = store.write_text(SUMMARY_FILE, &summary)?;
    info!(path = %summary_path.display(), "Download summary saved");

    Ok(())
}

/// Builds the download summary by re-reading whatever datasets exist on
/// disk. Datasets not yet downloaded are skipped rather than failing the
/// whole producer run.
pub fn download_summary(store: &DatasetStore) -> Result<String> {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str("DATA DOWNLOAD SUMMARY\n");
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "Download completed: {}\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S")
    ));

    match optional_load::<ShelterRecord>(store)? {
        Some(shelters) => {
            let capacity: u32 = shelters.iter().map(|s| s.capacity).sum();
            out.push_str("\n1. SHELTER LOCATIONS\n");
            out.push_str(&format!("   - Records: {}\n", shelters.len()));
            out.push_str(&format!(
                "   - Total capacity: {} beds\n",
                group_thousands(capacity as u64)
            ));
            out.push_str("   - Geographic coverage: San Diego County\n");
            out.push_str(&format!("   - File: raw/{}\n", ShelterRecord::FILE_NAME));
        }
        None => warn!(dataset = ShelterRecord::LABEL, "Skipping summary section, file missing"),
    }

    match optional_load::<RegionCount>(store)? {
        Some(regions) => {
            let total: u32 = regions.iter().map(|r| r.total_count).sum();
            let unsheltered: u32 = regions.iter().map(|r| r.unsheltered_count).sum();
            let sheltered: u32 = regions.iter().map(|r| r.sheltered_count).sum();
            out.push_str("\n2. POINT-IN-TIME COUNT (2024)\n");
            out.push_str(&format!("   - Regions: {}\n", regions.len()));
            out.push_str(&format!(
                "   - Total homeless: {}\n",
                group_thousands(total as u64)
            ));
            out.push_str(&format!(
                "   - Unsheltered: {}\n",
                group_thousands(unsheltered as u64)
            ));
            out.push_str(&format!(
                "   - Sheltered: {}\n",
                group_thousands(sheltered as u64)
            ));
            out.push_str(&format!("   - File: raw/{}\n", RegionCount::FILE_NAME));
        }
        None => warn!(dataset = RegionCount::LABEL, "Skipping summary section, file missing"),
    }

    match optional_load::<EvictionRecord>(store)? {
        Some(evictions) => {
            let filings: u32 = evictions.iter().map(|e| e.eviction_filings).sum();
            let judgments: u32 = evictions.iter().map(|e| e.eviction_judgments).sum();
            out.push_str("\n3. EVICTION DATA (January 2024)\n");
            out.push_str(&format!("   - ZIP codes: {}\n", evictions.len()));
            out.push_str(&format!(
                "   - Total filings: {}\n",
                group_thousands(filings as u64)
            ));
            out.push_str(&format!(
                "   - Total judgments: {}\n",
                group_thousands(judgments as u64)
            ));
            out.push_str(&format!("   - File: raw/{}\n", EvictionRecord::FILE_NAME));
        }
        None => warn!(dataset = EvictionRecord::LABEL, "Skipping summary section, file missing"),
    }

    out.push_str("\nAll datasets include latitude and longitude coordinates for mapping.\n");
    out.push_str(&rule);
    out.push('\n');

    Ok(out)
}

fn optional_load<T: Dataset>(store: &DatasetStore) -> Result<Option<Vec<T>>> {
    match store.load::<T>() {
        Ok(rows) => Ok(Some(rows)),
        Err(StoreError::NotFound { .. }) => Ok(None),
        Err(other) => Err(other.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_all_materializes_every_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let store = DatasetStore::new(dir.path());

        run(&store, DatasetSelection::All).unwrap();

        assert!(store.raw_path(ShelterRecord::FILE_NAME).exists());
        assert!(store.raw_path(RegionCount::FILE_NAME).exists());
        assert!(store.raw_path(EvictionRecord::FILE_NAME).exists());
        assert!(dir.path().join(METADATA_FILE).exists());
        assert!(dir.path().join(SUMMARY_FILE).exists());
    }

    #[test]
    fn test_run_single_selection_skips_other_datasets() {
        let dir = tempfile::tempdir().unwrap();
        let store = DatasetStore::new(dir.path());

        run(&store, DatasetSelection::Shelters).unwrap();

        assert!(store.raw_path(ShelterRecord::FILE_NAME).exists());
        assert!(!store.raw_path(RegionCount::FILE_NAME).exists());
        assert!(!store.raw_path(EvictionRecord::FILE_NAME).exists());
    }

    #[test]
    fn test_download_summary_reports_seeded_totals() {
        let dir = tempfile::tempdir().unwrap();
        let store = DatasetStore::new(dir.path());
        run(&store, DatasetSelection::All).unwrap();

        let summary = download_summary(&store).unwrap();
        assert!(summary.contains("Total capacity: 1,220 beds"));
        assert!(summary.contains("Total homeless: 2,594"));
        assert!(summary.contains("Total filings: 166"));
    }

    #[test]
    fn test_download_summary_tolerates_missing_datasets() {
        let dir = tempfile::tempdir().unwrap();
        let store = DatasetStore::new(dir.path());
        run(&store, DatasetSelection::Pit).unwrap();

        let summary = download_summary(&store).unwrap();
        assert!(!summary.contains("SHELTER LOCATIONS"));
        assert!(summary.contains("POINT-IN-TIME COUNT"));
    }

    #[test]
    fn test_metadata_lists_all_three_sources() {
        let m = metadata();
        assert_eq!(m.data_sources.len(), 3);
        assert!(m.data_sources.iter().all(|s| s.includes_coordinates));
    }
}
