//! Flat-file dataset store.
//!
//! Reads and writes the three raw CSV datasets plus the JSON and
//! plain-text artifacts, all relative to an injected base directory so
//! tests can point the store at a temporary location.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::records::Dataset;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("dataset file not found: {path}")]
    NotFound { path: PathBuf },
    #[error("schema error in {path}: {source}")]
    Schema {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("invalid record in {path} at row {row}: {detail}")]
    Invariant {
        path: PathBuf,
        row: usize,
        detail: String,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub struct DatasetStore {
    base_dir: PathBuf,
}

impl DatasetStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of a raw dataset file under `<base>/raw/`.
    pub fn raw_path(&self, file_name: &str) -> PathBuf {
        self.base_dir.join("raw").join(file_name)
    }

    /// Loads all rows of a dataset, validating row invariants as it goes.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] when the backing file is absent (the
    /// `download` step has not run), [`StoreError::Schema`] when a column
    /// is missing or a value fails to parse, [`StoreError::Invariant`]
    /// when a row violates its dataset's cross-field checks.
    pub fn load<T: Dataset>(&self) -> Result<Vec<T>, StoreError> {
        let path = self.raw_path(T::FILE_NAME);
        if !path.exists() {
            return Err(StoreError::NotFound { path });
        }

        let file = File::open(&path)?;
        let mut rdr = csv::Reader::from_reader(file);

        let mut rows = Vec::new();
        for (index, result) in rdr.deserialize().enumerate() {
            let record: T = result.map_err(|source| StoreError::Schema {
                path: path.clone(),
                source,
            })?;
            // Row numbering counts the header line, matching editors.
            record.check().map_err(|detail| StoreError::Invariant {
                path: path.clone(),
                row: index + 2,
                detail,
            })?;
            rows.push(record);
        }

        debug!(path = %path.display(), rows = rows.len(), "Dataset loaded");
        Ok(rows)
    }

    /// Writes all rows of a dataset, creating parent directories first.
    ///
    /// Safe to call repeatedly; each call overwrites the file whole.
    pub fn save<T: Dataset>(&self, records: &[T]) -> Result<PathBuf, StoreError> {
        let path = self.raw_path(T::FILE_NAME);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(&path)?;
        let mut writer = csv::Writer::from_writer(file);
        for record in records {
            writer.serialize(record).map_err(|source| StoreError::Schema {
                path: path.clone(),
                source,
            })?;
        }
        writer.flush()?;

        debug!(path = %path.display(), rows = records.len(), "Dataset saved");
        Ok(path)
    }

    /// Serializes a value as pretty JSON to `<base>/<relative>`.
    pub fn write_json<T: Serialize>(&self, relative: &str, value: &T) -> anyhow::Result<PathBuf> {
        let path = self.base_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serde_json::to_string_pretty(value)?)?;
        Ok(path)
    }

    /// Writes a plain-text artifact to `<base>/<relative>`.
    pub fn write_text(&self, relative: &str, text: &str) -> anyhow::Result<PathBuf> {
        let path = self.base_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, text)?;
        Ok(path)
    }
}
