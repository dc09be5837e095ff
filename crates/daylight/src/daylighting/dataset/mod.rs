mod loader;
mod stats;

pub use stats::{AxisSummary, DatasetStats};

use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, OnceLock};
use tracing::{error, info};

/// One previously computed daylighting point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceRow {
    pub glass_area: f64,
    pub transmittance: f64,
    pub outcome_score: f64,
}

/// The coordinates of a reference row, reported back as prediction provenance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferencePoint {
    pub glass_area: f64,
    pub transmittance: f64,
}

impl From<&ReferenceRow> for ReferencePoint {
    fn from(row: &ReferenceRow) -> Self {
        Self {
            glass_area: row.glass_area,
            transmittance: row.transmittance,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("reference dataset not found in any candidate location")]
    NotFound { candidates: Vec<PathBuf> },
    #[error("failed to read reference dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid reference dataset: {0}")]
    Csv(#[from] csv::Error),
    #[error("reference dataset is missing required columns: {}", .columns.join(", "))]
    MissingColumns { columns: Vec<String> },
    #[error("reference dataset contains no rows")]
    Empty,
}

/// The reference dataset, loaded once and never mutated. Stored order is the
/// canonical order and drives the predictor's tie-break.
#[derive(Debug, Clone)]
pub struct ReferenceDataset {
    rows: Vec<ReferenceRow>,
    source: Option<PathBuf>,
}

impl ReferenceDataset {
    /// Build a dataset from rows already in memory. Used by tests and the
    /// preloaded service constructor; unlike the loaders this does not reject
    /// an empty collection, so the predictor's own empty-dataset guard stays
    /// reachable.
    pub fn from_rows(rows: Vec<ReferenceRow>) -> Self {
        Self { rows, source: None }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let rows = loader::read_rows(reader)?;
        Ok(Self { rows, source: None })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let file = std::fs::File::open(path.as_ref())?;
        let rows = loader::read_rows(file)?;
        Ok(Self {
            rows,
            source: Some(path.as_ref().to_path_buf()),
        })
    }

    /// Load the first candidate path that exists on disk.
    pub fn locate(candidates: &[PathBuf]) -> Result<Self, DatasetError> {
        for candidate in candidates {
            if candidate.exists() {
                return Self::from_path(candidate);
            }
        }
        Err(DatasetError::NotFound {
            candidates: candidates.to_vec(),
        })
    }

    pub fn rows(&self) -> &[ReferenceRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Raw `[glass_area, transmittance, outcome_score]` triples for the
    /// front-end heatmap.
    pub fn heatmap_rows(&self) -> Vec<[f64; 3]> {
        self.rows
            .iter()
            .map(|row| [row.glass_area, row.transmittance, row.outcome_score])
            .collect()
    }

    pub fn stats(&self) -> DatasetStats {
        DatasetStats::from_dataset(self)
    }
}

/// Shared immutable handle around the dataset. The first successful load is
/// performed at most once and reused for the process lifetime; load failures
/// are logged once and surfaced per request until the source is fixed.
#[derive(Debug)]
pub struct SharedDataset {
    candidates: Vec<PathBuf>,
    cell: OnceLock<Arc<ReferenceDataset>>,
    init: Mutex<()>,
    failure_logged: AtomicBool,
}

impl SharedDataset {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self {
            candidates,
            cell: OnceLock::new(),
            init: Mutex::new(()),
            failure_logged: AtomicBool::new(false),
        }
    }

    /// Wrap a dataset that is already in memory, skipping the lazy load.
    pub fn preloaded(dataset: ReferenceDataset) -> Self {
        let shared = Self::new(Vec::new());
        shared
            .cell
            .set(Arc::new(dataset))
            .expect("fresh cell accepts the preloaded dataset");
        shared
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    pub fn get(&self) -> Result<Arc<ReferenceDataset>, DatasetError> {
        if let Some(dataset) = self.cell.get() {
            return Ok(Arc::clone(dataset));
        }

        let _guard = self.init.lock().expect("dataset init mutex poisoned");
        if let Some(dataset) = self.cell.get() {
            return Ok(Arc::clone(dataset));
        }

        match ReferenceDataset::locate(&self.candidates) {
            Ok(dataset) => {
                info!(
                    rows = dataset.len(),
                    source = ?dataset.source(),
                    "reference dataset loaded"
                );
                let dataset = Arc::new(dataset);
                let _ = self.cell.set(Arc::clone(&dataset));
                Ok(dataset)
            }
            Err(err) => {
                if !self.failure_logged.swap(true, Ordering::Relaxed) {
                    error!(%err, "reference dataset load failed");
                }
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const VALID_CSV: &str = "glass_area,transmittance,outcome_score\n\
1.0,0.3,40.0\n\
5.0,0.3,70.0\n\
9.0,0.6,85.5\n";

    #[test]
    fn reads_rows_in_stored_order() {
        let dataset = ReferenceDataset::from_reader(Cursor::new(VALID_CSV)).expect("loads");
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.rows()[0].glass_area, 1.0);
        assert_eq!(dataset.rows()[2].outcome_score, 85.5);
    }

    #[test]
    fn tolerates_extra_columns() {
        let csv = "glass_area,orientation,transmittance,outcome_score\n1.0,N,0.3,40.0\n";
        let dataset = ReferenceDataset::from_reader(Cursor::new(csv)).expect("loads");
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.rows()[0].transmittance, 0.3);
    }

    #[test]
    fn rejects_missing_columns() {
        let csv = "glass_area,tv,yhat\n1.0,0.3,40.0\n";
        let error = ReferenceDataset::from_reader(Cursor::new(csv)).expect_err("schema error");
        match error {
            DatasetError::MissingColumns { columns } => {
                assert_eq!(columns, vec!["transmittance", "outcome_score"]);
            }
            other => panic!("expected missing columns, got {other:?}"),
        }
    }

    #[test]
    fn rejects_header_only_source() {
        let csv = "glass_area,transmittance,outcome_score\n";
        let error = ReferenceDataset::from_reader(Cursor::new(csv)).expect_err("empty error");
        assert!(matches!(error, DatasetError::Empty));
    }

    #[test]
    fn locate_reports_not_found_with_candidates() {
        let candidates = vec![
            PathBuf::from("./does-not-exist.csv"),
            PathBuf::from("./also-missing.csv"),
        ];
        let error = ReferenceDataset::locate(&candidates).expect_err("expected not found");
        match error {
            DatasetError::NotFound { candidates } => assert_eq!(candidates.len(), 2),
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[test]
    fn shared_dataset_surfaces_load_failure_per_request() {
        let shared = SharedDataset::new(vec![PathBuf::from("./does-not-exist.csv")]);
        assert!(shared.get().is_err());
        assert!(shared.get().is_err());
    }

    #[test]
    fn shared_dataset_reuses_preloaded_value() {
        let dataset = ReferenceDataset::from_reader(Cursor::new(VALID_CSV)).expect("loads");
        let shared = SharedDataset::preloaded(dataset);
        let first = shared.get().expect("preloaded");
        let second = shared.get().expect("preloaded");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn heatmap_rows_mirror_the_source_triples() {
        let dataset = ReferenceDataset::from_reader(Cursor::new(VALID_CSV)).expect("loads");
        let rows = dataset.heatmap_rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], [5.0, 0.3, 70.0]);
    }
}
