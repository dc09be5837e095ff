use std::path::{Path, PathBuf};

use serde::Serialize;

use super::dataset::{DatasetError, DatasetStats, ReferenceDataset, ReferencePoint, SharedDataset};
use super::metrics::{MetricKey, MetricSet};
use super::orientation::Orientation;
use super::predictor::{self, DomainBoundsPolicy, PredictionError, Query};
use super::presentation::{assets, colors, ImageAvailability, ModelSheet};
use super::window::{ValidationError, WindowLimits, WindowRequest};
use crate::config::AppConfig;

/// Service composing validation, the shared dataset, the predictor, and the
/// presentation tables into one assessment call.
pub struct DaylightService {
    dataset: SharedDataset,
    limits: WindowLimits,
    bounds_policy: DomainBoundsPolicy,
    assets_dir: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error("invalid window specification: {0}")]
    Validation(#[from] ValidationError),
    #[error("reference data unavailable: {0}")]
    Dataset(#[from] DatasetError),
    #[error("prediction failed: {0}")]
    Prediction(#[from] PredictionError),
}

/// One metric reading with its presentation attachments.
#[derive(Debug, Clone, Serialize)]
pub struct MetricReading {
    pub key: MetricKey,
    pub percent: u8,
    pub hex: &'static str,
    pub sheet: ModelSheet,
}

/// The full assessment payload returned to callers.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub summary: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_point: Option<ReferencePoint>,
    pub heatmap_data: Vec<[f64; 3]>,
    pub heatmap_colors: Vec<&'static str>,
    pub metrics: Vec<MetricReading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_pct: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation_code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_name: Option<String>,
}

/// Dataset resolution details for the diagnostics endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostics {
    pub dataset_candidates: Vec<String>,
    pub dataset_loaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<DatasetStats>,
}

const SUMMARY_COMPLETE: &str = "assessment complete";
const SUMMARY_HEATMAP_ONLY: &str =
    "heatmap only; provide window width and height for a prediction";

impl DaylightService {
    pub fn new(
        dataset: SharedDataset,
        limits: WindowLimits,
        bounds_policy: DomainBoundsPolicy,
        assets_dir: PathBuf,
    ) -> Self {
        Self {
            dataset,
            limits,
            bounds_policy,
            assets_dir,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            SharedDataset::new(config.data.dataset_candidates.clone()),
            WindowLimits::default(),
            DomainBoundsPolicy::from_flag(config.predictor.enforce_domain_bounds),
            config.data.assets_dir.clone(),
        )
    }

    /// Service over an in-memory dataset; used by tests and one-shot CLI
    /// paths that already loaded their source.
    pub fn preloaded(dataset: ReferenceDataset) -> Self {
        Self::new(
            SharedDataset::preloaded(dataset),
            WindowLimits::default(),
            DomainBoundsPolicy::Extrapolate,
            PathBuf::from("assets"),
        )
    }

    pub fn limits(&self) -> &WindowLimits {
        &self.limits
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    /// Run the full assessment pipeline for one window specification.
    ///
    /// A request without both dimensions is not an error: it yields the
    /// heatmap and a prompt to supply measurements, with no prediction.
    pub fn assess(&self, request: WindowRequest) -> Result<Assessment, AssessmentError> {
        let glass_area = request.validate(&self.limits)?;
        let dataset = self.dataset.get()?;

        let heatmap_data = dataset.heatmap_rows();
        let heatmap_colors = colors::heatmap_colors(heatmap_data.len());

        let orientation_code = request
            .orientation
            .as_deref()
            .and_then(Orientation::parse)
            .map(Orientation::code);

        let (summary, predicted_score, used_point, metrics, energy_pct) = match glass_area {
            Some(area) => {
                let prediction = predictor::predict(
                    &dataset,
                    Query {
                        glass_area: area,
                        transmittance: request.transmittance,
                    },
                    self.bounds_policy,
                )?;
                let set = MetricSet::derive(prediction.score);
                let readings = MetricKey::ordered()
                    .into_iter()
                    .map(|key| {
                        let percent = set.percent(key);
                        MetricReading {
                            key,
                            percent,
                            hex: colors::color_for(key, f64::from(percent)),
                            sheet: ModelSheet::build(key),
                        }
                    })
                    .collect();
                (
                    SUMMARY_COMPLETE,
                    Some(prediction.score),
                    Some(prediction.used_point),
                    readings,
                    Some(set.energy),
                )
            }
            None => (SUMMARY_HEATMAP_ONLY, None, None, Vec::new(), None),
        };

        Ok(Assessment {
            summary,
            predicted_score,
            used_point,
            heatmap_data,
            heatmap_colors,
            metrics,
            energy_pct,
            orientation: request.orientation,
            orientation_code,
            location: request.location,
            space_name: request.space_name,
        })
    }

    pub fn sheet(&self, metric: MetricKey) -> ModelSheet {
        ModelSheet::build(metric)
    }

    pub fn stats(&self) -> Result<DatasetStats, DatasetError> {
        Ok(self.dataset.get()?.stats())
    }

    pub fn images(&self) -> Vec<ImageAvailability> {
        assets::list_images(&self.assets_dir)
    }

    pub fn image_path(&self, metric: MetricKey) -> PathBuf {
        assets::image_path(&self.assets_dir, metric)
    }

    pub fn diagnostics(&self) -> Diagnostics {
        let candidates = self
            .dataset
            .candidates()
            .iter()
            .map(|path| path.display().to_string())
            .collect();

        match self.dataset.get() {
            Ok(dataset) => Diagnostics {
                dataset_candidates: candidates,
                dataset_loaded: true,
                dataset_source: dataset.source().map(|path| path.display().to_string()),
                dataset_error: None,
                stats: Some(dataset.stats()),
            },
            Err(err) => Diagnostics {
                dataset_candidates: candidates,
                dataset_loaded: false,
                dataset_source: None,
                dataset_error: Some(err.to_string()),
                stats: None,
            },
        }
    }
}
