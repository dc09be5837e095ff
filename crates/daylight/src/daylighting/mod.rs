//! Daylighting assessment pipeline: reference dataset, nearest-point
//! prediction, metric derivation, and the presentation tables the estimates
//! are rendered with.

pub mod dataset;
pub mod metrics;
pub mod orientation;
pub mod predictor;
pub mod presentation;
pub mod router;
pub mod service;
pub mod window;

pub use dataset::{DatasetError, ReferenceDataset, ReferencePoint, ReferenceRow, SharedDataset};
pub use metrics::{MetricKey, MetricSet};
pub use orientation::Orientation;
pub use predictor::{DomainBoundsPolicy, Prediction, PredictionError, Query};
pub use router::daylight_router;
pub use service::{Assessment, AssessmentError, DaylightService, MetricReading};
pub use window::{ValidationError, WindowLimits, WindowRequest};
