use super::dataset::{ReferenceDataset, ReferencePoint, ReferenceRow};
use serde::Serialize;

/// A prediction query in (glass area, transmittance) space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Query {
    pub glass_area: f64,
    pub transmittance: f64,
}

/// The outcome score of the closest reference row, together with the
/// coordinates that were actually used.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub score: f64,
    pub used_point: ReferencePoint,
}

/// What to do with queries outside the dataset's observed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DomainBoundsPolicy {
    /// Return the nearest row even for far-outside queries.
    #[default]
    Extrapolate,
    /// Reject queries outside the observed min/max of either axis.
    Reject,
}

impl DomainBoundsPolicy {
    pub fn from_flag(enforce_domain_bounds: bool) -> Self {
        if enforce_domain_bounds {
            Self::Reject
        } else {
            Self::Extrapolate
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("reference dataset contains no rows")]
    EmptyDataset,
    #[error("query coordinates must be finite numbers")]
    NonFinite,
    #[error("{axis} {value} is outside the reference range [{min}, {max}]")]
    OutOfDomain {
        axis: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl PredictionError {
    /// Whether the failure is attributable to the request rather than the
    /// service's own data.
    pub fn is_client_fault(&self) -> bool {
        matches!(
            self,
            PredictionError::NonFinite | PredictionError::OutOfDomain { .. }
        )
    }
}

/// Find the reference row closest to the query in Euclidean distance.
///
/// Ties resolve to the first row in the dataset's stored order, so repeated
/// runs over the same source are reproducible.
pub fn predict(
    dataset: &ReferenceDataset,
    query: Query,
    policy: DomainBoundsPolicy,
) -> Result<Prediction, PredictionError> {
    if !query.glass_area.is_finite() || !query.transmittance.is_finite() {
        return Err(PredictionError::NonFinite);
    }

    let rows = dataset.rows();
    let Some(first) = rows.first() else {
        return Err(PredictionError::EmptyDataset);
    };

    if policy == DomainBoundsPolicy::Reject {
        check_domain(rows, query)?;
    }

    let mut best = first;
    let mut best_distance = distance(first, query);
    for row in &rows[1..] {
        let candidate = distance(row, query);
        // Strict comparison keeps the earliest row on equidistant ties.
        if candidate < best_distance {
            best = row;
            best_distance = candidate;
        }
    }

    Ok(Prediction {
        score: best.outcome_score,
        used_point: ReferencePoint::from(best),
    })
}

fn distance(row: &ReferenceRow, query: Query) -> f64 {
    let d_area = row.glass_area - query.glass_area;
    let d_tv = row.transmittance - query.transmittance;
    (d_area * d_area + d_tv * d_tv).sqrt()
}

fn check_domain(rows: &[ReferenceRow], query: Query) -> Result<(), PredictionError> {
    let (mut area_min, mut area_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut tv_min, mut tv_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for row in rows {
        area_min = area_min.min(row.glass_area);
        area_max = area_max.max(row.glass_area);
        tv_min = tv_min.min(row.transmittance);
        tv_max = tv_max.max(row.transmittance);
    }

    if query.glass_area < area_min || query.glass_area > area_max {
        return Err(PredictionError::OutOfDomain {
            axis: "glass area",
            value: query.glass_area,
            min: area_min,
            max: area_max,
        });
    }
    if query.transmittance < tv_min || query.transmittance > tv_max {
        return Err(PredictionError::OutOfDomain {
            axis: "transmittance",
            value: query.transmittance,
            min: tv_min,
            max: tv_max,
        });
    }

    Ok(())
}
