use super::ReferenceDataset;
use serde::Serialize;

/// Min/max/mean over one dataset axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl AxisSummary {
    fn over<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for value in values {
            count += 1;
            sum += value;
            min = min.min(value);
            max = max.max(value);
        }

        if count == 0 {
            return None;
        }

        Some(Self {
            min,
            max,
            mean: sum / count as f64,
        })
    }
}

/// Descriptive statistics for the loaded dataset, served verbatim by the
/// stats endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetStats {
    pub total_rows: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glass_area: Option<AxisSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transmittance: Option<AxisSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome_score: Option<AxisSummary>,
}

impl DatasetStats {
    pub(super) fn from_dataset(dataset: &ReferenceDataset) -> Self {
        let rows = dataset.rows();
        Self {
            total_rows: rows.len(),
            source: dataset
                .source()
                .map(|path| path.display().to_string()),
            glass_area: AxisSummary::over(rows.iter().map(|row| row.glass_area)),
            transmittance: AxisSummary::over(rows.iter().map(|row| row.transmittance)),
            outcome_score: AxisSummary::over(rows.iter().map(|row| row.outcome_score)),
        }
    }
}
