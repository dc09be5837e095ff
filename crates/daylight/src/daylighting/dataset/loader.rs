use super::{DatasetError, ReferenceRow};
use serde::Deserialize;
use std::io::Read;

/// Canonical column names. Extra columns in the source are ignored.
pub(super) const REQUIRED_COLUMNS: [&str; 3] = ["glass_area", "transmittance", "outcome_score"];

#[derive(Debug, Deserialize)]
struct RawRow {
    glass_area: f64,
    transmittance: f64,
    outcome_score: f64,
}

pub(super) fn read_rows<R: Read>(reader: R) -> Result<Vec<ReferenceRow>, DatasetError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|&&required| !headers.iter().any(|header| header == required))
        .map(|required| required.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(DatasetError::MissingColumns { columns: missing });
    }

    let mut rows = Vec::new();
    for record in csv_reader.deserialize::<RawRow>() {
        let raw = record?;
        rows.push(ReferenceRow {
            glass_area: raw.glass_area,
            transmittance: raw.transmittance,
            outcome_score: raw.outcome_score,
        });
    }

    if rows.is_empty() {
        return Err(DatasetError::Empty);
    }

    Ok(rows)
}
