//! End-to-end specifications for the daylight assessment pipeline, driven
//! through the public service facade so validation, prediction, derivation,
//! and presentation are exercised together.

use std::path::PathBuf;

use daylight::daylighting::{
    AssessmentError, DaylightService, DomainBoundsPolicy, MetricKey, ReferenceDataset,
    ReferenceRow, SharedDataset, ValidationError, WindowLimits, WindowRequest,
};

fn row(glass_area: f64, transmittance: f64, outcome_score: f64) -> ReferenceRow {
    ReferenceRow {
        glass_area,
        transmittance,
        outcome_score,
    }
}

fn reference_dataset() -> ReferenceDataset {
    ReferenceDataset::from_rows(vec![
        row(1.0, 0.3, 40.0),
        row(5.0, 0.3, 70.0),
        row(9.0, 0.6, 88.0),
    ])
}

fn service_with_policy(policy: DomainBoundsPolicy) -> DaylightService {
    DaylightService::new(
        SharedDataset::preloaded(reference_dataset()),
        WindowLimits::default(),
        policy,
        PathBuf::from("assets"),
    )
}

fn request(width: f64, height: f64, transmittance: f64) -> WindowRequest {
    WindowRequest {
        width: Some(width),
        height: Some(height),
        transmittance,
        orientation: Some("Noreste".to_string()),
        location: None,
        space_name: None,
    }
}

#[test]
fn assessment_reproduces_the_reference_worked_example() {
    let service = DaylightService::preloaded(reference_dataset());

    // 1.2 m2 at tv 0.3 sits closest to the (1.0, 0.3) reference point.
    let assessment = service
        .assess(request(1.0, 1.2, 0.3))
        .expect("assessment succeeds");

    assert_eq!(assessment.predicted_score, Some(40.0));
    let point = assessment.used_point.expect("used point reported");
    assert_eq!((point.glass_area, point.transmittance), (1.0, 0.3));

    let percents: Vec<(MetricKey, u8)> = assessment
        .metrics
        .iter()
        .map(|reading| (reading.key, reading.percent))
        .collect();
    assert_eq!(
        percents,
        vec![
            (MetricKey::Da, 40),
            (MetricKey::Udi, 48),
            (MetricKey::Sda, 27),
            (MetricKey::Sudi, 44),
            (MetricKey::DavZone, 40),
        ]
    );
    assert_eq!(assessment.energy_pct, Some(60));
    assert_eq!(assessment.orientation_code, Some("NE"));
}

#[test]
fn every_metric_reading_carries_color_and_sheet() {
    let service = DaylightService::preloaded(reference_dataset());
    let assessment = service
        .assess(request(2.0, 2.0, 0.5))
        .expect("assessment succeeds");

    for reading in &assessment.metrics {
        assert!(reading.hex.starts_with('#'), "{:?} color", reading.key);
        assert_eq!(reading.sheet.metric, reading.key);
        assert!(!reading.sheet.polygons.is_empty());
        assert!(!reading.sheet.legend.is_empty());
    }
}

#[test]
fn heatmap_is_served_even_without_window_dimensions() {
    let service = DaylightService::preloaded(reference_dataset());
    let assessment = service
        .assess(WindowRequest {
            width: None,
            height: None,
            transmittance: 0.5,
            orientation: None,
            location: None,
            space_name: None,
        })
        .expect("heatmap-only request succeeds");

    assert!(assessment.predicted_score.is_none());
    assert!(assessment.metrics.is_empty());
    assert_eq!(assessment.heatmap_data.len(), 3);
    assert_eq!(assessment.heatmap_colors.len(), 3);
}

#[test]
fn out_of_bounds_windows_are_rejected_before_prediction() {
    let service = DaylightService::preloaded(reference_dataset());

    let error = service
        .assess(request(5.0, 1.0, 0.5))
        .expect_err("width above 4 m");
    assert!(matches!(
        error,
        AssessmentError::Validation(ValidationError::WidthOutOfRange { .. })
    ));

    let error = service
        .assess(request(1.0, 1.0, 0.05))
        .expect_err("transmittance below 0.1");
    assert!(matches!(
        error,
        AssessmentError::Validation(ValidationError::TransmittanceOutOfRange { .. })
    ));
}

#[test]
fn domain_bounds_policy_controls_extrapolation() {
    // 0.25 m2 sits below the smallest observed glass area of 1.0 m2.
    let tight_window = request(0.5, 0.5, 0.3);

    let lenient = service_with_policy(DomainBoundsPolicy::Extrapolate);
    let assessment = lenient
        .assess(tight_window.clone())
        .expect("extrapolation allowed");
    assert_eq!(assessment.predicted_score, Some(40.0));

    let strict = service_with_policy(DomainBoundsPolicy::Reject);
    let error = strict.assess(tight_window).expect_err("rejected");
    assert!(matches!(error, AssessmentError::Prediction(_)));
}

#[test]
fn predictions_always_come_from_the_dataset() {
    let service = DaylightService::preloaded(reference_dataset());
    let dataset = reference_dataset();

    for (width, height, tv) in [(0.5, 0.5, 0.1), (4.0, 3.0, 0.9), (2.0, 1.5, 0.45)] {
        let assessment = service
            .assess(request(width, height, tv))
            .expect("assessment succeeds");
        let point = assessment.used_point.expect("used point");
        assert!(
            dataset.rows().iter().any(|row| row.glass_area == point.glass_area
                && row.transmittance == point.transmittance),
            "used point ({}, {}) missing from dataset",
            point.glass_area,
            point.transmittance
        );
    }
}
