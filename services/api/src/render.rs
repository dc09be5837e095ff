use clap::Args;
use std::path::PathBuf;

use daylight::config::AppConfig;
use daylight::daylighting::{
    Assessment, DaylightService, DomainBoundsPolicy, ReferenceDataset, SharedDataset,
    WindowLimits, WindowRequest,
};
use daylight::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Window width in meters
    #[arg(long)]
    pub(crate) width: Option<f64>,
    /// Window height in meters
    #[arg(long)]
    pub(crate) height: Option<f64>,
    /// Visible transmittance of the glazing (0.1-0.9)
    #[arg(long)]
    pub(crate) tv: f64,
    /// Window orientation (name or code, e.g. Norte or N)
    #[arg(long)]
    pub(crate) orientation: Option<String>,
    /// Project location, echoed into the output
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Space or room name, echoed into the output
    #[arg(long)]
    pub(crate) space_name: Option<String>,
    /// Reference dataset CSV (defaults to the configured candidates)
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
    /// Reject queries outside the dataset's observed range
    #[arg(long)]
    pub(crate) enforce_domain_bounds: bool,
}

#[derive(Args, Debug)]
pub(crate) struct StatsArgs {
    /// Reference dataset CSV (defaults to the configured candidates)
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
}

fn one_shot_service(
    dataset_override: Option<PathBuf>,
    enforce_domain_bounds: bool,
) -> Result<DaylightService, AppError> {
    let config = AppConfig::load()?;
    let candidates = match dataset_override {
        Some(path) => vec![path],
        None => config.data.dataset_candidates.clone(),
    };
    let dataset = ReferenceDataset::locate(&candidates)?;
    let policy = DomainBoundsPolicy::from_flag(
        enforce_domain_bounds || config.predictor.enforce_domain_bounds,
    );
    Ok(DaylightService::new(
        SharedDataset::preloaded(dataset),
        WindowLimits::default(),
        policy,
        config.data.assets_dir,
    ))
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        width,
        height,
        tv,
        orientation,
        location,
        space_name,
        dataset,
        enforce_domain_bounds,
    } = args;

    let service = one_shot_service(dataset, enforce_domain_bounds)?;
    let assessment = service.assess(WindowRequest {
        width,
        height,
        transmittance: tv,
        orientation,
        location,
        space_name,
    })?;

    render_assessment(&assessment);
    Ok(())
}

pub(crate) fn run_stats(args: StatsArgs) -> Result<(), AppError> {
    let service = one_shot_service(args.dataset, false)?;
    let stats = service.stats()?;

    println!("Reference dataset statistics");
    if let Some(source) = &stats.source {
        println!("Source: {source}");
    }
    println!("Rows: {}", stats.total_rows);
    for (axis, summary) in [
        ("glass area (m2)", stats.glass_area),
        ("transmittance", stats.transmittance),
        ("outcome score", stats.outcome_score),
    ] {
        if let Some(summary) = summary {
            println!(
                "- {axis}: min {:.4}, max {:.4}, mean {:.4}",
                summary.min, summary.max, summary.mean
            );
        }
    }

    Ok(())
}

fn render_assessment(assessment: &Assessment) {
    println!("Daylight assessment");
    println!("{}", assessment.summary);

    if let (Some(score), Some(point)) = (assessment.predicted_score, assessment.used_point) {
        println!(
            "Predicted score {score} from reference point ({} m2, tv {})",
            point.glass_area, point.transmittance
        );
    }

    if !assessment.metrics.is_empty() {
        println!("\nMetrics");
        for reading in &assessment.metrics {
            println!(
                "- {}: {}% ({})",
                reading.key.label(),
                reading.percent,
                reading.hex
            );
        }
    }

    if let Some(energy) = assessment.energy_pct {
        println!("\nEnergy: {energy}%");
    }

    match (assessment.orientation.as_deref(), assessment.orientation_code) {
        (Some(text), Some(code)) => println!("Orientation: {text} ({code})"),
        (Some(text), None) => println!("Orientation: {text} (unrecognized)"),
        _ => {}
    }

    if let Some(location) = &assessment.location {
        println!("Location: {location}");
    }
    if let Some(space) = &assessment.space_name {
        println!("Space: {space}");
    }
}
