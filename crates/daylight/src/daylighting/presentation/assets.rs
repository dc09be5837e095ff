use super::super::metrics::MetricKey;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Reference heatmap image shipped alongside the service for each metric.
pub fn image_filename(metric: MetricKey) -> &'static str {
    match metric {
        MetricKey::Da => "da_heatmap.png",
        MetricKey::Udi => "udi_heatmap.png",
        MetricKey::Sda => "sda_heatmap.png",
        MetricKey::Sudi => "sudi_heatmap.png",
        MetricKey::DavZone => "dav_zone_heatmap.png",
    }
}

pub fn image_path(assets_dir: &Path, metric: MetricKey) -> PathBuf {
    assets_dir.join(image_filename(metric))
}

/// On-disk availability of one metric's reference image.
#[derive(Debug, Clone, Serialize)]
pub struct ImageAvailability {
    pub metric: MetricKey,
    pub filename: &'static str,
    pub exists: bool,
    pub path: String,
}

pub fn list_images(assets_dir: &Path) -> Vec<ImageAvailability> {
    MetricKey::ordered()
        .into_iter()
        .map(|metric| {
            let path = image_path(assets_dir, metric);
            ImageAvailability {
                metric,
                filename: image_filename(metric),
                exists: path.exists(),
                path: path.display().to_string(),
            }
        })
        .collect()
}
