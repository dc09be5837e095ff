use super::super::metrics::MetricKey;
use serde::Serialize;

/// Fallback for values no scale claims.
pub const NEUTRAL_COLOR: &str = "#CCCCCC";

/// Every heatmap cell renders in the same base tone; the per-metric scales
/// below only color the derived readings.
pub const HEATMAP_BASE_COLOR: &str = "#735FF1";

/// Hex color for one metric reading.
pub fn color_for(metric: MetricKey, percent: f64) -> &'static str {
    match metric {
        MetricKey::Da | MetricKey::Udi => temporal_color(percent),
        MetricKey::Sda => spatial_autonomy_color(percent),
        MetricKey::Sudi => spatial_illuminance_color(percent),
        MetricKey::DavZone => availability_color(percent),
    }
}

/// DA and UDI share the six-band temporal scale.
fn temporal_color(percent: f64) -> &'static str {
    if percent < 50.0 {
        "#3C8EEA"
    } else if percent < 60.0 {
        "#75D766"
    } else if percent < 70.0 {
        "#C8A443"
    } else if percent < 80.0 {
        "#E07060"
    } else if percent < 90.0 {
        "#E74487"
    } else {
        "#DA3DA5"
    }
}

fn spatial_autonomy_color(percent: f64) -> &'static str {
    if percent < 55.0 {
        "#3C8EEA"
    } else if percent < 75.0 {
        "#C8A443"
    } else {
        "#E04196"
    }
}

fn spatial_illuminance_color(percent: f64) -> &'static str {
    if percent < 75.0 {
        "#31ADD7"
    } else if percent < 95.0 {
        "#E74487"
    } else {
        "#D33AB4"
    }
}

/// Availability zones split the scale in thirds.
fn availability_color(percent: f64) -> &'static str {
    if percent < 33.33 {
        "#9EB054"
    } else if percent < 66.66 {
        "#42DA97"
    } else {
        "#D5D5D5"
    }
}

pub fn heatmap_colors(len: usize) -> Vec<&'static str> {
    vec![HEATMAP_BASE_COLOR; len]
}

/// One entry of a metric's published legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub range: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

const TEMPORAL_LEGEND: &[LegendEntry] = &[
    LegendEntry { range: "< 50%", color: "#735FF1", description: "Insuficiente" },
    LegendEntry { range: "[50%, 60%)", color: "#339CE5", description: "Aceptable" },
    LegendEntry { range: "[60%, 70%)", color: "#42DA97", description: "Bueno" },
    LegendEntry { range: "[70%, 80%)", color: "#9EB054", description: "Muy bueno" },
    LegendEntry { range: "[80%, 90%)", color: "#C8A443", description: "Excelente" },
    LegendEntry { range: ">= 90%", color: "#E74487", description: "Excesivo" },
];

const SDA_LEGEND: &[LegendEntry] = &[
    LegendEntry { range: "< 55%", color: "#735FF1", description: "Insuficiente" },
    LegendEntry { range: "[55%, 75%)", color: "#42DA97", description: "Aceptable" },
    LegendEntry { range: ">= 75%", color: "#C8A443", description: "Optimo" },
];

const SUDI_LEGEND: &[LegendEntry] = &[
    LegendEntry { range: "< 75%", color: "#735FF1", description: "Insuficiente" },
    LegendEntry { range: "[75%, 95%)", color: "#42DA97", description: "Aceptable" },
    LegendEntry { range: ">= 95%", color: "#C8A443", description: "Excesivo" },
    LegendEntry { range: "Hybrid zone", color: "#D5D5D5", description: "Zona hibrida" },
];

const DAV_ZONE_LEGEND: &[LegendEntry] = &[
    LegendEntry { range: "Availability 1", color: "#9EB054", description: "Disponibilidad 1" },
    LegendEntry { range: "Availability 2", color: "#42DA97", description: "Disponibilidad 2" },
    LegendEntry {
        range: "Conditional availability",
        color: "#D5D5D5",
        description: "Disponibilidad condicional",
    },
];

pub fn legend_for(metric: MetricKey) -> &'static [LegendEntry] {
    match metric {
        MetricKey::Da | MetricKey::Udi => TEMPORAL_LEGEND,
        MetricKey::Sda => SDA_LEGEND,
        MetricKey::Sudi => SUDI_LEGEND,
        MetricKey::DavZone => DAV_ZONE_LEGEND,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temporal_scale_band_edges() {
        assert_eq!(color_for(MetricKey::Da, 49.9), "#3C8EEA");
        assert_eq!(color_for(MetricKey::Da, 50.0), "#75D766");
        assert_eq!(color_for(MetricKey::Da, 69.9), "#C8A443");
        assert_eq!(color_for(MetricKey::Da, 89.9), "#E74487");
        assert_eq!(color_for(MetricKey::Da, 90.0), "#DA3DA5");
    }

    #[test]
    fn da_and_udi_share_the_temporal_scale() {
        for percent in [0.0, 55.0, 65.0, 75.0, 85.0, 95.0] {
            assert_eq!(
                color_for(MetricKey::Da, percent),
                color_for(MetricKey::Udi, percent)
            );
        }
    }

    #[test]
    fn spatial_scales_have_their_own_edges() {
        assert_eq!(color_for(MetricKey::Sda, 54.9), "#3C8EEA");
        assert_eq!(color_for(MetricKey::Sda, 55.0), "#C8A443");
        assert_eq!(color_for(MetricKey::Sda, 75.0), "#E04196");

        assert_eq!(color_for(MetricKey::Sudi, 74.9), "#31ADD7");
        assert_eq!(color_for(MetricKey::Sudi, 75.0), "#E74487");
        assert_eq!(color_for(MetricKey::Sudi, 95.0), "#D33AB4");
    }

    #[test]
    fn availability_scale_splits_in_thirds() {
        assert_eq!(color_for(MetricKey::DavZone, 20.0), "#9EB054");
        assert_eq!(color_for(MetricKey::DavZone, 50.0), "#42DA97");
        assert_eq!(color_for(MetricKey::DavZone, 80.0), "#D5D5D5");
    }

    #[test]
    fn heatmap_colors_match_the_row_count() {
        let colors = heatmap_colors(4);
        assert_eq!(colors.len(), 4);
        assert!(colors.iter().all(|color| *color == HEATMAP_BASE_COLOR));
    }

    #[test]
    fn every_metric_has_a_legend() {
        for metric in MetricKey::ordered() {
            assert!(!legend_for(metric).is_empty());
        }
    }
}
