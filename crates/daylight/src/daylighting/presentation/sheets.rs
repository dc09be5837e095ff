use super::super::metrics::MetricKey;
use super::assets;
use super::colors::{legend_for, LegendEntry, NEUTRAL_COLOR};
use super::zones::zone_templates;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// A value band of the diagram, carrying the published fill and line style.
#[derive(Debug, Clone, Copy)]
struct SheetCategory {
    label: &'static str,
    // Half-open [lo, hi) band, matching the published diagrams.
    lo: u8,
    hi: u8,
    fill: &'static str,
    line: LineStyle,
}

const TEMPORAL_CATEGORIES: &[SheetCategory] = &[
    SheetCategory { label: "< 50%", lo: 0, hi: 50, fill: "#5E4FA2", line: LineStyle::Solid },
    SheetCategory { label: "[50%, 60%)", lo: 51, hi: 60, fill: "#3288BD", line: LineStyle::Solid },
    SheetCategory { label: "[60%, 70%)", lo: 61, hi: 70, fill: "#66C2A5", line: LineStyle::Solid },
    SheetCategory { label: "[70%, 80%)", lo: 71, hi: 80, fill: "#ABE095", line: LineStyle::Solid },
    SheetCategory { label: "[80%, 90%)", lo: 81, hi: 90, fill: "#E6F598", line: LineStyle::Solid },
    SheetCategory { label: ">= 90%", lo: 91, hi: 100, fill: "#FEE08B", line: LineStyle::Solid },
];

const SDA_CATEGORIES: &[SheetCategory] = &[
    SheetCategory { label: "< 55%", lo: 0, hi: 55, fill: "#5E4FA2", line: LineStyle::Solid },
    SheetCategory { label: "[55%, 75%)", lo: 55, hi: 75, fill: "#66C2A5", line: LineStyle::Solid },
    SheetCategory { label: ">= 75%", lo: 76, hi: 100, fill: "#E6F598", line: LineStyle::Solid },
];

const SUDI_CATEGORIES: &[SheetCategory] = &[
    SheetCategory { label: "< 75%", lo: 0, hi: 75, fill: "#5E4FA2", line: LineStyle::Solid },
    SheetCategory { label: "[75%, 95%)", lo: 76, hi: 95, fill: "#66C2A5", line: LineStyle::Solid },
    SheetCategory { label: ">= 95%", lo: 96, hi: 98, fill: "#E6F598", line: LineStyle::Solid },
    SheetCategory { label: "Hybrid zone", lo: 99, hi: 100, fill: "#D3D3D3", line: LineStyle::Solid },
];

const DAV_ZONE_CATEGORIES: &[SheetCategory] = &[
    SheetCategory { label: "Availability 1", lo: 0, hi: 50, fill: "#A1C781", line: LineStyle::Solid },
    SheetCategory { label: "Availability 2", lo: 60, hi: 62, fill: "#81C784", line: LineStyle::Dashed },
    SheetCategory {
        label: "Conditional availability",
        lo: 70,
        hi: 72,
        fill: "#D3D3D3",
        line: LineStyle::Dashed,
    },
];

fn categories(metric: MetricKey) -> &'static [SheetCategory] {
    match metric {
        MetricKey::Da | MetricKey::Udi => TEMPORAL_CATEGORIES,
        MetricKey::Sda => SDA_CATEGORIES,
        MetricKey::Sudi => SUDI_CATEGORIES,
        MetricKey::DavZone => DAV_ZONE_CATEGORIES,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SheetPolygon {
    pub points: Vec<[f64; 2]>,
    pub value: u8,
    pub category: &'static str,
    pub fill: &'static str,
    pub line: LineStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SheetLegendEntry {
    pub label: &'static str,
    pub fill: &'static str,
    pub line: LineStyle,
}

/// The diagram description the front end renders for one metric.
#[derive(Debug, Clone, Serialize)]
pub struct ModelSheet {
    pub metric: MetricKey,
    pub description: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub xlim: [f64; 2],
    pub ylim: [f64; 2],
    pub polygons: Vec<SheetPolygon>,
    pub legend: Vec<SheetLegendEntry>,
    /// The reading color scale, published alongside the diagram bands.
    pub scale_legend: &'static [LegendEntry],
    pub image_filename: &'static str,
}

impl ModelSheet {
    pub fn build(metric: MetricKey) -> Self {
        let bands = categories(metric);

        let polygons = zone_templates(metric)
            .iter()
            .map(|zone| {
                let band = bands
                    .iter()
                    .find(|band| band.lo <= zone.value && zone.value < band.hi);
                let (category, fill, line) = match band {
                    Some(band) => (band.label, band.fill, band.line),
                    // Values the published bands never claimed keep a
                    // neutral style instead of failing the whole sheet.
                    None => ("unclassified", NEUTRAL_COLOR, LineStyle::Solid),
                };
                SheetPolygon {
                    points: zone.points.iter().map(|&(x, y)| [x, y]).collect(),
                    value: zone.value,
                    category,
                    fill,
                    line,
                }
            })
            .collect();

        let legend = bands
            .iter()
            .map(|band| SheetLegendEntry {
                label: band.label,
                fill: band.fill,
                line: band.line,
            })
            .collect();

        Self {
            metric,
            description: metric.description(),
            x_label: "Window Area (m2)",
            y_label: "Visible Transmittance",
            xlim: [0.0, 12.0],
            ylim: [0.1, 0.9],
            polygons,
            legend,
            scale_legend: legend_for(metric),
            image_filename: assets::image_filename(metric),
        }
    }
}
