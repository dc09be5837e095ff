//! Static presentation data: color scales, polygon zone tables, and the
//! per-metric model sheets assembled from them. Everything here is fixed
//! configuration consulted at request time, never regenerated.

pub mod assets;
pub mod colors;
pub mod sheets;
pub mod zones;

pub use assets::{image_filename, image_path, list_images, ImageAvailability};
pub use colors::{color_for, heatmap_colors, legend_for, LegendEntry, NEUTRAL_COLOR};
pub use sheets::{LineStyle, ModelSheet, SheetLegendEntry, SheetPolygon};
pub use zones::{zone_templates, ZoneTemplate};
