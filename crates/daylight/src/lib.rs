pub mod config;
pub mod daylighting;
pub mod error;
pub mod telemetry;
