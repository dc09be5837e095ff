use serde::Deserialize;

/// Incoming window specification. Width and height are optional; without
/// both, the service returns the heatmap only and skips prediction.
#[derive(Debug, Clone, Deserialize)]
pub struct WindowRequest {
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    pub transmittance: f64,
    #[serde(default)]
    pub orientation: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub space_name: Option<String>,
}

/// Physical bounds a window specification must satisfy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowLimits {
    pub min_width: f64,
    pub max_width: f64,
    pub min_height: f64,
    pub max_height: f64,
    pub min_transmittance: f64,
    pub max_transmittance: f64,
    pub max_glass_area: f64,
}

impl Default for WindowLimits {
    fn default() -> Self {
        Self {
            min_width: 0.25,
            max_width: 4.0,
            min_height: 0.25,
            max_height: 3.0,
            min_transmittance: 0.1,
            max_transmittance: 0.9,
            max_glass_area: 12.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("width {value} m is outside [{min}, {max}] m")]
    WidthOutOfRange { value: f64, min: f64, max: f64 },
    #[error("height {value} m is outside [{min}, {max}] m")]
    HeightOutOfRange { value: f64, min: f64, max: f64 },
    #[error("transmittance {value} is outside [{min}, {max}]")]
    TransmittanceOutOfRange { value: f64, min: f64, max: f64 },
    #[error("glass area {area} m2 exceeds the {max} m2 maximum")]
    AreaTooLarge { area: f64, max: f64 },
}

impl WindowRequest {
    /// Glass area in m2, rounded to four decimal places, when both
    /// dimensions are present.
    pub fn glass_area(&self) -> Option<f64> {
        match (self.width, self.height) {
            (Some(width), Some(height)) => Some(round4(width * height)),
            _ => None,
        }
    }

    /// Range-check the request against the configured limits, yielding the
    /// glass area the predictor should use (if any).
    pub fn validate(&self, limits: &WindowLimits) -> Result<Option<f64>, ValidationError> {
        if !self.transmittance.is_finite() {
            return Err(ValidationError::NonFinite {
                field: "transmittance",
            });
        }
        if self.transmittance < limits.min_transmittance
            || self.transmittance > limits.max_transmittance
        {
            return Err(ValidationError::TransmittanceOutOfRange {
                value: self.transmittance,
                min: limits.min_transmittance,
                max: limits.max_transmittance,
            });
        }

        if let Some(width) = self.width {
            if !width.is_finite() {
                return Err(ValidationError::NonFinite { field: "width" });
            }
            if width < limits.min_width || width > limits.max_width {
                return Err(ValidationError::WidthOutOfRange {
                    value: width,
                    min: limits.min_width,
                    max: limits.max_width,
                });
            }
        }
        if let Some(height) = self.height {
            if !height.is_finite() {
                return Err(ValidationError::NonFinite { field: "height" });
            }
            if height < limits.min_height || height > limits.max_height {
                return Err(ValidationError::HeightOutOfRange {
                    value: height,
                    min: limits.min_height,
                    max: limits.max_height,
                });
            }
        }

        match self.glass_area() {
            Some(area) if area > limits.max_glass_area => Err(ValidationError::AreaTooLarge {
                area,
                max: limits.max_glass_area,
            }),
            area => Ok(area),
        }
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(width: Option<f64>, height: Option<f64>, transmittance: f64) -> WindowRequest {
        WindowRequest {
            width,
            height,
            transmittance,
            orientation: None,
            location: None,
            space_name: None,
        }
    }

    #[test]
    fn full_window_passes_and_reports_its_area() {
        let area = request(Some(2.0), Some(1.5), 0.6)
            .validate(&WindowLimits::default())
            .expect("valid window");
        assert_eq!(area, Some(3.0));
    }

    #[test]
    fn dimensionless_request_is_valid_without_an_area() {
        let area = request(None, None, 0.5)
            .validate(&WindowLimits::default())
            .expect("valid request");
        assert_eq!(area, None);
    }

    #[test]
    fn one_missing_dimension_means_no_area() {
        let area = request(Some(2.0), None, 0.5)
            .validate(&WindowLimits::default())
            .expect("valid request");
        assert_eq!(area, None);
    }

    #[test]
    fn glass_area_rounds_to_four_decimals() {
        let window = request(Some(1.111), Some(1.111), 0.5);
        assert_eq!(window.glass_area(), Some(1.2343));
    }

    #[test]
    fn transmittance_bounds_are_enforced() {
        let error = request(None, None, 0.05)
            .validate(&WindowLimits::default())
            .expect_err("too low");
        assert!(matches!(
            error,
            ValidationError::TransmittanceOutOfRange { .. }
        ));

        assert!(request(None, None, 0.95)
            .validate(&WindowLimits::default())
            .is_err());
    }

    #[test]
    fn dimension_bounds_are_enforced() {
        let error = request(Some(4.5), Some(1.0), 0.5)
            .validate(&WindowLimits::default())
            .expect_err("too wide");
        assert!(matches!(error, ValidationError::WidthOutOfRange { .. }));

        let error = request(Some(1.0), Some(0.1), 0.5)
            .validate(&WindowLimits::default())
            .expect_err("too short");
        assert!(matches!(error, ValidationError::HeightOutOfRange { .. }));
    }

    #[test]
    fn oversized_glass_area_is_rejected() {
        let limits = WindowLimits {
            max_glass_area: 6.0,
            ..WindowLimits::default()
        };
        let error = request(Some(3.0), Some(2.5), 0.5)
            .validate(&limits)
            .expect_err("7.5 m2 exceeds the 6 m2 cap");
        assert!(matches!(
            error,
            ValidationError::AreaTooLarge { area, max } if area == 7.5 && max == 6.0
        ));
    }

    #[test]
    fn area_exactly_at_the_cap_is_allowed() {
        let area = request(Some(4.0), Some(3.0), 0.5)
            .validate(&WindowLimits::default())
            .expect("12.0 m2 is allowed");
        assert_eq!(area, Some(12.0));
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        assert!(matches!(
            request(None, None, f64::NAN).validate(&WindowLimits::default()),
            Err(ValidationError::NonFinite { field: "transmittance" })
        ));
        assert!(matches!(
            request(Some(f64::INFINITY), Some(1.0), 0.5).validate(&WindowLimits::default()),
            Err(ValidationError::NonFinite { field: "width" })
        ));
    }
}
