use serde::{Deserialize, Serialize};

/// The five published daylighting metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKey {
    #[serde(rename = "DA")]
    Da,
    #[serde(rename = "UDI")]
    Udi,
    #[serde(rename = "sDA")]
    Sda,
    #[serde(rename = "sUDI")]
    Sudi,
    #[serde(rename = "DAv_zone")]
    DavZone,
}

impl MetricKey {
    pub const fn ordered() -> [Self; 5] {
        [Self::Da, Self::Udi, Self::Sda, Self::Sudi, Self::DavZone]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Da => "DA",
            Self::Udi => "UDI",
            Self::Sda => "sDA",
            Self::Sudi => "sUDI",
            Self::DavZone => "DAv_zone",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Da => "Daylight Autonomy - share of occupied hours above the minimum daylight level.",
            Self::Udi => "Useful Daylight Illuminance - daylight in the useful 100-2000 lux band.",
            Self::Sda => "Spatial Daylight Autonomy - share of the floor area meeting DA.",
            Self::Sudi => "Spatial Useful Daylight Illuminance - UDI applied over the floor area.",
            Self::DavZone => "DA combined with surface and zone - hybrid of time and space coverage.",
        }
    }

    /// Parse a metric name as it appears on the wire, case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "da" => Some(Self::Da),
            "udi" => Some(Self::Udi),
            "sda" => Some(Self::Sda),
            "sudi" => Some(Self::Sudi),
            "dav_zone" => Some(Self::DavZone),
            _ => None,
        }
    }
}

/// All metric percentages derived together from a single outcome score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricSet {
    #[serde(rename = "DA")]
    pub da: u8,
    #[serde(rename = "UDI")]
    pub udi: u8,
    #[serde(rename = "sDA")]
    pub sda: u8,
    #[serde(rename = "sUDI")]
    pub sudi: u8,
    #[serde(rename = "DAv_zone")]
    pub dav_zone: u8,
    #[serde(rename = "energia")]
    pub energy: u8,
}

impl MetricSet {
    /// Expand one outcome score into the full metric set. The score is
    /// clamped to [0, 100] first; every offset result is clamped back into
    /// the same range and truncated toward zero.
    pub fn derive(score: f64) -> Self {
        let y = score.clamp(0.0, 100.0);
        let da = y as u8;
        Self {
            da,
            udi: (y + 8.0).min(100.0) as u8,
            sda: (y - 13.0).max(0.0) as u8,
            sudi: (y + 4.0).min(100.0) as u8,
            dav_zone: da,
            energy: (100.0 - y).max(0.0) as u8,
        }
    }

    pub const fn percent(&self, key: MetricKey) -> u8 {
        match key {
            MetricKey::Da => self.da,
            MetricKey::Udi => self.udi,
            MetricKey::Sda => self.sda,
            MetricKey::Sudi => self.sudi,
            MetricKey::DavZone => self.dav_zone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worked_example_from_the_reference_model() {
        let set = MetricSet::derive(40.0);
        assert_eq!(set.da, 40);
        assert_eq!(set.udi, 48);
        assert_eq!(set.sda, 27);
        assert_eq!(set.sudi, 44);
        assert_eq!(set.dav_zone, 40);
        assert_eq!(set.energy, 60);
    }

    #[test]
    fn da_and_dav_zone_always_agree() {
        for score in [0.0, 12.5, 40.0, 77.7, 100.0] {
            let set = MetricSet::derive(score);
            assert_eq!(set.da, set.dav_zone);
        }
    }

    #[test]
    fn offsets_saturate_at_the_percentage_bounds() {
        let high = MetricSet::derive(97.0);
        assert_eq!(high.udi, 100);
        assert_eq!(high.sudi, 100);
        assert_eq!(high.energy, 3);

        let low = MetricSet::derive(5.0);
        assert_eq!(low.sda, 0);
        assert_eq!(low.energy, 95);
    }

    #[test]
    fn out_of_range_scores_clamp_to_the_boundaries() {
        assert_eq!(MetricSet::derive(-5.0), MetricSet::derive(0.0));
        assert_eq!(MetricSet::derive(150.0), MetricSet::derive(100.0));
    }

    #[test]
    fn derivation_is_monotonic_in_the_score() {
        let mut previous = MetricSet::derive(0.0);
        for step in 1..=200 {
            let current = MetricSet::derive(step as f64 / 2.0);
            assert!(current.da >= previous.da);
            assert!(current.udi >= previous.udi);
            assert!(current.sda >= previous.sda);
            assert!(current.energy <= previous.energy);
            previous = current;
        }
    }

    #[test]
    fn derivation_is_deterministic() {
        assert_eq!(MetricSet::derive(63.4), MetricSet::derive(63.4));
    }

    #[test]
    fn fractional_scores_truncate_toward_zero() {
        let set = MetricSet::derive(59.9);
        assert_eq!(set.da, 59);
        assert_eq!(set.udi, 67);
    }

    #[test]
    fn metric_keys_parse_from_wire_names() {
        assert_eq!(MetricKey::parse("DA"), Some(MetricKey::Da));
        assert_eq!(MetricKey::parse("sUDI"), Some(MetricKey::Sudi));
        assert_eq!(MetricKey::parse("dav_zone"), Some(MetricKey::DavZone));
        assert_eq!(MetricKey::parse("lux"), None);
    }
}
