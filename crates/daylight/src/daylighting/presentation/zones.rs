use super::super::metrics::MetricKey;

/// One diagram polygon in (window area, visible transmittance) space, tagged
/// with a representative metric value for coloring and categorization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneTemplate {
    pub points: &'static [(f64, f64)],
    pub value: u8,
}

const DA_ZONES: &[ZoneTemplate] = &[
    ZoneTemplate {
        points: &[
            (0.25, 0.1), (0.25, 0.9), (0.55, 0.9), (0.55, 0.45), (1.5, 0.45),
            (1.5, 0.35), (3.3, 0.35), (3.3, 0.15), (5.9, 0.15), (5.9, 0.1),
        ],
        value: 30,
    },
    ZoneTemplate {
        points: &[(0.55, 0.45), (0.55, 0.9), (1.5, 0.9), (1.5, 0.45)],
        value: 55,
    },
    ZoneTemplate {
        points: &[(5.9, 0.15), (12.0, 0.15), (12.0, 0.1), (5.9, 0.1)],
        value: 65,
    },
    ZoneTemplate {
        points: &[(1.5, 0.35), (1.5, 0.9), (3.3, 0.9), (3.3, 0.35)],
        value: 75,
    },
    ZoneTemplate {
        points: &[(3.3, 0.15), (3.3, 0.35), (12.0, 0.35), (12.0, 0.15)],
        value: 85,
    },
    ZoneTemplate {
        points: &[(3.3, 0.35), (3.3, 0.9), (12.0, 0.9), (12.0, 0.35)],
        value: 91,
    },
];

const UDI_ZONES: &[ZoneTemplate] = &[
    ZoneTemplate {
        points: &[
            (0.25, 0.1), (0.25, 0.9), (1.1, 0.9), (1.1, 0.35), (2.0, 0.35),
            (2.0, 0.25), (3.0, 0.25), (3.0, 0.15), (5.9, 0.15), (5.9, 0.1),
        ],
        value: 25,
    },
    ZoneTemplate {
        points: &[(6.1, 0.65), (6.1, 0.9), (12.0, 0.9), (12.0, 0.55), (8.0, 0.55), (8.0, 0.65)],
        value: 25,
    },
    ZoneTemplate {
        points: &[(1.1, 0.35), (1.1, 0.65), (2.0, 0.65), (2.0, 0.35)],
        value: 55,
    },
    ZoneTemplate {
        points: &[(5.9, 0.1), (5.9, 0.15), (12.0, 0.15), (12.0, 0.1)],
        value: 55,
    },
    ZoneTemplate {
        points: &[(2.0, 0.25), (2.0, 0.55), (12.0, 0.55), (12.0, 0.15), (3.0, 0.15), (3.0, 0.25)],
        value: 65,
    },
    ZoneTemplate {
        points: &[(1.1, 0.65), (1.1, 0.9), (6.1, 0.9), (6.1, 0.65)],
        value: 65,
    },
    ZoneTemplate {
        points: &[(2.0, 0.55), (2.0, 0.65), (8.0, 0.65), (8.0, 0.55)],
        value: 75,
    },
];

const SDA_ZONES: &[ZoneTemplate] = &[
    ZoneTemplate {
        points: &[
            (0.25, 0.1), (0.25, 0.9), (0.95, 0.9), (0.95, 0.55), (1.5, 0.55),
            (1.5, 0.35), (3.0, 0.35), (3.0, 0.15), (8.0, 0.15), (8.0, 0.1),
        ],
        value: 25,
    },
    ZoneTemplate {
        points: &[
            (0.25, 0.9), (0.95, 0.9), (0.95, 0.55), (1.5, 0.55), (1.5, 0.35),
            (3.0, 0.35), (3.0, 0.15), (8.0, 0.15), (8.0, 0.1), (12.0, 0.1), (12.0, 0.9),
        ],
        value: 80,
    },
];

const SUDI_ZONES: &[ZoneTemplate] = &[
    ZoneTemplate {
        points: &[(4.7, 0.75), (4.7, 0.9), (12.0, 0.9), (12.0, 0.45), (6.1, 0.45), (6.1, 0.75)],
        value: 37,
    },
    ZoneTemplate {
        points: &[
            (0.25, 0.1), (0.25, 0.9), (1.1, 0.9), (1.1, 0.45), (2.5, 0.45),
            (2.5, 0.25), (6.1, 0.25), (6.1, 0.15), (9.1, 0.15), (9.1, 0.1),
        ],
        value: 37,
    },
    ZoneTemplate {
        points: &[(1.1, 0.45), (1.1, 0.9), (4.7, 0.9), (4.7, 0.75), (6.1, 0.75), (6.1, 0.45)],
        value: 85,
    },
    ZoneTemplate {
        points: &[(9.1, 0.1), (9.1, 0.15), (12.0, 0.15), (12.0, 0.1)],
        value: 85,
    },
    ZoneTemplate {
        points: &[(6.1, 0.35), (6.1, 0.45), (8.6, 0.45), (8.6, 0.35)],
        value: 85,
    },
    ZoneTemplate {
        points: &[(6.1, 0.15), (6.1, 0.25), (12.0, 0.25), (12.0, 0.15)],
        value: 97,
    },
    ZoneTemplate {
        points: &[(2.5, 0.25), (2.5, 0.45), (6.1, 0.45), (6.1, 0.25)],
        value: 99,
    },
    ZoneTemplate {
        points: &[(6.1, 0.25), (6.1, 0.35), (12.0, 0.35), (12.0, 0.25)],
        value: 99,
    },
    ZoneTemplate {
        points: &[(8.6, 0.35), (8.6, 0.45), (12.0, 0.45), (12.0, 0.35)],
        value: 99,
    },
];

const DAV_ZONE_ZONES: &[ZoneTemplate] = &[
    ZoneTemplate {
        points: &[
            (1.1, 0.45), (1.1, 0.9), (6.1, 0.9), (6.1, 0.65), (8.0, 0.65), (8.0, 0.55),
            (12.0, 0.55), (12.0, 0.1), (5.9, 0.1), (5.9, 0.15), (3.3, 0.15), (3.3, 0.35),
            (1.5, 0.35), (1.5, 0.45),
        ],
        value: 49,
    },
    ZoneTemplate {
        points: &[
            (1.1, 0.55), (1.1, 0.9), (4.7, 0.9), (4.7, 0.75), (6.1, 0.75), (6.1, 0.45),
            (12.0, 0.45), (12.0, 0.1), (8.6, 0.1), (8.6, 0.15), (6.1, 0.15), (6.1, 0.25),
            (3.3, 0.25), (3.3, 0.35), (2.5, 0.35), (2.5, 0.45), (1.5, 0.45), (1.5, 0.55),
        ],
        value: 61,
    },
    ZoneTemplate {
        points: &[(8.6, 0.35), (8.6, 0.45), (12.0, 0.45), (12.0, 0.35)],
        value: 71,
    },
];

pub fn zone_templates(metric: MetricKey) -> &'static [ZoneTemplate] {
    match metric {
        MetricKey::Da => DA_ZONES,
        MetricKey::Udi => UDI_ZONES,
        MetricKey::Sda => SDA_ZONES,
        MetricKey::Sudi => SUDI_ZONES,
        MetricKey::DavZone => DAV_ZONE_ZONES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_metric_has_zones() {
        for metric in MetricKey::ordered() {
            assert!(!zone_templates(metric).is_empty());
        }
    }

    #[test]
    fn polygons_stay_inside_the_diagram_bounds() {
        for metric in MetricKey::ordered() {
            for zone in zone_templates(metric) {
                assert!(zone.points.len() >= 4, "{metric:?} polygon too small");
                for (area, tv) in zone.points {
                    assert!((0.25..=12.0).contains(area), "{metric:?} area {area}");
                    assert!((0.1..=0.9).contains(tv), "{metric:?} tv {tv}");
                }
            }
        }
    }

    #[test]
    fn representative_values_are_percentages() {
        for metric in MetricKey::ordered() {
            assert!(zone_templates(metric)
                .iter()
                .all(|zone| zone.value <= 100));
        }
    }
}
