use serde::{Deserialize, Serialize};

/// Window compass orientation. Codes and display names are the wire contract
/// inherited from the published dataset (O = Oeste, west).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    North,
    South,
    East,
    West,
    Northeast,
    Northwest,
    Southeast,
    Southwest,
}

impl Orientation {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::North,
            Self::South,
            Self::East,
            Self::West,
            Self::Northeast,
            Self::Northwest,
            Self::Southeast,
            Self::Southwest,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::South => "S",
            Self::East => "E",
            Self::West => "O",
            Self::Northeast => "NE",
            Self::Northwest => "NO",
            Self::Southeast => "SE",
            Self::Southwest => "SO",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::North => "Norte",
            Self::South => "Sur",
            Self::East => "Este",
            Self::West => "Oeste",
            Self::Northeast => "Noreste",
            Self::Northwest => "Noroeste",
            Self::Southeast => "Sudeste",
            Self::Southwest => "Sudoeste",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_uppercase();
        Self::ordered()
            .into_iter()
            .find(|orientation| orientation.code() == code)
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ordered()
            .into_iter()
            .find(|orientation| orientation.label() == label)
    }

    /// Accept either the short code or the display name. Unknown text is not
    /// an error at this layer; callers echo it back without a code.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::from_label(raw).or_else(|| Self::from_code(raw))
    }
}
