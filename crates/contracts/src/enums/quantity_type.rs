use serde::{Deserialize, Serialize};

/// How many physical eggs one unit of quantity represents.
///
/// The storefront sells by individual egg, half dozen and dozen; tray and
/// half-tray are larger bulk units that still appear in previously saved
/// orders and must stay parseable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum QuantityType {
    #[default]
    #[serde(rename = "individual")]
    Individual,
    #[serde(rename = "half-dozen")]
    HalfDozen,
    #[serde(rename = "dozen")]
    Dozen,
    #[serde(rename = "half-tray")]
    HalfTray,
    #[serde(rename = "tray")]
    Tray,
}

impl QuantityType {
    /// Stable code used in persisted JSON.
    pub fn code(&self) -> &'static str {
        match self {
            QuantityType::Individual => "individual",
            QuantityType::HalfDozen => "half-dozen",
            QuantityType::Dozen => "dozen",
            QuantityType::HalfTray => "half-tray",
            QuantityType::Tray => "tray",
        }
    }

    /// Human readable name for the UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            QuantityType::Individual => "Individual",
            QuantityType::HalfDozen => "Half Dozen",
            QuantityType::Dozen => "Dozen",
            QuantityType::HalfTray => "Half Tray",
            QuantityType::Tray => "Tray",
        }
    }

    /// Number of eggs a single unit of this type stands for.
    pub fn eggs_per_unit(&self) -> u32 {
        match self {
            QuantityType::Individual => 1,
            QuantityType::HalfDozen => 6,
            QuantityType::Dozen => 12,
            QuantityType::HalfTray => 15,
            QuantityType::Tray => 30,
        }
    }

    /// The unit sizes offered by the product card selector.
    pub fn selector_options() -> [QuantityType; 3] {
        [
            QuantityType::Individual,
            QuantityType::HalfDozen,
            QuantityType::Dozen,
        ]
    }

    /// Parse from a persisted code. Unknown codes fall back to `Individual`
    /// so a partially corrupt blob stays viewable.
    pub fn from_code(code: &str) -> Self {
        match code {
            "individual" => QuantityType::Individual,
            "half-dozen" => QuantityType::HalfDozen,
            "dozen" => QuantityType::Dozen,
            "half-tray" => QuantityType::HalfTray,
            "tray" => QuantityType::Tray,
            _ => QuantityType::Individual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for qt in [
            QuantityType::Individual,
            QuantityType::HalfDozen,
            QuantityType::Dozen,
            QuantityType::HalfTray,
            QuantityType::Tray,
        ] {
            assert_eq!(QuantityType::from_code(qt.code()), qt);
        }
    }

    #[test]
    fn test_unknown_code_defaults_to_individual() {
        assert_eq!(QuantityType::from_code("crate"), QuantityType::Individual);
        assert_eq!(QuantityType::from_code(""), QuantityType::Individual);
    }

    #[test]
    fn test_eggs_per_unit() {
        assert_eq!(QuantityType::Individual.eggs_per_unit(), 1);
        assert_eq!(QuantityType::HalfDozen.eggs_per_unit(), 6);
        assert_eq!(QuantityType::Dozen.eggs_per_unit(), 12);
        assert_eq!(QuantityType::HalfTray.eggs_per_unit(), 15);
        assert_eq!(QuantityType::Tray.eggs_per_unit(), 30);
    }
}
