use serde::{Deserialize, Serialize};

use crate::types::LengthUnit;

/// Smallest card width the slider allows, in physical pixels
pub const CARD_SLIDER_MIN: f64 = 100.0;

/// Largest card width the slider allows, in physical pixels
pub const CARD_SLIDER_MAX: f64 = 400.0;

/// Card width at the conventional 96 dpi desktop density
pub const CARD_DEFAULT_WIDTH: f64 = 324.0;

/// Calibrator settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibratorConfig {
    /// Slider lower bound in physical pixels
    pub card_min_width: f64,

    /// Slider upper bound in physical pixels
    pub card_max_width: f64,

    /// Initial slider position
    pub card_initial_width: f64,

    /// Unit preselected for manual diagonal entry
    pub default_unit: LengthUnit,
}

impl CalibratorConfig {
    /// Clamp a card width into the slider range
    pub fn clamp_card_width(&self, width: f64) -> f64 {
        width.clamp(self.card_min_width, self.card_max_width)
    }
}

impl Default for CalibratorConfig {
    fn default() -> Self {
        Self {
            card_min_width: CARD_SLIDER_MIN,
            card_max_width: CARD_SLIDER_MAX,
            card_initial_width: CARD_DEFAULT_WIDTH,
            default_unit: LengthUnit::Inch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CalibratorConfig::default();
        assert_eq!(config.card_min_width, 100.0);
        assert_eq!(config.card_max_width, 400.0);
        assert_eq!(config.default_unit, LengthUnit::Inch);
        assert_eq!(config.clamp_card_width(config.card_initial_width), 324.0);
    }

    #[test]
    fn test_clamp_card_width() {
        let config = CalibratorConfig::default();
        assert_eq!(config.clamp_card_width(50.0), 100.0);
        assert_eq!(config.clamp_card_width(1000.0), 400.0);
        assert_eq!(config.clamp_card_width(250.5), 250.5);
    }

    #[test]
    fn test_config_json() {
        let json = serde_json::to_string(&CalibratorConfig::default()).unwrap();
        assert!(json.contains("\"default_unit\":\"inch\""));
    }
}
