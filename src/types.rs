use serde::{Deserialize, Serialize};

/// Width of an ISO/IEC 7810 ID-1 card (credit card) in millimeters
pub const CREDIT_CARD_WIDTH_MM: f64 = 85.6;

/// Height of an ISO/IEC 7810 ID-1 card in millimeters
pub const CREDIT_CARD_HEIGHT_MM: f64 = 53.98;

/// Width to height ratio used when drawing the calibration card
pub const CREDIT_CARD_ASPECT: f64 = CREDIT_CARD_WIDTH_MM / CREDIT_CARD_HEIGHT_MM;

/// Screen geometry in physical pixels
///
/// Physical pixels are the logical size multiplied by the scale factor, so
/// they can be fractional on displays with non-integer scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenInfo {
    pub width_pixels: f64,
    pub height_pixels: f64,
    pub pixel_scale_factor: f64,
}

impl ScreenInfo {
    pub fn new(width_pixels: f64, height_pixels: f64, pixel_scale_factor: f64) -> Self {
        Self {
            width_pixels,
            height_pixels,
            pixel_scale_factor,
        }
    }

    /// Length of the screen diagonal in pixels
    pub fn diagonal_pixels(&self) -> f64 {
        self.width_pixels.hypot(self.height_pixels)
    }

    /// Total number of physical pixels
    pub fn pixel_count(&self) -> f64 {
        self.width_pixels * self.height_pixels
    }
}

/// Unit of a manually entered diagonal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    #[default]
    Inch,
    #[serde(rename = "cm")]
    Centimeter,
}

impl LengthUnit {
    pub fn label(&self) -> &'static str {
        match self {
            LengthUnit::Inch => "inches",
            LengthUnit::Centimeter => "cm",
        }
    }
}

/// Reference used to derive the display density
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CalibrationInput {
    /// On-screen rectangle resized to match a physical object
    ReferenceObject {
        on_screen_pixel_width: f64,
        known_physical_width_mm: f64,
    },
    /// Diagonal as printed on the display's spec sheet; `None` when nothing was entered
    ManualDiagonal {
        diagonal_value: Option<f64>,
        unit: LengthUnit,
    },
}

impl CalibrationInput {
    /// Reference object calibration against a credit card
    pub fn credit_card(on_screen_pixel_width: f64) -> Self {
        CalibrationInput::ReferenceObject {
            on_screen_pixel_width,
            known_physical_width_mm: CREDIT_CARD_WIDTH_MM,
        }
    }

    pub fn diagonal(value: f64, unit: LengthUnit) -> Self {
        CalibrationInput::ManualDiagonal {
            diagonal_value: Some(value),
            unit,
        }
    }
}

/// Qualitative density bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DensityClass {
    Low,
    Standard,
    High,
    Retina,
}

impl DensityClass {
    /// Classify a density; each bucket includes its lower bound
    pub fn from_dpi(dpi: f64) -> Self {
        if dpi < 100.0 {
            DensityClass::Low
        } else if dpi < 150.0 {
            DensityClass::Standard
        } else if dpi < 220.0 {
            DensityClass::High
        } else {
            DensityClass::Retina
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DensityClass::Low => "Low Density",
            DensityClass::Standard => "Standard Desktop",
            DensityClass::High => "High Density",
            DensityClass::Retina => "Retina/HiDPI",
        }
    }
}

impl std::fmt::Display for DensityClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Physical measurements derived from a screen snapshot and a calibration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityResult {
    pub dpi: f64,
    pub width_inches: f64,
    pub height_inches: f64,
    pub width_cm: f64,
    pub height_cm: f64,
    pub diagonal_inches: f64,
    pub diagonal_cm: f64,
    pub aspect_ratio_label: String,
    pub total_megapixels: f64,
    pub density_class: DensityClass,
}
