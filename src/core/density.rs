use log::{debug, info};

use crate::error::InvalidInputError;
use crate::math::aspect_ratio_label;
use crate::math::units::{cm_to_inches, inches_to_cm, mm_to_inches};
use crate::types::{CalibrationInput, DensityClass, DensityResult, LengthUnit, ScreenInfo};

/// Derive physical measurements of a screen from one calibration reference
///
/// Only the manual diagonal path is validated; reference widths come from a
/// bounded slider.
pub fn compute_density(
    screen: &ScreenInfo,
    calibration: &CalibrationInput,
) -> Result<DensityResult, InvalidInputError> {
    let dpi = derive_dpi(screen, calibration)?;
    debug!("derived {:.3} dpi from {:?}", dpi, calibration);

    let result = measure(screen, dpi);
    info!(
        "{} x {} px at {:.2} dpi: {:.2}\" diagonal, {}",
        screen.width_pixels,
        screen.height_pixels,
        result.dpi,
        result.diagonal_inches,
        result.density_class
    );
    Ok(result)
}

/// Pixels per inch implied by the calibration input
pub fn derive_dpi(
    screen: &ScreenInfo,
    calibration: &CalibrationInput,
) -> Result<f64, InvalidInputError> {
    match *calibration {
        CalibrationInput::ReferenceObject {
            on_screen_pixel_width,
            known_physical_width_mm,
        } => Ok(on_screen_pixel_width / mm_to_inches(known_physical_width_mm)),
        CalibrationInput::ManualDiagonal {
            diagonal_value,
            unit,
        } => {
            let value = validate_diagonal(diagonal_value)?;
            let diagonal_inches = match unit {
                LengthUnit::Inch => value,
                LengthUnit::Centimeter => cm_to_inches(value),
            };
            Ok(screen.diagonal_pixels() / diagonal_inches)
        }
    }
}

fn validate_diagonal(value: Option<f64>) -> Result<f64, InvalidInputError> {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => Ok(v),
        other => Err(InvalidInputError::new(other)),
    }
}

/// Physical size of the screen at a known density
///
/// The diagonal is recomputed from width and height so it always agrees with
/// them, whichever calibration produced `dpi`.
pub fn measure(screen: &ScreenInfo, dpi: f64) -> DensityResult {
    let width_inches = screen.width_pixels / dpi;
    let height_inches = screen.height_pixels / dpi;
    let diagonal_inches = width_inches.hypot(height_inches);

    DensityResult {
        dpi,
        width_inches,
        height_inches,
        width_cm: inches_to_cm(width_inches),
        height_cm: inches_to_cm(height_inches),
        diagonal_inches,
        diagonal_cm: inches_to_cm(diagonal_inches),
        aspect_ratio_label: aspect_ratio_label(screen.width_pixels, screen.height_pixels),
        total_megapixels: screen.pixel_count() / 1_000_000.0,
        density_class: DensityClass::from_dpi(dpi),
    }
}
