use std::fmt;

use serde::Serialize;

use crate::core::{detect_browser, detect_os};
use crate::traits::HostIdentity;
use crate::types::{DensityResult, ScreenInfo};

/// System information lines shown before any calibration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemReport {
    pub resolution: String,
    pub pixel_ratio: String,
    pub browser: String,
    pub os: String,
}

impl SystemReport {
    pub fn new(screen: &ScreenInfo, host: &dyn HostIdentity) -> Self {
        Self {
            resolution: format!("{} × {} pixels", screen.width_pixels, screen.height_pixels),
            pixel_ratio: format!("{:.2}", screen.pixel_scale_factor),
            browser: detect_browser(host.user_agent()).to_string(),
            os: detect_os(host.user_agent(), host.platform()).to_string(),
        }
    }
}

/// Calibration results formatted for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultReport {
    pub dpi: String,
    pub density_class: String,
    pub physical_width: String,
    pub physical_height: String,
    pub diagonal_size: String,
    pub aspect_ratio: String,
    pub total_pixels: String,
}

impl ResultReport {
    pub fn new(result: &DensityResult) -> Self {
        Self {
            dpi: format!("{} PPI", result.dpi.round()),
            density_class: result.density_class.label().to_string(),
            physical_width: inches_and_cm(result.width_inches, result.width_cm),
            physical_height: inches_and_cm(result.height_inches, result.height_cm),
            diagonal_size: inches_and_cm(result.diagonal_inches, result.diagonal_cm),
            aspect_ratio: result.aspect_ratio_label.clone(),
            total_pixels: format!("{:.2} megapixels", result.total_megapixels),
        }
    }

    /// Label/value pairs in display order
    pub fn rows(&self) -> [(&'static str, &str); 7] {
        [
            ("Pixel density", &self.dpi),
            ("Classification", &self.density_class),
            ("Physical width", &self.physical_width),
            ("Physical height", &self.physical_height),
            ("Diagonal", &self.diagonal_size),
            ("Aspect ratio", &self.aspect_ratio),
            ("Total pixels", &self.total_pixels),
        ]
    }
}

fn inches_and_cm(inches: f64, cm: f64) -> String {
    format!("{:.2}\" ({:.1} cm)", inches, cm)
}

/// Everything the command line prints
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub system: SystemReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<ResultReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<DensityResult>,
}

impl Report {
    pub fn new(screen: &ScreenInfo, host: &dyn HostIdentity, result: Option<&DensityResult>) -> Self {
        Self {
            system: SystemReport::new(screen, host),
            results: result.map(ResultReport::new),
            raw: result.cloned(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Resolution:      {}", self.system.resolution)?;
        writeln!(f, "Pixel ratio:     {}", self.system.pixel_ratio)?;
        writeln!(f, "Browser:         {}", self.system.browser)?;
        writeln!(f, "OS:              {}", self.system.os)?;

        if let Some(results) = &self.results {
            writeln!(f)?;
            for (label, value) in results.rows() {
                writeln!(f, "{:<17}{}", format!("{}:", label), value)?;
            }
        }
        Ok(())
    }
}
