use log::debug;

use crate::traits::{HostIdentity, ScreenSource};
use crate::types::ScreenInfo;

/// Snapshot the physical resolution of a screen
///
/// A missing, non-positive or non-finite scale factor reads as 1.
pub fn read_screen_info(source: &dyn ScreenSource) -> ScreenInfo {
    let (logical_width, logical_height) = source.logical_size();
    let scale = source
        .scale_factor()
        .filter(|s| s.is_finite() && *s > 0.0)
        .unwrap_or(1.0);

    let info = ScreenInfo::new(logical_width * scale, logical_height * scale, scale);
    debug!(
        "screen {} x {} logical, scale {} -> {} x {} physical",
        logical_width, logical_height, scale, info.width_pixels, info.height_pixels
    );
    info
}

/// Screen with geometry supplied up front
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedScreen {
    pub logical_width: f64,
    pub logical_height: f64,
    pub scale: Option<f64>,
}

impl FixedScreen {
    pub fn new(logical_width: f64, logical_height: f64, scale: Option<f64>) -> Self {
        Self {
            logical_width,
            logical_height,
            scale,
        }
    }
}

impl ScreenSource for FixedScreen {
    fn logical_size(&self) -> (f64, f64) {
        (self.logical_width, self.logical_height)
    }

    fn scale_factor(&self) -> Option<f64> {
        self.scale
    }
}

/// Identity strings of the running process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    pub user_agent: String,
    pub platform: String,
}

impl HostInfo {
    /// Identity of the current build target; there is no user agent outside a browser
    pub fn detect() -> Self {
        Self {
            user_agent: String::new(),
            platform: platform_name(std::env::consts::OS, std::env::consts::ARCH),
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }
}

impl HostIdentity for HostInfo {
    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn platform(&self) -> &str {
        &self.platform
    }
}

/// Platform string in the style browsers report it
fn platform_name(os: &str, arch: &str) -> String {
    match os {
        "windows" => "Win32".to_string(),
        "macos" => "MacIntel".to_string(),
        "linux" => format!("Linux {}", arch),
        "ios" => "iPhone".to_string(),
        other => other.to_string(),
    }
}
