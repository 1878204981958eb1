use clap::{Parser, ValueEnum};

use crate::config::{CalibratorConfig, CARD_SLIDER_MAX, CARD_SLIDER_MIN};
use crate::core::{FixedScreen, HostInfo};
use crate::types::{CalibrationInput, LengthUnit};

#[derive(Parser, Debug, Clone)]
#[command(name = "screen-dpi")]
#[command(about = "Screen DPI & physical size checker", long_about = None)]
pub struct Cli {
    /// Print a report instead of opening the calibrator window
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Screen diagonal as advertised by the manufacturer
    #[arg(long, conflicts_with = "card_width", allow_negative_numbers = true)]
    pub diagonal: Option<f64>,

    /// Unit of --diagonal
    #[arg(long, value_enum, default_value_t = UnitArg::Inch)]
    pub unit: UnitArg,

    /// On-screen width in physical pixels of a rectangle matching a credit card
    #[arg(long = "card-width", value_parser = parse_card_width)]
    pub card_width: Option<f64>,

    /// Logical screen width, skips monitor detection together with --height
    #[arg(long, requires = "height")]
    pub width: Option<f64>,

    /// Logical screen height
    #[arg(long, requires = "width")]
    pub height: Option<f64>,

    /// Device pixel scale factor for --width/--height
    #[arg(long)]
    pub scale: Option<f64>,

    /// User-agent string to classify
    #[arg(long = "user-agent")]
    pub user_agent: Option<String>,

    /// Platform string to classify, defaults to the build target
    #[arg(long)]
    pub platform: Option<String>,

    /// Emit the report as JSON
    #[arg(long, default_value = "false")]
    pub json: bool,
}

/// Card widths are limited to the slider range
fn parse_card_width(arg: &str) -> Result<f64, String> {
    let width: f64 = arg.parse().map_err(|e| format!("{}", e))?;
    if (CARD_SLIDER_MIN..=CARD_SLIDER_MAX).contains(&width) {
        Ok(width)
    } else {
        Err(format!(
            "card width must be between {} and {} pixels",
            CARD_SLIDER_MIN, CARD_SLIDER_MAX
        ))
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitArg {
    #[value(alias = "in")]
    Inch,
    Cm,
}

impl From<UnitArg> for LengthUnit {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::Inch => LengthUnit::Inch,
            UnitArg::Cm => LengthUnit::Centimeter,
        }
    }
}

impl Cli {
    /// True when the invocation asks for a printed report only
    pub fn is_one_shot(&self) -> bool {
        self.no_ui || self.diagonal.is_some() || self.card_width.is_some()
    }

    /// Calibration requested on the command line, if any
    pub fn calibration(&self) -> Option<CalibrationInput> {
        if let Some(width) = self.card_width {
            return Some(CalibrationInput::credit_card(width));
        }
        self.diagonal.map(|value| CalibrationInput::ManualDiagonal {
            diagonal_value: Some(value),
            unit: self.unit.into(),
        })
    }

    /// Screen geometry given explicitly instead of detected
    pub fn fixed_screen(&self) -> Option<FixedScreen> {
        match (self.width, self.height) {
            (Some(width), Some(height)) => Some(FixedScreen::new(width, height, self.scale)),
            _ => None,
        }
    }

    pub fn host(&self) -> HostInfo {
        let mut host = HostInfo::detect();
        if let Some(ua) = &self.user_agent {
            host = host.with_user_agent(ua.clone());
        }
        if let Some(platform) = &self.platform {
            host = host.with_platform(platform.clone());
        }
        host
    }

    pub fn calibrator_config(&self) -> CalibratorConfig {
        let mut config = CalibratorConfig::default();
        config.default_unit = self.unit.into();
        if let Some(width) = self.card_width {
            config.card_initial_width = width;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("screen-dpi").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_args_opens_window() {
        let cli = parse(&[]);
        assert!(!cli.is_one_shot());
        assert!(cli.calibration().is_none());
        assert!(cli.fixed_screen().is_none());
    }

    #[test]
    fn test_diagonal_in_cm() {
        let cli = parse(&["--diagonal", "60.96", "--unit", "cm"]);
        assert!(cli.is_one_shot());
        assert_eq!(
            cli.calibration(),
            Some(CalibrationInput::diagonal(60.96, LengthUnit::Centimeter))
        );
        assert_eq!(cli.calibrator_config().default_unit, LengthUnit::Centimeter);
    }

    #[test]
    fn test_card_width_and_fixed_screen() {
        let cli = parse(&["--card-width", "200", "--width", "1440", "--height", "900", "--scale", "2"]);
        assert_eq!(cli.calibration(), Some(CalibrationInput::credit_card(200.0)));
        assert_eq!(cli.fixed_screen(), Some(FixedScreen::new(1440.0, 900.0, Some(2.0))));
    }

    #[test]
    fn test_card_width_outside_slider_range_is_rejected() {
        for width in ["0", "50", "99.9", "400.5", "-200", "NaN", "wide"] {
            let result = Cli::try_parse_from(["screen-dpi", "--card-width", width]);
            assert!(result.is_err(), "{}", width);
        }
    }

    #[test]
    fn test_card_width_bounds_are_accepted() {
        for (arg, width) in [("100", 100.0), ("400", 400.0)] {
            let cli = parse(&["--card-width", arg]);
            assert_eq!(cli.calibration(), Some(CalibrationInput::credit_card(width)));
            assert_eq!(cli.calibrator_config().card_initial_width, width);
        }
    }

    #[test]
    fn test_width_requires_height() {
        let result = Cli::try_parse_from(["screen-dpi", "--width", "1920"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_diagonal_conflicts_with_card() {
        let result = Cli::try_parse_from(["screen-dpi", "--diagonal", "24", "--card-width", "300"]);
        assert!(result.is_err());
    }
}
