use log::warn;
use serde::Serialize;

use super::density::compute_density;
use super::environment::read_screen_info;
use crate::config::CalibratorConfig;
use crate::error::InvalidInputError;
use crate::traits::ScreenSource;
use crate::types::{CalibrationInput, DensityResult, LengthUnit, ScreenInfo, CREDIT_CARD_ASPECT};

/// Which calibration form is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalibrationMethod {
    #[default]
    ReferenceObject,
    ManualDiagonal,
}

/// User and host notifications understood by the calibrator
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Fresh screen reading after startup, resize or a monitor change
    ScreenChanged(ScreenInfo),
    MethodSelected(CalibrationMethod),
    /// Card slider moved, in physical pixels
    CardWidthChanged(f64),
    DiagonalEdited(String),
    UnitSelected(LengthUnit),
    /// Use the card as it currently is on screen
    Calibrate,
    /// Use the entered diagonal (button or Enter)
    Calculate,
    DismissNotice,
}

/// What handling an event did to the result
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Unchanged,
    Computed(DensityResult),
    Rejected(InvalidInputError),
}

/// Debug view of the calibrator state
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
    /// 0 until something has been computed
    pub calculated_dpi: f64,
}

/// Owns the screen snapshot, the form state and the latest result
///
/// Every result held here was computed from the current `screen`.
#[derive(Debug, Clone)]
pub struct Calibrator {
    config: CalibratorConfig,
    screen: ScreenInfo,
    method: CalibrationMethod,
    card_width: f64,
    diagonal_text: String,
    unit: LengthUnit,
    last_input: Option<CalibrationInput>,
    result: Option<DensityResult>,
    notice: Option<InvalidInputError>,
}

impl Calibrator {
    pub fn new(screen: ScreenInfo, config: CalibratorConfig) -> Self {
        Self {
            card_width: config.clamp_card_width(config.card_initial_width),
            unit: config.default_unit,
            config,
            screen,
            method: CalibrationMethod::default(),
            diagonal_text: String::new(),
            last_input: None,
            result: None,
            notice: None,
        }
    }

    /// Build from a live screen reading
    pub fn from_source(source: &dyn ScreenSource, config: CalibratorConfig) -> Self {
        Self::new(read_screen_info(source), config)
    }

    /// Re-read the screen and apply it as a `ScreenChanged` event
    pub fn rescan(&mut self, source: &dyn ScreenSource) -> Outcome {
        self.handle(Event::ScreenChanged(read_screen_info(source)))
    }

    pub fn handle(&mut self, event: Event) -> Outcome {
        match event {
            Event::ScreenChanged(screen) => self.replace_screen(screen),
            Event::MethodSelected(method) => {
                self.method = method;
                Outcome::Unchanged
            }
            Event::CardWidthChanged(width) => {
                self.card_width = self.config.clamp_card_width(width);
                Outcome::Unchanged
            }
            Event::DiagonalEdited(text) => {
                self.diagonal_text = text;
                Outcome::Unchanged
            }
            Event::UnitSelected(unit) => {
                self.unit = unit;
                Outcome::Unchanged
            }
            Event::Calibrate => self.apply(CalibrationInput::credit_card(self.card_width)),
            Event::Calculate => self.apply(CalibrationInput::ManualDiagonal {
                diagonal_value: parse_leading_number(&self.diagonal_text),
                unit: self.unit,
            }),
            Event::DismissNotice => {
                self.notice = None;
                Outcome::Unchanged
            }
        }
    }

    fn replace_screen(&mut self, screen: ScreenInfo) -> Outcome {
        if screen == self.screen {
            return Outcome::Unchanged;
        }
        self.screen = screen;

        // keep the shown result consistent with the new snapshot
        match self.last_input {
            Some(input) => self.apply(input),
            None => Outcome::Unchanged,
        }
    }

    fn apply(&mut self, input: CalibrationInput) -> Outcome {
        match compute_density(&self.screen, &input) {
            Ok(result) => {
                self.last_input = Some(input);
                self.result = Some(result.clone());
                Outcome::Computed(result)
            }
            Err(err) => {
                warn!("rejected calibration input: {:?}", err.value);
                self.notice = Some(err);
                Outcome::Rejected(err)
            }
        }
    }

    pub fn screen(&self) -> &ScreenInfo {
        &self.screen
    }

    pub fn config(&self) -> &CalibratorConfig {
        &self.config
    }

    pub fn method(&self) -> CalibrationMethod {
        self.method
    }

    /// Card width in physical pixels
    pub fn card_width(&self) -> f64 {
        self.card_width
    }

    /// Card size in physical pixels, keeping the ID-1 proportions
    pub fn card_size(&self) -> (f64, f64) {
        (self.card_width, self.card_width / CREDIT_CARD_ASPECT)
    }

    pub fn diagonal_text(&self) -> &str {
        &self.diagonal_text
    }

    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    pub fn result(&self) -> Option<&DensityResult> {
        self.result.as_ref()
    }

    /// Pending error for the user to acknowledge
    pub fn notice(&self) -> Option<&InvalidInputError> {
        self.notice.as_ref()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.screen.width_pixels,
            height: self.screen.height_pixels,
            device_pixel_ratio: self.screen.pixel_scale_factor,
            calculated_dpi: self.result.as_ref().map_or(0.0, |r| r.dpi),
        }
    }
}

/// Parse the longest numeric prefix of `text`, ignoring leading whitespace
///
/// Mirrors how a form field is read: `"24 inch"` is 24, `""` and `"abc"` are absent.
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let whole = digits_from(end);
    end += whole;

    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits_from(end + 1);
        if whole + fraction > 0 {
            end += 1 + fraction;
        }
    }
    if whole + fraction == 0 {
        return None;
    }

    // exponent only counts when digits follow it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_digits = digits_from(exponent);
        if exponent_digits > 0 {
            end = exponent + exponent_digits;
        }
    }

    text[..end].parse().ok()
}
