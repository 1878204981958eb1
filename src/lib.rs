pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod math;
pub mod panel;
pub mod renderer;
pub mod report;
pub mod traits;
pub mod types;
pub mod window;

pub use crate::core::{compute_density, read_screen_info, Calibrator, Event, Outcome};
pub use error::InvalidInputError;
pub use types::{CalibrationInput, DensityClass, DensityResult, LengthUnit, ScreenInfo};
