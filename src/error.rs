use thiserror::Error;

/// Rejected calibration input
///
/// Raised when a manual diagonal is missing, zero, negative or not a number.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("Please enter a valid screen diagonal size.")]
pub struct InvalidInputError {
    /// The value that was entered, `None` when the field was empty or unparsable
    pub value: Option<f64>,
}

impl InvalidInputError {
    pub fn new(value: Option<f64>) -> Self {
        Self { value }
    }
}
