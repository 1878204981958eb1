mod gcd;
mod ratio;
pub mod units;

pub use gcd::gcd;
pub use ratio::{aspect_ratio_label, COMMON_RATIOS, RATIO_TOLERANCE};
