/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

pub fn cm_to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

pub fn mm_to_inches(mm: f64) -> f64 {
    mm / MM_PER_INCH
}
