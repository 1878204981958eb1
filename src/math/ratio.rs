use super::gcd;

/// Canonical display ratios, checked in priority order
pub const COMMON_RATIOS: [(u32, u32); 6] = [(16, 9), (16, 10), (4, 3), (21, 9), (32, 9), (3, 2)];

/// Absolute distance at which a ratio snaps to a canonical one
pub const RATIO_TOLERANCE: f64 = 0.01;

/// Largest reduced term still shown as an integer ratio
const MAX_REDUCED_TERM: f64 = 100.0;

/// Human readable aspect ratio for a pixel resolution
///
/// Canonical ratios win first. Otherwise the resolution is reduced by its
/// GCD, falling back to a decimal `x.xx:1` when the reduced terms are large.
pub fn aspect_ratio_label(width: f64, height: f64) -> String {
    let ratio = width / height;

    if let Some((w, h)) = COMMON_RATIOS
        .iter()
        .find(|(w, h)| (ratio - *w as f64 / *h as f64).abs() < RATIO_TOLERANCE)
    {
        return format!("{}:{}", w, h);
    }

    let divisor = gcd(width, height);
    if divisor == 0 {
        return format!("{:.2}:1", ratio);
    }

    let reduced_width = width / divisor as f64;
    let reduced_height = height / divisor as f64;

    if reduced_width > MAX_REDUCED_TERM || reduced_height > MAX_REDUCED_TERM {
        return format!("{:.2}:1", ratio);
    }

    format!("{}:{}", reduced_width.round(), reduced_height.round())
}
