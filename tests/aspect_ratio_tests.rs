use screen_dpi::math::{aspect_ratio_label, gcd, COMMON_RATIOS, RATIO_TOLERANCE};

#[cfg(test)]
mod aspect_ratio_tests {
    use super::*;

    #[test]
    fn test_full_hd_takes_canonical_shortcut() {
        assert_eq!(gcd(1920.0, 1080.0), 120);
        assert_eq!(aspect_ratio_label(1920.0, 1080.0), "16:9");
    }

    #[test]
    fn test_exact_16_9_ratio() {
        assert_eq!(aspect_ratio_label(1.7778, 1.0), "16:9");
    }

    #[test]
    fn test_1366_768_within_tolerance() {
        let ratio: f64 = 1366.0 / 768.0;
        assert!((ratio - 16.0 / 9.0).abs() < RATIO_TOLERANCE);
        assert_eq!(aspect_ratio_label(1366.0, 768.0), "16:9");
    }

    #[test]
    fn test_16_10_and_4_3_are_distinct() {
        assert_eq!(aspect_ratio_label(1680.0, 1050.0), "16:10");
        assert_eq!(aspect_ratio_label(1440.0, 900.0), "16:10");
        assert_eq!(aspect_ratio_label(1600.0, 1200.0), "4:3");
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(COMMON_RATIOS[0], (16, 9));
        assert_eq!(COMMON_RATIOS[1], (16, 10));
        assert_eq!(COMMON_RATIOS[5], (3, 2));
    }

    #[test]
    fn test_scaled_surface_laptop() {
        // 2256 x 1504 is 3:2
        assert_eq!(aspect_ratio_label(2256.0, 1504.0), "3:2");
    }

    #[test]
    fn test_portrait_screen_reduces() {
        assert_eq!(aspect_ratio_label(1080.0, 1920.0), "9:16");
    }

    #[test]
    fn test_fractional_dimensions_fall_back() {
        // 1366 x 768 at 1.25 scaling still snaps
        assert_eq!(aspect_ratio_label(1707.5, 960.0), "16:9");
        // rounds to 1708 x 1100, reduced terms 427:275
        assert_eq!(aspect_ratio_label(1707.5, 1100.0), "1.55:1");
    }
}
