use screen_dpi::config::CalibratorConfig;
use screen_dpi::core::{CalibrationMethod, Calibrator, Event, FixedScreen, Outcome};
use screen_dpi::types::{DensityClass, LengthUnit, ScreenInfo};

#[cfg(test)]
mod calibrator_tests {
    use super::*;

    fn full_hd() -> Calibrator {
        Calibrator::new(ScreenInfo::new(1920.0, 1080.0, 1.0), CalibratorConfig::default())
    }

    fn computed(outcome: Outcome) -> screen_dpi::DensityResult {
        match outcome {
            Outcome::Computed(result) => result,
            other => panic!("expected a result, got {:?}", other),
        }
    }

    #[test]
    fn test_manual_flow() {
        let mut cal = full_hd();
        cal.handle(Event::MethodSelected(CalibrationMethod::ManualDiagonal));
        cal.handle(Event::DiagonalEdited("24".to_string()));
        assert!(cal.result().is_none());

        let result = computed(cal.handle(Event::Calculate));
        assert!((result.dpi - 91.79).abs() < 0.01);
        assert_eq!(cal.snapshot().calculated_dpi, result.dpi);
    }

    #[test]
    fn test_manual_flow_in_centimeters() {
        let mut cal = full_hd();
        cal.handle(Event::UnitSelected(LengthUnit::Centimeter));
        cal.handle(Event::DiagonalEdited("60.96".to_string()));
        let result = computed(cal.handle(Event::Calculate));
        assert!((result.diagonal_inches - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_or_garbage_diagonal_is_rejected() {
        for text in ["", "   ", "abc", "0", "-15"] {
            let mut cal = full_hd();
            cal.handle(Event::DiagonalEdited(text.to_string()));
            assert!(
                matches!(cal.handle(Event::Calculate), Outcome::Rejected(_)),
                "{:?}",
                text
            );
            assert!(cal.result().is_none());
            assert!(cal.notice().is_some());
        }
    }

    #[test]
    fn test_slider_does_not_compute_until_calibrate() {
        let mut cal = full_hd();
        assert_eq!(cal.handle(Event::CardWidthChanged(200.0)), Outcome::Unchanged);
        assert!(cal.result().is_none());

        let result = computed(cal.handle(Event::Calibrate));
        assert!((result.dpi - 59.35).abs() < 0.01);
    }

    #[test]
    fn test_screen_change_recomputes_result() {
        let mut cal = full_hd();
        cal.handle(Event::DiagonalEdited("24".to_string()));
        cal.handle(Event::Calculate);

        // same panel, different scaling reported
        let result = computed(cal.handle(Event::ScreenChanged(ScreenInfo::new(3840.0, 2160.0, 2.0))));
        assert!((result.dpi - 183.58).abs() < 0.01);
        assert_eq!(result.density_class, DensityClass::High);
        assert_eq!(cal.result(), Some(&result));
    }

    #[test]
    fn test_identical_screen_is_ignored() {
        let mut cal = full_hd();
        cal.handle(Event::Calibrate);
        let outcome = cal.handle(Event::ScreenChanged(ScreenInfo::new(1920.0, 1080.0, 1.0)));
        assert_eq!(outcome, Outcome::Unchanged);
    }

    #[test]
    fn test_screen_change_without_result_only_replaces_snapshot() {
        let mut cal = full_hd();
        let outcome = cal.handle(Event::ScreenChanged(ScreenInfo::new(2560.0, 1440.0, 1.0)));
        assert_eq!(outcome, Outcome::Unchanged);
        assert_eq!(cal.snapshot().width, 2560.0);
        assert!(cal.result().is_none());
    }

    #[test]
    fn test_rejected_input_is_not_replayed_on_resize() {
        let mut cal = full_hd();
        cal.handle(Event::Calibrate);
        let before = cal.result().cloned().unwrap();

        cal.handle(Event::DiagonalEdited("nope".to_string()));
        cal.handle(Event::Calculate);

        // card calibration is the last accepted one
        let after = computed(cal.handle(Event::ScreenChanged(ScreenInfo::new(2560.0, 1440.0, 1.0))));
        assert_eq!(after.dpi, before.dpi);
        assert_eq!(after.aspect_ratio_label, "16:9");
    }

    #[test]
    fn test_rescan_reads_source() {
        let mut cal = Calibrator::from_source(
            &FixedScreen::new(1440.0, 900.0, Some(2.0)),
            CalibratorConfig::default(),
        );
        assert_eq!(cal.screen(), &ScreenInfo::new(2880.0, 1800.0, 2.0));

        cal.rescan(&FixedScreen::new(1440.0, 900.0, None));
        let snapshot = cal.snapshot();
        assert_eq!(snapshot.width, 1440.0);
        assert_eq!(snapshot.device_pixel_ratio, 1.0);
    }

    #[test]
    fn test_snapshot_json() {
        let cal = full_hd();
        let json = serde_json::to_string(&cal.snapshot()).unwrap();
        assert_eq!(
            json,
            r#"{"width":1920.0,"height":1080.0,"device_pixel_ratio":1.0,"calculated_dpi":0.0}"#
        );
    }
}
