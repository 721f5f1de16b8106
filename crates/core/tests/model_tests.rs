use growth_calculator_core::errors::CoreError;
use growth_calculator_core::models::chart::{ChartGeometry, ChartSurface, PixelPoint};
use growth_calculator_core::models::input::{BoundedInput, InputBounds, InputField};
use growth_calculator_core::models::projection::{
    ProjectionParameters, ProjectionPoint, ProjectionSeries, MAX_PERIODS,
};
use growth_calculator_core::models::settings::{Locale, Settings};
use growth_calculator_core::models::strategy::Strategy;

fn pt(x: f64, y: f64) -> PixelPoint {
    PixelPoint { x, y }
}

// ═══════════════════════════════════════════════════════════════════
//  ProjectionParameters
// ═══════════════════════════════════════════════════════════════════

mod projection_parameters {
    use super::*;

    #[test]
    fn new_accepts_valid_input() {
        let p = ProjectionParameters::new(1000.0, 0.12, 3).unwrap();
        assert_eq!(p.principal(), 1000.0);
        assert_eq!(p.periodic_rate(), 0.12);
        assert_eq!(p.periods(), 3);
    }

    #[test]
    fn new_accepts_zero_principal_and_zero_periods() {
        let p = ProjectionParameters::new(0.0, 0.05, 0).unwrap();
        assert_eq!(p.principal(), 0.0);
        assert_eq!(p.periods(), 0);
    }

    #[test]
    fn new_accepts_negative_rate() {
        let p = ProjectionParameters::new(500.0, -0.3, 4).unwrap();
        assert_eq!(p.periodic_rate(), -0.3);
    }

    #[test]
    fn new_rejects_negative_periods() {
        let err = ProjectionParameters::new(1000.0, 0.1, -1).unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument(_)));
        assert!(err.to_string().contains("periods"));
    }

    #[test]
    fn new_rejects_negative_principal() {
        let err = ProjectionParameters::new(-0.01, 0.1, 1).unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument(_)));
        assert!(err.to_string().contains("principal"));
    }

    #[test]
    fn new_rejects_non_finite_values() {
        assert!(ProjectionParameters::new(f64::NAN, 0.1, 1).is_err());
        assert!(ProjectionParameters::new(f64::INFINITY, 0.1, 1).is_err());
        assert!(ProjectionParameters::new(100.0, f64::NAN, 1).is_err());
        assert!(ProjectionParameters::new(100.0, f64::NEG_INFINITY, 1).is_err());
    }

    #[test]
    fn new_enforces_period_cap() {
        assert!(ProjectionParameters::new(1.0, 0.1, i64::from(MAX_PERIODS)).is_ok());
        let err = ProjectionParameters::new(1.0, 0.1, i64::from(MAX_PERIODS) + 1).unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument(_)));
    }

    #[test]
    fn from_raw_accepts_whole_float_periods() {
        let p = ProjectionParameters::from_raw(1000.0, 0.12, 3.0).unwrap();
        assert_eq!(p.periods(), 3);
    }

    #[test]
    fn from_raw_rejects_fractional_periods() {
        let err = ProjectionParameters::from_raw(1000.0, 0.12, 2.5).unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument(_)));
        assert!(err.to_string().contains("whole number"));
    }

    #[test]
    fn from_raw_rejects_negative_and_nan_periods() {
        assert!(ProjectionParameters::from_raw(1000.0, 0.12, -1.0).is_err());
        assert!(ProjectionParameters::from_raw(1000.0, 0.12, f64::NAN).is_err());
        assert!(ProjectionParameters::from_raw(1000.0, 0.12, 1e12).is_err());
    }

    #[test]
    fn json_roundtrip() {
        let p = ProjectionParameters::new(1000.0, 0.12, 3).unwrap();
        let json = serde_json::to_string(&p).unwrap();
        let back: ProjectionParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn deserialize_rejects_negative_principal() {
        let result = serde_json::from_str::<ProjectionParameters>(
            r#"{ "principal": -5.0, "periodic_rate": 0.1, "periods": 3 }"#,
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("principal"));
    }

    #[test]
    fn deserialize_rejects_oversized_periods() {
        let result = serde_json::from_str::<ProjectionParameters>(
            r#"{ "principal": 1.0, "periodic_rate": 0.1, "periods": 4000000000 }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn deserialize_rejects_negative_periods() {
        let result = serde_json::from_str::<ProjectionParameters>(
            r#"{ "principal": 1.0, "periodic_rate": 0.1, "periods": -1 }"#,
        );
        assert!(result.is_err());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  ProjectionSeries
// ═══════════════════════════════════════════════════════════════════

mod projection_series {
    use super::*;

    #[test]
    fn from_points_computes_max_value() {
        let series = ProjectionSeries::from_points(vec![
            ProjectionPoint { period: 0, value: 100.0 },
            ProjectionPoint { period: 1, value: 250.0 },
            ProjectionPoint { period: 2, value: 80.0 },
        ]);
        assert_eq!(series.max_value, 250.0);
        assert_eq!(series.len(), 3);
        assert_eq!(series.last_period(), 2);
    }

    #[test]
    fn empty_series_has_zero_max() {
        let series = ProjectionSeries::from_points(Vec::new());
        assert!(series.is_empty());
        assert_eq!(series.max_value, 0.0);
        assert_eq!(series.last_period(), 0);
        assert!(series.first().is_none());
    }

    #[test]
    fn all_negative_values_keep_true_maximum() {
        let series = ProjectionSeries::from_points(vec![
            ProjectionPoint { period: 0, value: -5.0 },
            ProjectionPoint { period: 1, value: -2.0 },
        ]);
        assert_eq!(series.max_value, -2.0);
    }

    #[test]
    fn serde_roundtrip_json() {
        let series = ProjectionSeries::from_points(vec![
            ProjectionPoint { period: 0, value: 1000.0 },
            ProjectionPoint { period: 1, value: 1120.0 },
        ]);
        let json = serde_json::to_string(&series).unwrap();
        let back: ProjectionSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(series, back);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Chart models
// ═══════════════════════════════════════════════════════════════════

mod chart_models {
    use super::*;

    #[test]
    fn surface_baseline() {
        let s = ChartSurface::new(400.0, 200.0, 40.0);
        assert_eq!(s.baseline(), 160.0);
    }

    #[test]
    fn surface_default_has_forty_pixel_padding() {
        let s = ChartSurface::default();
        assert_eq!(s.padding, 40.0);
        assert!(s.width > 2.0 * s.padding);
        assert!(s.height > 2.0 * s.padding);
    }

    #[test]
    fn line_svg_path_uses_move_then_line_commands() {
        let geometry = ChartGeometry {
            area_outline: Vec::new(),
            line_path: vec![pt(40.0, 40.0), pt(200.0, 40.0), pt(360.0, 40.0)],
            markers: Vec::new(),
        };
        assert_eq!(geometry.line_svg_path(), "M 40 40 L 200 40 L 360 40");
    }

    #[test]
    fn area_svg_path_is_closed() {
        let geometry = ChartGeometry {
            area_outline: vec![pt(40.0, 60.5), pt(360.0, 40.0), pt(360.0, 160.0), pt(40.0, 160.0)],
            line_path: Vec::new(),
            markers: Vec::new(),
        };
        assert_eq!(
            geometry.area_svg_path(),
            "M 40 60.5 L 360 40 L 360 160 L 40 160 Z"
        );
    }

    #[test]
    fn empty_geometry_produces_empty_paths() {
        let geometry = ChartGeometry::default();
        assert_eq!(geometry.line_svg_path(), "");
        assert_eq!(geometry.area_svg_path(), "");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Strategy
// ═══════════════════════════════════════════════════════════════════

mod strategy {
    use super::*;

    #[test]
    fn default_is_balanced() {
        assert_eq!(Strategy::default(), Strategy::Balanced);
    }

    #[test]
    fn preset_rates() {
        let c = Strategy::Conservative.rate_range();
        assert_eq!((c.min, c.max, c.current), (5.0, 8.0, 6.0));
        let b = Strategy::Balanced.rate_range();
        assert_eq!((b.min, b.max, b.current), (10.0, 15.0, 12.0));
        let a = Strategy::Aggressive.rate_range();
        assert_eq!((a.min, a.max, a.current), (15.0, 25.0, 18.0));
    }

    #[test]
    fn current_rate_lies_inside_range() {
        for s in Strategy::ALL {
            let r = s.rate_range();
            assert!(r.min <= r.current && r.current <= r.max, "{s}");
        }
    }

    #[test]
    fn display_and_parse_agree() {
        for s in Strategy::ALL {
            let parsed: Strategy = s.to_string().parse().unwrap();
            assert_eq!(parsed, s);
        }
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(" Aggressive ".parse::<Strategy>().unwrap(), Strategy::Aggressive);
        assert_eq!("CONSERVATIVE".parse::<Strategy>().unwrap(), Strategy::Conservative);
    }

    #[test]
    fn parse_unknown_fails() {
        let err = "yolo".parse::<Strategy>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownStrategy(ref s) if s == "yolo"));
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Strategy::Balanced).unwrap(), "\"balanced\"");
        let back: Strategy = serde_json::from_str("\"aggressive\"").unwrap();
        assert_eq!(back, Strategy::Aggressive);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Inputs
// ═══════════════════════════════════════════════════════════════════

mod inputs {
    use super::*;

    #[test]
    fn normalize_clamps_to_bounds() {
        let b = InputBounds::new(1.0, 50.0, 1.0);
        assert_eq!(b.normalize(-3.0), 1.0);
        assert_eq!(b.normalize(75.0), 50.0);
    }

    #[test]
    fn normalize_snaps_to_step() {
        let b = InputBounds::new(1.0, 30.0, 0.5);
        assert_eq!(b.normalize(12.3), 12.5);
        assert_eq!(b.normalize(12.2), 12.0);
        let years = InputBounds::new(1.0, 50.0, 1.0);
        assert_eq!(years.normalize(7.6), 8.0);
    }

    #[test]
    fn normalize_never_exceeds_max_after_snapping() {
        let b = InputBounds::new(0.0, 10.0, 4.0);
        assert_eq!(b.normalize(10.0), 10.0);
        assert_eq!(b.normalize(9.9), 8.0);
    }

    #[test]
    fn bounded_input_new_normalizes_initial() {
        let input = BoundedInput::new(999.0, InputBounds::new(0.0, 100.0, 1.0));
        assert_eq!(input.value(), 100.0);
        let nan = BoundedInput::new(f64::NAN, InputBounds::new(5.0, 100.0, 1.0));
        assert_eq!(nan.value(), 5.0);
    }

    #[test]
    fn set_reports_change_once() {
        let mut input = BoundedInput::new(10.0, InputBounds::new(1.0, 50.0, 1.0));
        assert_eq!(input.set(20.0), Some(20.0));
        assert_eq!(input.set(20.0), None);
        assert_eq!(input.value(), 20.0);
    }

    #[test]
    fn set_same_value_after_clamping_is_no_change() {
        let mut input = BoundedInput::new(50.0, InputBounds::new(1.0, 50.0, 1.0));
        assert_eq!(input.set(80.0), None);
        assert_eq!(input.value(), 50.0);
    }

    #[test]
    fn set_ignores_non_finite() {
        let mut input = BoundedInput::new(10.0, InputBounds::new(1.0, 50.0, 1.0));
        assert_eq!(input.set(f64::NAN), None);
        assert_eq!(input.set(f64::INFINITY), None);
        assert_eq!(input.value(), 10.0);
    }

    #[test]
    fn input_field_display() {
        assert_eq!(InputField::Principal.to_string(), "Principal");
        assert_eq!(InputField::Years.to_string(), "Years");
        assert_eq!(InputField::RatePercent.to_string(), "RatePercent");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Settings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn default_is_valid() {
        let s = Settings::default();
        s.validate().unwrap();
        assert_eq!(s.locale, Locale::Ru);
        assert_eq!(s.initial_strategy, Strategy::Balanced);
        assert_eq!(s.initial_rate_percent, 12.0);
    }

    #[test]
    fn json_roundtrip() {
        let mut s = Settings::default();
        s.locale = Locale::En;
        s.initial_years = 25.0;
        let json = s.to_json().unwrap();
        let back = Settings::from_json(&json).unwrap();
        assert_eq!(s, back);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let s = Settings::from_json(r#"{ "locale": "en", "initial_years": 5 }"#).unwrap();
        assert_eq!(s.locale, Locale::En);
        assert_eq!(s.initial_years, 5.0);
        assert_eq!(s.principal_bounds, Settings::default().principal_bounds);
    }

    #[test]
    fn empty_object_is_default() {
        let s = Settings::from_json("{}").unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn malformed_json_is_deserialization_error() {
        let err = Settings::from_json("{ locale: ").unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn unknown_locale_is_deserialization_error() {
        let err = Settings::from_json(r#"{ "locale": "fr" }"#).unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn rejects_inverted_bounds() {
        let mut s = Settings::default();
        s.years_bounds = InputBounds::new(10.0, 1.0, 1.0);
        let err = s.validate().unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
        assert!(err.to_string().contains("inverted"));
    }

    #[test]
    fn rejects_non_positive_step() {
        let mut s = Settings::default();
        s.rate_bounds.step = 0.0;
        assert!(s.validate().is_err());
    }

    #[test]
    fn rejects_initial_value_outside_bounds() {
        let mut s = Settings::default();
        s.initial_principal = 1.0;
        let err = s.validate().unwrap_err();
        assert!(err.to_string().contains("initial principal"));
    }

    #[test]
    fn rejects_fractional_year_step() {
        let mut s = Settings::default();
        s.years_bounds.step = 0.5;
        assert!(s.validate().is_err());
    }

    #[test]
    fn rejects_year_range_beyond_period_cap() {
        let mut s = Settings::default();
        s.years_bounds.max = 5000.0;
        let err = s.validate().unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
        assert!(err.to_string().contains("years range must end"));
    }

    #[test]
    fn accepts_year_range_at_period_cap() {
        let mut s = Settings::default();
        s.years_bounds.max = f64::from(MAX_PERIODS);
        s.validate().unwrap();
    }

    #[test]
    fn rejects_fractional_year_max() {
        let mut s = Settings::default();
        s.years_bounds.max = 10.5;
        assert!(s.validate().is_err());
    }

    #[test]
    fn rejects_negative_principal_range() {
        let mut s = Settings::default();
        s.principal_bounds.min = -100.0;
        assert!(s.validate().is_err());
    }

    #[test]
    fn rejects_rate_below_minus_hundred() {
        let mut s = Settings::default();
        s.rate_bounds.min = -150.0;
        assert!(s.validate().is_err());
    }

    #[test]
    fn rejects_surface_without_plot_area() {
        let mut s = Settings::default();
        s.surface = ChartSurface::new(80.0, 300.0, 40.0);
        assert!(s.validate().is_err());
        s.surface = ChartSurface::new(400.0, 200.0, -1.0);
        assert!(s.validate().is_err());
        s.surface = ChartSurface::new(f64::NAN, 200.0, 10.0);
        assert!(s.validate().is_err());
    }
}
