use trajplot::api::{LegendPlacement, TrajectoryPlotConfig};
use trajplot::core::ViewAngles;

#[test]
fn config_round_trips_through_versioned_json() {
    let config = TrajectoryPlotConfig::new(8.0, 6.0, true)
        .with_dpi(150.0)
        .with_view(ViewAngles::new(20.0, 45.0))
        .with_line_width_px(2.0);

    let json = config.to_json_pretty().expect("serialize");
    assert!(json.contains("\"schema_version\": 1"));

    let parsed = TrajectoryPlotConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn bare_config_fills_defaults() {
    let parsed = TrajectoryPlotConfig::from_json_str(
        r#"{"width": 5.0, "height": 4.0, "show_legend": false}"#,
    )
    .expect("parse");

    assert_eq!(parsed, TrajectoryPlotConfig::new(5.0, 4.0, false));
    assert_eq!(parsed.dpi, 100.0);
    assert_eq!(parsed.view, ViewAngles::new(30.0, -60.0));
    assert_eq!(parsed.legend, LegendPlacement::default());
}

#[test]
fn unknown_schema_version_is_rejected() {
    let err = TrajectoryPlotConfig::from_json_str(
        r#"{"schema_version": 9, "config": {"width": 5.0, "height": 4.0, "show_legend": true}}"#,
    )
    .expect_err("schema 9 is unknown");
    assert!(err.to_string().contains("unsupported plot config schema version"));
}

#[test]
fn validate_rejects_bad_styling() {
    assert!(TrajectoryPlotConfig::new(5.0, 4.0, false).validate().is_ok());
    assert!(
        TrajectoryPlotConfig::new(5.0, 4.0, false)
            .with_marker_radius_px(0.0)
            .validate()
            .is_err()
    );
    assert!(
        TrajectoryPlotConfig::new(5.0, 4.0, true)
            .with_legend_placement(LegendPlacement {
                subplot_right: 1.5,
                ..LegendPlacement::default()
            })
            .validate()
            .is_err()
    );
    assert!(
        TrajectoryPlotConfig::new(f64::NAN, 4.0, false)
            .validate()
            .is_err()
    );
}

#[test]
fn malformed_bare_config_reports_its_own_error() {
    let err = TrajectoryPlotConfig::from_json_str(
        r#"{"width": "wide", "height": 4.0, "show_legend": false}"#,
    )
    .expect_err("width must be a number");

    let message = err.to_string();
    assert!(message.contains("failed to parse plot config json:"));
    assert!(message.contains("invalid type"));
    assert!(!message.contains("payload"));
}

#[test]
fn malformed_payload_reports_payload_error() {
    let err = TrajectoryPlotConfig::from_json_str(
        r#"{"schema_version": 1, "config": {"width": 5.0}}"#,
    )
    .expect_err("config lacks height");
    assert!(err.to_string().contains("failed to parse plot config json payload"));
}
