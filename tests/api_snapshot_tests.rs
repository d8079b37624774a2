use scatter_rs::api::{
    CsvColumns, ScatterPlot, ScatterPlotConfig, VIEW_SNAPSHOT_JSON_SCHEMA_V1, ViewSnapshot,
};
use scatter_rs::core::{Margins, Record, RecordSet, ZoomTransform};
use scatter_rs::interaction::{TooltipTiming, TransformState};
use scatter_rs::render::NullRenderer;

fn build_plot() -> ScatterPlot<NullRenderer> {
    let records = RecordSet::new(vec![
        Record::new("A", 1.0, 2.0, 5.0, 10.0).expect("record A"),
        Record::new("B", 10.0, 4.0, 50.0, 20.0).expect("record B"),
    ])
    .expect("record set");
    let config = ScatterPlotConfig::with_plot_size(1100, 660, Margins::default());
    ScatterPlot::new(NullRenderer::default(), config, records).expect("plot init")
}

#[test]
fn snapshot_reports_base_and_visible_domains() {
    let mut plot = build_plot();
    plot.set_transform(ZoomTransform::new(0.0, 0.0, 2.0));

    let snapshot = plot.snapshot().expect("snapshot");
    assert_eq!(snapshot.base_x_domain, (0.0, 13.0));
    assert_eq!(snapshot.visible_x_domain, (0.0, 6.5));
    assert_eq!(snapshot.base_y_domain, (0.0, 4.0));
    assert_eq!(snapshot.marks.len(), 2);
    assert_eq!(snapshot.transform_state, TransformState::Interacting(snapshot.transform));
    assert_eq!(snapshot.tooltip.record_index, None);
}

#[test]
fn snapshot_contract_round_trips() {
    let mut plot = build_plot();
    plot.pan_by(12.0, -3.0);
    let snapshot = plot.snapshot().expect("snapshot");

    let json = snapshot.to_json_contract_v1_pretty().expect("contract json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["schema_version"], VIEW_SNAPSHOT_JSON_SCHEMA_V1);
    assert!(value["snapshot"]["marks"].is_array());

    let parsed = ViewSnapshot::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(parsed.transform, ZoomTransform::new(12.0, -3.0, 1.0));
    assert_eq!(parsed.viewport, snapshot.viewport);
    assert_eq!(parsed.marks.len(), snapshot.marks.len());
    for (restored, original) in parsed.marks.iter().zip(&snapshot.marks) {
        assert!((restored.cx - original.cx).abs() <= 1e-9);
        assert!((restored.cy - original.cy).abs() <= 1e-9);
    }

    let bare = serde_json::to_string(&snapshot).expect("bare json");
    assert_eq!(ViewSnapshot::from_json_compat_str(&bare).expect("parse bare"), parsed);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let snapshot = build_plot().snapshot().expect("snapshot");
    let payload = serde_json::json!({
        "schema_version": 99,
        "snapshot": snapshot,
    });
    assert!(ViewSnapshot::from_json_compat_str(&payload.to_string()).is_err());
}

#[test]
fn config_json_round_trips() {
    let config = ScatterPlotConfig::with_plot_size(800, 500, Margins::uniform(40.0))
        .with_reset_duration(0.5)
        .with_tooltip_timing(TooltipTiming {
            fade_in_seconds: 0.1,
            ..TooltipTiming::default()
        })
        .with_columns(CsvColumns {
            x: "wealth".to_owned(),
            ..CsvColumns::default()
        });

    let json = config.to_json_pretty().expect("serialize");
    let parsed = ScatterPlotConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn partial_config_json_takes_defaults() {
    let parsed = ScatterPlotConfig::from_json_str(
        r#"{ "viewport": { "width": 900, "height": 600 }, "axis": { "tick_count": 5 } }"#,
    )
    .expect("parse");

    assert_eq!(parsed.viewport.width, 900);
    assert_eq!(parsed.axis.tick_count, 5);
    assert_eq!(parsed.axis.tick_size_px, 6.0);
    assert_eq!(parsed.marks.opacity, 0.6);
    assert_eq!(parsed.reset_control.duration_seconds, 1.5);
    assert_eq!(parsed.columns, CsvColumns::default());
    assert_eq!(parsed.legend.entries.len(), 3);
}

#[test]
fn malformed_config_json_is_an_error() {
    assert!(ScatterPlotConfig::from_json_str("{ not json").is_err());
}
