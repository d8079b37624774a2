use scatter_rs::api::{InvalidationLevel, ScatterPlot, ScatterPlotConfig};
use scatter_rs::core::{Margins, Record, RecordSet, ScaleExtent, Viewport};
use scatter_rs::render::NullRenderer;
use scatter_rs::{ScatterError, ScatterResult};

fn records() -> RecordSet {
    RecordSet::new(vec![
        Record::new("A", 1.0, 2.0, 5.0, 10.0).expect("record A"),
        Record::new("B", 10.0, 4.0, 50.0, 20.0).expect("record B"),
    ])
    .expect("record set")
}

fn build(config: ScatterPlotConfig) -> ScatterResult<ScatterPlot<NullRenderer>> {
    ScatterPlot::new(NullRenderer::default(), config, records())
}

#[test]
fn plot_builds_and_renders_with_defaults() {
    let mut plot = build(ScatterPlotConfig::default()).expect("plot init");
    assert_eq!(plot.viewport(), Viewport::new(1300, 860));
    assert_eq!(plot.invalidation(), InvalidationLevel::Full);
    assert!(plot.needs_render());

    plot.render().expect("render");
    assert!(!plot.needs_render());
    assert_eq!(plot.renderer().last_circle_count, 2);
    assert_eq!(plot.mark_styles().len(), 2);
}

#[test]
fn plot_size_helper_reserves_margins() {
    let config = ScatterPlotConfig::with_plot_size(1100, 660, Margins::default());
    let plot = build(config).expect("plot init");
    let area = plot.plot_area();
    assert_eq!((area.left, area.top, area.width, area.height), (100.0, 100.0, 1100.0, 660.0));
}

#[test]
fn loads_bundled_dataset_from_csv() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/scatterdata.csv");
    let mut plot =
        ScatterPlot::from_csv_path(NullRenderer::default(), ScatterPlotConfig::default(), path)
            .expect("plot from csv");
    plot.render().expect("render");
    assert_eq!(plot.renderer().last_circle_count, plot.records().len());
}

#[test]
fn zero_viewport_is_rejected() {
    let err = build(ScatterPlotConfig::new(Viewport::new(0, 500))).expect_err("invalid viewport");
    assert!(matches!(err, ScatterError::InvalidViewport { width: 0, height: 500 }));
}

#[test]
fn margins_larger_than_viewport_are_rejected() {
    let config = ScatterPlotConfig::new(Viewport::new(150, 150));
    assert!(build(config).is_err());
}

#[test]
fn invalid_config_values_are_rejected() {
    let mut config = ScatterPlotConfig::default();
    config.marks.opacity = 1.5;
    assert!(build(config).is_err());

    let mut config = ScatterPlotConfig::default();
    config.axis.tick_count = 0;
    assert!(build(config).is_err());

    let config = ScatterPlotConfig::default().with_reset_duration(-1.0);
    assert!(build(config).is_err());

    let mut config = ScatterPlotConfig::default();
    config.tooltip.timing.visible_opacity = f64::NAN;
    assert!(build(config).is_err());

    let config = ScatterPlotConfig::default().with_scale_extent(ScaleExtent {
        min: 5.0,
        max: 1.0,
    });
    assert!(build(config).is_err());
}

#[test]
fn zero_reset_duration_completes_synchronously() {
    let mut plot = build(ScatterPlotConfig::default().with_reset_duration(0.0)).expect("plot init");
    plot.pan_by(30.0, 30.0);
    plot.reset();
    assert!(plot.transform().is_identity());
    assert!(!plot.is_animating());
}

#[test]
fn empty_dataset_renders_axes_only() {
    let mut plot = ScatterPlot::new(
        NullRenderer::default(),
        ScatterPlotConfig::default(),
        RecordSet::new(Vec::new()).expect("empty"),
    )
    .expect("plot init");
    plot.render().expect("render");
    assert_eq!(plot.renderer().last_circle_count, 0);
    assert!(plot.renderer().last_line_count > 0);
}
