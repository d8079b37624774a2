use approx::assert_abs_diff_eq;
use scatter_rs::api::{ScatterPlot, ScatterPlotConfig};
use scatter_rs::core::{Margins, Record, RecordSet, ZoomTransform};
use scatter_rs::render::{ClipRect, Color, NullRenderer, RenderFrame, TextHAlign};

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
fn plot_frame_places_circles_in_surface_space() {
    let plot = build_plot();
    let frame = plot.build_frame().expect("frame");

    assert_eq!(frame.circles.len(), 2);
    assert_abs_diff_eq!(frame.circles[0].cx, 100.0 + 1100.0 / 13.0, epsilon = 1e-9);
    assert_abs_diff_eq!(frame.circles[0].cy, 430.0, epsilon = 1e-9);
    assert_abs_diff_eq!(frame.circles[0].radius, 10.9, epsilon = 1e-9);
    assert_eq!(frame.circles[0].fill_color.alpha, 0.6);
    assert_eq!(
        frame.circle_clip,
        Some(ClipRect {
            x: 100.0,
            y: 100.0,
            width: 1100.0,
            height: 660.0
        })
    );
}

#[test]
fn plot_frame_contains_axes_and_titles() {
    let plot = build_plot();
    let frame = plot.build_frame().expect("frame");

    let labels: Vec<&str> = frame.texts.iter().map(|text| text.text.as_str()).collect();
    for expected in ["0", "13", "0.0", "4.0"] {
        assert!(labels.contains(&expected), "missing tick label {expected}");
    }
    assert!(labels.contains(&"GDP (in Trillion US Dollars) in 2010"));

    let y_title = frame
        .texts
        .iter()
        .find(|text| text.text.starts_with("Energy Consumption"))
        .expect("y title");
    assert_eq!(y_title.rotation_deg, -90.0);
    assert_eq!(y_title.h_align, TextHAlign::Center);

    // Bottom domain line runs along the plot bottom edge.
    assert!(frame.lines.iter().any(|line| {
        line.y1 == 760.0 && line.y2 == 760.0 && line.x1 == 100.0 && line.x2 == 1200.0
    }));
}

#[test]
fn reset_control_is_drawn_as_overlay() {
    let plot = build_plot();
    let frame = plot.build_frame().expect("frame");
    let control = plot.reset_control_rect();

    assert_eq!(frame.overlay_rects, vec![control]);
    assert_eq!(control.x + control.width, 1200.0);
    assert!(frame.overlay_texts.iter().any(|text| text.text == "Reset"));
}

#[test]
fn circle_radii_and_fills_are_transform_invariant_in_frame() {
    let mut plot = build_plot();
    let before = plot.build_frame().expect("frame");
    plot.set_transform(ZoomTransform::new(-80.0, 40.0, 3.0));
    let after = plot.build_frame().expect("frame");

    for (a, b) in before.circles.iter().zip(&after.circles) {
        assert_eq!(a.radius, b.radius);
        assert_eq!(a.fill_color, b.fill_color);
    }
    assert_ne!(before.circles[0].cx, after.circles[0].cx);
}

#[test]
fn render_hands_validated_frame_to_renderer() {
    let mut plot = build_plot();
    plot.render().expect("render");

    let renderer = plot.renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_circle_count, 2);
    assert_eq!(
        renderer.last_frame.as_ref(),
        Some(&plot.build_frame().expect("frame"))
    );
}

#[test]
fn legend_frame_uses_plot_scales() {
    let plot = build_plot();
    let frame = plot.build_legend_frame().expect("legend");

    assert_eq!(frame.viewport.width, 400);
    assert_eq!(frame.circles.len(), 3);
    assert_eq!(frame.circles[0].radius, plot.scales().radius(5.0));
    assert_eq!(frame.circles[2].radius, plot.scales().radius(100.0));
    assert_eq!(frame.circles[1].stroke_color, Some(Color::from_rgb8(0x54, 0x53, 0x53)));

    let labels: Vec<&str> = frame.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(labels, vec![
        "Legend",
        "TEC of 5 Trillion",
        "TEC of 10 Trillion",
        "TEC of 100 Trillion",
    ]);
}

#[test]
fn invalid_frame_is_rejected() {
    let frame = RenderFrame::new(scatter_rs::core::Viewport::new(10, 10)).with_circle(
        scatter_rs::render::CirclePrimitive::new(f64::NAN, 0.0, 1.0, Color::rgb(0.0, 0.0, 0.0)),
    );
    assert!(frame.validate().is_err());

    let frame = RenderFrame::new(scatter_rs::core::Viewport::new(10, 10)).with_circle(
        scatter_rs::render::CirclePrimitive::new(1.0, 1.0, 1.0, Color::rgb(1.5, 0.0, 0.0)),
    );
    assert!(frame.validate().is_err());
}
