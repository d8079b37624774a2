use scatter_rs::api::{ScatterPlot, ScatterPlotConfig};
use scatter_rs::core::{Margins, Record, RecordSet, Viewport};
use scatter_rs::render::{
    CirclePrimitive, ClipRect, Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer,
    SvgRenderer, TextHAlign, TextPrimitive,
};

#[test]
fn renders_standalone_document() {
    let frame = RenderFrame::new(Viewport::new(200, 100))
        .with_line(LinePrimitive::new(0.0, 50.0, 200.0, 50.0, 1.0, Color::rgb(0.0, 0.0, 0.0)))
        .with_circle(CirclePrimitive::new(20.0, 30.0, 5.5, Color::rgba(1.0, 0.0, 0.0, 0.6)))
        .with_circle_clip(ClipRect {
            x: 10.0,
            y: 10.0,
            width: 180.0,
            height: 80.0,
        })
        .with_text(
            TextPrimitive::new("A & B", 100.0, 20.0, 12.0, Color::rgb(0.0, 0.0, 0.0), TextHAlign::Center)
                .rotated(-90.0),
        );

    let mut renderer = SvgRenderer::new();
    renderer.render(&frame).expect("render");
    let svg = renderer.document();

    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="100""#));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains(r##"<line x1="0" y1="50" x2="200" y2="50" stroke="#000000" stroke-width="1"/>"##));
    assert!(svg.contains(r##"<circle cx="20" cy="30" r="5.5" fill="#ff0000" fill-opacity="0.6"/>"##));
    assert!(svg.contains(r#"<clipPath id="plot-clip"><rect x="10" y="10" width="180" height="80"/></clipPath>"#));
    assert!(svg.contains(r#"<g clip-path="url(#plot-clip)">"#));
    assert!(svg.contains("A &amp; B</text>"));
    assert!(svg.contains(r#"transform="rotate(-90 100 20)""#));
    assert!(svg.contains(r#"text-anchor="middle""#));
}

#[test]
fn overlay_is_written_after_base_primitives() {
    let black = Color::rgb(0.0, 0.0, 0.0);
    let mut frame = RenderFrame::new(Viewport::new(200, 100))
        .with_rect(RectPrimitive::new(0.0, 0.0, 10.0, 10.0, black))
        .with_text(TextPrimitive::new("tick", 5.0, 90.0, 10.0, black, TextHAlign::Center));
    frame
        .overlay_rects
        .push(RectPrimitive::new(40.0, 40.0, 60.0, 30.0, Color::rgb(1.0, 1.0, 1.0)));
    frame
        .overlay_texts
        .push(TextPrimitive::new("tip", 45.0, 55.0, 10.0, black, TextHAlign::Left));

    let mut renderer = SvgRenderer::new();
    renderer.render(&frame).expect("render");
    let svg = renderer.document();

    let base_rect = svg.find(r#"<rect x="0""#).expect("base rect");
    let base_text = svg.find(">tick</text>").expect("base text");
    let overlay_rect = svg.find(r#"<rect x="40""#).expect("overlay rect");
    let overlay_text = svg.find(">tip</text>").expect("overlay text");
    assert!(base_rect < base_text);
    assert!(base_text < overlay_rect);
    assert!(overlay_rect < overlay_text);
}

#[test]
fn background_is_painted_when_set() {
    let mut renderer = SvgRenderer::new().with_background(Some(Color::rgb(1.0, 1.0, 1.0)));
    renderer
        .render(&RenderFrame::new(Viewport::new(10, 10)))
        .expect("render");
    assert!(renderer.document().contains(r##"<rect width="100%" height="100%" fill="#ffffff"/>"##));
}

#[test]
fn invalid_frame_leaves_previous_document() {
    let mut renderer = SvgRenderer::new();
    renderer
        .render(&RenderFrame::new(Viewport::new(10, 10)))
        .expect("render");
    let previous = renderer.document().to_owned();

    let bad = RenderFrame::new(Viewport::new(0, 10));
    assert!(renderer.render(&bad).is_err());
    assert_eq!(renderer.document(), previous);
}

#[test]
fn plot_renders_one_circle_per_record() {
    let records = RecordSet::new(vec![
        Record::new("A", 1.0, 2.0, 5.0, 10.0).expect("record A"),
        Record::new("B", 10.0, 4.0, 50.0, 20.0).expect("record B"),
        Record::new("C", 6.0, 1.0, 20.0, 30.0).expect("record C"),
    ])
    .expect("record set");
    let config = ScatterPlotConfig::with_plot_size(1100, 660, Margins::default());
    let mut plot = ScatterPlot::new(SvgRenderer::new(), config, records).expect("plot init");
    plot.render().expect("render");

    let svg = plot.renderer().document();
    assert_eq!(svg.matches("<circle ").count(), 3);
    assert!(svg.contains(r#"cx="184.615""#));

    let path = std::env::temp_dir().join(format!("scatter-rs-{}.svg", std::process::id()));
    plot.renderer().write_to_file(&path).expect("write svg");
    let written = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(written, svg);
    let _ = std::fs::remove_file(path);
}
