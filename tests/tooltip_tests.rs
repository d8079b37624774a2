use approx::assert_abs_diff_eq;
use scatter_rs::api::{ScatterPlot, ScatterPlotConfig};
use scatter_rs::core::{Margins, Record, RecordSet};
use scatter_rs::interaction::{Easing, TooltipState, TooltipTiming};
use scatter_rs::render::{FrameLayer, NullRenderer};

fn build_plot() -> ScatterPlot<NullRenderer> {
    let records = RecordSet::new(vec![
        Record::new("A", 1.0, 2.0, 5.0, 10.0).expect("record A"),
        Record::new("B", 10.0, 4.0, 50.0, 20.0).expect("record B"),
    ])
    .expect("record set");
    let config = ScatterPlotConfig::with_plot_size(1100, 660, Margins::default());
    ScatterPlot::new(NullRenderer::default(), config, records).expect("plot init")
}

fn surface_center(plot: &ScatterPlot<NullRenderer>, index: usize) -> (f64, f64) {
    let area = plot.plot_area();
    let mark = plot.projected_marks().expect("marks")[index];
    (area.left + mark.cx, area.top + mark.cy)
}

#[test]
fn show_fades_in_to_visible_opacity() {
    let mut tooltip = TooltipState::new(TooltipTiming::default());
    assert!(!tooltip.is_visible());

    tooltip.show(3, 100.0, 200.0);
    assert_eq!(tooltip.record_index(), Some(3));
    assert_eq!(tooltip.position(), (115.0, 185.0));
    assert_eq!(tooltip.opacity(), 0.0);

    assert!(tooltip.step(0.1));
    assert_abs_diff_eq!(tooltip.opacity(), 0.45, epsilon = 1e-9);
    assert!(tooltip.step(0.1));
    assert_eq!(tooltip.opacity(), 0.9);
    assert!(!tooltip.snapshot().fading);
    assert!(!tooltip.step(0.1));
}

#[test]
fn hide_fades_out_and_releases_record() {
    let mut tooltip = TooltipState::new(TooltipTiming::default());
    tooltip.show(1, 0.0, 0.0);
    tooltip.step(0.2);

    tooltip.hide();
    assert_eq!(tooltip.record_index(), Some(1));
    tooltip.step(0.15);
    assert_abs_diff_eq!(tooltip.opacity(), 0.45, epsilon = 1e-9);
    tooltip.step(0.15);

    assert_eq!(tooltip.opacity(), 0.0);
    assert_eq!(tooltip.record_index(), None);
    assert!(!tooltip.is_visible());
}

#[test]
fn fades_start_from_current_opacity() {
    let mut tooltip = TooltipState::new(TooltipTiming {
        easing: Easing::Linear,
        ..TooltipTiming::default()
    });
    tooltip.show(0, 0.0, 0.0);
    tooltip.step(0.1);
    assert_abs_diff_eq!(tooltip.opacity(), 0.45, epsilon = 1e-9);

    tooltip.hide();
    assert_abs_diff_eq!(tooltip.opacity(), 0.45, epsilon = 1e-9);
    tooltip.step(0.15);
    assert_abs_diff_eq!(tooltip.opacity(), 0.225, epsilon = 1e-9);
}

#[test]
fn hovering_another_record_replaces_content() {
    let mut tooltip = TooltipState::new(TooltipTiming::default());
    tooltip.show(0, 10.0, 10.0);
    tooltip.step(0.2);

    tooltip.show(5, 40.0, 60.0);
    assert_eq!(tooltip.record_index(), Some(5));
    assert_eq!(tooltip.position(), (55.0, 45.0));
    assert_eq!(tooltip.opacity(), 0.9);
    assert!(tooltip.is_showing(5));
    assert!(!tooltip.is_showing(0));
}

#[test]
fn zero_duration_fades_apply_immediately() {
    let mut tooltip = TooltipState::new(TooltipTiming {
        fade_in_seconds: 0.0,
        fade_out_seconds: 0.0,
        ..TooltipTiming::default()
    });
    tooltip.show(2, 0.0, 0.0);
    assert_eq!(tooltip.opacity(), 0.9);
    tooltip.hide();
    assert_eq!(tooltip.record_index(), None);
}

#[test]
fn hover_over_mark_shows_record_rows() {
    let mut plot = build_plot();
    let (x, y) = surface_center(&plot, 0);

    plot.pointer_move(x, y).expect("hover");
    assert_eq!(plot.tooltip().record_index(), Some(0));
    assert_eq!(plot.tooltip().position(), (x + 15.0, y - 15.0));

    let rows = plot.tooltip_content().expect("tooltip rows");
    let rows: Vec<(&str, &str)> = rows.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    assert_eq!(rows, vec![
        ("Country", "A"),
        ("Population", "10 Million"),
        ("GDP", "1 Trillion"),
        ("EPC", "2 Million BTUs"),
        ("Total", "5 Trillion BTUs"),
    ]);
}

#[test]
fn hover_exit_fades_tooltip_out() {
    let mut plot = build_plot();
    let (x, y) = surface_center(&plot, 0);
    plot.pointer_move(x, y).expect("hover");
    plot.step_animations(0.2);
    assert_eq!(plot.tooltip().opacity(), 0.9);

    plot.pointer_move(650.0, 650.0).expect("hover exit");
    assert!(plot.is_animating());
    plot.step_animations(0.3);
    assert_eq!(plot.tooltip().record_index(), None);
    assert!(!plot.is_animating());
}

#[test]
fn topmost_mark_wins_on_overlap() {
    let records = RecordSet::new(vec![
        Record::new("under", 5.0, 5.0, 50.0, 1.0).expect("record"),
        Record::new("over", 5.0, 5.0, 50.0, 2.0).expect("record"),
    ])
    .expect("record set");
    let config = ScatterPlotConfig::with_plot_size(1100, 660, Margins::default());
    let plot = ScatterPlot::new(NullRenderer::default(), config, records).expect("plot init");

    let (x, y) = surface_center(&plot, 0);
    assert_eq!(plot.mark_at(x, y).expect("hit test"), Some(1));
}

#[test]
fn hover_is_suspended_while_panning() {
    let mut plot = build_plot();
    let (x, y) = surface_center(&plot, 0);

    // The mark follows the drag, so it stays under the pointer.
    plot.pointer_down(x, y);
    plot.pointer_move(x + 1.0, y).expect("drag");
    assert_eq!(plot.tooltip().record_index(), None);

    plot.pointer_up(x + 1.0, y).expect("release");
    assert_eq!(plot.tooltip().record_index(), Some(0));
}

#[test]
fn pointer_leave_hides_tooltip() {
    let mut plot = build_plot();
    let (x, y) = surface_center(&plot, 1);
    plot.pointer_move(x, y).expect("hover");
    assert_eq!(plot.tooltip().record_index(), Some(1));

    plot.pointer_leave();
    plot.step_animations(1.0);
    assert!(!plot.tooltip().is_visible());
}

#[test]
fn tooltip_overlay_is_drawn_while_visible() {
    let mut plot = build_plot();
    let (x, y) = surface_center(&plot, 0);
    plot.pointer_move(x, y).expect("hover");
    plot.step_animations(0.2);

    let frame = plot.build_frame().expect("frame");
    // Reset control plus tooltip panel.
    assert_eq!(frame.overlay_rects.len(), 2);
    assert!(frame.overlay_texts.iter().any(|text| text.text == "Country: A"));
}

#[test]
fn zoom_moving_mark_away_hides_tooltip() {
    let mut plot = build_plot();
    let (x, y) = surface_center(&plot, 0);
    plot.pointer_move(x, y).expect("hover");
    plot.step_animations(0.2);
    assert_eq!(plot.tooltip().opacity(), 0.9);

    let area = plot.plot_area();
    plot.zoom_by(20.0, area.right(), area.top);
    assert_eq!(plot.mark_at(x, y).expect("hit test"), None);
    assert!(!plot.tooltip().is_showing(0));

    plot.step_animations(0.3);
    assert_eq!(plot.tooltip().record_index(), None);
}

#[test]
fn zoom_anchored_on_hovered_mark_keeps_tooltip() {
    let mut plot = build_plot();
    let (x, y) = surface_center(&plot, 0);
    plot.pointer_move(x, y).expect("hover");
    plot.step_animations(0.2);

    plot.zoom_by(2.0, x, y);
    assert!(plot.tooltip().is_showing(0));
    assert_eq!(plot.tooltip().opacity(), 0.9);
}

#[test]
fn reset_bringing_mark_back_under_pointer_shows_tooltip() {
    let mut plot = build_plot();
    let (x, y) = surface_center(&plot, 0);
    plot.pan_by(300.0, 0.0);
    plot.pointer_move(x, y).expect("hover empty spot");
    assert_eq!(plot.tooltip().record_index(), None);

    plot.reset();
    while plot.step_animations(0.25) {}
    assert_eq!(plot.tooltip().record_index(), Some(0));
}

#[test]
fn tooltip_fade_repaints_overlay_only() {
    let mut plot = build_plot();
    plot.render().expect("initial render");

    let (x, y) = surface_center(&plot, 0);
    plot.pointer_move(x, y).expect("hover");
    plot.step_animations(0.1);
    plot.render().expect("overlay render");

    assert_eq!(plot.last_rebuilt_layers(), &[FrameLayer::Overlay]);
    let drawn = plot.renderer().last_frame.clone().expect("drawn frame");
    assert_eq!(drawn, plot.build_frame().expect("full frame"));
}
