use crate::error::ScatterResult;
use crate::render::{
    CirclePrimitive, ClipRect, Color, FrameLayer, LayeredRenderFrame, RectPrimitive, RenderFrame,
    Renderer, TextHAlign, TextPrimitive,
};

use super::axis_render::{AxisOrientation, push_axis_frame, push_axis_ticks};
use super::ScatterPlot;

const X_TITLE_INSET_PX: f64 = 30.0;
const Y_TITLE_INSET_PX: f64 = 25.0;
const TOOLTIP_PADDING_PX: f64 = 8.0;
const TOOLTIP_LINE_HEIGHT_EM: f64 = 1.4;
// Average glyph advance relative to font size for a sans-serif face.
const GLYPH_WIDTH_EM: f64 = 0.6;
const CONTROL_BORDER: Color = Color::rgb(0.4, 0.4, 0.4);
const CONTROL_FILL: Color = Color::rgb(0.95, 0.95, 0.95);

impl<R: Renderer> ScatterPlot<R> {
    /// Surface rectangle of the reset control.
    #[must_use]
    pub fn reset_control_rect(&self) -> RectPrimitive {
        let control = &self.config.reset_control;
        let (width, height) = control.size;
        RectPrimitive::new(
            self.plot.right() - width,
            (self.plot.top - height - control.gap_px).max(0.0),
            width,
            height,
            CONTROL_FILL,
        )
        .with_border(1.0, CONTROL_BORDER)
        .with_corner_radius(4.0)
    }

    pub(super) fn reset_control_contains(&self, x: f64, y: f64) -> bool {
        self.reset_control_rect().contains(x, y)
    }
}

/// Builds one layer of the plot frame for the current state.
pub(super) fn build_plot_layer<R: Renderer>(
    engine: &ScatterPlot<R>,
    layer: FrameLayer,
) -> ScatterResult<RenderFrame> {
    let mut frame = RenderFrame::new(engine.config.viewport);
    match layer {
        FrameLayer::Static => push_static_layer(&mut frame, engine),
        FrameLayer::Positions => push_positions_layer(&mut frame, engine)?,
        FrameLayer::Overlay => push_tooltip(&mut frame, engine),
    }
    Ok(frame)
}

/// Every layer stacked: axes from the effective scales, marks at their
/// transformed positions with cached radius and fill, the reset control and
/// the tooltip overlay.
pub(super) fn build_plot_frame<R: Renderer>(engine: &ScatterPlot<R>) -> ScatterResult<RenderFrame> {
    let mut layered = LayeredRenderFrame::new(engine.config.viewport);
    for layer in FrameLayer::ALL {
        layered.set_layer(layer, build_plot_layer(engine, layer)?);
    }
    Ok(layered.flatten())
}

fn push_static_layer<R: Renderer>(frame: &mut RenderFrame, engine: &ScatterPlot<R>) {
    let plot = engine.plot;
    let config = &engine.config;
    frame.circle_clip = Some(ClipRect::from(plot));

    push_axis_frame(
        frame,
        engine.scales.x,
        AxisOrientation::Bottom,
        plot,
        &config.axis,
        config.margins.bottom - X_TITLE_INSET_PX,
    );
    push_axis_frame(
        frame,
        engine.scales.y,
        AxisOrientation::Left,
        plot,
        &config.axis,
        config.margins.left - Y_TITLE_INSET_PX,
    );
    push_reset_control(frame, engine);
}

fn push_positions_layer<R: Renderer>(
    frame: &mut RenderFrame,
    engine: &ScatterPlot<R>,
) -> ScatterResult<()> {
    let plot = engine.plot;
    let config = &engine.config;
    let x_scale = engine.effective_x_scale()?;
    let y_scale = engine.effective_y_scale()?;

    push_axis_ticks(frame, x_scale, AxisOrientation::Bottom, plot, &config.axis);
    push_axis_ticks(frame, y_scale, AxisOrientation::Left, plot, &config.axis);

    let mark_style = &config.marks;
    for mark in engine.projected_marks()? {
        let mut circle = CirclePrimitive::new(
            plot.left + mark.cx,
            plot.top + mark.cy,
            mark.radius,
            mark.fill,
        );
        if let Some(stroke) = mark_style.stroke {
            circle = circle.with_stroke(mark_style.stroke_width, stroke);
        }
        frame.circles.push(circle);
    }
    Ok(())
}

fn push_reset_control<R: Renderer>(frame: &mut RenderFrame, engine: &ScatterPlot<R>) {
    let control = &engine.config.reset_control;
    let rect = engine.reset_control_rect();
    frame.overlay_rects.push(rect);
    if !control.label.is_empty() {
        let font_size = (rect.height * 0.5).max(1.0);
        frame.overlay_texts.push(TextPrimitive::new(
            control.label.clone(),
            rect.x + rect.width / 2.0,
            rect.y + rect.height / 2.0 + font_size * 0.35,
            font_size,
            engine.config.axis.color,
            TextHAlign::Center,
        ));
    }
}

fn push_tooltip<R: Renderer>(frame: &mut RenderFrame, engine: &ScatterPlot<R>) {
    let tooltip = &engine.tooltip;
    if !tooltip.is_visible() {
        return;
    }
    let Some(rows) = engine.tooltip_content() else {
        return;
    };

    let style = &engine.config.tooltip;
    let opacity = tooltip.opacity().clamp(0.0, 1.0);
    let font_size = style.font_size_px;
    let line_height = font_size * TOOLTIP_LINE_HEIGHT_EM;
    let lines: Vec<String> = rows
        .iter()
        .map(|(label, value)| format!("{label}: {value}"))
        .collect();
    let widest = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0) as f64;

    let (x, y) = tooltip.position();
    let width = widest * font_size * GLYPH_WIDTH_EM + 2.0 * TOOLTIP_PADDING_PX;
    let height = lines.len() as f64 * line_height + 2.0 * TOOLTIP_PADDING_PX;

    frame.overlay_rects.push(
        RectPrimitive::new(
            x,
            y,
            width,
            height,
            style.background.with_alpha(style.background.alpha * opacity),
        )
        .with_border(1.0, CONTROL_BORDER.with_alpha(opacity))
        .with_corner_radius(4.0),
    );

    let text_color = style.text_color.with_alpha(style.text_color.alpha * opacity);
    for (index, line) in lines.into_iter().enumerate() {
        frame.overlay_texts.push(TextPrimitive::new(
            line,
            x + TOOLTIP_PADDING_PX,
            y + TOOLTIP_PADDING_PX + (index as f64 + 1.0) * line_height - (line_height - font_size),
            font_size,
            text_color,
            TextHAlign::Left,
        ));
    }
}
