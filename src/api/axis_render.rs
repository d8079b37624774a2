use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, PlotArea, format_tick};
use crate::render::{LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::AxisConfig;

const AXIS_STROKE_WIDTH: f64 = 1.0;

/// Side of the plot an axis is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisOrientation {
    Bottom,
    Left,
}

/// One labeled tick, positioned in surface pixels along its axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub position: f64,
    pub label: String,
}

/// Ticks of `scale` mapped into surface pixels for the given axis.
#[must_use]
pub fn axis_ticks(
    scale: LinearScale,
    orientation: AxisOrientation,
    plot: PlotArea,
    tick_count: usize,
) -> Vec<AxisTick> {
    let step = scale.tick_step(tick_count);
    let offset = match orientation {
        AxisOrientation::Bottom => plot.left,
        AxisOrientation::Left => plot.top,
    };
    scale
        .ticks(tick_count)
        .into_iter()
        .map(|value| AxisTick {
            value,
            position: offset + scale.apply(value),
            label: format_tick(value, step),
        })
        .collect()
}

/// Appends the parts of an axis that never move: domain line, end ticks and
/// title. Only the scale's range is read.
pub(super) fn push_axis_frame(
    frame: &mut RenderFrame,
    scale: LinearScale,
    orientation: AxisOrientation,
    plot: PlotArea,
    config: &AxisConfig,
    title_offset: f64,
) {
    let color = config.color;
    let tick = config.tick_size_px;
    let (range_start, range_end) = scale.range();

    match orientation {
        AxisOrientation::Bottom => {
            let y = plot.bottom();
            let start = plot.left + range_start;
            let end = plot.left + range_end;
            frame.lines.push(LinePrimitive::new(start, y, end, y, AXIS_STROKE_WIDTH, color));
            frame.lines.push(LinePrimitive::new(start, y, start, y + tick, AXIS_STROKE_WIDTH, color));
            frame.lines.push(LinePrimitive::new(end, y, end, y + tick, AXIS_STROKE_WIDTH, color));

            if !config.x_title.is_empty() {
                frame.texts.push(TextPrimitive::new(
                    config.x_title.clone(),
                    plot.left + plot.width / 2.0,
                    y + title_offset,
                    config.title_font_size_px,
                    color,
                    TextHAlign::Center,
                ));
            }
        }
        AxisOrientation::Left => {
            let x = plot.left;
            let start = plot.top + range_start;
            let end = plot.top + range_end;
            frame.lines.push(LinePrimitive::new(x, start, x, end, AXIS_STROKE_WIDTH, color));
            frame.lines.push(LinePrimitive::new(x - tick, start, x, start, AXIS_STROKE_WIDTH, color));
            frame.lines.push(LinePrimitive::new(x - tick, end, x, end, AXIS_STROKE_WIDTH, color));

            if !config.y_title.is_empty() {
                frame.texts.push(
                    TextPrimitive::new(
                        config.y_title.clone(),
                        x - title_offset,
                        plot.top + plot.height / 2.0,
                        config.title_font_size_px,
                        color,
                        TextHAlign::Center,
                    )
                    .rotated(-90.0),
                );
            }
        }
    }
}

/// Appends tick marks and labels from the effective `scale`.
pub(super) fn push_axis_ticks(
    frame: &mut RenderFrame,
    scale: LinearScale,
    orientation: AxisOrientation,
    plot: PlotArea,
    config: &AxisConfig,
) {
    let color = config.color;
    let tick = config.tick_size_px;
    let label_gap = config.tick_size_px + config.tick_padding_px;

    for axis_tick in axis_ticks(scale, orientation, plot, config.tick_count) {
        let position = axis_tick.position;
        match orientation {
            AxisOrientation::Bottom => {
                let y = plot.bottom();
                frame.lines.push(LinePrimitive::new(
                    position,
                    y,
                    position,
                    y + tick,
                    AXIS_STROKE_WIDTH,
                    color,
                ));
                frame.texts.push(TextPrimitive::new(
                    axis_tick.label,
                    position,
                    y + label_gap + config.tick_font_size_px,
                    config.tick_font_size_px,
                    color,
                    TextHAlign::Center,
                ));
            }
            AxisOrientation::Left => {
                let x = plot.left;
                frame.lines.push(LinePrimitive::new(
                    x - tick,
                    position,
                    x,
                    position,
                    AXIS_STROKE_WIDTH,
                    color,
                ));
                frame.texts.push(TextPrimitive::new(
                    axis_tick.label,
                    x - label_gap,
                    // Baseline shifted by ~0.32em so the label centers on the tick.
                    position + config.tick_font_size_px * 0.32,
                    config.tick_font_size_px,
                    color,
                    TextHAlign::Right,
                ));
            }
        }
    }
}
