use crate::error::ScatterResult;
use crate::render::{CirclePrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive};

use super::ScatterPlot;

const LEGEND_STROKE_WIDTH: f64 = 1.0;

impl<R: Renderer> ScatterPlot<R> {
    /// Legend with one reference mark per configured entry.
    ///
    /// Reference marks go through the same size and color scales as the data
    /// marks, so they read on the same visual scale.
    pub fn build_legend_frame(&self) -> ScatterResult<RenderFrame> {
        let legend = &self.config.legend;
        let mut frame = RenderFrame::new(legend.viewport);

        if !legend.title.is_empty() {
            let (x, y) = legend.title_position;
            frame.texts.push(TextPrimitive::new(
                legend.title.clone(),
                x,
                y,
                legend.title_font_size_px,
                legend.text_color,
                TextHAlign::Center,
            ));
        }

        for entry in &legend.entries {
            let (cx, cy) = entry.mark_center;
            frame.circles.push(
                CirclePrimitive::new(
                    cx,
                    cy,
                    self.scales.radius(entry.size_value),
                    self.scales
                        .fill(entry.color_value)
                        .with_alpha(self.config.marks.opacity),
                )
                .with_stroke(LEGEND_STROKE_WIDTH, legend.mark_stroke),
            );
            if !entry.label.is_empty() {
                let (x, y) = entry.label_position;
                frame.texts.push(TextPrimitive::new(
                    entry.label.clone(),
                    x,
                    y,
                    legend.label_font_size_px,
                    legend.text_color,
                    TextHAlign::Center,
                ));
            }
        }

        frame.validate()?;
        Ok(frame)
    }
}
