use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, Viewport, ZoomTransform};
use crate::error::ScatterResult;
use crate::interaction::{InteractionMode, TooltipSnapshot, TransformState};
use crate::render::Renderer;

use super::{ProjectedMark, ScatterPlot};

/// Serializable state snapshot used by regression tests and debugging tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    pub viewport: Viewport,
    pub plot_area: PlotArea,
    pub transform: ZoomTransform,
    pub transform_state: TransformState,
    pub interaction_mode: InteractionMode,
    pub base_x_domain: (f64, f64),
    pub base_y_domain: (f64, f64),
    pub visible_x_domain: (f64, f64),
    pub visible_y_domain: (f64, f64),
    pub marks: Vec<ProjectedMark>,
    pub tooltip: TooltipSnapshot,
}

impl<R: Renderer> ScatterPlot<R> {
    pub fn snapshot(&self) -> ScatterResult<ViewSnapshot> {
        Ok(ViewSnapshot {
            viewport: self.config.viewport,
            plot_area: self.plot,
            transform: self.transform(),
            transform_state: self.controller.state(),
            interaction_mode: self.controller.mode(),
            base_x_domain: self.scales.x.domain(),
            base_y_domain: self.scales.y.domain(),
            visible_x_domain: self.effective_x_scale()?.domain(),
            visible_y_domain: self.effective_y_scale()?.domain(),
            marks: self.projected_marks()?,
            tooltip: self.tooltip.snapshot(),
        })
    }
}
