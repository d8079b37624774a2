use tracing::{debug, trace, warn};

use crate::core::ZoomTransform;
use crate::error::ScatterResult;
use crate::extensions::ViewEvent;
use crate::interaction::{InteractionMode, TransformController};
use crate::render::Renderer;

use super::{InvalidationLevel, ScatterPlot};

impl<R: Renderer> ScatterPlot<R> {
    /// Pointer press in surface pixels.
    ///
    /// Presses on the reset control are ignored here and handled by
    /// `pointer_click`. Anywhere else inside the plot, including on a mark,
    /// starts a drag-pan.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.pointer = Some((x, y));
        if self.reset_control_contains(x, y) || !self.plot.contains(x, y) {
            return;
        }
        self.controller.begin_drag(x, y);
        self.emit_view_event(ViewEvent::PanStarted);
    }

    /// Pointer movement in surface pixels: pans while dragging, otherwise
    /// tracks hover for the tooltip.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ScatterResult<()> {
        self.pointer = Some((x, y));
        if self.controller.mode() == InteractionMode::Panning {
            self.apply_transform_change(|controller| controller.drag_to(x, y));
            return Ok(());
        }
        self.update_hover(x, y)
    }

    pub fn pointer_up(&mut self, x: f64, y: f64) -> ScatterResult<()> {
        self.pointer = Some((x, y));
        if self.controller.mode() != InteractionMode::Panning {
            return Ok(());
        }
        self.controller.end_drag();
        self.emit_view_event(ViewEvent::PanEnded);
        self.update_hover(x, y)
    }

    /// Pointer left the surface: ends any drag and hides the tooltip.
    pub fn pointer_leave(&mut self) {
        self.pointer = None;
        if self.controller.mode() == InteractionMode::Panning {
            self.controller.end_drag();
            self.emit_view_event(ViewEvent::PanEnded);
        }
        self.hide_tooltip();
    }

    /// Click in surface pixels. Returns `true` when it hit the reset control.
    pub fn pointer_click(&mut self, x: f64, y: f64) -> bool {
        if !self.reset_control_contains(x, y) {
            return false;
        }
        self.reset();
        true
    }

    /// Wheel notch at a surface position; negative `delta_y` zooms in.
    pub fn wheel(&mut self, delta_y: f64, x: f64, y: f64) {
        let anchor = self.plot.to_local(x, y);
        self.apply_transform_change(|controller| controller.wheel(delta_y, anchor));
    }

    /// Pinch or programmatic zoom by `factor` around a surface position.
    pub fn zoom_by(&mut self, factor: f64, x: f64, y: f64) {
        let anchor = self.plot.to_local(x, y);
        self.apply_transform_change(|controller| controller.zoom_by(factor, anchor));
    }

    /// Pans by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.apply_transform_change(|controller| controller.pan_by(dx, dy));
    }

    /// Replaces the transform; the scale factor is clamped to the extent.
    pub fn set_transform(&mut self, transform: ZoomTransform) {
        self.apply_transform_change(|controller| controller.set_transform(transform));
    }

    /// Starts the animated return to the identity transform.
    pub fn reset(&mut self) {
        let was_panning = self.controller.mode() == InteractionMode::Panning;
        if !self.controller.reset() {
            return;
        }
        if was_panning {
            self.emit_view_event(ViewEvent::PanEnded);
        }
        self.emit_view_event(ViewEvent::ResetStarted);
        if !self.controller.is_resetting() {
            // Zero-length reset lands immediately.
            self.after_transform_change(ZoomTransform::IDENTITY);
            self.emit_view_event(ViewEvent::ResetCompleted);
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.controller.is_resetting() || self.tooltip.snapshot().fading
    }

    /// Advances reset and tooltip animations by `delta_seconds`.
    ///
    /// Returns `true` while any animation is still in flight.
    pub fn step_animations(&mut self, delta_seconds: f64) -> bool {
        let was_resetting = self.controller.is_resetting();
        let changed = self.apply_transform_change(|controller| controller.step(delta_seconds));
        if changed && was_resetting && !self.controller.is_resetting() {
            self.emit_view_event(ViewEvent::ResetCompleted);
        }

        let had_tooltip = self.tooltip.record_index().is_some();
        if self.tooltip.step(delta_seconds) {
            self.invalidate(InvalidationLevel::Overlay);
            if had_tooltip && self.tooltip.record_index().is_none() {
                trace!("tooltip fade-out completed");
            }
        }

        self.is_animating()
    }

    /// Runs one controller update and keeps its result only when the effective
    /// scales can still be derived from it. Returns `true` when the transform
    /// changed.
    fn apply_transform_change(
        &mut self,
        change: impl FnOnce(&mut TransformController) -> Option<ZoomTransform>,
    ) -> bool {
        let previous = self.controller.state();
        let Some(transform) = change(&mut self.controller) else {
            return false;
        };
        if let Err(err) = self.check_transform(transform) {
            warn!(
                translate_x = transform.translate_x,
                translate_y = transform.translate_y,
                scale_factor = transform.scale_factor,
                error = %err,
                "transform rejected"
            );
            self.controller.restore_state(previous);
            return false;
        }
        self.after_transform_change(transform);
        true
    }

    fn check_transform(&self, transform: ZoomTransform) -> ScatterResult<()> {
        transform.rescale_x(self.scales.x)?;
        transform.rescale_y(self.scales.y)?;
        Ok(())
    }

    fn after_transform_change(&mut self, transform: ZoomTransform) {
        debug!(
            translate_x = transform.translate_x,
            translate_y = transform.translate_y,
            scale_factor = transform.scale_factor,
            "transform changed"
        );
        self.invalidate(InvalidationLevel::Positions);
        self.emit_view_event(ViewEvent::TransformChanged { transform });

        // Marks may have moved under or away from a resting pointer.
        if self.controller.mode() == InteractionMode::Panning {
            return;
        }
        if let Some((x, y)) = self.pointer {
            if let Err(err) = self.update_hover(x, y) {
                warn!(error = %err, "hover refresh failed");
            }
        }
    }
}
