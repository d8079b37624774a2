use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{ScaleExtent, ZoomTransform};
use crate::interaction::{Easing, InteractionMode, Transition};

/// Wheel delta (in pixels) to zoom exponent, matching common browser zoom feel.
pub const WHEEL_DELTA_SCALE: f64 = 0.002;

/// Animated return from some transform to identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResetAnimation {
    pub from: ZoomTransform,
    pub transition: Transition,
}

impl ResetAnimation {
    #[must_use]
    pub fn current(self) -> ZoomTransform {
        self.from
            .interpolate(ZoomTransform::IDENTITY, self.transition.progress())
    }
}

/// Pan/zoom state machine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TransformState {
    /// Identity transform, nothing in flight.
    Idle,
    /// Gesture-driven transform.
    Interacting(ZoomTransform),
    /// Reset animation towards identity.
    Resetting(ResetAnimation),
}

impl TransformState {
    #[must_use]
    pub fn transform(self) -> ZoomTransform {
        match self {
            Self::Idle => ZoomTransform::IDENTITY,
            Self::Interacting(transform) => transform,
            Self::Resetting(animation) => animation.current(),
        }
    }
}

/// Owns the current zoom transform and applies gestures to it.
///
/// Every method that can move the view returns `Some(new_transform)` when the
/// transform actually changed so callers can repaint positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformController {
    state: TransformState,
    extent: ScaleExtent,
    reset_duration_seconds: f64,
    reset_easing: Easing,
    mode: InteractionMode,
    drag_origin: (f64, f64),
}

impl TransformController {
    #[must_use]
    pub fn new(extent: ScaleExtent, reset_duration_seconds: f64, reset_easing: Easing) -> Self {
        Self {
            state: TransformState::Idle,
            extent,
            reset_duration_seconds,
            reset_easing,
            mode: InteractionMode::Idle,
            drag_origin: (0.0, 0.0),
        }
    }

    #[must_use]
    pub fn state(&self) -> TransformState {
        self.state
    }

    #[must_use]
    pub fn transform(&self) -> ZoomTransform {
        self.state.transform()
    }

    #[must_use]
    pub fn extent(&self) -> ScaleExtent {
        self.extent
    }

    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn is_resetting(&self) -> bool {
        matches!(self.state, TransformState::Resetting(_))
    }

    /// Starts a drag-pan at a pointer position.
    pub fn begin_drag(&mut self, x: f64, y: f64) {
        self.mode = InteractionMode::Panning;
        self.drag_origin = (x, y);
    }

    /// Pans by the pointer movement since the previous drag position.
    pub fn drag_to(&mut self, x: f64, y: f64) -> Option<ZoomTransform> {
        if self.mode != InteractionMode::Panning {
            return None;
        }
        let (last_x, last_y) = self.drag_origin;
        self.drag_origin = (x, y);
        self.pan_by(x - last_x, y - last_y)
    }

    pub fn end_drag(&mut self) {
        self.mode = InteractionMode::Idle;
    }

    /// Translates the view by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) -> Option<ZoomTransform> {
        if !dx.is_finite() || !dy.is_finite() || (dx == 0.0 && dy == 0.0) {
            return None;
        }
        let next = self.transform().translated_by(dx, dy);
        trace!(dx, dy, "pan");
        self.commit(next)
    }

    /// Multiplies the scale factor by `factor`, keeping `anchor` fixed.
    pub fn zoom_by(&mut self, factor: f64, anchor: (f64, f64)) -> Option<ZoomTransform> {
        if !factor.is_finite() || factor <= 0.0 {
            return None;
        }
        let current = self.transform();
        self.zoom_to(current.scale_factor * factor, anchor)
    }

    /// Sets the scale factor (clamped to the extent), keeping `anchor` fixed.
    pub fn zoom_to(&mut self, scale_factor: f64, anchor: (f64, f64)) -> Option<ZoomTransform> {
        if !anchor.0.is_finite() || !anchor.1.is_finite() {
            return None;
        }
        let clamped = self.extent.clamp(scale_factor);
        let next = self.transform().scaled_to(clamped, anchor);
        trace!(scale_factor = clamped, anchor_x = anchor.0, anchor_y = anchor.1, "zoom");
        self.commit(next)
    }

    /// Applies one wheel notch; negative `delta_y` zooms in.
    pub fn wheel(&mut self, delta_y: f64, anchor: (f64, f64)) -> Option<ZoomTransform> {
        if !delta_y.is_finite() || delta_y == 0.0 {
            return None;
        }
        self.zoom_by(2f64.powf(-delta_y * WHEEL_DELTA_SCALE), anchor)
    }

    /// Replaces the transform outright; the factor is clamped to the extent.
    pub fn set_transform(&mut self, transform: ZoomTransform) -> Option<ZoomTransform> {
        if !transform.translate_x.is_finite()
            || !transform.translate_y.is_finite()
            || !transform.scale_factor.is_finite()
        {
            return None;
        }
        self.commit(transform.constrained(self.extent))
    }

    /// Starts the animated return to identity.
    ///
    /// Returns `false` when the view already rests at identity.
    pub fn reset(&mut self) -> bool {
        let current = self.transform();
        self.mode = InteractionMode::Idle;
        if current.is_identity() {
            self.state = TransformState::Idle;
            return false;
        }

        let animation = ResetAnimation {
            from: current,
            transition: Transition::new(self.reset_duration_seconds, self.reset_easing),
        };
        debug!(
            from_scale = current.scale_factor,
            from_translate_x = current.translate_x,
            from_translate_y = current.translate_y,
            duration_seconds = animation.transition.duration_seconds(),
            "reset started"
        );
        self.state = if animation.transition.is_finished() {
            TransformState::Idle
        } else {
            TransformState::Resetting(animation)
        };
        true
    }

    /// Advances an in-flight reset. Returns the new transform while animating
    /// (including the final identity frame), `None` otherwise.
    pub fn step(&mut self, delta_seconds: f64) -> Option<ZoomTransform> {
        let TransformState::Resetting(mut animation) = self.state else {
            return None;
        };
        animation.transition.advance(delta_seconds);
        if animation.transition.is_finished() {
            debug!("reset completed");
            self.state = TransformState::Idle;
            return Some(ZoomTransform::IDENTITY);
        }
        self.state = TransformState::Resetting(animation);
        Some(animation.current())
    }

    /// Puts back a state captured with [`TransformController::state`], e.g.
    /// when the caller refuses a transform the last gesture produced. Drag
    /// tracking is left as is.
    pub fn restore_state(&mut self, state: TransformState) {
        self.state = state;
    }

    fn commit(&mut self, next: ZoomTransform) -> Option<ZoomTransform> {
        let previous = self.transform();
        // A gesture supersedes any reset in flight.
        self.state = if next.is_identity() {
            TransformState::Idle
        } else {
            TransformState::Interacting(next)
        };
        (next != previous).then_some(next)
    }
}
