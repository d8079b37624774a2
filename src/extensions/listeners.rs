use serde::{Deserialize, Serialize};

use crate::core::{Viewport, ZoomTransform};
use crate::interaction::InteractionMode;

/// Read-only state snapshot passed to listener hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewContext {
    pub viewport: Viewport,
    pub transform: ZoomTransform,
    /// Visible x domain under the current transform.
    pub x_domain: (f64, f64),
    /// Visible y domain under the current transform.
    pub y_domain: (f64, f64),
    pub records_len: usize,
    pub interaction_mode: InteractionMode,
    pub resetting: bool,
    pub tooltip_record: Option<usize>,
}

/// Event stream exposed to listeners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ViewEvent {
    TransformChanged { transform: ZoomTransform },
    PanStarted,
    PanEnded,
    ResetStarted,
    ResetCompleted,
    TooltipShown { record_index: usize },
    TooltipHidden,
    Rendered,
}

/// Extension hook interface for reacting to interaction events.
///
/// Events are delivered synchronously and in order, inside the engine call
/// that caused them.
pub trait ViewListener {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: ViewEvent, context: ViewContext);
}
