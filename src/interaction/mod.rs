mod tooltip;
mod transform_controller;
mod transition;

use serde::{Deserialize, Serialize};

pub use tooltip::{TooltipSnapshot, TooltipState, TooltipTiming};
pub use transform_controller::{
    ResetAnimation, TransformController, TransformState, WHEEL_DELTA_SCALE,
};
pub use transition::{Easing, Transition};

/// Pointer gesture currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Panning,
}
