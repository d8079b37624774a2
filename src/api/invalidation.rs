use serde::{Deserialize, Serialize};

use crate::render::FrameLayer;

/// Ordered repaint classes; merging two pending requests keeps the larger.
///
/// Tooltip fades only touch the overlay. Gestures move marks and ticks
/// (`Positions`). `Full` also rebuilds the static chrome and is only requested
/// for the first paint after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum InvalidationLevel {
    #[default]
    None,
    Overlay,
    Positions,
    Full,
}

impl InvalidationLevel {
    /// Frame layers a pass at this level has to rebuild, bottom-most first.
    #[must_use]
    pub const fn dirty_layers(self) -> &'static [FrameLayer] {
        match self {
            Self::None => &[],
            Self::Overlay => &[FrameLayer::Overlay],
            Self::Positions => &[FrameLayer::Positions, FrameLayer::Overlay],
            Self::Full => &[FrameLayer::Static, FrameLayer::Positions, FrameLayer::Overlay],
        }
    }
}
