use serde::{Deserialize, Serialize};

use crate::core::Viewport;

use super::RenderFrame;

/// Repaint layers of the plot frame, bottom-most first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameLayer {
    /// Domain lines, axis titles, the mark clip and the reset control.
    Static,
    /// Marks plus the tick lines and labels of both axes.
    Positions,
    /// Tooltip panel.
    Overlay,
}

impl FrameLayer {
    pub const ALL: [Self; 3] = [Self::Static, Self::Positions, Self::Overlay];

    const fn index(self) -> usize {
        match self {
            Self::Static => 0,
            Self::Positions => 1,
            Self::Overlay => 2,
        }
    }
}

/// Per-layer partial frames kept between passes so a repaint only rebuilds
/// the layers that changed.
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredRenderFrame {
    viewport: Viewport,
    layers: [Option<RenderFrame>; 3],
}

impl LayeredRenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            layers: [None, None, None],
        }
    }

    #[must_use]
    pub fn layer(&self, kind: FrameLayer) -> Option<&RenderFrame> {
        self.layers[kind.index()].as_ref()
    }

    pub fn set_layer(&mut self, kind: FrameLayer, frame: RenderFrame) {
        self.layers[kind.index()] = Some(frame);
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.layers.iter().all(Option::is_some)
    }

    /// Stacks every cached layer into one frame in paint order.
    #[must_use]
    pub fn flatten(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        for layer in self.layers.iter().flatten() {
            frame.append(layer);
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{CirclePrimitive, Color, TextHAlign, TextPrimitive};

    fn viewport() -> Viewport {
        Viewport::new(200, 100)
    }

    #[test]
    fn flatten_keeps_layer_order_within_each_primitive_list() {
        let mut layered = LayeredRenderFrame::new(viewport());
        let text = |content: &str| {
            TextPrimitive::new(content, 0.0, 0.0, 10.0, Color::rgb(0.0, 0.0, 0.0), TextHAlign::Left)
        };
        layered.set_layer(FrameLayer::Overlay, RenderFrame::new(viewport()).with_text(text("tip")));
        layered.set_layer(FrameLayer::Static, RenderFrame::new(viewport()).with_text(text("title")));
        layered.set_layer(
            FrameLayer::Positions,
            RenderFrame::new(viewport())
                .with_text(text("1.0"))
                .with_circle(CirclePrimitive::new(5.0, 5.0, 2.0, Color::rgb(0.0, 0.0, 0.0))),
        );

        assert!(layered.is_complete());
        let frame = layered.flatten();
        let contents: Vec<&str> = frame.texts.iter().map(|text| text.text.as_str()).collect();
        assert_eq!(contents, ["title", "1.0", "tip"]);
        assert_eq!(frame.circles.len(), 1);
    }

    #[test]
    fn missing_layers_are_skipped() {
        let mut layered = LayeredRenderFrame::new(viewport());
        assert!(!layered.is_complete());
        assert!(layered.flatten().is_empty());
        layered.set_layer(FrameLayer::Overlay, RenderFrame::new(viewport()));
        assert!(layered.layer(FrameLayer::Overlay).is_some());
        assert!(layered.layer(FrameLayer::Static).is_none());
    }
}
