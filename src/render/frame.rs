use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, Viewport};
use crate::error::{ScatterError, ScatterResult};
use crate::render::{CirclePrimitive, LinePrimitive, RectPrimitive, TextPrimitive};

/// Axis-aligned clip region in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl From<PlotArea> for ClipRect {
    fn from(plot: PlotArea) -> Self {
        Self {
            x: plot.left,
            y: plot.top,
            width: plot.width,
            height: plot.height,
        }
    }
}

/// Backend-agnostic scene for one draw pass.
///
/// Backends paint in field order: lines, circles (clipped to `circle_clip`
/// when set), rects, texts, then the overlay rects and texts on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub circle_clip: Option<ClipRect>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
    pub overlay_rects: Vec<RectPrimitive>,
    pub overlay_texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            circles: Vec::new(),
            circle_clip: None,
            rects: Vec::new(),
            texts: Vec::new(),
            overlay_rects: Vec::new(),
            overlay_texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_circle(mut self, circle: CirclePrimitive) -> Self {
        self.circles.push(circle);
        self
    }

    #[must_use]
    pub fn with_circle_clip(mut self, clip: ClipRect) -> Self {
        self.circle_clip = Some(clip);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    pub fn validate(&self) -> ScatterResult<()> {
        self.viewport.validate()?;

        if let Some(clip) = self.circle_clip {
            if ![clip.x, clip.y, clip.width, clip.height]
                .iter()
                .all(|value| value.is_finite())
                || clip.width < 0.0
                || clip.height < 0.0
            {
                return Err(ScatterError::InvalidData(
                    "circle clip must be finite with non-negative size".to_owned(),
                ));
            }
        }

        for line in &self.lines {
            line.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for rect in self.rects.iter().chain(&self.overlay_rects) {
            rect.validate()?;
        }
        for text in self.texts.iter().chain(&self.overlay_texts) {
            text.validate()?;
        }

        Ok(())
    }

    /// Appends every primitive of `other` after this frame's own. The clip is
    /// taken from `other` only when this frame has none.
    pub fn append(&mut self, other: &RenderFrame) {
        self.lines.extend(other.lines.iter().copied());
        self.circles.extend(other.circles.iter().copied());
        if self.circle_clip.is_none() {
            self.circle_clip = other.circle_clip;
        }
        self.rects.extend(other.rects.iter().copied());
        self.texts.extend(other.texts.iter().cloned());
        self.overlay_rects.extend(other.overlay_rects.iter().copied());
        self.overlay_texts.extend(other.overlay_texts.iter().cloned());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.circles.is_empty()
            && self.rects.is_empty()
            && self.texts.is_empty()
            && self.overlay_rects.is_empty()
            && self.overlay_texts.is_empty()
    }
}
