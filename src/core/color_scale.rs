use serde::{Deserialize, Serialize};

use crate::error::{ScatterError, ScatterResult};
use crate::render::Color;

// Cubehelix basis (Green 2011).
const CUBEHELIX_A: f64 = -0.14861;
const CUBEHELIX_B: f64 = 1.78277;
const CUBEHELIX_C: f64 = -0.29227;
const CUBEHELIX_D: f64 = -0.90649;
const CUBEHELIX_E: f64 = 1.97294;

/// Palette sampled by a [`SequentialColorScale`] over `t ∈ [0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ColorPalette {
    /// Cyclic cubehelix rainbow; both ends meet at the same hue.
    #[default]
    Rainbow,
    /// Two-stop linear ramp between explicit colors.
    Ramp { from: [u8; 3], to: [u8; 3] },
}

impl ColorPalette {
    #[must_use]
    pub fn sample(self, t: f64) -> Color {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        match self {
            Self::Rainbow => rainbow(t),
            Self::Ramp { from, to } => {
                let channel = |a: u8, b: u8| {
                    let a = f64::from(a);
                    let b = f64::from(b);
                    quantize(a + (b - a) * t)
                };
                Color::rgb(
                    channel(from[0], to[0]),
                    channel(from[1], to[1]),
                    channel(from[2], to[2]),
                )
            }
        }
    }
}

/// Maps a continuous domain onto a palette.
///
/// Inputs outside the domain clamp to the nearest endpoint color. The domain
/// may be reversed; a degenerate domain maps every input to the palette start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SequentialColorScale {
    domain_start: f64,
    domain_end: f64,
    palette: ColorPalette,
}

impl SequentialColorScale {
    pub fn new(domain: (f64, f64), palette: ColorPalette) -> ScatterResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(ScatterError::InvalidData(
                "color scale domain must be finite".to_owned(),
            ));
        }
        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            palette,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn palette(self) -> ColorPalette {
        self.palette
    }

    /// Normalized position of `value` inside the domain, clamped to `[0, 1]`.
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        if span == 0.0 || !value.is_finite() {
            return 0.0;
        }
        ((value - self.domain_start) / span).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn apply(self, value: f64) -> Color {
        self.palette.sample(self.normalize(value))
    }
}

fn rainbow(t: f64) -> Color {
    let distance = (t - 0.5).abs();
    let hue = 360.0 * t - 100.0;
    let saturation = 1.5 - 1.5 * distance;
    let lightness = 0.8 - 0.9 * distance;
    cubehelix(hue, saturation, lightness)
}

fn cubehelix(hue_degrees: f64, saturation: f64, lightness: f64) -> Color {
    let h = (hue_degrees + 120.0).to_radians();
    let amplitude = saturation * lightness * (1.0 - lightness);
    let (sin_h, cos_h) = h.sin_cos();
    let red = 255.0 * (lightness + amplitude * (CUBEHELIX_A * cos_h + CUBEHELIX_B * sin_h));
    let green = 255.0 * (lightness + amplitude * (CUBEHELIX_C * cos_h + CUBEHELIX_D * sin_h));
    let blue = 255.0 * (lightness + amplitude * (CUBEHELIX_E * cos_h));
    Color::rgb(quantize(red), quantize(green), quantize(blue))
}

/// Rounds an 8-bit channel value and normalizes it into `[0, 1]`.
fn quantize(channel: f64) -> f64 {
    channel.round().clamp(0.0, 255.0) / 255.0
}
