use serde::{Deserialize, Serialize};

use crate::core::LinearScale;
use crate::error::{ScatterError, ScatterResult};

/// Smallest scale factor a transform will carry.
///
/// The configured extent may start at `0`, but a zero factor has no inverse
/// and would collapse every mark onto one point, so clamping floors here.
pub const MIN_SCALE_FACTOR: f64 = 1e-3;

/// Inclusive bounds for the zoom scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleExtent {
    pub min: f64,
    pub max: f64,
}

impl Default for ScaleExtent {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 20.0,
        }
    }
}

impl ScaleExtent {
    pub fn new(min: f64, max: f64) -> ScatterResult<Self> {
        let extent = Self { min, max };
        extent.validate()?;
        Ok(extent)
    }

    pub fn validate(self) -> ScatterResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ScatterError::InvalidData(
                "scale extent bounds must be finite".to_owned(),
            ));
        }
        if self.min < 0.0 || self.max < self.min || self.max < MIN_SCALE_FACTOR {
            return Err(ScatterError::InvalidData(format!(
                "scale extent must satisfy 0 <= min <= max and max >= {MIN_SCALE_FACTOR}"
            )));
        }
        Ok(())
    }

    /// Clamps `factor` into the extent, never below [`MIN_SCALE_FACTOR`].
    #[must_use]
    pub fn clamp(self, factor: f64) -> f64 {
        let lower = self.min.max(MIN_SCALE_FACTOR);
        if factor.is_nan() {
            return 1.0_f64.clamp(lower, self.max);
        }
        factor.clamp(lower, self.max)
    }
}

/// Accumulated pan/zoom state: `screen = k * base + t` per axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale_factor: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ZoomTransform {
    pub const IDENTITY: Self = Self {
        translate_x: 0.0,
        translate_y: 0.0,
        scale_factor: 1.0,
    };

    #[must_use]
    pub const fn new(translate_x: f64, translate_y: f64, scale_factor: f64) -> Self {
        Self {
            translate_x,
            translate_y,
            scale_factor,
        }
    }

    #[must_use]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }

    pub fn validate(self) -> ScatterResult<()> {
        if !self.translate_x.is_finite() || !self.translate_y.is_finite() {
            return Err(ScatterError::InvalidData(
                "transform translation must be finite".to_owned(),
            ));
        }
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            return Err(ScatterError::InvalidData(
                "transform scale factor must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn apply_x(self, x: f64) -> f64 {
        x * self.scale_factor + self.translate_x
    }

    #[must_use]
    pub fn apply_y(self, y: f64) -> f64 {
        y * self.scale_factor + self.translate_y
    }

    #[must_use]
    pub fn invert_x(self, x: f64) -> f64 {
        (x - self.translate_x) / self.scale_factor
    }

    #[must_use]
    pub fn invert_y(self, y: f64) -> f64 {
        (y - self.translate_y) / self.scale_factor
    }

    /// Translates by a screen-space delta.
    #[must_use]
    pub fn translated_by(self, dx: f64, dy: f64) -> Self {
        Self {
            translate_x: self.translate_x + dx,
            translate_y: self.translate_y + dy,
            ..self
        }
    }

    /// Rescales to `scale_factor` keeping the point under `anchor` fixed.
    #[must_use]
    pub fn scaled_to(self, scale_factor: f64, anchor: (f64, f64)) -> Self {
        let (ax, ay) = anchor;
        let ratio = scale_factor / self.scale_factor;
        Self {
            translate_x: ax - (ax - self.translate_x) * ratio,
            translate_y: ay - (ay - self.translate_y) * ratio,
            scale_factor,
        }
    }

    /// Same translation with the factor clamped into `extent`.
    #[must_use]
    pub fn constrained(self, extent: ScaleExtent) -> Self {
        let clamped = extent.clamp(self.scale_factor);
        if clamped == self.scale_factor {
            return self;
        }
        Self {
            scale_factor: clamped,
            ..self
        }
    }

    /// Linear interpolation towards `target`; `t = 0` is `self`, `t = 1`
    /// returns `target` exactly.
    #[must_use]
    pub fn interpolate(self, target: Self, t: f64) -> Self {
        if t >= 1.0 {
            return target;
        }
        if t <= 0.0 {
            return self;
        }
        let lerp = |from: f64, to: f64| from + (to - from) * t;
        Self {
            translate_x: lerp(self.translate_x, target.translate_x),
            translate_y: lerp(self.translate_y, target.translate_y),
            scale_factor: lerp(self.scale_factor, target.scale_factor),
        }
    }

    /// Effective horizontal scale: same range, domain remapped so that
    /// `result.apply(v) == self.apply_x(base.apply(v))`.
    pub fn rescale_x(self, base: LinearScale) -> ScatterResult<LinearScale> {
        if self.is_identity() {
            return Ok(base);
        }
        let (r0, r1) = base.range();
        base.with_domain(
            base.invert(self.invert_x(r0)),
            base.invert(self.invert_x(r1)),
        )
    }

    /// Effective vertical scale, see [`ZoomTransform::rescale_x`].
    pub fn rescale_y(self, base: LinearScale) -> ScatterResult<LinearScale> {
        if self.is_identity() {
            return Ok(base);
        }
        let (r0, r1) = base.range();
        base.with_domain(
            base.invert(self.invert_y(r0)),
            base.invert(self.invert_y(r1)),
        )
    }
}
