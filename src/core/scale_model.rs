use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    ColorPalette, LinearScale, Metric, PlotArea, RecordSet, SequentialColorScale,
};
use crate::error::{ScatterError, ScatterResult};
use crate::render::Color;

/// Upper bound substituted when a metric's observed maximum is not positive.
pub const DEGENERATE_DOMAIN_UPPER: f64 = 1.0;

/// Tuning for deriving scales from a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleModelConfig {
    /// Added to `max(x)` so the right-most mark is not clipped by the frame.
    #[serde(default = "default_x_domain_padding")]
    pub x_domain_padding: f64,
    /// Radius range in pixels for the size scale.
    #[serde(default = "default_radius_range")]
    pub radius_range: (f64, f64),
    /// Color domain upper bound is `max(x) / color_domain_divisor`.
    #[serde(default = "default_color_domain_divisor")]
    pub color_domain_divisor: f64,
    #[serde(default)]
    pub palette: ColorPalette,
}

impl Default for ScaleModelConfig {
    fn default() -> Self {
        Self {
            x_domain_padding: default_x_domain_padding(),
            radius_range: default_radius_range(),
            color_domain_divisor: default_color_domain_divisor(),
            palette: ColorPalette::default(),
        }
    }
}

impl ScaleModelConfig {
    pub fn validate(self) -> ScatterResult<()> {
        if !self.x_domain_padding.is_finite() || self.x_domain_padding < 0.0 {
            return Err(ScatterError::InvalidData(
                "x domain padding must be finite and >= 0".to_owned(),
            ));
        }
        let (min_radius, max_radius) = self.radius_range;
        if !min_radius.is_finite() || !max_radius.is_finite() || min_radius < 0.0 {
            return Err(ScatterError::InvalidData(
                "radius range must be finite and >= 0".to_owned(),
            ));
        }
        if min_radius > max_radius {
            return Err(ScatterError::InvalidData(
                "radius range start must be <= end".to_owned(),
            ));
        }
        if !self.color_domain_divisor.is_finite() || self.color_domain_divisor <= 0.0 {
            return Err(ScatterError::InvalidData(
                "color domain divisor must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

fn default_x_domain_padding() -> f64 {
    3.0
}

fn default_radius_range() -> (f64, f64) {
    (1.0, 100.0)
}

fn default_color_domain_divisor() -> f64 {
    60.0
}

/// Base scales derived once from the loaded dataset.
///
/// The model never changes after construction; interaction derives
/// effective scales from it instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleModel {
    pub x: LinearScale,
    pub y: LinearScale,
    pub size: LinearScale,
    pub color: SequentialColorScale,
}

impl ScaleModel {
    pub fn from_records(
        records: &RecordSet,
        plot: PlotArea,
        config: ScaleModelConfig,
    ) -> ScatterResult<Self> {
        config.validate()?;

        let x_max = records.max(Metric::X).unwrap_or(0.0);
        let y_max = records.max(Metric::Y).unwrap_or(0.0);
        let size_max = records.max(Metric::Size).unwrap_or(0.0);
        let size_min = records.min(Metric::Size).unwrap_or(0.0);

        let x = LinearScale::new(
            (0.0, non_degenerate_upper(x_max + config.x_domain_padding)),
            (0.0, plot.width),
        )?;
        let y = LinearScale::new((0.0, non_degenerate_upper(y_max)), (plot.height, 0.0))?;
        let size = LinearScale::new((0.0, non_degenerate_upper(size_max)), config.radius_range)?;
        let color = SequentialColorScale::new(
            (size_min, x_max / config.color_domain_divisor),
            config.palette,
        )?;

        debug!(
            records = records.len(),
            x_domain = ?x.domain(),
            y_domain = ?y.domain(),
            size_domain = ?size.domain(),
            color_domain = ?color.domain(),
            "derived scale model"
        );

        Ok(Self { x, y, size, color })
    }

    #[must_use]
    pub fn radius(&self, size_value: f64) -> f64 {
        self.size.apply(size_value)
    }

    #[must_use]
    pub fn fill(&self, color_value: f64) -> Color {
        self.color.apply(color_value)
    }
}

fn non_degenerate_upper(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        DEGENERATE_DOMAIN_UPPER
    }
}
