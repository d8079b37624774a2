use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, Record, ScaleModel};
use crate::render::Color;

/// Transform-invariant appearance of one mark, computed once at load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkStyle {
    pub radius: f64,
    pub fill: Color,
}

/// One mark positioned by effective scales, in plot-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedMark {
    pub record_index: usize,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: Color,
}

impl ProjectedMark {
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        let dx = x - self.cx;
        let dy = y - self.cy;
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

/// Radius from the size metric, fill from the x metric.
#[must_use]
pub fn mark_styles(records: &[Record], scales: &ScaleModel, opacity: f64) -> Vec<MarkStyle> {
    records
        .iter()
        .map(|record| MarkStyle {
            radius: scales.radius(record.size),
            fill: scales.fill(record.x).with_alpha(opacity),
        })
        .collect()
}

/// Positions every mark with the given effective scales.
///
/// `styles` must be index-aligned with `records`; extra entries on either
/// side are ignored.
#[must_use]
pub fn project_marks(
    records: &[Record],
    styles: &[MarkStyle],
    x_scale: LinearScale,
    y_scale: LinearScale,
) -> Vec<ProjectedMark> {
    let project = |(record_index, (record, style)): (usize, (&Record, &MarkStyle))| {
        ProjectedMark {
            record_index,
            cx: x_scale.apply(record.x),
            cy: y_scale.apply(record.y),
            radius: style.radius,
            fill: style.fill,
        }
    };

    #[cfg(feature = "parallel-projection")]
    {
        use rayon::prelude::*;

        records
            .par_iter()
            .zip(styles.par_iter())
            .enumerate()
            .map(project)
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        records
            .iter()
            .zip(styles.iter())
            .enumerate()
            .map(project)
            .collect()
    }
}

/// Topmost (last drawn) mark containing a plot-local point.
#[must_use]
pub fn hit_test(marks: &[ProjectedMark], x: f64, y: f64) -> Option<usize> {
    marks
        .iter()
        .rev()
        .find(|mark| mark.contains(x, y))
        .map(|mark| mark.record_index)
}
