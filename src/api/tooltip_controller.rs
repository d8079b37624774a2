use indexmap::IndexMap;
use tracing::trace;

use crate::error::ScatterResult;
use crate::extensions::ViewEvent;
use crate::render::Renderer;

use super::mark_projection::hit_test;
use super::{InvalidationLevel, ScatterPlot, TooltipField};

impl<R: Renderer> ScatterPlot<R> {
    /// Record under a surface point, topmost mark first.
    pub fn mark_at(&self, x: f64, y: f64) -> ScatterResult<Option<usize>> {
        if !self.plot.contains(x, y) {
            return Ok(None);
        }
        let (local_x, local_y) = self.plot.to_local(x, y);
        let marks = self.projected_marks()?;
        Ok(hit_test(&marks, local_x, local_y))
    }

    /// Tooltip rows for a record, in display order: label to formatted value.
    #[must_use]
    pub fn tooltip_rows(&self, record_index: usize) -> Option<IndexMap<String, String>> {
        let record = self.records.get(record_index)?;
        let labels = &self.config.tooltip;
        let mut rows = IndexMap::with_capacity(5);
        rows.insert(labels.name_label.clone(), record.name.clone());
        for (field, value) in [
            (&labels.population, record.population),
            (&labels.x, record.x),
            (&labels.y, record.y),
            (&labels.size, record.size),
        ] {
            rows.insert(field.label.clone(), format_value(field, value));
        }
        Some(rows)
    }

    /// Rows of the record the tooltip currently describes.
    #[must_use]
    pub fn tooltip_content(&self) -> Option<IndexMap<String, String>> {
        self.tooltip
            .record_index()
            .and_then(|index| self.tooltip_rows(index))
    }

    pub(super) fn update_hover(&mut self, x: f64, y: f64) -> ScatterResult<()> {
        match self.mark_at(x, y)? {
            Some(record_index) if self.tooltip.is_showing(record_index) => {}
            Some(record_index) => {
                trace!(record_index, x, y, "hover enter");
                self.tooltip.show(record_index, x, y);
                self.invalidate(InvalidationLevel::Overlay);
                self.emit_view_event(ViewEvent::TooltipShown { record_index });
            }
            None => self.hide_tooltip(),
        }
        Ok(())
    }

    pub(super) fn hide_tooltip(&mut self) {
        let Some(record_index) = self.tooltip.record_index() else {
            return;
        };
        if !self.tooltip.is_showing(record_index) {
            return;
        }
        trace!(record_index, "hover exit");
        self.tooltip.hide();
        self.invalidate(InvalidationLevel::Overlay);
        self.emit_view_event(ViewEvent::TooltipHidden);
    }
}

fn format_value(field: &TooltipField, value: f64) -> String {
    if field.unit.is_empty() {
        value.to_string()
    } else {
        format!("{value} {}", field.unit)
    }
}
