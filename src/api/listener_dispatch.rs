use tracing::warn;

use crate::extensions::{ViewContext, ViewEvent};
use crate::render::Renderer;

use super::ScatterPlot;

impl<R: Renderer> ScatterPlot<R> {
    pub(super) fn view_context(&self) -> ViewContext {
        let x_domain = self
            .effective_x_scale()
            .map(|scale| scale.domain())
            .unwrap_or_else(|err| {
                warn!(error = %err, "falling back to base x domain in listener context");
                self.scales.x.domain()
            });
        let y_domain = self
            .effective_y_scale()
            .map(|scale| scale.domain())
            .unwrap_or_else(|err| {
                warn!(error = %err, "falling back to base y domain in listener context");
                self.scales.y.domain()
            });

        ViewContext {
            viewport: self.config.viewport,
            transform: self.transform(),
            x_domain,
            y_domain,
            records_len: self.records.len(),
            interaction_mode: self.controller.mode(),
            resetting: self.controller.is_resetting(),
            tooltip_record: self.tooltip.record_index(),
        }
    }

    pub(super) fn emit_view_event(&mut self, event: ViewEvent) {
        if self.listeners.is_empty() {
            return;
        }
        let context = self.view_context();
        for listener in &mut self.listeners {
            listener.on_event(event, context);
        }
    }
}
