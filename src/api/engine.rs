use std::path::Path;

use tracing::{debug, info};

use crate::core::{LinearScale, PlotArea, RecordSet, ScaleModel, Viewport, ZoomTransform};
use crate::error::ScatterResult;
use crate::extensions::{ViewEvent, ViewListener};
use crate::interaction::{
    InteractionMode, TooltipState, TransformController, TransformState,
};
use crate::render::{FrameLayer, LayeredRenderFrame, RenderFrame, Renderer};

use super::data_loader::load_records_from_path;
use super::mark_projection::{MarkStyle, ProjectedMark, mark_styles, project_marks};
use super::render_frame_builder::{build_plot_frame, build_plot_layer};
use super::validation::validate_config;
use super::{InvalidationLevel, ScatterPlotConfig};

/// Main orchestration facade consumed by host applications.
///
/// `ScatterPlot` owns the dataset, the base scales, the transform controller,
/// the tooltip and the renderer. Hosts forward pointer input and animation
/// ticks to it and call `render` when `needs_render` reports pending work.
pub struct ScatterPlot<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ScatterPlotConfig,
    pub(super) plot: PlotArea,
    pub(super) records: RecordSet,
    pub(super) scales: ScaleModel,
    pub(super) mark_styles: Vec<MarkStyle>,
    pub(super) controller: TransformController,
    pub(super) tooltip: TooltipState,
    pub(super) pointer: Option<(f64, f64)>,
    pub(super) listeners: Vec<Box<dyn ViewListener>>,
    pub(super) invalidation: InvalidationLevel,
    pub(super) layers: LayeredRenderFrame,
    pub(super) last_rebuilt_layers: &'static [FrameLayer],
}

impl<R: Renderer + std::fmt::Debug> std::fmt::Debug for ScatterPlot<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScatterPlot")
            .field("renderer", &self.renderer)
            .field("config", &self.config)
            .field("plot", &self.plot)
            .field("records", &self.records)
            .field("scales", &self.scales)
            .field("mark_styles", &self.mark_styles)
            .field("controller", &self.controller)
            .field("tooltip", &self.tooltip)
            .field("pointer", &self.pointer)
            .field(
                "listeners",
                &self.listeners.iter().map(|l| l.id()).collect::<Vec<_>>(),
            )
            .field("invalidation", &self.invalidation)
            .field("layers", &self.layers)
            .field("last_rebuilt_layers", &self.last_rebuilt_layers)
            .finish()
    }
}

impl<R: Renderer> ScatterPlot<R> {
    /// Builds the view: validates config, derives base scales once and caches
    /// every mark's radius and fill.
    pub fn new(renderer: R, config: ScatterPlotConfig, records: RecordSet) -> ScatterResult<Self> {
        validate_config(&config)?;

        let plot = PlotArea::from_viewport(config.viewport, config.margins)?;
        let scales = ScaleModel::from_records(&records, plot, config.scale_model)?;
        let mark_styles = mark_styles(records.records(), &scales, config.marks.opacity);
        let controller = TransformController::new(
            config.scale_extent,
            config.reset_control.duration_seconds,
            config.reset_control.easing,
        );
        let tooltip = TooltipState::new(config.tooltip.timing);
        let layers = LayeredRenderFrame::new(config.viewport);

        info!(
            records = records.len(),
            width = config.viewport.width,
            height = config.viewport.height,
            "scatter plot initialized"
        );

        Ok(Self {
            renderer,
            config,
            plot,
            records,
            scales,
            mark_styles,
            controller,
            tooltip,
            pointer: None,
            listeners: Vec::new(),
            invalidation: InvalidationLevel::Full,
            layers,
            last_rebuilt_layers: &[],
        })
    }

    /// Loads the dataset from a CSV file using the configured columns.
    pub fn from_csv_path(
        renderer: R,
        config: ScatterPlotConfig,
        path: impl AsRef<Path>,
    ) -> ScatterResult<Self> {
        let records = load_records_from_path(path, &config.columns)?;
        Self::new(renderer, config, records)
    }

    #[must_use]
    pub fn config(&self) -> &ScatterPlotConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.plot
    }

    #[must_use]
    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    /// Base scales derived at load time.
    #[must_use]
    pub fn scales(&self) -> &ScaleModel {
        &self.scales
    }

    #[must_use]
    pub fn mark_styles(&self) -> &[MarkStyle] {
        &self.mark_styles
    }

    #[must_use]
    pub fn transform(&self) -> ZoomTransform {
        self.controller.transform()
    }

    #[must_use]
    pub fn transform_state(&self) -> TransformState {
        self.controller.state()
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.controller.mode()
    }

    #[must_use]
    pub fn tooltip(&self) -> &TooltipState {
        &self.tooltip
    }

    /// Base x scale composed with the current transform.
    pub fn effective_x_scale(&self) -> ScatterResult<LinearScale> {
        self.transform().rescale_x(self.scales.x)
    }

    /// Base y scale composed with the current transform.
    pub fn effective_y_scale(&self) -> ScatterResult<LinearScale> {
        self.transform().rescale_y(self.scales.y)
    }

    /// Marks positioned under the current transform, plot-local pixels.
    pub fn projected_marks(&self) -> ScatterResult<Vec<ProjectedMark>> {
        Ok(project_marks(
            self.records.records(),
            &self.mark_styles,
            self.effective_x_scale()?,
            self.effective_y_scale()?,
        ))
    }

    #[must_use]
    pub fn invalidation(&self) -> InvalidationLevel {
        self.invalidation
    }

    #[must_use]
    pub fn needs_render(&self) -> bool {
        self.invalidation != InvalidationLevel::None
    }

    pub(super) fn invalidate(&mut self, level: InvalidationLevel) {
        self.invalidation = self.invalidation.max(level);
    }

    /// Builds every layer of the plot frame from scratch without drawing it.
    pub fn build_frame(&self) -> ScatterResult<RenderFrame> {
        build_plot_frame(self)
    }

    /// Layers rebuilt by the most recent `render` pass.
    #[must_use]
    pub fn last_rebuilt_layers(&self) -> &'static [FrameLayer] {
        self.last_rebuilt_layers
    }

    /// Rebuilds the layers the pending invalidation touches, reuses the
    /// cached rest and draws the stacked frame.
    pub fn render(&mut self) -> ScatterResult<()> {
        let level = if self.layers.is_complete() {
            self.invalidation
        } else {
            InvalidationLevel::Full
        };
        let dirty = level.dirty_layers();
        for &layer in dirty {
            let frame = build_plot_layer(self, layer)?;
            self.layers.set_layer(layer, frame);
        }
        self.last_rebuilt_layers = dirty;

        let frame = self.layers.flatten();
        debug!(
            level = ?level,
            rebuilt = ?dirty,
            circles = frame.circles.len(),
            lines = frame.lines.len(),
            "render pass"
        );
        self.renderer.render(&frame)?;
        self.invalidation = InvalidationLevel::None;
        self.emit_view_event(ViewEvent::Rendered);
        Ok(())
    }

    /// Renders only when something changed since the last pass.
    pub fn render_if_needed(&mut self) -> ScatterResult<bool> {
        if !self.needs_render() {
            return Ok(false);
        }
        self.render()?;
        Ok(true)
    }

    /// Draws the legend frame with the given renderer.
    pub fn render_legend<L: Renderer>(&self, renderer: &mut L) -> ScatterResult<()> {
        let frame = self.build_legend_frame()?;
        renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
