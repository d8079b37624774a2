mod axis_render;
mod data_loader;
mod engine;
mod engine_config;
mod engine_snapshot;
mod interaction_controller;
mod invalidation;
mod json_contract;
mod legend_frame_builder;
mod listener_dispatch;
mod listener_registry;
mod mark_projection;
mod render_frame_builder;
mod tooltip_controller;
mod validation;

pub use axis_render::{AxisOrientation, AxisTick, axis_ticks};
pub use data_loader::{CsvColumns, load_records, load_records_from_path, load_records_from_str};
pub use engine::ScatterPlot;
pub use engine_config::{
    AxisConfig, LegendConfig, LegendEntry, MarkStyleConfig, ResetControlConfig,
    ScatterPlotConfig, TooltipConfig, TooltipField,
};
pub use engine_snapshot::ViewSnapshot;
pub use invalidation::InvalidationLevel;
pub use json_contract::{VIEW_SNAPSHOT_JSON_SCHEMA_V1, ViewSnapshotJsonContractV1};
pub use mark_projection::{MarkStyle, ProjectedMark, hit_test, mark_styles, project_marks};
