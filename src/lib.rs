//! scatter-rs: headless interactive scatterplot engine.
//!
//! Base scales are derived once from the dataset; pan/zoom gestures only
//! change a transform that is composed with those scales on every pass, so
//! marks and axis ticks always agree.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ScatterPlot, ScatterPlotConfig};
pub use error::{ScatterError, ScatterResult};
