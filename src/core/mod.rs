pub mod color_scale;
pub mod record;
pub mod scale;
pub mod scale_model;
pub mod transform;
pub mod types;

pub use color_scale::{ColorPalette, SequentialColorScale};
pub use record::{Metric, Record, RecordSet};
pub use scale::{LinearScale, TickValues, format_tick};
pub use scale_model::{DEGENERATE_DOMAIN_UPPER, ScaleModel, ScaleModelConfig};
pub use transform::{MIN_SCALE_FACTOR, ScaleExtent, ZoomTransform};
pub use types::{Margins, PlotArea, Viewport};
