use serde::{Deserialize, Serialize};

use crate::core::{Margins, ScaleExtent, ScaleModelConfig, Viewport};
use crate::error::{ScatterError, ScatterResult};
use crate::interaction::{Easing, TooltipTiming};
use crate::render::Color;

use super::CsvColumns;

/// Mark styling shared by every record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkStyleConfig {
    #[serde(default = "default_mark_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub stroke: Option<Color>,
    #[serde(default)]
    pub stroke_width: f64,
}

impl Default for MarkStyleConfig {
    fn default() -> Self {
        Self {
            opacity: default_mark_opacity(),
            stroke: None,
            stroke_width: 0.0,
        }
    }
}

/// Axis, tick and title presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    #[serde(default = "default_tick_size_px")]
    pub tick_size_px: f64,
    #[serde(default = "default_tick_padding_px")]
    pub tick_padding_px: f64,
    #[serde(default = "default_tick_font_size_px")]
    pub tick_font_size_px: f64,
    #[serde(default = "default_title_font_size_px")]
    pub title_font_size_px: f64,
    #[serde(default = "default_axis_color")]
    pub color: Color,
    #[serde(default = "default_x_title")]
    pub x_title: String,
    #[serde(default = "default_y_title")]
    pub y_title: String,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            tick_count: default_tick_count(),
            tick_size_px: default_tick_size_px(),
            tick_padding_px: default_tick_padding_px(),
            tick_font_size_px: default_tick_font_size_px(),
            title_font_size_px: default_title_font_size_px(),
            color: default_axis_color(),
            x_title: default_x_title(),
            y_title: default_y_title(),
        }
    }
}

/// One tooltip row: `"{label}: {value} {unit}"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipField {
    pub label: String,
    #[serde(default)]
    pub unit: String,
}

impl TooltipField {
    #[must_use]
    pub fn new(label: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            unit: unit.into(),
        }
    }
}

/// Tooltip content labels and panel styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipConfig {
    #[serde(default)]
    pub timing: TooltipTiming,
    #[serde(default = "default_name_label")]
    pub name_label: String,
    #[serde(default = "default_population_field")]
    pub population: TooltipField,
    #[serde(default = "default_x_field")]
    pub x: TooltipField,
    #[serde(default = "default_y_field")]
    pub y: TooltipField,
    #[serde(default = "default_size_field")]
    pub size: TooltipField,
    #[serde(default = "default_tooltip_font_size_px")]
    pub font_size_px: f64,
    #[serde(default = "default_tooltip_background")]
    pub background: Color,
    #[serde(default = "default_tooltip_text_color")]
    pub text_color: Color,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            timing: TooltipTiming::default(),
            name_label: default_name_label(),
            population: default_population_field(),
            x: default_x_field(),
            y: default_y_field(),
            size: default_size_field(),
            font_size_px: default_tooltip_font_size_px(),
            background: default_tooltip_background(),
            text_color: default_tooltip_text_color(),
        }
    }
}

/// Clickable reset button placed in the top margin, right-aligned with the plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResetControlConfig {
    #[serde(default = "default_reset_label")]
    pub label: String,
    #[serde(default = "default_reset_size")]
    pub size: (f64, f64),
    #[serde(default = "default_reset_gap_px")]
    pub gap_px: f64,
    #[serde(default = "default_reset_duration_seconds")]
    pub duration_seconds: f64,
    #[serde(default)]
    pub easing: Easing,
}

impl Default for ResetControlConfig {
    fn default() -> Self {
        Self {
            label: default_reset_label(),
            size: default_reset_size(),
            gap_px: default_reset_gap_px(),
            duration_seconds: default_reset_duration_seconds(),
            easing: Easing::default(),
        }
    }
}

/// One reference mark in the legend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    /// Value fed to the size scale.
    pub size_value: f64,
    /// Value fed to the color scale.
    pub color_value: f64,
    pub label: String,
    pub mark_center: (f64, f64),
    pub label_position: (f64, f64),
}

/// Standalone legend frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendConfig {
    #[serde(default = "default_legend_viewport")]
    pub viewport: Viewport,
    #[serde(default = "default_legend_title")]
    pub title: String,
    #[serde(default = "default_legend_title_position")]
    pub title_position: (f64, f64),
    #[serde(default = "default_legend_title_font_size_px")]
    pub title_font_size_px: f64,
    #[serde(default = "default_legend_label_font_size_px")]
    pub label_font_size_px: f64,
    #[serde(default = "default_legend_text_color")]
    pub text_color: Color,
    #[serde(default = "default_legend_stroke")]
    pub mark_stroke: Color,
    #[serde(default = "default_legend_entries")]
    pub entries: Vec<LegendEntry>,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            viewport: default_legend_viewport(),
            title: default_legend_title(),
            title_position: default_legend_title_position(),
            title_font_size_px: default_legend_title_font_size_px(),
            label_font_size_px: default_legend_label_font_size_px(),
            text_color: default_legend_text_color(),
            mark_stroke: default_legend_stroke(),
            entries: default_legend_entries(),
        }
    }
}

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can keep chart setup in a JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPlotConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default)]
    pub scale_model: ScaleModelConfig,
    #[serde(default)]
    pub scale_extent: ScaleExtent,
    #[serde(default)]
    pub marks: MarkStyleConfig,
    #[serde(default)]
    pub axis: AxisConfig,
    #[serde(default)]
    pub tooltip: TooltipConfig,
    #[serde(default)]
    pub reset_control: ResetControlConfig,
    #[serde(default)]
    pub legend: LegendConfig,
    #[serde(default)]
    pub columns: CsvColumns,
}

impl Default for ScatterPlotConfig {
    fn default() -> Self {
        Self::new(default_viewport())
    }
}

impl ScatterPlotConfig {
    /// Creates a config with default layout for the given surface size.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: Margins::default(),
            scale_model: ScaleModelConfig::default(),
            scale_extent: ScaleExtent::default(),
            marks: MarkStyleConfig::default(),
            axis: AxisConfig::default(),
            tooltip: TooltipConfig::default(),
            reset_control: ResetControlConfig::default(),
            legend: LegendConfig::default(),
            columns: CsvColumns::default(),
        }
    }

    /// Creates a config whose plot area is exactly `width x height` inside
    /// the given margins.
    #[must_use]
    pub fn with_plot_size(width: u32, height: u32, margins: Margins) -> Self {
        let viewport = Viewport::new(
            width + (margins.left + margins.right).round() as u32,
            height + (margins.top + margins.bottom).round() as u32,
        );
        Self::new(viewport).with_margins(margins)
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_scale_model(mut self, scale_model: ScaleModelConfig) -> Self {
        self.scale_model = scale_model;
        self
    }

    #[must_use]
    pub fn with_scale_extent(mut self, extent: ScaleExtent) -> Self {
        self.scale_extent = extent;
        self
    }

    #[must_use]
    pub fn with_reset_duration(mut self, duration_seconds: f64) -> Self {
        self.reset_control.duration_seconds = duration_seconds;
        self
    }

    #[must_use]
    pub fn with_tooltip_timing(mut self, timing: TooltipTiming) -> Self {
        self.tooltip.timing = timing;
        self
    }

    #[must_use]
    pub fn with_columns(mut self, columns: CsvColumns) -> Self {
        self.columns = columns;
        self
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> ScatterResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ScatterError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON; missing fields take their defaults.
    pub fn from_json_str(input: &str) -> ScatterResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ScatterError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_viewport() -> Viewport {
    Viewport::new(1300, 860)
}

fn default_mark_opacity() -> f64 {
    0.6
}

fn default_tick_count() -> usize {
    10
}

fn default_tick_size_px() -> f64 {
    6.0
}

fn default_tick_padding_px() -> f64 {
    3.0
}

fn default_tick_font_size_px() -> f64 {
    10.0
}

fn default_title_font_size_px() -> f64 {
    20.0
}

fn default_axis_color() -> Color {
    Color::rgb(0.0, 0.0, 0.0)
}

fn default_x_title() -> String {
    "GDP (in Trillion US Dollars) in 2010".to_owned()
}

fn default_y_title() -> String {
    "Energy Consumption per Capita (in Millions BTUs per person)".to_owned()
}

fn default_name_label() -> String {
    "Country".to_owned()
}

fn default_population_field() -> TooltipField {
    TooltipField::new("Population", "Million")
}

fn default_x_field() -> TooltipField {
    TooltipField::new("GDP", "Trillion")
}

fn default_y_field() -> TooltipField {
    TooltipField::new("EPC", "Million BTUs")
}

fn default_size_field() -> TooltipField {
    TooltipField::new("Total", "Trillion BTUs")
}

fn default_tooltip_font_size_px() -> f64 {
    13.0
}

fn default_tooltip_background() -> Color {
    Color::from_rgb8(245, 245, 245)
}

fn default_tooltip_text_color() -> Color {
    Color::from_rgb8(34, 34, 34)
}

fn default_reset_label() -> String {
    "Reset".to_owned()
}

fn default_reset_size() -> (f64, f64) {
    (80.0, 28.0)
}

fn default_reset_gap_px() -> f64 {
    20.0
}

fn default_reset_duration_seconds() -> f64 {
    1.5
}

fn default_legend_viewport() -> Viewport {
    Viewport::new(400, 400)
}

fn default_legend_title() -> String {
    "Legend".to_owned()
}

fn default_legend_title_position() -> (f64, f64) {
    (170.0, 50.0)
}

fn default_legend_title_font_size_px() -> f64 {
    24.0
}

fn default_legend_label_font_size_px() -> f64 {
    17.0
}

fn default_legend_text_color() -> Color {
    Color::from_rgb8(34, 34, 34)
}

fn default_legend_stroke() -> Color {
    Color::from_rgb8(0x54, 0x53, 0x53)
}

fn default_legend_entries() -> Vec<LegendEntry> {
    vec![
        LegendEntry {
            size_value: 5.0,
            color_value: 7.0,
            label: "TEC of 5 Trillion".to_owned(),
            mark_center: (220.0, 100.0),
            label_position: (80.0, 105.0),
        },
        LegendEntry {
            size_value: 10.0,
            color_value: 11.0,
            label: "TEC of 10 Trillion".to_owned(),
            mark_center: (220.0, 160.0),
            label_position: (80.0, 165.0),
        },
        LegendEntry {
            size_value: 100.0,
            color_value: 101.0,
            label: "TEC of 100 Trillion".to_owned(),
            mark_center: (270.0, 280.0),
            label_position: (80.0, 265.0),
        },
    ]
}
