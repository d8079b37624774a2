use crate::error::{ScatterError, ScatterResult};
use crate::interaction::TooltipTiming;
use crate::render::Color;

use super::ScatterPlotConfig;

pub(super) fn validate_config(config: &ScatterPlotConfig) -> ScatterResult<()> {
    config.viewport.validate()?;
    config.legend.viewport.validate()?;
    config.scale_model.validate()?;
    config.scale_extent.validate()?;

    validate_unit_interval(config.marks.opacity, "mark opacity")?;
    validate_non_negative(config.marks.stroke_width, "mark stroke width")?;
    if let Some(stroke) = config.marks.stroke {
        stroke.validate()?;
    }

    if config.axis.tick_count == 0 {
        return Err(ScatterError::InvalidData(
            "axis tick count must be > 0".to_owned(),
        ));
    }
    validate_non_negative(config.axis.tick_size_px, "axis tick size")?;
    validate_non_negative(config.axis.tick_padding_px, "axis tick padding")?;
    validate_positive(config.axis.tick_font_size_px, "axis tick font size")?;
    validate_positive(config.axis.title_font_size_px, "axis title font size")?;
    config.axis.color.validate()?;

    validate_tooltip_timing(config.tooltip.timing)?;
    validate_positive(config.tooltip.font_size_px, "tooltip font size")?;
    validate_colors(&[config.tooltip.background, config.tooltip.text_color])?;

    let (width, height) = config.reset_control.size;
    validate_positive(width, "reset control width")?;
    validate_positive(height, "reset control height")?;
    validate_non_negative(config.reset_control.gap_px, "reset control gap")?;
    validate_non_negative(
        config.reset_control.duration_seconds,
        "reset duration",
    )?;

    validate_positive(config.legend.title_font_size_px, "legend title font size")?;
    validate_positive(config.legend.label_font_size_px, "legend label font size")?;
    validate_colors(&[config.legend.text_color, config.legend.mark_stroke])?;
    for entry in &config.legend.entries {
        validate_non_negative(entry.size_value, "legend entry size value")?;
        if !entry.color_value.is_finite() {
            return Err(ScatterError::InvalidData(
                "legend entry color value must be finite".to_owned(),
            ));
        }
    }

    Ok(())
}

fn validate_tooltip_timing(timing: TooltipTiming) -> ScatterResult<()> {
    validate_non_negative(timing.fade_in_seconds, "tooltip fade-in duration")?;
    validate_non_negative(timing.fade_out_seconds, "tooltip fade-out duration")?;
    validate_unit_interval(timing.visible_opacity, "tooltip opacity")?;
    if !timing.pointer_offset.0.is_finite() || !timing.pointer_offset.1.is_finite() {
        return Err(ScatterError::InvalidData(
            "tooltip pointer offset must be finite".to_owned(),
        ));
    }
    Ok(())
}

fn validate_colors(colors: &[Color]) -> ScatterResult<()> {
    for color in colors {
        color.validate()?;
    }
    Ok(())
}

fn validate_positive(value: f64, name: &str) -> ScatterResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ScatterError::InvalidData(format!(
            "{name} must be finite and > 0"
        )));
    }
    Ok(())
}

fn validate_non_negative(value: f64, name: &str) -> ScatterResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ScatterError::InvalidData(format!(
            "{name} must be finite and >= 0"
        )));
    }
    Ok(())
}

fn validate_unit_interval(value: f64, name: &str) -> ScatterResult<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ScatterError::InvalidData(format!(
            "{name} must be finite and in [0, 1]"
        )));
    }
    Ok(())
}
