use std::fmt::{self, Write as _};
use std::fs;
use std::path::Path;

use crate::error::{ScatterError, ScatterResult};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

const MARK_CLIP_ID: &str = "plot-clip";

/// Renderer producing a standalone SVG document per frame.
#[derive(Debug, Clone, Default)]
pub struct SvgRenderer {
    background: Option<Color>,
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the background color; `None` leaves the document transparent.
    #[must_use]
    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    /// SVG markup of the last rendered frame.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn write_to_file(&self, path: impl AsRef<Path>) -> ScatterResult<()> {
        fs::write(path, self.document.as_bytes())?;
        Ok(())
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ScatterResult<()> {
        frame.validate()?;
        if let Some(background) = self.background {
            background.validate()?;
        }

        let mut svg = String::with_capacity(4096);
        write_document(&mut svg, frame, self.background)
            .map_err(|err| ScatterError::InvalidData(format!("svg formatting failed: {err}")))?;
        self.document = svg;
        Ok(())
    }
}

fn write_document(svg: &mut String, frame: &RenderFrame, background: Option<Color>) -> fmt::Result {
    let width = frame.viewport.width;
    let height = frame.viewport.height;
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )?;

    if let Some(background) = background {
        writeln!(
            svg,
            r#"  <rect width="100%" height="100%" fill="{}"{}/>"#,
            background.to_hex(),
            opacity_attr("fill-opacity", background.alpha)
        )?;
    }

    for line in &frame.lines {
        writeln!(svg, "  {}", line_to_svg(line))?;
    }

    if let Some(clip) = frame.circle_clip {
        writeln!(
            svg,
            r#"  <defs><clipPath id="{MARK_CLIP_ID}"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath></defs>"#,
            num(clip.x),
            num(clip.y),
            num(clip.width),
            num(clip.height)
        )?;
        writeln!(svg, r#"  <g clip-path="url(#{MARK_CLIP_ID})">"#)?;
    } else {
        svg.push_str("  <g>\n");
    }
    for circle in &frame.circles {
        writeln!(svg, "    {}", circle_to_svg(circle))?;
    }
    svg.push_str("  </g>\n");

    for (rects, texts) in [
        (&frame.rects, &frame.texts),
        (&frame.overlay_rects, &frame.overlay_texts),
    ] {
        for rect in rects {
            writeln!(svg, "  {}", rect_to_svg(rect))?;
        }
        for text in texts {
            writeln!(svg, "  {}", text_to_svg(text))?;
        }
    }

    svg.push_str("</svg>\n");
    Ok(())
}

fn line_to_svg(line: &LinePrimitive) -> String {
    format!(
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"{}/>"#,
        num(line.x1),
        num(line.y1),
        num(line.x2),
        num(line.y2),
        line.color.to_hex(),
        num(line.stroke_width),
        opacity_attr("stroke-opacity", line.color.alpha)
    )
}

fn circle_to_svg(circle: &CirclePrimitive) -> String {
    let stroke_attr = circle
        .stroke_color
        .filter(|_| circle.stroke_width > 0.0)
        .map(|stroke| {
            format!(
                r#" stroke="{}" stroke-width="{}"{}"#,
                stroke.to_hex(),
                num(circle.stroke_width),
                opacity_attr("stroke-opacity", stroke.alpha)
            )
        })
        .unwrap_or_default();
    format!(
        r#"<circle cx="{}" cy="{}" r="{}" fill="{}"{}{stroke_attr}/>"#,
        num(circle.cx),
        num(circle.cy),
        num(circle.radius),
        circle.fill_color.to_hex(),
        opacity_attr("fill-opacity", circle.fill_color.alpha)
    )
}

fn rect_to_svg(rect: &RectPrimitive) -> String {
    let stroke_attr = if rect.border_width > 0.0 {
        format!(
            r#" stroke="{}" stroke-width="{}"{}"#,
            rect.border_color.to_hex(),
            num(rect.border_width),
            opacity_attr("stroke-opacity", rect.border_color.alpha)
        )
    } else {
        String::new()
    };
    let corner_attr = if rect.corner_radius > 0.0 {
        format!(r#" rx="{}""#, num(rect.corner_radius))
    } else {
        String::new()
    };
    format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}"{corner_attr} fill="{}"{}{stroke_attr}/>"#,
        num(rect.x),
        num(rect.y),
        num(rect.width),
        num(rect.height),
        rect.fill_color.to_hex(),
        opacity_attr("fill-opacity", rect.fill_color.alpha)
    )
}

fn text_to_svg(text: &TextPrimitive) -> String {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    let transform_attr = if text.rotation_deg != 0.0 {
        format!(
            r#" transform="rotate({} {} {})""#,
            num(text.rotation_deg),
            num(text.x),
            num(text.y)
        )
    } else {
        String::new()
    };
    format!(
        r#"<text x="{}" y="{}" font-family="sans-serif" font-size="{}" text-anchor="{anchor}" fill="{}"{}{transform_attr}>{}</text>"#,
        num(text.x),
        num(text.y),
        num(text.font_size_px),
        text.color.to_hex(),
        opacity_attr("fill-opacity", text.color.alpha),
        escape_text(&text.text)
    )
}

fn opacity_attr(name: &str, alpha: f64) -> String {
    if alpha >= 1.0 {
        String::new()
    } else {
        format!(r#" {name}="{}""#, num(alpha))
    }
}

/// Compact decimal rendering: three fractional digits, trailing zeros trimmed.
fn num(value: f64) -> String {
    let text = format!("{value:.3}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_owned(),
        other => other.to_owned(),
    }
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_trimmed() {
        assert_eq!(num(84.615_384_6), "84.615");
        assert_eq!(num(100.0), "100");
        assert_eq!(num(-0.0001), "0");
        assert_eq!(num(0.6), "0.6");
    }

    #[test]
    fn text_content_is_escaped() {
        assert_eq!(escape_text("Trinidad & Tobago <1>"), "Trinidad &amp; Tobago &lt;1&gt;");
    }
}
