//! SVG drawing surface.
//!
//! Maps each draw command's role to the fixed palette: white background,
//! blue grid, dark blue axes, black labels and a red line.

use std::path::Path;

use anyhow::{Context, Result};

use slopes_core::render::{Anchor, DrawCommand, PixelPoint, Plot, Stroke};

const BACKGROUND: &str = "#fff";
const LABEL_COLOR: &str = "#111";
const LABEL_FONT: &str = "13px Arial";

fn stroke_style(stroke: Stroke) -> (&'static str, u32) {
    match stroke {
        Stroke::Grid => ("#3a86ff", 1),
        Stroke::Axis => ("#003366", 2),
        Stroke::Line => ("#e63946", 3),
    }
}

/// Escape text for safe insertion into SVG or HTML.
pub(crate) fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Render a plot as a standalone SVG document.
pub fn generate_svg(plot: &Plot) -> String {
    let (w, h) = (plot.canvas.width(), plot.canvas.height());
    let mut svg = format!(
        "<svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" xmlns=\"http://www.w3.org/2000/svg\">\n"
    );
    // Off-canvas samples stay visible only inside the viewport.
    svg.push_str(&format!(
        "  <clipPath id=\"canvas\"><rect width=\"{w}\" height=\"{h}\"/></clipPath>\n"
    ));
    svg.push_str("  <g clip-path=\"url(#canvas)\">\n");

    for command in &plot.commands {
        match command {
            DrawCommand::Clear => {
                svg.push_str(&format!(
                    "    <rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\" fill=\"{BACKGROUND}\"/>\n"
                ));
            }
            DrawCommand::Segment { from, to, stroke } => {
                let (color, width) = stroke_style(*stroke);
                svg.push_str(&format!(
                    "    <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{color}\" stroke-width=\"{width}\"/>\n",
                    num(from.x),
                    num(from.y),
                    num(to.x),
                    num(to.y),
                ));
            }
            DrawCommand::Label { text, at, anchor } => {
                let (text_anchor, baseline) = match anchor {
                    Anchor::TopCenter => ("middle", "hanging"),
                    Anchor::MiddleRight => ("end", "middle"),
                };
                svg.push_str(&format!(
                    "    <text x=\"{}\" y=\"{}\" fill=\"{LABEL_COLOR}\" style=\"font: {LABEL_FONT}\" text-anchor=\"{text_anchor}\" dominant-baseline=\"{baseline}\">{}</text>\n",
                    num(at.x),
                    num(at.y),
                    escape(text)
                ));
            }
            DrawCommand::Polyline { points, stroke } => {
                let (color, width) = stroke_style(*stroke);
                svg.push_str(&format!(
                    "    <polyline points=\"{}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"{width}\"/>\n",
                    points_attr(points)
                ));
            }
        }
    }

    svg.push_str("  </g>\n</svg>\n");
    svg
}

/// Write a plot to `path` as SVG.
pub fn write_svg(plot: &Plot, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, generate_svg(plot))
        .with_context(|| format!("failed to write SVG to {}", path.display()))?;
    Ok(())
}

fn points_attr(points: &[PixelPoint]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", num(p.x), num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a coordinate without trailing zeros.
fn num(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        let s = format!("{v:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
