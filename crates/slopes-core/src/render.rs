//! Coordinate mapping and draw-command generation.
//!
//! The origin sits at the canvas center and one algebraic unit spans
//! `unit_pixels` pixels. The line is sampled once per pixel column and
//! emitted as a polyline; drawing surfaces decide colors from each
//! command's [`Stroke`] role.

use serde::{Deserialize, Serialize};

use crate::error::CanvasError;
use crate::model::LinearProblem;

/// Half-width of the x-axis label range, in units.
const X_LABEL_SPAN: i32 = 8;
/// Half-height of the y-axis label range, in units.
const Y_LABEL_SPAN: i32 = 4;
const LABEL_STEP: usize = 2;
/// Gap between the x-axis and its labels.
const X_LABEL_OFFSET: f64 = 4.0;
/// Gap between the y-axis and its labels.
const Y_LABEL_OFFSET: f64 = 6.0;

/// Pixel dimensions of the drawing surface.
///
/// All three dimensions are positive; [`Canvas::new`] and deserialization
/// both reject zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCanvas")]
pub struct Canvas {
    width: u32,
    height: u32,
    unit_pixels: u32,
}

#[derive(Deserialize)]
struct RawCanvas {
    #[serde(default = "default_width")]
    width: u32,
    #[serde(default = "default_height")]
    height: u32,
    #[serde(default = "default_unit_pixels")]
    unit_pixels: u32,
}

impl TryFrom<RawCanvas> for Canvas {
    type Error = CanvasError;

    fn try_from(raw: RawCanvas) -> Result<Self, Self::Error> {
        Canvas::new(raw.width, raw.height, raw.unit_pixels)
    }
}

fn default_width() -> u32 {
    800
}
fn default_height() -> u32 {
    500
}
fn default_unit_pixels() -> u32 {
    20
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            unit_pixels: default_unit_pixels(),
        }
    }
}

impl Canvas {
    pub fn new(width: u32, height: u32, unit_pixels: u32) -> Result<Self, CanvasError> {
        if width == 0 {
            return Err(CanvasError::NonPositive("width"));
        }
        if height == 0 {
            return Err(CanvasError::NonPositive("height"));
        }
        if unit_pixels == 0 {
            return Err(CanvasError::NonPositive("unit_pixels"));
        }
        Ok(Self {
            width,
            height,
            unit_pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixels per algebraic unit, also the grid spacing.
    pub fn unit_pixels(&self) -> u32 {
        self.unit_pixels
    }

    fn center(&self) -> PixelPoint {
        PixelPoint {
            x: self.width as f64 / 2.0,
            y: self.height as f64 / 2.0,
        }
    }

    fn unit(&self) -> f64 {
        self.unit_pixels as f64
    }
}

/// A position on the canvas in pixels; y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

/// Map an algebraic point to canvas pixels.
pub fn map_to_pixel(x: f64, y: f64, canvas: &Canvas) -> PixelPoint {
    let center = canvas.center();
    PixelPoint {
        x: center.x + x * canvas.unit(),
        y: center.y - y * canvas.unit(),
    }
}

/// The algebraic x shown at pixel column `px`.
pub fn pixel_to_x(px: f64, canvas: &Canvas) -> f64 {
    (px - canvas.center().x) / canvas.unit()
}

/// Sample `y = slope*x + intercept` at every pixel column `0..=width`.
pub fn sample_line(slope: i32, intercept: i32, canvas: &Canvas) -> Vec<PixelPoint> {
    let slope = slope as f64;
    let intercept = intercept as f64;
    (0..=canvas.width)
        .map(|px| {
            let x = pixel_to_x(px as f64, canvas);
            let y = slope * x + intercept;
            PixelPoint {
                x: px as f64,
                y: map_to_pixel(x, y, canvas).y,
            }
        })
        .collect()
}

/// Visual role of a stroke, mapped to a concrete style by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stroke {
    Grid,
    Axis,
    Line,
}

/// Which point of a label's box sits on its anchor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    TopCenter,
    MiddleRight,
}

/// One instruction for a drawing surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Fill the whole canvas with the background.
    Clear,
    Segment {
        from: PixelPoint,
        to: PixelPoint,
        stroke: Stroke,
    },
    Label {
        text: String,
        at: PixelPoint,
        anchor: Anchor,
    },
    Polyline {
        points: Vec<PixelPoint>,
        stroke: Stroke,
    },
}

/// The full picture for one problem, in paint order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plot {
    pub canvas: Canvas,
    pub commands: Vec<DrawCommand>,
}

impl Plot {
    pub fn polyline(&self) -> Option<&[PixelPoint]> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Polyline { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }
}

/// Build the draw commands for `problem` on `canvas`.
pub fn plot(problem: &LinearProblem, canvas: &Canvas) -> Plot {
    plot_line(problem.slope(), problem.intercept(), canvas)
}

/// Build the draw commands for an arbitrary line.
pub fn plot_line(slope: i32, intercept: i32, canvas: &Canvas) -> Plot {
    let mut commands = vec![DrawCommand::Clear];
    let width = canvas.width as f64;
    let height = canvas.height as f64;
    let step = canvas.unit_pixels as usize;

    for i in (0..=canvas.width).step_by(step) {
        let x = i as f64;
        commands.push(DrawCommand::Segment {
            from: PixelPoint { x, y: 0.0 },
            to: PixelPoint { x, y: height },
            stroke: Stroke::Grid,
        });
    }
    for j in (0..=canvas.height).step_by(step) {
        let y = j as f64;
        commands.push(DrawCommand::Segment {
            from: PixelPoint { x: 0.0, y },
            to: PixelPoint { x: width, y },
            stroke: Stroke::Grid,
        });
    }

    let center = canvas.center();
    commands.push(DrawCommand::Segment {
        from: PixelPoint { x: 0.0, y: center.y },
        to: PixelPoint { x: width, y: center.y },
        stroke: Stroke::Axis,
    });
    commands.push(DrawCommand::Segment {
        from: PixelPoint { x: center.x, y: 0.0 },
        to: PixelPoint { x: center.x, y: height },
        stroke: Stroke::Axis,
    });

    for i in (-X_LABEL_SPAN..=X_LABEL_SPAN).step_by(LABEL_STEP) {
        if i == 0 {
            continue;
        }
        commands.push(DrawCommand::Label {
            text: i.to_string(),
            at: PixelPoint {
                x: map_to_pixel(i as f64, 0.0, canvas).x,
                y: center.y + X_LABEL_OFFSET,
            },
            anchor: Anchor::TopCenter,
        });
    }
    for j in (-Y_LABEL_SPAN..=Y_LABEL_SPAN).step_by(LABEL_STEP) {
        if j == 0 {
            continue;
        }
        commands.push(DrawCommand::Label {
            text: j.to_string(),
            at: PixelPoint {
                x: center.x - Y_LABEL_OFFSET,
                y: map_to_pixel(0.0, j as f64, canvas).y,
            },
            anchor: Anchor::MiddleRight,
        });
    }

    commands.push(DrawCommand::Polyline {
        points: sample_line(slope, intercept, canvas),
        stroke: Stroke::Line,
    });

    Plot {
        canvas: *canvas,
        commands,
    }
}
