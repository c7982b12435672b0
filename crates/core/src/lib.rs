#![no_std]

//! `encoderize-core` provides the drawing primitives shared by the
//! `encoderize` encoders.
//!
//! Encoders never touch a file format directly. They push [Shape]s onto a
//! [Canvas], and the `encoderize` crate serializes the canvas to SVG.

use alloc::string::String;
use alloc::vec::Vec;
use thiserror::Error;

extern crate alloc;

mod color;

pub use color::{Color, ColorError, Palette, Theme};

/// A point in canvas pixel coordinates, origin top-left.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Outline paint for shapes that are stroked rather than (or as well as) filled.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

/// A single drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Axis-aligned filled rectangle with its top-left corner at `origin`.
    Rect {
        origin: Point,
        width: f32,
        height: f32,
        fill: Color,
    },
    Circle {
        center: Point,
        radius: f32,
        fill: Color,
        stroke: Option<Stroke>,
    },
    Line {
        start: Point,
        end: Point,
        stroke: Stroke,
    },
    /// Closed, filled polygon.
    Polygon { points: Vec<Point>, fill: Color },
    /// Open, unfilled path through `points`.
    Polyline { points: Vec<Point>, stroke: Stroke },
    /// Single run of text; `origin` is the left end of the baseline.
    Text {
        origin: Point,
        content: String,
        font_size: f32,
        font_family: String,
        fill: Color,
    },
    /// Embedded raster, referenced by URI (usually a `data:` URI).
    Image {
        origin: Point,
        width: f32,
        height: f32,
        href: String,
    },
}

/// An ordered list of shapes with overall pixel dimensions.
///
/// Shapes are painted in the order they were pushed, so later shapes cover
/// earlier ones.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
    pub shapes: Vec<Shape>,
}

impl Canvas {
    /// Create an empty canvas. Negative dimensions are clamped to zero.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            shapes: Vec::new(),
        }
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Number of shapes matching the given predicate.
    pub fn count(&self, predicate: impl Fn(&Shape) -> bool) -> usize {
        self.shapes.iter().filter(|shape| predicate(shape)).count()
    }
}

/// Error raised when an encoder cannot produce a drawing.
///
/// Table lookups never fail; only encoders that delegate to an external
/// symbology or raster codec return these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The input cannot be represented in the target symbology.
    #[error("cannot encode input as a symbol: {0}")]
    Symbol(String),
    /// Rasterizing or compressing the symbol failed.
    #[error("failed to rasterize symbol: {0}")]
    Raster(String),
}

/// Allows encoding text into a drawing.
///
/// Implementors carry their own geometry and paint with the colors of the
/// given palette.
pub trait Encoder {
    /// Encode the given text string into a canvas.
    fn encode(&self, text: &str, palette: &Palette) -> Result<Canvas, EncodeError>;
}

/// Expand text into its bits, most significant first, eight per UTF-8 byte.
pub fn bits(text: &str) -> impl Iterator<Item = bool> + '_ {
    text.bytes()
        .flat_map(|byte| (0..8).rev().map(move |shift| (byte >> shift) & 1 == 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn bits_are_msb_first() {
        let expanded: Vec<bool> = bits("A").collect();
        // 'A' = 0b0100_0001
        assert_eq!(
            expanded,
            vec![false, true, false, false, false, false, false, true]
        );
    }

    #[test]
    fn bits_cover_every_utf8_byte() {
        assert_eq!(bits("é").count(), 16);
        assert_eq!(bits("").count(), 0);
    }

    #[test]
    fn canvas_clamps_negative_size() {
        let canvas = Canvas::new(-30.0, 10.0);
        assert_eq!(canvas.width, 0.0);
        assert_eq!(canvas.height, 10.0);
    }
}
