//! SVG serialization of a [Canvas].

use std::path::Path;

use svg::Document;
use svg::node::element::{Circle, Image, Line, Polygon, Polyline, Rectangle, Text};

use crate::{Canvas, Point, Shape, Stroke};

/// Format points as an SVG `points` attribute.
fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn add_shape(document: Document, shape: &Shape) -> Document {
    match shape {
        Shape::Rect {
            origin,
            width,
            height,
            fill,
        } => document.add(
            Rectangle::new()
                .set("x", origin.x)
                .set("y", origin.y)
                .set("width", *width)
                .set("height", *height)
                .set("fill", fill.to_string()),
        ),
        Shape::Circle {
            center,
            radius,
            fill,
            stroke,
        } => {
            let circle = Circle::new()
                .set("cx", center.x)
                .set("cy", center.y)
                .set("r", *radius)
                .set("fill", fill.to_string());
            match stroke {
                Some(Stroke { color, width }) => document.add(
                    circle
                        .set("stroke", color.to_string())
                        .set("stroke-width", *width),
                ),
                None => document.add(circle),
            }
        }
        Shape::Line { start, end, stroke } => document.add(
            Line::new()
                .set("x1", start.x)
                .set("y1", start.y)
                .set("x2", end.x)
                .set("y2", end.y)
                .set("stroke", stroke.color.to_string())
                .set("stroke-width", stroke.width),
        ),
        Shape::Polygon { points, fill } => document.add(
            Polygon::new()
                .set("points", points_attr(points))
                .set("fill", fill.to_string()),
        ),
        Shape::Polyline { points, stroke } => document.add(
            Polyline::new()
                .set("points", points_attr(points))
                .set("fill", "none")
                .set("stroke", stroke.color.to_string())
                .set("stroke-width", stroke.width),
        ),
        Shape::Text {
            origin,
            content,
            font_size,
            font_family,
            fill,
        } => document.add(
            Text::new()
                .add(svg::node::Text::new(content.as_str()))
                .set("x", origin.x)
                .set("y", origin.y)
                .set("font-size", *font_size)
                .set("font-family", font_family.as_str())
                .set("fill", fill.to_string()),
        ),
        Shape::Image {
            origin,
            width,
            height,
            href,
        } => document.add(
            Image::new()
                .set("x", origin.x)
                .set("y", origin.y)
                .set("width", *width)
                .set("height", *height)
                .set("href", href.as_str()),
        ),
    }
}

/// Convert a canvas into an SVG document sized to the canvas.
pub fn to_document(canvas: &Canvas) -> Document {
    let document = Document::new()
        .set("width", canvas.width)
        .set("height", canvas.height)
        .set("viewBox", (0, 0, canvas.width, canvas.height));

    canvas.shapes.iter().fold(document, add_shape)
}

/// Serialize a canvas and write it to `path`.
pub fn save(path: impl AsRef<Path>, canvas: &Canvas) -> std::io::Result<()> {
    svg::save(path, &to_document(canvas))
}
