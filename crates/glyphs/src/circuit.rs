use encoderize_core::{Canvas, EncodeError, Encoder, Palette, Point, Shape, Stroke};
use serde::Deserialize;

/// A 5x7 letter bitmap. Each row keeps its cells in the low five bits,
/// leftmost column in the highest bit.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub rows: [u8; 7],
}

impl Bitmap {
    pub const COLS: usize = 5;
    pub const ROWS: usize = 7;

    /// Is the cell at `(col, row)` active? Out-of-range cells are not.
    pub fn is_active(&self, col: usize, row: usize) -> bool {
        col < Self::COLS && row < Self::ROWS && (self.rows[row] >> (Self::COLS - 1 - col)) & 1 == 1
    }

    /// Active cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..Self::ROWS)
            .flat_map(|row| (0..Self::COLS).map(move |col| (col, row)))
            .filter(|&(col, row)| self.is_active(col, row))
    }
}

include!(concat!(env!("OUT_DIR"), "/pattern5x7.rs"));

/// Look up the 5x7 bitmap for a letter or digit (case-insensitive).
pub fn pattern(character: char) -> Option<&'static Bitmap> {
    let upper = character.to_ascii_uppercase() as usize;
    PATTERN_5X7.get(upper)?.as_ref()
}

/// Letters drawn as circuit-board pads joined by traces between
/// horizontally or vertically adjacent pads.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CircuitTrace {
    pub pad_radius: f32,
    pub pad_spacing: f32,
    pub trace_width: f32,
}

impl Default for CircuitTrace {
    fn default() -> Self {
        Self {
            pad_radius: 8.0,
            pad_spacing: 30.0,
            trace_width: 4.0,
        }
    }
}

impl Encoder for CircuitTrace {
    fn encode(&self, text: &str, palette: &Palette) -> Result<Canvas, EncodeError> {
        let letter_width = Bitmap::COLS as f32 * self.pad_spacing;
        let letters = text.chars().count() as f32;

        let mut canvas = Canvas::new(
            letter_width * letters + self.pad_spacing * (letters - 1.0),
            Bitmap::ROWS as f32 * self.pad_spacing,
        );

        let stroke = Stroke {
            color: palette.foreground,
            width: self.trace_width,
        };

        // Unmapped characters keep their slot, so the layout is stable per index.
        for (i, character) in text.chars().enumerate() {
            let Some(bitmap) = pattern(character) else {
                continue;
            };

            let x_offset = i as f32 * (letter_width + self.pad_spacing);
            let at = |col: usize, row: usize| {
                Point::new(
                    x_offset + col as f32 * self.pad_spacing,
                    row as f32 * self.pad_spacing,
                )
            };

            for (col, row) in bitmap.cells() {
                canvas.push(Shape::Circle {
                    center: at(col, row),
                    radius: self.pad_radius,
                    fill: palette.foreground,
                    stroke: None,
                });
            }

            for (col, row) in bitmap.cells() {
                if bitmap.is_active(col + 1, row) {
                    canvas.push(Shape::Line {
                        start: at(col, row),
                        end: at(col + 1, row),
                        stroke,
                    });
                }
                if bitmap.is_active(col, row + 1) {
                    canvas.push(Shape::Line {
                        start: at(col, row),
                        end: at(col, row + 1),
                        stroke,
                    });
                }
            }
        }

        Ok(canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pads(canvas: &Canvas) -> usize {
        canvas.count(|s| matches!(s, Shape::Circle { .. }))
    }

    fn traces(canvas: &Canvas) -> usize {
        canvas.count(|s| matches!(s, Shape::Line { .. }))
    }

    #[test]
    fn generated_table_covers_letters_and_digits() {
        for c in ('A'..='Z').chain('0'..='9') {
            assert!(pattern(c).is_some(), "missing pattern for {c}");
        }
        assert_eq!(pattern('a'), pattern('A'));
        assert!(pattern('!').is_none());
        assert!(pattern('é').is_none());
    }

    #[test]
    fn letter_l_pads_and_traces() {
        // L: six pads down the left column, five along the bottom row.
        let l = pattern('L').unwrap();
        assert_eq!(l.cells().count(), 11);

        let canvas = CircuitTrace::default()
            .encode("L", &Palette::light())
            .unwrap();
        assert_eq!(pads(&canvas), 11);
        // Six vertical links and four horizontal ones.
        assert_eq!(traces(&canvas), 10);
    }

    #[test]
    fn traces_only_join_adjacent_pads() {
        // Links along the bar and down the stem, none wrapping across rows.
        let canvas = CircuitTrace::default()
            .encode("T", &Palette::light())
            .unwrap();
        assert_eq!(pads(&canvas), 11);
        assert_eq!(traces(&canvas), 4 + 6);
    }

    #[test]
    fn unmapped_characters_keep_their_slot() {
        let trace = CircuitTrace::default();
        let canvas = trace.encode("?I", &Palette::light()).unwrap();

        let min_x = canvas
            .shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Circle { center, .. } => Some(center.x),
                _ => None,
            })
            .fold(f32::INFINITY, f32::min);

        // Slot 1 starts at five pads plus a gap; I's first pad is in column 1.
        assert_eq!(min_x, 180.0 + 30.0);
        assert_eq!(canvas.width, 2.0 * 150.0 + 30.0);
        assert_eq!(canvas.height, 210.0);
    }

    #[test]
    fn empty_text_has_no_width() {
        let canvas = CircuitTrace::default().encode("", &Palette::light()).unwrap();
        assert_eq!(canvas.width, 0.0);
        assert!(canvas.shapes.is_empty());
    }
}
