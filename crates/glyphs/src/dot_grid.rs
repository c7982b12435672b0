use encoderize_core::{Canvas, EncodeError, Encoder, Palette, Point, Shape};
use serde::Deserialize;

use crate::alphabet_position;

/// A regular grid of small dots where each letter of the text enlarges and
/// recolors one cell.
///
/// The cell for a letter is its alphabet position (A = 0) modulo the number
/// of cells, read row-major. Repeated letters land on the same cell; each
/// lit cell is drawn once, in the order it was last hit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DotGrid {
    pub rows: usize,
    pub cols: usize,
    pub spacing: f32,
    pub dot_radius: f32,
    pub highlight_radius: f32,
}

impl Default for DotGrid {
    fn default() -> Self {
        Self {
            rows: 6,
            cols: 6,
            spacing: 40.0,
            dot_radius: 6.0,
            highlight_radius: 12.0,
        }
    }
}

impl DotGrid {
    /// Largest number of rows or columns a grid may have.
    pub const MAX_SIDE: usize = 256;

    /// Number of cells, saturating instead of overflowing.
    pub fn cells(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    fn center(&self, index: usize) -> Point {
        let (row, col) = (index / self.cols, index % self.cols);
        Point::new(
            self.highlight_radius + col as f32 * self.spacing,
            self.highlight_radius + row as f32 * self.spacing,
        )
    }

    /// Cells lit by the text, one entry per cell, ordered by last write.
    pub fn highlighted_cells(&self, text: &str) -> Vec<usize> {
        let cells = self.cells();
        let mut lit: Vec<usize> = Vec::new();

        if cells == 0 {
            return lit;
        }

        for position in text.chars().filter_map(alphabet_position) {
            let index = (position - 1) as usize % cells;
            lit.retain(|&cell| cell != index);
            lit.push(index);
        }

        lit
    }
}

impl Encoder for DotGrid {
    fn encode(&self, text: &str, palette: &Palette) -> Result<Canvas, EncodeError> {
        let span = |count: usize| {
            count.saturating_sub(1) as f32 * self.spacing + 2.0 * self.highlight_radius
        };

        let mut canvas = Canvas::new(span(self.cols), span(self.rows));

        for index in 0..self.cells() {
            canvas.push(Shape::Circle {
                center: self.center(index),
                radius: self.dot_radius,
                fill: palette.foreground,
                stroke: None,
            });
        }

        for index in self.highlighted_cells(text) {
            canvas.push(Shape::Circle {
                center: self.center(index),
                radius: self.highlight_radius,
                fill: palette.highlight,
                stroke: None,
            });
        }

        Ok(canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlights(canvas: &Canvas) -> Vec<Point> {
        canvas
            .shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Circle { center, radius, .. } if *radius == 12.0 => Some(*center),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn base_grid_is_always_drawn() {
        let canvas = DotGrid::default().encode("", &Palette::light()).unwrap();
        assert_eq!(canvas.shapes.len(), 36);
        assert_eq!(canvas.width, 5.0 * 40.0 + 24.0);
        assert_eq!(canvas.height, 5.0 * 40.0 + 24.0);
    }

    #[test]
    fn repeated_letter_highlights_once() {
        let grid = DotGrid::default();
        let single = grid.encode("A", &Palette::light()).unwrap();
        let double = grid.encode("AA", &Palette::light()).unwrap();

        assert_eq!(highlights(&double), vec![Point::new(12.0, 12.0)]);
        assert_eq!(single, double);
    }

    #[test]
    fn letters_map_row_major() {
        let grid = DotGrid::default();
        // h = 7 -> row 1, col 1; non-letters are ignored
        assert_eq!(grid.highlighted_cells("h!"), vec![7]);

        let canvas = grid.encode("h", &Palette::light()).unwrap();
        assert_eq!(highlights(&canvas), vec![Point::new(52.0, 52.0)]);
    }

    #[test]
    fn indices_wrap_on_small_grids() {
        let grid = DotGrid {
            rows: 2,
            cols: 2,
            ..DotGrid::default()
        };
        // E = 4 wraps onto A's cell and moves it to the end.
        assert_eq!(grid.highlighted_cells("AbE"), vec![1, 0]);
    }

    #[test]
    fn cell_count_does_not_overflow() {
        let grid = DotGrid {
            rows: usize::MAX,
            cols: 2,
            ..DotGrid::default()
        };
        assert_eq!(grid.cells(), usize::MAX);
        assert_eq!(grid.highlighted_cells("b"), vec![1]);
    }

    #[test]
    fn highlights_use_highlight_color() {
        let palette = Palette::dark();
        let canvas = DotGrid::default().encode("z", &palette).unwrap();
        match canvas.shapes.last() {
            Some(Shape::Circle { fill, .. }) => assert_eq!(*fill, palette.highlight),
            other => panic!("expected a highlight circle, got {other:?}"),
        }
    }
}
