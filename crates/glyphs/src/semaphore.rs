use std::f32::consts::PI;

use encoderize_core::{Canvas, EncodeError, Encoder, Palette, Point, Shape, Stroke};
use serde::Deserialize;

/// Flag angles in degrees, counter-clockwise from the right-hand horizontal.
static SEMAPHORE: [(u16, u16); 26] = [
    (0, 45),    // A
    (0, 90),    // B
    (0, 135),   // C
    (0, 180),   // D
    (0, 225),   // E
    (0, 270),   // F
    (0, 315),   // G
    (45, 90),   // H
    (45, 135),  // I
    (90, 315),  // J
    (45, 180),  // K
    (45, 225),  // L
    (45, 270),  // M
    (45, 315),  // N
    (90, 135),  // O
    (90, 180),  // P
    (90, 225),  // Q
    (90, 270),  // R
    (90, 315),  // S
    (135, 180), // T
    (135, 225), // U
    (135, 270), // V
    (135, 315), // W
    (180, 225), // X
    (180, 270), // Y
    (180, 315), // Z
];

/// Half-angle of each flag wedge, in degrees.
const FLAG_SPREAD: f32 = 15.0;

/// Look up the two flag angles for a letter (case-insensitive).
pub fn semaphore_angles(character: char) -> Option<(u16, u16)> {
    match character.to_ascii_uppercase() {
        c @ 'A'..='Z' => Some(SEMAPHORE[(c as u8 - b'A') as usize]),
        _ => None,
    }
}

/// One ringed flag-bearer per character with two triangular flags.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SemaphoreFlags {
    pub icon_size: f32,
    pub spacing: f32,
    pub ring_width: f32,
}

impl Default for SemaphoreFlags {
    fn default() -> Self {
        Self {
            icon_size: 80.0,
            spacing: 20.0,
            ring_width: 4.0,
        }
    }
}

/// Offset `from` by `length` in the direction of `degrees` (y grows downward).
fn polar(from: Point, degrees: f32, length: f32) -> Point {
    let radians = degrees * PI / 180.0;
    Point::new(
        from.x + radians.cos() * length,
        from.y - radians.sin() * length,
    )
}

impl Encoder for SemaphoreFlags {
    fn encode(&self, text: &str, palette: &Palette) -> Result<Canvas, EncodeError> {
        let slot = self.icon_size + self.spacing;
        let radius = self.icon_size / 2.0;

        let mut canvas = Canvas::new(text.chars().count() as f32 * slot, self.icon_size);

        for (i, character) in text.chars().enumerate() {
            let center = Point::new(i as f32 * slot + radius, radius);

            canvas.push(Shape::Circle {
                center,
                radius,
                fill: palette.background,
                stroke: Some(Stroke {
                    color: palette.foreground,
                    width: self.ring_width,
                }),
            });

            let Some((first, second)) = semaphore_angles(character) else {
                continue;
            };

            for angle in [first, second] {
                let angle = angle as f32;
                let tip = polar(center, angle, radius);

                for spread in [FLAG_SPREAD, -FLAG_SPREAD] {
                    let corner = polar(tip, angle + spread, self.icon_size / 6.0);
                    canvas.push(Shape::Polygon {
                        points: vec![center, corner, tip],
                        fill: palette.foreground,
                    });
                }
            }
        }

        Ok(canvas)
    }
}
