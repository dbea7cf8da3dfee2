//! 5x5 addressable LED matrix composition
//!
//! Turns a glyph and a color into the 25 pixels in the order they are
//! shifted out to the strip. The strip starts at the last glyph cell and
//! runs as a serpentine, so odd rows are wired right to left.

use crate::color::{BLACK, Rgb};
use crate::math8::percent8;

/// Matrix width and height
pub const MATRIX_SIZE: usize = 5;

/// Number of LEDs in the matrix
pub const MATRIX_LEDS: usize = MATRIX_SIZE * MATRIX_SIZE;

/// Pixels in transmission order
pub type MatrixFrame = [Rgb; MATRIX_LEDS];

/// Dark frame
pub const DARK_FRAME: MatrixFrame = [BLACK; MATRIX_LEDS];

/// 5x5 mask of lit cells, row-major, top-left first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph([bool; MATRIX_LEDS]);

impl Glyph {
    /// Every cell lit
    pub const FULL: Self = Self([true; MATRIX_LEDS]);
    /// No cell lit
    pub const EMPTY: Self = Self([false; MATRIX_LEDS]);

    /// Digits 0 to 9, indexed by value. Zero lights the whole matrix.
    pub const DIGITS: [Self; 10] = [
        Self::from_rows([
            [1, 1, 1, 1, 1],
            [1, 1, 1, 1, 1],
            [1, 1, 1, 1, 1],
            [1, 1, 1, 1, 1],
            [1, 1, 1, 1, 1],
        ]),
        Self::from_rows([
            [0, 0, 1, 0, 0],
            [0, 0, 1, 1, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 1, 1, 1, 0],
        ]),
        Self::from_rows([
            [0, 1, 1, 1, 0],
            [0, 1, 0, 0, 0],
            [0, 1, 1, 1, 0],
            [0, 0, 0, 1, 0],
            [0, 1, 1, 1, 0],
        ]),
        Self::from_rows([
            [0, 1, 1, 1, 0],
            [0, 1, 0, 0, 0],
            [0, 1, 1, 1, 0],
            [0, 1, 0, 0, 0],
            [0, 1, 1, 1, 0],
        ]),
        Self::from_rows([
            [0, 1, 0, 1, 0],
            [0, 1, 0, 1, 0],
            [0, 1, 1, 1, 0],
            [0, 1, 0, 0, 0],
            [0, 0, 0, 1, 0],
        ]),
        Self::from_rows([
            [0, 1, 1, 1, 0],
            [0, 0, 0, 1, 0],
            [0, 1, 1, 1, 0],
            [0, 1, 0, 0, 0],
            [0, 1, 1, 1, 0],
        ]),
        Self::from_rows([
            [0, 1, 1, 1, 0],
            [0, 0, 0, 1, 0],
            [0, 1, 1, 1, 0],
            [0, 1, 0, 1, 0],
            [0, 1, 1, 1, 0],
        ]),
        Self::from_rows([
            [0, 1, 1, 1, 0],
            [0, 1, 0, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 0, 1, 0],
            [0, 1, 0, 0, 0],
        ]),
        Self::from_rows([
            [0, 1, 1, 1, 0],
            [0, 1, 0, 1, 0],
            [0, 1, 1, 1, 0],
            [0, 1, 0, 1, 0],
            [0, 1, 1, 1, 0],
        ]),
        Self::from_rows([
            [0, 1, 1, 1, 0],
            [0, 1, 0, 1, 0],
            [0, 1, 1, 1, 0],
            [0, 1, 0, 0, 0],
            [0, 1, 1, 1, 0],
        ]),
    ];

    /// Glyph of a single decimal digit
    pub const fn digit(value: u8) -> Option<Self> {
        if value < 10 {
            Some(Self::DIGITS[value as usize])
        } else {
            None
        }
    }

    pub const fn new(cells: [bool; MATRIX_LEDS]) -> Self {
        Self(cells)
    }

    /// Build a glyph from rows of `0`/`1` values
    pub const fn from_rows(rows: [[u8; MATRIX_SIZE]; MATRIX_SIZE]) -> Self {
        let mut cells = [false; MATRIX_LEDS];
        let mut row = 0;
        while row < MATRIX_SIZE {
            let mut col = 0;
            while col < MATRIX_SIZE {
                cells[row * MATRIX_SIZE + col] = rows[row][col] != 0;
                col += 1;
            }
            row += 1;
        }
        Self(cells)
    }

    pub const fn is_lit(&self, index: usize) -> bool {
        index < MATRIX_LEDS && self.0[index]
    }

    /// Mirror every odd row to match the serpentine wiring
    #[must_use]
    pub fn to_serpentine(mut self) -> Self {
        for row in (1..MATRIX_SIZE).step_by(2) {
            let start = row * MATRIX_SIZE;
            self.0[start..start + MATRIX_SIZE].reverse();
        }
        self
    }
}

/// Render a glyph in a single color, producing pixels in transmission order.
///
/// Unlit cells are black.
pub fn render(glyph: &Glyph, color: Rgb) -> MatrixFrame {
    let wired = glyph.to_serpentine();
    let mut frame = DARK_FRAME;
    for (i, pixel) in frame.iter_mut().enumerate() {
        if wired.is_lit(MATRIX_LEDS - 1 - i) {
            *pixel = color;
        }
    }
    frame
}

/// Named palette colors of the matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixColor {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    White,
    BlueMarine,
}

impl MatrixColor {
    /// Compose a pixel for this color at a 0-100 percent intensity.
    ///
    /// Mixed colors split the channel value so the total light output
    /// stays close to a single-channel color at the same percentage.
    pub const fn compose(self, intensity_percent: u8) -> Rgb {
        let value = percent8(intensity_percent);
        match self {
            Self::Red => Rgb { r: value, g: 0, b: 0 },
            Self::Green => Rgb { r: 0, g: value, b: 0 },
            Self::Blue => Rgb { r: 0, g: 0, b: value },
            Self::Yellow => {
                let half = value / 2;
                Rgb { r: half, g: half, b: 0 }
            }
            Self::Purple => {
                let half = value / 2;
                Rgb { r: half, g: 0, b: half }
            }
            Self::White => {
                let third = value / 3;
                Rgb {
                    r: third,
                    g: third,
                    b: third,
                }
            }
            Self::BlueMarine => {
                let half = value / 2;
                Rgb { r: 0, g: half, b: half }
            }
        }
    }
}
