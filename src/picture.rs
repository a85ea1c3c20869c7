use std::sync::Arc;

use crate::color::Color;
use crate::error::PictureError;

/// A grid coordinate. Signed so gestures can run past the canvas edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A single-cell overwrite instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edit {
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

impl Edit {
    pub const fn new(x: i32, y: i32, color: Color) -> Self {
        Self { x, y, color }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// Immutable grid of colors.
///
/// The pixel buffer is shared between clones and never written after
/// construction; [`Picture::draw`] returns a new picture with its own buffer.
/// The color at column `x`, row `y` lives at `pixels[x + y * width]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    width: usize,
    height: usize,
    pixels: Arc<[Color]>,
}

impl Picture {
    /// A picture with every cell set to `color`
    pub fn empty(width: usize, height: usize, color: Color) -> Result<Self, PictureError> {
        Self::from_pixels(width, height, vec![color; width * height])
    }

    /// Wrap a row-major pixel buffer
    pub fn from_pixels(
        width: usize,
        height: usize,
        pixels: Vec<Color>,
    ) -> Result<Self, PictureError> {
        if width == 0 || height == 0 {
            return Err(PictureError::InvalidDimension { width, height });
        }
        let expected = width * height;
        if pixels.len() != expected {
            return Err(PictureError::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels: pixels.into(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major view of every cell
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index_of(x, y).is_some()
    }

    /// Linear buffer index of `(x, y)`, or `None` outside the grid
    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| x + y * self.width)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.index_of(x, y).map(|index| self.pixels[index])
    }

    pub fn try_pixel(&self, x: i32, y: i32) -> Result<Color, PictureError> {
        self.get(x, y).ok_or(PictureError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }

    /// Color at `(x, y)`.
    ///
    /// # Panics
    ///
    /// When `(x, y)` is outside the picture. Callers taking positions from
    /// the pointer should use [`Picture::get`] instead.
    pub fn pixel(&self, x: i32, y: i32) -> Color {
        match self.try_pixel(x, y) {
            Ok(color) => color,
            Err(err) => panic!("{err}"),
        }
    }

    /// Apply a batch of edits and return the resulting picture.
    ///
    /// The buffer is copied once and edits are applied in order, so a later
    /// edit to the same cell wins. Edits outside the grid are skipped.
    pub fn draw(&self, edits: &[Edit]) -> Picture {
        let mut copy = self.pixels.to_vec();
        let mut skipped = 0;
        for edit in edits {
            match self.index_of(edit.x, edit.y) {
                Some(index) => copy[index] = edit.color,
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            log::trace!("skipped {} edits outside the {}x{} picture", skipped, self.width, self.height);
        }

        Picture {
            width: self.width,
            height: self.height,
            pixels: copy.into(),
        }
    }

    /// True when both pictures share one pixel buffer, i.e. one is an
    /// unmodified clone of the other
    pub fn same_buffer(&self, other: &Picture) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }
}
