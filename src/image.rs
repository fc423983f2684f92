//! The in-memory raster image container.
//!
//! [`Image`] owns a row-major pixel buffer with a top-left origin:
//! `x` grows rightwards, `y` grows downwards. All drawing in this
//! crate goes through [`Image::set_pixel`], which silently discards
//! writes outside the raster, so callers may rasterize shapes that
//! overhang the edges without pre-clipping.

use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};
use crate::geometry::Coord;

/// A rectangular raster of pixels.
///
/// The pixel type is unconstrained here; drawing routines add the
/// bounds they need. Rows are stored contiguously, so `im[y]` yields
/// a row slice and `im[y][x]` a single pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image<T> {
    width: u32,
    height: u32,
    data: Vec<T>,
}

impl<T: Default + Clone> Image<T> {
    /// Create an image with every pixel set to `T::default()`.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![T::default(); (width as usize) * (height as usize)],
        }
    }

    /// Reallocate to `size`, discarding the old contents.
    ///
    /// Every pixel of the resized image is `T::default()`. Negative
    /// extents clamp to zero.
    pub fn resize(&mut self, size: Coord) {
        *self = Self::new(size.x.max(0) as u32, size.y.max(0) as u32);
    }
}

impl<T: Clone> Image<T> {
    /// Create an image with every pixel set to `pixel`.
    #[must_use]
    pub fn from_pixel(width: u32, height: u32, pixel: T) -> Self {
        Self {
            width,
            height,
            data: vec![pixel; (width as usize) * (height as usize)],
        }
    }

    /// Set every pixel to `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}

impl<T> Image<T> {
    /// Wrap an existing row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleSizes`] when `data.len()` is not
    /// `width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<T>) -> Result<Self> {
        if data.len() != (width as usize) * (height as usize) {
            return Err(Error::IncompatibleSizes {
                op: "Image::from_vec",
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Size as a coordinate pair, `(width, height)`.
    #[must_use]
    pub const fn size(&self) -> Coord {
        Coord::new(self.width as i32, self.height as i32)
    }

    /// `true` when either dimension is zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether `c` addresses a pixel of this image.
    #[must_use]
    pub const fn in_bounds(&self, c: Coord) -> bool {
        c.x >= 0 && c.y >= 0 && (c.x as u32) < self.width && (c.y as u32) < self.height
    }

    /// Buffer offset of an in-bounds coordinate.
    fn offset(&self, c: Coord) -> usize {
        (c.y as usize) * (self.width as usize) + (c.x as usize)
    }

    /// The pixel at `c`, or `None` when `c` is outside the image.
    #[must_use]
    pub fn get_pixel(&self, c: Coord) -> Option<&T> {
        if self.in_bounds(c) {
            Some(&self.data[self.offset(c)])
        } else {
            None
        }
    }

    /// Write the pixel at `c`; writes outside the image are discarded.
    pub fn set_pixel(&mut self, c: Coord, value: T) {
        if self.in_bounds(c) {
            let i = self.offset(c);
            self.data[i] = value;
        }
    }

    /// The pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= self.height()`.
    #[must_use]
    pub fn row(&self, y: u32) -> &[T] {
        assert!(y < self.height, "row {y} out of range for image height {}", self.height);
        let w = self.width as usize;
        let start = (y as usize) * w;
        &self.data[start..start + w]
    }

    /// Mutable access to the pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= self.height()`.
    pub fn row_mut(&mut self, y: u32) -> &mut [T] {
        assert!(y < self.height, "row {y} out of range for image height {}", self.height);
        let w = self.width as usize;
        let start = (y as usize) * w;
        &mut self.data[start..start + w]
    }

    /// The whole buffer in row-major order.
    #[must_use]
    pub fn pixels(&self) -> &[T] {
        &self.data
    }

    /// Mutable access to the whole buffer in row-major order.
    pub fn pixels_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> Index<Coord> for Image<T> {
    type Output = T;

    fn index(&self, c: Coord) -> &T {
        assert!(
            self.in_bounds(c),
            "coordinate ({}, {}) out of bounds for {}x{} image",
            c.x,
            c.y,
            self.width,
            self.height
        );
        &self.data[self.offset(c)]
    }
}

impl<T> IndexMut<Coord> for Image<T> {
    fn index_mut(&mut self, c: Coord) -> &mut T {
        assert!(
            self.in_bounds(c),
            "coordinate ({}, {}) out of bounds for {}x{} image",
            c.x,
            c.y,
            self.width,
            self.height
        );
        let i = self.offset(c);
        &mut self.data[i]
    }
}

impl<T> Index<usize> for Image<T> {
    type Output = [T];

    fn index(&self, y: usize) -> &[T] {
        assert!(y < self.height as usize, "row {y} out of range for image height {}", self.height);
        let w = self.width as usize;
        &self.data[y * w..(y + 1) * w]
    }
}

impl<T> IndexMut<usize> for Image<T> {
    fn index_mut(&mut self, y: usize) -> &mut [T] {
        assert!(y < self.height as usize, "row {y} out of range for image height {}", self.height);
        let w = self.width as usize;
        &mut self.data[y * w..(y + 1) * w]
    }
}
