//! # Pixmark
//!
//! Drawing primitives and composition helpers for in-memory raster
//! images, generic over the pixel type.
//!
//! ## Features
//!
//! - **Soft clipping**: primitives may overhang the image; pixels
//!   outside it are simply skipped
//! - **Generic pixel model**: draw into `u8` gray images, `Rgb<f32>`
//!   images, or any pixel type of your own
//! - **Named colors**: black/gray/white for gray pixels, the RGB
//!   primaries and secondaries for color pixels
//! - **Composition**: join images side by side or add one image onto
//!   another, converting pixel types on the way
//!
//! ## Quick Start
//!
//! ```rust
//! use pixmark::prelude::*;
//!
//! let mut im = Image::<u8>::new(64, 64);
//! draw_box(&mut im, Coord::new(8, 8), Coord::new(55, 55), u8::white());
//! draw_cross(&mut im, Coord::new(32, 32), 5.0, u8::gray());
//! draw_shape(&mut im, Coord::new(32, 32), &circle_points(20), u8::white());
//!
//! assert_eq!(im[Coord::new(8, 8)], 255);
//! ```

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in raster graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Pixel coordinates and rectangle walking.
pub mod geometry;

/// Pixel component traits and the built-in pixel types.
pub mod pixel;

/// Named color constructors for gray and RGB pixels.
pub mod color;

/// The raster image container.
pub mod image;

// ============================================================================
// Drawing Modules
// ============================================================================

/// Rasterization of lines, shapes, boxes, crosses and circles.
pub mod draw;

/// Copying, joining and combining whole images.
pub mod compose;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for pixmark operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use pixmark::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{GrayColors, RgbColors};
    pub use crate::compose::{combine_images, combine_images_region, copy_region, join_images};
    pub use crate::draw::{
        circle_points, draw_box, draw_cross, draw_line, draw_line_between, draw_shape,
    };
    pub use crate::error::{Error, Result};
    pub use crate::geometry::Coord;
    pub use crate::image::Image;
    pub use crate::pixel::{Component, Pixel, Rgb};
}

// ============================================================================
// Tests
// ============================================================================
