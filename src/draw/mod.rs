//! Rasterization routines.
//!
//! Free functions that mark pixels directly in an
//! [`Image`](crate::image::Image). All of them clip softly: pixels
//! falling outside the image are discarded and the rest of the
//! primitive is still drawn.

mod circle;
mod line;
mod shapes;

pub use circle::circle_points;
pub use line::{draw_line, draw_line_between};
pub use shapes::{draw_box, draw_cross, draw_shape};
