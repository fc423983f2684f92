//! Line segment rasterization.

use crate::geometry::Coord;
use crate::image::Image;

/// Draw a line segment from `(x1, y1)` to `(x2, y2)`.
///
/// The segment is sampled at unit steps of its L1 length
/// `|x2 - x1| + |y2 - y1|`, and each sample is rounded to a pixel by
/// adding 0.5 to both coordinates and taking the floor. Successive
/// samples move by at most one pixel on each axis, so the drawn run
/// is connected; some pixels are written more than once.
///
/// Endpoints may lie outside the image; out-of-bounds samples are
/// skipped. A zero-length segment marks the single rounded point.
/// Non-finite coordinates draw nothing.
pub fn draw_line<T: Copy>(im: &mut Image<T>, x1: f64, y1: f64, x2: f64, y2: f64, color: T) {
    if !(x1.is_finite() && y1.is_finite() && x2.is_finite() && y2.is_finite()) {
        return;
    }

    let dx = x2 - x1;
    let dy = y2 - y1;
    let len = dx.abs() + dy.abs();
    if len == 0.0 {
        plot(im, x1, y1, color);
        return;
    }

    // Samples run to floor(len), so a fractional length stops one
    // sample short of the far endpoint.
    let steps = len.floor() as i32;
    for t in 0..=steps {
        let x = x1 + f64::from(t) * dx / len;
        let y = y1 + f64::from(t) * dy / len;
        plot(im, x, y, color);
    }
}

/// Draw a line segment between two pixel coordinates.
pub fn draw_line_between<T: Copy>(im: &mut Image<T>, p1: Coord, p2: Coord, color: T) {
    draw_line(
        im,
        f64::from(p1.x),
        f64::from(p1.y),
        f64::from(p2.x),
        f64::from(p2.y),
        color,
    );
}

/// Round a sample position to a pixel and write it if in bounds.
fn plot<T: Copy>(im: &mut Image<T>, x: f64, y: f64, color: T) {
    let px = (x + 0.5).floor() as i32;
    let py = (y + 0.5).floor() as i32;
    im.set_pixel(Coord::new(px, py), color);
}
