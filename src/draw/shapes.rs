//! Polyline, box and cross rasterization.

use crate::draw::line::{draw_line, draw_line_between};
use crate::geometry::Coord;
use crate::image::Image;

/// Draw a closed polyline through `points`, shifted by `offset`.
///
/// Consecutive points are joined by line segments and the last point
/// is joined back to the first. Fewer than two points draw nothing.
pub fn draw_shape<T: Copy>(im: &mut Image<T>, offset: Coord, points: &[Coord], color: T) {
    if points.len() < 2 {
        return;
    }
    for pair in points.windows(2) {
        draw_line_between(im, pair[0] + offset, pair[1] + offset, color);
    }
    draw_line_between(im, points[points.len() - 1] + offset, points[0] + offset, color);
}

/// Draw the axis-aligned rectangle outline with the given corners,
/// both inclusive.
pub fn draw_box<T: Copy>(im: &mut Image<T>, upper_left: Coord, lower_right: Coord, color: T) {
    let (ul, lr) = (upper_left, lower_right);
    draw_line_between(im, ul, Coord::new(ul.x, lr.y), color);
    draw_line_between(im, ul, Coord::new(lr.x, ul.y), color);
    draw_line_between(im, Coord::new(ul.x, lr.y), lr, color);
    draw_line_between(im, Coord::new(lr.x, ul.y), lr, color);
}

/// Draw an axis-aligned cross centered on `center` with arms of length
/// `len` in each direction.
pub fn draw_cross<T: Copy>(im: &mut Image<T>, center: Coord, len: f64, color: T) {
    let (x, y) = (f64::from(center.x), f64::from(center.y));
    draw_line(im, x - len, y, x + len, y, color);
    draw_line(im, x, y - len, x, y + len, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_drawn(im: &Image<u8>) -> usize {
        im.pixels().iter().filter(|&&p| p != 0).count()
    }

    #[test]
    fn test_box_outline() {
        let mut im = Image::<u8>::new(10, 10);
        draw_box(&mut im, Coord::new(2, 3), Coord::new(6, 8), 255);

        // 5x6 box outline: 18 perimeter pixels, interior untouched.
        assert_eq!(count_drawn(&im), 18);
        for x in 2..=6 {
            assert_eq!(im[Coord::new(x, 3)], 255);
            assert_eq!(im[Coord::new(x, 8)], 255);
        }
        for y in 3..=8 {
            assert_eq!(im[Coord::new(2, y)], 255);
            assert_eq!(im[Coord::new(6, y)], 255);
        }
        assert_eq!(im[Coord::new(3, 4)], 0);
        assert_eq!(im[Coord::new(5, 7)], 0);
    }

    #[test]
    fn test_box_with_coincident_corners_is_a_point() {
        let mut im = Image::<u8>::new(5, 5);
        draw_box(&mut im, Coord::new(2, 2), Coord::new(2, 2), 255);
        assert_eq!(count_drawn(&im), 1);
        assert_eq!(im[Coord::new(2, 2)], 255);
    }

    #[test]
    fn test_cross() {
        let mut im = Image::<u8>::new(11, 11);
        draw_cross(&mut im, Coord::new(5, 5), 2.0, 255);

        assert_eq!(count_drawn(&im), 9);
        for x in 3..=7 {
            assert_eq!(im[Coord::new(x, 5)], 255);
        }
        for y in 3..=7 {
            assert_eq!(im[Coord::new(5, y)], 255);
        }
    }

    #[test]
    fn test_cross_with_zero_length_marks_center() {
        let mut im = Image::<u8>::new(5, 5);
        draw_cross(&mut im, Coord::new(2, 2), 0.0, 255);
        assert_eq!(count_drawn(&im), 1);
        assert_eq!(im[Coord::new(2, 2)], 255);
    }

    #[test]
    fn test_shape_with_no_points_draws_nothing() {
        let mut im = Image::<u8>::new(5, 5);
        draw_shape(&mut im, Coord::new(1, 1), &[], 255);
        assert_eq!(count_drawn(&im), 0);
    }

    #[test]
    fn test_shape_with_one_point_draws_nothing() {
        let mut im = Image::<u8>::new(5, 5);
        draw_shape(&mut im, Coord::new(1, 1), &[Coord::new(2, 3)], 255);
        assert_eq!(count_drawn(&im), 0);
    }

    #[test]
    fn test_shape_closes_back_to_first_point() {
        let mut im = Image::<u8>::new(10, 10);
        let triangle = [Coord::new(0, 0), Coord::new(4, 0), Coord::new(0, 4)];
        draw_shape(&mut im, Coord::new(1, 1), &triangle, 255);

        // The closing edge runs down the x = 1 column.
        for y in 1..=5 {
            assert_eq!(im[Coord::new(1, y)], 255);
        }
        // The first edge runs along the y = 1 row.
        for x in 1..=5 {
            assert_eq!(im[Coord::new(x, 1)], 255);
        }
    }

    #[test]
    fn test_shape_offset_shifts_every_point() {
        let mut plain = Image::<u8>::new(12, 12);
        let mut shifted = Image::<u8>::new(12, 12);
        let square = [
            Coord::new(1, 1),
            Coord::new(4, 1),
            Coord::new(4, 4),
            Coord::new(1, 4),
        ];
        draw_shape(&mut plain, Coord::ORIGIN, &square, 255);
        draw_shape(&mut shifted, Coord::new(3, 2), &square, 255);

        for y in 0..12 {
            for x in 0..12 {
                let c = Coord::new(x, y);
                let moved = Coord::new(x + 3, y + 2);
                if shifted.in_bounds(moved) {
                    assert_eq!(plain[c], shifted[moved]);
                }
            }
        }
    }
}
