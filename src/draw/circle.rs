//! Circle outlines as point lists.

use std::f64::consts::TAU;

use crate::geometry::Coord;

/// The pixels of a circle of the given radius around the origin.
///
/// The points are the inner boundary of the rasterized disk
/// `x^2 + y^2 <= radius^2`: every cell of the disk with at least one
/// 4-neighbor outside it. They are ordered by angle starting from
/// `(radius, 0)`, so consecutive points are adjacent and the list can
/// be passed straight to [`draw_shape`](crate::draw::draw_shape) to
/// draw the circle at any position.
///
/// A radius of zero yields the single origin point; negative radii are
/// treated as zero.
#[must_use]
pub fn circle_points(radius: i32) -> Vec<Coord> {
    let radius = radius.max(0);
    let r2 = i64::from(radius) * i64::from(radius);
    let in_disk = |x: i64, y: i64| x * x + y * y <= r2;

    let mut points = Vec::new();
    for y in -radius..=radius {
        for x in -radius..=radius {
            let (xl, yl) = (i64::from(x), i64::from(y));
            if in_disk(xl, yl)
                && (!in_disk(xl + 1, yl)
                    || !in_disk(xl - 1, yl)
                    || !in_disk(xl, yl + 1)
                    || !in_disk(xl, yl - 1))
            {
                points.push(Coord::new(x, y));
            }
        }
    }

    points.sort_by(|a, b| turn_angle(*a).total_cmp(&turn_angle(*b)));
    points
}

/// Polar angle of a point mapped into `[0, TAU)`, so the ordering
/// starts at the positive x axis.
fn turn_angle(c: Coord) -> f64 {
    let a = f64::from(c.y).atan2(f64::from(c.x));
    if a < 0.0 {
        a + TAU
    } else {
        a
    }
}
