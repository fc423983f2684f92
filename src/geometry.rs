//! Integer raster coordinates.
//!
//! Provides the coordinate/offset type used to address pixels and to
//! describe rectangular regions.

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A 2D pixel coordinate or offset with signed integer components.
///
/// `Coord` doubles as a position, an offset and a size throughout the
/// crate; composition code does arithmetic on all three uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    /// Horizontal component (column).
    pub x: i32,
    /// Vertical component (row).
    pub y: i32,
}

impl Coord {
    /// The origin, (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Number of pixels in the rectangle spanned from the origin to this
    /// size, widened to avoid overflow for large images.
    #[must_use]
    pub const fn area(self) -> i64 {
        (self.x as i64) * (self.y as i64)
    }

    /// Row-major step through the half-open rectangle `[origin, end)`.
    ///
    /// Advances `x` by one, wrapping to `origin.x` on the next row when
    /// it reaches `end.x`. Returns `false` once the walk has passed the
    /// last row. Meaningful only for non-empty rectangles; the caller
    /// visits the current position before stepping.
    ///
    /// # Example
    ///
    /// ```
    /// use pixmark::geometry::Coord;
    ///
    /// let origin = Coord::new(1, 1);
    /// let end = Coord::new(3, 3);
    /// let mut p = origin;
    /// let mut visited = vec![p];
    /// while p.advance(origin, end) {
    ///     visited.push(p);
    /// }
    /// assert_eq!(visited.len(), 4);
    /// assert_eq!(visited[1], Coord::new(2, 1));
    /// assert_eq!(visited[2], Coord::new(1, 2));
    /// ```
    pub fn advance(&mut self, origin: Coord, end: Coord) -> bool {
        self.x += 1;
        if self.x >= end.x {
            self.x = origin.x;
            self.y += 1;
        }
        self.y < end.y
    }
}

impl Add for Coord {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Coord {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Coord {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Coord {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Coord {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
