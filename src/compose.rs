//! Copying and combining whole images.
//!
//! These operations move pixel data between images of possibly
//! different pixel types; the destination type only has to be
//! convertible from the sources. Region arguments are clamped to the
//! overlap actually available in both images, so callers never have
//! to pre-trim their rectangles.

use std::ops::AddAssign;

use crate::error::{Error, Result};
use crate::geometry::Coord;
use crate::image::Image;

/// Copy a `size` rectangle of `src` into `dst`, placing it at
/// `dst_origin` and reading from `src_origin`, converting pixels on
/// the way.
///
/// The rectangle is clamped to the parts present in both images;
/// origins may even be negative, in which case the rows and columns
/// falling outside are skipped. Nothing is reported about how much
/// was clipped.
pub fn copy_region<S, U>(
    src: &Image<S>,
    dst: &mut Image<U>,
    size: Coord,
    dst_origin: Coord,
    src_origin: Coord,
) where
    S: Copy,
    U: From<S>,
{
    let (s0, d0, n) = clamp_rect(size, src.size(), src_origin, dst.size(), dst_origin);
    for dy in 0..n.y {
        for dx in 0..n.x {
            let v = src[Coord::new(s0.x + dx, s0.y + dy)];
            dst[Coord::new(d0.x + dx, d0.y + dy)] = U::from(v);
        }
    }
}

/// Join two images side by side.
///
/// `out` is resized to the combined width and the taller of the two
/// heights, `a` is placed at the left edge and `b` immediately to its
/// right. The region below the shorter image stays at the output
/// pixel type's default value, which is black for the built-in pixel
/// types.
pub fn join_images<S, T, U>(a: &Image<S>, b: &Image<T>, out: &mut Image<U>)
where
    S: Copy,
    T: Copy,
    U: From<S> + From<T> + Default + Clone,
{
    let h = a.size().y.max(b.size().y);
    out.resize(Coord::new(a.size().x + b.size().x, h));
    copy_region(a, out, a.size(), Coord::ORIGIN, Coord::ORIGIN);
    copy_region(b, out, b.size(), Coord::new(a.size().x, 0), Coord::ORIGIN);
}

/// Combine two images by pixel-wise addition.
///
/// `out` becomes a copy of `a` with the whole of `b` added on top,
/// anchored at the origin. Addition happens in the output pixel type;
/// integer components follow the component type's own overflow rules.
///
/// # Errors
///
/// Returns [`Error::CoordNotInImage`] when `a` is empty and
/// [`Error::IncompatibleSizes`] when `a` and `out` differ in size.
pub fn combine_images<S, T, U>(a: &Image<S>, b: &Image<T>, out: &mut Image<U>) -> Result<()>
where
    S: Copy,
    T: Copy,
    U: From<S> + From<T> + AddAssign,
{
    combine(a, b, out, Coord::ORIGIN, b.size(), Coord::ORIGIN, "combine_images")
}

/// Combine a rectangle of `b` into a copy of `a` by pixel-wise
/// addition.
///
/// `out` becomes a copy of `a`, then the `size` rectangle of `b`
/// starting at `from` is added on top at `dst`. The rectangle is
/// clamped to what `b` can provide and to the output extent, so an
/// oversized request adds whatever overlaps; a rectangle with a zero
/// or negative extent adds nothing.
///
/// # Errors
///
/// Returns [`Error::CoordNotInImage`] when `dst` lies outside `a` and
/// [`Error::IncompatibleSizes`] when `a` and `out` differ in size.
pub fn combine_images_region<S, T, U>(
    a: &Image<S>,
    b: &Image<T>,
    out: &mut Image<U>,
    dst: Coord,
    size: Coord,
    from: Coord,
) -> Result<()>
where
    S: Copy,
    T: Copy,
    U: From<S> + From<T> + AddAssign,
{
    combine(a, b, out, dst, size, from, "combine_images_region")
}

fn combine<S, T, U>(
    a: &Image<S>,
    b: &Image<T>,
    out: &mut Image<U>,
    dst: Coord,
    size: Coord,
    from: Coord,
    op: &'static str,
) -> Result<()>
where
    S: Copy,
    T: Copy,
    U: From<S> + From<T> + AddAssign,
{
    if !a.in_bounds(dst) {
        return Err(Error::CoordNotInImage { op });
    }
    if a.size() != out.size() {
        return Err(Error::IncompatibleSizes { op });
    }

    copy_region(a, out, a.size(), Coord::ORIGIN, Coord::ORIGIN);

    let (b0, d0, n) = clamp_rect(size, b.size(), from, out.size(), dst);
    for dy in 0..n.y {
        for dx in 0..n.x {
            let v = b[Coord::new(b0.x + dx, b0.y + dy)];
            out[Coord::new(d0.x + dx, d0.y + dy)] += U::from(v);
        }
    }
    Ok(())
}

/// Clamp one axis of a copy rectangle to the extents of both images.
///
/// Returns the adjusted source start, destination start and pixel
/// count. Saturating arithmetic keeps extreme origins from wrapping;
/// they simply clamp to an empty result.
fn clamp_axis(
    size: i32,
    src_len: i32,
    src_start: i32,
    dst_len: i32,
    dst_start: i32,
) -> (i32, i32, i32) {
    let lead = src_start.min(dst_start).min(0).saturating_neg();
    let s0 = src_start.saturating_add(lead);
    let d0 = dst_start.saturating_add(lead);
    let n = size
        .saturating_sub(lead)
        .min(src_len.saturating_sub(s0))
        .min(dst_len.saturating_sub(d0))
        .max(0);
    (s0, d0, n)
}

/// Clamp a copy rectangle to the extents of both images.
fn clamp_rect(
    size: Coord,
    src_size: Coord,
    src_origin: Coord,
    dst_size: Coord,
    dst_origin: Coord,
) -> (Coord, Coord, Coord) {
    let (sx, dx, nx) = clamp_axis(size.x, src_size.x, src_origin.x, dst_size.x, dst_origin.x);
    let (sy, dy, ny) = clamp_axis(size.y, src_size.y, src_origin.y, dst_size.y, dst_origin.y);
    (Coord::new(sx, sy), Coord::new(dx, dy), Coord::new(nx, ny))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::Rgb;

    #[test]
    fn test_copy_region_basic() {
        let src = Image::from_pixel(3, 3, 5u8);
        let mut dst = Image::<u8>::new(5, 5);
        copy_region(&src, &mut dst, src.size(), Coord::new(1, 2), Coord::ORIGIN);

        for y in 0..5 {
            for x in 0..5 {
                let inside = (1..4).contains(&x) && (2..5).contains(&y);
                assert_eq!(dst[Coord::new(x, y)], if inside { 5 } else { 0 });
            }
        }
    }

    #[test]
    fn test_copy_region_clamps_overhang() {
        let src = Image::from_pixel(4, 4, 9u8);
        let mut dst = Image::<u8>::new(3, 3);
        copy_region(&src, &mut dst, Coord::new(10, 10), Coord::new(1, 1), Coord::new(2, 2));

        // Only a 2x2 block is available from (2, 2) in the source and
        // only 2x2 fits at (1, 1) in the destination.
        let expected = Image::from_vec(3, 3, vec![0, 0, 0, 0, 9, 9, 0, 9, 9]).unwrap();
        assert_eq!(dst, expected);
    }

    #[test]
    fn test_copy_region_negative_origins_skip_missing_rows() {
        let src = Image::from_pixel(2, 2, 7u8);
        let mut dst = Image::<u8>::new(3, 3);
        copy_region(&src, &mut dst, Coord::new(2, 2), Coord::new(0, -1), Coord::new(-1, 0));

        // The first requested column is outside the source and the
        // first requested row outside the destination; both skips
        // shift the copy, so the one surviving cell is src (0, 1)
        // landing at dst (1, 0).
        let expected = Image::from_vec(3, 3, vec![0, 7, 0, 0, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(dst, expected);
    }

    #[test]
    fn test_copy_region_zero_size_copies_nothing() {
        let src = Image::from_pixel(2, 2, 7u8);
        let mut dst = Image::<u8>::new(2, 2);
        copy_region(&src, &mut dst, Coord::new(0, 2), Coord::ORIGIN, Coord::ORIGIN);
        copy_region(&src, &mut dst, Coord::new(-4, -4), Coord::ORIGIN, Coord::ORIGIN);
        assert_eq!(dst, Image::<u8>::new(2, 2));
    }

    #[test]
    fn test_join_images_side_by_side() {
        let a = Image::from_pixel(2, 3, 10u8);
        let b = Image::from_pixel(3, 2, 20u8);
        let mut out = Image::<u8>::new(0, 0);
        join_images(&a, &b, &mut out);

        assert_eq!(out.size(), Coord::new(5, 3));
        for y in 0..3 {
            for x in 0..5 {
                let expected = if x < 2 {
                    10
                } else if y < 2 {
                    20
                } else {
                    0
                };
                assert_eq!(out[Coord::new(x, y)], expected);
            }
        }
    }

    #[test]
    fn test_join_pads_below_the_shorter_left_image() {
        let a = Image::from_pixel(2, 1, 10u8);
        let b = Image::from_pixel(1, 3, 20u8);
        let mut out = Image::<u8>::new(0, 0);
        join_images(&a, &b, &mut out);

        assert_eq!(out.size(), Coord::new(3, 3));
        assert_eq!(out[Coord::new(0, 0)], 10);
        assert_eq!(out[Coord::new(2, 2)], 20);
        assert_eq!(out[Coord::new(0, 1)], 0);
        assert_eq!(out[Coord::new(1, 2)], 0);
    }

    #[test]
    fn test_join_converts_gray_into_rgb() {
        let a = Image::from_pixel(1, 1, 200u8);
        let b = Image::from_pixel(1, 1, Rgb::new(255u8, 0, 0));
        let mut out = Image::<Rgb<u8>>::new(0, 0);
        join_images(&a, &b, &mut out);

        assert_eq!(out[Coord::new(0, 0)], Rgb::new(200, 200, 200));
        assert_eq!(out[Coord::new(1, 0)], Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_join_with_empty_left_image() {
        let a = Image::<u8>::new(0, 0);
        let b = Image::from_pixel(2, 2, 20u8);
        let mut out = Image::<u8>::new(0, 0);
        join_images(&a, &b, &mut out);

        assert_eq!(out.size(), Coord::new(2, 2));
        assert!(out.pixels().iter().all(|&p| p == 20));
    }

    #[test]
    fn test_combine_adds_whole_images() {
        let a = Image::from_pixel(4, 4, 10u8);
        let b = Image::from_pixel(4, 4, 5u8);
        let mut out = Image::<u8>::new(4, 4);
        combine_images(&a, &b, &mut out).unwrap();
        assert!(out.pixels().iter().all(|&p| p == 15));
    }

    #[test]
    fn test_combine_with_smaller_b_adds_only_the_overlap() {
        let a = Image::from_pixel(4, 4, 10u8);
        let b = Image::from_pixel(2, 3, 5u8);
        let mut out = Image::<u8>::new(4, 4);
        combine_images(&a, &b, &mut out).unwrap();

        for y in 0..4 {
            for x in 0..4 {
                let added = x < 2 && y < 3;
                assert_eq!(out[Coord::new(x, y)], if added { 15 } else { 10 });
            }
        }
    }

    #[test]
    fn test_combine_rejects_empty_a() {
        let a = Image::<u8>::new(0, 0);
        let b = Image::from_pixel(2, 2, 1u8);
        let mut out = Image::<u8>::new(0, 0);
        assert_eq!(
            combine_images(&a, &b, &mut out),
            Err(Error::CoordNotInImage {
                op: "combine_images"
            })
        );
    }

    #[test]
    fn test_combine_rejects_mismatched_output() {
        let a = Image::from_pixel(4, 4, 1u8);
        let b = Image::from_pixel(4, 4, 1u8);
        let mut out = Image::<u8>::new(3, 4);
        assert_eq!(
            combine_images(&a, &b, &mut out),
            Err(Error::IncompatibleSizes {
                op: "combine_images"
            })
        );
    }

    #[test]
    fn test_combine_region_rejects_dst_outside_a() {
        let a = Image::from_pixel(4, 4, 1u8);
        let b = Image::from_pixel(4, 4, 1u8);
        let mut out = Image::<u8>::new(4, 4);
        assert_eq!(
            combine_images_region(&a, &b, &mut out, Coord::new(4, 0), b.size(), Coord::ORIGIN),
            Err(Error::CoordNotInImage {
                op: "combine_images_region"
            })
        );
    }

    #[test]
    fn test_combine_region_offsets() {
        let a = Image::from_pixel(5, 5, 1u8);
        let b = Image::from_pixel(2, 2, 3u8);
        let mut out = Image::<u8>::new(5, 5);
        combine_images_region(&a, &b, &mut out, Coord::new(2, 1), b.size(), Coord::ORIGIN).unwrap();

        for y in 0..5 {
            for x in 0..5 {
                let added = (2..4).contains(&x) && (1..3).contains(&y);
                assert_eq!(out[Coord::new(x, y)], if added { 4 } else { 1 });
            }
        }
    }

    #[test]
    fn test_combine_region_clamps_to_the_output_edge() {
        let a = Image::from_pixel(5, 5, 1u8);
        let b = Image::from_pixel(10, 10, 2u8);
        let mut out = Image::<u8>::new(5, 5);
        combine_images_region(&a, &b, &mut out, Coord::new(3, 3), Coord::new(10, 10), Coord::ORIGIN)
            .unwrap();

        for y in 0..5 {
            for x in 0..5 {
                let added = x >= 3 && y >= 3;
                assert_eq!(out[Coord::new(x, y)], if added { 3 } else { 1 });
            }
        }
    }

    #[test]
    fn test_combine_region_clamps_to_what_b_provides() {
        let a = Image::from_pixel(5, 5, 1u8);
        let b = Image::from_pixel(3, 3, 2u8);
        let mut out = Image::<u8>::new(5, 5);
        combine_images_region(&a, &b, &mut out, Coord::ORIGIN, Coord::new(5, 5), Coord::new(2, 2))
            .unwrap();

        // Only the 1x1 tail of b from (2, 2) exists.
        assert_eq!(out[Coord::new(0, 0)], 3);
        assert_eq!(out[Coord::new(1, 0)], 1);
        assert_eq!(out[Coord::new(0, 1)], 1);
    }

    #[test]
    fn test_combine_region_zero_size_only_copies() {
        let a = Image::from_pixel(4, 4, 9u8);
        let b = Image::from_pixel(4, 4, 9u8);
        let mut out = Image::<u8>::new(4, 4);
        combine_images_region(&a, &b, &mut out, Coord::new(1, 1), Coord::new(0, 3), Coord::ORIGIN)
            .unwrap();
        assert_eq!(out, a);
    }

    #[test]
    fn test_combine_rgb_additive_colors() {
        let a = Image::from_pixel(2, 2, Rgb::new(255u8, 0, 0));
        let b = Image::from_pixel(2, 2, Rgb::new(0u8, 0, 255));
        let mut out = Image::<Rgb<u8>>::new(2, 2);
        combine_images(&a, &b, &mut out).unwrap();
        assert!(out.pixels().iter().all(|&p| p == Rgb::new(255, 0, 255)));
    }
}
