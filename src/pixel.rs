//! Pixel component traits and the built-in pixel types.
//!
//! Drawing is generic over any `Copy` pixel; the traits here exist for
//! the parts of the crate that must look *inside* a pixel: the color
//! constants and the additive combine. A pixel is a fixed number of
//! scalar components of a single [`Component`] type; every scalar is
//! its own one-component pixel, and [`Rgb`] packs three.

use std::ops::{Add, AddAssign};

use num_traits::{Num, NumCast};

/// A scalar pixel component.
///
/// Extends the `num-traits` vocabulary with the notion of a maximum
/// intensity: the largest value meaning "full brightness". For the
/// integer scalars that is the type's maximum; for floats it is `1.0`
/// by convention.
pub trait Component: Copy + Default + PartialOrd + Num + NumCast + AddAssign {
    /// The value representing full intensity.
    fn max_intensity() -> Self;

    /// Truncating conversion from `f64`, with `as`-cast semantics
    /// (fractional part dropped, saturating at the integer bounds).
    fn from_f64_lossy(v: f64) -> Self;

    /// Widening conversion to `f64`.
    fn to_f64_lossy(self) -> f64;
}

macro_rules! impl_int_component {
    ($($t:ty),* $(,)?) => {$(
        impl Component for $t {
            fn max_intensity() -> Self {
                <$t>::MAX
            }

            fn from_f64_lossy(v: f64) -> Self {
                v as $t
            }

            fn to_f64_lossy(self) -> f64 {
                self as f64
            }
        }
    )*};
}

macro_rules! impl_float_component {
    ($($t:ty),* $(,)?) => {$(
        impl Component for $t {
            fn max_intensity() -> Self {
                1.0
            }

            fn from_f64_lossy(v: f64) -> Self {
                v as $t
            }

            fn to_f64_lossy(self) -> f64 {
                self as f64
            }
        }
    )*};
}

impl_int_component!(u8, u16, u32);
impl_float_component!(f32, f64);

/// A pixel value with a fixed number of scalar components.
///
/// Component access is by index so that code handling one- and
/// three-component pixels uniformly (the color layer) does not need
/// per-type knowledge.
pub trait Pixel: Copy + Default {
    /// The scalar type of each component.
    type Component: Component;

    /// Number of components in the pixel (1 for scalars, 3 for [`Rgb`]).
    const COMPONENT_COUNT: usize;

    /// Read component `k` (0-based).
    ///
    /// # Panics
    ///
    /// Panics if `k >= Self::COMPONENT_COUNT`.
    fn component(&self, k: usize) -> Self::Component;

    /// Mutable access to component `k` (0-based).
    ///
    /// # Panics
    ///
    /// Panics if `k >= Self::COMPONENT_COUNT`.
    fn component_mut(&mut self, k: usize) -> &mut Self::Component;
}

macro_rules! impl_scalar_pixel {
    ($($t:ty),* $(,)?) => {$(
        impl Pixel for $t {
            type Component = $t;

            const COMPONENT_COUNT: usize = 1;

            fn component(&self, k: usize) -> $t {
                assert!(k == 0, "component index {k} out of range for a 1-component pixel");
                *self
            }

            fn component_mut(&mut self, k: usize) -> &mut $t {
                assert!(k == 0, "component index {k} out of range for a 1-component pixel");
                self
            }
        }
    )*};
}

impl_scalar_pixel!(u8, u16, u32, f32, f64);

/// A three-component pixel, interpreted as red, green, blue in index
/// order 0, 1, 2.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb<T> {
    /// Red component.
    pub r: T,
    /// Green component.
    pub g: T,
    /// Blue component.
    pub b: T,
}

impl<T> Rgb<T> {
    /// Create a new RGB pixel.
    #[must_use]
    pub const fn new(r: T, g: T, b: T) -> Self {
        Self { r, g, b }
    }
}

impl<T: Component> Pixel for Rgb<T> {
    type Component = T;

    const COMPONENT_COUNT: usize = 3;

    fn component(&self, k: usize) -> T {
        match k {
            0 => self.r,
            1 => self.g,
            2 => self.b,
            _ => panic!("component index {k} out of range for a 3-component pixel"),
        }
    }

    fn component_mut(&mut self, k: usize) -> &mut T {
        match k {
            0 => &mut self.r,
            1 => &mut self.g,
            2 => &mut self.b,
            _ => panic!("component index {k} out of range for a 3-component pixel"),
        }
    }
}

/// Element-wise addition; overflow behavior is whatever the component
/// type's own `+` does.
impl<T: Add<Output = T>> Add for Rgb<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl<T: Add<Output = T> + Copy> AddAssign for Rgb<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Broadcast a single-component value to all three channels, so gray
/// images convert into RGB outputs during composition.
impl<T: Component> From<T> for Rgb<T> {
    fn from(v: T) -> Self {
        Self::new(v, v, v)
    }
}
