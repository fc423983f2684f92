//! Named color constructors for gray and RGB pixels.
//!
//! Drawing routines take the pen color as a plain pixel value; these
//! traits supply the usual names for them. [`GrayColors`] covers the
//! one-component pixels, [`RgbColors`] the three-component ones, and
//! both are implemented via [`Pixel`] component access so the provided
//! bodies serve every component type.

use num_traits::{One, Zero};

use crate::pixel::{Component, Pixel, Rgb};

/// Fill every component of a pixel with the same value.
fn splat<P: Pixel>(v: P::Component) -> P {
    let mut p = P::default();
    for k in 0..P::COMPONENT_COUNT {
        *p.component_mut(k) = v;
    }
    p
}

/// Build a three-component pixel from per-channel on/off flags, where
/// "on" means full intensity.
fn channels<P: Pixel>(flags: [bool; 3]) -> P {
    let mut p: P = splat(P::Component::zero());
    for (k, on) in flags.into_iter().enumerate() {
        if on {
            *p.component_mut(k) = P::Component::max_intensity();
        }
    }
    p
}

/// Named shades for one-component (gray scale) pixels.
pub trait GrayColors: Pixel {
    /// Zero intensity.
    #[must_use]
    fn black() -> Self {
        splat(Self::Component::zero())
    }

    /// Half intensity, computed as `max_intensity / 2` in component
    /// arithmetic (so `127` for `u8`, `0.5` for floats).
    #[must_use]
    fn gray() -> Self {
        let two = Self::Component::one() + Self::Component::one();
        splat(Self::Component::max_intensity() / two)
    }

    /// Full intensity.
    #[must_use]
    fn white() -> Self {
        splat(Self::Component::max_intensity())
    }
}

macro_rules! impl_gray_colors {
    ($($t:ty),* $(,)?) => {$(
        impl GrayColors for $t {}
    )*};
}

impl_gray_colors!(u8, u16, u32, f32, f64);

/// Named colors for three-component (RGB) pixels.
///
/// The provided constructors index components 0, 1, 2 as red, green,
/// blue; implementing this trait for a pixel with a different
/// component count will panic on first use.
pub trait RgbColors: Pixel {
    /// Build a pixel with the given components in red, green, blue
    /// order.
    #[must_use]
    fn from_components(r: Self::Component, g: Self::Component, b: Self::Component) -> Self {
        let mut p = Self::default();
        *p.component_mut(0) = r;
        *p.component_mut(1) = g;
        *p.component_mut(2) = b;
        p
    }

    /// All channels off.
    #[must_use]
    fn black() -> Self {
        channels([false, false, false])
    }

    /// All channels at full intensity.
    #[must_use]
    fn white() -> Self {
        channels([true, true, true])
    }

    /// Pure red.
    #[must_use]
    fn red() -> Self {
        channels([true, false, false])
    }

    /// Pure green.
    #[must_use]
    fn green() -> Self {
        channels([false, true, false])
    }

    /// Pure blue.
    #[must_use]
    fn blue() -> Self {
        channels([false, false, true])
    }

    /// Green plus blue.
    #[must_use]
    fn cyan() -> Self {
        channels([false, true, true])
    }

    /// Red plus blue.
    #[must_use]
    fn magenta() -> Self {
        channels([true, false, true])
    }

    /// Red plus green.
    #[must_use]
    fn yellow() -> Self {
        channels([true, true, false])
    }

    /// Scale each channel of `c` by `b`, truncating back to the
    /// component type. `shade(white(), 0.5)` is mid gray.
    #[must_use]
    fn shade(c: Self, b: f64) -> Self {
        let mut out = Self::default();
        for k in 0..Self::COMPONENT_COUNT {
            let v = c.component(k).to_f64_lossy() * b;
            *out.component_mut(k) = Self::Component::from_f64_lossy(v);
        }
        out
    }
}

impl<T: Component> RgbColors for Rgb<T> {}
