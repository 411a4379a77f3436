use core::fmt::Debug;

/// Integer channels map `0..=MAX` onto the unit range; `f32` is used as-is.
pub trait Channel: Copy + Default + PartialEq + Debug + Send + Sync + 'static {
    const FULL: Self;

    fn to_unit(self) -> f32;

    /// Quantizes a normalized value. Out-of-range input saturates.
    fn from_unit(v: f32) -> Self;
}

impl Channel for u8 {
    const FULL: Self = u8::MAX;

    #[inline]
    fn to_unit(self) -> f32 {
        self as f32 / 255.0
    }

    #[inline]
    fn from_unit(v: f32) -> Self {
        (v * 255.0).round() as u8
    }
}

impl Channel for u16 {
    const FULL: Self = u16::MAX;

    #[inline]
    fn to_unit(self) -> f32 {
        self as f32 / 65535.0
    }

    #[inline]
    fn from_unit(v: f32) -> Self {
        (v * 65535.0).round() as u16
    }
}

impl Channel for f32 {
    const FULL: Self = 1.0;

    #[inline]
    fn to_unit(self) -> f32 {
        self
    }

    #[inline]
    fn from_unit(v: f32) -> Self {
        v
    }
}

/// Gray+alpha and RGBA carry alpha last; gray and RGB have none.
pub const fn alpha_index(n: usize) -> Option<usize> {
    match n {
        2 | 4 => Some(n - 1),
        _ => None,
    }
}

/// Anything the resampler can gather into a window.
///
/// Source pixels and the floating accumulation pixel both implement this, so
/// the same window and boundary code serves the horizontal and the vertical
/// pass.
pub trait PixelValue: Copy {
    type Accum: Accumulator;

    /// Zero color; alpha, if any, at full scale.
    fn black() -> Self;

    fn transparent() -> Self;

    fn to_accum(self) -> Self::Accum;
}

pub trait Accumulator: PixelValue<Accum = Self> {
    fn zero() -> Self;

    /// `self += weight * src`, channel by channel.
    fn add_scaled(&mut self, src: &Self, weight: f32);
}

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pixel<C, const N: usize>(pub [C; N]);

pub type Gray8 = Pixel<u8, 1>;
pub type Gray16 = Pixel<u16, 1>;
pub type Gray32F = Pixel<f32, 1>;
pub type Rgba8 = Pixel<u8, 4>;
pub type Rgba16 = Pixel<u16, 4>;
pub type Rgba32F = Pixel<f32, 4>;

impl<C: Channel, const N: usize> Default for Pixel<C, N> {
    fn default() -> Self {
        Self([C::default(); N])
    }
}

impl<C: Channel, const N: usize> PixelValue for Pixel<C, N> {
    type Accum = FloatPixel<N>;

    fn black() -> Self {
        let mut px = Self::transparent();
        if let Some(a) = alpha_index(N) {
            px.0[a] = C::FULL;
        }
        px
    }

    fn transparent() -> Self {
        Self::default()
    }

    #[inline]
    fn to_accum(self) -> FloatPixel<N> {
        FloatPixel(self.0.map(Channel::to_unit))
    }
}

/// Accumulation pixel shared by every depth with `N` channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatPixel<const N: usize>(pub [f32; N]);

impl<const N: usize> Default for FloatPixel<N> {
    fn default() -> Self {
        Self([0.0; N])
    }
}

impl<const N: usize> PixelValue for FloatPixel<N> {
    type Accum = Self;

    fn black() -> Self {
        let mut px = Self::default();
        if let Some(a) = alpha_index(N) {
            px.0[a] = 1.0;
        }
        px
    }

    fn transparent() -> Self {
        Self::default()
    }

    #[inline]
    fn to_accum(self) -> Self {
        self
    }
}

impl<const N: usize> Accumulator for FloatPixel<N> {
    fn zero() -> Self {
        Self::default()
    }

    #[inline]
    fn add_scaled(&mut self, src: &Self, weight: f32) {
        for (dst, &s) in self.0.iter_mut().zip(&src.0) {
            *dst += s * weight;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Accumulator, Channel, FloatPixel, Gray8, Gray16, Pixel, PixelValue, Rgba8, Rgba32F,
        alpha_index,
    };

    #[test]
    fn black_is_opaque_only_when_alpha_exists() {
        assert_eq!(Gray8::black(), Pixel([0]));
        assert_eq!(Rgba8::black(), Pixel([0, 0, 0, 255]));
        assert_eq!(Rgba32F::black(), Pixel([0.0, 0.0, 0.0, 1.0]));
        assert_eq!(Pixel::<u16, 2>::black(), Pixel([0, u16::MAX]));
        assert_eq!(FloatPixel::<4>::black(), FloatPixel([0.0, 0.0, 0.0, 1.0]));
        assert_eq!(alpha_index(3), None);
    }

    #[test]
    fn transparent_is_all_zero() {
        assert_eq!(Rgba8::transparent(), Pixel([0; 4]));
        assert_eq!(FloatPixel::<4>::transparent(), FloatPixel([0.0; 4]));
    }

    #[test]
    fn integer_channels_round_trip_through_unit_range() {
        for v in [0u8, 1, 100, 254, 255] {
            assert_eq!(u8::from_unit(v.to_unit()), v);
        }
        for v in [0u16, 1, 1000, 40000, u16::MAX] {
            assert_eq!(u16::from_unit(v.to_unit()), v);
        }
        assert_eq!(Gray16::black().to_accum(), FloatPixel([0.0]));
        assert_eq!(Pixel::<u16, 1>([65535]).to_accum(), FloatPixel([1.0]));
    }

    #[test]
    fn from_unit_saturates() {
        assert_eq!(u8::from_unit(1.7), 255);
        assert_eq!(u8::from_unit(-0.2), 0);
        assert_eq!(u16::from_unit(2.0), u16::MAX);
    }

    #[test]
    fn add_scaled_accumulates_per_channel() {
        let mut acc = FloatPixel::<2>::zero();
        acc.add_scaled(&FloatPixel([1.0, 0.5]), 0.25);
        acc.add_scaled(&FloatPixel([2.0, -1.0]), 0.5);
        assert_eq!(acc, FloatPixel([1.25, -0.375]));
    }
}
