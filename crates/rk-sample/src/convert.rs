use core::marker::PhantomData;

use rk_core::{Channel, FloatPixel, Pixel};

pub trait ColorConvert<A> {
    type Output;

    fn convert(&self, acc: A) -> Self::Output;
}

/// Clamps each channel to `[0, 1]` and quantizes to depth `C`.
///
/// Integer depths round to nearest.
#[derive(Debug)]
pub struct ClampConvert<C>(PhantomData<C>);

impl<C> ClampConvert<C> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<C> Default for ClampConvert<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for ClampConvert<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for ClampConvert<C> {}

impl<C: Channel, const N: usize> ColorConvert<FloatPixel<N>> for ClampConvert<C> {
    type Output = Pixel<C, N>;

    #[inline]
    fn convert(&self, acc: FloatPixel<N>) -> Pixel<C, N> {
        Pixel(acc.0.map(|v| C::from_unit(v.clamp(0.0, 1.0))))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl<A> ColorConvert<A> for Passthrough {
    type Output = A;

    #[inline]
    fn convert(&self, acc: A) -> A {
        acc
    }
}
