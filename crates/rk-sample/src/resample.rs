use rk_core::{BoundaryPolicy, ImageAccess, PixelValue, Point2f};
use smallvec::{SmallVec, smallvec};

use crate::convert::ColorConvert;
use crate::convolve::convolve;
use crate::filter::FilterKernel;
use crate::window::{gather_row, gather_window};

/// Windows up to this size stay on the stack.
pub const INLINE_TAPS: usize = 8;

type Accum<A> = <<A as ImageAccess>::Pixel as PixelValue>::Accum;

/// Reconstructs the floating pixel at `p` before final conversion.
///
/// Runs the horizontal pass on each of the `window_size` rows around
/// `floor(p.y)`, then convolves the row results with `y_weights`. Rows outside
/// the image are resolved by `policy` exactly as out-of-range columns are.
///
/// # Panics
/// Panics unless `window_size` is even and at least 2 and both weight vectors
/// have `window_size` entries.
pub fn resample_point_accum<A>(
    src: &A,
    p: Point2f,
    x_weights: &[f32],
    y_weights: &[f32],
    window_size: usize,
    policy: BoundaryPolicy,
) -> Accum<A>
where
    A: ImageAccess + ?Sized,
    A::Pixel: PixelValue,
{
    assert!(
        window_size >= 2 && window_size.is_multiple_of(2),
        "window size must be even and at least 2, got {window_size}"
    );
    assert_eq!(
        x_weights.len(),
        window_size,
        "x weight vector must have window_size entries"
    );
    assert_eq!(
        y_weights.len(),
        window_size,
        "y weight vector must have window_size entries"
    );

    let anchor = p.anchor();

    let mut taps: SmallVec<[A::Pixel; INLINE_TAPS]> =
        smallvec![<A::Pixel as PixelValue>::transparent(); window_size];
    let mut rows: SmallVec<[Accum<A>; INLINE_TAPS]> =
        smallvec![<Accum<A> as PixelValue>::transparent(); window_size];

    gather_window(anchor.y, src.height(), policy, &mut rows, |y| {
        gather_row(src.row(y), anchor.x, policy, &mut taps);
        convolve(&taps, x_weights)
    });

    convolve(&rows, y_weights)
}

/// One output pixel: [`resample_point_accum`] followed by `convert`.
pub fn resample_point<A, C>(
    src: &A,
    p: Point2f,
    x_weights: &[f32],
    y_weights: &[f32],
    window_size: usize,
    policy: BoundaryPolicy,
    convert: &C,
) -> C::Output
where
    A: ImageAccess + ?Sized,
    A::Pixel: PixelValue,
    C: ColorConvert<Accum<A>> + ?Sized,
{
    convert.convert(resample_point_accum(
        src,
        p,
        x_weights,
        y_weights,
        window_size,
        policy,
    ))
}

/// A filter kernel plus a boundary policy; weights come from `p.fract()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resampler<K> {
    kernel: K,
    policy: BoundaryPolicy,
}

impl<K: FilterKernel> Resampler<K> {
    pub fn new(kernel: K, policy: BoundaryPolicy) -> Self {
        Self { kernel, policy }
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    pub fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    pub fn window_size(&self) -> usize {
        self.kernel.window_size()
    }

    pub fn sample_accum<A>(&self, src: &A, p: Point2f) -> Accum<A>
    where
        A: ImageAccess + ?Sized,
        A::Pixel: PixelValue,
    {
        let w = self.kernel.window_size();
        let frac = p.fract();

        let mut x_weights: SmallVec<[f32; INLINE_TAPS]> = smallvec![0.0; w];
        let mut y_weights: SmallVec<[f32; INLINE_TAPS]> = smallvec![0.0; w];
        self.kernel.weights(frac.x, &mut x_weights);
        self.kernel.weights(frac.y, &mut y_weights);

        resample_point_accum(src, p, &x_weights, &y_weights, w, self.policy)
    }

    pub fn sample<A, C>(&self, src: &A, p: Point2f, convert: &C) -> C::Output
    where
        A: ImageAccess + ?Sized,
        A::Pixel: PixelValue,
        C: ColorConvert<Accum<A>> + ?Sized,
    {
        convert.convert(self.sample_accum(src, p))
    }
}
