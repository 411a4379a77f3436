use rk_core::{Accumulator, PixelValue};

/// Channel-wise `sum(weights[i] * window[i])` in f32.
///
/// No normalization and no clamping: negative lobes may push channels outside
/// `[0, 1]`.
///
/// # Panics
/// Panics if `window` and `weights` differ in length.
pub fn convolve<T: PixelValue>(window: &[T], weights: &[f32]) -> T::Accum {
    assert_eq!(
        window.len(),
        weights.len(),
        "window and weight vector must have the same length"
    );

    let mut acc = T::Accum::zero();
    for (px, &w) in window.iter().zip(weights) {
        acc.add_scaled(&px.to_accum(), w);
    }
    acc
}
