//! Separable windowed resampling of a single output pixel.
//!
//! A query point `p` in source space is reconstructed in two passes:
//! 1. for each of the `W` rows around `floor(p.y)`, gather `W` taps around
//!    `floor(p.x)` and convolve them with the x weights;
//! 2. convolve the `W` row results with the y weights.
//!
//! Taps outside the image on either axis are resolved by the same
//! [`BoundaryPolicy`](rk_core::BoundaryPolicy). Accumulation happens in the
//! normalized [`FloatPixel`](rk_core::FloatPixel) and is clamped only by the
//! final [`ColorConvert`].
//!
//! Weight vectors come from a [`FilterKernel`]; callers with their own weights
//! use [`resample_point`] directly.

mod convert;
mod convolve;
pub mod filter;
mod resample;
mod window;

pub use convert::{ClampConvert, ColorConvert, Passthrough};
pub use convolve::convolve;
pub use filter::{Bicubic, Bilinear, FilterKernel, FilterKind, Gaussian, Lanczos, Nearest};
pub use resample::{INLINE_TAPS, Resampler, resample_point, resample_point_accum};
pub use window::{gather_row, gather_window, middle_index};
