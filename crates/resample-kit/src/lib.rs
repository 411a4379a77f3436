//! Umbrella crate for the `resample-kit` workspace.
//!
//! Re-exports the pixel model and views (`rk-core`), the per-point kernel and
//! filters (`rk-sample`), and the parallel render driver (`rk-render`).

pub use rk_core::*;
pub use rk_render::*;
pub use rk_sample::*;
