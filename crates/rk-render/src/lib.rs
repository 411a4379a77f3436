//! Tiled, parallel rendering on top of `rk-sample`.
//!
//! The driver walks every destination pixel, asks the caller for the matching
//! source-space point, and resamples it. Work is split into horizontal bands
//! rendered on the rayon pool; source views are read-only and stateless, so
//! bands share them without locking.
//!
//! Cancellation is cooperative and band-granular: a [`CancelToken`] set
//! mid-render stops new bands from starting, and the partial image is
//! discarded.

mod cancel;
mod config;
mod driver;

pub use cancel::CancelToken;
pub use config::RenderConfig;
pub use driver::render;
