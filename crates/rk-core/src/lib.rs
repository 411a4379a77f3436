//! Foundational types for separable image resampling.
//!
//! ## Pixels
//! [`Pixel`] stores `N` channels of a [`Channel`] depth (`u8`, `u16`, `f32`).
//! Every depth with `N` channels accumulates into the same [`FloatPixel`],
//! whose channels are normalized so that `1.0` is full scale. Alpha, when
//! present, is the last channel.
//!
//! ## Image Views and Stride
//! Images use element stride (not byte stride). `stride` is the distance, in
//! elements, between adjacent row starts and may be greater than `width`.
//! Views are `Copy` and stateless, so each worker thread can hold its own.
//!
//! ## Boundary Policies
//! [`BoundaryPolicy`] decides what a tap outside the image reads: black,
//! transparent, a replicated edge pixel, or a reflection about the edge.
//!
//! ## Coordinates
//! Integer coordinates refer to pixel centers. The anchor of a query point is
//! its floor on both axes.

mod border;
mod error;
mod geom;
mod image;
mod pixel;

pub use border::BoundaryPolicy;
pub use error::Error;
pub use geom::{Point2f, Point2i, Vec2f};
pub use image::{Image, ImageAccess, ImageView};
pub use pixel::{
    Accumulator, Channel, FloatPixel, Gray8, Gray16, Gray32F, Pixel, PixelValue, Rgba8, Rgba16,
    Rgba32F, alpha_index,
};
