use std::time::Instant;

use rayon::prelude::*;
use rk_core::{BoundaryPolicy, Error, Image, ImageAccess, PixelValue, Point2f};
use rk_sample::{ColorConvert, Resampler};
use tracing::{debug, trace, warn};

use crate::cancel::CancelToken;
use crate::config::RenderConfig;

type Accum<A> = <<A as ImageAccess>::Pixel as PixelValue>::Accum;

/// Renders a `width` x `height` image by resampling `src` at `map(x, y)` for
/// every destination pixel.
///
/// Rows are split into bands of `config.tile_rows` and rendered in parallel.
/// `cancel` is checked before each band starts; once set, no further band
/// begins and the call returns [`Error::Cancelled`].
///
/// An empty source is an error under `EdgeCopy` and `Mirror`, which have no
/// edge pixel to read; the constant fills render it as all-fill.
#[tracing::instrument(
    skip(src, map, config, convert, cancel),
    fields(
        src_w = src.width(),
        src_h = src.height(),
        filter = %config.filter,
        policy = %config.policy,
    )
)]
pub fn render<A, C, M>(
    src: &A,
    width: usize,
    height: usize,
    map: M,
    config: &RenderConfig,
    convert: &C,
    cancel: &CancelToken,
) -> Result<Image<C::Output>, Error>
where
    A: ImageAccess + Sync + ?Sized,
    A::Pixel: PixelValue,
    C: ColorConvert<Accum<A>> + Sync,
    C::Output: PixelValue + Send,
    M: Fn(usize, usize) -> Point2f + Sync,
{
    config.validate()?;

    let reads_source = matches!(config.policy, BoundaryPolicy::EdgeCopy | BoundaryPolicy::Mirror);
    if reads_source && (src.width() == 0 || src.height() == 0) {
        return Err(Error::invalid_config(format!(
            "policy {} needs a non-empty source, got {}x{}",
            config.policy,
            src.width(),
            src.height()
        )));
    }

    if width == 0 || height == 0 {
        return Image::from_vec(width, height, Vec::new());
    }

    let start = Instant::now();
    let sampler = Resampler::new(config.filter, config.policy);
    let tile_rows = config.tile_rows;
    let bands = height.div_ceil(tile_rows);

    let mut out = Image::new_fill(width, height, <C::Output as PixelValue>::transparent());

    let result = out
        .data_mut()
        .par_chunks_mut(width.saturating_mul(tile_rows))
        .enumerate()
        .try_for_each(|(band, chunk)| {
            if cancel.is_cancelled() {
                return Err(Error::Cancelled);
            }

            let y0 = band * tile_rows;
            for (dy, row) in chunk.chunks_mut(width).enumerate() {
                let y = y0 + dy;
                for (x, px) in row.iter_mut().enumerate() {
                    *px = sampler.sample(src, map(x, y), convert);
                }
            }
            trace!(band, rows = chunk.len() / width, "band rendered");
            Ok(())
        });

    if let Err(err) = result {
        warn!(%err, bands, "render abandoned");
        return Err(err);
    }

    debug!(
        bands,
        elapsed_ms = start.elapsed().as_secs_f64() * 1e3,
        "render finished"
    );
    Ok(out)
}
