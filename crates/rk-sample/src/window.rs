use rk_core::{BoundaryPolicy, PixelValue};

/// Index of the tap that lines up with the anchor: `floor((W - 1) / 2)`.
#[inline]
pub fn middle_index(window_size: usize) -> usize {
    window_size.saturating_sub(1) / 2
}

/// Fills `window` with the taps around `anchor` along one axis.
///
/// `window[middle_index(W)]` is the anchor; lower indices are earlier
/// positions. Coordinates inside `[0, extent)` are read with `fetch`, the rest
/// go through `policy`, walking outward from the center so each out-of-range
/// tap can propagate its inner neighbor. Tap coordinates saturate, so anchors
/// near `isize::MIN`/`isize::MAX` resolve like any other far-outside anchor.
///
/// # Panics
/// Panics if `window` is empty.
pub fn gather_window<T: PixelValue>(
    anchor: isize,
    extent: usize,
    policy: BoundaryPolicy,
    window: &mut [T],
    mut fetch: impl FnMut(usize) -> T,
) {
    assert!(!window.is_empty(), "window must hold at least one tap");

    let in_range = |c: isize| c >= 0 && (c as usize) < extent;
    let m = middle_index(window.len());

    window[m] = if in_range(anchor) {
        fetch(anchor as usize)
    } else {
        policy.resolve(anchor, extent, None, &mut fetch)
    };

    for i in (0..m).rev() {
        let coord = anchor.saturating_sub((m - i) as isize);
        window[i] = if in_range(coord) {
            fetch(coord as usize)
        } else {
            policy.resolve(coord, extent, Some(window[i + 1]), &mut fetch)
        };
    }

    for i in m + 1..window.len() {
        let coord = anchor.saturating_add((i - m) as isize);
        window[i] = if in_range(coord) {
            fetch(coord as usize)
        } else {
            policy.resolve(coord, extent, Some(window[i - 1]), &mut fetch)
        };
    }
}

#[inline]
pub fn gather_row<T: PixelValue>(
    row: &[T],
    anchor: isize,
    policy: BoundaryPolicy,
    window: &mut [T],
) {
    gather_window(anchor, row.len(), policy, window, |x| row[x]);
}
