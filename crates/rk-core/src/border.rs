use core::fmt;
use core::str::FromStr;

use crate::Error;
use crate::pixel::PixelValue;

/// What a tap outside `[0, extent)` reads, on either axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum BoundaryPolicy {
    #[default]
    Black,
    Transparent,
    EdgeCopy,
    /// Reflects about the edge pixel without repeating it (`c' = 2*edge - c`).
    Mirror,
}

impl BoundaryPolicy {
    pub const ALL: [Self; 4] = [Self::Black, Self::Transparent, Self::EdgeCopy, Self::Mirror];

    pub fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Transparent => "transparent",
            Self::EdgeCopy => "edge-copy",
            Self::Mirror => "mirror",
        }
    }

    /// `None` for the constant fills and for an empty axis.
    pub fn source_index(self, i: isize, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        match self {
            Self::Black | Self::Transparent => None,
            Self::EdgeCopy => Some(clamp_index(i, len)),
            Self::Mirror => Some(reflect_index(i, len)),
        }
    }

    /// Resolves the tap at `coord`, which lies outside `[0, extent)`.
    ///
    /// `neighbor` is the already resolved tap one step closer to the window
    /// center, or `None` for the center tap itself. Under `EdgeCopy` it is
    /// repeated as-is: every out-of-range tap on one side shares the clamped
    /// source position, so only the first one needs `fetch`.
    ///
    /// Panics if `extent == 0` under `EdgeCopy` or `Mirror`.
    pub fn resolve<T: PixelValue>(
        self,
        coord: isize,
        extent: usize,
        neighbor: Option<T>,
        fetch: impl FnOnce(usize) -> T,
    ) -> T {
        match self {
            Self::Black => T::black(),
            Self::Transparent => T::transparent(),
            Self::EdgeCopy | Self::Mirror => match (self, neighbor) {
                (Self::EdgeCopy, Some(prev)) => prev,
                _ => match self.source_index(coord, extent) {
                    Some(i) => fetch(i),
                    None => panic!("cannot read the edge of an empty axis"),
                },
            },
        }
    }
}

impl fmt::Display for BoundaryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoundaryPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "black" => Ok(Self::Black),
            "transparent" => Ok(Self::Transparent),
            "edge-copy" | "copy" | "clamp" => Ok(Self::EdgeCopy),
            "mirror" | "reflect" => Ok(Self::Mirror),
            other => Err(Error::invalid_config(format!(
                "unknown boundary policy '{other}'"
            ))),
        }
    }
}

#[inline]
fn clamp_index(i: isize, len: usize) -> usize {
    if i < 0 { 0 } else { (i as usize).min(len - 1) }
}

#[inline]
fn reflect_index(i: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }

    let period = (2 * len - 2) as isize;
    let r = i.rem_euclid(period) as usize;
    if r < len { r } else { (2 * len - 2) - r }
}
