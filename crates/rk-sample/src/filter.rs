//! Filter kernels producing per-axis weight vectors.
//!
//! Conventions:
//! - A kernel with window `W` covers taps at offsets `(1 - W/2)..=(W/2)` from
//!   the anchor; tap `i` sits at offset `i - middle_index(W)`.
//! - The distance of tap `i` from the query is `offset - frac`, where `frac`
//!   is the fractional part of the query coordinate on that axis.
//! - Weights are normalized to sum 1 whenever their raw sum is non-zero.

use core::f32::consts::PI;
use core::fmt;
use core::str::FromStr;

use rk_core::Error;

use crate::window::middle_index;

/// Maps a fractional offset to a weight vector.
pub trait FilterKernel {
    fn window_size(&self) -> usize;

    /// Writes `window_size()` weights for `frac` in `[0, 1)` into `out`.
    fn weights(&self, frac: f32, out: &mut [f32]);
}

fn fill_normalized(frac: f32, out: &mut [f32], shape: impl Fn(f32) -> f32) {
    let m = middle_index(out.len()) as f32;
    let mut sum = 0.0f32;
    for (i, w) in out.iter_mut().enumerate() {
        *w = shape(i as f32 - m - frac);
        sum += *w;
    }

    if sum != 0.0 {
        let inv = 1.0 / sum;
        for w in out.iter_mut() {
            *w *= inv;
        }
    }
}

fn check_len(kernel: &impl FilterKernel, out: &[f32]) {
    assert_eq!(
        out.len(),
        kernel.window_size(),
        "weight buffer must match the kernel window"
    );
}

/// Ties go to the later neighbor.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Nearest;

impl FilterKernel for Nearest {
    fn window_size(&self) -> usize {
        2
    }

    fn weights(&self, frac: f32, out: &mut [f32]) {
        check_len(self, out);
        fill_normalized(frac, out, |d| if d > -0.5 && d <= 0.5 { 1.0 } else { 0.0 });
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bilinear;

impl FilterKernel for Bilinear {
    fn window_size(&self) -> usize {
        2
    }

    fn weights(&self, frac: f32, out: &mut [f32]) {
        check_len(self, out);
        fill_normalized(frac, out, |d| (1.0 - d.abs()).max(0.0));
    }
}

/// Mitchell–Netravali cubic with parameters `(b, c)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bicubic {
    pub b: f32,
    pub c: f32,
}

impl Bicubic {
    pub const CATMULL_ROM: Self = Self { b: 0.0, c: 0.5 };
    pub const MITCHELL: Self = Self {
        b: 1.0 / 3.0,
        c: 1.0 / 3.0,
    };
    pub const B_SPLINE: Self = Self { b: 1.0, c: 0.0 };

    fn eval(&self, d: f32) -> f32 {
        let (b, c) = (self.b, self.c);
        let x = d.abs();
        let x2 = x * x;
        let x3 = x2 * x;
        if x < 1.0 {
            ((12.0 - 9.0 * b - 6.0 * c) * x3 + (-18.0 + 12.0 * b + 6.0 * c) * x2 + (6.0 - 2.0 * b))
                / 6.0
        } else if x < 2.0 {
            ((-b - 6.0 * c) * x3
                + (6.0 * b + 30.0 * c) * x2
                + (-12.0 * b - 48.0 * c) * x
                + (8.0 * b + 24.0 * c))
                / 6.0
        } else {
            0.0
        }
    }
}

impl FilterKernel for Bicubic {
    fn window_size(&self) -> usize {
        4
    }

    fn weights(&self, frac: f32, out: &mut [f32]) {
        check_len(self, out);
        fill_normalized(frac, out, |d| self.eval(d));
    }
}

/// Windowed sinc with `lobes` lobes per side; `W = 2 * lobes`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lanczos {
    pub lobes: usize,
}

fn sinc(x: f32) -> f32 {
    if x.abs() < 1e-6 {
        1.0
    } else {
        let px = PI * x;
        px.sin() / px
    }
}

impl FilterKernel for Lanczos {
    fn window_size(&self) -> usize {
        2 * self.lobes
    }

    fn weights(&self, frac: f32, out: &mut [f32]) {
        check_len(self, out);
        let a = self.lobes as f32;
        fill_normalized(frac, out, |d| {
            if d.abs() < a {
                sinc(d) * sinc(d / a)
            } else {
                0.0
            }
        });
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaussian {
    pub sigma: f32,
}

impl FilterKernel for Gaussian {
    fn window_size(&self) -> usize {
        4
    }

    fn weights(&self, frac: f32, out: &mut [f32]) {
        check_len(self, out);
        let two_sigma2 = 2.0 * self.sigma * self.sigma;
        fill_normalized(frac, out, |d| (-(d * d) / two_sigma2).exp());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum FilterKind {
    Nearest,
    Bilinear,
    #[default]
    CatmullRom,
    Mitchell,
    BSpline,
    Bicubic { b: f32, c: f32 },
    Lanczos { lobes: usize },
    Gaussian { sigma: f32 },
}

impl FilterKind {
    pub const MAX_LANCZOS_LOBES: usize = 8;

    pub fn validate(&self) -> Result<(), Error> {
        match *self {
            Self::Bicubic { b, c } if !(b.is_finite() && c.is_finite()) => Err(
                Error::invalid_config(format!("bicubic b and c must be finite, got {b}, {c}")),
            ),
            Self::Lanczos { lobes } if lobes == 0 || lobes > Self::MAX_LANCZOS_LOBES => {
                Err(Error::invalid_config(format!(
                    "lanczos lobes must be in 1..={}, got {lobes}",
                    Self::MAX_LANCZOS_LOBES
                )))
            }
            Self::Gaussian { sigma } if !(sigma.is_finite() && sigma > 0.0) => Err(
                Error::invalid_config(format!("gaussian sigma must be > 0, got {sigma}")),
            ),
            _ => Ok(()),
        }
    }
}

impl FilterKernel for FilterKind {
    fn window_size(&self) -> usize {
        match *self {
            Self::Nearest => Nearest.window_size(),
            Self::Bilinear => Bilinear.window_size(),
            Self::CatmullRom | Self::Mitchell | Self::BSpline | Self::Bicubic { .. } => 4,
            Self::Lanczos { lobes } => Lanczos { lobes }.window_size(),
            Self::Gaussian { sigma } => Gaussian { sigma }.window_size(),
        }
    }

    fn weights(&self, frac: f32, out: &mut [f32]) {
        match *self {
            Self::Nearest => Nearest.weights(frac, out),
            Self::Bilinear => Bilinear.weights(frac, out),
            Self::CatmullRom => Bicubic::CATMULL_ROM.weights(frac, out),
            Self::Mitchell => Bicubic::MITCHELL.weights(frac, out),
            Self::BSpline => Bicubic::B_SPLINE.weights(frac, out),
            Self::Bicubic { b, c } => Bicubic { b, c }.weights(frac, out),
            Self::Lanczos { lobes } => Lanczos { lobes }.weights(frac, out),
            Self::Gaussian { sigma } => Gaussian { sigma }.weights(frac, out),
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nearest => f.write_str("nearest"),
            Self::Bilinear => f.write_str("bilinear"),
            Self::CatmullRom => f.write_str("catmull-rom"),
            Self::Mitchell => f.write_str("mitchell"),
            Self::BSpline => f.write_str("bspline"),
            Self::Bicubic { b, c } => write!(f, "bicubic(b={b}, c={c})"),
            Self::Lanczos { lobes } => write!(f, "lanczos{lobes}"),
            Self::Gaussian { sigma } => write!(f, "gaussian(sigma={sigma})"),
        }
    }
}

impl FromStr for FilterKind {
    type Err = Error;

    /// Accepts the short names used on command lines, e.g. `bilinear`,
    /// `catmull-rom`, `lanczos3`, `gaussian`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "nearest" => Self::Nearest,
            "bilinear" | "linear" => Self::Bilinear,
            "catmull-rom" | "bicubic" | "cubic" => Self::CatmullRom,
            "mitchell" => Self::Mitchell,
            "bspline" | "b-spline" => Self::BSpline,
            "gaussian" => Self::Gaussian { sigma: 0.5 },
            other => {
                let lobes = other
                    .strip_prefix("lanczos")
                    .and_then(|n| n.parse::<usize>().ok())
                    .ok_or_else(|| Error::invalid_config(format!("unknown filter '{other}'")))?;
                Self::Lanczos { lobes }
            }
        };
        kind.validate()?;
        Ok(kind)
    }
}
