use rk_core::{BoundaryPolicy, Error};
use rk_sample::{FilterKernel, FilterKind};
use serde::{Deserialize, Serialize};

/// Settings for one render.
///
/// Deserializes from JSON such as
/// `{"filter": {"lanczos": {"lobes": 3}}, "policy": "edge-copy", "tile_rows": 32}`;
/// missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub filter: FilterKind,
    pub policy: BoundaryPolicy,
    /// Destination rows per band; a band is the unit of work and of
    /// cancellation.
    pub tile_rows: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            filter: FilterKind::default(),
            policy: BoundaryPolicy::default(),
            tile_rows: 16,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.tile_rows == 0 {
            return Err(Error::invalid_config("tile_rows must be > 0"));
        }
        self.filter.validate()?;

        let w = self.filter.window_size();
        if w < 2 || !w.is_multiple_of(2) {
            return Err(Error::invalid_config(format!(
                "filter {} has window size {w}; expected an even size >= 2",
                self.filter
            )));
        }
        Ok(())
    }
}
