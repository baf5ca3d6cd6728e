//! Engine configuration.

use pavise_core::CoverError;

/// How observer sample points are generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OriginSampling {
    /// One ray fan from the observer's center. Fast; the default.
    #[default]
    Center,
    /// One ray fan per grid-cell corner covered by the observer's
    /// footprint, deduplicated. Precise: any single clear corner
    /// sightline removes cover.
    Corners,
}

/// Options for one cover query, constructed per session or per query
/// and passed by reference — never a module-wide singleton.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    /// Grid cell size in pixels.
    pub grid_size: f64,
    /// Obstacle padding as a percentage of a grid cell. Body shapes
    /// grow outward and target sub-squares shrink inward by this much.
    pub padding_percent: f64,
    /// Observer sampling mode.
    pub origin_sampling: OriginSampling,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid_size: 100.0,
            padding_percent: 5.0,
            origin_sampling: OriginSampling::Center,
        }
    }
}

impl EngineConfig {
    /// Check the configuration is usable. Called by the query boundary;
    /// exposed so callers can validate settings at edit time.
    pub fn validate(&self) -> Result<(), CoverError> {
        if !self.grid_size.is_finite() || self.grid_size <= 0.0 {
            return Err(CoverError::InvalidConfig {
                reason: format!("grid_size must be finite and positive, got {}", self.grid_size),
            });
        }
        if !self.padding_percent.is_finite() || self.padding_percent < 0.0 {
            return Err(CoverError::InvalidConfig {
                reason: format!(
                    "padding_percent must be finite and non-negative, got {}",
                    self.padding_percent
                ),
            });
        }
        Ok(())
    }

    /// The padding amount in pixels.
    pub fn padding_px(&self) -> f64 {
        self.grid_size * self.padding_percent / 100.0
    }
}
