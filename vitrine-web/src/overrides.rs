//! Per-container configuration read from `data-carousel-config`.
//!
//! The attribute holds a JSON object whose fields override the defaults:
//!
//! ```json
//! {"gap": 16, "swipe_threshold": 40, "breakpoints": [{"min_width": 900, "slides_per_view": 4}]}
//! ```
//!
//! A page must never break because of a typo in markup, so anything that
//! fails to parse or validate falls back to [`CarouselConfig::default`].

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;
use vitrine::{Breakpoint, Breakpoints, CarouselConfig, ConfigError};

/// Why an override attribute was not applied.
#[derive(Debug, Error)]
pub enum OverrideError {
    /// The attribute is not a JSON object with known fields.
    #[error("invalid carousel config attribute: {0}")]
    Json(#[from] serde_json::Error),
    /// The merged configuration failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Fields that may be overridden; absent fields keep their defaults.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    /// Replacement breakpoint table.
    pub breakpoints: Option<Vec<Breakpoint>>,
    /// Replacement slide gap.
    pub gap: Option<f32>,
    /// Replacement swipe dead-zone.
    pub swipe_threshold: Option<f32>,
}

impl ConfigOverrides {
    /// Parses the attribute value.
    pub fn parse(raw: &str) -> Result<Self, OverrideError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Merges the overrides onto `base` and validates the result.
    pub fn apply(self, base: CarouselConfig) -> Result<CarouselConfig, OverrideError> {
        let mut config = base;
        if let Some(rows) = self.breakpoints {
            config = config.breakpoints(Breakpoints::new(rows));
        }
        if let Some(gap) = self.gap {
            config = config.gap(gap);
        }
        if let Some(threshold) = self.swipe_threshold {
            config = config.swipe_threshold(threshold);
        }
        config.validate()?;
        Ok(config)
    }
}

/// Resolves the configuration for one container from its attribute value.
pub fn resolve_config(raw: Option<&str>) -> CarouselConfig {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return CarouselConfig::default();
    };
    match ConfigOverrides::parse(raw).and_then(|overrides| overrides.apply(CarouselConfig::default()))
    {
        Ok(config) => config,
        Err(err) => {
            warn!(%err, "falling back to default carousel config");
            CarouselConfig::default()
        }
    }
}
