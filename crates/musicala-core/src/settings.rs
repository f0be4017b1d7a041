//! Optional page-embedded settings document.
//!
//! A page may embed `{"config": {...}, "spots": [...]}` to override the
//! built-in catalog and defaults without rebuilding the widget. Both keys
//! are optional.

use serde::Deserialize;

use crate::catalog::{Catalog, CatalogError, Spot};
use crate::config::TourConfig;

/// Errors produced while reading an embedded settings document.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The document is not valid JSON or has the wrong shape.
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document's spot list is not a valid catalog.
    #[error("invalid spot list: {0}")]
    Catalog(#[from] CatalogError),

    /// The swipe threshold is not a positive, finite distance.
    #[error("swipe threshold must be a positive number of pixels, got {0}")]
    SwipeThreshold(f64),
}

/// Raw shape of the settings document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawSettings {
    config: TourConfig,
    spots: Option<Vec<Spot>>,
}

/// Validated catalog and configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TourSettings {
    /// Spots to show.
    pub catalog: Catalog,
    /// Behaviour tuning.
    pub config: TourConfig,
}

impl TourSettings {
    /// Parse and validate a settings document.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Json`] for malformed JSON and
    /// [`SettingsError::Catalog`] for an empty or duplicated spot list,
    /// and [`SettingsError::SwipeThreshold`] for a threshold that would
    /// turn taps into swipes.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let raw: RawSettings = serde_json::from_str(json)?;
        let threshold = raw.config.swipe_threshold_px;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(SettingsError::SwipeThreshold(threshold));
        }
        let catalog = match raw.spots {
            Some(spots) => Catalog::new(spots)?,
            None => Catalog::builtin(),
        };
        Ok(Self {
            catalog,
            config: raw.config,
        })
    }

    /// Parse `json` if present, falling back to the built-in settings
    /// (with a warning) when it is absent or invalid.
    #[must_use]
    pub fn from_optional_json(json: Option<&str>) -> Self {
        let Some(json) = json.filter(|j| !j.trim().is_empty()) else {
            return Self::default();
        };
        Self::from_json(json).unwrap_or_else(|e| {
            log::warn!("ignoring embedded tour settings: {e}");
            Self::default()
        })
    }
}
