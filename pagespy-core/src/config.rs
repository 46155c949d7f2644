//! Page configuration
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_PAGE_DATA: &str = include_str!("../../pagespy-web/static/page.json");

/// Static description of the page the enhancement layer decorates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Known section keys in page order.
    pub sections: Vec<String>,
    /// Section whose position drives the header auto-switch.
    pub trigger_section: String,
    /// Fraction of the viewport height used as the activation line.
    pub trigger_ratio: f64,
    /// Directory the section fragments are fetched from.
    pub fragment_dir: String,
    /// Preference key holding the theme.
    pub theme_key: String,
    /// Pixel extent of the scroll indicator marker.
    pub marker_size: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            sections: [
                "overview",
                "acquisition",
                "architecture",
                "transformation",
                "feature-engineering",
                "aggregation",
                "impact",
                "reproduction",
                "legal",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
            trigger_section: "transformation".to_string(),
            trigger_ratio: 0.5,
            fragment_dir: "sections".to_string(),
            theme_key: "theme".to_string(),
            marker_size: crate::indicator::MARKER_SIZE,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("trigger ratio must be in (0, 1] (got {0})")]
    TriggerRatio(f64),
    #[error("marker size must not be negative (got {0})")]
    MarkerSize(f64),
    #[error("theme key must not be empty")]
    EmptyThemeKey,
}

impl PageConfig {
    /// Parse and validate a configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a value is out of range.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_PAGE_DATA).unwrap_or_default()
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range field encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trigger_ratio.is_nan() || self.trigger_ratio <= 0.0 || self.trigger_ratio > 1.0 {
            return Err(ConfigError::TriggerRatio(self.trigger_ratio));
        }
        if self.marker_size.is_nan() || self.marker_size < 0.0 {
            return Err(ConfigError::MarkerSize(self.marker_size));
        }
        if self.theme_key.trim().is_empty() {
            return Err(ConfigError::EmptyThemeKey);
        }
        Ok(())
    }
}
