use crate::carousel::DEFAULT_SWIPE_THRESHOLD;
use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Environment variable that overrides [`CatalogConfig::source`]
pub const SOURCE_ENV: &str = "CATALOG_SOURCE";

/// Configuration for the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct CatalogConfig {
    pub site: SiteConfig,
    pub carousel: CarouselConfig,
    /// File path or http(s) URL of the listing snapshot
    pub source: Option<String>,
}

/// Public identity of the agency, used in share links
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    /// Base URL listing links are built on, without a trailing slash
    pub url: String,
    /// WhatsApp number in international format, digits only
    pub whatsapp: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Catálogo de Imóveis".to_string(),
            url: "http://localhost:3000".to_string(),
            whatsapp: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CarouselConfig {
    pub swipe_threshold: f64,
    /// Warm neighbouring photos while browsing
    pub prefetch: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            prefetch: true,
        }
    }
}

impl CatalogConfig {
    /// Load configuration from a JSON file, or defaults when no path is given
    ///
    /// `CATALOG_SOURCE` in the environment takes precedence over the file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                debug!("Loading config from {}", path.display());
                let body = std::fs::read_to_string(path)?;
                serde_json::from_str(&body).map_err(|e| {
                    CatalogError::Config(format!("{}: {}", path.display(), e))
                })?
            }
            None => Self::default(),
        };

        if let Ok(source) = std::env::var(SOURCE_ENV) {
            if !source.trim().is_empty() {
                config.source = Some(source);
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let threshold = self.carousel.swipe_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(CatalogError::Config(format!(
                "carousel.swipe_threshold must be a non-negative number, got {}",
                threshold
            )));
        }
        Ok(())
    }
}
