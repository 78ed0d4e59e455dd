//! Site configuration.
//!
//! Everything that would differ between deployments of the page: brand,
//! document metadata, copyright line and desktop window geometry. Loaded
//! from an optional JSON file; any field left out keeps its default.
//!
//! ```json
//! {
//!   "brand": "VickreyChain",
//!   "meta": { "title": "Vickrey Auctions | Internet Computer" },
//!   "window": { "width": 1024.0 }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::content::BRAND;
use crate::error::{LandingError, LandingResult};

/// Document head metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub viewport: String,
    pub favicon: String,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: "Vickrey Auctions | Internet Computer".to_string(),
            description: "Decentralized Vickrey auctions on the Internet Computer blockchain"
                .to_string(),
            viewport: "width=device-width, initial-scale=1.0".to_string(),
            favicon: "/favicon.ico".to_string(),
        }
    }
}

/// Desktop window geometry in logical pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 900.0,
            resizable: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: String,
    pub meta: PageMeta,
    pub copyright_year: u16,
    pub window: WindowConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: BRAND.to_string(),
            meta: PageMeta::default(),
            copyright_year: 2025,
            window: WindowConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> LandingResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json(&raw)?;
        tracing::debug!(path = %path.display(), "Loaded site config");
        Ok(config)
    }

    /// Load `path` if given, otherwise return the defaults.
    pub fn load_or_default(path: Option<&Path>) -> LandingResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Parse and validate a JSON document.
    pub fn from_json(raw: &str) -> LandingResult<Self> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> LandingResult<()> {
        if self.brand.trim().is_empty() {
            return Err(LandingError::Config("brand must not be empty".to_string()));
        }
        if self.meta.title.trim().is_empty() {
            return Err(LandingError::Config("meta.title must not be empty".to_string()));
        }
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if !(usable(self.window.width) && usable(self.window.height)) {
            return Err(LandingError::Config(format!(
                "window size must be positive and finite, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        Ok(())
    }

    /// Footer line, e.g. "© 2025 VickreyChain. All rights reserved."
    pub fn copyright_notice(&self) -> String {
        format!(
            "\u{00A9} {} {}. All rights reserved.",
            self.copyright_year, self.brand
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_page() {
        let config = SiteConfig::default();
        assert_eq!(config.brand, "VickreyChain");
        assert_eq!(config.meta.title, "Vickrey Auctions | Internet Computer");
        assert_eq!(config.meta.favicon, "/favicon.ico");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn copyright_notice_format() {
        let config = SiteConfig::default();
        assert_eq!(
            config.copyright_notice(),
            "\u{00A9} 2025 VickreyChain. All rights reserved."
        );
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{ "window": { "width": 800.0 } }"#).unwrap();
        assert_eq!(config.window.width, 800.0);
        assert_eq!(config.window.height, 900.0);
        assert_eq!(config.brand, "VickreyChain");
    }

    #[test]
    fn rejects_empty_brand() {
        let err = SiteConfig::from_json(r#"{ "brand": "  " }"#).unwrap_err();
        assert!(matches!(err, LandingError::Config(_)));
    }

    #[test]
    fn rejects_zero_window() {
        let err = SiteConfig::from_json(r#"{ "window": { "height": 0.0 } }"#).unwrap_err();
        assert!(err.to_string().contains("window size"));
    }

    #[test]
    fn rejects_infinite_window() {
        let mut config = SiteConfig::default();
        config.window.width = f64::INFINITY;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("window size"));

        config.window.width = 800.0;
        config.window.height = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_bad_json() {
        let err = SiteConfig::from_json("{ brand").unwrap_err();
        assert!(matches!(err, LandingError::Json(_)));
    }

    #[test]
    fn load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site.json");
        std::fs::write(&path, r#"{ "copyright_year": 2026 }"#).unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.copyright_year, 2026);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = SiteConfig::load(temp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, LandingError::Io(_)));
    }

    #[test]
    fn load_or_default_without_path() {
        assert_eq!(SiteConfig::load_or_default(None).unwrap(), SiteConfig::default());
    }
}
