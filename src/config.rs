//! Runtime configuration
//!
//! Holds the catalog endpoint and the fallback image used for shows without
//! artwork. The CLI fills this from its flags; library callers can use the
//! defaults.

/// Base URL of the public TVMaze API
pub const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com";

/// Image shown on a card when the show has no image of its own
pub const MISSING_IMAGE_URL: &str = "https://tinyurl.com/tv-missing";

/// Settings shared by the catalog client and the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root of the catalog API, with or without a trailing slash
    pub base_url: String,
    /// Substituted for absent show images at render time
    pub missing_image_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            missing_image_url: MISSING_IMAGE_URL.to_string(),
        }
    }
}

impl Config {
    /// Returns a copy of this configuration pointing at another catalog root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Returns a copy of this configuration with another fallback image
    pub fn with_missing_image_url(mut self, url: impl Into<String>) -> Self {
        self.missing_image_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://api.tvmaze.com");
        assert_eq!(config.missing_image_url, "https://tinyurl.com/tv-missing");
    }

    #[test]
    fn test_overrides() {
        let config = Config::default()
            .with_base_url("http://localhost:8080/")
            .with_missing_image_url("http://localhost/missing.png");
        assert_eq!(config.base_url, "http://localhost:8080/");
        assert_eq!(config.missing_image_url, "http://localhost/missing.png");
    }
}
