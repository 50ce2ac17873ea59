//! Application configuration baked in at build time.
//!
//! WASM has no runtime environment, so the API location is read from the
//! `GEOPANEL_API_URL` compile-time variable instead.

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Origin of the Spatial Data API, without a trailing slash.
    ///
    /// Empty means requests stay same-origin relative.
    pub api_base_url: String,
}

impl Config {
    /// Read configuration from compile-time environment variables.
    pub fn from_build_env() -> Self {
        Self::from_base_url(option_env!("GEOPANEL_API_URL").unwrap_or(""))
    }

    fn from_base_url(raw: &str) -> Self {
        Self {
            api_base_url: raw.trim_end_matches('/').to_string(),
        }
    }

    /// Check if requests go to a dedicated API origin
    pub fn has_dedicated_api(&self) -> bool {
        !self.api_base_url.is_empty()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_build_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = Config::from_base_url("http://localhost:8000/");
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert!(config.has_dedicated_api());
    }

    #[test]
    fn empty_base_means_same_origin() {
        let config = Config::from_base_url("");
        assert_eq!(config.api_base_url, "");
        assert!(!config.has_dedicated_api());
    }
}
