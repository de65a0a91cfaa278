//! Frontend configuration module
//!
//! Build-time configuration for the API location and UI timing knobs.

/// Frontend configuration for URLs and timing
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL of the backend REST API
    pub api_base_url: String,
    /// Delay before post-notification redirects fire, in milliseconds
    pub redirect_delay_ms: u32,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("GATEHOUSE_API_BASE_URL")
                .unwrap_or("/api")
                .to_string(),
            redirect_delay_ms: option_env!("GATEHOUSE_REDIRECT_DELAY_MS")
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(2_000),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the API base URL
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Get the redirect delay. The delay exists only so a visitor can read
    /// the outcome notification before the page changes.
    pub const fn redirect_delay_ms(&self) -> u32 {
        self.redirect_delay_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_config_default() {
        let config = FrontendConfig::default();
        assert!(!config.api_base_url.is_empty());
        assert!(config.api_base_url.starts_with('/') || config.api_base_url.starts_with("http"));
    }

    #[test]
    fn test_frontend_config_new() {
        let config = FrontendConfig::new();
        assert_eq!(config.api_base_url(), config.api_base_url);
    }

    #[test]
    fn test_redirect_delay_is_positive() {
        let config = FrontendConfig::new();
        assert!(config.redirect_delay_ms() > 0);
    }

    #[test]
    fn test_frontend_config_clone() {
        let config1 = FrontendConfig::new();
        let config2 = config1.clone();
        assert_eq!(config1.api_base_url(), config2.api_base_url());
        assert_eq!(config1.redirect_delay_ms(), config2.redirect_delay_ms());
    }
}
