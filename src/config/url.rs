use serde::Deserialize;

/// URL shortening configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UrlConfig {
    /// Length of randomly generated short codes
    pub short_code_length: usize,

    /// Base URL for constructing short URLs (e.g., "http://localhost:5000")
    pub base_url: String,

    /// Maximum number of attempts to generate a unique short code
    pub short_code_max_attempts: u32,
}

impl UrlConfig {
    /// Validate URL configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.short_code_length < 4 || self.short_code_length > 16 {
            return Err("SHORT_CODE_LENGTH must be between 4 and 16".to_string());
        }

        if self.short_code_max_attempts < 1 || self.short_code_max_attempts > 100 {
            return Err("SHORT_CODE_MAX_ATTEMPTS must be between 1 and 100".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("BASE_URL must start with http:// or https://".to_string());
        }

        Ok(())
    }
}
