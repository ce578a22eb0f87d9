use std::time::Duration;

use dotenvy::dotenv;
use serde::Deserialize;
use url::Url;

use crate::constants::{
    DEFAULT_BASE_URL, ENV_PREFIX, PLATFORM_SETTINGS_ENDPOINT, PRICING_CACHE_TIME_TO_LIVE_IN_SECONDS,
};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Env(#[from] envy::Error),
    #[error("invalid base url `{url}`: {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },
}

/// Required fields to reach the BoneBoard API.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub cache_duration_secs: Option<u64>,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            cache_duration_secs: None,
            request_timeout_secs: None,
        }
    }

    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Loads the configuration from the `BONEBOARD_*` environment variables,
    /// reading a `.env` file first if there is one.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        let config: Self = envy::prefixed(ENV_PREFIX).from_env()?;
        config.validated()
    }

    /// Same as [`Self::from_env`] but reads the variables from `vars`.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config: Self = envy::prefixed(ENV_PREFIX).from_iter(vars)?;
        config.validated()
    }

    pub(crate) fn validated(self) -> Result<Self, ConfigError> {
        Url::parse(&self.base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            source,
        })?;
        Ok(self)
    }

    pub fn settings_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            PLATFORM_SETTINGS_ENDPOINT
        )
    }

    pub fn cache_duration(&self) -> Duration {
        Duration::from_secs(
            self.cache_duration_secs
                .unwrap_or(PRICING_CACHE_TIME_TO_LIVE_IN_SECONDS),
        )
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_default_api_config() {
        let config = ApiConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.cache_duration(), Duration::from_secs(300));
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn test_config_values() {
        let config = ApiConfig::from_vars(vars(&[
            ("BONEBOARD_BASE_URL", "https://boneboard.io/"),
            ("BONEBOARD_API_KEY", "secret"),
            ("BONEBOARD_CACHE_DURATION_SECS", "60"),
            ("BONEBOARD_REQUEST_TIMEOUT_SECS", "3"),
            ("UNRELATED", "ignored"),
        ]))
        .unwrap();

        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.cache_duration(), Duration::from_secs(60));
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(3)));
        assert_eq!(
            config.settings_url(),
            "https://boneboard.io/api/admin/settings"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ApiConfig::from_vars(vars(&[("BONEBOARD_BASE_URL", "not a url")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_invalid_cache_duration() {
        let err =
            ApiConfig::from_vars(vars(&[("BONEBOARD_CACHE_DURATION_SECS", "five")])).unwrap_err();
        assert!(matches!(err, ConfigError::Env(_)));
    }
}
