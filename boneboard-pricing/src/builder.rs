use std::sync::Arc;
use std::time::Duration;

use reqwest::{
    StatusCode,
    header::{HeaderMap, HeaderValue, InvalidHeaderValue},
};

use boneboard_common::PlatformPricing;

use crate::{
    config::{ApiConfig, ConfigError},
    constants::API_KEY_HEADER,
    service::PlatformService,
    source::{HttpPricingSource, PricingSource},
};

#[derive(thiserror::Error, Debug)]
pub enum BuilderError {
    #[error("HTTP request to the settings endpoint failed with status `{0}`")]
    HttpRequest(StatusCode),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error("unexpected health check response: `{0}`")]
    HealthCheck(String),
    #[error(transparent)]
    Header(#[from] InvalidHeaderValue),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Builder of the [`PlatformService`].
///
/// Settings left unset fall back to the [`ApiConfig`] values, then to the
/// crate defaults (5 minutes of cache, no request timeout).
#[derive(Default, Debug)]
pub struct PlatformServiceBuilder {
    cache_duration: Option<Duration>,
    request_timeout: Option<Duration>,
    check_api_health: bool,
}

impl PlatformServiceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_cache_duration(mut self, cache_duration: Duration) -> Self {
        self.cache_duration = Some(cache_duration);
        self
    }

    #[must_use]
    pub const fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = Some(request_timeout);
        self
    }

    /// Query the settings endpoint once while building to make sure it answers.
    #[must_use]
    pub const fn check_api_health(mut self) -> Self {
        self.check_api_health = true;
        self
    }

    pub async fn with_http(self, api_config: ApiConfig) -> Result<PlatformService, BuilderError> {
        let api_config = api_config.validated()?;
        let http_client = self.build_http_client(&api_config)?;
        let source = HttpPricingSource::new(http_client, api_config.settings_url());

        if self.check_api_health {
            Self::http_health_check(&source).await?;
        }

        let cache_duration = self
            .cache_duration
            .unwrap_or_else(|| api_config.cache_duration());
        Ok(PlatformService::new(Arc::new(source), cache_duration))
    }

    /// Builds the service on top of a custom [`PricingSource`].
    pub fn with_source<S>(self, source: S) -> PlatformService
    where
        S: PricingSource + 'static,
    {
        let cache_duration = self
            .cache_duration
            .unwrap_or_else(|| ApiConfig::default().cache_duration());
        PlatformService::new(Arc::new(source), cache_duration)
    }

    fn build_http_client(&self, api_config: &ApiConfig) -> Result<reqwest::Client, BuilderError> {
        let mut headers = HeaderMap::new();
        if let Some(api_key) = &api_config.api_key {
            headers.insert(API_KEY_HEADER, HeaderValue::from_str(api_key)?);
        }

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = self.request_timeout.or(api_config.request_timeout()) {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build()?)
    }

    async fn http_health_check(source: &HttpPricingSource) -> Result<(), BuilderError> {
        let response = source.http_client.get(source.settings_url()).send().await?;

        if !response.status().is_success() {
            return Err(BuilderError::HttpRequest(response.status()));
        }

        let body = response.text().await?;
        if serde_json::from_str::<PlatformPricing>(&body).is_err() {
            return Err(BuilderError::HealthCheck(body));
        }

        Ok(())
    }
}
