use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use boneboard_common::{PlatformPricing, PlatformSettings, PricingUpdate};

use crate::constants::WALLET_ADDRESS_HEADER;

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("could not reach the pricing endpoint: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("pricing endpoint answered with status `{status}`: {body}")]
    Response { status: StatusCode, body: String },
    #[error("malformed pricing payload: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("wallet is not allowed to update the platform settings: {0}")]
    Unauthorized(String),
}

/// Where the platform settings come from.
#[async_trait]
pub trait PricingSource: Send + Sync {
    async fn fetch_settings(&self) -> Result<PlatformSettings, FetchError>;

    /// Fetches only the listing fees, ignoring the settings metadata.
    async fn fetch_pricing(&self) -> Result<PlatformPricing, FetchError> {
        self.fetch_settings()
            .await
            .map(|settings| settings.pricing())
    }

    async fn update_settings(
        &self,
        admin_wallet: &str,
        update: &PricingUpdate,
    ) -> Result<PlatformSettings, FetchError>;
}

/// [`PricingSource`] backed by the platform settings HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpPricingSource {
    pub(crate) http_client: reqwest::Client,
    pub(crate) settings_url: String,
}

impl HttpPricingSource {
    pub const fn new(http_client: reqwest::Client, settings_url: String) -> Self {
        Self {
            http_client,
            settings_url,
        }
    }

    pub fn settings_url(&self) -> &str {
        &self.settings_url
    }

    async fn get<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        let response = self.http_client.get(&self.settings_url).send().await?;
        Self::parse_body(response).await
    }

    async fn parse_body<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
        let status = response.status();
        if status == StatusCode::FORBIDDEN {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Unauthorized(body));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Response { status, body });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl PricingSource for HttpPricingSource {
    async fn fetch_settings(&self) -> Result<PlatformSettings, FetchError> {
        self.get().await
    }

    async fn fetch_pricing(&self) -> Result<PlatformPricing, FetchError> {
        self.get().await
    }

    async fn update_settings(
        &self,
        admin_wallet: &str,
        update: &PricingUpdate,
    ) -> Result<PlatformSettings, FetchError> {
        let response = self
            .http_client
            .put(&self.settings_url)
            .header(WALLET_ADDRESS_HEADER, admin_wallet)
            .json(update)
            .send()
            .await?;
        Self::parse_body(response).await
    }
}
