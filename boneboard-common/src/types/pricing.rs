use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Currency;

pub const DEFAULT_PROJECT_LISTING_FEE: f64 = 50.0;
pub const DEFAULT_JOB_LISTING_FEE: f64 = 25.0;
pub const DEFAULT_PROJECT_LISTING_CURRENCY: Currency = Currency::Bone;
pub const DEFAULT_JOB_LISTING_CURRENCY: Currency = Currency::Ada;

/// Listing fees charged by the platform.
///
/// Serialized with the camelCase field names used by the settings endpoint,
/// e.g. `{"projectListingFee": 50, "jobListingFee": 25, ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformPricing {
    pub project_listing_fee: f64,
    pub job_listing_fee: f64,
    pub project_listing_currency: Currency,
    pub job_listing_currency: Currency,
}

impl PlatformPricing {
    /// Hard-coded pricing served when the settings endpoint can't be reached.
    pub const FALLBACK: Self = Self {
        project_listing_fee: DEFAULT_PROJECT_LISTING_FEE,
        job_listing_fee: DEFAULT_JOB_LISTING_FEE,
        project_listing_currency: DEFAULT_PROJECT_LISTING_CURRENCY,
        job_listing_currency: DEFAULT_JOB_LISTING_CURRENCY,
    };
}

impl Default for PlatformPricing {
    fn default() -> Self {
        Self::FALLBACK
    }
}

/// Full payload of the platform settings endpoint: the pricing plus who
/// changed it last and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSettings {
    #[serde(flatten)]
    pub pricing: PlatformPricing,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

impl PlatformSettings {
    pub const fn pricing(&self) -> PlatformPricing {
        self.pricing
    }
}

impl From<PlatformSettings> for PlatformPricing {
    fn from(settings: PlatformSettings) -> Self {
        settings.pricing
    }
}

/// Body of an admin pricing update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingUpdate {
    #[serde(flatten)]
    pub pricing: PlatformPricing,
    pub updated_by: String,
}

impl PricingUpdate {
    pub fn new(pricing: PlatformPricing, updated_by: impl Into<String>) -> Self {
        Self {
            pricing,
            updated_by: updated_by.into(),
        }
    }
}
