#![allow(dead_code)]

pub mod mocks;

use httpmock::MockServer;

use boneboard_pricing::{ApiConfig, Currency, PlatformPricing};

pub fn api_config(boneboard_api: &MockServer) -> ApiConfig {
    ApiConfig::new(format!("http://{}", boneboard_api.address()))
}

/// Pricing matching [`mocks::settings_data`].
pub const fn admin_pricing() -> PlatformPricing {
    PlatformPricing {
        project_listing_fee: 40.0,
        job_listing_fee: 20.0,
        project_listing_currency: Currency::Ada,
        job_listing_currency: Currency::Bone,
    }
}
