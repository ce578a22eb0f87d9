use std::time::Duration;

use httpmock::{Mock, prelude::*};
use serde_json::json;

pub const SETTINGS_PATH: &str = "/api/admin/settings";

pub async fn mock_settings(boneboard_api: &MockServer, body: serde_json::Value) -> Mock<'_> {
    boneboard_api
        .mock_async(|when, then| {
            when.method(GET).path(SETTINGS_PATH);
            then.status(200)
                .header("content-type", "application/json")
                .json_body(body);
        })
        .await
}

pub async fn mock_settings_status(boneboard_api: &MockServer, status: u16) -> Mock<'_> {
    boneboard_api
        .mock_async(|when, then| {
            when.method(GET).path(SETTINGS_PATH);
            then.status(status)
                .header("content-type", "application/json")
                .json_body(json!({ "error": "Internal server error" }));
        })
        .await
}

pub async fn mock_slow_settings(boneboard_api: &MockServer, delay: Duration) -> Mock<'_> {
    boneboard_api
        .mock_async(|when, then| {
            when.method(GET).path(SETTINGS_PATH);
            then.status(200)
                .delay(delay)
                .json_body(settings_data());
        })
        .await
}

pub async fn mock_update<'a>(
    boneboard_api: &'a MockServer,
    wallet: &str,
    request: serde_json::Value,
    status: u16,
    response: serde_json::Value,
) -> Mock<'a> {
    boneboard_api
        .mock_async(|when, then| {
            when.method(PUT)
                .path(SETTINGS_PATH)
                .header("x-wallet-address", wallet)
                .json_body(request);
            then.status(status)
                .header("content-type", "application/json")
                .json_body(response);
        })
        .await
}

/// Pricing set by an admin, different from the fallback one.
pub fn settings_data() -> serde_json::Value {
    json!({
        "projectListingFee": 40,
        "jobListingFee": 20,
        "projectListingCurrency": "ADA",
        "jobListingCurrency": "BONE",
        "lastUpdated": "2025-03-01T12:30:00.000Z",
        "updatedBy": "addr1q9l3t0hzcfdf3h9ewvz9x6pm9pm0swds3ghmazv97wcktl"
    })
}
