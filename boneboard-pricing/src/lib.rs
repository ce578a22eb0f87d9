pub mod builder;
pub mod config;
pub mod constants;
pub mod service;
pub mod source;

// Re-export of some types so they're publicly accessible through the SDK.
pub use boneboard_common::funding;
pub use boneboard_common::{Currency, PlatformPricing, PlatformSettings, PricingUpdate};
pub use builder::{BuilderError, PlatformServiceBuilder};
pub use config::ApiConfig;
pub use service::PlatformService;
pub use source::{FetchError, HttpPricingSource, PricingSource};
