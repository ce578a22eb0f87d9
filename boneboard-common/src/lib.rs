pub mod errors;
pub mod funding;
pub mod telemetry;
pub mod types;

// Re-export the pricing types so SDK users don't have to know the module layout.
pub use types::Currency;
pub use types::pricing::{PlatformPricing, PlatformSettings, PricingUpdate};
