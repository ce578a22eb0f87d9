/// Path of the platform settings endpoint, relative to the API base url.
pub const PLATFORM_SETTINGS_ENDPOINT: &str = "api/admin/settings";

/// Header carrying the admin wallet address on settings updates.
pub const WALLET_ADDRESS_HEADER: &str = "x-wallet-address";

/// Header carrying the API key, when one is configured.
pub const API_KEY_HEADER: &str = "x-api-key";

/// How long a fetched pricing is served before the endpoint is queried again.
pub const PRICING_CACHE_TIME_TO_LIVE_IN_SECONDS: u64 = 5 * 60; // 5 minutes

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Prefix of every environment variable read by [`crate::config::ApiConfig::from_env`].
pub const ENV_PREFIX: &str = "BONEBOARD_";
