use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;

use boneboard_common::{PlatformPricing, PlatformSettings, PricingUpdate};

use crate::source::{FetchError, PricingSource};

/// Single entry of the pricing cache.
const PRICING_CACHE_KEY: &str = "platform_pricing";

/// Cached access to the platform pricing.
///
/// A fetched pricing is served for `cache_duration` without hitting the
/// source again. When the source can't be reached or answers garbage,
/// [`PlatformPricing::FALLBACK`] is served instead, even if an expired pricing
/// was fetched earlier.
///
/// The service is cheap to share behind an [`Arc`]. Concurrent callers on an
/// empty cache may each fetch the source, the last one to complete wins.
#[derive(Clone)]
pub struct PlatformService {
    pub(crate) source: Arc<dyn PricingSource>,
    pub(crate) cache: Cache<&'static str, PlatformPricing>,
    pub(crate) cache_duration: Duration,
}

impl fmt::Debug for PlatformService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlatformService")
            .field("cached_entries", &self.cache.entry_count())
            .field("cache_duration", &self.cache_duration)
            .finish_non_exhaustive()
    }
}

impl PlatformService {
    pub(crate) fn new(source: Arc<dyn PricingSource>, cache_duration: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(1)
            .time_to_live(cache_duration)
            .build();

        Self {
            source,
            cache,
            cache_duration,
        }
    }

    /// Returns the current platform pricing. Never fails: errors are logged and
    /// replaced by the fallback pricing.
    #[tracing::instrument(skip(self))]
    pub async fn get_pricing(&self) -> PlatformPricing {
        if let Some(pricing) = self.cache.get(PRICING_CACHE_KEY).await {
            tracing::debug!("Found a cached platform pricing - using it.");
            return pricing;
        }
        tracing::debug!("No fresh platform pricing cached, fetching the settings endpoint.");

        match self.source.fetch_pricing().await {
            Ok(pricing) => {
                self.cache.insert(PRICING_CACHE_KEY, pricing).await;
                pricing
            }
            Err(e) => {
                tracing::error!("Error fetching platform pricing: {e}");
                PlatformPricing::FALLBACK
            }
        }
    }

    /// Drops the cached pricing so the next [`Self::get_pricing`] call fetches it.
    pub async fn clear_cache(&self) {
        self.cache.invalidate(PRICING_CACHE_KEY).await;
    }

    /// Uncached read of the full settings, metadata included.
    pub async fn fetch_settings(&self) -> Result<PlatformSettings, FetchError> {
        self.source.fetch_settings().await
    }

    /// Updates the platform pricing on behalf of `admin_wallet`.
    ///
    /// Unlike [`Self::get_pricing`] failures are returned to the caller.
    /// On success the cache is cleared so the next read sees the new pricing.
    #[tracing::instrument(skip(self, pricing))]
    pub async fn update_pricing(
        &self,
        admin_wallet: &str,
        pricing: PlatformPricing,
    ) -> Result<PlatformSettings, FetchError> {
        let update = PricingUpdate::new(pricing, admin_wallet);
        let settings = self
            .source
            .update_settings(admin_wallet, &update)
            .await
            .inspect_err(|e| tracing::error!("Error updating platform pricing: {e}"))?;

        self.clear_cache().await;
        tracing::info!("Platform pricing updated by {admin_wallet}.");
        Ok(settings)
    }

    pub const fn cache_duration(&self) -> Duration {
        self.cache_duration
    }
}
