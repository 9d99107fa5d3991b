//! Tiered multi-provider fallback dispatch.
//!
//! Walks the configured tier list in rank order, one synchronous
//! completion attempt per tier, until a tier succeeds or the attempt
//! budget runs out. Provider failures never propagate raw: each one is
//! logged and converted into a fallback to the next tier.

use std::thread;
use std::time::Duration;

use crate::config;
use crate::models::{DispatchResult, ModelPayload, ModelTierConfig};
use crate::provider::ProviderRegistry;

use super::AnalysisError;

/// Priority-ordered fallback dispatcher over the configured model list.
pub struct ModelDispatcher {
    registry: ProviderRegistry,
    tiers: Vec<ModelTierConfig>,
    max_retries: usize,
    backoff: Duration,
}

impl ModelDispatcher {
    /// Dispatcher over the default tier table.
    pub fn new(registry: ProviderRegistry) -> Self {
        Self::with_tiers(registry, config::default_model_tiers())
    }

    /// Dispatcher over a custom tier table. Tiers are sorted by rank on
    /// construction and never reordered afterwards.
    pub fn with_tiers(registry: ProviderRegistry, mut tiers: Vec<ModelTierConfig>) -> Self {
        tiers.sort_by_key(|t| t.rank);
        Self {
            registry,
            tiers,
            max_retries: config::MAX_DISPATCH_RETRIES,
            backoff: Duration::from_secs(config::RATE_LIMIT_BACKOFF_SECS),
        }
    }

    /// Override the rate-limit backoff pause. Used by tests; production
    /// dispatch keeps the configured default.
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn tiers(&self) -> &[ModelTierConfig] {
        &self.tiers
    }

    /// Attempt each tier in rank order until one succeeds.
    ///
    /// A tier whose provider has no registered client is skipped but
    /// still consumes one attempt. At most `max_retries + 1` attempts
    /// are made per call; no tier is tried twice.
    pub fn dispatch(&self, payload: &ModelPayload, prompt: &str) -> DispatchResult {
        let user_message = match serde_json::to_string(payload) {
            Ok(json) => json,
            Err(err) => {
                tracing::error!(error = %err, "Failed to encode request payload");
                return DispatchResult::failed(AnalysisError::AllTiersExhausted.to_string());
            }
        };

        for tier in self.tiers.iter().take(self.max_retries + 1) {
            let Some(client) = self.registry.get(&tier.provider) else {
                tracing::error!(
                    "{}",
                    AnalysisError::ProviderUnavailable(tier.provider.clone())
                );
                continue;
            };

            tracing::info!(
                provider = %tier.provider,
                model = %tier.model,
                "Attempting generation"
            );

            match client.complete(
                &tier.model,
                prompt,
                &user_message,
                tier.temperature,
                tier.max_tokens,
            ) {
                Ok(content) => {
                    return DispatchResult::ok(content, tier.qualified_name());
                }
                Err(err) => {
                    let message = err.to_string();
                    tracing::warn!(model = %tier.model, error = %message, "Model attempt failed");
                    if looks_rate_limited(&message) {
                        thread::sleep(self.backoff);
                    }
                }
            }
        }

        DispatchResult::failed(AnalysisError::AllTiersExhausted.to_string())
    }
}

/// Provider errors mentioning rate limits or quota exhaustion earn a
/// short pause before the next tier.
fn looks_rate_limited(message: &str) -> bool {
    let message = message.to_lowercase();
    message.contains("rate limit") || message.contains("quota")
}
