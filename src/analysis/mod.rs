//! The model-invocation core: quota gating, prompt enrichment, tiered
//! dispatch, and post-success learning.

pub mod dispatch;
pub mod enrich;
pub mod knowledge;
pub mod orchestrator;
pub mod prompts;
pub mod rate_limit;

pub use dispatch::ModelDispatcher;
pub use knowledge::KnowledgeBase;
pub use orchestrator::AnalysisAgent;
pub use rate_limit::RateLimitState;

use thiserror::Error;

/// Failure modes inside the analysis core.
///
/// None of these cross the orchestrator boundary as errors: `analyze`
/// folds them into a uniform [`crate::models::DispatchResult`] whose
/// messages come from these `Display` impls.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Daily limit reached. Reset in {hours}h {minutes}m")]
    RateLimitExceeded { hours: i64, minutes: i64 },

    #[error("No client available for provider: {0}")]
    ProviderUnavailable(String),

    #[error("All models failed after multiple retries")]
    AllTiersExhausted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_message_shows_remaining_time() {
        let err = AnalysisError::RateLimitExceeded {
            hours: 1,
            minutes: 0,
        };
        assert_eq!(err.to_string(), "Daily limit reached. Reset in 1h 0m");
    }

    #[test]
    fn exhausted_message_is_provider_agnostic() {
        let msg = AnalysisError::AllTiersExhausted.to_string();
        assert_eq!(msg, "All models failed after multiple retries");
        assert!(!msg.contains("groq"));
    }
}
