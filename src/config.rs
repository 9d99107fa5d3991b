//! Application constants and default configuration.

use chrono::Duration;

use crate::models::ModelTierConfig;

/// Application-level constants
pub const APP_NAME: &str = "LabSight";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Analyses allowed per session within one rolling window.
pub const ANALYSIS_DAILY_LIMIT: u32 = 15;

/// Length of the rolling quota window, in hours.
pub const RATE_LIMIT_WINDOW_HOURS: i64 = 24;

/// Fallback steps after the first tier attempt. With the default tier
/// table this allows four total attempts per dispatch.
pub const MAX_DISPATCH_RETRIES: usize = 3;

/// Pause before moving to the next tier when a provider reports rate
/// limiting or quota exhaustion.
pub const RATE_LIMIT_BACKOFF_SECS: u64 = 2;

const DEFAULT_MAX_TOKENS: u32 = 2000;
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// The rolling quota window as a `chrono` duration.
pub fn rate_limit_window() -> Duration {
    Duration::hours(RATE_LIMIT_WINDOW_HOURS)
}

/// Default tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> String {
    format!("{}=info", env!("CARGO_PKG_NAME"))
}

/// Priority-ordered model tiers for the default deployment.
///
/// All four tiers run on the Groq provider; the ladder steps down from
/// the strongest available model to progressively smaller ones.
pub fn default_model_tiers() -> Vec<ModelTierConfig> {
    vec![
        ModelTierConfig {
            rank: 0,
            provider: "groq".to_string(),
            model: "meta-llama/llama-4-maverick-17b-128e-instruct".to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        },
        ModelTierConfig {
            rank: 1,
            provider: "groq".to_string(),
            model: "llama-3.3-70b-versatile".to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        },
        ModelTierConfig {
            rank: 2,
            provider: "groq".to_string(),
            model: "llama-3.1-8b-instant".to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        },
        ModelTierConfig {
            rank: 3,
            provider: "groq".to_string(),
            model: "llama3-70b-8192".to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        },
    ]
}
