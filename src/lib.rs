//! LabSight: session-scoped medical report analysis core.
//!
//! A user uploads a report, an input adapter extracts the text, and this
//! crate turns it into a model-backed analysis: quota check, prompt
//! enrichment from prior learnings, tiered provider dispatch, and
//! post-success bookkeeping. Storage, PDF handling, and UI all live with
//! the embedder; the crate owns the invocation core only.

pub mod analysis;
pub mod config;
pub mod models;
pub mod provider;
pub mod sample;
pub mod session;
pub mod transcript;
pub mod validate;

use tracing_subscriber::EnvFilter;

/// Install a default tracing subscriber for embedders that do not bring
/// their own. Honors `RUST_LOG`; a no-op if a subscriber is already set.
pub fn init_tracing() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
    }
}
