//! Session façade over the analysis core.
//!
//! Coordinates: rate check → preprocess → enrich → dispatch → record
//! usage + learn. Callers get a uniform [`DispatchResult`] back; no
//! error from the layers below crosses this boundary.

use chrono::Utc;

use crate::models::{AnalysisRequest, ChatTurn, DispatchResult, ModelPayload};
use crate::session::SessionContext;

use super::dispatch::ModelDispatcher;
use super::enrich::build_enhanced_prompt;
use super::rate_limit;
use super::AnalysisError;

/// Report-analysis agent for one user session.
///
/// Owns the dispatcher (and with it the provider clients, constructed
/// once at session start); operates on a caller-owned
/// [`SessionContext`]. One request runs start-to-finish before the next
/// is accepted.
pub struct AnalysisAgent {
    dispatcher: ModelDispatcher,
}

impl AnalysisAgent {
    pub fn new(dispatcher: ModelDispatcher) -> Self {
        Self { dispatcher }
    }

    /// Check the session quota without consuming it. The window-reset
    /// path may fire, but no quota is charged.
    pub fn check_rate_limit(&self, ctx: &mut SessionContext) -> Result<(), AnalysisError> {
        rate_limit::check(&mut ctx.rate, Utc::now()).map_err(|retry| {
            AnalysisError::RateLimitExceeded {
                hours: retry.hours,
                minutes: retry.minutes,
            }
        })
    }

    /// Analyze a report within the session's quota.
    ///
    /// With `check_only`, returns right after the quota check with no
    /// model call and no state mutation beyond the window-reset read.
    /// Prompt enrichment (knowledge base + session history) applies only
    /// when a non-empty `history` is supplied. Quota and knowledge are
    /// charged/updated only when dispatch succeeds; a failed analysis
    /// costs nothing.
    pub fn analyze(
        &self,
        ctx: &mut SessionContext,
        request: &AnalysisRequest,
        base_prompt: &str,
        history: Option<&[ChatTurn]>,
        check_only: bool,
    ) -> DispatchResult {
        if let Err(err) = self.check_rate_limit(ctx) {
            return DispatchResult::failed(err.to_string());
        }
        if check_only {
            return DispatchResult::allowed();
        }

        let payload = ModelPayload::from_request(request);

        let prompt = match history {
            Some(history) if !history.is_empty() => {
                build_enhanced_prompt(base_prompt, request, &ctx.knowledge, history)
            }
            _ => base_prompt.to_string(),
        };

        let result = self.dispatcher.dispatch(&payload, &prompt);

        if result.success {
            rate_limit::record_success(&mut ctx.rate);
            ctx.record_model_use(result.model_used.as_deref().unwrap_or("unknown"));
            ctx.knowledge
                .update(request, result.content.as_deref().unwrap_or_default());
            tracing::info!(
                session = %ctx.id,
                count = ctx.rate.count,
                model = result.model_used.as_deref().unwrap_or("unknown"),
                "Analysis recorded"
            );
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::models::{Gender, ModelTierConfig};
    use crate::provider::{ChatCompletion, ProviderError, ProviderRegistry};

    /// Mock client that records received prompts and returns a canned
    /// analysis.
    struct RecordingClient {
        response: String,
        calls: Arc<AtomicUsize>,
        prompts: Arc<Mutex<Vec<String>>>,
    }

    impl ChatCompletion for RecordingClient {
        fn complete(
            &self,
            _model: &str,
            system: &str,
            _user: &str,
            _temperature: f32,
            _max_tokens: u32,
        ) -> Result<String, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(system.to_string());
            Ok(self.response.clone())
        }
    }

    struct FailingClient;

    impl ChatCompletion for FailingClient {
        fn complete(
            &self,
            _model: &str,
            _system: &str,
            _user: &str,
            _temperature: f32,
            _max_tokens: u32,
        ) -> Result<String, ProviderError> {
            Err(ProviderError::Api {
                status: 500,
                body: "boom".to_string(),
            })
        }
    }

    fn tiers() -> Vec<ModelTierConfig> {
        vec![ModelTierConfig {
            rank: 0,
            provider: "groq".to_string(),
            model: "llama-3.1-8b-instant".to_string(),
            max_tokens: 2000,
            temperature: 0.7,
        }]
    }

    fn agent_with_response(
        response: &str,
    ) -> (AnalysisAgent, Arc<AtomicUsize>, Arc<Mutex<Vec<String>>>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let prompts = Arc::new(Mutex::new(Vec::new()));
        let mut registry = ProviderRegistry::new();
        registry.register(
            "groq",
            Box::new(RecordingClient {
                response: response.to_string(),
                calls: Arc::clone(&calls),
                prompts: Arc::clone(&prompts),
            }),
        );
        let agent = AnalysisAgent::new(ModelDispatcher::with_tiers(registry, tiers()));
        (agent, calls, prompts)
    }

    fn request() -> AnalysisRequest {
        AnalysisRequest {
            patient_name: "Jane Doe".to_string(),
            age: Some(45),
            gender: Some(Gender::Male),
            report_text: "Hemoglobin: 9.0 g/dL low".to_string(),
        }
    }

    // ── Success path: quota charged, usage counted, KB updated ──

    #[test]
    fn success_records_usage_and_learns() {
        let (agent, _, _) =
            agent_with_response("Hemoglobin is low at 9.0, consider further testing");
        let mut ctx = SessionContext::new();

        let result = agent.analyze(&mut ctx, &request(), "base prompt", None, false);

        assert!(result.success);
        assert_eq!(
            result.model_used.as_deref(),
            Some("groq/llama-3.1-8b-instant")
        );
        assert_eq!(ctx.rate.count, 1);
        assert_eq!(ctx.model_use_count("groq/llama-3.1-8b-instant"), 1);

        let snippets = ctx.knowledge.snippets("hemoglobin", "45-Male").unwrap();
        assert!(snippets[0].contains("Hemoglobin is low at 9.0"));
    }

    #[test]
    fn failed_dispatch_consumes_no_quota() {
        let mut registry = ProviderRegistry::new();
        registry.register("groq", Box::new(FailingClient));
        let agent = AnalysisAgent::new(ModelDispatcher::with_tiers(registry, tiers()));
        let mut ctx = SessionContext::new();

        let result = agent.analyze(&mut ctx, &request(), "base prompt", None, false);

        assert!(!result.success);
        assert_eq!(
            result.error.as_deref(),
            Some("All models failed after multiple retries")
        );
        assert_eq!(ctx.rate.count, 0);
        assert!(ctx.knowledge.is_empty());
        assert!(ctx.models_used.is_empty());
    }

    #[test]
    fn check_only_skips_dispatch_and_mutation() {
        let (agent, calls, _) = agent_with_response("unused");
        let mut ctx = SessionContext::new();

        let result = agent.analyze(&mut ctx, &request(), "base prompt", None, true);

        assert!(result.success);
        assert!(result.content.is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(ctx.rate.count, 0);
    }

    #[test]
    fn exhausted_quota_rejects_before_dispatch() {
        let (agent, calls, _) = agent_with_response("unused");
        let mut ctx = SessionContext::new();
        ctx.rate.count = ctx.rate.limit;

        let result = agent.analyze(&mut ctx, &request(), "base prompt", None, false);

        assert!(!result.success);
        let error = result.error.unwrap();
        assert!(error.starts_with("Daily limit reached. Reset in"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn quota_monotonic_and_rejects_after_limit() {
        let (agent, _, _) = agent_with_response("Hemoglobin is fine");
        let mut ctx = SessionContext::new();
        ctx.rate.limit = 3;

        for n in 1..=3 {
            let result = agent.analyze(&mut ctx, &request(), "base", None, false);
            assert!(result.success);
            assert_eq!(ctx.rate.count, n);
        }

        let rejected = agent.analyze(&mut ctx, &request(), "base", None, false);
        assert!(!rejected.success);
        assert_eq!(ctx.rate.count, 3);
    }

    #[test]
    fn enrichment_applies_only_with_history() {
        let (agent, _, prompts) = agent_with_response("Hemoglobin is low at 9.0");
        let mut ctx = SessionContext::new();

        // First analysis seeds the knowledge base; no history given, so
        // the base prompt goes out untouched.
        agent.analyze(&mut ctx, &request(), "base prompt", None, false);
        assert_eq!(prompts.lock().unwrap()[0], "base prompt");

        // Second analysis supplies history: knowledge base context and
        // the session section are both folded in.
        let history = vec![
            ChatTurn::user("Analyzing report for patient: Jane Doe"),
            ChatTurn::assistant("Hemoglobin is low at 9.0"),
        ];
        agent.analyze(&mut ctx, &request(), "base prompt", Some(&history), false);

        let sent = prompts.lock().unwrap()[1].clone();
        assert!(sent.starts_with("base prompt"));
        assert!(sent.contains("## Relevant Learning From Previous Analyses"));
        assert!(sent.contains("similar patient profile"));
        assert!(sent.contains("## Current Session History"));
        assert!(sent.contains("Analyzing report for patient: Jane Doe"));
    }

    #[test]
    fn transcript_history_feeds_enrichment() {
        use crate::transcript::{InMemoryTranscript, TranscriptStore};
        use crate::models::ChatRole;

        let (agent, _, prompts) = agent_with_response("Hemoglobin is low at 9.0");
        let mut ctx = SessionContext::new();
        let mut store = InMemoryTranscript::new();

        store.append(ctx.id, ChatRole::User, "Analyzing report for patient: Jane Doe");
        store.append(ctx.id, ChatRole::Assistant, "Hemoglobin is low at 9.0");

        let history = store.history(ctx.id);
        agent.analyze(&mut ctx, &request(), "base prompt", Some(&history), false);

        let sent = prompts.lock().unwrap()[0].clone();
        assert!(sent.contains("## Current Session History"));
        assert!(sent.contains("User: Analyzing report for patient: Jane Doe"));
        assert!(sent.contains("Assistant: Hemoglobin is low at 9.0"));
    }

    #[test]
    fn empty_history_means_no_enrichment() {
        let (agent, _, prompts) = agent_with_response("All values nominal");
        let mut ctx = SessionContext::new();

        agent.analyze(&mut ctx, &request(), "base prompt", Some(&[]), false);
        assert_eq!(prompts.lock().unwrap()[0], "base prompt");
    }
}
