//! Bounded in-context-learning memory.
//!
//! Maps (health indicator, patient profile) to recent analysis snippets.
//! Each bucket is a FIFO queue capped at three snippets, oldest out
//! first. Updated only after successful analyses; queried to enrich
//! future prompts.

use std::collections::{BTreeMap, VecDeque};

use crate::models::AnalysisRequest;

/// Fixed vocabulary of lab-test names tracked across analyses.
pub const KEY_INDICATORS: [&str; 10] = [
    "hemoglobin",
    "glucose",
    "cholesterol",
    "triglycerides",
    "hdl",
    "ldl",
    "wbc",
    "rbc",
    "platelet",
    "creatinine",
];

/// Snippets retained per (indicator, profile) bucket.
const SNIPPETS_PER_PROFILE: usize = 3;

/// Context lines emitted per prompt. Truncation is a literal prefix cut:
/// current-profile lines are prioritized by construction order, not by
/// any relevance ranking.
const CONTEXT_LINE_BUDGET: usize = 5;

/// Bounded associative memory over prior analyses.
///
/// Ordered maps keep context assembly deterministic across runs.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    entries: BTreeMap<String, BTreeMap<String, VecDeque<String>>>,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record learnings from a successful analysis.
    ///
    /// No-op when the request carries no report text. An indicator is
    /// recorded only when it appears (case-insensitive) in BOTH the
    /// report and the analysis; the stored snippet is the first analysis
    /// line mentioning it.
    pub fn update(&mut self, request: &AnalysisRequest, analysis: &str) {
        if request.report_text.is_empty() {
            return;
        }

        let report = request.report_text.to_lowercase();
        let analysis_lower = analysis.to_lowercase();
        let profile = request.patient_profile();

        for indicator in KEY_INDICATORS {
            if !report.contains(indicator) || !analysis_lower.contains(indicator) {
                continue;
            }
            let Some(line) = analysis
                .lines()
                .find(|l| l.to_lowercase().contains(indicator))
            else {
                continue;
            };

            let queue = self
                .entries
                .entry(indicator.to_string())
                .or_default()
                .entry(profile.clone())
                .or_default();
            if queue.len() >= SNIPPETS_PER_PROFILE {
                queue.pop_front();
            }
            queue.push_back(line.to_string());
            tracing::debug!(indicator, profile = %profile, "Knowledge base updated");
        }
    }

    /// Assemble prompt context for a request.
    ///
    /// For each vocabulary indicator present in the report with recorded
    /// snippets: the current patient's profile first, then every other
    /// profile, capped at five lines total. Empty string when nothing
    /// matched.
    pub fn build_context(&self, request: &AnalysisRequest) -> String {
        if self.entries.is_empty() {
            return String::new();
        }

        let report = request.report_text.to_lowercase();
        let profile = request.patient_profile();
        let mut lines: Vec<String> = Vec::new();

        for indicator in KEY_INDICATORS {
            let Some(profiles) = self.entries.get(indicator) else {
                continue;
            };
            if !report.contains(indicator) {
                continue;
            }

            if let Some(snippets) = profiles.get(&profile) {
                for snippet in snippets {
                    lines.push(format!(
                        "- {indicator} (similar patient profile): {snippet}"
                    ));
                }
            }
            for (other, snippets) in profiles {
                if other == &profile {
                    continue;
                }
                for snippet in snippets {
                    lines.push(format!("- {indicator} (other patient profile): {snippet}"));
                }
            }
        }

        lines.truncate(CONTEXT_LINE_BUDGET);
        lines.join("\n")
    }

    /// Snippets currently held for one (indicator, profile) bucket.
    pub fn snippets(&self, indicator: &str, profile: &str) -> Option<&VecDeque<String>> {
        self.entries.get(indicator)?.get(profile)
    }
}
