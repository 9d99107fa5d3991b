//! Prompt enrichment: base instructions + knowledge-base context +
//! recent session exchanges.

use crate::models::{AnalysisRequest, ChatRole, ChatTurn};

use super::knowledge::KnowledgeBase;

/// Characters of one history message carried into the prompt.
const HISTORY_CHAR_BUDGET: usize = 200;

/// User/assistant pairs carried into the prompt.
const HISTORY_PAIR_BUDGET: usize = 2;

/// Compose the final system prompt.
///
/// Appends a learnings section when the knowledge base has context for
/// this report, and a session-history section when at least one
/// complete user/assistant pair is available. Returns the base prompt
/// unmodified when neither applies.
pub fn build_enhanced_prompt(
    base_prompt: &str,
    request: &AnalysisRequest,
    knowledge: &KnowledgeBase,
    history: &[ChatTurn],
) -> String {
    let mut prompt = base_prompt.to_string();

    if !request.report_text.is_empty() {
        let context = knowledge.build_context(request);
        if !context.is_empty() {
            prompt.push_str("\n\n## Relevant Learning From Previous Analyses\n");
            prompt.push_str(&context);
        }
    }

    let session = session_context(history);
    if !session.is_empty() {
        prompt.push_str("\n\n## Current Session History\n");
        prompt.push_str(&session);
    }

    prompt
}

/// Collect up to the two most recent complete user/assistant pairs,
/// truncated per message and re-ordered chronologically.
///
/// The scan walks backward two turns at a time; an adjacent pair whose
/// roles do not line up is skipped without aborting the scan.
fn session_context(history: &[ChatTurn]) -> String {
    if history.len() < 2 {
        return String::new();
    }

    let mut pairs: Vec<String> = Vec::new();
    let mut i = history.len() as isize - 1;
    while i >= 1 {
        let earlier = &history[(i - 1) as usize];
        let later = &history[i as usize];
        if earlier.role == ChatRole::User && later.role == ChatRole::Assistant {
            pairs.push(format!(
                "User: {}\nAssistant: {}",
                clip(&earlier.content),
                clip(&later.content)
            ));
            if pairs.len() >= HISTORY_PAIR_BUDGET {
                break;
            }
        }
        i -= 2;
    }

    pairs.reverse();
    pairs.join("\n\n")
}

/// Truncate to the history budget: 197 characters plus an ellipsis.
fn clip(text: &str) -> String {
    if text.chars().count() > HISTORY_CHAR_BUDGET {
        let head: String = text.chars().take(HISTORY_CHAR_BUDGET - 3).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}
