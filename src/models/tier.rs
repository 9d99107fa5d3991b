use serde::{Deserialize, Serialize};

/// One configured model/provider option in a priority-ordered fallback
/// list. Static configuration, never mutated at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelTierConfig {
    /// Priority rank. 0 is tried first.
    pub rank: u8,
    /// Provider identifier used to look up a registered client.
    pub provider: String,
    /// Model id passed to the provider verbatim.
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl ModelTierConfig {
    /// `"<provider>/<model>"`, the identifier reported on success.
    pub fn qualified_name(&self) -> String {
        format!("{}/{}", self.provider, self.model)
    }
}

/// Terminal value of a dispatch call, surfaced to the UI layer verbatim.
///
/// Callers never need exception handling, only a `success` check.
/// `error` strings are plain language, safe for direct display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_used: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DispatchResult {
    /// A completed generation from the named model.
    pub fn ok(content: impl Into<String>, model_used: impl Into<String>) -> Self {
        Self {
            success: true,
            content: Some(content.into()),
            model_used: Some(model_used.into()),
            error: None,
        }
    }

    /// A terminal failure with a display-safe message.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            content: None,
            model_used: None,
            error: Some(error.into()),
        }
    }

    /// Quota check passed; no model was invoked.
    pub fn allowed() -> Self {
        Self {
            success: true,
            content: None,
            model_used: None,
            error: None,
        }
    }
}
