//! Transcript -> player [`Action`].
//!
//! The LLM gets one attempt. Anything that goes wrong on that path (no key,
//! HTTP failure, timeout, unparseable output) drops to the keyword heuristic,
//! so `interpret` always returns an action.

pub mod errors;
pub mod heuristic;
pub mod llm;
pub mod prompt;

pub use errors::InterpreterError;
pub use heuristic::{keyword_action, DEFAULT_PLAYLIST_NAME};
pub use llm::{LlmProvider, OpenAiClient};

use crate::models::{Action, ActionKind};
use std::sync::Arc;

pub struct IntentInterpreter {
    llm: Option<Arc<dyn LlmProvider>>,
}

impl IntentInterpreter {
    pub fn new(llm: Option<Arc<dyn LlmProvider>>) -> Self {
        Self { llm }
    }

    /// Heuristic only.
    pub fn offline() -> Self {
        Self { llm: None }
    }

    pub async fn interpret(&self, transcript: &str) -> Action {
        let input = transcript.trim();
        if input.is_empty() {
            return Action::new(ActionKind::Play);
        }

        match self.interpret_with_llm(input).await {
            Ok(action) => {
                log::debug!("LLM resolved '{}' to {}", input, action.action.as_str());
                action
            }
            Err(e) => {
                log::warn!("LLM unavailable, using fallback heuristic: {}", e);
                keyword_action(input)
            }
        }
    }

    async fn interpret_with_llm(&self, input: &str) -> Result<Action, InterpreterError> {
        let llm = self.llm.as_ref().ok_or_else(|| {
            InterpreterError::MissingCredential("no LLM provider configured".to_string())
        })?;

        let output = llm
            .complete(prompt::SYSTEM_PROMPT, input, prompt::TEMPERATURE)
            .await?;
        parse_action(&output)
    }
}

/// Parses the span from the first `{` to the last `}` of `output`.
pub fn parse_action(output: &str) -> Result<Action, InterpreterError> {
    let start = output.find('{');
    let end = output.rfind('}');

    match (start, end) {
        (Some(start), Some(end)) if start < end => {
            Ok(serde_json::from_str(&output[start..=end])?)
        }
        _ => Err(InterpreterError::MalformedResponse(format!(
            "no JSON object in '{}'",
            output
        ))),
    }
}
