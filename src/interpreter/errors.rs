use thiserror::Error;

/// Why the LLM path could not produce an action. Always recovered by the
/// keyword heuristic.
#[derive(Debug, Error)]
pub enum InterpreterError {
    #[error("LLM credential missing: {0}")]
    MissingCredential(String),

    /// Provider answered with an error status
    #[error("LLM provider error: {0}")]
    Provider(String),

    /// Connection failure or timeout
    #[error("Network error: {0}")]
    Network(String),

    /// No JSON object, bad JSON, or an unknown action shape
    #[error("Malformed LLM response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for InterpreterError {
    fn from(e: reqwest::Error) -> Self {
        InterpreterError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for InterpreterError {
    fn from(e: serde_json::Error) -> Self {
        InterpreterError::MalformedResponse(e.to_string())
    }
}
