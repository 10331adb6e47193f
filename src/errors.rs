use serde::Serialize;
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::interpreter::InterpreterError;

/// Startup failures surfaced by the binary.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// A catalog HTTP client could not be built
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// The LLM HTTP client could not be built
    #[error("Interpreter error: {0}")]
    Interpreter(String),
}

impl From<CatalogError> for AppError {
    fn from(e: CatalogError) -> Self {
        AppError::Catalog(e.to_string())
    }
}

impl From<InterpreterError> for AppError {
    fn from(e: InterpreterError) -> Self {
        AppError::Interpreter(e.to_string())
    }
}
