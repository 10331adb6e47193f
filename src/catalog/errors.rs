//! Typed errors for catalog lookups.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum CatalogError {
    /// The provider has no API key / token configured
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Non-2xx response from the provider
    #[error("HTTP error: {0}")]
    Http(String),

    /// Connection failure or timeout
    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    /// No provider in the chain could answer
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(e: reqwest::Error) -> Self {
        CatalogError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e.to_string())
    }
}
