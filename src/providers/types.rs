use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Local,
    Youtube,
    Spotify,
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderId::Local => write!(f, "local"),
            ProviderId::Youtube => write!(f, "youtube"),
            ProviderId::Spotify => write!(f, "spotify"),
        }
    }
}

/// One catalog lookup as handed to a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Full provider query string (free text, optionally mood/genre and keyword)
    pub terms: String,
    /// Structured filters, used by providers that can't do free-text search
    pub mood: Option<String>,
    pub genre: Option<String>,
    /// Already clamped to the provider maximum
    pub limit: u32,
    pub region: String,
}
