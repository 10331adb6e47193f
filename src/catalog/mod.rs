//! Catalog client: builds provider queries and runs them down the
//! configured [`ProviderChain`].

pub mod errors;

pub use errors::CatalogError;

use crate::config::DEFAULT_REGION;
use crate::models::Track;
use crate::providers::{CatalogQuery, ProviderChain};

/// Appended to every recommendation query to bias results toward music.
pub const DOMAIN_KEYWORD: &str = "music";
pub const DEFAULT_LIMIT: u32 = 12;
pub const MAX_LIMIT: u32 = 50;

pub fn clamp_limit(limit: u32) -> u32 {
    limit.clamp(1, MAX_LIMIT)
}

/// `input mood genre music`, skipping blank parts.
pub fn build_query(input: &str, mood: Option<&str>, genre: Option<&str>) -> String {
    [Some(input), mood, genre, Some(DOMAIN_KEYWORD)]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

pub struct CatalogClient {
    chain: ProviderChain,
    region: String,
}

impl CatalogClient {
    pub fn new(chain: ProviderChain) -> Self {
        Self {
            chain,
            region: DEFAULT_REGION.to_string(),
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn providers(&self) -> &ProviderChain {
        &self.chain
    }

    /// Plain free-text search.
    pub async fn search(&self, query: &str, limit: u32) -> Result<Vec<Track>, CatalogError> {
        let terms = query.trim();
        if terms.is_empty() {
            return Err(CatalogError::InvalidQuery("query is required".to_string()));
        }

        let request = CatalogQuery {
            terms: terms.to_string(),
            mood: None,
            genre: None,
            limit: clamp_limit(limit),
            region: self.region.clone(),
        };
        self.chain.search(&request).await
    }

    /// Mood/genre-driven lookup.
    pub async fn recommend(
        &self,
        input: &str,
        mood: Option<&str>,
        genre: Option<&str>,
        limit: u32,
    ) -> Result<Vec<Track>, CatalogError> {
        let request = CatalogQuery {
            terms: build_query(input, mood, genre),
            mood: non_blank(mood),
            genre: non_blank(genre),
            limit: clamp_limit(limit),
            region: self.region.clone(),
        };

        log::debug!("Catalog recommend query: '{}'", request.terms);
        self.chain.search(&request).await
    }
}
