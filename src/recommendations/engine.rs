//! Recommendation engine implementation.
//!
//! Turns a transcript plus optional mood/genre into a ranked list by:
//! 1. Querying the catalog chain
//! 2. Dropping duplicate track keys
//! 3. Ranking against a fresh preference snapshot

use crate::catalog::CatalogClient;
use crate::models::Track;
use crate::preferences::PreferenceStore;
use crate::recommendations::ranker::rank_tracks;
use std::collections::HashSet;
use std::sync::Arc;

/// Candidate list size requested per voice command.
pub const COMMAND_LIMIT: u32 = 20;

pub struct RecommendationEngine {
    catalog: Arc<CatalogClient>,
    preferences: Arc<PreferenceStore>,
}

impl RecommendationEngine {
    pub fn new(catalog: Arc<CatalogClient>, preferences: Arc<PreferenceStore>) -> Self {
        Self {
            catalog,
            preferences,
        }
    }

    /// Ranked, de-duplicated candidates. Catalog failures yield an empty list.
    pub async fn build_list(
        &self,
        input: &str,
        mood: Option<&str>,
        genre: Option<&str>,
        limit: u32,
    ) -> Vec<Track> {
        let candidates = match self.catalog.recommend(input, mood, genre, limit).await {
            Ok(tracks) => tracks,
            Err(e) => {
                log::warn!("Catalog lookup failed for '{}': {}", input, e);
                return Vec::new();
            }
        };

        let unique = dedup_by_key(candidates);
        let ranked = rank_tracks(unique, &self.preferences.get());

        log::info!("Built {} ranked tracks for '{}'", ranked.len(), input);
        ranked
    }
}

/// Keeps the first occurrence of each key, in order.
pub fn dedup_by_key(tracks: Vec<Track>) -> Vec<Track> {
    let mut seen = HashSet::new();
    tracks
        .into_iter()
        .filter(|t| seen.insert(t.key()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;
    use crate::providers::{CatalogProvider, CatalogQuery, ProviderChain, ProviderId};
    use crate::storage::MemoryStore;
    use async_trait::async_trait;

    struct Canned(Result<Vec<Track>, CatalogError>);

    #[async_trait]
    impl CatalogProvider for Canned {
        fn id(&self) -> ProviderId {
            ProviderId::Youtube
        }

        fn name(&self) -> &str {
            "canned"
        }

        async fn search(&self, _query: &CatalogQuery) -> Result<Vec<Track>, CatalogError> {
            self.0.clone()
        }
    }

    fn engine(result: Result<Vec<Track>, CatalogError>) -> (RecommendationEngine, Arc<PreferenceStore>) {
        let chain = ProviderChain::new().with_provider(Arc::new(Canned(result)));
        let prefs = Arc::new(PreferenceStore::new(Arc::new(MemoryStore::new())));
        (
            RecommendationEngine::new(Arc::new(CatalogClient::new(chain)), prefs.clone()),
            prefs,
        )
    }

    #[tokio::test]
    async fn test_dedups_and_ranks_with_current_preferences() {
        let tracks = vec![
            Track::youtube("a", "First", "X"),
            Track::youtube("b", "Second", "Liked Artist"),
            Track::youtube("a", "First again", "X"),
        ];
        let (engine, prefs) = engine(Ok(tracks));

        let before = engine.build_list("play", None, None, COMMAND_LIMIT).await;
        assert_eq!(before.iter().map(|t| t.key()).collect::<Vec<_>>(), vec!["yt:a", "yt:b"]);

        prefs.like(&Track::youtube("z", "whatever", "liked artist"));
        let after = engine.build_list("play", None, None, COMMAND_LIMIT).await;
        assert_eq!(after[0].key(), "yt:b");
    }

    #[tokio::test]
    async fn test_catalog_failure_yields_empty() {
        let (engine, _) = engine(Err(CatalogError::Network("timed out".to_string())));
        assert!(engine.build_list("play", Some("calm"), None, 10).await.is_empty());
    }
}
