use super::client::SpotifyClient;
use super::models::SpotifySearchResponse;
use crate::catalog::CatalogError;
use crate::models::Track;
use crate::providers::{CatalogProvider, CatalogQuery, ProviderId};
use async_trait::async_trait;

pub struct SpotifyProvider {
    client: SpotifyClient,
}

impl SpotifyProvider {
    pub fn new(client: SpotifyClient) -> Self {
        Self { client }
    }
}

pub fn tracks_from_response(response: SpotifySearchResponse, limit: usize) -> Vec<Track> {
    response
        .tracks
        .items
        .into_iter()
        .filter_map(|t| t.into_track())
        .take(limit)
        .collect()
}

#[async_trait]
impl CatalogProvider for SpotifyProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Spotify
    }

    fn name(&self) -> &str {
        "Spotify"
    }

    async fn search(&self, query: &CatalogQuery) -> Result<Vec<Track>, CatalogError> {
        let response = self
            .client
            .search_tracks(&query.terms, query.limit, &query.region)
            .await?;
        Ok(tracks_from_response(response, query.limit as usize))
    }
}
