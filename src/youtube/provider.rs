use crate::catalog::CatalogError;
use crate::models::Track;
use crate::providers::{CatalogProvider, CatalogQuery, ProviderId};
use crate::youtube::client::YoutubeClient;
use crate::youtube::models::SearchListResponse;
use async_trait::async_trait;

pub struct YoutubeProvider {
    client: YoutubeClient,
}

impl YoutubeProvider {
    pub fn new(client: YoutubeClient) -> Self {
        Self { client }
    }
}

/// Maps a search response into tracks, dropping items without a video id.
pub fn tracks_from_response(response: SearchListResponse, limit: usize) -> Vec<Track> {
    response
        .items
        .into_iter()
        .filter_map(|item| item.into_track())
        .take(limit)
        .collect()
}

#[async_trait]
impl CatalogProvider for YoutubeProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Youtube
    }

    fn name(&self) -> &str {
        "YouTube"
    }

    async fn search(&self, query: &CatalogQuery) -> Result<Vec<Track>, CatalogError> {
        let response = self
            .client
            .search_videos(&query.terms, query.limit, &query.region)
            .await?;
        Ok(tracks_from_response(response, query.limit as usize))
    }
}
