use reqwest::Client;
use std::time::Duration;

use super::models::{ErrorResponse, SearchListResponse};
use crate::catalog::CatalogError;
use crate::config::USER_AGENT;

/// Music video category.
pub const MUSIC_CATEGORY_ID: &str = "10";

pub struct YoutubeClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl YoutubeClient {
    pub fn new(
        api_key: Option<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// `search.list` restricted to music-category videos.
    pub async fn search_videos(
        &self,
        query: &str,
        max_results: u32,
        region: &str,
    ) -> Result<SearchListResponse, CatalogError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| CatalogError::MissingCredential("YOUTUBE_API_KEY".to_string()))?;

        let url = format!("{}/search", self.base_url);
        let max_results = max_results.to_string();
        let params = [
            ("key", key),
            ("part", "snippet"),
            ("type", "video"),
            ("videoCategoryId", MUSIC_CATEGORY_ID),
            ("maxResults", max_results.as_str()),
            ("regionCode", region),
            ("q", query),
        ];

        let response = self.client.get(&url).query(&params).send().await?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ErrorResponse>(&text)
                .map(|e| format!("{} {}", e.error.code, e.error.message))
                .unwrap_or_else(|_| status.to_string());
            log::warn!("YouTube search failed ({}): {}", status, detail);
            return Err(CatalogError::Http(format!("HTTP {} - {}", status.as_u16(), detail)));
        }

        Ok(serde_json::from_str(&text)?)
    }
}
