use super::models::SpotifySearchResponse;
use crate::catalog::CatalogError;
use crate::config::USER_AGENT;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Spotify Web API search using a bearer token obtained elsewhere (OAuth is
/// handled outside the core).
pub struct SpotifyClient {
    client: Client,
    access_token: Option<String>,
    base_url: String,
}

impl SpotifyClient {
    pub fn new(
        access_token: Option<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            access_token: access_token.filter(|t| !t.trim().is_empty()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn has_credential(&self) -> bool {
        self.access_token.is_some()
    }

    pub async fn search_tracks(
        &self,
        query: &str,
        limit: u32,
        market: &str,
    ) -> Result<SpotifySearchResponse, CatalogError> {
        let token = self
            .access_token
            .as_deref()
            .ok_or_else(|| CatalogError::MissingCredential("SPOTIFY_ACCESS_TOKEN".to_string()))?;

        log::debug!("Spotify search: '{}' (limit {})", query, limit);

        let url = format!("{}/search", self.base_url);
        let limit = limit.to_string();
        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .query(&[
                ("type", "track"),
                ("q", query),
                ("limit", limit.as_str()),
                ("market", market),
            ])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(CatalogError::MissingCredential(
                "Spotify access token rejected".to_string(),
            ));
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            log::warn!("Rate limited by Spotify");
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(CatalogError::Http(format!("HTTP {} - {}", status.as_u16(), text)));
        }

        response
            .json::<SpotifySearchResponse>()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))
    }
}
