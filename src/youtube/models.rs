use crate::models::Track;
use serde::Deserialize;

/// `search.list` response, only the fields we map.
#[derive(Debug, Default, Deserialize)]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub id: ResourceId,
    #[serde(default)]
    pub snippet: Option<Snippet>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    #[serde(default)]
    pub video_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub channel_title: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
pub struct Thumbnails {
    #[serde(default)]
    pub default: Option<Thumbnail>,
    #[serde(default)]
    pub medium: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

/// Error body the API returns alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
}

impl SearchResult {
    /// `None` when the item has no video id (channels, playlists).
    pub fn into_track(self) -> Option<Track> {
        let video_id = self.id.video_id.filter(|id| !id.is_empty())?;
        let snippet = self.snippet.unwrap_or_default();

        let album_art = snippet
            .thumbnails
            .medium
            .or(snippet.thumbnails.default)
            .map(|t| t.url);

        let mut track = Track::youtube(video_id, snippet.title, snippet.channel_title);
        track.album_art = album_art;
        Some(track)
    }
}
