use crate::models::{Track, TrackProvider};
use serde::Deserialize;

/// `GET /search?type=track` response.
#[derive(Debug, Default, Deserialize)]
pub struct SpotifySearchResponse {
    #[serde(default)]
    pub tracks: SpotifyPaging,
}

#[derive(Debug, Default, Deserialize)]
pub struct SpotifyPaging {
    #[serde(default)]
    pub items: Vec<SpotifyTrack>,
}

/// Represents a track from the Spotify catalog
#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyTrack {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<SpotifyArtist>,
    #[serde(default)]
    pub album: Option<SpotifyAlbum>,
    /// 30 second MP3 preview, absent for many tracks
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub external_urls: SpotifyExternalUrls,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyArtist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyAlbum {
    #[serde(default)]
    pub images: Vec<SpotifyImage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyImage {
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpotifyExternalUrls {
    #[serde(default)]
    pub spotify: Option<String>,
}

impl SpotifyTrack {
    /// Only tracks with a preview URL are playable here.
    pub fn into_track(self) -> Option<Track> {
        let url = self.preview_url.filter(|u| !u.is_empty())?;

        let artist = self
            .artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let album_art = self
            .album
            .and_then(|a| a.images.into_iter().next())
            .map(|img| img.url);

        Some(Track {
            title: self.name,
            artist,
            provider: TrackProvider::Spotify,
            video_id: None,
            url: Some(url),
            album_art,
            external_url: self.external_urls.spotify,
        })
    }
}
