use serde::{Deserialize, Serialize};

/// Where a track can be played from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackProvider {
    #[default]
    File,
    Youtube,
    Spotify,
}

impl TrackProvider {
    pub fn as_str(&self) -> &str {
        match self {
            TrackProvider::File => "file",
            TrackProvider::Youtube => "youtube",
            TrackProvider::Spotify => "spotify",
        }
    }
}

impl std::fmt::Display for TrackProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog entry. Identity is the derived [`Track::key`], nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub provider: TrackProvider,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    /// Direct URL for local files and Spotify previews
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_art: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
}

impl Track {
    pub fn youtube(video_id: impl Into<String>, title: impl Into<String>, artist: impl Into<String>) -> Self {
        let video_id = video_id.into();
        Self {
            title: title.into(),
            artist: artist.into(),
            provider: TrackProvider::Youtube,
            external_url: Some(format!("https://www.youtube.com/watch?v={}", video_id)),
            video_id: Some(video_id),
            url: None,
            album_art: None,
        }
    }

    pub fn file(url: impl Into<String>, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            provider: TrackProvider::File,
            video_id: None,
            url: Some(url.into()),
            album_art: None,
            external_url: None,
        }
    }

    /// Stable identity used for de-duplication and history matching.
    ///
    /// `yt:{videoId}` for YouTube tracks, otherwise the playable URL,
    /// otherwise `{title}-{artist}`.
    pub fn key(&self) -> String {
        if self.provider == TrackProvider::Youtube {
            if let Some(id) = self.video_id.as_deref().filter(|id| !id.is_empty()) {
                return format!("yt:{}", id);
            }
        }

        match self.url.as_deref().filter(|u| !u.is_empty()) {
            Some(url) => url.to_string(),
            None => format!("{}-{}", self.title, self.artist),
        }
    }
}

/// The player command resolved from a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Play,
    Pause,
    Skip,
    Queue,
    CreatePlaylist,
}

impl ActionKind {
    pub fn as_str(&self) -> &str {
        match self {
            ActionKind::Play => "play",
            ActionKind::Pause => "pause",
            ActionKind::Skip => "skip",
            ActionKind::Queue => "queue",
            ActionKind::CreatePlaylist => "create_playlist",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playlist_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub action: ActionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<ActionPayload>,
}

impl Action {
    pub fn new(action: ActionKind) -> Self {
        Self {
            action,
            payload: None,
        }
    }

    pub fn with_payload(action: ActionKind, payload: ActionPayload) -> Self {
        Self {
            action,
            payload: Some(payload),
        }
    }

    pub fn mood(&self) -> Option<&str> {
        self.payload.as_ref().and_then(|p| p.mood.as_deref())
    }

    pub fn genre(&self) -> Option<&str> {
        self.payload.as_ref().and_then(|p| p.genre.as_deref())
    }

    pub fn playlist_name(&self) -> Option<&str> {
        self.payload.as_ref().and_then(|p| p.playlist_name.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_youtube_key_uses_video_id() {
        let track = Track::youtube("abc123", "Song", "Artist");
        assert_eq!(track.key(), "yt:abc123");
    }

    #[test]
    fn test_key_falls_back_to_url_then_title_artist() {
        let file = Track::file("/media/song.mp3", "Song", "Local");
        assert_eq!(file.key(), "/media/song.mp3");

        let bare = Track {
            title: "Song".to_string(),
            artist: "Artist".to_string(),
            provider: TrackProvider::Youtube,
            video_id: None,
            url: None,
            album_art: None,
            external_url: None,
        };
        assert_eq!(bare.key(), "Song-Artist");
    }

    #[test]
    fn test_action_parses_llm_shape() {
        let action: Action =
            serde_json::from_str(r#"{"action":"create_playlist","payload":{"playlistName":"chill"}}"#)
                .unwrap();
        assert_eq!(action.action, ActionKind::CreatePlaylist);
        assert_eq!(action.playlist_name(), Some("chill"));

        let skip: Action = serde_json::from_str(r#"{"action":"skip"}"#).unwrap();
        assert_eq!(skip, Action::new(ActionKind::Skip));
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        assert!(serde_json::from_str::<Action>(r#"{"action":"rewind"}"#).is_err());
    }

    #[test]
    fn test_track_serializes_camel_case() {
        let json = serde_json::to_value(Track::youtube("id1", "T", "A")).unwrap();
        assert_eq!(json["videoId"], "id1");
        assert_eq!(json["provider"], "youtube");
        assert!(json.get("url").is_none());
    }
}
