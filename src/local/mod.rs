//! Local media catalog: a curated `sources.json` or the audio files sitting
//! in the media directory. Used as the last tier behind the remote catalogs.

use crate::catalog::CatalogError;
use crate::models::Track;
use crate::providers::{CatalogProvider, CatalogQuery, ProviderId};
use async_trait::async_trait;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const AUDIO_EXTENSIONS: &[&str] = &["mp3", "ogg", "wav"];
const SOURCES_FILE: &str = "sources.json";
const LOCAL_ARTIST: &str = "Local";

/// One entry of `sources.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceEntry {
    pub title: String,
    pub artist: String,
    pub url: String,
    #[serde(default)]
    pub album_art: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub mood_tags: Vec<String>,
}

impl SourceEntry {
    fn matches(&self, mood: Option<&str>, genre: Option<&str>) -> bool {
        let genre_ok = genre.map_or(true, |g| {
            self.genre
                .as_deref()
                .is_some_and(|own| own.eq_ignore_ascii_case(g))
        });
        let mood_ok = mood.map_or(true, |m| {
            self.mood_tags.iter().any(|tag| tag.eq_ignore_ascii_case(m))
        });
        genre_ok && mood_ok
    }

    fn to_track(&self) -> Track {
        let mut track = Track::file(self.url.clone(), self.title.clone(), self.artist.clone());
        track.album_art = self.album_art.clone().filter(|a| !a.is_empty());
        track
    }
}

pub struct LocalProvider {
    media_dir: PathBuf,
}

impl LocalProvider {
    pub fn new(media_dir: impl Into<PathBuf>) -> Self {
        Self {
            media_dir: media_dir.into(),
        }
    }

    fn load_sources(&self) -> Vec<SourceEntry> {
        let path = self.media_dir.join(SOURCES_FILE);
        let Ok(raw) = fs::read_to_string(&path) else {
            return Vec::new();
        };

        match serde_json::from_str::<Vec<SourceEntry>>(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Ignoring malformed {}: {}", path.display(), e);
                Vec::new()
            }
        }
    }

    fn scan_media_files(&self) -> Vec<Track> {
        let Ok(entries) = fs::read_dir(&self.media_dir) else {
            return Vec::new();
        };

        let mut files: Vec<String> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && is_audio_file(path))
            .filter_map(|path| path.file_name()?.to_str().map(String::from))
            .collect();
        files.sort();

        files
            .into_iter()
            .map(|name| {
                let title = Path::new(&name)
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or(name.as_str())
                    .to_string();
                Track::file(format!("/media/{}", name), title, LOCAL_ARTIST)
            })
            .collect()
    }

    /// Curated sources first; the raw directory listing only when they yield
    /// nothing for this query.
    pub fn find(&self, mood: Option<&str>, genre: Option<&str>, limit: usize) -> Vec<Track> {
        let curated: Vec<Track> = self
            .load_sources()
            .iter()
            .filter(|entry| entry.matches(mood, genre))
            .map(SourceEntry::to_track)
            .take(limit)
            .collect();
        if !curated.is_empty() {
            return curated;
        }

        let mood = mood.map(str::to_lowercase);
        let genre = genre.map(str::to_lowercase);
        self.scan_media_files()
            .into_iter()
            .filter(|track| {
                let title = track.title.to_lowercase();
                genre.as_deref().map_or(true, |g| title.contains(g))
                    && mood.as_deref().map_or(true, |m| title.contains(m))
            })
            .take(limit)
            .collect()
    }
}

fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| AUDIO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

#[async_trait]
impl CatalogProvider for LocalProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Local
    }

    fn name(&self) -> &str {
        "Local media"
    }

    async fn search(&self, query: &CatalogQuery) -> Result<Vec<Track>, CatalogError> {
        Ok(self.find(
            query.mood.as_deref(),
            query.genre.as_deref(),
            query.limit as usize,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TrackProvider;

    const SOURCES: &str = r#"[
        { "title": "Ocean Breeze", "artist": "Ayla", "url": "https://cdn.example/ocean.wav", "genre": "ambient", "moodTags": ["relaxing", "calm"] },
        { "title": "Night Drive", "artist": "Nova", "url": "https://cdn.example/night.wav", "genre": "synthwave", "moodTags": ["focus"] }
    ]"#;

    #[test]
    fn test_sources_filter_by_mood_and_genre() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SOURCES_FILE), SOURCES).unwrap();
        let local = LocalProvider::new(dir.path());

        let relaxing = local.find(Some("Relaxing"), None, 10);
        assert_eq!(relaxing.len(), 1);
        assert_eq!(relaxing[0].title, "Ocean Breeze");
        assert_eq!(relaxing[0].provider, TrackProvider::File);

        let synth = local.find(None, Some("SYNTHWAVE"), 10);
        assert_eq!(synth[0].artist, "Nova");

        assert_eq!(local.find(None, None, 1).len(), 1);
    }

    #[test]
    fn test_falls_back_to_media_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SOURCES_FILE), SOURCES).unwrap();
        fs::write(dir.path().join("chill-jazz.mp3"), b"").unwrap();
        fs::write(dir.path().join("notes.txt"), b"").unwrap();
        let local = LocalProvider::new(dir.path());

        let jazz = local.find(None, Some("jazz"), 10);
        assert_eq!(jazz.len(), 1);
        assert_eq!(jazz[0].title, "chill-jazz");
        assert_eq!(jazz[0].artist, "Local");
        assert_eq!(jazz[0].key(), "/media/chill-jazz.mp3");
    }

    #[test]
    fn test_malformed_sources_and_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SOURCES_FILE), "{oops").unwrap();
        fs::write(dir.path().join("track.OGG"), b"").unwrap();

        let tracks = LocalProvider::new(dir.path()).find(None, None, 10);
        assert_eq!(tracks.len(), 1);

        let missing = LocalProvider::new(dir.path().join("does-not-exist"));
        assert!(missing.find(Some("happy"), None, 10).is_empty());
    }
}
