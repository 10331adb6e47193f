pub mod models;

use crate::models::Track;
use crate::storage::{load_or_default, SnapshotStore};
pub use models::{HistorySnapshot, PlayHistoryEntry, SearchEntry};
use parking_lot::Mutex;
use std::sync::Arc;

pub const PLAYED_LIMIT: usize = 200;
pub const SEARCH_LIMIT: usize = 20;

/// Played-track and search-query logs.
pub struct PlayHistoryManager {
    store: Arc<dyn SnapshotStore<HistorySnapshot>>,
    write_lock: Mutex<()>,
}

impl PlayHistoryManager {
    pub fn new(store: Arc<dyn SnapshotStore<HistorySnapshot>>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    fn read(&self) -> HistorySnapshot {
        load_or_default(self.store.as_ref(), "history")
    }

    fn write(&self, snapshot: &HistorySnapshot) {
        if let Err(e) = self.store.save(snapshot) {
            log::error!("Failed to persist history: {}", e);
        }
    }

    /// Records a play. Returns `false` when the track repeats the newest entry.
    pub fn record_play(&self, track: &Track) -> bool {
        let key = track.key();

        let _guard = self.write_lock.lock();
        let mut history = self.read();

        if history.played.first().is_some_and(|last| last.key == key) {
            log::debug!("Skipping consecutive duplicate play for {}", key);
            return false;
        }

        history.played.insert(
            0,
            PlayHistoryEntry {
                key,
                title: track.title.clone(),
                artist: track.artist.clone(),
                album_art: track.album_art.clone(),
                provider: Some(track.provider.to_string()),
                video_id: track.video_id.clone(),
                url: track.url.clone(),
                at: now_millis(),
            },
        );
        history.played.truncate(PLAYED_LIMIT);

        self.write(&history);
        true
    }

    pub fn get_recent_plays(&self) -> Vec<PlayHistoryEntry> {
        let _guard = self.write_lock.lock();
        self.read().played
    }

    pub fn clear_played(&self) {
        let _guard = self.write_lock.lock();
        let mut history = self.read();
        history.played.clear();
        self.write(&history);
    }

    /// Moves `query` to the front of the search log. Blank queries are ignored.
    pub fn record_search(&self, query: &str) {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return;
        }

        let _guard = self.write_lock.lock();
        let mut history = self.read();

        history.searches.retain(|s| s.q != trimmed);
        history.searches.insert(
            0,
            SearchEntry {
                q: trimmed.to_string(),
                at: now_millis(),
            },
        );
        history.searches.truncate(SEARCH_LIMIT);

        self.write(&history);
    }

    pub fn get_recent_searches(&self) -> Vec<SearchEntry> {
        let _guard = self.write_lock.lock();
        self.read().searches
    }

    pub fn clear_searches(&self) {
        let _guard = self.write_lock.lock();
        let mut history = self.read();
        history.searches.clear();
        self.write(&history);
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
