pub mod models;

use crate::models::Track;
use crate::storage::{load_or_default, SnapshotStore};
pub use models::{normalize_token, Preferences, TokenSet};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Like,
    Dislike,
    Skip,
}

/// Liked / disliked / skipped tokens, persisted through a [`SnapshotStore`].
///
/// Every mutation is a read-modify-write of the persisted snapshot under a
/// single lock, so concurrent feedback from the same process is never lost.
pub struct PreferenceStore {
    store: Arc<dyn SnapshotStore<Preferences>>,
    write_lock: Mutex<()>,
}

impl PreferenceStore {
    pub fn new(store: Arc<dyn SnapshotStore<Preferences>>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub fn get(&self) -> Preferences {
        let _guard = self.write_lock.lock();
        load_or_default(self.store.as_ref(), "preferences")
    }

    pub fn like(&self, track: &Track) {
        self.record(Feedback::Like, track);
    }

    pub fn dislike(&self, track: &Track) {
        self.record(Feedback::Dislike, track);
    }

    pub fn skip(&self, track: &Track) {
        self.record(Feedback::Skip, track);
    }

    pub fn record(&self, feedback: Feedback, track: &Track) {
        let artist = normalize_token(&track.artist);
        let title = normalize_token(&track.title);

        let _guard = self.write_lock.lock();
        let mut prefs: Preferences = load_or_default(self.store.as_ref(), "preferences");

        match feedback {
            Feedback::Like => {
                prefs.likes.insert(&artist, &title);
                prefs.dislikes.remove(&artist, &title);
            }
            Feedback::Dislike => {
                prefs.dislikes.insert(&artist, &title);
                prefs.likes.remove(&artist, &title);
            }
            Feedback::Skip => prefs.skips.insert(&artist, &title),
        }

        if let Err(e) = self.store.save(&prefs) {
            log::error!("Failed to persist {:?} for '{}': {}", feedback, track.title, e);
            return;
        }

        log::debug!("Recorded {:?} for {} - {}", feedback, track.artist, track.title);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{JsonFileStore, MemoryStore};

    fn store() -> PreferenceStore {
        PreferenceStore::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_first_read_is_empty() {
        assert_eq!(store().get(), Preferences::default());
    }

    #[test]
    fn test_like_normalizes_and_clears_dislike() {
        let prefs = store();
        let track = Track::youtube("v1", "  Ocean Breeze ", "AYLA");

        prefs.dislike(&track);
        prefs.like(&track);

        let p = prefs.get();
        assert_eq!(p.likes.artists, vec!["ayla"]);
        assert_eq!(p.likes.titles, vec!["ocean breeze"]);
        assert!(!p.dislikes.has_artist("ayla"));
        assert!(!p.dislikes.has_title("ocean breeze"));
    }

    #[test]
    fn test_dislike_clears_like() {
        let prefs = store();
        let track = Track::youtube("v1", "Night Drive", "Nova");

        prefs.like(&track);
        prefs.dislike(&track);

        let p = prefs.get();
        assert!(p.dislikes.has_artist("nova"));
        assert!(p.dislikes.has_title("night drive"));
        assert!(p.likes.artists.is_empty());
        assert!(p.likes.titles.is_empty());
    }

    #[test]
    fn test_skip_is_additive_only() {
        let prefs = store();
        let track = Track::youtube("v1", "Song", "Artist");

        prefs.like(&track);
        prefs.skip(&track);
        prefs.skip(&track);

        let p = prefs.get();
        assert!(p.likes.has_artist("artist"));
        assert_eq!(p.skips.artists, vec!["artist"]);
        assert_eq!(p.skips.titles, vec!["song"]);
    }

    #[test]
    fn test_corrupt_snapshot_resets() {
        let prefs = PreferenceStore::new(Arc::new(MemoryStore::with_raw("{\"likes\": 7")));
        assert_eq!(prefs.get(), Preferences::default());

        prefs.like(&Track::youtube("v1", "Song", "Artist"));
        assert!(prefs.get().likes.has_title("song"));
    }

    #[test]
    fn test_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        PreferenceStore::new(Arc::new(JsonFileStore::new(&path)))
            .like(&Track::youtube("v1", "Song", "Artist"));

        let reopened = PreferenceStore::new(Arc::new(JsonFileStore::new(&path)));
        assert!(reopened.get().likes.has_artist("artist"));
    }

    #[test]
    fn test_concurrent_feedback_is_not_lost() {
        let prefs = Arc::new(store());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let prefs = prefs.clone();
                std::thread::spawn(move || {
                    prefs.like(&Track::youtube(format!("v{}", i), format!("Song {}", i), format!("Artist {}", i)));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let p = prefs.get();
        assert_eq!(p.likes.artists.len(), 8);
        assert_eq!(p.likes.titles.len(), 8);
    }
}
