//! Preference-based scoring of candidate tracks.

use crate::models::Track;
use crate::preferences::{normalize_token, Preferences};

const LIKED_ARTIST: i32 = 3;
const LIKED_TITLE: i32 = 2;
const DISLIKED_ARTIST: i32 = -4;
const DISLIKED_TITLE: i32 = -3;
const SKIPPED_ARTIST: i32 = -1;
const SKIPPED_TITLE: i32 = -1;
/// Auto-generated "Artist - Topic" channels carry official uploads.
const TOPIC_CHANNEL: i32 = 1;
const TOPIC_SUFFIX: &str = " - topic";

pub fn score_track(track: &Track, prefs: &Preferences) -> i32 {
    let artist = normalize_token(&track.artist);
    let title = normalize_token(&track.title);

    let mut score = 0;
    if prefs.likes.has_artist(&artist) {
        score += LIKED_ARTIST;
    }
    if prefs.likes.has_title(&title) {
        score += LIKED_TITLE;
    }

    if prefs.dislikes.has_artist(&artist) {
        score += DISLIKED_ARTIST;
    }
    if prefs.dislikes.has_title(&title) {
        score += DISLIKED_TITLE;
    }

    if prefs.skips.has_artist(&artist) {
        score += SKIPPED_ARTIST;
    }
    if prefs.skips.has_title(&title) {
        score += SKIPPED_TITLE;
    }

    if artist.ends_with(TOPIC_SUFFIX) {
        score += TOPIC_CHANNEL;
    }

    score
}

/// Highest score first. Ties keep their input order.
pub fn rank_tracks(tracks: Vec<Track>, prefs: &Preferences) -> Vec<Track> {
    let mut scored: Vec<(i32, Track)> = tracks
        .into_iter()
        .map(|t| (score_track(&t, prefs), t))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, t)| t).collect()
}
