use crate::models::{Action, ActionKind, ActionPayload};

pub const DEFAULT_PLAYLIST_NAME: &str = "My Playlist";

/// Keyword fallback. Deterministic, total, and never attaches mood/genre.
pub fn keyword_action(transcript: &str) -> Action {
    let lower = transcript.to_lowercase();

    if lower.contains("pause") {
        Action::new(ActionKind::Pause)
    } else if lower.contains("skip") {
        Action::new(ActionKind::Skip)
    } else if lower.contains("playlist") {
        Action::with_payload(
            ActionKind::CreatePlaylist,
            ActionPayload {
                playlist_name: Some(DEFAULT_PLAYLIST_NAME.to_string()),
                ..Default::default()
            },
        )
    } else {
        Action::new(ActionKind::Play)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_in_priority_order() {
        assert_eq!(keyword_action("PAUSE the music").action, ActionKind::Pause);
        assert_eq!(keyword_action("please Skip this").action, ActionKind::Skip);
        assert_eq!(keyword_action("pause, no wait, skip").action, ActionKind::Pause);
        assert_eq!(
            keyword_action("Make a chill playlist").playlist_name(),
            Some(DEFAULT_PLAYLIST_NAME)
        );
    }

    #[test]
    fn test_play_never_carries_mood() {
        let action = keyword_action("Play something relaxing");
        assert_eq!(action, Action::new(ActionKind::Play));
        assert!(action.mood().is_none());
    }
}
