//! Interactive session: one line in, one reply out.
//!
//! Plain lines are voice transcripts and go through the orchestrator. Lines
//! starting with `:` are typed commands: feedback on the current track,
//! free-text search and history maintenance.

use crate::catalog::{CatalogClient, DEFAULT_LIMIT};
use crate::history::PlayHistoryManager;
use crate::models::Track;
use crate::orchestrator::{CommandOrchestrator, OrchestratorResult};
use crate::preferences::{Feedback, PreferenceStore};
use crate::queue::{PlayQueue, PlaybackSink};
use crate::recommendations::engine::dedup_by_key;
use crate::recommendations::rank_tracks;
use std::sync::Arc;

pub const NO_SEARCH_RESULTS: &str = "No songs found for that search.";

pub struct Session {
    orchestrator: Arc<CommandOrchestrator>,
    catalog: Arc<CatalogClient>,
    preferences: Arc<PreferenceStore>,
    history: Arc<PlayHistoryManager>,
    queue: PlayQueue,
}

impl Session {
    pub fn new(
        orchestrator: Arc<CommandOrchestrator>,
        catalog: Arc<CatalogClient>,
        preferences: Arc<PreferenceStore>,
        history: Arc<PlayHistoryManager>,
    ) -> Self {
        Self {
            orchestrator,
            catalog,
            preferences,
            history,
            queue: PlayQueue::new(),
        }
    }

    pub fn queue(&self) -> &PlayQueue {
        &self.queue
    }

    pub async fn handle_line(&mut self, line: &str) -> String {
        let line = line.trim();
        match line.strip_prefix(':') {
            Some(command) => self.handle_command(command.trim()).await,
            None => self.handle_transcript(line).await,
        }
    }

    async fn handle_transcript(&mut self, transcript: &str) -> String {
        let result = self.orchestrator.handle(transcript).await;
        self.apply(result)
    }

    async fn handle_command(&mut self, command: &str) -> String {
        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };

        match name {
            "like" => self.feedback(Feedback::Like),
            "dislike" => self.feedback(Feedback::Dislike),
            "skip" => {
                let reply = self.feedback(Feedback::Skip);
                match self.queue.skip() {
                    Some(next) => {
                        self.history.record_play(&next);
                        format!("{}; now playing: {}", reply, describe(&next))
                    }
                    None => reply,
                }
            }
            "search" => self.search(arg).await,
            "history" => {
                let plays = self.history.get_recent_plays();
                if plays.is_empty() {
                    return "No plays yet.".to_string();
                }
                plays
                    .iter()
                    .map(|p| format!("{} - {}", p.title, p.artist))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
            "searches" => {
                let searches = self.history.get_recent_searches();
                if searches.is_empty() {
                    return "No searches yet.".to_string();
                }
                searches
                    .into_iter()
                    .map(|s| s.q)
                    .collect::<Vec<_>>()
                    .join("\n")
            }
            "queue" => {
                let upcoming: Vec<String> = self.queue.get_queue().map(describe).collect();
                if upcoming.is_empty() {
                    "Queue is empty.".to_string()
                } else {
                    upcoming.join("\n")
                }
            }
            "clear" => self.clear(arg),
            other => format!("Unknown command ':{}'", other),
        }
    }

    /// Typed search: plays the best match and queues the rest. A blank query
    /// falls back to a plain recommendation and is not logged.
    async fn search(&mut self, query: &str) -> String {
        let found = if query.is_empty() {
            self.catalog.recommend("", None, None, DEFAULT_LIMIT).await
        } else {
            self.history.record_search(query);
            self.catalog.search(query, DEFAULT_LIMIT).await
        };

        let tracks = match found {
            Ok(tracks) => tracks,
            Err(e) => {
                log::warn!("Search for '{}' failed: {}", query, e);
                Vec::new()
            }
        };

        let mut ranked = rank_tracks(dedup_by_key(tracks), &self.preferences.get());
        if ranked.is_empty() {
            return NO_SEARCH_RESULTS.to_string();
        }
        let now_playing = ranked.remove(0);
        self.apply(OrchestratorResult::PlayTracks {
            now_playing,
            up_next: ranked,
        })
    }

    fn clear(&mut self, target: &str) -> String {
        match target {
            "history" => self.history.clear_played(),
            "searches" => self.history.clear_searches(),
            "queue" => self.queue.clear_queue(),
            "" => {
                self.history.clear_played();
                self.history.clear_searches();
                self.queue.clear_queue();
            }
            other => return format!("Unknown clear target '{}'", other),
        }
        "Cleared.".to_string()
    }

    fn apply(&mut self, result: OrchestratorResult) -> String {
        let started = self.queue.apply(&result);
        if let Some(track) = &started {
            self.history.record_play(track);
        }

        match result {
            OrchestratorResult::PlayTracks { up_next, .. } => match started {
                Some(track) => format!(
                    "Now playing: {} ({} more queued)",
                    describe(&track),
                    up_next.len()
                ),
                None => "Nothing to play.".to_string(),
            },
            OrchestratorResult::QueueTracks(tracks) => {
                format!("Queued {} tracks ({} upcoming)", tracks.len(), self.queue.len())
            }
            OrchestratorResult::Pause => "Paused.".to_string(),
            OrchestratorResult::Skip => match started {
                Some(track) => format!("Now playing: {}", describe(&track)),
                None => "Queue is empty.".to_string(),
            },
            OrchestratorResult::CreatePlaylist(name) => format!("Created playlist '{}'", name),
            OrchestratorResult::NoResults(reason) => reason,
        }
    }

    fn feedback(&self, feedback: Feedback) -> String {
        let Some(track) = self.queue.get_current_track() else {
            return "Nothing is playing.".to_string();
        };
        self.preferences.record(feedback, track);

        let verb = match feedback {
            Feedback::Like => "Liked",
            Feedback::Dislike => "Disliked",
            Feedback::Skip => "Skipped",
        };
        format!("{} {}", verb, describe(track))
    }
}

fn describe(track: &Track) -> String {
    format!("{} - {}", track.title, track.artist)
}
