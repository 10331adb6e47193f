//! Mediates between transcripts and the playback sink.
//!
//! `handle` resolves a transcript into an [`OrchestratorResult`]. It never
//! touches queue state; the caller applies the result to its sink.

use crate::interpreter::{IntentInterpreter, DEFAULT_PLAYLIST_NAME};
use crate::models::{ActionKind, Track};
use crate::recommendations::engine::COMMAND_LIMIT;
use crate::recommendations::RecommendationEngine;
use serde::Serialize;
use std::sync::Arc;

pub const NO_RESULTS_PLAY: &str = "No songs found for that mood/genre.";
pub const NO_RESULTS_QUEUE: &str = "No songs found to queue.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum OrchestratorResult {
    /// Start `now_playing`, append `up_next` to the queue
    PlayTracks {
        now_playing: Track,
        up_next: Vec<Track>,
    },
    QueueTracks(Vec<Track>),
    Pause,
    Skip,
    CreatePlaylist(String),
    NoResults(String),
}

pub struct CommandOrchestrator {
    interpreter: Arc<IntentInterpreter>,
    engine: Arc<RecommendationEngine>,
}

impl CommandOrchestrator {
    pub fn new(interpreter: Arc<IntentInterpreter>, engine: Arc<RecommendationEngine>) -> Self {
        Self {
            interpreter,
            engine,
        }
    }

    pub async fn handle(&self, transcript: &str) -> OrchestratorResult {
        let action = self.interpreter.interpret(transcript).await;
        log::info!("Command '{}' -> {}", transcript.trim(), action.action.as_str());

        match action.action {
            ActionKind::Play => {
                let mut tracks = self
                    .engine
                    .build_list(transcript, action.mood(), action.genre(), COMMAND_LIMIT)
                    .await;
                if tracks.is_empty() {
                    return OrchestratorResult::NoResults(NO_RESULTS_PLAY.to_string());
                }
                let now_playing = tracks.remove(0);
                OrchestratorResult::PlayTracks {
                    now_playing,
                    up_next: tracks,
                }
            }
            ActionKind::Queue => {
                let tracks = self
                    .engine
                    .build_list(transcript, action.mood(), action.genre(), COMMAND_LIMIT)
                    .await;
                if tracks.is_empty() {
                    return OrchestratorResult::NoResults(NO_RESULTS_QUEUE.to_string());
                }
                OrchestratorResult::QueueTracks(tracks)
            }
            ActionKind::Pause => OrchestratorResult::Pause,
            ActionKind::Skip => OrchestratorResult::Skip,
            ActionKind::CreatePlaylist => {
                let name = action
                    .playlist_name()
                    .map(str::trim)
                    .filter(|n| !n.is_empty())
                    .unwrap_or(DEFAULT_PLAYLIST_NAME);
                OrchestratorResult::CreatePlaylist(name.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogClient, CatalogError};
    use crate::interpreter::{InterpreterError, LlmProvider};
    use crate::preferences::PreferenceStore;
    use crate::providers::{CatalogProvider, CatalogQuery, ProviderChain, ProviderId};
    use crate::storage::MemoryStore;
    use async_trait::async_trait;
    use parking_lot::Mutex;

    struct StubCatalog {
        tracks: Vec<Track>,
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl CatalogProvider for StubCatalog {
        fn id(&self) -> ProviderId {
            ProviderId::Youtube
        }

        fn name(&self) -> &str {
            "stub"
        }

        async fn search(&self, query: &CatalogQuery) -> Result<Vec<Track>, CatalogError> {
            self.seen.lock().push(query.terms.clone());
            Ok(self.tracks.clone())
        }
    }

    struct ScriptedLlm(&'static str);

    #[async_trait]
    impl LlmProvider for ScriptedLlm {
        async fn complete(&self, _: &str, _: &str, _: f32) -> Result<String, InterpreterError> {
            Ok(self.0.to_string())
        }
    }

    fn orchestrator(
        llm: Option<Arc<dyn LlmProvider>>,
        tracks: Vec<Track>,
    ) -> (CommandOrchestrator, Arc<StubCatalog>) {
        let catalog = Arc::new(StubCatalog {
            tracks,
            seen: Mutex::new(Vec::new()),
        });
        let client = CatalogClient::new(ProviderChain::new().with_provider(catalog.clone()));
        let prefs = PreferenceStore::new(Arc::new(MemoryStore::new()));
        let engine = RecommendationEngine::new(Arc::new(client), Arc::new(prefs));
        (
            CommandOrchestrator::new(Arc::new(IntentInterpreter::new(llm)), Arc::new(engine)),
            catalog,
        )
    }

    #[tokio::test]
    async fn test_play_relaxing_offline_with_empty_catalog() {
        let (orchestrator, catalog) = orchestrator(None, vec![]);

        let result = orchestrator.handle("Play something relaxing").await;
        assert_eq!(
            result,
            OrchestratorResult::NoResults("No songs found for that mood/genre.".to_string())
        );
        assert_eq!(*catalog.seen.lock(), vec!["Play something relaxing music".to_string()]);
    }

    #[tokio::test]
    async fn test_skip_makes_no_catalog_call() {
        let (orchestrator, catalog) = orchestrator(None, vec![Track::youtube("a", "A", "B")]);

        assert_eq!(orchestrator.handle("Skip this").await, OrchestratorResult::Skip);
        assert_eq!(orchestrator.handle("pause please").await, OrchestratorResult::Pause);
        assert!(catalog.seen.lock().is_empty());
    }

    #[tokio::test]
    async fn test_play_splits_head_and_rest() {
        let tracks = vec![
            Track::youtube("a", "A", "X"),
            Track::youtube("b", "B", "Y"),
            Track::youtube("c", "C", "Z"),
        ];
        let (orchestrator, _) = orchestrator(None, tracks);

        match orchestrator.handle("play anything").await {
            OrchestratorResult::PlayTracks {
                now_playing,
                up_next,
            } => {
                assert_eq!(now_playing.key(), "yt:a");
                assert_eq!(up_next.len(), 2);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_llm_queue_uses_mood_and_genre() {
        let llm: Arc<dyn LlmProvider> = Arc::new(ScriptedLlm(
            r#"{"action":"queue","payload":{"mood":"upbeat","genre":"funk"}}"#,
        ));
        let (orchestrator, catalog) = orchestrator(Some(llm), vec![Track::youtube("a", "A", "X")]);

        let result = orchestrator.handle("queue some upbeat funk").await;
        assert!(matches!(result, OrchestratorResult::QueueTracks(ref t) if t.len() == 1));
        assert_eq!(
            catalog.seen.lock()[0],
            "queue some upbeat funk upbeat funk music"
        );
    }

    #[tokio::test]
    async fn test_empty_queue_reason() {
        let llm: Arc<dyn LlmProvider> = Arc::new(ScriptedLlm(r#"{"action":"queue"}"#));
        let (orchestrator, _) = orchestrator(Some(llm), vec![]);

        assert_eq!(
            orchestrator.handle("queue more").await,
            OrchestratorResult::NoResults(NO_RESULTS_QUEUE.to_string())
        );
    }

    #[tokio::test]
    async fn test_create_playlist_names() {
        let llm: Arc<dyn LlmProvider> = Arc::new(ScriptedLlm(
            r#"{"action":"create_playlist","payload":{"playlistName":"chill"}}"#,
        ));
        let (named, _) = orchestrator(Some(llm), vec![]);
        assert_eq!(
            named.handle("Make a chill playlist").await,
            OrchestratorResult::CreatePlaylist("chill".to_string())
        );

        let blank: Arc<dyn LlmProvider> = Arc::new(ScriptedLlm(
            r#"{"action":"create_playlist","payload":{"playlistName":"  "}}"#,
        ));
        let (unnamed, _) = orchestrator(Some(blank), vec![]);
        assert_eq!(
            unnamed.handle("new playlist").await,
            OrchestratorResult::CreatePlaylist("My Playlist".to_string())
        );
    }
}
