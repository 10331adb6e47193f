use crate::models::Track;
use crate::orchestrator::OrchestratorResult;
use std::collections::VecDeque;

/// Receives orchestrator instructions and owns actual playback.
pub trait PlaybackSink {
    /// Applies `result`. Returns the track that became current, if any.
    fn apply(&mut self, result: &OrchestratorResult) -> Option<Track>;
}

/// Session playback state: upcoming tracks, the current track and a playing flag.
#[derive(Debug, Default)]
pub struct PlayQueue {
    queue: VecDeque<Track>,
    current: Option<Track>,
    is_playing: bool,
}

impl PlayQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn play(&mut self, track: Option<Track>) {
        if let Some(track) = track {
            self.current = Some(track);
        }
        self.is_playing = true;
    }

    pub fn pause(&mut self) {
        self.is_playing = false;
    }

    /// Appends `tracks`. A track whose key is already queued replaces the
    /// queued entry in place, so every key appears once.
    pub fn add_to_queue(&mut self, tracks: impl IntoIterator<Item = Track>) {
        for track in tracks {
            let key = track.key();
            match self.queue.iter_mut().find(|queued| queued.key() == key) {
                Some(existing) => *existing = track,
                None => self.queue.push_back(track),
            }
        }
    }

    /// Advances to the next queued track. No-op when the queue is empty.
    pub fn skip(&mut self) -> Option<Track> {
        let next = self.queue.pop_front()?;
        self.current = Some(next.clone());
        self.is_playing = true;
        Some(next)
    }

    pub fn clear_queue(&mut self) {
        self.queue.clear();
    }

    pub fn get_current_track(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    pub fn get_queue(&self) -> impl Iterator<Item = &Track> {
        self.queue.iter()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }
}

impl PlaybackSink for PlayQueue {
    fn apply(&mut self, result: &OrchestratorResult) -> Option<Track> {
        match result {
            OrchestratorResult::PlayTracks {
                now_playing,
                up_next,
            } => {
                self.play(Some(now_playing.clone()));
                self.add_to_queue(up_next.iter().cloned());
                Some(now_playing.clone())
            }
            OrchestratorResult::QueueTracks(tracks) => {
                self.add_to_queue(tracks.iter().cloned());
                None
            }
            OrchestratorResult::Pause => {
                self.pause();
                None
            }
            OrchestratorResult::Skip => self.skip(),
            OrchestratorResult::CreatePlaylist(_) | OrchestratorResult::NoResults(_) => None,
        }
    }
}
