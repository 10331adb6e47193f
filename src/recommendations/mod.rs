//! Candidate ranking for voice commands.
//!
//! Pulls candidates from the catalog chain and orders them with the
//! user's like/dislike/skip signal.

pub mod engine;
pub mod ranker;

pub use engine::RecommendationEngine;
pub use ranker::{rank_tracks, score_track};
