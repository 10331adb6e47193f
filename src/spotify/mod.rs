pub mod client;
pub mod models;
pub mod provider;

pub use client::SpotifyClient;
pub use models::*;
pub use provider::SpotifyProvider;
