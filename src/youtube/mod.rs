pub mod client;
pub mod models;
pub mod provider;

pub use client::YoutubeClient;
pub use provider::YoutubeProvider;
