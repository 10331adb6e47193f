pub mod catalog;
pub mod config;
pub mod errors;
pub mod history;
pub mod interpreter;
pub mod local;
pub mod models;
pub mod orchestrator;
pub mod preferences;
pub mod providers;
pub mod queue;
pub mod recommendations;
pub mod session;
pub mod spotify;
pub mod storage;
pub mod youtube;

use catalog::CatalogClient;
use config::AppConfig;
use errors::AppError;
use history::PlayHistoryManager;
use interpreter::{IntentInterpreter, LlmProvider, OpenAiClient};
use local::LocalProvider;
use orchestrator::CommandOrchestrator;
use preferences::PreferenceStore;
use providers::ProviderChain;
use recommendations::RecommendationEngine;
use session::Session;
use spotify::{SpotifyClient, SpotifyProvider};
use std::sync::Arc;
use storage::JsonFileStore;
use tokio::io::{AsyncBufReadExt, BufReader};
use youtube::{YoutubeClient, YoutubeProvider};

/// Catalog order: YouTube, then Spotify when a token is set, then local media.
pub fn build_provider_chain(config: &AppConfig) -> Result<ProviderChain, AppError> {
    let youtube = YoutubeClient::new(
        config.youtube_api_key.clone(),
        config.youtube_api_base.as_str(),
        config.request_timeout,
    )?;
    if !youtube.has_credential() {
        log::warn!("YOUTUBE_API_KEY not set, YouTube search will be skipped");
    }

    let mut chain = ProviderChain::new().with_provider(Arc::new(YoutubeProvider::new(youtube)));

    if config.spotify_access_token.is_some() {
        let spotify = SpotifyClient::new(
            config.spotify_access_token.clone(),
            config.spotify_api_base.as_str(),
            config.request_timeout,
        )?;
        chain.register_provider(Arc::new(SpotifyProvider::new(spotify)));
    }

    if let Some(media_dir) = &config.media_dir {
        chain.register_provider(Arc::new(LocalProvider::new(media_dir.clone())));
    }

    Ok(chain)
}

pub fn build_session(config: &AppConfig) -> Result<Session, AppError> {
    let llm: Option<Arc<dyn LlmProvider>> = match &config.openai_api_key {
        Some(key) => {
            let client = OpenAiClient::new(
                Some(key.clone()),
                config.openai_base_url.as_str(),
                config.openai_model.as_str(),
                config.request_timeout,
            )?;
            Some(Arc::new(client) as Arc<dyn LlmProvider>)
        }
        None => {
            log::info!("OPENAI_API_KEY not set, using keyword interpretation only");
            None
        }
    };

    let catalog = Arc::new(
        CatalogClient::new(build_provider_chain(config)?).with_region(config.region.as_str()),
    );
    log::info!(
        "Catalog providers: {:?}",
        catalog.providers().list_providers()
    );

    let preferences = Arc::new(PreferenceStore::new(Arc::new(JsonFileStore::new(
        config.preferences_path(),
    ))));
    let history = Arc::new(PlayHistoryManager::new(Arc::new(JsonFileStore::new(
        config.history_path(),
    ))));

    let engine = RecommendationEngine::new(catalog.clone(), preferences.clone());
    let orchestrator = CommandOrchestrator::new(
        Arc::new(IntentInterpreter::new(llm)),
        Arc::new(engine),
    );

    Ok(Session::new(Arc::new(orchestrator), catalog, preferences, history))
}

/// Runs transcripts from the command line, or line by line from stdin.
pub async fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    log::info!("Data directory: {}", config.data_dir.display());

    let mut session = build_session(&config)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        println!("{}", session.handle_line(&args.join(" ")).await);
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        println!("{}", session.handle_line(&line).await);
    }

    Ok(())
}
