use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::errors::AppError;

pub const REQUEST_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_REGION: &str = "US";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";
pub const DEFAULT_SPOTIFY_API_BASE: &str = "https://api.spotify.com/v1";
pub const USER_AGENT: &str = concat!("museai/", env!("CARGO_PKG_VERSION"));

pub const PREFERENCES_FILE: &str = "preferences.json";
pub const HISTORY_FILE: &str = "history.json";

pub fn get_data_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("museai")
}

/// Runtime settings, read from the environment. Blank values count as unset.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub youtube_api_key: Option<String>,
    pub youtube_api_base: String,
    pub spotify_access_token: Option<String>,
    pub spotify_api_base: String,
    pub region: String,
    pub data_dir: PathBuf,
    pub media_dir: Option<PathBuf>,
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            youtube_api_key: None,
            youtube_api_base: DEFAULT_YOUTUBE_API_BASE.to_string(),
            spotify_access_token: None,
            spotify_api_base: DEFAULT_SPOTIFY_API_BASE.to_string(),
            region: DEFAULT_REGION.to_string(),
            data_dir: get_data_dir(),
            media_dir: None,
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECONDS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let defaults = Self::default();

        let request_timeout = match get("MUSEAI_REQUEST_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    AppError::Config(format!(
                        "MUSEAI_REQUEST_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                        raw
                    ))
                })?;
                Duration::from_secs(secs)
            }
            None => defaults.request_timeout,
        };

        Ok(Self {
            openai_api_key: get("OPENAI_API_KEY"),
            openai_base_url: get("OPENAI_BASE_URL").unwrap_or(defaults.openai_base_url),
            openai_model: get("OPENAI_MODEL").unwrap_or(defaults.openai_model),
            youtube_api_key: get("YOUTUBE_API_KEY"),
            youtube_api_base: get("YOUTUBE_API_BASE").unwrap_or(defaults.youtube_api_base),
            spotify_access_token: get("SPOTIFY_ACCESS_TOKEN"),
            spotify_api_base: get("SPOTIFY_API_BASE").unwrap_or(defaults.spotify_api_base),
            region: get("MUSEAI_REGION").unwrap_or(defaults.region),
            data_dir: get("MUSEAI_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            media_dir: get("MEDIA_DIR").map(PathBuf::from),
            request_timeout,
        })
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir.join(PREFERENCES_FILE)
    }

    pub fn history_path(&self) -> PathBuf {
        self.data_dir.join(HISTORY_FILE)
    }
}
