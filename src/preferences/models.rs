use serde::{Deserialize, Serialize};

/// Normalized artist and title tokens for one feedback category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSet {
    #[serde(default)]
    pub artists: Vec<String>,
    #[serde(default)]
    pub titles: Vec<String>,
}

impl TokenSet {
    pub fn has_artist(&self, token: &str) -> bool {
        !token.is_empty() && self.artists.iter().any(|a| a == token)
    }

    pub fn has_title(&self, token: &str) -> bool {
        !token.is_empty() && self.titles.iter().any(|t| t == token)
    }

    pub(crate) fn insert(&mut self, artist: &str, title: &str) {
        if !artist.is_empty() && !self.has_artist(artist) {
            self.artists.push(artist.to_string());
        }
        if !title.is_empty() && !self.has_title(title) {
            self.titles.push(title.to_string());
        }
    }

    pub(crate) fn remove(&mut self, artist: &str, title: &str) {
        self.artists.retain(|a| a != artist);
        self.titles.retain(|t| t != title);
    }
}

/// User feedback signal. `likes` and `dislikes` never share a token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub likes: TokenSet,
    #[serde(default)]
    pub dislikes: TokenSet,
    #[serde(default)]
    pub skips: TokenSet,
}

/// Trimmed, lower-cased preference token.
pub fn normalize_token(s: &str) -> String {
    s.trim().to_lowercase()
}
