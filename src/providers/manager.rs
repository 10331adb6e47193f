use crate::catalog::CatalogError;
use crate::models::Track;
use crate::providers::traits::CatalogProvider;
use crate::providers::types::{CatalogQuery, ProviderId};
use std::sync::Arc;

/// Ordered fallback list of catalog providers.
///
/// Providers are tried in registration order. The first one that returns a
/// non-empty list wins. Failures are logged and the next provider is tried.
#[derive(Clone, Default)]
pub struct ProviderChain {
    providers: Vec<Arc<dyn CatalogProvider>>,
}

impl ProviderChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_provider(mut self, provider: Arc<dyn CatalogProvider>) -> Self {
        self.register_provider(provider);
        self
    }

    pub fn register_provider(&mut self, provider: Arc<dyn CatalogProvider>) {
        log::info!(
            "Registering catalog provider: {} ({})",
            provider.name(),
            provider.id()
        );
        self.providers.push(provider);
    }

    pub fn list_providers(&self) -> Vec<ProviderId> {
        self.providers.iter().map(|p| p.id()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Runs `query` down the chain.
    ///
    /// `Ok(vec![])` when at least one provider answered but none had results,
    /// `Err(Unavailable)` when every provider failed (or none is registered).
    pub async fn search(&self, query: &CatalogQuery) -> Result<Vec<Track>, CatalogError> {
        let total = self.providers.len();
        let mut answered = false;
        let mut failures = Vec::new();

        for (idx, provider) in self.providers.iter().enumerate() {
            log::debug!(
                "[{}/{}] Searching {} for '{}'",
                idx + 1,
                total,
                provider.name(),
                query.terms
            );

            match provider.search(query).await {
                Ok(tracks) if !tracks.is_empty() => {
                    log::info!(
                        "{} returned {} tracks for '{}'",
                        provider.name(),
                        tracks.len(),
                        query.terms
                    );
                    return Ok(tracks);
                }
                Ok(_) => {
                    answered = true;
                    log::debug!("[{}/{}] {} had no results", idx + 1, total, provider.name());
                }
                Err(e) => {
                    log::warn!("[{}/{}] {} failed: {}", idx + 1, total, provider.name(), e);
                    failures.push(format!("{}: {}", provider.id(), e));
                }
            }
        }

        if answered {
            return Ok(Vec::new());
        }

        if failures.is_empty() {
            return Err(CatalogError::Unavailable(
                "no catalog providers configured".to_string(),
            ));
        }

        Err(CatalogError::Unavailable(failures.join("; ")))
    }
}
