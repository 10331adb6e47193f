use crate::catalog::CatalogError;
use crate::models::Track;
use crate::providers::types::{CatalogQuery, ProviderId};
use async_trait::async_trait;

#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Unique identifier
    fn id(&self) -> ProviderId;

    /// User-friendly name
    fn name(&self) -> &str;

    /// Tracks matching `query`, at most `query.limit`. Items without a
    /// playable identifier are already dropped.
    async fn search(&self, query: &CatalogQuery) -> Result<Vec<Track>, CatalogError>;
}
