pub mod manager;
pub mod traits;
pub mod types;

pub use manager::ProviderChain;
pub use traits::CatalogProvider;
pub use types::{CatalogQuery, ProviderId};
