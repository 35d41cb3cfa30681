use super::catalog::Catalog;
use crate::error::Result;
use async_trait::async_trait;

/// Somewhere a payment-method catalog can be loaded from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<Catalog>;

    /// Short human-readable origin, used in logs.
    fn describe(&self) -> String;
}

pub type CatalogSourceBox = Box<dyn CatalogSource>;
