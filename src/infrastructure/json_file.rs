use crate::domain::catalog::Catalog;
use crate::domain::method::PaymentMethod;
use crate::domain::ports::CatalogSource;
use crate::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

/// Parses a JSON array of payment methods and validates it into a `Catalog`.
pub fn parse_catalog(json: &str) -> Result<Catalog> {
    let methods: Vec<PaymentMethod> = serde_json::from_str(json)?;
    Catalog::new(methods)
}

/// Loads the catalog from a JSON file on disk.
///
/// The file holds the same camelCase records as the built-in table, so a
/// deployment can swap in its own catalog without rebuilding.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn load(&self) -> Result<Catalog> {
        debug!(path = %self.path.display(), "reading payment catalog");
        let json = tokio::fs::read_to_string(&self.path).await?;
        parse_catalog(&json)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
