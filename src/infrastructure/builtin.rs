use super::json_file::parse_catalog;
use crate::domain::catalog::Catalog;
use crate::domain::ports::CatalogSource;
use crate::error::Result;
use async_trait::async_trait;

const PAYMENT_METHODS_JSON: &str = include_str!("../../data/payment_methods.json");

/// The catalog compiled into the binary: grocery checkout methods for PH, TH and ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    /// Synchronous access for callers that are not running an executor.
    pub fn catalog() -> Result<Catalog> {
        parse_catalog(PAYMENT_METHODS_JSON)
    }
}

#[async_trait]
impl CatalogSource for BuiltinCatalog {
    async fn load(&self) -> Result<Catalog> {
        Self::catalog()
    }

    fn describe(&self) -> String {
        "built-in catalog".to_string()
    }
}
