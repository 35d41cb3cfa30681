use super::comparison::{ComparisonRow, MAX_COMPARED, comparison_rows};
use super::{filter_engine, recommendation_engine};
use crate::domain::catalog::Catalog;
use crate::domain::context::OrderContext;
use crate::domain::filter::{FilterOutcome, FilterState};
use crate::domain::method::{Market, PaymentMethod};
use crate::domain::ports::CatalogSourceBox;
use crate::domain::recommendation::RecommendationResult;
use crate::error::{AdvisorError, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The entry point collaborators use to query the catalog.
///
/// `CheckoutAdvisor` holds the shared, read-only catalog and hands it to the
/// filter and recommendation engines. Every call recomputes from scratch, so one
/// advisor can serve any number of callers at once.
#[derive(Debug, Clone)]
pub struct CheckoutAdvisor {
    catalog: Arc<Catalog>,
}

impl CheckoutAdvisor {
    /// Creates a new `CheckoutAdvisor` over an already validated catalog.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Loads the catalog from `source` and wraps it.
    pub async fn from_source(source: CatalogSourceBox) -> Result<Self> {
        let catalog = source.load().await?;
        info!(
            source = %source.describe(),
            methods = catalog.len(),
            "payment catalog loaded"
        );
        Ok(Self::new(Arc::new(catalog)))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn find(&self, id: &str) -> Option<&PaymentMethod> {
        self.catalog.get(id)
    }

    /// Compatible and incompatible methods of `market`, plus the market total.
    pub fn filter(&self, state: &FilterState, market: Market) -> FilterOutcome<'_> {
        let outcome = filter_engine::filter(self.catalog.methods(), state, market);
        debug!(
            %market,
            speed = %state.speed,
            convenience = %state.convenience,
            total = outcome.total,
            shown = outcome.results.len(),
            compatible = outcome.compatible_count(),
            "filtered payment methods"
        );
        outcome
    }

    /// Top three methods for the order, scored over the whole catalog.
    pub fn recommend(&self, ctx: &OrderContext) -> RecommendationResult<'_> {
        let result = recommendation_engine::recommend(self.catalog.methods(), ctx);
        debug!(
            market = %ctx.market,
            delivery = %ctx.delivery_type,
            order_value = %ctx.order_value,
            top_score = result.top().map(|r| r.score),
            confident = result.is_confident,
            "recommended payment methods"
        );
        result
    }

    /// Side-by-side rows for up to three methods, in the order requested.
    ///
    /// Unknown ids are skipped. More than three ids is a caller error.
    pub fn compare(&self, ids: &[String]) -> Result<Vec<ComparisonRow>> {
        if ids.len() > MAX_COMPARED {
            return Err(AdvisorError::ValidationError(format!(
                "At most {MAX_COMPARED} methods can be compared, got {}",
                ids.len()
            )));
        }

        let methods: Vec<&PaymentMethod> = ids
            .iter()
            .filter_map(|id| {
                let method = self.find(id);
                if method.is_none() {
                    warn!(%id, "skipping unknown payment method in comparison");
                }
                method
            })
            .collect();

        Ok(comparison_rows(&methods))
    }
}
