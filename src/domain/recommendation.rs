use super::method::PaymentMethod;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct RecommendedMethod<'a> {
    pub method: &'a PaymentMethod,
    /// Suitability for the order, always within [0, 100].
    pub score: f64,
    pub reason: String,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult<'a> {
    /// At most three entries, best score first.
    pub recommendations: Vec<RecommendedMethod<'a>>,
    pub explanation: String,
    pub is_confident: bool,
}

impl<'a> RecommendationResult<'a> {
    pub fn top(&self) -> Option<&RecommendedMethod<'a>> {
        self.recommendations.first()
    }

    /// Ids of the recommended methods, for badge lookups.
    pub fn recommended_ids(&self) -> HashSet<&'a str> {
        self.recommendations
            .iter()
            .map(|r| r.method.id.as_str())
            .collect()
    }

    /// Recommendation reason keyed by method id.
    pub fn reasons(&self) -> HashMap<&'a str, &str> {
        self.recommendations
            .iter()
            .map(|r| (r.method.id.as_str(), r.reason.as_str()))
            .collect()
    }

    pub fn is_recommended(&self, id: &str) -> bool {
        self.recommendations.iter().any(|r| r.method.id == id)
    }
}
