use super::method::{Market, PaymentMethod};
use crate::error::{AdvisorError, Result};
use std::collections::HashSet;

/// The immutable payment-method table both engines read from.
///
/// Built once at startup and shared read-only; entries keep their source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    methods: Vec<PaymentMethod>,
}

impl Catalog {
    /// Validates every entry and rejects duplicate ids.
    pub fn new(methods: Vec<PaymentMethod>) -> Result<Self> {
        let mut seen = HashSet::new();
        for method in &methods {
            method.validate()?;
            if !seen.insert(method.id.as_str()) {
                return Err(AdvisorError::ValidationError(format!(
                    "Duplicate payment method id '{}'",
                    method.id
                )));
            }
        }
        Ok(Self { methods })
    }

    pub fn methods(&self) -> &[PaymentMethod] {
        &self.methods
    }

    pub fn get(&self, id: &str) -> Option<&PaymentMethod> {
        self.methods.iter().find(|m| m.id == id)
    }

    pub fn in_market(&self, market: Market) -> impl Iterator<Item = &PaymentMethod> {
        self.methods.iter().filter(move |m| m.is_available_in(market))
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl AsRef<[PaymentMethod]> for Catalog {
    fn as_ref(&self) -> &[PaymentMethod] {
        &self.methods
    }
}
