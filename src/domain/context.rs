use super::method::Market;
use crate::error::{AdvisorError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How urgently the shopper needs the order delivered.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryType {
    SameDay,
    Express,
    Standard,
    Scheduled,
}

impl DeliveryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryType::SameDay => "same-day",
            DeliveryType::Express => "express",
            DeliveryType::Standard => "standard",
            DeliveryType::Scheduled => "scheduled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeliveryType::SameDay => "same-day delivery",
            DeliveryType::Express => "express delivery",
            DeliveryType::Standard => "standard delivery",
            DeliveryType::Scheduled => "scheduled delivery",
        }
    }
}

impl fmt::Display for DeliveryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryType {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "same-day" => Ok(DeliveryType::SameDay),
            "express" => Ok(DeliveryType::Express),
            "standard" => Ok(DeliveryType::Standard),
            "scheduled" => Ok(DeliveryType::Scheduled),
            _ => Err(AdvisorError::unknown("delivery type", s)),
        }
    }
}

/// The order the shopper is checking out. Only changes on explicit user action.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OrderContext {
    pub market: Market,
    pub delivery_type: DeliveryType,
    pub order_value: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl OrderContext {
    pub fn new(market: Market, delivery_type: DeliveryType, order_value: Decimal) -> Self {
        Self {
            market,
            delivery_type,
            order_value,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl Default for OrderContext {
    fn default() -> Self {
        Self::new(Market::Philippines, DeliveryType::SameDay, dec!(500))
    }
}

/// Canned order contexts offered next to the manual controls.
pub fn order_context_presets() -> Vec<OrderContext> {
    vec![
        OrderContext::new(Market::Philippines, DeliveryType::SameDay, dec!(500))
            .with_label("Manila · Same-day · Small"),
        OrderContext::new(Market::Philippines, DeliveryType::Standard, dec!(5000))
            .with_label("Manila · Standard · Large"),
        OrderContext::new(Market::Thailand, DeliveryType::SameDay, dec!(200))
            .with_label("Bangkok · Same-day · Small"),
        OrderContext::new(Market::Thailand, DeliveryType::Scheduled, dec!(2000))
            .with_label("Bangkok · Scheduled · Large"),
        OrderContext::new(Market::Indonesia, DeliveryType::Express, dec!(100000))
            .with_label("Jakarta · Express · Small"),
        OrderContext::new(Market::Indonesia, DeliveryType::Standard, dec!(1000000))
            .with_label("Jakarta · Standard · Large"),
    ]
}
