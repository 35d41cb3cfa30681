use super::method::{PaymentCategory, PaymentMethod};
use crate::error::{AdvisorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SpeedFilter {
    #[default]
    All,
    Instant,
    #[serde(rename = "under-2hr")]
    Under2Hours,
    #[serde(rename = "under-24hr")]
    Under24Hours,
}

impl SpeedFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeedFilter::All => "all",
            SpeedFilter::Instant => "instant",
            SpeedFilter::Under2Hours => "under-2hr",
            SpeedFilter::Under24Hours => "under-24hr",
        }
    }

    /// Longest confirmation a method may take and still pass. `None` for `All`.
    pub fn max_minutes(&self) -> Option<u32> {
        match self {
            SpeedFilter::All => None,
            SpeedFilter::Instant => Some(0),
            SpeedFilter::Under2Hours => Some(120),
            SpeedFilter::Under24Hours => Some(1440),
        }
    }
}

impl fmt::Display for SpeedFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpeedFilter {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(SpeedFilter::All),
            "instant" => Ok(SpeedFilter::Instant),
            "under-2hr" => Ok(SpeedFilter::Under2Hours),
            "under-24hr" => Ok(SpeedFilter::Under24Hours),
            _ => Err(AdvisorError::unknown("speed filter", s)),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ConvenienceFilter {
    #[default]
    All,
    NoBankAccount,
    PhoneOnly,
    CashPreferred,
}

impl ConvenienceFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConvenienceFilter::All => "all",
            ConvenienceFilter::NoBankAccount => "no-bank-account",
            ConvenienceFilter::PhoneOnly => "phone-only",
            ConvenienceFilter::CashPreferred => "cash-preferred",
        }
    }
}

impl fmt::Display for ConvenienceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConvenienceFilter {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(ConvenienceFilter::All),
            "no-bank-account" => Ok(ConvenienceFilter::NoBankAccount),
            "phone-only" => Ok(ConvenienceFilter::PhoneOnly),
            "cash-preferred" => Ok(ConvenienceFilter::CashPreferred),
            _ => Err(AdvisorError::unknown("convenience filter", s)),
        }
    }
}

/// The shopper's filter choices. Every field is set independently.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    #[serde(default)]
    pub speed: SpeedFilter,
    #[serde(default)]
    pub convenience: ConvenienceFilter,
    /// Allowed categories. Empty means no restriction.
    #[serde(default)]
    pub categories: Vec<PaymentCategory>,
    #[serde(default)]
    pub search_query: String,
}

impl FilterState {
    /// Number of filter dimensions that currently narrow the list.
    pub fn active_filter_count(&self) -> usize {
        [
            self.speed != SpeedFilter::All,
            self.convenience != ConvenienceFilter::All,
            !self.categories.is_empty(),
            !self.search_query.is_empty(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    pub fn has_active_filters(&self) -> bool {
        self.active_filter_count() > 0
    }
}

/// Outcome of checking one method against the filter state.
///
/// A method carries at most one reason: the first check it fails.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
#[serde(tag = "fitStatus", rename_all = "lowercase")]
pub enum FitStatus {
    Compatible,
    Incompatible {
        #[serde(rename = "fitReason")]
        reason: String,
    },
}

impl FitStatus {
    pub fn incompatible(reason: impl Into<String>) -> Self {
        FitStatus::Incompatible {
            reason: reason.into(),
        }
    }

    pub fn is_compatible(&self) -> bool {
        matches!(self, FitStatus::Compatible)
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            FitStatus::Compatible => None,
            FitStatus::Incompatible { reason } => Some(reason),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct FilteredMethod<'a> {
    pub method: &'a PaymentMethod,
    #[serde(flatten)]
    pub fit: FitStatus,
}

/// Filter engine output: the ordered, annotated list and the market total.
#[derive(Debug, Serialize, PartialEq, Clone, Default)]
pub struct FilterOutcome<'a> {
    pub results: Vec<FilteredMethod<'a>>,
    /// Methods available in the market, before any other filter field applies.
    pub total: usize,
}

impl FilterOutcome<'_> {
    pub fn compatible_count(&self) -> usize {
        self.results.iter().filter(|r| r.fit.is_compatible()).count()
    }
}
