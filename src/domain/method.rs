use crate::error::{AdvisorError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A checkout market. Gates which payment methods are offered and how money is formatted.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Market {
    #[serde(rename = "PH")]
    Philippines,
    #[serde(rename = "TH")]
    Thailand,
    #[serde(rename = "ID")]
    Indonesia,
}

impl Market {
    pub const ALL: [Market; 3] = [Market::Philippines, Market::Thailand, Market::Indonesia];

    pub fn code(&self) -> &'static str {
        match self {
            Market::Philippines => "PH",
            Market::Thailand => "TH",
            Market::Indonesia => "ID",
        }
    }

    /// Country name as it reads inside a sentence.
    pub fn display_name(&self) -> &'static str {
        match self {
            Market::Philippines => "the Philippines",
            Market::Thailand => "Thailand",
            Market::Indonesia => "Indonesia",
        }
    }

    pub fn currency(&self) -> Currency {
        match self {
            Market::Philippines => Currency::Php,
            Market::Thailand => Currency::Thb,
            Market::Indonesia => Currency::Idr,
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Market {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PH" => Ok(Market::Philippines),
            "TH" => Ok(Market::Thailand),
            "ID" => Ok(Market::Indonesia),
            _ => Err(AdvisorError::unknown("market", s)),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentCategory {
    EWallet,
    BankTransfer,
    CashOtc,
    QrCode,
    Card,
}

impl PaymentCategory {
    pub const ALL: [PaymentCategory; 5] = [
        PaymentCategory::EWallet,
        PaymentCategory::BankTransfer,
        PaymentCategory::CashOtc,
        PaymentCategory::QrCode,
        PaymentCategory::Card,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentCategory::EWallet => "e-wallet",
            PaymentCategory::BankTransfer => "bank-transfer",
            PaymentCategory::CashOtc => "cash-otc",
            PaymentCategory::QrCode => "qr-code",
            PaymentCategory::Card => "card",
        }
    }
}

impl fmt::Display for PaymentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentCategory {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == needle)
            .ok_or_else(|| AdvisorError::unknown("payment category", s))
    }
}

/// Coarse confirmation-speed label shown on badges.
///
/// Decisions never use this label; they compare `confirmation_minutes` instead.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub enum ConfirmationTime {
    #[serde(rename = "instant")]
    Instant,
    #[serde(rename = "2hr")]
    TwoHours,
    #[serde(rename = "24hr")]
    OneDay,
    #[serde(rename = "48hr")]
    TwoDays,
    #[serde(rename = "3day")]
    ThreeDays,
}

impl ConfirmationTime {
    pub fn badge(&self) -> &'static str {
        match self {
            ConfirmationTime::Instant => "Instant",
            ConfirmationTime::TwoHours => "~2 hours",
            ConfirmationTime::OneDay => "~24 hours",
            ConfirmationTime::TwoDays => "2 days",
            ConfirmationTime::ThreeDays => "3 days",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Php,
    Thb,
    Idr,
    /// Settles in whatever currency the market uses.
    Multi,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Php => "PHP",
            Currency::Thb => "THB",
            Currency::Idr => "IDR",
            Currency::Multi => "MULTI",
        }
    }
}

/// A single entry of the payment-method catalog.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: String,
    pub name: String,
    pub category: PaymentCategory,
    pub markets: Vec<Market>,
    pub confirmation_time: ConfirmationTime,
    /// Minutes until the merchant sees the payment confirmed. 0 means instant.
    pub confirmation_minutes: u32,
    pub expiration_window: String,
    pub flow_description: String,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    pub requires_bank_account: bool,
    pub requires_smartphone: bool,
    pub requires_physical_visit: bool,
    pub min_amount: Decimal,
    pub max_amount: Decimal,
    pub currency: Currency,
    /// Fraction of attempts that complete, between 0.0 and 1.0.
    pub success_rate: f64,
    /// 1 is the most popular method in its primary market.
    pub popularity_rank: u32,
    pub brand_color: String,
    pub icon_name: String,
    pub tagline: String,
    #[serde(default)]
    pub limitations: Vec<String>,
}

impl PaymentMethod {
    pub fn is_available_in(&self, market: Market) -> bool {
        self.markets.contains(&market)
    }

    pub fn is_instant(&self) -> bool {
        self.confirmation_minutes == 0
    }

    /// Whether `value` lies inside the inclusive `[min_amount, max_amount]` range.
    pub fn accepts_amount(&self, value: Decimal) -> bool {
        value >= self.min_amount && value <= self.max_amount
    }

    /// Checks the invariants the engines rely on.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(AdvisorError::ValidationError(
                "Payment method id must not be empty".to_string(),
            ));
        }
        if self.markets.is_empty() {
            return Err(AdvisorError::ValidationError(format!(
                "Payment method '{}' must list at least one market",
                self.id
            )));
        }
        if self.min_amount > self.max_amount {
            return Err(AdvisorError::ValidationError(format!(
                "Payment method '{}' has min amount {} above max amount {}",
                self.id, self.min_amount, self.max_amount
            )));
        }
        if !(0.0..=1.0).contains(&self.success_rate) {
            return Err(AdvisorError::ValidationError(format!(
                "Payment method '{}' has success rate {} outside [0, 1]",
                self.id, self.success_rate
            )));
        }
        Ok(())
    }
}
