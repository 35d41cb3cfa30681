#![allow(dead_code)]

use paypick::Catalog;
use paypick::domain::method::{ConfirmationTime, Currency, Market, PaymentCategory, PaymentMethod};
use paypick::infrastructure::builtin::BuiltinCatalog;
use rust_decimal_macros::dec;
use std::io::Write;

/// Minimal fixture. Callers override only the fields the engines inspect.
pub fn make_method(id: &str) -> PaymentMethod {
    PaymentMethod {
        id: id.to_string(),
        name: id.to_string(),
        category: PaymentCategory::EWallet,
        markets: vec![Market::Philippines],
        confirmation_time: ConfirmationTime::Instant,
        confirmation_minutes: 0,
        expiration_window: "N/A".to_string(),
        flow_description: String::new(),
        prerequisites: vec![],
        requires_bank_account: false,
        requires_smartphone: false,
        requires_physical_visit: false,
        min_amount: dec!(1),
        max_amount: dec!(100000),
        currency: Currency::Php,
        success_rate: 0.9,
        popularity_rank: 1,
        brand_color: "#000".to_string(),
        icon_name: "wallet".to_string(),
        tagline: String::new(),
        limitations: vec![],
    }
}

pub fn builtin() -> Catalog {
    BuiltinCatalog::catalog().expect("built-in catalog must be valid")
}

/// Writes `methods` as a catalog JSON file the CLI can load.
pub fn write_catalog(methods: &[PaymentMethod]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let json = serde_json::to_string(methods).expect("Failed to serialize catalog");
    file.write_all(json.as_bytes()).expect("Failed to write catalog");
    file
}

/// Seeded catalog of `count` methods with random speeds, ranks, rates and amount ranges.
pub fn random_catalog(seed: u64, count: usize) -> Vec<PaymentMethod> {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rust_decimal::Decimal;

    let mut rng = StdRng::seed_from_u64(seed);
    let speeds = [0, 0, 60, 120, 121, 1440, 2880, 4320];

    (0..count)
        .map(|i| {
            let mut method = make_method(&format!("method-{i}"));
            method.category = PaymentCategory::ALL[rng.gen_range(0..PaymentCategory::ALL.len())];
            method.markets = Market::ALL
                .into_iter()
                .filter(|_| rng.gen_range(0..3) > 0)
                .collect();
            if method.markets.is_empty() {
                method.markets.push(Market::ALL[i % Market::ALL.len()]);
            }
            method.confirmation_minutes = speeds[rng.gen_range(0..speeds.len())];
            method.success_rate = rng.gen_range(0.5..=1.0);
            method.popularity_rank = rng.gen_range(1..=10);
            method.requires_bank_account = rng.gen_range(0..2) == 1;
            method.requires_smartphone = rng.gen_range(0..2) == 1;
            method.requires_physical_visit = rng.gen_range(0..4) == 0;
            method.min_amount = Decimal::from(rng.gen_range(0..1000u32));
            method.max_amount = method.min_amount + Decimal::from(rng.gen_range(1..1_000_000u32));
            method
        })
        .collect()
}
