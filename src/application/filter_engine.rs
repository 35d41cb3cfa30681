use crate::domain::filter::{ConvenienceFilter, FilterOutcome, FilterState, FilteredMethod, FitStatus};
use crate::domain::method::{Market, PaymentCategory, PaymentMethod};

const BANK_ACCOUNT_REASON: &str = "Requires a bank account";
const PHONE_ONLY_REASON: &str = "Requires physical store visit or no app available";
const CASH_REASON: &str = "Not a cash payment option";
const CATEGORY_REASON: &str = "Not in selected categories";

/// Classifies every method of `market` against `state` and orders the result.
///
/// Methods outside the market are dropped before anything else and never show up,
/// not even as incompatible. Each remaining method is checked for speed, then
/// convenience, then category; the first failed check is its only reason. A
/// non-blank search query then removes non-matching methods entirely. Compatible
/// methods come first, each group ordered by popularity rank.
pub fn filter<'a>(
    methods: &'a [PaymentMethod],
    state: &FilterState,
    market: Market,
) -> FilterOutcome<'a> {
    let available: Vec<&'a PaymentMethod> = methods
        .iter()
        .filter(|m| m.is_available_in(market))
        .collect();
    let total = available.len();

    let query = state.search_query.to_lowercase();
    let searching = !state.search_query.trim().is_empty();

    let mut results: Vec<FilteredMethod<'a>> = available
        .into_iter()
        .map(|method| FilteredMethod {
            method,
            fit: assess(method, state),
        })
        .filter(|r| !searching || matches_search(r.method, &query))
        .collect();

    // Stable sort, so equal ranks keep catalog order.
    results.sort_by_key(|r| (!r.fit.is_compatible(), r.method.popularity_rank));

    FilterOutcome { results, total }
}

/// Runs the ordered fit checks for a single method. Stops at the first failure.
pub fn assess(method: &PaymentMethod, state: &FilterState) -> FitStatus {
    if let Some(max) = state.speed.max_minutes()
        && method.confirmation_minutes > max
    {
        return FitStatus::incompatible(speed_reason(method.confirmation_minutes));
    }

    match state.convenience {
        ConvenienceFilter::NoBankAccount if method.requires_bank_account => {
            return FitStatus::incompatible(BANK_ACCOUNT_REASON);
        }
        ConvenienceFilter::PhoneOnly
            if !method.requires_smartphone || method.requires_physical_visit =>
        {
            return FitStatus::incompatible(PHONE_ONLY_REASON);
        }
        ConvenienceFilter::CashPreferred if method.category != PaymentCategory::CashOtc => {
            return FitStatus::incompatible(CASH_REASON);
        }
        _ => {}
    }

    if !state.categories.is_empty() && !state.categories.contains(&method.category) {
        return FitStatus::incompatible(CATEGORY_REASON);
    }

    FitStatus::Compatible
}

/// Explains a slow confirmation by the tier it falls into.
///
/// Anything under two hours has no tier and yields an empty string.
pub fn speed_reason(minutes: u32) -> &'static str {
    match minutes {
        4320.. => "Takes up to 3 days to confirm",
        1440.. => "Takes up to 24 hours to confirm",
        120.. => "Takes up to 2 hours to confirm",
        _ => "",
    }
}

/// `query` must already be lower-cased.
fn matches_search(method: &PaymentMethod, query: &str) -> bool {
    method.name.to_lowercase().contains(query)
        || method.tagline.to_lowercase().contains(query)
        || method.category.as_str().contains(query)
}
