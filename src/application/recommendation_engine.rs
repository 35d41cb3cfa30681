use crate::domain::context::{DeliveryType, OrderContext};
use crate::domain::method::PaymentMethod;
use crate::domain::recommendation::{RecommendationResult, RecommendedMethod};

const BASE_SCORE: f64 = 50.0;
const SUCCESS_RATE_BASELINE: f64 = 0.80;
const SUCCESS_RATE_SCALE: f64 = 75.0;
const CONFIDENCE_THRESHOLD: f64 = 60.0;
const MAX_RECOMMENDATIONS: usize = 3;
const FALLBACK_REASON: &str = "Good fit for your order";

/// Scores one method for the order. Deterministic and always within [0, 100].
///
/// Starts from 50 and adds four independent adjustments:
///
/// * delivery fit: how well the confirmation speed matches the delivery urgency
/// * success rate: deviation from the 80% baseline, scaled by 75
/// * popularity: `(6 - rank) * 2` for the top five ranks
/// * order value: +5 inside the method's amount range, -20 outside it
pub fn score(method: &PaymentMethod, ctx: &OrderContext) -> f64 {
    let raw = BASE_SCORE
        + delivery_fit(method.confirmation_minutes, ctx.delivery_type)
        + (method.success_rate - SUCCESS_RATE_BASELINE) * SUCCESS_RATE_SCALE
        + popularity_bonus(method.popularity_rank)
        + if method.accepts_amount(ctx.order_value) {
            5.0
        } else {
            -20.0
        };

    raw.clamp(0.0, 100.0)
}

fn delivery_fit(minutes: u32, delivery: DeliveryType) -> f64 {
    match delivery {
        DeliveryType::SameDay => match minutes {
            0 => 30.0,
            1..=120 => 10.0,
            _ => -40.0,
        },
        DeliveryType::Express => match minutes {
            0 => 25.0,
            1..=120 => 15.0,
            _ => -20.0,
        },
        DeliveryType::Standard => {
            if minutes <= 1440 {
                10.0
            } else {
                -10.0
            }
        }
        DeliveryType::Scheduled => 5.0,
    }
}

fn popularity_bonus(rank: u32) -> f64 {
    f64::from(6u32.saturating_sub(rank) * 2)
}

/// Short justification built from the method's strongest traits, joined with " · ".
pub fn reason(method: &PaymentMethod, ctx: &OrderContext) -> String {
    let mut parts = Vec::new();
    if method.is_instant() {
        parts.push("Instant confirmation".to_string());
    }
    if method.success_rate >= 0.9 {
        parts.push(format!(
            "{}% success rate",
            (method.success_rate * 100.0).round() as u32
        ));
    }
    if method.popularity_rank <= 2 {
        parts.push("Most popular in your market".to_string());
    }
    if ctx.delivery_type == DeliveryType::SameDay && method.is_instant() {
        parts.push("perfect for same-day delivery".to_string());
    }

    if parts.is_empty() {
        FALLBACK_REASON.to_string()
    } else {
        parts.join(" · ")
    }
}

/// Banner sentence introducing the recommendations.
pub fn explanation(ctx: &OrderContext) -> String {
    format!(
        "Based on your {} order in {}, we recommend:",
        ctx.delivery_type.label(),
        ctx.market.display_name()
    )
}

/// Picks the three best methods of the order's market.
///
/// Always scores the whole catalog rather than a filtered subset, so the picks do
/// not move when the shopper changes filters. Ties keep catalog order.
pub fn recommend<'a>(methods: &'a [PaymentMethod], ctx: &OrderContext) -> RecommendationResult<'a> {
    let mut scored: Vec<RecommendedMethod<'a>> = methods
        .iter()
        .filter(|m| m.is_available_in(ctx.market))
        .map(|method| RecommendedMethod {
            method,
            score: score(method, ctx),
            reason: reason(method, ctx),
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(MAX_RECOMMENDATIONS);

    let is_confident = scored
        .first()
        .is_some_and(|top| top.score > CONFIDENCE_THRESHOLD);

    RecommendationResult {
        recommendations: scored,
        explanation: explanation(ctx),
        is_confident,
    }
}
