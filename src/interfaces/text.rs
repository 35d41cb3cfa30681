use super::format::{format_amount, format_currency};
use crate::application::comparison::ComparisonRow;
use crate::domain::context::OrderContext;
use crate::domain::filter::{FilterOutcome, FitStatus};
use crate::domain::recommendation::RecommendationResult;
use crate::error::Result;
use std::io::Write;

/// Plain-text rendering of filter results, one method per line.
pub fn write_filter_outcome(
    out: &mut impl Write,
    outcome: &FilterOutcome<'_>,
    recommended: Option<&RecommendationResult<'_>>,
) -> Result<()> {
    for result in &outcome.results {
        let method = result.method;
        let marker = match recommended {
            Some(rec) if rec.is_recommended(&method.id) => "★",
            _ => " ",
        };
        let status = match &result.fit {
            FitStatus::Compatible => "ok".to_string(),
            FitStatus::Incompatible { reason } if reason.is_empty() => "incompatible".to_string(),
            FitStatus::Incompatible { reason } => format!("incompatible: {reason}"),
        };
        writeln!(
            out,
            "{marker} {:<16} {:<22} {:<14} {:>10}  {}",
            method.id,
            method.name,
            method.category.as_str(),
            method.confirmation_time.badge(),
            status
        )?;
    }
    writeln!(
        out,
        "{} of {} compatible",
        outcome.compatible_count(),
        outcome.total
    )?;
    Ok(())
}

/// Explanation sentence followed by the ranked picks.
pub fn write_recommendations(
    out: &mut impl Write,
    ctx: &OrderContext,
    result: &RecommendationResult<'_>,
) -> Result<()> {
    writeln!(out, "{}", result.explanation)?;
    writeln!(
        out,
        "Order value: {}",
        format_currency(ctx.order_value, ctx.market)
    )?;
    for (i, rec) in result.recommendations.iter().enumerate() {
        writeln!(
            out,
            "{}. {} ({:.0}/100) - {}",
            i + 1,
            rec.method.name,
            rec.score,
            rec.reason
        )?;
        writeln!(
            out,
            "   limit {} to {}",
            format_amount(rec.method.min_amount, rec.method.currency),
            format_amount(rec.method.max_amount, rec.method.currency)
        )?;
    }
    if !result.is_confident {
        writeln!(out, "No strong match for this order; compare the options below.")?;
    }
    Ok(())
}

/// Comparison table with one column per method.
pub fn write_comparison(out: &mut impl Write, names: &[&str], rows: &[ComparisonRow]) -> Result<()> {
    write!(out, "{:<20}", "")?;
    for name in names {
        write!(out, " | {name:<24}")?;
    }
    writeln!(out)?;
    for row in rows {
        write!(out, "{:<20}", row.label)?;
        for cell in &row.cells {
            write!(out, " | {cell:<24}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
