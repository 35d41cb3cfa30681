use crate::domain::method::{Currency, Market};
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats `amount` in the market's currency, rounded to whole units.
pub fn format_currency(amount: Decimal, market: Market) -> String {
    format_amount(amount, market.currency())
}

/// Formats `amount` the way the currency's home locale writes it.
///
/// PHP and THB group thousands with commas (`₱1,500`, `฿1,500`), IDR with dots
/// and a non-breaking space after the symbol (`Rp 1.500`). `MULTI` amounts get
/// plain comma grouping with no symbol.
pub fn format_amount(amount: Decimal, currency: Currency) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = rounded.abs().trunc().normalize().to_string();

    match currency {
        Currency::Php => format!("{sign}₱{}", group_thousands(&digits, ',')),
        Currency::Thb => format!("{sign}฿{}", group_thousands(&digits, ',')),
        Currency::Idr => format!("{sign}Rp\u{a0}{}", group_thousands(&digits, '.')),
        Currency::Multi => format!("{sign}{}", group_thousands(&digits, ',')),
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
