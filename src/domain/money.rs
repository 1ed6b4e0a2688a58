//! Monetary types and fixed-locale formatting.
//!
//! The storefront prices everything in euros and renders amounts the
//! French way: narrow no-break space as thousands separator, comma as
//! decimal separator, currency sign trailing ("1 234,50 €").

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Price represented as a Decimal for precision.
pub type Price = Decimal;

/// Thousands separator and sign spacing, per the fr-FR locale.
const NNBSP: char = '\u{202f}';

/// Format an amount as a French-locale euro string.
///
/// The amount is rounded to cents, half away from zero. Negative amounts
/// carry a leading minus sign.
#[must_use]
pub fn format_eur(amount: Price) -> String {
    let rounded = amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .abs();
    let total_cents = (rounded * Decimal::ONE_HUNDRED).to_u128().unwrap_or(0);
    let whole = total_cents / 100;
    let cents = total_cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(NNBSP);
        }
        grouped.push(ch);
    }

    let sign = if amount.is_sign_negative() && total_cents > 0 {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped},{cents:02}{NNBSP}€")
}
