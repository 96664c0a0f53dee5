//! Level-payment loan arithmetic.
//!
//! Principal validation, APR to monthly rate conversion and the fixed monthly
//! payment of a fully amortizing loan. Every rounding step is round-half-up
//! (`MidpointAwayFromZero`) and results carry a fixed scale, so `0.005000`
//! and `860.66` come back with their trailing zeros intact.

use rust_decimal::prelude::*;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::error::LoanCalcError;
use crate::types::{Money, Percent, Rate};
use crate::LoanCalcResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Smallest principal accepted for origination.
pub const MIN_PRINCIPAL: Money = dec!(1000.00);
/// Largest principal accepted for origination.
pub const MAX_PRINCIPAL: Money = dec!(999999.99);

/// Decimal places kept on a monthly rate.
pub const RATE_DECIMAL_PLACES: u32 = 6;
/// Decimal places kept on a currency amount.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;
/// Rounding rule applied at every rounding step (round half-up).
pub const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

const PERCENT_DIVISOR: Decimal = dec!(100);
const MONTHS_PER_YEAR: Decimal = dec!(12);

const PRINCIPAL_BOUNDS_MESSAGE: &str = "Principal must be between $1,000 and $999,999.99";

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Check a principal against the origination bounds (inclusive).
pub fn validate_principal(principal: Money) -> LoanCalcResult<()> {
    if principal < MIN_PRINCIPAL || principal > MAX_PRINCIPAL {
        tracing::debug!(%principal, "principal rejected");
        return Err(LoanCalcError::InvalidParameter {
            field: "principal".into(),
            reason: PRINCIPAL_BOUNDS_MESSAGE.into(),
        });
    }
    Ok(())
}

/// Convert a quoted APR (6.0 = 6%) to a monthly rate with 6 decimal places.
///
/// The APR is not range checked: negative or very large rates go straight
/// through the arithmetic.
pub fn convert_apr_to_monthly_rate(apr: Percent) -> Rate {
    let monthly = apr / PERCENT_DIVISOR / MONTHS_PER_YEAR;
    round_to_scale(monthly, RATE_DECIMAL_PLACES)
}

/// Fixed monthly payment for a fully amortizing loan, rounded to cents.
///
/// `P * r * (1 + r)^n / ((1 + r)^n - 1)`, or `P / n` when the monthly rate
/// rounds to zero.
pub fn calculate_monthly_payment(
    principal: Money,
    apr: Percent,
    term_months: u32,
) -> LoanCalcResult<Money> {
    validate_principal(principal)?;
    validate_term(term_months)?;

    let rate = convert_apr_to_monthly_rate(apr);
    let raw = level_payment(principal, rate, term_months)?;
    let payment = round_to_scale(raw, CURRENCY_DECIMAL_PLACES);

    tracing::debug!(
        %principal,
        %apr,
        term_months,
        monthly_rate = %rate,
        monthly_payment = %payment,
        "monthly payment computed"
    );

    Ok(payment)
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

pub(crate) fn validate_term(term_months: u32) -> LoanCalcResult<()> {
    if term_months == 0 {
        return Err(LoanCalcError::InvalidParameter {
            field: "term_months".into(),
            reason: "Term must be at least one month".into(),
        });
    }
    Ok(())
}

/// Unrounded level payment for a periodic `rate` over `term_months` periods.
///
/// Evaluated as `P * r / (1 - (1 + r)^-n)`. For a positive rate the discount
/// factor shrinks toward zero, so long terms at high rates stay in range.
fn level_payment(principal: Money, rate: Rate, term_months: u32) -> LoanCalcResult<Money> {
    let n = Decimal::from(term_months);

    if rate.is_zero() {
        return Ok(principal / n);
    }

    let one_plus_r = Decimal::ONE + rate;
    if one_plus_r.is_zero() {
        return Err(LoanCalcError::DivisionByZero {
            context: "discount base 1 / (1 + r)".into(),
        });
    }

    let discount = (Decimal::ONE / one_plus_r)
        .checked_powu(u64::from(term_months))
        .ok_or_else(|| LoanCalcError::ArithmeticOverflow {
            context: format!("(1 + {rate})^-{term_months}"),
        })?;

    let denominator = Decimal::ONE - discount;
    if denominator.is_zero() {
        return Err(LoanCalcError::DivisionByZero {
            context: "annuity factor 1 - (1 + r)^-n".into(),
        });
    }

    principal
        .checked_mul(rate)
        .and_then(|interest| interest.checked_div(denominator))
        .ok_or_else(|| LoanCalcError::ArithmeticOverflow {
            context: "level payment".into(),
        })
}

/// Round half-up to `dp` places and pin the scale so trailing zeros survive.
pub(crate) fn round_to_scale(value: Decimal, dp: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(dp, ROUNDING);
    rounded.rescale(dp);
    rounded
}
