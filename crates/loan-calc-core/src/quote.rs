//! Loan payment quote: the monthly payment plus its derived totals, returned
//! in the standard computation envelope.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::calculator::{
    self, CURRENCY_DECIMAL_PLACES, MAX_PRINCIPAL, MIN_PRINCIPAL, RATE_DECIMAL_PLACES,
};
use crate::error::LoanCalcError;
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Rate};
use crate::LoanCalcResult;

/// APR above which a quote carries a high-rate warning.
const HIGH_APR_THRESHOLD: Percent = dec!(36);

// ---------------------------------------------------------------------------
// Input / Output Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanPaymentInput {
    pub principal: Money,
    /// Quoted APR as a percentage (6.0 = 6%).
    #[serde(alias = "apr")]
    pub annual_percentage_rate: Percent,
    pub term_months: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanPaymentOutput {
    pub principal: Money,
    pub annual_percentage_rate: Percent,
    pub term_months: u32,
    pub monthly_rate: Rate,
    pub monthly_payment: Money,
    /// Monthly payment times the number of payments.
    pub total_of_payments: Money,
    /// Total of payments less principal. Can dip below zero by a few cents
    /// on a zero-rate loan whose payment rounds down.
    pub total_interest: Money,
}

// ---------------------------------------------------------------------------
// Quote
// ---------------------------------------------------------------------------

pub fn calculate_loan_payment(
    input: &LoanPaymentInput,
) -> LoanCalcResult<ComputationOutput<LoanPaymentOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let apr = input.annual_percentage_rate;
    let monthly_rate = calculator::convert_apr_to_monthly_rate(apr);
    let monthly_payment =
        calculator::calculate_monthly_payment(input.principal, apr, input.term_months)?;

    if apr < Decimal::ZERO {
        warnings.push("APR is negative; payment is below straight-line repayment.".into());
    } else if apr > HIGH_APR_THRESHOLD {
        warnings.push(format!(
            "APR of {apr}% is above {HIGH_APR_THRESHOLD}%, beyond typical consumer lending caps."
        ));
    }
    if monthly_rate.is_zero() && !apr.is_zero() {
        warnings.push(format!(
            "APR of {apr}% rounds to a zero monthly rate at {RATE_DECIMAL_PLACES} decimal places; \
             repaid straight-line."
        ));
    }

    let total_of_payments = monthly_payment
        .checked_mul(Decimal::from(input.term_months))
        .map(|total| calculator::round_to_scale(total, CURRENCY_DECIMAL_PLACES))
        .ok_or_else(|| LoanCalcError::ArithmeticOverflow {
            context: "total of payments".into(),
        })?;
    let total_interest = calculator::round_to_scale(
        total_of_payments - input.principal,
        CURRENCY_DECIMAL_PLACES,
    );

    let methodology = if monthly_rate.is_zero() {
        "Straight-line repayment (zero rate)"
    } else {
        "Fixed-rate amortization (level payment)"
    };

    let output = LoanPaymentOutput {
        principal: input.principal,
        annual_percentage_rate: apr,
        term_months: input.term_months,
        monthly_rate,
        monthly_payment,
        total_of_payments,
        total_interest,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "monthly_rate": "APR / 100 / 12",
        "rate_decimal_places": RATE_DECIMAL_PLACES,
        "payment_decimal_places": CURRENCY_DECIMAL_PLACES,
        "rounding": "half-up (midpoint away from zero)",
        "principal_bounds": [MIN_PRINCIPAL.to_string(), MAX_PRINCIPAL.to_string()],
    });

    Ok(with_metadata(
        methodology,
        &assumptions,
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn reference_loan() -> LoanPaymentInput {
        LoanPaymentInput {
            principal: dec!(10000.00),
            annual_percentage_rate: dec!(6.0),
            term_months: 12,
        }
    }

    #[test]
    fn test_quote_reference_loan() {
        let out = calculate_loan_payment(&reference_loan()).unwrap();
        let r = &out.result;
        assert_eq!(r.monthly_rate.to_string(), "0.005000");
        assert_eq!(r.monthly_payment.to_string(), "860.66");
        assert_eq!(r.total_of_payments, dec!(10327.92));
        assert_eq!(r.total_interest, dec!(327.92));
        assert_eq!(out.methodology, "Fixed-rate amortization (level payment)");
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_quote_zero_rate() {
        let input = LoanPaymentInput {
            annual_percentage_rate: Decimal::ZERO,
            ..reference_loan()
        };
        let out = calculate_loan_payment(&input).unwrap();
        assert_eq!(out.methodology, "Straight-line repayment (zero rate)");
        assert_eq!(out.result.monthly_payment, dec!(833.33));
        // 833.33 * 12 = 9999.96
        assert_eq!(out.result.total_interest, dec!(-0.04));
    }

    #[test]
    fn test_quote_tiny_apr_warns() {
        let input = LoanPaymentInput {
            annual_percentage_rate: dec!(0.00001),
            ..reference_loan()
        };
        let out = calculate_loan_payment(&input).unwrap();
        assert!(out.result.monthly_rate.is_zero());
        assert!(out.warnings.iter().any(|w| w.contains("zero monthly rate")));
    }

    #[test]
    fn test_quote_high_apr_warns() {
        let input = LoanPaymentInput {
            annual_percentage_rate: dec!(48),
            ..reference_loan()
        };
        let out = calculate_loan_payment(&input).unwrap();
        assert!(out.warnings.iter().any(|w| w.contains("above 36%")));
    }

    #[test]
    fn test_quote_negative_apr_warns() {
        let input = LoanPaymentInput {
            annual_percentage_rate: dec!(-2),
            ..reference_loan()
        };
        let out = calculate_loan_payment(&input).unwrap();
        assert!(out.warnings.iter().any(|w| w.contains("negative")));
        assert!(out.result.monthly_payment < dec!(833.34));
    }

    #[test]
    fn test_quote_propagates_principal_error() {
        let input = LoanPaymentInput {
            principal: dec!(500),
            ..reference_loan()
        };
        let err = calculate_loan_payment(&input).unwrap_err();
        assert!(matches!(err, LoanCalcError::InvalidParameter { .. }));
    }

    #[test]
    fn test_quote_long_term_high_apr_totals() {
        let input = LoanPaymentInput {
            principal: dec!(999999.99),
            annual_percentage_rate: dec!(100),
            term_months: 700,
        };
        let out = calculate_loan_payment(&input).unwrap();
        assert_eq!(out.result.monthly_payment, dec!(83333.00));
        assert_eq!(out.result.total_of_payments, dec!(58333100.00));
        assert!(out.warnings.iter().any(|w| w.contains("above 36%")));
    }

    #[test]
    fn test_quote_deserializes_apr_alias() {
        let input: LoanPaymentInput = serde_json::from_str(
            r#"{"principal": "10000.00", "apr": "6.0", "term_months": 12}"#,
        )
        .unwrap();
        assert_eq!(input, reference_loan());
    }
}
