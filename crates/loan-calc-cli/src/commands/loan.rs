use clap::Args;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};

use loan_calc_core::calculator::{self, MAX_PRINCIPAL, MIN_PRINCIPAL};
use loan_calc_core::quote::{self, LoanPaymentInput};

use crate::input;

/// Arguments for the monthly payment quote
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct PaymentArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual percentage rate as a percentage (6.0 = 6%)
    #[arg(long)]
    pub apr: Option<Decimal>,

    /// Number of monthly payments
    #[arg(long, alias = "term")]
    pub term_months: Option<u32>,
}

/// Arguments for APR conversion
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct MonthlyRateArgs {
    /// Path to JSON input file with an `apr` field
    #[arg(long)]
    pub input: Option<String>,

    /// Annual percentage rate as a percentage (6.0 = 6%)
    #[arg(long)]
    pub apr: Option<Decimal>,
}

/// Arguments for principal validation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ValidateArgs {
    /// Path to JSON input file with a `principal` field
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal
    #[arg(long)]
    pub principal: Option<Decimal>,
}

#[derive(Deserialize)]
struct AprInput {
    #[serde(alias = "annual_percentage_rate")]
    apr: Decimal,
}

#[derive(Deserialize)]
struct PrincipalInput {
    principal: Decimal,
}

pub fn run_payment(args: PaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan_input: LoanPaymentInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let (Some(principal), Some(apr), Some(term_months)) =
        (args.principal, args.apr, args.term_months)
    {
        LoanPaymentInput {
            principal,
            annual_percentage_rate: apr,
            term_months,
        }
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err(missing_flags(&[
            ("--principal", args.principal.is_some()),
            ("--apr", args.apr.is_some()),
            ("--term-months", args.term_months.is_some()),
        ])
        .into());
    };

    let result = quote::calculate_loan_payment(&loan_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_monthly_rate(args: MonthlyRateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let apr = if let Some(ref path) = args.input {
        input::file::read_json::<AprInput>(path)?.apr
    } else if let Some(apr) = args.apr {
        apr
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value::<AprInput>(data)?.apr
    } else {
        return Err("--apr is required (or provide --input)".into());
    };

    let monthly_rate = calculator::convert_apr_to_monthly_rate(apr);
    Ok(json!({
        "annual_percentage_rate": apr,
        "monthly_rate": monthly_rate,
    }))
}

pub fn run_validate(args: ValidateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let principal = if let Some(ref path) = args.input {
        input::file::read_json::<PrincipalInput>(path)?.principal
    } else if let Some(principal) = args.principal {
        principal
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value::<PrincipalInput>(data)?.principal
    } else {
        return Err("--principal is required (or provide --input)".into());
    };

    calculator::validate_principal(principal)?;
    Ok(json!({
        "principal": principal,
        "valid": true,
        "minimum": MIN_PRINCIPAL,
        "maximum": MAX_PRINCIPAL,
    }))
}

fn missing_flags(flags: &[(&str, bool)]) -> String {
    let missing: Vec<&str> = flags
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect();
    format!("{} required (or provide --input)", missing.join(", "))
}
