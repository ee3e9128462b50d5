use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use loan_underwriting_core::underwriting::application::CreditApplication;
use loan_underwriting_core::underwriting::validation::parse_application;
use loan_underwriting_core::{assess_application, DecisionOptions};

use crate::input;

/// Application fields, given as flags, a JSON file, or JSON on stdin.
#[derive(Args)]
pub struct ApplicationArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Applicant age in whole years
    #[arg(long, allow_negative_numbers = true)]
    pub age: Option<i64>,

    /// Sex: F or M
    #[arg(long)]
    pub sex: Option<String>,

    /// Income source: passive-income, employed, self-employed, unemployed
    #[arg(long)]
    pub income_source: Option<String>,

    /// Last-year income, millions
    #[arg(long, alias = "income", allow_negative_numbers = true)]
    pub last_year_income: Option<Decimal>,

    /// Credit rating: -2, -1, 0, 1 or 2
    #[arg(long, alias = "rating", allow_negative_numbers = true)]
    pub credit_rating: Option<i64>,

    /// Requested principal, millions (0.1 to 10)
    #[arg(long, alias = "sum", allow_negative_numbers = true)]
    pub requested_sum: Option<Decimal>,

    /// Repayment period in years (1 to 20)
    #[arg(long, alias = "period", allow_negative_numbers = true)]
    pub repayment_period: Option<Decimal>,

    /// Aim: mortgage, business-development, auto-loan, consumer-loan
    #[arg(long)]
    pub aim: Option<String>,
}

/// Arguments for a full underwriting decision
#[derive(Args)]
pub struct DecideArgs {
    #[command(flatten)]
    pub application: ApplicationArgs,

    /// Log a human-readable summary of the request and verdict to stderr
    #[arg(long, short)]
    pub verbose: bool,
}

/// Arguments for validation only
#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub application: ApplicationArgs,
}

pub fn run_decide(args: DecideArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let application = load_application(&args.application)?;
    let options = DecisionOptions {
        verbose: args.verbose,
    };
    let result = assess_application(&application, &options)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_validate(args: ValidateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let application = load_application(&args.application)?;
    Ok(serde_json::to_value(application)?)
}

/// Every source funnels through the same untyped validator, so a missing flag
/// and a missing JSON key produce the same field-level error.
fn load_application(
    args: &ApplicationArgs,
) -> Result<CreditApplication, Box<dyn std::error::Error>> {
    let document: Value = if let Some(ref path) = args.input {
        input::file::read_json_value(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        data
    } else {
        json!({
            "age": args.age,
            "sex": args.sex,
            "income_source": args.income_source,
            "last_year_income": args.last_year_income,
            "credit_rating": args.credit_rating,
            "requested_sum": args.requested_sum,
            "repayment_period": args.repayment_period,
            "aim": args.aim,
        })
    };

    Ok(parse_application(&document)?)
}
