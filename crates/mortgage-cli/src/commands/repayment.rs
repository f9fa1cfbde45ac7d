use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use mortgage_core::repayment::{self, RepaymentInput, RepaymentType};

use crate::input;

/// Mortgage type as selected on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MortgageType {
    /// Instalments repay principal and interest
    Repayment,
    /// Instalments cover interest only
    InterestOnly,
}

impl From<MortgageType> for RepaymentType {
    fn from(value: MortgageType) -> Self {
        match value {
            MortgageType::Repayment => RepaymentType::Repayment,
            MortgageType::InterestOnly => RepaymentType::InterestOnly,
        }
    }
}

/// Arguments for the repayments calculation
#[derive(Args)]
pub struct RepaymentsArgs {
    /// Mortgage amount (principal)
    #[arg(long)]
    pub amount: Option<Decimal>,

    /// Mortgage term in years
    #[arg(long)]
    pub term: Option<Decimal>,

    /// Annual interest rate in percent (e.g. 5.25 for 5.25%)
    #[arg(long)]
    pub interest: Option<Decimal>,

    /// Mortgage type
    #[arg(long = "type", value_enum)]
    pub mortgage_type: Option<MortgageType>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_repayments(args: RepaymentsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let repayment_input: RepaymentInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        RepaymentInput {
            amount: args
                .amount
                .ok_or("--amount is required (or provide --input)")?,
            term_years: args.term.ok_or("--term is required (or provide --input)")?,
            annual_interest_rate: args
                .interest
                .ok_or("--interest is required (or provide --input)")?,
            repayment_type: args
                .mortgage_type
                .ok_or("--type is required (or provide --input)")?
                .into(),
        }
    };

    let result = repayment::calculate_repayments(&repayment_input)?;
    Ok(serde_json::to_value(result)?)
}
