//! Mortgage repayment calculations: monthly instalment and aggregate totals.
//!
//! Supports capital repayment mortgages via the fixed-rate annuity formula
//! and interest-only mortgages. All math in `rust_decimal::Decimal`.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::MortgageError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate, Years};
use crate::MortgageResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const MONTHS_PER_YEAR: Decimal = dec!(12);

const PERCENT_SCALE: Decimal = dec!(100);

/// Quoted rates above this are treated as likely data-entry errors.
const HIGH_RATE_THRESHOLD: Decimal = dec!(25);

/// Terms beyond this exceed what lenders typically offer.
const LONG_TERM_THRESHOLD: Decimal = dec!(40);

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// How each monthly instalment is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepaymentType {
    /// Each instalment repays principal and interest (annuity mortgage).
    Repayment,
    /// Each instalment covers interest only; the full principal remains
    /// outstanding at the end of the term.
    InterestOnly,
}

/// Input parameters for a repayment calculation. Built fresh per submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepaymentInput {
    /// Mortgage amount (principal)
    pub amount: Money,
    /// Mortgage term in years (fractional terms allowed)
    pub term_years: Years,
    /// Annual interest rate in percent (e.g. 5.25 = 5.25%)
    pub annual_interest_rate: Rate,
    /// Mortgage type
    pub repayment_type: RepaymentType,
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Output of the repayment calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepaymentOutput {
    /// Monthly instalment
    pub monthly_payment: Money,
    /// Total paid over the full term (monthly_payment * number_of_payments)
    pub total_payment: Money,
    /// Interest component of the total. For interest-only mortgages every
    /// instalment is interest, so this equals `total_payment`.
    pub total_interest: Money,
    /// Number of monthly instalments over the term
    pub number_of_payments: Decimal,
    /// Monthly interest rate as a fraction (annual percent / 12 / 100)
    pub monthly_rate: Decimal,
    /// Mortgage type (echoed back for downstream labelling)
    pub repayment_type: RepaymentType,
}

// ---------------------------------------------------------------------------
// Calculations
// ---------------------------------------------------------------------------

/// Monthly instalment for a mortgage.
///
/// Capital repayment uses the fixed-rate annuity formula
/// `M = P * r / (1 - (1 + r)^-n)` with monthly rate `r` and instalment
/// count `n`; the zero-rate case degenerates to straight-line `P / n`.
/// Interest-only is simply `P * r`, independent of the term.
///
/// Inputs are assumed constrained (`amount > 0`, `term_years > 0`,
/// `annual_interest_rate >= 0`); [`calculate_repayments`] enforces this
/// before calling.
pub fn monthly_payment(
    amount: Money,
    term_years: Years,
    annual_interest_rate: Rate,
    repayment_type: RepaymentType,
) -> MortgageResult<Money> {
    let monthly_rate = annual_interest_rate / MONTHS_PER_YEAR / PERCENT_SCALE;
    let payments = term_years * MONTHS_PER_YEAR;

    match repayment_type {
        RepaymentType::InterestOnly => Ok(amount * monthly_rate),
        RepaymentType::Repayment => {
            if payments <= Decimal::ZERO {
                return Err(MortgageError::InvalidInput {
                    field: "term_years".into(),
                    reason: "Number of payments must be > 0".into(),
                });
            }

            if monthly_rate.is_zero() {
                // No interest accrues; principal is split evenly.
                return Ok(amount / payments);
            }

            let growth = (Decimal::ONE + monthly_rate).powd(payments);
            if growth.is_zero() {
                return Err(MortgageError::DivisionByZero {
                    context: "annuity growth factor".into(),
                });
            }

            let annuity_factor = Decimal::ONE - Decimal::ONE / growth;
            if annuity_factor.is_zero() {
                return Err(MortgageError::DivisionByZero {
                    context: "annuity factor".into(),
                });
            }

            Ok(amount * monthly_rate / annuity_factor)
        }
    }
}

/// Calculate monthly and total repayments for a mortgage.
///
/// Validates the input, computes the monthly instalment via
/// [`monthly_payment`], and derives the aggregate figures:
/// `total_payment = monthly * n` and the interest share of that total.
pub fn calculate_repayments(
    input: &RepaymentInput,
) -> MortgageResult<ComputationOutput<RepaymentOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_repayment_input(input)?;

    let monthly_rate = input.annual_interest_rate / MONTHS_PER_YEAR / PERCENT_SCALE;
    let number_of_payments = input.term_years * MONTHS_PER_YEAR;

    let monthly = monthly_payment(
        input.amount,
        input.term_years,
        input.annual_interest_rate,
        input.repayment_type,
    )?;

    let total_payment = monthly * number_of_payments;
    let total_interest = match input.repayment_type {
        RepaymentType::Repayment => total_payment - input.amount,
        RepaymentType::InterestOnly => total_payment,
    };

    // --- Reasonableness warnings ---
    if input.annual_interest_rate > HIGH_RATE_THRESHOLD {
        warnings.push(format!(
            "Interest rate of {}% is unusually high; verify the quoted rate",
            input.annual_interest_rate
        ));
    }
    if input.term_years > LONG_TERM_THRESHOLD {
        warnings.push(format!(
            "Term of {} years exceeds the {LONG_TERM_THRESHOLD}-year maximum lenders typically offer",
            input.term_years
        ));
    }
    match input.repayment_type {
        RepaymentType::InterestOnly => {
            warnings.push(format!(
                "Interest-only mortgage: the full principal of {} remains outstanding at the end of the term",
                input.amount
            ));
        }
        RepaymentType::Repayment => {
            if monthly_rate.is_zero() {
                warnings.push("Zero interest rate: instalments repay principal only".into());
            }
        }
    }

    let methodology = match input.repayment_type {
        RepaymentType::Repayment => "Fixed-rate annuity repayment",
        RepaymentType::InterestOnly => "Interest-only repayment",
    };

    let output = RepaymentOutput {
        monthly_payment: monthly,
        total_payment,
        total_interest,
        number_of_payments,
        monthly_rate,
        repayment_type: input.repayment_type,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(methodology, input, warnings, elapsed, output))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn validate_repayment_input(input: &RepaymentInput) -> MortgageResult<()> {
    if input.amount <= Decimal::ZERO {
        return Err(MortgageError::InvalidInput {
            field: "amount".into(),
            reason: "Mortgage amount must be greater than 0".into(),
        });
    }
    if input.term_years <= Decimal::ZERO {
        return Err(MortgageError::InvalidInput {
            field: "term_years".into(),
            reason: "Mortgage term must be greater than 0".into(),
        });
    }
    if input.annual_interest_rate < Decimal::ZERO {
        return Err(MortgageError::InvalidInput {
            field: "annual_interest_rate".into(),
            reason: "Interest rate cannot be negative".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
