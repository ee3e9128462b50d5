//! Denial predicates.
//!
//! All six predicates are evaluated on every call so the caller sees every
//! applicable reason, in declaration order.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::application::{ApplicantProfile, CreditRating, IncomeSource, LoanRequest, Sex};
use crate::types::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    /// requested_sum > capped principal
    RequestedSumExceedsLimit,
    /// age + repayment_period > retirement age
    AgeAtMaturityExceedsRetirement,
    /// requested_sum / repayment_period > last_year_income / 3
    SumPerYearExceedsThirdOfIncome,
    /// credit_rating == -2
    InsufficientCreditRating,
    /// income_source == unemployed
    NoSteadyIncomeSource,
    /// annual_payment > last_year_income / 2
    PaymentExceedsHalfOfIncome,
}

impl DenialReason {
    pub fn label(&self) -> &'static str {
        match self {
            DenialReason::RequestedSumExceedsLimit => "requested sum exceeds approvable limit",
            DenialReason::AgeAtMaturityExceedsRetirement => {
                "age at loan maturity exceeds retirement age"
            }
            DenialReason::SumPerYearExceedsThirdOfIncome => {
                "requested-sum/period ratio exceeds one-third of last-year income"
            }
            DenialReason::InsufficientCreditRating => "insufficient credit rating",
            DenialReason::NoSteadyIncomeSource => "no steady income source",
            DenialReason::PaymentExceedsHalfOfIncome => {
                "annual payment exceeds half of last-year income"
            }
        }
    }
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn retirement_age(sex: Sex) -> u32 {
    match sex {
        Sex::Female => 55,
        Sex::Male => 60,
    }
}

/// Collect every triggered denial reason. Empty means approve.
///
/// The ratio predicates are cross-multiplied so that no rounded quotient
/// takes part in the comparison.
pub fn evaluate_denials(
    applicant: &ApplicantProfile,
    loan: &LoanRequest,
    capped_principal: Money,
    annual_payment: Money,
) -> Vec<DenialReason> {
    let income = applicant.last_year_income;
    let age_at_maturity = Decimal::from(applicant.age) + loan.repayment_period;

    let checks = [
        (
            DenialReason::RequestedSumExceedsLimit,
            loan.requested_sum > capped_principal,
        ),
        (
            DenialReason::AgeAtMaturityExceedsRetirement,
            age_at_maturity > Decimal::from(retirement_age(applicant.sex)),
        ),
        (
            DenialReason::SumPerYearExceedsThirdOfIncome,
            // an overflowing right side is beyond any requested_sum * 3
            income
                .checked_mul(loan.repayment_period)
                .map_or(false, |rhs| loan.requested_sum * dec!(3) > rhs),
        ),
        (
            DenialReason::InsufficientCreditRating,
            applicant.credit_rating == CreditRating::Insufficient,
        ),
        (
            DenialReason::NoSteadyIncomeSource,
            applicant.income_source == IncomeSource::Unemployed,
        ),
        (
            DenialReason::PaymentExceedsHalfOfIncome,
            annual_payment * dec!(2) > income,
        ),
    ];

    checks
        .into_iter()
        .filter_map(|(reason, triggered)| triggered.then_some(reason))
        .collect()
}
