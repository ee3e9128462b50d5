//! Risk-adjusted interest rate.
//!
//! The effective annual rate is `BASE_INTEREST_RATE + modifier`, where the
//! modifier is the sum of four independent adjustments:
//!
//! | factor        | adjustment                                             |
//! |---------------|--------------------------------------------------------|
//! | aim           | mortgage -2%, business -0.5%, auto 0, consumer +1.5%   |
//! | credit rating | -1 → +1.5%, 0 → 0, 1 → -0.25%, 2 → -0.75%              |
//! | sum size      | -log10(requested_sum) × 1%                             |
//! | income source | passive +0.5%, employed -0.25%, self-employed +0.25%   |
//!
//! Only the sum-size term touches `f64`; its result is brought back into
//! decimal through the shortest round-trip representation before use.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::application::{CreditRating, IncomeSource, LoanAim};
use crate::error::UnderwritingError;
use crate::types::{Money, Rate};
use crate::UnderwritingResult;

/// Nominal annual rate before risk adjustments.
pub const BASE_INTEREST_RATE: Rate = dec!(0.1);

/// Weight of the log10 sum-size term.
const SUM_SIZE_WEIGHT: Rate = dec!(0.01);

/// Base rate plus each additive adjustment, kept separately for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateComponents {
    pub base_rate: Rate,
    pub aim_adjustment: Rate,
    pub credit_rating_adjustment: Rate,
    pub sum_size_adjustment: Rate,
    pub income_source_adjustment: Rate,
}

impl RateComponents {
    /// Signed delta applied to the base rate.
    pub fn modifier(&self) -> Rate {
        self.aim_adjustment
            + self.credit_rating_adjustment
            + self.sum_size_adjustment
            + self.income_source_adjustment
    }

    pub fn effective_rate(&self) -> Rate {
        self.base_rate + self.modifier()
    }
}

pub fn aim_adjustment(aim: LoanAim) -> Rate {
    match aim {
        LoanAim::Mortgage => dec!(-0.02),
        LoanAim::BusinessDevelopment => dec!(-0.005),
        LoanAim::AutoLoan => Decimal::ZERO,
        LoanAim::ConsumerLoan => dec!(0.015),
    }
}

pub fn credit_rating_adjustment(rating: CreditRating) -> Rate {
    match rating {
        // moot: denied by the verdict stage
        CreditRating::Insufficient => Decimal::ZERO,
        CreditRating::Poor => dec!(0.015),
        CreditRating::Neutral => Decimal::ZERO,
        CreditRating::Good => dec!(-0.0025),
        CreditRating::Excellent => dec!(-0.0075),
    }
}

pub fn income_source_adjustment(source: IncomeSource) -> Rate {
    match source {
        IncomeSource::PassiveIncome => dec!(0.005),
        IncomeSource::Employed => dec!(-0.0025),
        IncomeSource::SelfEmployed => dec!(0.0025),
        // moot: denied by the verdict stage
        IncomeSource::Unemployed => Decimal::ZERO,
    }
}

/// `-log10(requested_sum) * 0.01`. Positive for sums below 1, negative above.
pub fn sum_size_adjustment(requested_sum: Money) -> UnderwritingResult<Rate> {
    if requested_sum <= Decimal::ZERO {
        return Err(UnderwritingError::invalid(
            "requested_sum",
            "Logarithm requires a positive requested sum.",
        ));
    }
    let as_float = requested_sum.to_f64().ok_or_else(|| {
        UnderwritingError::invalid("requested_sum", "Requested sum is not representable as f64.")
    })?;
    let log10 = decimal_from_f64(as_float.log10())?;
    Ok(-log10 * SUM_SIZE_WEIGHT)
}

/// Shortest round-trip rendering of the float, parsed as a decimal.
fn decimal_from_f64(value: f64) -> UnderwritingResult<Decimal> {
    if !value.is_finite() {
        return Err(UnderwritingError::invalid(
            "requested_sum",
            format!("Non-finite logarithm: {value}"),
        ));
    }
    Decimal::from_scientific(&format!("{value:e}")).map_err(|e| {
        UnderwritingError::invalid("requested_sum", format!("Logarithm out of range: {e}"))
    })
}

/// Price a loan. Uses the requested sum, not the capped principal.
pub fn calculate_rate(
    aim: LoanAim,
    credit_rating: CreditRating,
    requested_sum: Money,
    income_source: IncomeSource,
) -> UnderwritingResult<RateComponents> {
    Ok(RateComponents {
        base_rate: BASE_INTEREST_RATE,
        aim_adjustment: aim_adjustment(aim),
        credit_rating_adjustment: credit_rating_adjustment(credit_rating),
        sum_size_adjustment: sum_size_adjustment(requested_sum)?,
        income_source_adjustment: income_source_adjustment(income_source),
    })
}
