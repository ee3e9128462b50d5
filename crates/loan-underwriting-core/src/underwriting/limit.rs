use rust_decimal_macros::dec;

use super::application::{CreditRating, IncomeSource};
use crate::types::Money;

/// Ceiling implied by the income source. Unemployed applicants have no
/// ceiling here because they are denied outright by the verdict stage.
pub fn income_source_cap(source: IncomeSource) -> Option<Money> {
    match source {
        IncomeSource::PassiveIncome => Some(dec!(1)),
        IncomeSource::Employed => Some(dec!(5)),
        IncomeSource::SelfEmployed => Some(dec!(10)),
        IncomeSource::Unemployed => None,
    }
}

/// Ceiling implied by the credit rating. Rating -2 is denied outright by the
/// verdict stage and carries no ceiling here.
pub fn credit_rating_cap(rating: CreditRating) -> Option<Money> {
    match rating {
        CreditRating::Insufficient => None,
        CreditRating::Poor => Some(dec!(1)),
        CreditRating::Neutral => Some(dec!(5)),
        CreditRating::Good | CreditRating::Excellent => Some(dec!(10)),
    }
}

/// Maximum approvable principal: the requested sum clamped by both ceilings.
pub fn cap_principal(
    requested_sum: Money,
    income_source: IncomeSource,
    credit_rating: CreditRating,
) -> Money {
    [
        income_source_cap(income_source),
        credit_rating_cap(credit_rating),
    ]
    .into_iter()
    .flatten()
    .fold(requested_sum, Money::min)
}
