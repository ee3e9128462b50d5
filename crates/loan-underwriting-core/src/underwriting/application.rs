//! Applicant and loan-request value types.
//!
//! Every enumeration round-trips through the exact wire literals accepted by
//! callers (`"F"`, `"passive-income"`, `"business-development"`, ...), both
//! via `FromStr`/`Display` and via serde.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnderwritingError;
use crate::types::{Money, Years};

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "M")]
    Male,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Female => "F",
            Sex::Male => "M",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = UnderwritingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "F" => Ok(Sex::Female),
            "M" => Ok(Sex::Male),
            other => Err(UnderwritingError::invalid(
                "sex",
                format!("'{other}' is not one of F, M"),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncomeSource {
    PassiveIncome,
    Employed,
    SelfEmployed,
    Unemployed,
}

impl IncomeSource {
    pub const ALL: [IncomeSource; 4] = [
        IncomeSource::PassiveIncome,
        IncomeSource::Employed,
        IncomeSource::SelfEmployed,
        IncomeSource::Unemployed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IncomeSource::PassiveIncome => "passive-income",
            IncomeSource::Employed => "employed",
            IncomeSource::SelfEmployed => "self-employed",
            IncomeSource::Unemployed => "unemployed",
        }
    }
}

impl fmt::Display for IncomeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IncomeSource {
    type Err = UnderwritingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IncomeSource::ALL
            .into_iter()
            .find(|source| source.as_str() == s)
            .ok_or_else(|| {
                UnderwritingError::invalid(
                    "income_source",
                    format!(
                        "'{s}' is not one of passive-income, employed, self-employed, unemployed"
                    ),
                )
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoanAim {
    Mortgage,
    BusinessDevelopment,
    AutoLoan,
    ConsumerLoan,
}

impl LoanAim {
    pub const ALL: [LoanAim; 4] = [
        LoanAim::Mortgage,
        LoanAim::BusinessDevelopment,
        LoanAim::AutoLoan,
        LoanAim::ConsumerLoan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LoanAim::Mortgage => "mortgage",
            LoanAim::BusinessDevelopment => "business-development",
            LoanAim::AutoLoan => "auto-loan",
            LoanAim::ConsumerLoan => "consumer-loan",
        }
    }
}

impl fmt::Display for LoanAim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoanAim {
    type Err = UnderwritingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LoanAim::ALL
            .into_iter()
            .find(|aim| aim.as_str() == s)
            .ok_or_else(|| {
                UnderwritingError::invalid(
                    "aim",
                    format!(
                        "'{s}' is not one of mortgage, business-development, auto-loan, consumer-loan"
                    ),
                )
            })
    }
}

/// Bureau-style credit rating on a five-point scale.
///
/// Serialized as the bare integer (-2..=2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum CreditRating {
    /// -2: automatic denial.
    Insufficient,
    /// -1
    Poor,
    /// 0
    Neutral,
    /// 1
    Good,
    /// 2
    Excellent,
}

impl CreditRating {
    pub const ALL: [CreditRating; 5] = [
        CreditRating::Insufficient,
        CreditRating::Poor,
        CreditRating::Neutral,
        CreditRating::Good,
        CreditRating::Excellent,
    ];

    pub fn value(&self) -> i64 {
        match self {
            CreditRating::Insufficient => -2,
            CreditRating::Poor => -1,
            CreditRating::Neutral => 0,
            CreditRating::Good => 1,
            CreditRating::Excellent => 2,
        }
    }
}

impl TryFrom<i64> for CreditRating {
    type Error = UnderwritingError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        CreditRating::ALL
            .into_iter()
            .find(|rating| rating.value() == value)
            .ok_or_else(|| {
                UnderwritingError::invalid(
                    "credit_rating",
                    format!("{value} is not one of -2, -1, 0, 1, 2"),
                )
            })
    }
}

impl From<CreditRating> for i64 {
    fn from(rating: CreditRating) -> Self {
        rating.value()
    }
}

impl fmt::Display for CreditRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

// ---------------------------------------------------------------------------
// Application
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    /// Age in whole years.
    pub age: u32,
    pub sex: Sex,
    pub income_source: IncomeSource,
    /// Income over the last year, millions.
    pub last_year_income: Money,
    pub credit_rating: CreditRating,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    /// Requested principal, millions. Valid range [0.1, 10].
    pub requested_sum: Money,
    /// Repayment period in years. Valid range [1, 20]; fractions are accepted.
    pub repayment_period: Years,
    pub aim: LoanAim,
}

/// Everything the pipeline needs for one decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditApplication {
    pub applicant: ApplicantProfile,
    pub loan: LoanRequest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_literals_parse() {
        assert_eq!("F".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!(
            "passive-income".parse::<IncomeSource>().unwrap(),
            IncomeSource::PassiveIncome
        );
        assert_eq!(
            "business-development".parse::<LoanAim>().unwrap(),
            LoanAim::BusinessDevelopment
        );
    }

    #[test]
    fn test_unknown_literal_reports_field() {
        let err = "X".parse::<Sex>().unwrap_err();
        assert_eq!(err.field(), Some("sex"));
        let err = "other".parse::<IncomeSource>().unwrap_err();
        assert_eq!(err.field(), Some("income_source"));
        let err = "just because".parse::<LoanAim>().unwrap_err();
        assert_eq!(err.field(), Some("aim"));
    }

    #[test]
    fn test_literals_are_case_sensitive() {
        assert!("f".parse::<Sex>().is_err());
        assert!("Mortgage".parse::<LoanAim>().is_err());
    }

    #[test]
    fn test_credit_rating_range() {
        for v in -2..=2 {
            assert_eq!(CreditRating::try_from(v).unwrap().value(), v);
        }
        assert!(CreditRating::try_from(-3).is_err());
        assert!(CreditRating::try_from(3).is_err());
    }

    #[test]
    fn test_serde_uses_wire_literals() {
        let json = serde_json::to_string(&IncomeSource::SelfEmployed).unwrap();
        assert_eq!(json, "\"self-employed\"");
        let json = serde_json::to_string(&Sex::Male).unwrap();
        assert_eq!(json, "\"M\"");
        let rating: CreditRating = serde_json::from_str("-1").unwrap();
        assert_eq!(rating, CreditRating::Poor);
        assert!(serde_json::from_str::<CreditRating>("5").is_err());
    }
}
