use std::fmt;

use rust_decimal_macros::dec;

use super::application::CreditApplication;
use super::decision::CreditDecision;
use crate::types::Money;

/// Currency units per million; inputs and payments are quoted in millions.
const UNITS_PER_MILLION: Money = dec!(1_000_000);

/// Human-readable rendering of a request and its verdict, for verbose mode.
pub struct DecisionSummary<'a> {
    application: &'a CreditApplication,
    decision: &'a CreditDecision,
}

impl<'a> DecisionSummary<'a> {
    pub fn new(application: &'a CreditApplication, decision: &'a CreditDecision) -> Self {
        DecisionSummary {
            application,
            decision,
        }
    }
}

impl fmt::Display for DecisionSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let applicant = &self.application.applicant;
        let loan = &self.application.loan;
        let period = loan.repayment_period.normalize();
        let unit = if period == dec!(1) { "year" } else { "years" };

        writeln!(f, "Age: {}", applicant.age)?;
        writeln!(f, "Sex: {}", applicant.sex)?;
        writeln!(f, "Income source: {}", applicant.income_source)?;
        writeln!(
            f,
            "Last-year income (millions): {}",
            applicant.last_year_income.normalize()
        )?;
        writeln!(f, "Credit rating: {}", applicant.credit_rating)?;
        writeln!(f, "Requested sum (millions): {}", loan.requested_sum.normalize())?;
        writeln!(f, "Repayment period: {period} {unit}")?;
        writeln!(f, "Aim: {}", loan.aim)?;

        match self.decision.annual_payment {
            Some(payment) if self.decision.approved => write!(
                f,
                "Credit approved, annual payment: {}",
                (payment * UNITS_PER_MILLION).normalize()
            ),
            _ => {
                let reasons: Vec<&str> = self
                    .decision
                    .denial_reasons
                    .iter()
                    .map(|r| r.label())
                    .collect();
                write!(f, "Credit denied: {}", reasons.join("; "))
            }
        }
    }
}
