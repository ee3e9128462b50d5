use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

use super::application::CreditApplication;
use super::limit::cap_principal;
use super::payment::annual_payment;
use super::rate::{calculate_rate, RateComponents};
use super::summary::DecisionSummary;
use super::validation::validate_application;
use super::verdict::{evaluate_denials, DenialReason};
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::UnderwritingResult;

// ---------------------------------------------------------------------------
// Options / Output
// ---------------------------------------------------------------------------

/// Per-call configuration for [`decide`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionOptions {
    /// Emit a human-readable summary of the request and verdict through
    /// `tracing` (target `underwriting::summary`). Never changes the result.
    #[serde(default)]
    pub verbose: bool,
}

impl DecisionOptions {
    pub fn verbose() -> Self {
        DecisionOptions { verbose: true }
    }
}

/// Verdict for one application.
///
/// `annual_payment` is `Some` exactly when `approved` is true, and
/// `denial_reasons` is empty exactly when `approved` is true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditDecision {
    pub approved: bool,
    pub annual_payment: Option<Money>,
    pub denial_reasons: Vec<DenialReason>,
    /// Maximum approvable principal after income-source and rating ceilings.
    pub approved_limit: Money,
    pub rate: RateComponents,
}

impl CreditDecision {
    fn from_evaluation(
        payment: Money,
        denial_reasons: Vec<DenialReason>,
        approved_limit: Money,
        rate: RateComponents,
    ) -> Self {
        let approved = denial_reasons.is_empty();
        CreditDecision {
            approved,
            annual_payment: approved.then_some(payment),
            denial_reasons,
            approved_limit,
            rate,
        }
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Run the full underwriting pipeline: validate, cap, price, compute the
/// annual payment, then evaluate every denial predicate.
///
/// Only validation can fail; business denials are returned as a decision
/// with `approved == false`.
pub fn decide(
    application: &CreditApplication,
    options: &DecisionOptions,
) -> UnderwritingResult<CreditDecision> {
    validate_application(application)?;

    let applicant = &application.applicant;
    let loan = &application.loan;

    let limit = cap_principal(
        loan.requested_sum,
        applicant.income_source,
        applicant.credit_rating,
    );
    debug!(requested = %loan.requested_sum, limit = %limit, "principal capped");

    let rate = calculate_rate(
        loan.aim,
        applicant.credit_rating,
        loan.requested_sum,
        applicant.income_source,
    )?;
    debug!(
        modifier = %rate.modifier(),
        effective_rate = %rate.effective_rate(),
        "rate computed"
    );

    let payment = annual_payment(limit, loan.repayment_period, rate.effective_rate())?;
    debug!(payment = %payment, "annual payment computed");

    let reasons = evaluate_denials(applicant, loan, limit, payment);
    let decision = CreditDecision::from_evaluation(payment, reasons, limit, rate);

    info!(
        approved = decision.approved,
        reasons = decision.denial_reasons.len(),
        "credit decision"
    );
    if options.verbose {
        info!(
            target: "underwriting::summary",
            "{}",
            DecisionSummary::new(application, &decision)
        );
    }

    Ok(decision)
}

/// [`decide`] wrapped in the standard computation envelope.
pub fn assess_application(
    application: &CreditApplication,
    options: &DecisionOptions,
) -> UnderwritingResult<ComputationOutput<CreditDecision>> {
    let start = Instant::now();
    let decision = decide(application, options)?;

    let mut warnings = Vec::new();
    if application.loan.repayment_period.fract() != Decimal::ZERO {
        warnings.push("repayment period is not a whole number of years".to_string());
    }

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Flat-interest annual payment on capped principal; risk-adjusted rate; six-predicate verdict",
        application,
        warnings,
        elapsed,
        decision,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::underwriting::application::{
        ApplicantProfile, CreditRating, IncomeSource, LoanAim, LoanRequest, Sex,
    };
    use rust_decimal_macros::dec;

    fn base_application() -> CreditApplication {
        CreditApplication {
            applicant: ApplicantProfile {
                age: 20,
                sex: Sex::Male,
                income_source: IncomeSource::Employed,
                last_year_income: dec!(2),
                credit_rating: CreditRating::Neutral,
            },
            loan: LoanRequest {
                requested_sum: dec!(0.1),
                repayment_period: dec!(1),
                aim: LoanAim::Mortgage,
            },
        }
    }

    #[test]
    fn test_approved_carries_payment() {
        let d = decide(&base_application(), &DecisionOptions::default()).unwrap();
        assert!(d.approved);
        assert_eq!(d.annual_payment, Some(dec!(0.10875)));
        assert!(d.denial_reasons.is_empty());
        assert_eq!(d.approved_limit, dec!(0.1));
    }

    #[test]
    fn test_denied_has_no_payment() {
        let mut app = base_application();
        app.applicant.age = 61;
        let d = decide(&app, &DecisionOptions::default()).unwrap();
        assert!(!d.approved);
        assert_eq!(d.annual_payment, None);
        assert_eq!(
            d.denial_reasons,
            vec![DenialReason::AgeAtMaturityExceedsRetirement]
        );
    }

    #[test]
    fn test_validation_precedes_arithmetic() {
        let mut app = base_application();
        app.loan.repayment_period = Decimal::ZERO;
        let err = decide(&app, &DecisionOptions::default()).unwrap_err();
        assert_eq!(err.field(), Some("repayment_period"));
    }

    #[test]
    fn test_verbose_does_not_change_result() {
        let app = base_application();
        let quiet = decide(&app, &DecisionOptions::default()).unwrap();
        let loud = decide(&app, &DecisionOptions::verbose()).unwrap();
        assert_eq!(quiet, loud);
    }

    #[test]
    fn test_envelope_warns_on_fractional_period() {
        let mut app = base_application();
        app.loan.repayment_period = dec!(1.5);
        let out = assess_application(&app, &DecisionOptions::default()).unwrap();
        assert_eq!(out.warnings.len(), 1);

        let out = assess_application(&base_application(), &DecisionOptions::default()).unwrap();
        assert!(out.warnings.is_empty());
        assert_eq!(out.assumptions["applicant"]["sex"], "M");
    }

    #[test]
    fn test_decision_serializes() {
        let d = decide(&base_application(), &DecisionOptions::default()).unwrap();
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["approved"], true);
        assert_eq!(json["annual_payment"], "0.10875");
        let back: CreditDecision = serde_json::from_value(json).unwrap();
        assert_eq!(back, d);
    }
}
