//! Input validation.
//!
//! Checks run fail-fast in a fixed order and the first violation wins:
//!
//! 1. `age` — integer, at least 18
//! 2. `sex` — `"F"` or `"M"`
//! 3. `income_source` — one of the four income-source literals
//! 4. `last_year_income` — non-negative number
//! 5. `credit_rating` — integer in {-2, -1, 0, 1, 2}
//! 6. `requested_sum` — number in [0.1, 10]
//! 7. `repayment_period` — number in [1, 20]
//! 8. `aim` — one of the four aim literals
//!
//! For untyped documents each field is checked for presence, then JSON type,
//! then domain, before moving on to the next field.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{Map, Value};

use super::application::{
    ApplicantProfile, CreditApplication, CreditRating, IncomeSource, LoanAim, LoanRequest, Sex,
};
use crate::error::UnderwritingError;
use crate::types::{Money, Years};
use crate::UnderwritingResult;

pub const MIN_AGE: u32 = 18;
pub const MIN_REQUESTED_SUM: Money = dec!(0.1);
pub const MAX_REQUESTED_SUM: Money = dec!(10);
pub const MIN_REPAYMENT_PERIOD: Years = dec!(1);
pub const MAX_REPAYMENT_PERIOD: Years = dec!(20);

// ---------------------------------------------------------------------------
// Typed validation
// ---------------------------------------------------------------------------

/// Validate the range constraints of an already-typed application.
///
/// Enumerations and the credit rating are closed types, so only the numeric
/// fields can be out of domain here.
pub fn validate_application(application: &CreditApplication) -> UnderwritingResult<()> {
    let applicant = &application.applicant;
    let loan = &application.loan;

    check_age(applicant.age)?;
    check_income(applicant.last_year_income)?;
    check_requested_sum(loan.requested_sum)?;
    check_repayment_period(loan.repayment_period)?;
    Ok(())
}

fn check_age(age: u32) -> UnderwritingResult<()> {
    if age < MIN_AGE {
        return Err(UnderwritingError::invalid(
            "age",
            format!("Applicant must be at least {MIN_AGE} years old, got {age}."),
        ));
    }
    Ok(())
}

fn check_income(income: Money) -> UnderwritingResult<()> {
    if income < Decimal::ZERO {
        return Err(UnderwritingError::invalid(
            "last_year_income",
            format!("Last-year income cannot be negative, got {income}."),
        ));
    }
    Ok(())
}

fn check_requested_sum(sum: Money) -> UnderwritingResult<()> {
    if sum < MIN_REQUESTED_SUM || sum > MAX_REQUESTED_SUM {
        return Err(UnderwritingError::invalid(
            "requested_sum",
            format!("Requested sum must be in [{MIN_REQUESTED_SUM}, {MAX_REQUESTED_SUM}], got {sum}."),
        ));
    }
    Ok(())
}

fn check_repayment_period(period: Years) -> UnderwritingResult<()> {
    if period < MIN_REPAYMENT_PERIOD || period > MAX_REPAYMENT_PERIOD {
        return Err(UnderwritingError::invalid(
            "repayment_period",
            format!(
                "Repayment period must be in [{MIN_REPAYMENT_PERIOD}, {MAX_REPAYMENT_PERIOD}] years, got {period}."
            ),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Untyped (JSON) validation
// ---------------------------------------------------------------------------

/// Validate an untyped JSON document and build a typed application from it.
///
/// Expects a flat object with the eight fields named in the module docs.
/// Unknown extra keys are ignored.
pub fn parse_application(value: &Value) -> UnderwritingResult<CreditApplication> {
    let doc = value.as_object().ok_or_else(|| {
        UnderwritingError::invalid("application", "Expected a JSON object of applicant fields.")
    })?;

    let age = integer_field(doc, "age")?;
    let age = u32::try_from(age)
        .map_err(|_| UnderwritingError::invalid("age", format!("{age} is out of range.")))?;
    check_age(age)?;

    let sex = Sex::from_str(string_field(doc, "sex")?)?;
    let income_source = IncomeSource::from_str(string_field(doc, "income_source")?)?;

    let last_year_income = decimal_field(doc, "last_year_income")?;
    check_income(last_year_income)?;

    let credit_rating = CreditRating::try_from(integer_field(doc, "credit_rating")?)?;

    let requested_sum = decimal_field(doc, "requested_sum")?;
    check_requested_sum(requested_sum)?;

    let repayment_period = decimal_field(doc, "repayment_period")?;
    check_repayment_period(repayment_period)?;

    let aim = LoanAim::from_str(string_field(doc, "aim")?)?;

    Ok(CreditApplication {
        applicant: ApplicantProfile {
            age,
            sex,
            income_source,
            last_year_income,
            credit_rating,
        },
        loan: LoanRequest {
            requested_sum,
            repayment_period,
            aim,
        },
    })
}

fn required<'a>(doc: &'a Map<String, Value>, field: &str) -> UnderwritingResult<&'a Value> {
    match doc.get(field) {
        None | Some(Value::Null) => Err(UnderwritingError::invalid(field, "Field is required.")),
        Some(v) => Ok(v),
    }
}

fn integer_field(doc: &Map<String, Value>, field: &str) -> UnderwritingResult<i64> {
    required(doc, field)?
        .as_i64()
        .ok_or_else(|| UnderwritingError::invalid(field, "Expected an integer."))
}

fn string_field<'a>(doc: &'a Map<String, Value>, field: &str) -> UnderwritingResult<&'a str> {
    required(doc, field)?
        .as_str()
        .ok_or_else(|| UnderwritingError::invalid(field, "Expected a string."))
}

/// Numbers go through their shortest textual form so `0.1` stays exactly 0.1.
fn decimal_field(doc: &Map<String, Value>, field: &str) -> UnderwritingResult<Decimal> {
    let text = match required(doc, field)? {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => {
            return Err(UnderwritingError::invalid(
                field,
                "Expected a number or decimal string.",
            ))
        }
    };
    // serde_json renders large floats as "1e+30"; the exponent sign is optional
    let normalized = text.replace("e+", "e").replace("E+", "E");
    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .map_err(|_| {
            if normalized.parse::<f64>().is_ok_and(f64::is_finite) {
                UnderwritingError::invalid(
                    field,
                    format!("{text} exceeds the supported decimal range."),
                )
            } else {
                UnderwritingError::invalid(field, format!("'{text}' is not a decimal number."))
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base_doc() -> Value {
        json!({
            "age": 20,
            "sex": "M",
            "income_source": "employed",
            "last_year_income": 2,
            "credit_rating": 0,
            "requested_sum": 0.1,
            "repayment_period": 1,
            "aim": "mortgage"
        })
    }

    fn with(field: &str, value: Value) -> Value {
        let mut doc = base_doc();
        doc[field] = value;
        doc
    }

    fn without(field: &str) -> Value {
        let mut doc = base_doc();
        doc.as_object_mut().unwrap().remove(field);
        doc
    }

    fn failing_field(doc: &Value) -> String {
        parse_application(doc)
            .unwrap_err()
            .field()
            .unwrap_or_default()
            .to_string()
    }

    #[test]
    fn test_base_document_parses() {
        let app = parse_application(&base_doc()).unwrap();
        assert_eq!(app.applicant.age, 20);
        assert_eq!(app.loan.requested_sum, dec!(0.1));
        assert_eq!(app.loan.aim, LoanAim::Mortgage);
        assert!(validate_application(&app).is_ok());
    }

    #[test]
    fn test_every_field_is_required() {
        for field in [
            "age",
            "sex",
            "income_source",
            "last_year_income",
            "credit_rating",
            "requested_sum",
            "repayment_period",
            "aim",
        ] {
            assert_eq!(failing_field(&without(field)), field);
            assert_eq!(failing_field(&with(field, Value::Null)), field);
        }
    }

    #[test]
    fn test_age_rejections() {
        assert_eq!(failing_field(&with("age", json!(0))), "age");
        assert_eq!(failing_field(&with("age", json!(17))), "age");
        assert_eq!(failing_field(&with("age", json!(11.11))), "age");
        assert_eq!(failing_field(&with("age", json!("18"))), "age");
        assert_eq!(failing_field(&with("age", json!(-20))), "age");
        assert!(parse_application(&with("age", json!(18))).is_ok());
    }

    #[test]
    fn test_enumeration_rejections() {
        assert_eq!(failing_field(&with("sex", json!(0))), "sex");
        assert_eq!(failing_field(&with("sex", json!("X"))), "sex");
        assert_eq!(failing_field(&with("income_source", json!(1))), "income_source");
        assert_eq!(failing_field(&with("income_source", json!("other"))), "income_source");
        assert_eq!(failing_field(&with("aim", json!(1))), "aim");
        assert_eq!(failing_field(&with("aim", json!("just because"))), "aim");
    }

    #[test]
    fn test_credit_rating_rejections() {
        for bad in [json!(-3), json!(3), json!(1.5), json!("2"), json!(true)] {
            assert_eq!(failing_field(&with("credit_rating", bad)), "credit_rating");
        }
    }

    #[test]
    fn test_requested_sum_rejections() {
        for bad in [json!(-1), json!(0), json!(0.09), json!(11), json!(true), json!("five")] {
            assert_eq!(failing_field(&with("requested_sum", bad)), "requested_sum");
        }
        assert!(parse_application(&with("requested_sum", json!(10))).is_ok());
    }

    #[test]
    fn test_repayment_period_rejections() {
        for bad in [json!(-1), json!(0.1), json!(21), json!([10])] {
            assert_eq!(failing_field(&with("repayment_period", bad)), "repayment_period");
        }
        let app = parse_application(&with("repayment_period", json!(2.5))).unwrap();
        assert_eq!(app.loan.repayment_period, dec!(2.5));
    }

    #[test]
    fn test_income_rejections() {
        assert_eq!(failing_field(&with("last_year_income", json!(-0.5))), "last_year_income");
        assert_eq!(failing_field(&with("last_year_income", json!(false))), "last_year_income");
        assert!(parse_application(&with("last_year_income", json!(0))).is_ok());
    }

    #[test]
    fn test_decimal_strings_accepted() {
        let app = parse_application(&with("last_year_income", json!("1.1"))).unwrap();
        assert_eq!(app.applicant.last_year_income, dec!(1.1));
    }

    #[test]
    fn test_large_exponent_numbers() {
        let app = parse_application(&with("last_year_income", json!(1e20))).unwrap();
        let ten_pow_ten = Decimal::from(10u64.pow(10));
        assert_eq!(app.applicant.last_year_income, ten_pow_ten * ten_pow_ten);

        let err = parse_application(&with("last_year_income", json!(1e30))).unwrap_err();
        match err {
            UnderwritingError::InvalidInput { field, reason } => {
                assert_eq!(field, "last_year_income");
                assert!(reason.contains("decimal range"), "unexpected reason: {reason}");
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }

        let err = parse_application(&with("last_year_income", json!("abc"))).unwrap_err();
        assert!(err.to_string().contains("is not a decimal number"));
    }

    #[test]
    fn test_first_violation_wins() {
        let mut doc = base_doc();
        doc["aim"] = json!("unknown");
        doc["age"] = json!(5);
        doc["requested_sum"] = json!(50);
        assert_eq!(failing_field(&doc), "age");
    }

    #[test]
    fn test_non_object_rejected() {
        let err = parse_application(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(err.field(), Some("application"));
    }

    #[test]
    fn test_typed_validation_checks_ranges() {
        let mut app = parse_application(&base_doc()).unwrap();
        app.applicant.age = 17;
        assert_eq!(validate_application(&app).unwrap_err().field(), Some("age"));

        let mut app = parse_application(&base_doc()).unwrap();
        app.loan.repayment_period = dec!(0);
        assert_eq!(
            validate_application(&app).unwrap_err().field(),
            Some("repayment_period")
        );
    }
}
