use napi::Result as NapiResult;
use napi_derive::napi;

use loan_underwriting_core::underwriting::validation::parse_application;
use loan_underwriting_core::{assess_application, DecisionOptions};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Underwriting
// ---------------------------------------------------------------------------

/// Decide one application. Takes the flat application document as JSON, plus
/// optional `{"verbose": bool}` options, and returns the computation envelope as JSON.
#[napi]
pub fn decide_credit(input_json: String, options_json: Option<String>) -> NapiResult<String> {
    let document: serde_json::Value = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let application = parse_application(&document).map_err(to_napi_error)?;

    let options: DecisionOptions = match options_json {
        Some(raw) => serde_json::from_str(&raw).map_err(to_napi_error)?,
        None => DecisionOptions::default(),
    };

    let output = assess_application(&application, &options).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Validate an application document and return its normalized typed form.
#[napi]
pub fn validate_credit_application(input_json: String) -> NapiResult<String> {
    let document: serde_json::Value = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let application = parse_application(&document).map_err(to_napi_error)?;
    serde_json::to_string(&application).map_err(to_napi_error)
}
