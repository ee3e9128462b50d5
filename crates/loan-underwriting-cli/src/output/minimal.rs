use serde_json::Value;

use super::{result_body, scalar_text};

/// Print just the key answer: the annual payment when approved, the denial
/// reason codes when denied, or `valid` for a bare validated application.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_text(result_body(value)));
}

fn minimal_text(result: &Value) -> String {
    match result.get("approved").and_then(Value::as_bool) {
        Some(true) => result
            .get("annual_payment")
            .map(scalar_text)
            .unwrap_or_default(),
        Some(false) => {
            let reasons = result
                .get("denial_reasons")
                .map(scalar_text)
                .unwrap_or_default();
            format!("denied: {reasons}")
        }
        None => "valid".to_string(),
    }
}
