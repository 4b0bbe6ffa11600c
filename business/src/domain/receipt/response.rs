use serde_json::{Map, Value};

use super::errors::ExtractionError;
use super::model::ReceiptAmounts;

const DEFAULT_DECLARED_ERROR: &str = "Unable to parse receipt";

/// Interprets the raw reply of the vision model.
///
/// Rules:
/// - Not JSON (or a bare `null`) -> `UnparseableResponse`
/// - `success` missing or falsy -> `Declared` with the model's `error`, or a default message
/// - `success` truthy -> amounts, each missing/falsy/non-numeric field read as 0
pub fn parse_model_reply(text: &str) -> Result<ReceiptAmounts, ExtractionError> {
    let parsed: Value =
        serde_json::from_str(text.trim()).map_err(|_| ExtractionError::UnparseableResponse)?;

    let fields = match &parsed {
        Value::Null => return Err(ExtractionError::UnparseableResponse),
        Value::Object(fields) => fields,
        _ => return Err(ExtractionError::Declared(DEFAULT_DECLARED_ERROR.to_string())),
    };

    if !fields.get("success").is_some_and(is_truthy) {
        return Err(ExtractionError::Declared(declared_error(fields)));
    }

    Ok(ReceiptAmounts {
        total_amount: lenient_amount(fields.get("totalAmount")),
        pre_tax_amount: lenient_amount(fields.get("preTaxAmount")),
        service_fee: lenient_amount(fields.get("serviceFee")),
    })
}

fn declared_error(fields: &Map<String, Value>) -> String {
    fields
        .get("error")
        .and_then(|e| e.as_str())
        .filter(|e| !e.is_empty())
        .unwrap_or(DEFAULT_DECLARED_ERROR)
        .to_string()
}

/// Truthiness as the reply contract's producers understand it: `false`, `0`,
/// `""` and `null` are falsy, everything else is truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Reads an amount, falling back to 0. Quoted numbers such as `"12.50"` are accepted.
fn lenient_amount(value: Option<&Value>) -> f64 {
    let amount = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    amount.filter(|a| a.is_finite()).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_read_all_three_amounts_from_success_reply() {
        let amounts = parse_model_reply(
            r#"{"totalAmount":120,"preTaxAmount":100,"serviceFee":10,"success":true}"#,
        )
        .unwrap();

        assert_eq!(
            amounts,
            ReceiptAmounts {
                total_amount: 120.0,
                pre_tax_amount: 100.0,
                service_fee: 10.0,
            }
        );
    }

    #[test]
    fn should_default_missing_amounts_to_zero() {
        let amounts = parse_model_reply(r#"{"totalAmount":50,"success":true}"#).unwrap();

        assert_eq!(amounts.total_amount, 50.0);
        assert_eq!(amounts.pre_tax_amount, 0.0);
        assert_eq!(amounts.service_fee, 0.0);
    }

    #[test]
    fn should_default_null_and_non_numeric_amounts_to_zero() {
        let amounts = parse_model_reply(
            r#"{"totalAmount":null,"preTaxAmount":"n/a","serviceFee":false,"success":true}"#,
        )
        .unwrap();

        assert_eq!(amounts, ReceiptAmounts::default());
    }

    #[test]
    fn should_accept_quoted_numbers() {
        let amounts = parse_model_reply(
            r#"{"totalAmount":"42.75","preTaxAmount":" 38.00 ","serviceFee":0,"success":true}"#,
        )
        .unwrap();

        assert_eq!(amounts.total_amount, 42.75);
        assert_eq!(amounts.pre_tax_amount, 38.0);
    }

    #[test]
    fn should_keep_declared_error_message() {
        let err = parse_model_reply(r#"{"success":false,"error":"blurry"}"#).unwrap_err();

        assert!(matches!(&err, ExtractionError::Declared(msg) if msg == "blurry"));
        assert_eq!(err.to_string(), "blurry");
    }

    #[test]
    fn should_use_default_message_when_declared_error_is_missing() {
        let err = parse_model_reply(r#"{"success":false}"#).unwrap_err();
        assert_eq!(err.to_string(), "Unable to parse receipt");
    }

    #[test]
    fn should_keep_whitespace_only_declared_error() {
        let err = parse_model_reply(r#"{"success":false,"error":"  "}"#).unwrap_err();
        assert!(matches!(&err, ExtractionError::Declared(msg) if msg == "  "));
    }

    #[test]
    fn should_use_default_message_when_declared_error_is_empty() {
        let err = parse_model_reply(r#"{"success":false,"error":""}"#).unwrap_err();
        assert_eq!(err.to_string(), "Unable to parse receipt");
    }

    #[test]
    fn should_treat_absent_success_as_declared_failure() {
        let err = parse_model_reply(r#"{"totalAmount":10,"preTaxAmount":8}"#).unwrap_err();
        assert_eq!(err.to_string(), "Unable to parse receipt");
    }

    #[test]
    fn should_treat_falsy_success_values_as_declared_failure() {
        for reply in [
            r#"{"success":0,"totalAmount":10}"#,
            r#"{"success":"","totalAmount":10}"#,
            r#"{"success":null,"totalAmount":10}"#,
        ] {
            assert!(matches!(
                parse_model_reply(reply),
                Err(ExtractionError::Declared(_))
            ));
        }
    }

    #[test]
    fn should_treat_truthy_success_values_as_success() {
        let amounts = parse_model_reply(r#"{"success":"true","totalAmount":10}"#).unwrap();
        assert_eq!(amounts.total_amount, 10.0);
    }

    #[test]
    fn should_fail_to_parse_plain_text_reply() {
        let err = parse_model_reply("I cannot read this.").unwrap_err();

        assert!(matches!(err, ExtractionError::UnparseableResponse));
        assert_eq!(err.to_string(), "Failed to parse receipt data");
    }

    #[test]
    fn should_fail_to_parse_json_wrapped_in_prose() {
        let err = parse_model_reply(r#"Here you go: {"success":true}"#).unwrap_err();
        assert!(matches!(err, ExtractionError::UnparseableResponse));
    }

    #[test]
    fn should_fail_to_parse_null_reply() {
        let err = parse_model_reply("null").unwrap_err();
        assert!(matches!(err, ExtractionError::UnparseableResponse));
    }

    #[test]
    fn should_treat_non_object_json_as_declared_failure() {
        let err = parse_model_reply("[1, 2, 3]").unwrap_err();
        assert_eq!(err.to_string(), "Unable to parse receipt");
    }

    #[test]
    fn should_tolerate_surrounding_whitespace() {
        let amounts = parse_model_reply("\n  {\"success\":true,\"totalAmount\":9.5}\n").unwrap();
        assert_eq!(amounts.total_amount, 9.5);
    }

    #[test]
    fn should_pass_negative_amounts_through() {
        let amounts =
            parse_model_reply(r#"{"success":true,"totalAmount":-5,"preTaxAmount":-4}"#).unwrap();

        assert_eq!(amounts.total_amount, -5.0);
        assert_eq!(amounts.pre_tax_amount, -4.0);
    }
}
