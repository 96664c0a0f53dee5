pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// The object holding the answer: `result` inside an envelope, else the value itself.
pub(crate) fn result_of(value: &Value) -> &Value {
    value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value)
}

/// Field/value pairs of the result object, in key order.
pub(crate) fn result_fields(value: &Value) -> Vec<(String, String)> {
    match result_of(value) {
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| (k.clone(), format_value(v)))
            .collect(),
        other => vec![("value".to_string(), format_value(other))],
    }
}

pub(crate) fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(arr) => arr.iter().map(format_value).collect::<Vec<_>>().join(", "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_result_fields_unwraps_envelope() {
        let v = json!({
            "result": {"monthly_payment": "860.66", "term_months": 12},
            "methodology": "Fixed-rate amortization (level payment)"
        });
        let fields = result_fields(&v);
        assert_eq!(
            fields,
            vec![
                ("monthly_payment".to_string(), "860.66".to_string()),
                ("term_months".to_string(), "12".to_string()),
            ]
        );
    }

    #[test]
    fn test_result_fields_flat_object() {
        let v = json!({"principal": "1000.00", "valid": true});
        let fields = result_fields(&v);
        assert_eq!(fields[1], ("valid".to_string(), "true".to_string()));
    }
}
