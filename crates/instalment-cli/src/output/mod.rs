pub mod csv_out;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Key under which schedule commands return their installment rows.
pub const ROWS_KEY: &str = "facilityList";

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(value) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("JSON serialization error: {}", e),
        },
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// The `result` object of an envelope, or the value itself.
pub fn result_of(value: &Value) -> &Value {
    value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value)
}

/// Render a JSON scalar without quotes.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_result_of_unwraps_envelope() {
        let v = json!({"result": {"facilityAmount": "100"}, "warnings": []});
        assert_eq!(result_of(&v)["facilityAmount"], json!("100"));
        let bare = json!({"x": 1});
        assert_eq!(result_of(&bare), &bare);
    }

    #[test]
    fn test_format_value_scalars() {
        assert_eq!(format_value(&json!("1039500")), "1039500");
        assert_eq!(format_value(&json!(30)), "30");
        assert_eq!(format_value(&Value::Null), "");
    }
}
