use serde_json::Value;

use super::{format_value, result_of};

/// Fields printed by `--output minimal`, in priority order.
const PRIORITY_KEYS: [&str; 2] = ["facilityAmount", "date"];

/// Print just the key answer value from the output.
///
/// Falls back to the first field of the result object.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_line(value));
}

fn minimal_line(value: &Value) -> String {
    let result = result_of(value);

    if let Value::Object(map) = result {
        for key in PRIORITY_KEYS {
            if let Some(val) = map.get(key).filter(|v| !v.is_null()) {
                return format_value(val);
            }
        }
        if let Some((key, val)) = map.iter().next() {
            return format!("{}: {}", key, format_value(val));
        }
    }

    format_value(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prefers_installment_amount() {
        let v = json!({"result": {"facilityList": [], "facilityAmount": "1039500"}});
        assert_eq!(minimal_line(&v), "1039500");
    }

    #[test]
    fn test_calendar_date() {
        let v = json!({"result": {"calendar": "persian", "date": "1403/7/23"}});
        assert_eq!(minimal_line(&v), "1403/7/23");
    }
}
