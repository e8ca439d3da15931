use serde_json::Value;
use std::io;

use super::{format_value, result_of, ROWS_KEY};

/// Write output as CSV to stdout.
///
/// Schedules are written one installment per row. Anything else becomes a
/// two-column `field,value` listing.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());
    if let Err(e) = write_csv(&mut wtr, result_of(value)) {
        eprintln!("CSV write error: {}", e);
    }
}

fn write_csv<W: io::Write>(wtr: &mut csv::Writer<W>, result: &Value) -> csv::Result<()> {
    match result {
        Value::Object(map) => {
            if let Some(Value::Array(rows)) = map.get(ROWS_KEY) {
                write_rows(wtr, rows)?;
            } else {
                wtr.write_record(["field", "value"])?;
                for (key, val) in map {
                    wtr.write_record([key.as_str(), &format_value(val)])?;
                }
            }
        }
        Value::Array(rows) => write_rows(wtr, rows)?,
        _ => wtr.write_record([&format_value(result)])?,
    }
    wtr.flush()?;
    Ok(())
}

fn write_rows<W: io::Write>(wtr: &mut csv::Writer<W>, rows: &[Value]) -> csv::Result<()> {
    let Some(Value::Object(first)) = rows.first() else {
        return Ok(());
    };
    let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    wtr.write_record(&headers)?;
    for row in rows {
        if let Value::Object(map) = row {
            let cells: Vec<String> = headers
                .iter()
                .map(|h| map.get(*h).map(format_value).unwrap_or_default())
                .collect();
            wtr.write_record(&cells)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(value: &Value) -> String {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        write_csv(&mut wtr, value).unwrap();
        String::from_utf8(wtr.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_rows_become_csv_lines() {
        let result = json!({
            "facilityList": [
                {"id": 1, "amount": "1039500", "dueDate": "1403/2/1"},
                {"id": 2, "amount": "1039500", "dueDate": "1403/3/1"}
            ],
            "facilityAmount": "1039500"
        });
        let out = render(&result);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        // serde_json maps iterate in key order
        assert_eq!(lines[0], "amount,dueDate,id");
        assert_eq!(lines[1], "1039500,1403/2/1,1");
    }

    #[test]
    fn test_plain_object_is_field_value() {
        let out = render(&json!({"date": "1403/7/23"}));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec!["field,value", "date,1403/7/23"]);
    }
}
