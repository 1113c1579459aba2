use serde_json::Value;
use std::io::{self, Write};

use super::{format_scalar, nested_records};

/// Write output as CSV.
///
/// A result holding an array of records (the amortization schedule) is
/// written as one CSV row per record; anything else as `field,value` pairs.
pub fn write_csv(value: &Value, out: &mut impl Write) -> io::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    match value {
        Value::Object(map) => {
            let target = match map.get("result") {
                Some(Value::Object(result)) => result,
                _ => map,
            };
            if let Some((_, records)) = nested_records(target) {
                write_records(&mut wtr, records)?;
            } else {
                wtr.write_record(["field", "value"])?;
                for (key, val) in target {
                    wtr.write_record([key.as_str(), &format_csv_value(val)])?;
                }
            }
        }
        Value::Array(arr) => write_records(&mut wtr, arr)?,
        _ => wtr.write_record([&format_csv_value(value)])?,
    }

    wtr.flush()
}

fn write_records<W: Write>(wtr: &mut csv::Writer<W>, arr: &[Value]) -> io::Result<()> {
    let Some(Value::Object(first)) = arr.first() else {
        for item in arr {
            wtr.write_record([&format_csv_value(item)])?;
        }
        return Ok(());
    };

    let headers: Vec<&str> = first.keys().map(String::as_str).collect();
    wtr.write_record(&headers)?;

    for map in arr.iter().filter_map(Value::as_object) {
        let row: Vec<String> = headers
            .iter()
            .map(|h| map.get(*h).map(format_csv_value).unwrap_or_default())
            .collect();
        wtr.write_record(&row)?;
    }
    Ok(())
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
        _ => format_scalar(value),
    }
}
