use serde_json::Value;
use std::io::{self, Write};
use tabled::{builder::Builder, Table};

use super::{format_scalar, nested_records};

/// Format output as tables using the tabled crate.
///
/// Scalar result fields go into a Field/Value table; an array of records
/// (the amortization schedule) gets a table of its own underneath.
pub fn write_table(value: &Value, out: &mut impl Write) -> io::Result<()> {
    match value {
        Value::Object(map) => match map.get("result") {
            Some(result) => write_result_table(result, map, out),
            None => write_flat_object(map, out),
        },
        Value::Array(arr) => write_records_table(arr, out),
        _ => writeln!(out, "{}", value),
    }
}

fn write_result_table(
    result: &Value,
    envelope: &serde_json::Map<String, Value>,
    out: &mut impl Write,
) -> io::Result<()> {
    let Value::Object(res_map) = result else {
        return write_flat_object(envelope, out);
    };

    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    push_fields(&mut builder, "", res_map);
    writeln!(out, "{}", Table::from(builder))?;

    if let Some((key, records)) = nested_records(res_map) {
        writeln!(out, "\n{}:", key)?;
        write_records_table(records, out)?;
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            writeln!(out, "\nWarnings:")?;
            for w in warnings.iter().filter_map(Value::as_str) {
                writeln!(out, "  - {}", w)?;
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        writeln!(out, "\nMethodology: {}", meth)?;
    }
    Ok(())
}

/// Flatten nested objects into dotted keys; record arrays are skipped here.
fn push_fields(builder: &mut Builder, prefix: &str, map: &serde_json::Map<String, Value>) {
    for (key, val) in map {
        let name = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match val {
            Value::Object(inner) => push_fields(builder, &name, inner),
            Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_object) => {}
            _ => builder.push_record([name, format_scalar(val)]),
        }
    }
}

fn write_flat_object(map: &serde_json::Map<String, Value>, out: &mut impl Write) -> io::Result<()> {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    push_fields(&mut builder, "", map);
    writeln!(out, "{}", Table::from(builder))
}

fn write_records_table(arr: &[Value], out: &mut impl Write) -> io::Result<()> {
    let Some(Value::Object(first)) = arr.first() else {
        if arr.is_empty() {
            return writeln!(out, "(empty)");
        }
        for item in arr {
            writeln!(out, "{}", format_scalar(item))?;
        }
        return Ok(());
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(headers.clone());

    for map in arr.iter().filter_map(Value::as_object) {
        let row: Vec<String> = headers
            .iter()
            .map(|h| map.get(h.as_str()).map(format_scalar).unwrap_or_default())
            .collect();
        builder.push_record(row);
    }

    writeln!(out, "{}", Table::from(builder))
}
