use serde_json::Value;
use std::io::{self, Write};

use super::format_scalar;

/// Print just the key answer value from the output.
///
/// Looks for well-known result fields in order of priority, then falls back
/// to the first field in the result object.
pub fn write_minimal(value: &Value, out: &mut impl Write) -> io::Result<()> {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let priority_keys = ["emi", "sorted_values"];

    if let Value::Object(map) = result_obj {
        for key in &priority_keys {
            if let Some(val) = lookup(map, key) {
                if !val.is_null() {
                    return writeln!(out, "{}", format_scalar(val));
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            return writeln!(out, "{}: {}", key, format_scalar(val));
        }
    }

    writeln!(out, "{}", format_scalar(result_obj))
}

/// Find `key` at the top level or one object below it.
fn lookup<'a>(map: &'a serde_json::Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).or_else(|| {
        map.values()
            .filter_map(Value::as_object)
            .find_map(|inner| inner.get(key))
    })
}
