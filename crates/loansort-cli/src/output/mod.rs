pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use serde_json::Value;
use std::io::{self, Write};

use crate::commands::Rendered;
use crate::OutputFormat;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, rendered: &Rendered, out: &mut impl Write) -> io::Result<()> {
    match format {
        OutputFormat::Text => out.write_all(rendered.text.as_bytes()),
        OutputFormat::Json => json::write_json(&rendered.value, out),
        OutputFormat::Table => table::write_table(&rendered.value, out),
        OutputFormat::Csv => csv_out::write_csv(&rendered.value, out),
        OutputFormat::Minimal => minimal::write_minimal(&rendered.value, out),
    }
}

/// Scalar rendering shared by the table, csv and minimal formatters.
pub(crate) fn format_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => format!("{f:.2}"),
            _ => n.to_string(),
        },
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(items) if items.iter().all(Value::is_array) => items
            .iter()
            .map(|row| format!("[{}]", format_scalar(row)))
            .collect::<Vec<_>>()
            .join(" "),
        Value::Array(items) => items.iter().map(format_scalar).collect::<Vec<_>>().join(" "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

/// First field of `map` holding a non-empty array of objects (e.g. schedule rows).
pub(crate) fn nested_records(map: &serde_json::Map<String, Value>) -> Option<(&str, &[Value])> {
    map.iter().find_map(|(key, val)| match val {
        Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_object) => {
            Some((key.as_str(), items.as_slice()))
        }
        Value::Object(inner) => nested_records(inner),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_scalar_numbers() {
        assert_eq!(format_scalar(&json!(4614.492633)), "4614.49");
        assert_eq!(format_scalar(&json!(24)), "24");
    }

    #[test]
    fn test_format_scalar_matrix() {
        assert_eq!(format_scalar(&json!([[2, 12], [1]])), "[2 12] [1]");
        assert_eq!(format_scalar(&json!([1, 2, 2])), "1 2 2");
    }

    #[test]
    fn test_text_passthrough() {
        let rendered = Rendered {
            value: Value::Null,
            text: "Loan Amount: 1.0\n".into(),
        };
        let mut buf = Vec::new();
        format_output(&OutputFormat::Text, &rendered, &mut buf).unwrap();
        assert_eq!(buf, b"Loan Amount: 1.0\n");
    }

    #[test]
    fn test_nested_records_found_inside_object() {
        let v = json!({"emi": 1.0, "schedule": {"rows": [{"month": 1}]}});
        let (key, rows) = nested_records(v.as_object().unwrap()).unwrap();
        assert_eq!(key, "rows");
        assert_eq!(rows.len(), 1);
    }
}
