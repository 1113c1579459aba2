use serde_json::Value;
use std::io::{self, Write};

/// Pretty-print JSON.
pub fn write_json(value: &Value, out: &mut impl Write) -> io::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    writeln!(out, "{}", s)
}
