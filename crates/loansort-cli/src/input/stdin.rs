use serde::de::DeserializeOwned;
use serde_json::Value;
use std::io::Read;

/// Refuse `--input -` on an interactive terminal instead of waiting for
/// input that is never coming.
pub fn ensure_piped() -> Result<(), Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Err("--input - expects JSON piped on stdin, but stdin is a terminal".into());
    }
    Ok(())
}

/// Read a JSON document from `reader` and deserialise it.
pub fn read_json<T: DeserializeOwned>(mut reader: impl Read) -> Result<T, Box<dyn std::error::Error>> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;

    let value = parse_piped(&buffer)?.ok_or("--input - expects JSON on stdin, got nothing")?;
    Ok(serde_json::from_value(value)?)
}

/// Blank input counts as "nothing piped".
pub fn parse_piped(buffer: &str) -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(trimmed)?;
    Ok(Some(value))
}
