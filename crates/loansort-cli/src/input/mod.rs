pub mod file;
pub mod stdin;

use serde::de::DeserializeOwned;
use std::io::Read;

/// `--input` value that means "read JSON from stdin".
pub const STDIN_MARKER: &str = "-";

/// Deserialise the `--input` source: a JSON file, or `stdin` for `-`.
pub fn read_input<T: DeserializeOwned>(
    path: &str,
    stdin: impl Read,
) -> Result<T, Box<dyn std::error::Error>> {
    if path == STDIN_MARKER {
        stdin::read_json(stdin)
    } else {
        file::read_json(path)
    }
}
