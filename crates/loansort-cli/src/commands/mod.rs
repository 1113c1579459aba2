pub mod emi;
pub mod sort;

use serde_json::Value;

/// A command's result, ready for any output format: the JSON envelope for
/// the structured formatters, plus the console report for `--output text`.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub value: Value,
    pub text: String,
}
