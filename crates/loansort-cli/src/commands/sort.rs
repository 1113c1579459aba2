use clap::Args;
use log::info;
use serde::Deserialize;
use std::io::{self, Read};

use loansort_core::sorting::{self, Matrix};

use super::Rendered;
use crate::input;

/// Arguments for the sort walkthrough
#[derive(Args, Debug, Default)]
pub struct SortArgs {
    /// Path to JSON input file, `{"rows": [[...], ...]}`, or `-` for stdin
    #[arg(long, conflicts_with = "rows")]
    pub input: Option<String>,

    /// Rows separated by ';', values by ',' (e.g. "55,2,12;77,8,88;2,3,1")
    #[arg(long, allow_hyphen_values = true)]
    pub rows: Option<String>,
}

/// JSON shape accepted from `--input`
#[derive(Debug, Deserialize)]
struct SortInput {
    rows: Matrix,
}

pub fn run_sort(args: SortArgs) -> Result<Rendered, Box<dyn std::error::Error>> {
    if args.input.as_deref() == Some(input::STDIN_MARKER) {
        input::stdin::ensure_piped()?;
    }
    let rows = resolve_rows(&args, io::stdin().lock())?;
    render_sort(rows)
}

/// Rows from `--input`, then `--rows`, then the sample array.
///
/// `stdin` is only read for `--input -`.
pub fn resolve_rows(args: &SortArgs, stdin: impl Read) -> Result<Matrix, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        Ok(input::read_input::<SortInput>(path, stdin)?.rows)
    } else if let Some(ref layout) = args.rows {
        Ok(parse_rows(layout)?)
    } else {
        Ok(sorting::sample_matrix())
    }
}

/// Parse `"1,2;3"` into `[[1, 2], [3]]`. An empty segment is an empty row.
pub fn parse_rows(layout: &str) -> Result<Matrix, String> {
    layout.split(';')
        .enumerate()
        .map(|(r, row)| {
            let row = row.trim();
            if row.is_empty() {
                return Ok(Vec::new());
            }
            row.split(',')
                .map(|cell| {
                    cell.trim()
                        .parse::<i64>()
                        .map_err(|e| format!("Row {r}: '{}' is not an integer ({e})", cell.trim()))
                })
                .collect()
        })
        .collect()
}

pub fn render_sort(rows: Matrix) -> Result<Rendered, Box<dyn std::error::Error>> {
    info!("sorting {} rows", rows.len());
    let demo = sorting::run_sort_demo(rows);

    let mut text = Vec::new();
    sorting::write_sort_demo(&demo.result, &mut text)?;

    Ok(Rendered {
        value: serde_json::to_value(&demo)?,
        text: String::from_utf8(text)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    #[test]
    fn test_parse_rows() {
        assert_eq!(
            parse_rows("55,2,12;77,8,88;2,3,1").unwrap(),
            sorting::sample_matrix()
        );
    }

    #[test]
    fn test_parse_rows_jagged_negative_and_empty() {
        assert_eq!(
            parse_rows(" -1, 4 ;; 7").unwrap(),
            vec![vec![-1, 4], vec![], vec![7]]
        );
    }

    #[test]
    fn test_parse_rows_rejects_text() {
        let err = parse_rows("1,x").unwrap_err();
        assert!(err.contains("'x'"));
    }

    #[test]
    fn test_rows_flag_wins_and_stdin_is_left_alone() {
        let args = SortArgs {
            rows: Some("3,1;2".into()),
            ..Default::default()
        };
        let rows = resolve_rows(&args, Cursor::new("x")).unwrap();
        assert_eq!(rows, vec![vec![3, 1], vec![2]]);
    }

    #[test]
    fn test_no_flags_ignores_garbage_stdin() {
        let rows = resolve_rows(&SortArgs::default(), Cursor::new("x")).unwrap();
        assert_eq!(rows, sorting::sample_matrix());
    }

    #[test]
    fn test_dash_input_reads_stdin() {
        let args = SortArgs {
            input: Some("-".into()),
            ..Default::default()
        };
        let rows = resolve_rows(&args, Cursor::new(r#"{"rows": [[9, 8], []]}"#)).unwrap();
        assert_eq!(rows, vec![vec![9, 8], vec![]]);
    }

    #[test]
    fn test_input_conflicts_with_rows() {
        #[derive(Parser)]
        struct Cli {
            #[command(flatten)]
            args: SortArgs,
        }

        assert!(Cli::try_parse_from(["array-sort-demo", "--input", "-", "--rows", "1,2"]).is_err());
        let cli = Cli::try_parse_from(["array-sort-demo", "--rows", "-5,2"]).unwrap();
        assert_eq!(cli.args.rows.as_deref(), Some("-5,2"));
    }

    #[test]
    fn test_render_sample() {
        let rendered = render_sort(sorting::sample_matrix()).unwrap();
        assert!(rendered
            .text
            .ends_with("Original Indexes of Sorted Elements:\n6 0 7 8 3 1 2 4 5\n"));
        assert_eq!(
            rendered.value["result"]["external"]["sorted_values"],
            serde_json::json!([1, 2, 2, 3, 8, 12, 55, 77, 88])
        );
    }

    #[test]
    fn test_sort_input_json_shape() {
        let parsed: SortInput = serde_json::from_str(r#"{"rows": [[3, 1], []]}"#).unwrap();
        assert_eq!(parsed.rows, vec![vec![3, 1], vec![]]);
    }
}
