use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::external::{external_sort, ExternalSortOutput};
use super::inner::inner_sort;
use super::Matrix;
use crate::types::*;

/// Every stage of the sort walkthrough
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortDemo {
    /// Input exactly as given
    pub original: Matrix,
    /// Each row sorted on its own
    pub inner_sorted: Matrix,
    /// Global sort of the row-sorted array, flattened row-major
    pub external: ExternalSortOutput,
}

/// The array the walkthrough uses when none is supplied.
pub fn sample_matrix() -> Matrix {
    vec![vec![55, 2, 12], vec![77, 8, 88], vec![2, 3, 1]]
}

/// Sort each row, then flatten the row-sorted array and sort it globally,
/// tracking where every element sat after the inner sort.
pub fn run_sort_demo(rows: Matrix) -> ComputationOutput<SortDemo> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let element_count: usize = rows.iter().map(Vec::len).sum();
    if element_count == 0 {
        warnings.push("Array has no elements; nothing to sort".into());
    }
    if rows.windows(2).any(|w| w[0].len() != w[1].len()) {
        warnings.push("Rows have different lengths; flattening is row-major".into());
    }

    let mut inner_sorted = rows.clone();
    inner_sort(&mut inner_sorted);
    let external = external_sort(&inner_sorted);

    debug!(
        "sorted {} rows, {} elements",
        rows.len(),
        external.sorted_values.len()
    );

    let assumptions = serde_json::json!({
        "rows": rows.len(),
        "elements": element_count,
        "tie_break": "stable (ascending original index)",
    });

    let output = SortDemo {
        original: rows,
        inner_sorted,
        external,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(
        "Inner sort per row, then stable global sort with original flat indexes",
        &assumptions,
        warnings,
        elapsed,
        output,
    )
}
