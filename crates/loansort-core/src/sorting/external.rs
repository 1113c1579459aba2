use serde::{Deserialize, Serialize};

/// A flattened value paired with its position before sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedElement {
    pub value: i64,
    pub original_index: usize,
}

/// Globally sorted values with the flat index each one came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalSortOutput {
    pub sorted_values: Vec<i64>,
    pub original_indexes: Vec<usize>,
}

/// Concatenate rows in row-major order.
pub fn flatten(rows: &[Vec<i64>]) -> Vec<i64> {
    rows.iter().flatten().copied().collect()
}

/// Pair each value with its flat position.
pub fn index_elements(flat: &[i64]) -> Vec<IndexedElement> {
    flat.iter()
        .enumerate()
        .map(|(original_index, &value)| IndexedElement {
            value,
            original_index,
        })
        .collect()
}

/// Flatten `rows`, then sort every element by value while remembering where
/// it sat in the flattened sequence.
///
/// The sort is stable: equal values keep ascending original index order,
/// so the index output is fully determined by the input.
pub fn external_sort(rows: &[Vec<i64>]) -> ExternalSortOutput {
    let mut indexed = index_elements(&flatten(rows));
    indexed.sort_by_key(|e| e.value);

    let (sorted_values, original_indexes) = indexed
        .into_iter()
        .map(|e| (e.value, e.original_index))
        .unzip();

    ExternalSortOutput {
        sorted_values,
        original_indexes,
    }
}

/// Look every sorted position back up in the flattened input.
///
/// Returns `None` if an index is out of range. For a correct sort the result
/// equals `sorted_values`.
pub fn restore_original(flat: &[i64], original_indexes: &[usize]) -> Option<Vec<i64>> {
    original_indexes
        .iter()
        .map(|&i| flat.get(i).copied())
        .collect()
}
