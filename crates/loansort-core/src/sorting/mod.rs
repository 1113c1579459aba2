pub mod demo;
pub mod external;
pub mod inner;
pub mod report;

pub use demo::{run_sort_demo, sample_matrix, SortDemo};
pub use external::{external_sort, flatten, index_elements, restore_original, ExternalSortOutput, IndexedElement};
pub use inner::inner_sort;
pub use report::{print_2d_array, write_sort_demo};

/// Row-major 2D array of integers. Rows may differ in length.
pub type Matrix = Vec<Vec<i64>>;
