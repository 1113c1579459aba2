/// Sort every row ascending, in place. Rows never exchange elements.
pub fn inner_sort(rows: &mut [Vec<i64>]) {
    for row in rows.iter_mut() {
        row.sort_unstable();
    }
}
