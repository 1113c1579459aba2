use std::fmt::Display;
use std::io::{self, Write};

use super::demo::SortDemo;

fn join<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// One row per line, elements separated by single spaces.
pub fn print_2d_array(rows: &[Vec<i64>], out: &mut impl Write) -> io::Result<()> {
    for row in rows {
        writeln!(out, "{}", join(row))?;
    }
    Ok(())
}

/// Write the four labelled stages of the walkthrough.
pub fn write_sort_demo(demo: &SortDemo, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Original Array:")?;
    print_2d_array(&demo.original, out)?;

    writeln!(out)?;
    writeln!(out, "After Inner Sorting (each row sorted):")?;
    print_2d_array(&demo.inner_sorted, out)?;

    writeln!(out)?;
    writeln!(out, "After External Sorting (entire array sorted):")?;
    writeln!(out, "{}", join(&demo.external.sorted_values))?;

    writeln!(out)?;
    writeln!(out, "Original Indexes of Sorted Elements:")?;
    writeln!(out, "{}", join(&demo.external.original_indexes))
}
