use clap::Parser;

use loansort_cli::commands::sort::{self, SortArgs};
use loansort_cli::OutputFormat;

/// Inner (per-row) versus external (global) sorting of a 2D array
#[derive(Parser)]
#[command(
    name = "array-sort-demo",
    version,
    about = "Inner (per-row) versus external (global) sorting of a 2D array",
    long_about = "Prints the array, sorts each row, then flattens the row-sorted \
                  array and sorts it globally, printing the sorted values and the \
                  flat index each one came from."
)]
struct Cli {
    #[command(flatten)]
    args: SortArgs,

    /// Output format
    #[arg(long, default_value = "text")]
    output: OutputFormat,
}

fn main() {
    loansort_cli::init_logging();
    let cli = Cli::parse();
    loansort_cli::finish(&cli.output, sort::run_sort(cli.args))
}
