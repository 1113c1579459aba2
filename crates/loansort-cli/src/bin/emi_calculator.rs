use clap::Parser;

use loansort_cli::commands::emi::{self, EmiArgs};
use loansort_cli::OutputFormat;

/// Equated monthly installment calculator
#[derive(Parser)]
#[command(
    name = "emi-calculator",
    version,
    about = "Equated monthly installment calculator",
    long_about = "Prints the loan terms, the monthly installment, total payment, \
                  total interest and interest percentage. With no flags it \
                  calculates a 100000 loan at 10% over 2 years."
)]
struct Cli {
    #[command(flatten)]
    args: EmiArgs,

    /// Output format
    #[arg(long, default_value = "text")]
    output: OutputFormat,
}

fn main() {
    loansort_cli::init_logging();
    let cli = Cli::parse();
    loansort_cli::finish(&cli.output, emi::run_emi(cli.args))
}
