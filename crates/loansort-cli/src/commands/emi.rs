use clap::Args;
use log::info;
use std::io::{self, Read};

use loansort_core::emi::{self, Loan, LoanInput};

use super::Rendered;
use crate::input;

/// Arguments for the EMI calculation
#[derive(Args, Debug, Default)]
pub struct EmiArgs {
    /// Path to JSON input file, or `-` to read JSON from stdin
    #[arg(long, conflicts_with_all = ["principal", "rate", "years"])]
    pub input: Option<String>,

    /// Loan amount [default: 100000]
    #[arg(long)]
    pub principal: Option<f64>,

    /// Annual interest rate in percent, e.g. 10 for 10% [default: 10]
    #[arg(long)]
    pub rate: Option<f64>,

    /// Loan term in whole years [default: 2]
    #[arg(long)]
    pub years: Option<u32>,

    /// Also print the month-by-month amortization schedule
    #[arg(long)]
    pub schedule: bool,
}

pub fn run_emi(args: EmiArgs) -> Result<Rendered, Box<dyn std::error::Error>> {
    if args.input.as_deref() == Some(input::STDIN_MARKER) {
        input::stdin::ensure_piped()?;
    }
    let loan_input = resolve_loan_input(&args, io::stdin().lock())?;
    render_emi(loan_input, args.schedule)
}

/// Loan terms from `--input` when given, otherwise from flags.
///
/// `stdin` is only read for `--input -`.
pub fn resolve_loan_input(
    args: &EmiArgs,
    stdin: impl Read,
) -> Result<LoanInput, Box<dyn std::error::Error>> {
    match args.input {
        Some(ref path) => input::read_input(path, stdin),
        None => Ok(loan_from_flags(args)),
    }
}

/// Build loan terms from flags, falling back to the sample loan.
pub fn loan_from_flags(args: &EmiArgs) -> LoanInput {
    let defaults = LoanInput::default();
    LoanInput {
        principal: args.principal.unwrap_or(defaults.principal),
        annual_rate: args.rate.unwrap_or(defaults.annual_rate),
        time_years: args.years.unwrap_or(defaults.time_years),
    }
}

/// Validate, calculate and render one loan.
pub fn render_emi(
    loan_input: LoanInput,
    with_schedule: bool,
) -> Result<Rendered, Box<dyn std::error::Error>> {
    let loan = Loan::try_from(loan_input)?;
    info!(
        "calculating EMI for {} at {}% over {} years",
        loan.principal(),
        loan.annual_rate(),
        loan.time_years()
    );

    let result = emi::calculate_emi(&loan)?;
    let schedule = if with_schedule {
        Some(emi::build_amortization_schedule(&loan)?)
    } else {
        None
    };

    let mut text = Vec::new();
    emi::write_emi_report(
        &loan,
        &result.result,
        schedule.as_ref().map(|s| &s.result),
        &mut text,
    )?;

    let mut value = serde_json::to_value(&result)?;
    if let Some(schedule) = schedule {
        value["result"]["schedule"] = serde_json::to_value(&schedule.result)?;
    }

    Ok(Rendered {
        value,
        text: String::from_utf8(text)?,
    })
}
