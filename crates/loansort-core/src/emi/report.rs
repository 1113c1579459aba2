//! Console rendering of loans and EMI results.
//!
//! Every writer takes an explicit sink so callers decide where text goes:
//! the binaries hand in stdout, tests hand in a `Vec<u8>`.

use std::io::{self, Write};

use super::calculator::EmiResult;
use super::loan::Loan;
use super::schedule::AmortizationSchedule;
use crate::types::{format_2dp, format_real};

/// Write the three loan terms, one per line.
pub fn display_loan_details(loan: &Loan, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Loan Amount: {}", format_real(loan.principal()))?;
    writeln!(out, "Annual Interest Rate: {}%", format_real(loan.annual_rate()))?;
    writeln!(out, "Time Duration: {} years", loan.time_years())
}

/// Write the EMI block, preceded by a blank line.
pub fn write_emi_calculation(result: &EmiResult, out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- EMI Calculation ---")?;
    writeln!(out, "Monthly EMI: {}", format_2dp(result.emi))?;
    writeln!(out, "Total Payment: {}", format_2dp(result.total_payment))?;
    writeln!(out, "Total Interest: {}", format_2dp(result.interest_amount))?;
    writeln!(out, "Interest Percentage: {}%", format_2dp(result.interest_percent))
}

pub fn write_amortization_schedule(
    schedule: &AmortizationSchedule,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Amortization Schedule ---")?;
    writeln!(
        out,
        "{:>5}  {:>14}  {:>12}  {:>12}  {:>12}  {:>14}",
        "Month", "Opening", "Payment", "Interest", "Principal", "Closing"
    )?;
    for row in &schedule.rows {
        writeln!(
            out,
            "{:>5}  {:>14}  {:>12}  {:>12}  {:>12}  {:>14}",
            row.month,
            format_2dp(row.opening_balance),
            format_2dp(row.payment),
            format_2dp(row.interest),
            format_2dp(row.principal),
            format_2dp(row.closing_balance),
        )?;
    }
    writeln!(
        out,
        "Totals: payment {}, interest {}, principal {}",
        format_2dp(schedule.total_payment),
        format_2dp(schedule.total_interest),
        format_2dp(schedule.total_principal),
    )
}

/// Full calculator report: loan details, EMI block and, when given, the
/// amortization schedule.
pub fn write_emi_report(
    loan: &Loan,
    result: &EmiResult,
    schedule: Option<&AmortizationSchedule>,
    out: &mut impl Write,
) -> io::Result<()> {
    display_loan_details(loan, out)?;
    write_emi_calculation(result, out)?;
    if let Some(schedule) = schedule {
        write_amortization_schedule(schedule, out)?;
    }
    Ok(())
}
