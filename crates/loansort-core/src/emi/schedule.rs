use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::calculator::calculate_emi;
use super::loan::Loan;
use crate::error::LoansortError;
use crate::types::*;
use crate::LoansortResult;

/// Longest schedule we are willing to materialise (100 years of months).
pub const MAX_SCHEDULE_MONTHS: u32 = 1200;

/// A single month in the amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    pub month: u32,
    pub opening_balance: Money,
    pub payment: Money,
    pub interest: Money,
    pub principal: Money,
    pub closing_balance: Money,
}

/// Month-by-month amortization of a loan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub emi: Money,
    pub rows: Vec<AmortizationRow>,
    pub total_payment: Money,
    pub total_interest: Money,
    pub total_principal: Money,
}

/// Split every installment into its interest and principal portions.
///
/// Interest accrues on the opening balance at the monthly rate. The final
/// month repays whatever balance remains, so the schedule always closes at
/// exactly zero.
pub fn build_amortization_schedule(
    loan: &Loan,
) -> LoansortResult<ComputationOutput<AmortizationSchedule>> {
    let start = Instant::now();

    let months = loan.months();
    if months > MAX_SCHEDULE_MONTHS {
        return Err(LoansortError::invalid(
            "time_years",
            format!("Schedule is limited to {MAX_SCHEDULE_MONTHS} months, loan has {months}"),
        ));
    }

    let emi_output = calculate_emi(loan)?;
    let emi = emi_output.result.emi;
    let rate = loan.monthly_rate();

    let mut rows = Vec::with_capacity(months as usize);
    let mut balance = loan.principal();
    let mut total_payment = 0.0;
    let mut total_interest = 0.0;
    let mut total_principal = 0.0;

    for month in 1..=months {
        let opening = balance;
        let interest = opening * rate;
        let principal = if month == months {
            opening
        } else {
            (emi - interest).min(opening)
        };
        let payment = interest + principal;
        balance = opening - principal;

        total_payment += payment;
        total_interest += interest;
        total_principal += principal;

        rows.push(AmortizationRow {
            month,
            opening_balance: opening,
            payment,
            interest,
            principal,
            closing_balance: balance,
        });
    }

    let output = AmortizationSchedule {
        emi,
        rows,
        total_payment,
        total_interest,
        total_principal,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Amortization schedule: interest on opening balance, remainder to principal",
        &serde_json::json!({
            "principal": loan.principal(),
            "annual_rate_pct": loan.annual_rate(),
            "months": months,
        }),
        emi_output.warnings,
        elapsed,
        output,
    ))
}
