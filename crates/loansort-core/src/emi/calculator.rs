use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::loan::Loan;
use crate::error::LoansortError;
use crate::time_value;
use crate::types::*;
use crate::LoansortResult;

/// Output of the EMI calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmiResult {
    /// Number of monthly installments
    pub months: u32,
    /// Monthly rate as a decimal
    pub monthly_rate: Rate,
    /// Equated monthly installment
    pub emi: Money,
    /// Sum of all installments
    pub total_payment: Money,
    /// Total payment less principal
    pub interest_amount: Money,
    /// Interest as a percentage of principal
    pub interest_percent: Percent,
}

/// Calculate the equated monthly installment for a loan, plus the total
/// payment, total interest and interest as a percentage of principal.
///
/// A zero annual rate is handled as straight-line repayment
/// (`principal / months`) and flagged in the warnings.
pub fn calculate_emi(loan: &Loan) -> LoansortResult<ComputationOutput<EmiResult>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let months = loan.months();
    let monthly_rate = loan.monthly_rate();
    let principal = loan.principal();

    if monthly_rate == 0.0 {
        warn!("zero interest rate; EMI falls back to principal / months");
        warnings.push("Zero interest rate: EMI is principal divided by months".into());
    }

    let emi = time_value::annuity_payment(monthly_rate, months, principal)?;
    let (total_payment, interest_amount, interest_percent) = if monthly_rate == 0.0 {
        // (P / n) * n need not round-trip to P
        (principal, 0.0, 0.0)
    } else {
        let total = emi * f64::from(months);
        let interest = total - principal;
        (total, interest, interest / principal * 100.0)
    };

    for (name, value) in [
        ("total payment", total_payment),
        ("interest amount", interest_amount),
        ("interest percentage", interest_percent),
    ] {
        if !value.is_finite() {
            return Err(LoansortError::ArithmeticAnomaly {
                context: format!("EMI {name} is {value}"),
            });
        }
    }

    debug!(
        "emi={emi} total_payment={total_payment} interest={interest_amount} months={months}"
    );

    let output = EmiResult {
        months,
        monthly_rate,
        emi,
        total_payment,
        interest_amount,
        interest_percent,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "EMI: P * r * (1 + r)^n / ((1 + r)^n - 1), monthly compounding",
        &serde_json::json!({
            "principal": principal,
            "annual_rate_pct": loan.annual_rate(),
            "time_years": loan.time_years(),
        }),
        warnings,
        elapsed,
        output,
    ))
}
