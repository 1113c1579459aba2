use serde::{Deserialize, Serialize};

use crate::error::LoansortError;
use crate::types::{Money, Percent};
use crate::LoansortResult;

/// Loan terms as supplied by a caller (flags, JSON file, stdin).
///
/// Nothing is checked here; convert into a [`Loan`] to validate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInput {
    /// Amount borrowed
    pub principal: Money,
    /// Annual interest rate as a percentage (10.0 = 10%)
    pub annual_rate: Percent,
    /// Loan term in whole years
    pub time_years: u32,
}

impl Default for LoanInput {
    fn default() -> Self {
        LoanInput {
            principal: 100_000.0,
            annual_rate: 10.0,
            time_years: 2,
        }
    }
}

/// A validated, immutable loan.
///
/// Preconditions, all enforced by [`Loan::new`]:
/// - `principal` is finite and > 0
/// - `annual_rate` is finite and >= 0
/// - `time_years` is > 0 and `time_years * 12` fits in a `u32`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LoanInput", into = "LoanInput")]
pub struct Loan {
    principal: Money,
    annual_rate: Percent,
    time_years: u32,
}

impl Loan {
    pub fn new(principal: Money, annual_rate: Percent, time_years: u32) -> LoansortResult<Self> {
        if !principal.is_finite() || principal <= 0.0 {
            return Err(LoansortError::invalid(
                "principal",
                format!("Loan amount must be a positive number, got {principal}"),
            ));
        }
        if !annual_rate.is_finite() || annual_rate < 0.0 {
            return Err(LoansortError::invalid(
                "annual_rate",
                format!("Annual rate must be zero or positive, got {annual_rate}"),
            ));
        }
        if time_years == 0 {
            return Err(LoansortError::invalid(
                "time_years",
                "Loan term must be at least 1 year",
            ));
        }
        if time_years.checked_mul(12).is_none() {
            return Err(LoansortError::invalid(
                "time_years",
                format!("Loan term of {time_years} years overflows the month count"),
            ));
        }

        Ok(Loan {
            principal,
            annual_rate,
            time_years,
        })
    }

    pub fn principal(&self) -> Money {
        self.principal
    }

    pub fn annual_rate(&self) -> Percent {
        self.annual_rate
    }

    pub fn time_years(&self) -> u32 {
        self.time_years
    }

    /// Number of monthly installments.
    pub fn months(&self) -> u32 {
        self.time_years * 12
    }

    /// Periodic (monthly) rate as a decimal.
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate / 100.0 / 12.0
    }
}

impl TryFrom<LoanInput> for Loan {
    type Error = LoansortError;

    fn try_from(input: LoanInput) -> LoansortResult<Self> {
        Loan::new(input.principal, input.annual_rate, input.time_years)
    }
}

impl From<Loan> for LoanInput {
    fn from(loan: Loan) -> Self {
        LoanInput {
            principal: loan.principal,
            annual_rate: loan.annual_rate,
            time_years: loan.time_years,
        }
    }
}
