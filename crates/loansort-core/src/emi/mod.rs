pub mod calculator;
pub mod loan;
pub mod report;
pub mod schedule;

pub use calculator::{calculate_emi, EmiResult};
pub use loan::{Loan, LoanInput};
pub use report::{display_loan_details, write_amortization_schedule, write_emi_calculation, write_emi_report};
pub use schedule::{build_amortization_schedule, AmortizationRow, AmortizationSchedule};
