use loansort_core::emi::{self, Loan, LoanInput};
use loansort_core::{format_2dp, LoansortError};

// ===========================================================================
// EMI calculation tests
// ===========================================================================

fn sample_loan() -> Loan {
    // 100,000 at 10% over 2 years
    Loan::try_from(LoanInput::default()).unwrap()
}

#[test]
fn test_sample_loan_known_answer() {
    let out = emi::calculate_emi(&sample_loan()).unwrap();
    let r = &out.result;

    assert_eq!(r.months, 24);
    assert!((r.monthly_rate - 0.008_333_333_3).abs() < 1e-9);
    assert_eq!(format_2dp(r.emi), "4614.49");
    // full-precision EMI * 24, not the rounded EMI * 24
    assert_eq!(format_2dp(r.total_payment), "110747.82");
    assert_eq!(format_2dp(r.interest_amount), "10747.82");
    assert_eq!(format_2dp(r.interest_percent), "10.75");
}

#[test]
fn test_envelope_metadata() {
    let out = emi::calculate_emi(&sample_loan()).unwrap();
    assert!(out.methodology.starts_with("EMI"));
    assert_eq!(out.assumptions["time_years"], 2);
    assert_eq!(out.metadata.precision, "f64");
}

#[test]
fn test_higher_rate_costs_more() {
    let low = emi::calculate_emi(&Loan::new(100_000.0, 5.0, 5).unwrap()).unwrap();
    let high = emi::calculate_emi(&Loan::new(100_000.0, 12.0, 5).unwrap()).unwrap();
    assert!(high.result.emi > low.result.emi);
    assert!(high.result.interest_amount > low.result.interest_amount);
}

#[test]
fn test_longer_term_lowers_installment() {
    let short = emi::calculate_emi(&Loan::new(300_000.0, 12.0, 5).unwrap()).unwrap();
    let long = emi::calculate_emi(&Loan::new(300_000.0, 12.0, 20).unwrap()).unwrap();
    assert!(long.result.emi < short.result.emi);
    assert!(long.result.total_payment > short.result.total_payment);
}

// ---------------------------------------------------------------------------
// Preconditions
// ---------------------------------------------------------------------------

#[test]
fn test_zero_principal_is_invalid_argument() {
    let err = Loan::new(0.0, 10.0, 2).unwrap_err();
    assert!(matches!(err, LoansortError::InvalidArgument { ref field, .. } if field == "principal"));
}

#[test]
fn test_zero_time_is_invalid_argument() {
    let err = Loan::new(100_000.0, 10.0, 0).unwrap_err();
    assert!(matches!(err, LoansortError::InvalidArgument { ref field, .. } if field == "time_years"));
}

#[test]
fn test_negative_rate_is_invalid_argument() {
    let err = Loan::new(100_000.0, -0.5, 2).unwrap_err();
    assert!(matches!(err, LoansortError::InvalidArgument { .. }));
}

#[test]
fn test_error_message_names_field() {
    let err = Loan::new(-1.0, 10.0, 2).unwrap_err();
    assert!(err.to_string().contains("principal"));
}

// ---------------------------------------------------------------------------
// Zero-rate edge case
// ---------------------------------------------------------------------------

#[test]
fn test_zero_rate_divides_evenly() {
    let out = emi::calculate_emi(&Loan::new(24_000.0, 0.0, 2).unwrap()).unwrap();
    assert_eq!(out.result.emi, 1000.0);
    assert_eq!(out.result.total_payment, 24_000.0);
    assert_eq!(out.result.interest_percent, 0.0);
    assert!(out.warnings[0].contains("Zero interest rate"));
}

#[test]
fn test_tiny_rate_is_close_to_straight_line() {
    let loan = Loan::new(100_000.0, 1e-12, 2).unwrap();
    let r = emi::calculate_emi(&loan).unwrap().result;
    assert!((r.emi - 100_000.0 / 24.0).abs() < 1e-6, "got {}", r.emi);
    assert!(r.interest_amount > -1e-6);
}

#[test]
fn test_vanishing_rate_is_not_an_anomaly() {
    let loan = Loan::new(100_000.0, 1e-14, 2).unwrap();
    let r = emi::calculate_emi(&loan).unwrap().result;
    assert!((r.emi - 100_000.0 / 24.0).abs() < 1e-6, "got {}", r.emi);
}

// ---------------------------------------------------------------------------
// Amortization schedule
// ---------------------------------------------------------------------------

#[test]
fn test_schedule_totals_match_emi() {
    let loan = sample_loan();
    let emi_out = emi::calculate_emi(&loan).unwrap().result;
    let schedule = emi::build_amortization_schedule(&loan).unwrap().result;

    assert!((schedule.total_payment - emi_out.total_payment).abs() < 0.01);
    assert!((schedule.total_interest - emi_out.interest_amount).abs() < 0.01);
    assert_eq!(schedule.rows.last().unwrap().closing_balance, 0.0);
}

#[test]
fn test_schedule_interest_declines() {
    let schedule = emi::build_amortization_schedule(&Loan::new(80_000.0, 9.0, 4).unwrap())
        .unwrap()
        .result;
    for pair in schedule.rows.windows(2) {
        assert!(pair[1].interest < pair[0].interest);
    }
}

#[test]
fn test_zero_rate_schedule_has_no_interest() {
    let schedule = emi::build_amortization_schedule(&Loan::new(1_200.0, 0.0, 1).unwrap())
        .unwrap()
        .result;
    assert_eq!(schedule.total_interest, 0.0);
    assert!(schedule.rows.iter().all(|r| r.principal == 100.0));
    assert_eq!(schedule.rows.last().unwrap().closing_balance, 0.0);
}
