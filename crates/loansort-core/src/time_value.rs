use crate::error::LoansortError;
use crate::types::{Money, Rate};
use crate::LoansortResult;

/// Level payment that amortises `principal` over `nper` periods at the
/// periodic `rate`:
///
/// `P * r * (1 + r)^n / ((1 + r)^n - 1)`
///
/// A zero rate degenerates to straight division, `P / n`.
pub fn annuity_payment(rate: Rate, nper: u32, principal: Money) -> LoansortResult<Money> {
    if nper == 0 {
        return Err(LoansortError::invalid(
            "nper",
            "Number of periods must be > 0",
        ));
    }

    if rate == 0.0 {
        return Ok(principal / f64::from(nper));
    }
    if rate <= -1.0 || rate.is_nan() {
        return Err(LoansortError::invalid(
            "rate",
            format!("Periodic rate must be greater than -100%, got {rate}"),
        ));
    }

    // (1 + r)^n - 1 via exp_m1 keeps its precision when r is tiny
    let growth = log_growth(rate, nper);
    let factor = growth.exp();
    let denominator = growth.exp_m1();

    if denominator == 0.0 || !denominator.is_finite() || !factor.is_finite() {
        return Err(LoansortError::ArithmeticAnomaly {
            context: format!("annuity factor {denominator} at rate {rate} over {nper} periods"),
        });
    }

    let payment = principal * rate * factor / denominator;
    if !payment.is_finite() {
        return Err(LoansortError::ArithmeticAnomaly {
            context: "annuity payment is not finite".into(),
        });
    }

    Ok(payment)
}

/// `(1 + r)^n`
pub fn compound_factor(rate: Rate, nper: u32) -> f64 {
    log_growth(rate, nper).exp()
}

/// `n * ln(1 + r)`
fn log_growth(rate: Rate, nper: u32) -> f64 {
    f64::from(nper) * rate.ln_1p()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annuity_payment_basic() {
        let pmt = annuity_payment(0.10 / 12.0, 24, 100_000.0).unwrap();
        assert!((pmt - 4614.49).abs() < 0.01, "got {pmt}");
    }

    #[test]
    fn test_annuity_payment_zero_rate() {
        let pmt = annuity_payment(0.0, 12, 1200.0).unwrap();
        assert_eq!(pmt, 100.0);
    }

    #[test]
    fn test_annuity_payment_single_period() {
        // One period: repay principal plus one period of interest
        let pmt = annuity_payment(0.01, 1, 1000.0).unwrap();
        assert!((pmt - 1010.0).abs() < 1e-9);
    }

    #[test]
    fn test_annuity_payment_zero_periods() {
        let err = annuity_payment(0.01, 0, 1000.0).unwrap_err();
        assert!(matches!(err, LoansortError::InvalidArgument { .. }));
    }

    #[test]
    fn test_annuity_payment_overflow_is_anomaly() {
        let err = annuity_payment(1e6, 1_000, 1000.0).unwrap_err();
        assert!(matches!(err, LoansortError::ArithmeticAnomaly { .. }));
    }

    #[test]
    fn test_annuity_payment_tiny_rate_approaches_straight_line() {
        // 1e-12% a year: the payment is P / n to well within a millionth
        let rate = 1e-12 / 100.0 / 12.0;
        let pmt = annuity_payment(rate, 24, 100_000.0).unwrap();
        assert!((pmt - 100_000.0 / 24.0).abs() < 1e-6, "got {pmt}");

        let rate = 1e-14 / 100.0 / 12.0;
        let pmt = annuity_payment(rate, 24, 100_000.0).unwrap();
        assert!((pmt - 100_000.0 / 24.0).abs() < 1e-6, "got {pmt}");
    }

    #[test]
    fn test_annuity_payment_rate_below_minus_one() {
        let err = annuity_payment(-1.0, 12, 1000.0).unwrap_err();
        assert!(matches!(err, LoansortError::InvalidArgument { .. }));
    }

    #[test]
    fn test_compound_factor() {
        assert!((compound_factor(0.10, 2) - 1.21).abs() < 1e-12);
    }
}
