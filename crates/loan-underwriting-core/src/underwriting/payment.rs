use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::UnderwritingError;
use crate::types::{Money, Rate, Years};
use crate::UnderwritingResult;

/// Decimal places kept in the annual payment.
pub const PAYMENT_SCALE: u32 = 8;

/// Flat-interest annual payment:
/// `principal * (1 + period * rate) / period`, rounded half-even to 8 places.
///
/// Interest is charged on the full principal for every year and spread evenly;
/// there is no amortisation schedule.
pub fn annual_payment(principal: Money, repayment_period: Years, rate: Rate) -> UnderwritingResult<Money> {
    if repayment_period <= Decimal::ZERO {
        return Err(UnderwritingError::invalid(
            "repayment_period",
            "Repayment period must be positive.",
        ));
    }
    let total_due = principal * (Decimal::ONE + repayment_period * rate);
    Ok((total_due / repayment_period)
        .round_dp_with_strategy(PAYMENT_SCALE, RoundingStrategy::MidpointNearestEven)
        .normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_single_year_payment() {
        assert_eq!(
            annual_payment(dec!(0.1), dec!(1), dec!(0.0875)).unwrap(),
            dec!(0.10875)
        );
    }

    #[test]
    fn test_twenty_year_payment() {
        assert_eq!(
            annual_payment(dec!(1), dec!(20), dec!(0.085)).unwrap(),
            dec!(0.135)
        );
    }

    #[test]
    fn test_rounds_to_eight_places() {
        // 5 * (1 + 10 * 0.070510299956639811) / 10 = 0.852551499783199055
        let payment = annual_payment(dec!(5), dec!(10), dec!(0.070510299956639811)).unwrap();
        assert_eq!(payment, dec!(0.8525515));
        assert!(payment.scale() <= PAYMENT_SCALE);
    }

    #[test]
    fn test_half_even_midpoint() {
        // 0.000000005 sits exactly between 0.00000000 and 0.00000001
        let payment = annual_payment(dec!(0.000000005), dec!(1), Decimal::ZERO).unwrap();
        assert_eq!(payment, Decimal::ZERO);
        let payment = annual_payment(dec!(0.000000015), dec!(1), Decimal::ZERO).unwrap();
        assert_eq!(payment, dec!(0.00000002));
    }

    #[test]
    fn test_fractional_period() {
        // 2 * (1 + 2.5 * 0.1) / 2.5 = 1
        assert_eq!(
            annual_payment(dec!(2), dec!(2.5), dec!(0.1)).unwrap(),
            dec!(1)
        );
    }

    #[test]
    fn test_zero_period_rejected() {
        assert!(annual_payment(dec!(1), Decimal::ZERO, dec!(0.1)).is_err());
    }
}
