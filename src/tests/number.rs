use alloc::string::ToString;
use num_traits::{One, Zero};
use rust_decimal::Decimal;

use crate::{Number, error::MathsError};

#[test]
fn test_rational_arithmetic() {
    assert_eq!(rat!(1, 2) + rat!(1, 3), rat!(5, 6));
    assert_eq!(rat!(1, 2) - rat!(3, 4), rat!(-1, 4));
    assert_eq!(rat!(2, 3) * rat!(3, 4), rat!(1, 2));
    assert_eq!(rat!(2) / rat!(4), rat!(1, 2));
    assert_eq!(-rat!(3), rat!(-3));

    // Signs always end up on the numerator
    assert_eq!(Number::Rational(3, -6).simplify(), rat!(-1, 2));
    assert_eq!(Number::Rational(0, 5).simplify(), rat!(0));
}

#[test]
fn test_decimal_arithmetic() {
    let half = Number::Decimal(Decimal::new(5, 1));
    assert_eq!(half + rat!(1), Number::Decimal(Decimal::new(15, 1)));
    assert_eq!((half * rat!(4)).to_whole(), Some(2));
    assert!(rat!(1, 3) < half);
}

#[test]
fn test_checked_div() {
    assert_eq!(rat!(1).checked_div(rat!(0)), Err(MathsError::DivisionByZero));
    assert_eq!(rat!(1).checked_div(rat!(2)), Ok(rat!(1, 2)));
}

#[test]
fn test_overflow() {
    let two_pow_63 = Number::Decimal(Decimal::from(1u64 << 63));

    // Exact results too big for a rational become decimals
    assert_eq!(Number::from(i64::MAX).checked_add(rat!(1)), Ok(two_pow_63));
    assert_eq!(Number::from(1i64 << 62).checked_mul(rat!(2)), Ok(two_pow_63));
    assert_eq!(Number::from(i64::MIN).checked_sub(rat!(1, 2)), Ok(Number::Decimal(Decimal::from(i64::MIN) - Decimal::new(5, 1))));
    assert_eq!(-Number::from(i64::MIN), two_pow_63);
    assert!(matches!(Number::Rational(1, i64::MIN).simplify(), Number::Decimal(d) if d.is_sign_negative()));

    // Small results stay exact
    assert_eq!(Number::from(i64::MAX).checked_add(rat!(-1)), Ok(Number::from(i64::MAX - 1)));

    // Past what a decimal can hold, it's an error rather than a panic
    let huge = Number::Decimal(Decimal::MAX);
    assert_eq!(huge.checked_mul(rat!(2)), Err(MathsError::Overflow));
    assert_eq!(huge.checked_add(huge), Err(MathsError::Overflow));
    assert_eq!(huge.checked_div(rat!(1, 2)), Err(MathsError::Overflow));
    assert_eq!(crate::Operator::Multiply.apply(huge, huge), Err(MathsError::Overflow));
}

#[test]
fn test_predicates() {
    assert!(rat!(-1, 2).is_negative());
    assert!(!rat!(0).is_negative());
    assert!(!rat!(0).is_positive());
    assert!(rat!(7).is_positive());
    assert!(Number::zero().is_zero());
    assert!((-rat!(-1)).is_one());
    assert_eq!(rat!(7, 2).to_whole(), None);
    assert_eq!(rat!(-8).to_whole(), Some(-8));
}

#[test]
fn test_display() {
    assert_eq!(rat!(5).to_string(), "5");
    assert_eq!(rat!(-2, 3).to_string(), "-2/3");
    assert_eq!(Number::Decimal(Decimal::new(150, 2)).to_string(), "1.5");
}
