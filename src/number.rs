//! The numeric value carried by [Literal](crate::node::NodeKind::Literal) nodes.

use core::{cmp::Ordering, fmt, ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign}};

use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};
use rust_decimal::Decimal;

use crate::error::MathsError;

/// A signed number, either an exact fraction or a decimal.
///
/// Rationals are kept simplified: the denominator is always positive, and shares no factors with
/// the numerator. Any arithmetic which involves a `Decimal` produces a `Decimal`.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Number {
    Decimal(Decimal),
    Rational(i64, i64),
}

impl Number {
    /// Converts this number to a decimal:
    ///   - For `Decimal`, this simply unwraps the variant.
    ///   - For `Rational`, this divides the numerator by the denominator after converting both to
    ///     decimals.
    pub fn to_decimal(&self) -> Decimal {
        match self {
            Number::Decimal(d) => *d,
            Number::Rational(numer, denom) => Decimal::from(*numer) / Decimal::from(*denom),
        }
    }

    /// Simplifies this number:
    ///   - For `Decimal`, this strips trailing zeroes.
    ///   - For `Rational`, this divides the numerator and denominator by their GCD. Also ensures
    ///     that any negative sign is on the numerator, not the denominator.
    ///
    /// A reduced fraction whose parts don't fit in an `i64`, such as `1 / i64::MIN`, becomes a
    /// `Decimal`.
    pub fn simplify(&self) -> Number {
        match self {
            Self::Decimal(d) => Self::Decimal(d.normalize()),
            Self::Rational(numer, denom) => {
                let negative = (*numer < 0) != (*denom < 0);
                let (numer, denom) = (numer.unsigned_abs(), denom.unsigned_abs());

                let gcd = numer.gcd(&denom);
                if gcd == 0 {
                    return Self::Rational(0, 1);
                }
                let (numer, denom) = (numer / gcd, denom / gcd);

                let signed = if negative { -(numer as i128) } else { numer as i128 };
                match (i64::try_from(signed), i64::try_from(denom)) {
                    (Ok(numer), Ok(denom)) => Self::Rational(numer, denom),
                    _ => {
                        let magnitude = Decimal::from(numer) / Decimal::from(denom);
                        Self::Decimal(if negative { -magnitude } else { magnitude }.normalize())
                    }
                }
            }
        }
    }

    /// Returns the reciprocal of this number. Zero has no reciprocal; use
    /// [checked_div](Number::checked_div) where the divisor may be zero.
    pub fn reciprocal(&self) -> Number {
        match self {
            Self::Decimal(d) => Self::Decimal(Decimal::one() / d),
            Self::Rational(numer, denom) => Self::Rational(*denom, *numer).simplify(),
        }
    }

    /// If this is a whole number, returns it. Otherwise returns None.
    pub fn to_whole(&self) -> Option<i64> {
        match self {
            Self::Decimal(d)
                => if d.fract().is_zero() { d.trunc().to_i64() } else { None },
            Self::Rational(numer, denom)
                => if numer % denom == 0 { Some(numer / denom) } else { None },
        }
    }

    /// True if this number is strictly less than zero.
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Decimal(d) => d.is_sign_negative() && !d.is_zero(),
            Self::Rational(n, _) => n.is_negative(),
        }
    }

    /// True if this number is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        !self.is_negative() && !self.is_zero()
    }

    /// Adds two numbers, or returns an error if the result is out of range.
    ///
    /// Rationals whose exact sum overflows an `i64` are added as decimals instead.
    pub fn checked_add(&self, other: Number) -> Result<Number, MathsError> {
        if let (Self::Rational(ln, ld), Self::Rational(rn, rd)) = (*self, other) {
            // Denominators are positive, so the GCD can't overflow
            let gcd = ld.gcd(&rd);
            let sum = (ld / gcd).checked_mul(rd).and_then(|denom| {
                let ln = (denom / ld).checked_mul(ln)?;
                let rn = (denom / rd).checked_mul(rn)?;
                Some(Self::Rational(ln.checked_add(rn)?, denom).simplify())
            });
            if let Some(sum) = sum {
                return Ok(sum);
            }
        }

        self.to_decimal().checked_add(other.to_decimal())
            .map(|d| Self::Decimal(d).simplify())
            .ok_or(MathsError::Overflow)
    }

    /// Subtracts `other` from this number, or returns an error if the result is out of range.
    pub fn checked_sub(&self, other: Number) -> Result<Number, MathsError> {
        self.checked_add(-other)
    }

    /// Multiplies two numbers, or returns an error if the result is out of range.
    ///
    /// Rationals whose exact product overflows an `i64` are multiplied as decimals instead.
    pub fn checked_mul(&self, other: Number) -> Result<Number, MathsError> {
        if let (Self::Rational(ln, ld), Self::Rational(rn, rd)) = (*self, other) {
            if let (Some(numer), Some(denom)) = (ln.checked_mul(rn), ld.checked_mul(rd)) {
                return Ok(Self::Rational(numer, denom).simplify());
            }
        }

        self.to_decimal().checked_mul(other.to_decimal())
            .map(|d| Self::Decimal(d).simplify())
            .ok_or(MathsError::Overflow)
    }

    /// Divides this number by another number, or returns an error if the divisor is zero or the
    /// result is out of range.
    pub fn checked_div(&self, other: Number) -> Result<Number, MathsError> {
        if other.is_zero() {
            Err(MathsError::DivisionByZero)
        } else {
            self.checked_mul(other.reciprocal())
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Decimal(d) => write!(f, "{}", d.normalize()),
            Self::Rational(n, 1) => write!(f, "{}", n),
            Self::Rational(n, d) => write!(f, "{}/{}", n, d),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_decimal().cmp(&other.to_decimal())
    }
}

impl From<Decimal> for Number {
    fn from(d: Decimal) -> Self {
        Self::Decimal(d)
    }
}

impl From<i64> for Number {
    fn from(i: i64) -> Self {
        Self::Rational(i, 1)
    }
}

impl From<i32> for Number {
    fn from(i: i32) -> Self {
        Self::Rational(i as i64, 1)
    }
}

impl Neg for Number {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Rational(n, d) => match n.checked_neg() {
                Some(n) => Number::Rational(n, d).simplify(),
                None => Number::Decimal(-self.to_decimal()),
            },
            Self::Decimal(d) => Self::Decimal(-d),
        }
    }
}

// The operator traits panic on overflow, like `Decimal`'s own. Code which handles values from
// the user goes through the `checked_*` methods instead.

impl Add for Number {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match self.checked_add(rhs) {
            Ok(n) => n,
            Err(e) => panic!("{} in addition", e),
        }
    }
}

impl AddAssign for Number {
    fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

impl Sub for Number {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}

impl SubAssign for Number {
    fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}

impl Mul for Number {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match self.checked_mul(rhs) {
            Ok(n) => n,
            Err(e) => panic!("{} in multiplication", e),
        }
    }
}

impl MulAssign for Number {
    fn mul_assign(&mut self, rhs: Self) { *self = *self * rhs; }
}

impl Div for Number {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Self) -> Self::Output {
        self * rhs.reciprocal()
    }
}

impl DivAssign for Number {
    fn div_assign(&mut self, rhs: Self) { *self = *self / rhs; }
}

impl Zero for Number {
    fn zero() -> Self {
        Self::Rational(0, 1)
    }

    fn is_zero(&self) -> bool {
        match *self {
            Self::Decimal(d) => d.is_zero(),
            Self::Rational(n, _) => n.is_zero(),
        }
    }
}

impl One for Number {
    fn one() -> Self {
        Self::Rational(1, 1)
    }

    fn is_one(&self) -> bool {
        match *self {
            Self::Decimal(d) => d.is_one(),
            Self::Rational(n, d) => n == d,
        }
    }
}
