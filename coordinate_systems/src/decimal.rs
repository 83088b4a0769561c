use crate::CoordinateErrors;
use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;
use serde::{Deserialize, Deserializer};
use std::cmp::Ordering;
use std::num::NonZeroU64;
use std::str::FromStr;

/// Largest magnitude of an adjusted exponent (the exponent of the leading digit) a
/// coordinate component may carry. Exact addition aligns scales, so unbounded exponents
/// would let a single input expand into millions of digits.
pub const MAX_EXPONENT: i64 = 999_999;

/// Values that can be normalized into a `BigDecimal` coordinate component.
///
/// Integers convert losslessly, text is parsed as a decimal literal and floating point
/// values go through [`decimal_from_f64`], which keeps the exact binary value.
pub trait IntoDecimal {
    fn into_decimal(self) -> Result<BigDecimal, CoordinateErrors>;
}

macro_rules! impl_into_decimal_for_int {
    ($($t:ty),*) => {
        $(
            impl IntoDecimal for $t {
                fn into_decimal(self) -> Result<BigDecimal, CoordinateErrors> {
                    Ok(BigDecimal::from(self))
                }
            }
        )*
    };
}

impl_into_decimal_for_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl IntoDecimal for f64 {
    fn into_decimal(self) -> Result<BigDecimal, CoordinateErrors> {
        decimal_from_f64(self)
    }
}

impl IntoDecimal for f32 {
    fn into_decimal(self) -> Result<BigDecimal, CoordinateErrors> {
        decimal_from_f64(f64::from(self))
    }
}

impl IntoDecimal for &str {
    fn into_decimal(self) -> Result<BigDecimal, CoordinateErrors> {
        parse_decimal(self)
    }
}

impl IntoDecimal for String {
    fn into_decimal(self) -> Result<BigDecimal, CoordinateErrors> {
        parse_decimal(&self)
    }
}

impl IntoDecimal for &String {
    fn into_decimal(self) -> Result<BigDecimal, CoordinateErrors> {
        parse_decimal(self)
    }
}

impl IntoDecimal for BigDecimal {
    fn into_decimal(self) -> Result<BigDecimal, CoordinateErrors> {
        check_exponent(self)
    }
}

impl IntoDecimal for &BigDecimal {
    fn into_decimal(self) -> Result<BigDecimal, CoordinateErrors> {
        check_exponent(self.clone())
    }
}

/// Parses a decimal literal such as `"3"`, `"-0.25"`, `"+1.5e3"` or `" 7 "`.
///
/// Words like `inf` or `NaN` are rejected since components must stay finite, and so are
/// values whose adjusted exponent lies outside `±MAX_EXPONENT`.
pub fn parse_decimal(text: &str) -> Result<BigDecimal, CoordinateErrors> {
    let invalid = || CoordinateErrors::InvalidNumber(text.to_string());

    let trimmed = text.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if unsigned.is_empty() || (unsigned.len() != trimmed.len() && unsigned.starts_with(['+', '-']))
    {
        return Err(invalid());
    }
    if !unsigned
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        return Err(invalid());
    }

    let value = BigDecimal::from_str(unsigned).map_err(|_| invalid())?;
    if !exponent_in_range(&value) {
        return Err(invalid());
    }
    Ok(value)
}

/// Passes `value` through when its adjusted exponent is within `±MAX_EXPONENT`.
pub fn check_exponent(value: BigDecimal) -> Result<BigDecimal, CoordinateErrors> {
    if exponent_in_range(&value) {
        Ok(value)
    } else {
        Err(CoordinateErrors::InvalidNumber(value.to_scientific_notation()))
    }
}

fn exponent_in_range(value: &BigDecimal) -> bool {
    let (digits, scale) = value.as_bigint_and_exponent();
    let adjusted = if digits.is_zero() {
        -i128::from(scale)
    } else {
        i128::from(value.digits()) - 1 - i128::from(scale)
    };
    adjusted.abs() <= i128::from(MAX_EXPONENT)
}

/// Deserializes a decimal component, applying the same exponent limit as
/// [`parse_decimal`].
pub fn deserialize_component<'de, D>(deserializer: D) -> Result<BigDecimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = BigDecimal::deserialize(deserializer)?;
    check_exponent(value).map_err(serde::de::Error::custom)
}

/// Converts an `f64` into the decimal with exactly the same value.
///
/// Trailing zeros are dropped down to scale zero, so `3.0` becomes `3` and `0.5` stays
/// `0.5`.
pub fn decimal_from_f64(value: f64) -> Result<BigDecimal, CoordinateErrors> {
    let exact = BigDecimal::try_from(value).map_err(|_| CoordinateErrors::NonFinite(value))?;
    Ok(strip_trailing_zeros(exact, 0))
}

/// Nearest `f64` to the decimal, for the floating point tier (trig, square roots).
///
/// Goes through the decimal's scientific text, which `str::parse` rounds correctly.
pub fn decimal_to_f64(value: &BigDecimal) -> Result<f64, CoordinateErrors> {
    let (digits, scale) = value.as_bigint_and_exponent();
    format!("{digits}e{}", -i128::from(scale))
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CoordinateErrors::Overflow(value.normalized().to_scientific_notation()))
}

/// Square root computed in `f64`, captured back exactly as a decimal.
pub fn float_sqrt(value: &BigDecimal) -> Result<BigDecimal, CoordinateErrors> {
    decimal_from_f64(decimal_to_f64(value)?.sqrt())
}

/// Removes trailing zero digits without letting the scale drop below `min_scale`.
pub fn strip_trailing_zeros(value: BigDecimal, min_scale: i64) -> BigDecimal {
    let (mut digits, mut scale) = value.into_bigint_and_exponent();
    if digits.is_zero() {
        return BigDecimal::new(digits, scale.min(min_scale));
    }

    let ten = BigInt::from(10u8);
    while scale > min_scale {
        if !(&digits % &ten).is_zero() {
            break;
        }
        digits = &digits / &ten;
        scale -= 1;
    }
    BigDecimal::new(digits, scale)
}

/// Divides two decimals, keeping `precision` significant digits.
///
/// The quotient is rounded once, half-even, from the exact remainder. Exact quotients
/// lose their padding zeros down to the ideal scale `scale(numerator) - scale(denominator)`,
/// floored at zero, so `4 / 2` is `2` rather than `2.000...`.
///
/// Returns `None` when the denominator is zero or `precision` is too large to compute.
pub fn divide(
    numerator: &BigDecimal,
    denominator: &BigDecimal,
    precision: NonZeroU64,
) -> Option<BigDecimal> {
    if denominator.is_zero() {
        return None;
    }

    let (numerator, numerator_scale) = numerator.as_bigint_and_exponent();
    let (denominator, denominator_scale) = denominator.as_bigint_and_exponent();
    let ideal_scale = (numerator_scale - denominator_scale).max(0);
    if numerator.is_zero() {
        return Some(BigDecimal::new(BigInt::zero(), ideal_scale));
    }

    let sign = if numerator.sign() == denominator.sign() {
        Sign::Plus
    } else {
        Sign::Minus
    };
    let (n, d) = (numerator.magnitude(), denominator.magnitude());
    let precision = i64::try_from(precision.get()).ok()?;

    // n / d * 10^shift lies in [10^(precision-1), 10^(precision+1))
    let mut shift = precision - (digit_count(n) - digit_count(d));
    let mut division = ScaledDivision::new(n, d, shift)?;
    if digit_count(&division.quotient) > precision {
        shift -= 1;
        division = ScaledDivision::new(n, d, shift)?;
    }

    let exact = division.remainder.is_zero();
    let mut quotient = division.round_half_even();
    if digit_count(&quotient) > precision {
        quotient /= 10u8;
        shift -= 1;
    }

    let scale = shift + numerator_scale - denominator_scale;
    let result = BigDecimal::new(BigInt::from_biguint(sign, quotient), scale);
    Some(if exact {
        strip_trailing_zeros(result, ideal_scale)
    } else {
        result
    })
}

/// Truncated `n * 10^shift / d` with its exact remainder.
struct ScaledDivision {
    quotient: BigUint,
    remainder: BigUint,
    divisor: BigUint,
}

impl ScaledDivision {
    fn new(n: &BigUint, d: &BigUint, shift: i64) -> Option<Self> {
        let power = BigUint::from(10u8).pow(u32::try_from(shift.unsigned_abs()).ok()?);
        let (dividend, divisor) = if shift >= 0 {
            (n * power, d.clone())
        } else {
            (n.clone(), d * power)
        };
        Some(Self {
            quotient: &dividend / &divisor,
            remainder: &dividend % &divisor,
            divisor,
        })
    }

    fn round_half_even(self) -> BigUint {
        let round_up = match (&self.remainder << 1u8).cmp(&self.divisor) {
            Ordering::Greater => true,
            Ordering::Equal => self.quotient.bit(0),
            Ordering::Less => false,
        };
        if round_up {
            self.quotient + 1u8
        } else {
            self.quotient
        }
    }
}

fn digit_count(n: &BigUint) -> i64 {
    n.to_str_radix(10).len() as i64
}
