//! Conversions from plain Rust values into [`BigDecimal`].
//!
//! Integers convert exactly. Floats go through their shortest round-tripping decimal form, so
//! `8.218_f64` becomes exactly `8.218` rather than the nearest binary fraction. Strings are
//! parsed as decimal literals.
//!
//! Values whose exponent is so large in either direction that multiplying them would overflow
//! the decimal scale are rejected up front.

use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::{Result, VectorError};

/// Values that can be used as a vector coordinate or scalar.
pub trait ToDecimal {
    fn to_decimal(&self) -> Result<BigDecimal>;
}

macro_rules! signed_to_decimal {
    ($($t:ty),*) => {$(
        impl ToDecimal for $t {
            fn to_decimal(&self) -> Result<BigDecimal> {
                Ok(BigDecimal::from(*self as i64))
            }
        }
    )*};
}

macro_rules! unsigned_to_decimal {
    ($($t:ty),*) => {$(
        impl ToDecimal for $t {
            fn to_decimal(&self) -> Result<BigDecimal> {
                Ok(BigDecimal::from(*self as u64))
            }
        }
    )*};
}

signed_to_decimal!(i8, i16, i32, i64, isize);
unsigned_to_decimal!(u8, u16, u32, u64, usize);

impl ToDecimal for f64 {
    fn to_decimal(&self) -> Result<BigDecimal> {
        if !self.is_finite() {
            return Err(conversion_error(self));
        }
        // `Display` for floats prints the shortest digits that parse back to the same value.
        parse(&self.to_string())
    }
}

impl ToDecimal for f32 {
    fn to_decimal(&self) -> Result<BigDecimal> {
        if !self.is_finite() {
            return Err(conversion_error(self));
        }
        parse(&self.to_string())
    }
}

impl ToDecimal for str {
    fn to_decimal(&self) -> Result<BigDecimal> {
        parse(self)
    }
}

impl ToDecimal for String {
    fn to_decimal(&self) -> Result<BigDecimal> {
        parse(self)
    }
}

impl ToDecimal for BigDecimal {
    fn to_decimal(&self) -> Result<BigDecimal> {
        check_scale(self.clone())
    }
}

impl<T: ToDecimal + ?Sized> ToDecimal for &T {
    fn to_decimal(&self) -> Result<BigDecimal> {
        (**self).to_decimal()
    }
}

fn parse(text: &str) -> Result<BigDecimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(conversion_error(text));
    }
    BigDecimal::from_str(trimmed)
        .map_err(|_| conversion_error(text))
        .and_then(check_scale)
}

/// Largest scale magnitude accepted for a coordinate or scalar.
///
/// Squaring adds scales, and products of products add them again, so the bound leaves room
/// for that without overflowing `i64`.
pub const MAX_SCALE: i64 = i64::MAX / 4;

pub(crate) fn check_scale(value: BigDecimal) -> Result<BigDecimal> {
    let (_, scale) = value.as_bigint_and_scale();
    if scale.unsigned_abs() > MAX_SCALE as u64 {
        return Err(conversion_error(&value));
    }
    Ok(value)
}

fn conversion_error(value: impl std::fmt::Display) -> VectorError {
    log::debug!("rejected non-decimal value {value}");
    VectorError::TypeConversion {
        value: value.to_string(),
    }
}
