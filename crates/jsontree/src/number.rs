//! Numeric payload of [`JsonValue::Number`](crate::JsonValue::Number).
//!
//! A number keeps the representation it was built with. Binary operations
//! between two numbers of the same representation stay in that
//! representation; mixed operands are both promoted to `f64` first, so an
//! `Int` never silently truncates a `Double`.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// An integer, 64-bit integer or double.
#[derive(Debug, Clone, Copy)]
pub enum JsonNumber {
    Int(i32),
    Long(i64),
    Double(f64),
}

impl JsonNumber {
    /// The value promoted to `f64`.
    pub fn as_f64(self) -> f64 {
        match self {
            JsonNumber::Int(i) => f64::from(i),
            JsonNumber::Long(l) => l as f64,
            JsonNumber::Double(d) => d,
        }
    }

    /// The value as `i64` when it is integral.
    pub fn as_i64(self) -> Option<i64> {
        match self {
            JsonNumber::Int(i) => Some(i64::from(i)),
            JsonNumber::Long(l) => Some(l),
            JsonNumber::Double(_) => None,
        }
    }

    pub fn is_integer(self) -> bool {
        !matches!(self, JsonNumber::Double(_))
    }

    /// Add one in the same representation.
    pub fn inc(self) -> JsonNumber {
        match self {
            JsonNumber::Int(i) => JsonNumber::Int(i.wrapping_add(1)),
            JsonNumber::Long(l) => JsonNumber::Long(l.wrapping_add(1)),
            JsonNumber::Double(d) => JsonNumber::Double(d + 1.0),
        }
    }

    /// Subtract one in the same representation.
    pub fn dec(self) -> JsonNumber {
        match self {
            JsonNumber::Int(i) => JsonNumber::Int(i.wrapping_sub(1)),
            JsonNumber::Long(l) => JsonNumber::Long(l.wrapping_sub(1)),
            JsonNumber::Double(d) => JsonNumber::Double(d - 1.0),
        }
    }
}

/// Apply `$int`/`$long`/`$double` when both sides share a representation,
/// otherwise apply `$double` to the promoted values.
macro_rules! same_or_promoted {
    ($lhs:expr, $rhs:expr, $int:expr, $long:expr, $double:expr) => {
        match ($lhs, $rhs) {
            (JsonNumber::Int(a), JsonNumber::Int(b)) => JsonNumber::Int($int(a, b)),
            (JsonNumber::Long(a), JsonNumber::Long(b)) => JsonNumber::Long($long(a, b)),
            (JsonNumber::Double(a), JsonNumber::Double(b)) => JsonNumber::Double($double(a, b)),
            (a, b) => JsonNumber::Double($double(a.as_f64(), b.as_f64())),
        }
    };
}

impl Add for JsonNumber {
    type Output = JsonNumber;

    fn add(self, rhs: JsonNumber) -> JsonNumber {
        same_or_promoted!(self, rhs, i32::wrapping_add, i64::wrapping_add, |a: f64, b: f64| a + b)
    }
}

impl Sub for JsonNumber {
    type Output = JsonNumber;

    fn sub(self, rhs: JsonNumber) -> JsonNumber {
        same_or_promoted!(self, rhs, i32::wrapping_sub, i64::wrapping_sub, |a: f64, b: f64| a - b)
    }
}

impl Mul for JsonNumber {
    type Output = JsonNumber;

    fn mul(self, rhs: JsonNumber) -> JsonNumber {
        same_or_promoted!(self, rhs, i32::wrapping_mul, i64::wrapping_mul, |a: f64, b: f64| a * b)
    }
}

/// # Panics
///
/// Integer division by zero panics, as it does for `i32` and `i64`.
impl Div for JsonNumber {
    type Output = JsonNumber;

    fn div(self, rhs: JsonNumber) -> JsonNumber {
        same_or_promoted!(self, rhs, i32::wrapping_div, i64::wrapping_div, |a: f64, b: f64| a / b)
    }
}

/// # Panics
///
/// Integer remainder by zero panics, as it does for `i32` and `i64`.
impl Rem for JsonNumber {
    type Output = JsonNumber;

    fn rem(self, rhs: JsonNumber) -> JsonNumber {
        same_or_promoted!(self, rhs, i32::wrapping_rem, i64::wrapping_rem, |a: f64, b: f64| a % b)
    }
}

impl Neg for JsonNumber {
    type Output = JsonNumber;

    fn neg(self) -> JsonNumber {
        match self {
            JsonNumber::Int(i) => JsonNumber::Int(i.wrapping_neg()),
            JsonNumber::Long(l) => JsonNumber::Long(l.wrapping_neg()),
            JsonNumber::Double(d) => JsonNumber::Double(-d),
        }
    }
}

impl PartialEq for JsonNumber {
    fn eq(&self, other: &JsonNumber) -> bool {
        match (*self, *other) {
            (JsonNumber::Int(a), JsonNumber::Int(b)) => a == b,
            (JsonNumber::Long(a), JsonNumber::Long(b)) => a == b,
            (JsonNumber::Double(a), JsonNumber::Double(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl PartialOrd for JsonNumber {
    fn partial_cmp(&self, other: &JsonNumber) -> Option<Ordering> {
        match (*self, *other) {
            (JsonNumber::Int(a), JsonNumber::Int(b)) => Some(a.cmp(&b)),
            (JsonNumber::Long(a), JsonNumber::Long(b)) => Some(a.cmp(&b)),
            (JsonNumber::Double(a), JsonNumber::Double(b)) => a.partial_cmp(&b),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

/// Native decimal text. Doubles always carry a fractional part (`6.0`);
/// NaN and the infinities have no JSON spelling and render as `null`.
impl fmt::Display for JsonNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonNumber::Int(i) => write!(f, "{i}"),
            JsonNumber::Long(l) => write!(f, "{l}"),
            JsonNumber::Double(d) if d.is_finite() => write!(f, "{d:?}"),
            JsonNumber::Double(_) => f.write_str("null"),
        }
    }
}

impl From<i32> for JsonNumber {
    fn from(i: i32) -> Self {
        JsonNumber::Int(i)
    }
}

impl From<i64> for JsonNumber {
    fn from(l: i64) -> Self {
        JsonNumber::Long(l)
    }
}

impl From<f64> for JsonNumber {
    fn from(d: f64) -> Self {
        JsonNumber::Double(d)
    }
}
