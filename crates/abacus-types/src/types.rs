use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A numeric operand or result
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// Whole number, kept exact while results stay in range
    Integer(i64),
    /// Floating-point number
    Float(f64),
}

/// Error returned when a token is not a valid number
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid number format: '{token}'")]
pub struct ParseNumberError {
    /// The token that failed to parse
    pub token: String,
}

impl Number {
    /// Returns the integer value if this is an `Integer`.
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            Self::Float(_) => None,
        }
    }

    /// Returns the float value if this is a `Float`.
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Integer(_) => None,
        }
    }

    /// Widens either variant to `f64`
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(&self) -> f64 {
        match self {
            Self::Integer(i) => *i as f64,
            Self::Float(f) => *f,
        }
    }

    /// True when the value compares equal to zero
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(i) => *i == 0,
            Self::Float(f) => *f == 0.0,
        }
    }

    /// Type checking utility
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
        }
    }
}

/// Exact ordering of an integer against a float, without rounding the integer
#[allow(clippy::cast_possible_truncation)]
fn cmp_integer_float(i: i64, f: f64) -> Option<Ordering> {
    // 2^63, the first float past i64::MAX
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if f.is_nan() {
        return None;
    }
    if f >= LIMIT {
        return Some(Ordering::Less);
    }
    if f < -LIMIT {
        return Some(Ordering::Greater);
    }
    match i.cmp(&(f.trunc() as i64)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&f.fract()),
        ordering => Some(ordering),
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a.partial_cmp(b),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b),
            (Self::Integer(a), Self::Float(b)) => cmp_integer_float(*a, *b),
            (Self::Float(a), Self::Integer(b)) => cmp_integer_float(*b, *a).map(Ordering::reverse),
        }
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Integer(i) => serializer.serialize_i64(*i),
            Self::Float(f) if f.is_finite() => serializer.serialize_f64(*f),
            // JSON has no NaN or infinity, so these go out as their display text
            Self::Float(_) => serializer.collect_str(self),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            // Debug keeps the trailing ".0" on whole floats and writes
            // exponents without sign padding: 1e16, 1e-5
            Self::Float(fl) => write!(f, "{fl:?}"),
        }
    }
}

impl FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if let Ok(i) = token.parse::<i64>() {
            return Ok(Self::Integer(i));
        }
        token
            .parse::<f64>()
            .map(Self::Float)
            .map_err(|_| ParseNumberError { token: s.to_string() })
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
