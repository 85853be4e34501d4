//=========================================================================
// Scalar
//
// Leaf values of an inspected tree (strings, numbers, booleans) and their
// textual conversion.
//
// Equality Rules:
// ```text
// Int(1)    == Float(1.0)   ✓ (compared by mathematical value)
// Int(1)    == Str("1")     ✗ (no coercion between kinds)
// Float(NaN)== Float(NaN)   ✗
// ```
//
// Textual form:
// - integers print as-is (`3`)
// - integral floats keep one decimal (`3.0`) so they stay distinguishable;
//   from 1e16 up they switch to exponent form (`1e16`)
// - non-finite floats print as `inf`, `-inf`, `nan`
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;

//=== Scalar ==============================================================

/// A terminal value.
#[derive(Debug, Clone)]
pub enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    /// Returns the script-facing type name of the scalar.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Int(_) | Self::Float(_) => "number",
            Self::Bool(_) => "boolean",
        }
    }

    /// Returns the string payload, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric payload widened to `f64`, if any.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Int(i) => Some(i as f64),
            Self::Float(f) => Some(f),
            _ => None,
        }
    }
}

//--- Internal Helpers ----------------------------------------------------

// 2^63 as f64; the exclusive upper bound of the i64 range.
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

/// Exact comparison between an integer and a float.
fn int_eq_float(i: i64, f: f64) -> bool {
    f.fract() == 0.0 && f >= -I64_UPPER && f < I64_UPPER && f as i64 == i
}

/// Converts an integral float to `i64` when it is exactly representable.
pub(crate) fn float_to_index(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f >= -I64_UPPER && f < I64_UPPER {
        Some(f as i64)
    } else {
        None
    }
}

//--- Trait Implementations -----------------------------------------------

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        use Scalar::*;
        match (self, other) {
            (Str(a), Str(b)) => a == b,
            (Int(a), Int(b)) => a == b,
            (Float(a), Float(b)) => a == b,
            (Int(i), Float(f)) | (Float(f), Int(i)) => int_eq_float(*i, *f),
            (Bool(a), Bool(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) if x.is_nan() => f.write_str("nan"),
            Self::Float(x) if x.is_infinite() => {
                f.write_str(if *x > 0.0 { "inf" } else { "-inf" })
            }
            Self::Float(x) if x.fract() == 0.0 && x.abs() < 1e16 => write!(f, "{:.1}", x),
            Self::Float(x) if x.fract() == 0.0 => write!(f, "{:e}", x),
            Self::Float(x) => write!(f, "{}", x),
            Self::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Self::Float(value.into())
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
