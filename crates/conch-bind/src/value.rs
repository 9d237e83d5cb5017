//! Runtime typed values.

use std::fmt;
use std::str::FromStr;

use conch_schema::Scalar;
use rust_decimal::Decimal;

/// One coerced value: a scalar, or the single trailing array a parameter
/// may carry.
///
/// # Rendering
///
/// [`Value`]'s `Display` output re-coerces to an equal value for every
/// scalar kind. For `f32`/`f64` this relies on Rust formatting floats with
/// the shortest representation that parses back to the same bits, so the
/// round-trip holds exactly; `NaN` is the one exception (it never compares
/// equal to itself).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    Isize(isize),
    Usize(usize),
    F32(f32),
    F64(f64),
    Decimal(Decimal),
    Char(char),
    Str(String),
    /// A homogeneous trailing array and its element kind.
    Array(Scalar, Vec<Value>),
}

impl Value {
    /// The scalar kind of this value, or the element kind for arrays.
    pub fn scalar(&self) -> Scalar {
        match self {
            Value::Bool(_) => Scalar::Bool,
            Value::I8(_) => Scalar::I8,
            Value::U8(_) => Scalar::U8,
            Value::I16(_) => Scalar::I16,
            Value::U16(_) => Scalar::U16,
            Value::I32(_) => Scalar::I32,
            Value::U32(_) => Scalar::U32,
            Value::I64(_) => Scalar::I64,
            Value::U64(_) => Scalar::U64,
            Value::Isize(_) => Scalar::Isize,
            Value::Usize(_) => Scalar::Usize,
            Value::F32(_) => Scalar::F32,
            Value::F64(_) => Scalar::F64,
            Value::Decimal(_) => Scalar::Decimal,
            Value::Char(_) => Scalar::Char,
            Value::Str(_) => Scalar::Str,
            Value::Array(element, _) => *element,
        }
    }

    /// Returns true for the array variant.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_, _))
    }

    /// The value as a signed 128-bit integer, when it holds an integer.
    pub(crate) fn as_i128(&self) -> Option<i128> {
        match *self {
            Value::I8(n) => Some(n.into()),
            Value::U8(n) => Some(n.into()),
            Value::I16(n) => Some(n.into()),
            Value::U16(n) => Some(n.into()),
            Value::I32(n) => Some(n.into()),
            Value::U32(n) => Some(n.into()),
            Value::I64(n) => Some(n.into()),
            Value::U64(n) => Some(n.into()),
            Value::Isize(n) => Some(n as i128),
            Value::Usize(n) => Some(n as i128),
            _ => None,
        }
    }
}

/// Converts one raw token into the given scalar kind.
///
/// Booleans accept `true`/`false` in any case; every other kind follows
/// its `FromStr` grammar. Returns `None` on failure — the caller owns the
/// error wording.
pub fn coerce_token(token: &str, kind: Scalar) -> Option<Value> {
    match kind {
        Scalar::Bool => {
            if token.eq_ignore_ascii_case("true") {
                Some(Value::Bool(true))
            } else if token.eq_ignore_ascii_case("false") {
                Some(Value::Bool(false))
            } else {
                None
            }
        }
        Scalar::I8 => token.parse().ok().map(Value::I8),
        Scalar::U8 => token.parse().ok().map(Value::U8),
        Scalar::I16 => token.parse().ok().map(Value::I16),
        Scalar::U16 => token.parse().ok().map(Value::U16),
        Scalar::I32 => token.parse().ok().map(Value::I32),
        Scalar::U32 => token.parse().ok().map(Value::U32),
        Scalar::I64 => token.parse().ok().map(Value::I64),
        Scalar::U64 => token.parse().ok().map(Value::U64),
        Scalar::Isize => token.parse().ok().map(Value::Isize),
        Scalar::Usize => token.parse().ok().map(Value::Usize),
        Scalar::F32 => token.parse().ok().map(Value::F32),
        Scalar::F64 => token.parse().ok().map(Value::F64),
        Scalar::Decimal => Decimal::from_str(token).ok().map(Value::Decimal),
        Scalar::Char => {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(Value::Char(c)),
                _ => None,
            }
        }
        Scalar::Str => Some(Value::Str(token.to_string())),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::I8(v) => write!(f, "{v}"),
            Value::U8(v) => write!(f, "{v}"),
            Value::I16(v) => write!(f, "{v}"),
            Value::U16(v) => write!(f, "{v}"),
            Value::I32(v) => write!(f, "{v}"),
            Value::U32(v) => write!(f, "{v}"),
            Value::I64(v) => write!(f, "{v}"),
            Value::U64(v) => write!(f, "{v}"),
            Value::Isize(v) => write!(f, "{v}"),
            Value::Usize(v) => write!(f, "{v}"),
            Value::F32(v) => write!(f, "{v}"),
            Value::F64(v) => write!(f, "{v}"),
            Value::Decimal(v) => write!(f, "{v}"),
            Value::Char(v) => write!(f, "{v}"),
            Value::Str(v) => write!(f, "{v}"),
            Value::Array(_, items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}
