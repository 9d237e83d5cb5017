//! Declared value kinds.
//!
//! Parameters declare the types of the values they accept as an ordered
//! list of [`ValueKind`]s. The primitive set is closed: anything outside
//! [`Scalar`] simply cannot be declared, and arrays of arrays are
//! unrepresentable because [`ValueKind::Array`] carries a [`Scalar`]
//! element, not another kind.

use std::fmt;

/// The fixed set of primitive value types a parameter may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scalar {
    Bool,
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    Isize,
    Usize,
    F32,
    F64,
    Decimal,
    Char,
    Str,
}

impl Scalar {
    /// All scalar kinds, in declaration order.
    pub const ALL: [Scalar; 16] = [
        Scalar::Bool,
        Scalar::I8,
        Scalar::U8,
        Scalar::I16,
        Scalar::U16,
        Scalar::I32,
        Scalar::U32,
        Scalar::I64,
        Scalar::U64,
        Scalar::Isize,
        Scalar::Usize,
        Scalar::F32,
        Scalar::F64,
        Scalar::Decimal,
        Scalar::Char,
        Scalar::Str,
    ];

    /// The name used for this kind in user-facing messages.
    pub fn name(self) -> &'static str {
        match self {
            Scalar::Bool => "bool",
            Scalar::I8 => "i8",
            Scalar::U8 => "u8",
            Scalar::I16 => "i16",
            Scalar::U16 => "u16",
            Scalar::I32 => "i32",
            Scalar::U32 => "u32",
            Scalar::I64 => "i64",
            Scalar::U64 => "u64",
            Scalar::Isize => "isize",
            Scalar::Usize => "usize",
            Scalar::F32 => "f32",
            Scalar::F64 => "f64",
            Scalar::Decimal => "decimal",
            Scalar::Char => "char",
            Scalar::Str => "string",
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One entry in a parameter's declared type list.
///
/// `Array` is legal only as the final entry of a declaration; the
/// [`ParamSpec`](crate::ParamSpec) builder rejects earlier occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Scalar(Scalar),
    Array(Scalar),
}

impl ValueKind {
    /// Returns true if this kind is an array tail.
    pub fn is_array(self) -> bool {
        matches!(self, ValueKind::Array(_))
    }

    /// The scalar this kind converts individual tokens to: itself for a
    /// scalar kind, the element type for an array kind.
    pub fn element(self) -> Scalar {
        match self {
            ValueKind::Scalar(s) | ValueKind::Array(s) => s,
        }
    }
}

impl From<Scalar> for ValueKind {
    fn from(s: Scalar) -> Self {
        ValueKind::Scalar(s)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Scalar(s) => write!(f, "{s}"),
            ValueKind::Array(s) => write!(f, "[{s}]"),
        }
    }
}
