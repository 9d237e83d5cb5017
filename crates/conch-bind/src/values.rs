//! The bound parameter collection handed to command handlers.

use conch_schema::ParamSpec;
use rust_decimal::Decimal;

use crate::error::BindError;
use crate::value::Value;

/// One parameter's coerced values: the canonical name, the alias set
/// copied from the descriptor, and the ordered values (including at most
/// one trailing array).
#[derive(Debug, Clone, PartialEq)]
pub struct ValueBucket {
    name: String,
    aliases: Vec<String>,
    values: Vec<Value>,
}

impl ValueBucket {
    /// Builds a bucket for the given descriptor.
    pub fn new(param: &ParamSpec, values: Vec<Value>) -> Self {
        Self {
            name: param.name().to_string(),
            aliases: param.aliases().to_vec(),
            values,
        }
    }

    /// The canonical parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parameter's aliases.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// The coerced values, in declaration order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    fn matches(&self, key: &str) -> bool {
        let key = key.to_lowercase();
        self.name == key || self.aliases.iter().any(|a| *a == key)
    }
}

/// Ordered, queryable collection of bound parameter buckets.
///
/// Retrieval never panics for absence: a missing parameter, an index out
/// of range, or a shape the requested type cannot represent all yield
/// `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamValues {
    buckets: Vec<ValueBucket>,
}

impl ParamValues {
    /// Assembles a collection, rejecting duplicate bucket names.
    ///
    /// The validator already guarantees uniqueness for buckets it
    /// produces; this re-check covers collections assembled by hand and
    /// keeps the invariant observable at the type's boundary.
    pub fn new(buckets: Vec<ValueBucket>) -> Result<Self, BindError> {
        for (i, bucket) in buckets.iter().enumerate() {
            if buckets[..i].iter().any(|b| b.name == bucket.name) {
                return Err(BindError::Structural(bucket.name.clone()));
            }
        }
        Ok(Self { buckets })
    }

    /// An empty collection, for commands invoked without parameters.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The buckets, in the order they were bound.
    pub fn buckets(&self) -> &[ValueBucket] {
        &self.buckets
    }

    /// Returns true if no parameter was bound.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Existence check by name or alias, case-insensitive.
    pub fn has(&self, key: &str) -> bool {
        self.buckets.iter().any(|b| b.matches(key))
    }

    /// Retrieves the value at `index` under `key`, coerced to `T`.
    ///
    /// Returns `None` if the parameter is absent, the index is out of
    /// range, or the value's shape cannot convert to `T`. Array values are
    /// not retrievable this way — use [`get_array`](Self::get_array).
    pub fn get<T: FromValue>(&self, key: &str, index: usize) -> Option<T> {
        self.buckets
            .iter()
            .find(|b| b.matches(key))
            .and_then(|b| b.values.get(index))
            .and_then(T::from_value)
    }

    /// Retrieves `key`'s trailing array with elements coerced to `T`.
    ///
    /// Returns `None` if the parameter is absent, carries no array value,
    /// or any element fails to convert.
    pub fn get_array<T: FromValue>(&self, key: &str) -> Option<Vec<T>> {
        let bucket = self.buckets.iter().find(|b| b.matches(key))?;
        let items = bucket.values.iter().find_map(|v| match v {
            Value::Array(_, items) => Some(items),
            _ => None,
        })?;
        items.iter().map(T::from_value).collect()
    }
}

/// Resolved command identity plus its bound parameters; created per
/// entered line and discarded after dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    command: String,
    values: ParamValues,
}

impl Invocation {
    /// Pairs a resolved canonical command name with its bound values.
    pub fn new(command: impl Into<String>, values: ParamValues) -> Self {
        Self {
            command: command.into(),
            values,
        }
    }

    /// The resolved canonical command name.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// The bound parameter collection.
    pub fn values(&self) -> &ParamValues {
        &self.values
    }

    /// Consumes the invocation, yielding the bound collection.
    pub fn into_values(self) -> ParamValues {
        self.values
    }
}

/// Conversion from a bound [`Value`] used by [`ParamValues::get`] and
/// [`ParamValues::get_array`].
///
/// Conversions are lenient: numeric kinds interconvert when the value is
/// exactly representable, any scalar renders to `String`, and string
/// values parse into the requested kind.
/// Arrays convert to nothing — the typed array accessor unwraps them
/// element by element instead.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! integer_from_value {
    ($($ty:ty),* $(,)?) => {$(
        impl FromValue for $ty {
            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    Value::Str(s) => s.parse().ok(),
                    other => other.as_i128().and_then(|n| <$ty>::try_from(n).ok()),
                }
            }
        }
    )*};
}

integer_from_value!(i8, u8, i16, u16, i32, u32, i64, u64, isize, usize);

impl FromValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            Value::Str(s) => s.parse().ok(),
            _ => None,
        }
    }
}

impl FromValue for char {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Char(c) => Some(*c),
            Value::Str(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::F64(v) => Some(*v),
            Value::F32(v) => Some(f64::from(*v)),
            Value::Str(s) => s.parse().ok(),
            other => other.as_i128().map(|n| n as f64),
        }
    }
}

impl FromValue for f32 {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::F32(v) => Some(*v),
            Value::F64(v) => Some(*v as f32),
            Value::Str(s) => s.parse().ok(),
            other => other.as_i128().map(|n| n as f32),
        }
    }
}

impl FromValue for Decimal {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Decimal(d) => Some(*d),
            Value::Str(s) => s.parse().ok(),
            other => other.as_i128().and_then(|n| Decimal::try_from(n).ok()),
        }
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Array(_, _) => None,
            scalar => Some(scalar.to_string()),
        }
    }
}
