//! Parameter binding, validation, and type coercion for the conch shell.
//!
//! This crate is the per-line half of the engine. Given a resolved
//! command descriptor and the tokens that followed the command name, it
//! produces a typed [`Invocation`] in three stages:
//!
//! 1. **Partition** ([`partition`]): group tokens into named buckets using
//!    the marker prefix, with bare leading tokens collecting in the
//!    reserved default bucket.
//! 2. **Validate** ([`validate`]): check arity, required coverage,
//!    default-bucket rules, and per-bucket value counts, and canonicalize
//!    every bucket key to its parameter's declared name.
//! 3. **Coerce** ([`coerce_bucket`]): convert raw tokens into typed
//!    [`Value`]s, aggregating an array-tail parameter's trailing values
//!    through a scope-owned [`ArrayBuffer`].
//!
//! [`bind`] runs all three and is what the shell calls for every line.
//! Every failure is a [`BindError`]; none of them is fatal to the shell.
//!
//! # Example
//!
//! ```rust
//! use conch_bind::bind;
//! use conch_schema::{CommandSpec, ParamSpec, Scalar, ValueKind};
//!
//! let spec = CommandSpec::builder("sum")
//!     .param(
//!         ParamSpec::builder("values")
//!             .required()
//!             .alias("v")
//!             .value(ValueKind::Array(Scalar::I64))
//!             .build()
//!             .unwrap(),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let invocation = bind(&spec, ["--v", "1", "2", "3"], "--").unwrap();
//! assert_eq!(invocation.values().get_array::<i64>("values"), Some(vec![1, 2, 3]));
//! ```

mod binder;
mod coerce;
mod error;
mod validate;
mod value;
mod values;

pub use binder::{partition, RawBucket, DEFAULT_BUCKET};
pub use coerce::{coerce_bucket, ArrayBuffer};
pub use error::BindError;
pub use validate::{validate, CanonicalBucket};
pub use value::{coerce_token, Value};
pub use values::{FromValue, Invocation, ParamValues, ValueBucket};

use conch_schema::CommandSpec;

/// Binds a command's remaining tokens into a typed [`Invocation`].
///
/// Runs the full partition → validate → coerce pipeline. `marker` is the
/// parameter marker prefix (the shell's default is `--`).
///
/// # Errors
///
/// Any [`BindError`]; the offending line is rejected and the shell loop
/// continues.
pub fn bind<'a, I>(spec: &CommandSpec, tokens: I, marker: &str) -> Result<Invocation, BindError>
where
    I: IntoIterator<Item = &'a str>,
{
    let buckets = partition(tokens, marker)?;
    let canonical = validate(spec, buckets)?;

    let mut bound = Vec::with_capacity(canonical.len());
    for bucket in canonical {
        let coerced = coerce_bucket(bucket.param, &bucket.values)?;
        bound.push(ValueBucket::new(bucket.param, coerced));
    }

    Ok(Invocation::new(spec.name(), ParamValues::new(bound)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use conch_schema::{ParamSpec, Scalar, ValueKind};
    use serial_test::serial;

    fn sum_spec() -> CommandSpec {
        CommandSpec::builder("sum")
            .param(
                ParamSpec::builder("values")
                    .required()
                    .alias("v")
                    .value(Scalar::I64)
                    .value(ValueKind::Array(Scalar::I64))
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap()
    }

    #[test]
    #[serial(array_buffers)]
    fn test_full_pipeline_with_array_tail() {
        let invocation = bind(&sum_spec(), ["--values", "1", "2", "3", "4"], "--").unwrap();
        assert_eq!(invocation.command(), "sum");
        let values = invocation.values();
        assert_eq!(values.get::<i64>("values", 0), Some(1));
        assert_eq!(values.get_array::<i64>("v"), Some(vec![2, 3, 4]));
    }

    #[test]
    #[serial(array_buffers)]
    fn test_default_bucket_shorthand_binds_required_param() {
        let invocation = bind(&sum_spec(), ["5", "6"], "--").unwrap();
        assert_eq!(invocation.values().get::<i64>("values", 0), Some(5));
        assert_eq!(invocation.values().get_array::<i64>("values"), Some(vec![6]));
    }

    #[test]
    fn test_unknown_parameter_reported() {
        let err = bind(&sum_spec(), ["--q", "5"], "--").unwrap_err();
        assert_eq!(
            err,
            BindError::UnknownParameter {
                command: "sum".into(),
                param: "q".into(),
            }
        );
    }

    #[test]
    #[serial(array_buffers)]
    fn test_no_buffer_survives_failed_binding() {
        let before = ArrayBuffer::live();
        let err = bind(&sum_spec(), ["--v", "1", "2", "oops"], "--").unwrap_err();
        assert!(matches!(err, BindError::TypeMismatch { .. }));
        assert_eq!(ArrayBuffer::live(), before);
    }

    #[test]
    fn test_duplicate_marker_rejected_regardless_of_cardinality() {
        let err = bind(&sum_spec(), ["--v", "1", "2", "--v", "3", "4"], "--").unwrap_err();
        assert_eq!(err, BindError::DuplicatedParameter("v".into()));
    }
}
