//! Bucket partitioning.
//!
//! After the command name token is consumed, the remaining tokens of a
//! line are grouped into named buckets. A token of the form
//! `<marker><name>` opens a bucket; following tokens append to the most
//! recently opened one. Tokens seen before any marker collect in the
//! reserved default bucket, whose key is the empty string.

use crate::error::BindError;

/// The reserved key of the default bucket.
pub const DEFAULT_BUCKET: &str = "";

/// One named group of raw (uncoerced) values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBucket {
    /// The bucket key exactly as typed (marker stripped), or
    /// [`DEFAULT_BUCKET`].
    pub key: String,
    /// The raw tokens collected under this key, in order.
    pub values: Vec<String>,
}

impl RawBucket {
    /// Returns true for the reserved default bucket.
    pub fn is_default(&self) -> bool {
        self.key == DEFAULT_BUCKET
    }
}

/// Partitions a command's remaining tokens into raw buckets.
///
/// Bucket order follows first appearance on the line. Reopening a bucket
/// key that was already opened is a duplicated parameter declaration; the
/// comparison here is against the raw key text, and the validator later
/// also rejects two distinct keys resolving to the same parameter through
/// an alias.
///
/// # Errors
///
/// [`BindError::DuplicatedParameter`] when a marker repeats a key already
/// opened on this line.
pub fn partition<'a, I>(tokens: I, marker: &str) -> Result<Vec<RawBucket>, BindError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut buckets: Vec<RawBucket> = Vec::new();

    for token in tokens {
        match token.strip_prefix(marker).filter(|name| !name.is_empty()) {
            Some(name) => {
                if buckets.iter().any(|b| b.key == name) {
                    return Err(BindError::DuplicatedParameter(name.to_string()));
                }
                buckets.push(RawBucket {
                    key: name.to_string(),
                    values: Vec::new(),
                });
            }
            None => {
                if buckets.is_empty() {
                    buckets.push(RawBucket {
                        key: DEFAULT_BUCKET.to_string(),
                        values: Vec::new(),
                    });
                }
                // Appends to the most recently opened bucket.
                buckets
                    .last_mut()
                    .expect("at least one bucket is open")
                    .values
                    .push(token.to_string());
            }
        }
    }

    Ok(buckets)
}
