//! Per-line binding failures.
//!
//! Every failure in the tokenize-to-dispatch pipeline is recoverable: the
//! shell reports it for the offending line and keeps running. The variants
//! mirror the pipeline stages — parsing, validation, and coercion.

use thiserror::Error;

/// A recoverable failure while binding one entered line to a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// The same parameter was opened twice on one line, either by
    /// repeating its marker or by addressing it through both its name and
    /// an alias.
    #[error("duplicated parameter declaration: {0}")]
    DuplicatedParameter(String),

    /// Bare values were mixed with marked parameters on the same line.
    #[error("default parameters can only be used without any other parameters")]
    MixedDefaultBucket,

    /// Bare values were supplied but the command has no single parameter
    /// (or single required parameter) to shorthand them to.
    #[error(
        "the default parameter requires a command with exactly one parameter \
         or exactly one required parameter"
    )]
    DefaultShorthandUnavailable,

    /// More parameter buckets were supplied than the command declares.
    #[error("parameters count mismatch: `{command}` takes at most {declared}, got {supplied}")]
    ArityMismatch {
        command: String,
        declared: usize,
        supplied: usize,
    },

    /// Not every required parameter was supplied.
    #[error("required parameters count mismatch for command `{command}`")]
    RequiredMismatch { command: String },

    /// A bucket key matched no declared parameter name or alias.
    #[error("unknown parameter for command `{command}`: {param}")]
    UnknownParameter { command: String, param: String },

    /// A bucket holds fewer values than its parameter's declared type list.
    #[error("values count mismatch: {param}")]
    ValueCountMismatch { param: String },

    /// A token could not be converted to the declared type.
    #[error("value type mismatch: \"{token}\" is not {expected}")]
    TypeMismatch { token: String, expected: String },

    /// A bound collection was assembled with duplicate bucket names. This
    /// re-checks at runtime an invariant the validator already enforces.
    #[error("parameter buckets were duplicated: {0}")]
    Structural(String),
}
