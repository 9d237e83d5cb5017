//! Declaration-time error types.

use thiserror::Error;

/// A defect in one command or parameter declaration, reported by the
/// builders in this crate before the registry ever sees the descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationError {
    /// The same alias was listed twice in one command declaration.
    #[error("aliases were duplicated in command `{command}`: {alias}")]
    DuplicateCommandAlias { command: String, alias: String },

    /// The same alias was listed twice in one parameter declaration.
    #[error("aliases were duplicated in parameter `{param}`: {alias}")]
    DuplicateParamAlias { param: String, alias: String },

    /// An array kind appeared before the end of a parameter's type list.
    #[error("arrays can only appear at the end of parameter `{param}`'s type list")]
    ArrayNotLast { param: String },
}
