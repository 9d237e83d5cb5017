//! Shell-level error types and the per-line error boundary.

use conch_bind::BindError;
use conch_schema::RegistryError;
use thiserror::Error;

/// Errors surfaced by the shell itself.
///
/// Registry failures are fatal — construction refuses to produce a shell.
/// Everything else is caught by the per-line boundary: the message is
/// printed and the loop keeps reading.
#[derive(Debug, Error)]
pub enum ShellError {
    /// No command answers to the entered name or alias.
    #[error("unknown command: {0}")]
    CommandNotFound(String),

    /// The line failed to bind to the resolved command.
    #[error(transparent)]
    Bind(#[from] BindError),

    /// Registry validation failed at shell construction.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The console adapter failed.
    #[error("console error: {0}")]
    Io(#[from] std::io::Error),
}

/// Extracts the message to print for one failed line.
///
/// Walks the error's source chain looking for a domain error — the
/// shell's own kinds, a binding failure, or a registry violation — and
/// uses the first one found; an error with no domain cause falls back to
/// its outermost message. Handler-internal errors therefore print
/// whatever the handler reported, while wrapped pipeline failures print
/// the precise domain diagnosis.
pub(crate) fn domain_message(err: &anyhow::Error) -> String {
    for cause in err.chain() {
        if let Some(shell) = cause.downcast_ref::<ShellError>() {
            return shell.to_string();
        }
        if let Some(bind) = cause.downcast_ref::<BindError>() {
            return bind.to_string();
        }
        if let Some(registry) = cause.downcast_ref::<RegistryError>() {
            return registry.to_string();
        }
    }
    err.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_domain_error_found_through_wrapping() {
        let err = anyhow::Error::from(ShellError::CommandNotFound("frob".into()))
            .context("while handling the line");
        assert_eq!(domain_message(&err), "unknown command: frob");
    }

    #[test]
    fn test_nested_bind_error_unwrapped() {
        let err = anyhow::Error::from(BindError::DuplicatedParameter("p".into()))
            .context("outer")
            .context("outermost");
        assert_eq!(domain_message(&err), "duplicated parameter declaration: p");
    }

    #[test]
    fn test_non_domain_error_prints_outermost_message() {
        let err = anyhow::anyhow!("handler exploded").context("running `frob`");
        assert_eq!(domain_message(&err), "running `frob`");
    }
}
