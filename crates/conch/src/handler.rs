//! Command handlers and their results.
//!
//! A handler is attached to a command at registration time — descriptors
//! stay pure metadata, behavior lives in an explicit handler value. The
//! shape of a handler is a closed enum: user commands either take nothing
//! or take the bound parameter collection, and the four built-in commands
//! use two additional shapes that only this crate can construct.

use conch_bind::ParamValues;

use crate::registry::ContextsView;
use crate::shell::ShellControl;

/// What a handler produces: a line of transcript text, or nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text the shell prints, followed by a blank line.
    Text(String),
    /// No output.
    Silent,
}

impl Outcome {
    /// Returns true if this outcome carries text.
    pub fn is_text(&self) -> bool {
        matches!(self, Outcome::Text(_))
    }
}

impl From<String> for Outcome {
    fn from(text: String) -> Self {
        Outcome::Text(text)
    }
}

impl From<&str> for Outcome {
    fn from(text: &str) -> Self {
        Outcome::Text(text.to_string())
    }
}

/// The result type for command handlers.
///
/// Handler-internal failures travel as [`anyhow::Error`]; the shell's
/// per-line boundary prints them and keeps running.
pub type HandlerResult = Result<Outcome, anyhow::Error>;

/// The behavior attached to one command.
///
/// `Nullary` and `Bound` are the two shapes available to hosts; a command
/// that declares parameters must use `Bound`, one that declares none must
/// use `Nullary`, and the registry rejects any other pairing at build
/// time. `Introspect` and `Control` belong to the built-in commands — a
/// closed, fixed set, not an extensibility point.
pub enum Handler {
    /// A command that takes no arguments.
    Nullary(Box<dyn Fn() -> HandlerResult + Send>),
    /// A command that receives its bound parameter collection.
    Bound(Box<dyn Fn(&ParamValues) -> HandlerResult + Send>),
    /// Built-in: receives the full context list (`help`, `commands`).
    Introspect(BuiltinIntrospect),
    /// Built-in: receives the shell control handle (`clear`, `exit`).
    Control(BuiltinControl),
}

/// Handler shape for the listing built-ins. Constructible only inside
/// this crate.
pub struct BuiltinIntrospect(
    pub(crate) fn(&ContextsView<'_>, &ParamValues) -> HandlerResult,
);

/// Handler shape for the shell-control built-ins. Constructible only
/// inside this crate.
pub struct BuiltinControl(pub(crate) fn(&mut ShellControl<'_>) -> HandlerResult);

impl Handler {
    /// Wraps a closure taking no arguments.
    pub fn nullary<F>(f: F) -> Self
    where
        F: Fn() -> HandlerResult + Send + 'static,
    {
        Handler::Nullary(Box::new(f))
    }

    /// Wraps a closure receiving the bound parameter collection.
    pub fn bound<F>(f: F) -> Self
    where
        F: Fn(&ParamValues) -> HandlerResult + Send + 'static,
    {
        Handler::Bound(Box::new(f))
    }

    /// Returns true if this handler receives the bound collection.
    pub(crate) fn expects_values(&self) -> bool {
        matches!(self, Handler::Bound(_))
    }

    /// Returns true for the built-in-only shapes.
    pub(crate) fn is_builtin_shape(&self) -> bool {
        matches!(self, Handler::Introspect(_) | Handler::Control(_))
    }
}

impl std::fmt::Debug for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shape = match self {
            Handler::Nullary(_) => "Nullary",
            Handler::Bound(_) => "Bound",
            Handler::Introspect(_) => "Introspect",
            Handler::Control(_) => "Control",
        };
        f.debug_tuple("Handler").field(&shape).finish()
    }
}
