//! The built registry: every context, validated once.

use conch_schema::{verify_contexts, CommandSpec, ContextSpec, RegistryError, Violation};

use crate::context::{Command, Context};
use crate::handler::Handler;

/// All registered contexts, validated at construction and read-only for
/// the life of the shell. Lookups never require locking.
#[derive(Debug)]
pub(crate) struct Registry {
    contexts: Vec<Context>,
}

impl Registry {
    /// Validates the built-in context plus the host's contexts and builds
    /// the registry. The built-in context comes first and is exempt from
    /// the per-command parameter checks; `trusted` is that prefix length.
    ///
    /// # Errors
    ///
    /// A single [`RegistryError`] enumerating every violation found,
    /// grouped by kind — both the metadata-level violations from
    /// [`verify_contexts`] and the handler-shape mismatches only this
    /// crate can see.
    pub(crate) fn build(contexts: Vec<Context>, trusted: usize) -> Result<Self, RegistryError> {
        let specs: Vec<ContextSpec> = contexts.iter().map(Context::spec).collect();
        let mut violations = verify_contexts(&specs, trusted);

        for context in contexts.iter().skip(trusted) {
            for command in context.commands() {
                if let Some(reason) = declaration_mismatch(command) {
                    violations.push(Violation::InvalidDeclaration {
                        context: context.name().to_string(),
                        command: command.spec.name().to_string(),
                        reason: reason.to_string(),
                    });
                }
            }
        }

        match RegistryError::from_violations(violations) {
            Some(error) => Err(error),
            None => Ok(Self { contexts }),
        }
    }

    /// Resolves a command by name or alias, case-insensitively.
    pub(crate) fn find(&self, key: &str) -> Option<&Command> {
        self.contexts
            .iter()
            .flat_map(|ctx| ctx.commands().iter())
            .find(|command| command.spec.is(key))
    }

    /// The read-only view handed to the listing built-ins.
    pub(crate) fn view(&self) -> ContextsView<'_> {
        ContextsView {
            contexts: &self.contexts,
        }
    }
}

/// Why a command's declaration does not fit its handler, if it doesn't.
fn declaration_mismatch(command: &Command) -> Option<&'static str> {
    if command.handler.is_builtin_shape() {
        return Some("reserved handler shape outside the built-in context");
    }
    let declares_params = !command.spec.params().is_empty();
    match (declares_params, command.handler.expects_values()) {
        (true, false) => Some("declares parameters but its handler takes none"),
        (false, true) => Some("declares no parameters but its handler takes a bound collection"),
        _ => None,
    }
}

/// Read-only view of every registered command, passed to the `help` and
/// `commands` built-ins so they never need access to the handlers
/// themselves.
#[derive(Debug, Clone, Copy)]
pub struct ContextsView<'a> {
    contexts: &'a [Context],
}

impl<'a> ContextsView<'a> {
    /// Every command descriptor, in registration order.
    pub fn commands(&self) -> impl Iterator<Item = &'a CommandSpec> {
        self.contexts
            .iter()
            .flat_map(|ctx| ctx.commands().iter().map(|c| &c.spec))
    }

    /// Resolves a command descriptor by name or alias, case-insensitively.
    pub fn find(&self, key: &str) -> Option<&'a CommandSpec> {
        self.commands().find(|spec| spec.is(key))
    }
}
