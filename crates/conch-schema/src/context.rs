//! Context descriptors.

use crate::command::CommandSpec;

/// One host-declared source of related commands.
///
/// A context is a plain value: a name plus the commands it contributes.
/// It is assembled once, before the shell starts, and carries no instance
/// state — the registration API has no way to attach any, so a context
/// cannot smuggle fields, properties, or stray methods past the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextSpec {
    name: String,
    commands: Vec<CommandSpec>,
}

impl ContextSpec {
    /// Starts building a context with the given name.
    pub fn builder(name: impl Into<String>) -> ContextSpecBuilder {
        ContextSpecBuilder {
            name: name.into(),
            commands: Vec::new(),
        }
    }

    /// The context name, used in registry diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The commands this context contributes.
    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }
}

/// Builder for [`ContextSpec`]. Created by [`ContextSpec::builder`].
#[derive(Debug)]
pub struct ContextSpecBuilder {
    name: String,
    commands: Vec<CommandSpec>,
}

impl ContextSpecBuilder {
    /// Appends one command descriptor.
    pub fn command(mut self, command: CommandSpec) -> Self {
        self.commands.push(command);
        self
    }

    /// Produces the [`ContextSpec`].
    ///
    /// Contexts have no declaration-local rules of their own; whether a
    /// context is allowed to be empty, or collides with another, is a
    /// registry-wide question answered by
    /// [`verify_contexts`](crate::verify_contexts).
    pub fn build(self) -> ContextSpec {
        ContextSpec {
            name: self.name,
            commands: self.commands,
        }
    }
}
