//! Command descriptors.

use crate::error::DeclarationError;
use crate::param::ParamSpec;

/// Immutable metadata for one invocable command: canonical name, aliases,
/// description lines, and the ordered parameter descriptors.
///
/// The handler itself is attached at registration time by the shell — a
/// `CommandSpec` is pure metadata and carries no behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    name: String,
    aliases: Vec<String>,
    description: Vec<String>,
    params: Vec<ParamSpec>,
}

impl CommandSpec {
    /// Starts building a command with the given name.
    pub fn builder(name: impl Into<String>) -> CommandSpecBuilder {
        CommandSpecBuilder {
            name: name.into().to_lowercase(),
            aliases: Vec::new(),
            description: Vec::new(),
            params: Vec::new(),
        }
    }

    /// The canonical (lowercased) command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared aliases, lowercased.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// The description lines, possibly empty.
    pub fn description(&self) -> &[String] {
        &self.description
    }

    /// The ordered parameter descriptors.
    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    /// Returns true if `key` names this command by name or alias,
    /// case-insensitively.
    pub fn is(&self, key: &str) -> bool {
        let key = key.to_lowercase();
        self.name == key || self.aliases.iter().any(|a| *a == key)
    }

    /// Looks up a parameter by name or alias, case-insensitively.
    pub fn param(&self, key: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.matches(key))
    }

    /// Returns true if any parameter answers to `key`.
    pub fn has_param(&self, key: &str) -> bool {
        self.param(key).is_some()
    }

    /// The parameters flagged as required, in declaration order.
    pub fn required_params(&self) -> impl Iterator<Item = &ParamSpec> {
        self.params.iter().filter(|p| p.required())
    }
}

/// Builder for [`CommandSpec`]. Created by [`CommandSpec::builder`].
#[derive(Debug)]
pub struct CommandSpecBuilder {
    name: String,
    aliases: Vec<String>,
    description: Vec<String>,
    params: Vec<ParamSpec>,
}

impl CommandSpecBuilder {
    /// Adds one alias. Aliases are lowercased.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into().to_lowercase());
        self
    }

    /// Adds one description line.
    pub fn describe(mut self, line: impl Into<String>) -> Self {
        self.description.push(line.into());
        self
    }

    /// Appends one parameter descriptor.
    pub fn param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    /// Validates the declaration and produces the [`CommandSpec`].
    ///
    /// Only defects local to this one declaration are rejected here
    /// (duplicated aliases in the alias list). Cross-parameter and
    /// registry-wide rules are enforced by
    /// [`verify_contexts`](crate::verify_contexts) when the shell is built.
    pub fn build(self) -> Result<CommandSpec, DeclarationError> {
        for (i, alias) in self.aliases.iter().enumerate() {
            if self.aliases[..i].contains(alias) {
                return Err(DeclarationError::DuplicateCommandAlias {
                    command: self.name,
                    alias: alias.clone(),
                });
            }
        }

        Ok(CommandSpec {
            name: self.name,
            aliases: self.aliases,
            description: self.description,
            params: self.params,
        })
    }
}
