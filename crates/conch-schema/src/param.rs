//! Parameter descriptors.

use crate::error::DeclarationError;
use crate::value::ValueKind;

/// Immutable metadata for one declared parameter.
///
/// Names and aliases are lowercased at declaration time; all lookups are
/// case-insensitive against that canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    name: String,
    aliases: Vec<String>,
    required: bool,
    kinds: Vec<ValueKind>,
    description: Vec<String>,
}

impl ParamSpec {
    /// Starts building a parameter with the given name.
    pub fn builder(name: impl Into<String>) -> ParamSpecBuilder {
        ParamSpecBuilder {
            name: name.into().to_lowercase(),
            aliases: Vec::new(),
            required: false,
            kinds: Vec::new(),
            description: Vec::new(),
        }
    }

    /// The canonical (lowercased) parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared aliases, lowercased.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Whether the parameter must be supplied on every invocation.
    pub fn required(&self) -> bool {
        self.required
    }

    /// The ordered declared value kinds.
    pub fn kinds(&self) -> &[ValueKind] {
        &self.kinds
    }

    /// The description lines, possibly empty.
    pub fn description(&self) -> &[String] {
        &self.description
    }

    /// Returns true if `key` names this parameter by name or alias,
    /// case-insensitively.
    pub fn matches(&self, key: &str) -> bool {
        let key = key.to_lowercase();
        self.name == key || self.aliases.iter().any(|a| *a == key)
    }

    /// The trailing array kind, if the last declared kind is one.
    pub fn array_tail(&self) -> Option<ValueKind> {
        self.kinds.last().copied().filter(|k| k.is_array())
    }
}

/// Builder for [`ParamSpec`]. Created by [`ParamSpec::builder`].
#[derive(Debug)]
pub struct ParamSpecBuilder {
    name: String,
    aliases: Vec<String>,
    required: bool,
    kinds: Vec<ValueKind>,
    description: Vec<String>,
}

impl ParamSpecBuilder {
    /// Marks the parameter as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Adds one alias. Aliases are lowercased.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into().to_lowercase());
        self
    }

    /// Appends one declared value kind.
    pub fn value(mut self, kind: impl Into<ValueKind>) -> Self {
        self.kinds.push(kind.into());
        self
    }

    /// Appends several declared value kinds in order.
    pub fn values<I, K>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<ValueKind>,
    {
        self.kinds.extend(kinds.into_iter().map(Into::into));
        self
    }

    /// Adds one description line.
    pub fn describe(mut self, line: impl Into<String>) -> Self {
        self.description.push(line.into());
        self
    }

    /// Validates the declaration and produces the [`ParamSpec`].
    ///
    /// # Errors
    ///
    /// - [`DeclarationError::DuplicateParamAlias`] if the same alias was
    ///   listed twice;
    /// - [`DeclarationError::ArrayNotLast`] if an array kind appears
    ///   anywhere but the final position of the type list.
    pub fn build(self) -> Result<ParamSpec, DeclarationError> {
        for (i, alias) in self.aliases.iter().enumerate() {
            if self.aliases[..i].contains(alias) {
                return Err(DeclarationError::DuplicateParamAlias {
                    param: self.name,
                    alias: alias.clone(),
                });
            }
        }

        let last = self.kinds.len().saturating_sub(1);
        if self.kinds.iter().take(last).any(|k| k.is_array()) {
            return Err(DeclarationError::ArrayNotLast { param: self.name });
        }

        Ok(ParamSpec {
            name: self.name,
            aliases: self.aliases,
            required: self.required,
            kinds: self.kinds,
            description: self.description,
        })
    }
}
