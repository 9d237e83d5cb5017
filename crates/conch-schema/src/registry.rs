//! Registry-wide structural validation.
//!
//! [`verify_contexts`] walks every registered context once, at shell
//! construction, and collects EVERY structural violation it finds rather
//! than stopping at the first. The caller turns a non-empty collection
//! into a fatal [`RegistryError`]; a shell is never allowed to start with
//! an inconsistent registry.
//!
//! Leading "trusted" contexts (the shell's built-in context) are exempt
//! from the per-command parameter checks — their declarations ship with
//! the library — but still participate in registry-wide name and alias
//! uniqueness, so a host cannot redeclare `help` or shadow `exit`.

use std::collections::BTreeMap;
use std::fmt;

use crate::command::CommandSpec;
use crate::context::ContextSpec;

/// One structural violation found while validating the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The registry contains no contexts at all.
    NoContexts,
    /// Two contexts share a name.
    DuplicateContext { name: String },
    /// A context contributes zero commands.
    EmptyContext { context: String },
    /// A command's declaration does not match its handler shape.
    InvalidDeclaration {
        context: String,
        command: String,
        reason: String,
    },
    /// The same command name is declared more than once, registry-wide.
    DuplicateCommand { name: String, count: usize },
    /// A command alias collides with another command's name or alias.
    DuplicateAlias { alias: String, commands: Vec<String> },
    /// A parameter's name collides with a sibling parameter's alias.
    ParamConflict { command: String, names: Vec<String> },
    /// Two parameters of one command share a name.
    DuplicateParam { command: String, params: Vec<String> },
    /// The same alias is declared by more than one parameter of a command.
    DuplicateParamAliases { command: String, aliases: Vec<String> },
}

impl Violation {
    /// The kind header this violation is grouped under when reported.
    pub fn kind(&self) -> &'static str {
        match self {
            Violation::NoContexts => "no contexts",
            Violation::DuplicateContext { .. } => "duplicate contexts",
            Violation::EmptyContext { .. } => "empty contexts",
            Violation::InvalidDeclaration { .. } => "invalid command declarations",
            Violation::DuplicateCommand { .. } => "duplicate commands",
            Violation::DuplicateAlias { .. } => "duplicate command aliases",
            Violation::ParamConflict { .. } => "param conflicts",
            Violation::DuplicateParam { .. } => "duplicate params",
            Violation::DuplicateParamAliases { .. } => "duplicate param aliases",
        }
    }

    /// Sort key keeping one contiguous group per kind in reports.
    fn rank(&self) -> u8 {
        match self {
            Violation::NoContexts => 0,
            Violation::DuplicateContext { .. } => 1,
            Violation::EmptyContext { .. } => 2,
            Violation::InvalidDeclaration { .. } => 3,
            Violation::DuplicateCommand { .. } => 4,
            Violation::DuplicateAlias { .. } => 5,
            Violation::ParamConflict { .. } => 6,
            Violation::DuplicateParam { .. } => 7,
            Violation::DuplicateParamAliases { .. } => 8,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::NoContexts => write!(f, "the shell has no command contexts"),
            Violation::DuplicateContext { name } => write!(f, "{name}"),
            Violation::EmptyContext { context } => write!(f, "{context}"),
            Violation::InvalidDeclaration {
                context,
                command,
                reason,
            } => write!(f, "{context}/{command}: {reason}"),
            Violation::DuplicateCommand { name, count } => {
                write!(f, "{name} (declared {count} times)")
            }
            Violation::DuplicateAlias { alias, commands } => {
                write!(f, "{alias}: {}", commands.join(" "))
            }
            Violation::ParamConflict { command, names } => {
                write!(f, "{command}: {}", names.join(" "))
            }
            Violation::DuplicateParam { command, params } => {
                write!(f, "{command}: {}", params.join(" "))
            }
            Violation::DuplicateParamAliases { command, aliases } => {
                write!(f, "{command}: {}", aliases.join(" "))
            }
        }
    }
}

/// Fatal registry validation failure: every violation found, grouped by
/// kind when displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryError {
    violations: Vec<Violation>,
}

impl RegistryError {
    /// Wraps a non-empty violation list; returns `None` for an empty one.
    /// Violations are ordered by kind so each kind forms one group.
    pub fn from_violations(mut violations: Vec<Violation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            violations.sort_by_key(Violation::rank);
            Some(Self { violations })
        }
    }

    /// Every violation found, grouped by kind.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "command registry validation failed:")?;
        let mut last_kind = "";
        for violation in &self.violations {
            if violation.kind() != last_kind {
                last_kind = violation.kind();
                write!(f, "\n{last_kind}:")?;
            }
            write!(f, "\n  {violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for RegistryError {}

/// Validates the whole registry and returns every violation found.
///
/// `trusted` is the number of leading contexts exempt from the per-command
/// parameter checks (the shell passes 1 for its built-in context). The
/// caller may append further violations of its own — the shell adds
/// handler-shape mismatches — before wrapping the collection in a
/// [`RegistryError`].
pub fn verify_contexts(contexts: &[ContextSpec], trusted: usize) -> Vec<Violation> {
    let mut violations = Vec::new();

    if contexts.is_empty() {
        violations.push(Violation::NoContexts);
        return violations;
    }

    for (i, ctx) in contexts.iter().enumerate() {
        if contexts[..i].iter().any(|c| c.name() == ctx.name()) {
            violations.push(Violation::DuplicateContext {
                name: ctx.name().to_string(),
            });
        }
    }

    for ctx in contexts {
        if ctx.commands().is_empty() {
            violations.push(Violation::EmptyContext {
                context: ctx.name().to_string(),
            });
        }
    }

    check_command_names(contexts, &mut violations);
    check_command_aliases(contexts, &mut violations);

    for ctx in contexts.iter().skip(trusted) {
        for cmd in ctx.commands() {
            check_param_conflicts(cmd, &mut violations);
            check_duplicate_params(cmd, &mut violations);
            check_duplicate_param_aliases(cmd, &mut violations);
        }
    }

    violations
}

fn check_command_names(contexts: &[ContextSpec], violations: &mut Vec<Violation>) {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for ctx in contexts {
        for cmd in ctx.commands() {
            *counts.entry(cmd.name()).or_default() += 1;
        }
    }
    for (name, count) in counts {
        if count > 1 {
            violations.push(Violation::DuplicateCommand {
                name: name.to_string(),
                count,
            });
        }
    }
}

fn check_command_aliases(contexts: &[ContextSpec], violations: &mut Vec<Violation>) {
    // alias -> commands that declare it, plus commands whose *name* it is.
    let mut holders: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for ctx in contexts {
        for cmd in ctx.commands() {
            for alias in cmd.aliases() {
                holders.entry(alias).or_default().push(cmd.name());
            }
        }
    }
    for ctx in contexts {
        for cmd in ctx.commands() {
            if let Some(commands) = holders.get_mut(cmd.name()) {
                commands.push(cmd.name());
            }
        }
    }
    for (alias, mut commands) in holders {
        if commands.len() > 1 {
            commands.dedup();
            violations.push(Violation::DuplicateAlias {
                alias: alias.to_string(),
                commands: commands.iter().map(|c| c.to_string()).collect(),
            });
        }
    }
}

fn check_param_conflicts(cmd: &CommandSpec, violations: &mut Vec<Violation>) {
    let mut names = Vec::new();
    for param in cmd.params() {
        let collides = cmd
            .params()
            .iter()
            .filter(|other| other.name() != param.name())
            .any(|other| other.aliases().iter().any(|a| a == param.name()));
        if collides && !names.contains(&param.name().to_string()) {
            names.push(param.name().to_string());
        }
    }
    if !names.is_empty() {
        violations.push(Violation::ParamConflict {
            command: cmd.name().to_string(),
            names,
        });
    }
}

fn check_duplicate_params(cmd: &CommandSpec, violations: &mut Vec<Violation>) {
    let mut duplicated = Vec::new();
    for (i, param) in cmd.params().iter().enumerate() {
        if cmd.params()[..i].iter().any(|p| p.name() == param.name())
            && !duplicated.contains(&param.name().to_string())
        {
            duplicated.push(param.name().to_string());
        }
    }
    if !duplicated.is_empty() {
        violations.push(Violation::DuplicateParam {
            command: cmd.name().to_string(),
            params: duplicated,
        });
    }
}

fn check_duplicate_param_aliases(cmd: &CommandSpec, violations: &mut Vec<Violation>) {
    let mut seen: Vec<&str> = Vec::new();
    let mut duplicated = Vec::new();
    for param in cmd.params() {
        for alias in param.aliases() {
            if seen.contains(&alias.as_str()) {
                if !duplicated.contains(&alias.to_string()) {
                    duplicated.push(alias.to_string());
                }
            } else {
                seen.push(alias);
            }
        }
    }
    if !duplicated.is_empty() {
        violations.push(Violation::DuplicateParamAliases {
            command: cmd.name().to_string(),
            aliases: duplicated,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CommandSpec, ParamSpec, Scalar};

    fn command(name: &str) -> CommandSpec {
        CommandSpec::builder(name).build().unwrap()
    }

    fn context(name: &str, commands: Vec<CommandSpec>) -> ContextSpec {
        let mut builder = ContextSpec::builder(name);
        for cmd in commands {
            builder = builder.command(cmd);
        }
        builder.build()
    }

    #[test]
    fn test_clean_registry_has_no_violations() {
        let contexts = vec![
            context("builtin", vec![command("help"), command("exit")]),
            context("math", vec![command("sum")]),
        ];
        assert!(verify_contexts(&contexts, 1).is_empty());
    }

    #[test]
    fn test_no_contexts() {
        assert_eq!(verify_contexts(&[], 0), [Violation::NoContexts]);
    }

    #[test]
    fn test_empty_context_rejected() {
        let contexts = vec![context("misc", vec![])];
        let violations = verify_contexts(&contexts, 0);
        assert!(violations
            .iter()
            .any(|v| matches!(v, Violation::EmptyContext { context } if context == "misc")));
    }

    #[test]
    fn test_duplicate_context_names() {
        let contexts = vec![
            context("math", vec![command("sum")]),
            context("math", vec![command("sub")]),
        ];
        let violations = verify_contexts(&contexts, 0);
        assert!(violations
            .iter()
            .any(|v| matches!(v, Violation::DuplicateContext { name } if name == "math")));
    }

    #[test]
    fn test_duplicate_command_names_across_contexts() {
        let contexts = vec![
            context("a", vec![command("sum")]),
            context("b", vec![command("sum")]),
        ];
        let violations = verify_contexts(&contexts, 0);
        assert!(violations.iter().any(
            |v| matches!(v, Violation::DuplicateCommand { name, count } if name == "sum" && *count == 2)
        ));
    }

    #[test]
    fn test_alias_collides_with_alias() {
        let contexts = vec![context(
            "math",
            vec![
                CommandSpec::builder("sum").alias("s").build().unwrap(),
                CommandSpec::builder("sub").alias("s").build().unwrap(),
            ],
        )];
        let violations = verify_contexts(&contexts, 0);
        assert!(violations.iter().any(|v| matches!(
            v,
            Violation::DuplicateAlias { alias, commands }
                if alias == "s" && commands.contains(&"sum".to_string()) && commands.contains(&"sub".to_string())
        )));
    }

    #[test]
    fn test_alias_collides_with_command_name() {
        let contexts = vec![context(
            "math",
            vec![
                command("sum"),
                CommandSpec::builder("sub").alias("sum").build().unwrap(),
            ],
        )];
        let violations = verify_contexts(&contexts, 0);
        assert!(violations
            .iter()
            .any(|v| matches!(v, Violation::DuplicateAlias { alias, .. } if alias == "sum")));
    }

    #[test]
    fn test_param_name_colliding_with_sibling_alias() {
        let cmd = CommandSpec::builder("scale")
            .param(ParamSpec::builder("factor").build().unwrap())
            .param(
                ParamSpec::builder("origin")
                    .alias("factor")
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();
        let contexts = vec![context("geom", vec![cmd])];
        let violations = verify_contexts(&contexts, 0);
        assert!(violations.iter().any(|v| matches!(
            v,
            Violation::ParamConflict { command, names }
                if command == "scale" && names == &["factor".to_string()]
        )));
    }

    #[test]
    fn test_duplicate_param_names() {
        let cmd = CommandSpec::builder("cp")
            .param(ParamSpec::builder("from").build().unwrap())
            .param(ParamSpec::builder("from").build().unwrap())
            .build()
            .unwrap();
        let contexts = vec![context("fs", vec![cmd])];
        let violations = verify_contexts(&contexts, 0);
        assert!(violations
            .iter()
            .any(|v| matches!(v, Violation::DuplicateParam { command, .. } if command == "cp")));
    }

    #[test]
    fn test_same_alias_on_two_params() {
        let cmd = CommandSpec::builder("cp")
            .param(ParamSpec::builder("from").alias("f").build().unwrap())
            .param(ParamSpec::builder("force").alias("f").build().unwrap())
            .build()
            .unwrap();
        let contexts = vec![context("fs", vec![cmd])];
        let violations = verify_contexts(&contexts, 0);
        assert!(violations.iter().any(|v| matches!(
            v,
            Violation::DuplicateParamAliases { command, aliases }
                if command == "cp" && aliases == &["f".to_string()]
        )));
    }

    #[test]
    fn test_trusted_contexts_skip_param_checks_but_not_names() {
        let trusted_cmd = CommandSpec::builder("help")
            .param(ParamSpec::builder("a").alias("x").build().unwrap())
            .param(ParamSpec::builder("b").alias("x").build().unwrap())
            .build()
            .unwrap();
        let user_cmd = command("help");
        let contexts = vec![
            context("builtin", vec![trusted_cmd]),
            context("user", vec![user_cmd]),
        ];
        let violations = verify_contexts(&contexts, 1);
        // The trusted context's param alias clash is ignored, but the name
        // clash with the user's `help` is still fatal.
        assert!(!violations
            .iter()
            .any(|v| matches!(v, Violation::DuplicateParamAliases { .. })));
        assert!(violations
            .iter()
            .any(|v| matches!(v, Violation::DuplicateCommand { name, .. } if name == "help")));
    }

    #[test]
    fn test_all_violations_collected_and_grouped() {
        let conflicted = CommandSpec::builder("scale")
            .param(ParamSpec::builder("factor").value(Scalar::F64).build().unwrap())
            .param(
                ParamSpec::builder("origin")
                    .alias("factor")
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();
        let contexts = vec![
            context("geom", vec![conflicted, command("sum")]),
            context("math", vec![command("sum")]),
            context("misc", vec![]),
        ];
        let violations = verify_contexts(&contexts, 0);
        let error = RegistryError::from_violations(violations).unwrap();

        let kinds: Vec<_> = error.violations().iter().map(Violation::kind).collect();
        assert!(kinds.contains(&"empty contexts"));
        assert!(kinds.contains(&"duplicate commands"));
        assert!(kinds.contains(&"param conflicts"));

        let rendered = error.to_string();
        assert!(rendered.starts_with("command registry validation failed:"));
        assert!(rendered.contains("duplicate commands:"));
        assert!(rendered.contains("sum (declared 2 times)"));
        assert!(rendered.contains("param conflicts:"));
    }
}
