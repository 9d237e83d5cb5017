//! Help data extraction from command descriptors.

use conch_schema::{CommandSpec, ParamSpec};
use serde::Serialize;

/// One command in the `help` listing: identity and description only.
#[derive(Serialize)]
pub(crate) struct CommandSummary {
    pub name: String,
    pub aliases: Vec<String>,
    pub description: Vec<String>,
}

/// One command in the `commands` listing: identity plus a collapsed
/// signature per parameter.
#[derive(Serialize)]
pub(crate) struct CommandCollapsed {
    pub name: String,
    pub aliases: Vec<String>,
    pub params: Vec<String>,
}

/// The full descriptor of one command, as shown by `help <name>`.
#[derive(Serialize)]
pub(crate) struct CommandDetail {
    pub name: String,
    pub aliases: Vec<String>,
    pub description: Vec<String>,
    pub params: Vec<ParamDetail>,
}

#[derive(Serialize)]
pub(crate) struct ParamDetail {
    pub name: String,
    pub aliases: Vec<String>,
    pub required: bool,
    pub kinds: Vec<String>,
    pub description: Vec<String>,
}

pub(crate) fn summarize(spec: &CommandSpec) -> CommandSummary {
    CommandSummary {
        name: spec.name().to_string(),
        aliases: spec.aliases().to_vec(),
        description: spec.description().to_vec(),
    }
}

pub(crate) fn collapse(spec: &CommandSpec) -> CommandCollapsed {
    CommandCollapsed {
        name: spec.name().to_string(),
        aliases: spec.aliases().to_vec(),
        params: spec.params().iter().map(signature).collect(),
    }
}

pub(crate) fn detail(spec: &CommandSpec) -> CommandDetail {
    CommandDetail {
        name: spec.name().to_string(),
        aliases: spec.aliases().to_vec(),
        description: spec.description().to_vec(),
        params: spec
            .params()
            .iter()
            .map(|p| ParamDetail {
                name: p.name().to_string(),
                aliases: p.aliases().to_vec(),
                required: p.required(),
                kinds: p.kinds().iter().map(|k| k.to_string()).collect(),
                description: p.description().to_vec(),
            })
            .collect(),
    }
}

/// Collapsed one-token signature: `name`, `*` when required, `{aliases}`,
/// `(types)` — e.g. `values*{v}(i64 [i64])`.
fn signature(param: &ParamSpec) -> String {
    let mut out = param.name().to_string();
    if param.required() {
        out.push('*');
    }
    if !param.aliases().is_empty() {
        out.push('{');
        out.push_str(&param.aliases().join(" "));
        out.push('}');
    }
    if !param.kinds().is_empty() {
        out.push('(');
        let kinds: Vec<String> = param.kinds().iter().map(|k| k.to_string()).collect();
        out.push_str(&kinds.join(" "));
        out.push(')');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use conch_schema::{Scalar, ValueKind};

    #[test]
    fn test_collapsed_signature() {
        let param = ParamSpec::builder("values")
            .required()
            .alias("v")
            .value(Scalar::I64)
            .value(ValueKind::Array(Scalar::I64))
            .build()
            .unwrap();
        assert_eq!(signature(&param), "values*{v}(i64 [i64])");
    }

    #[test]
    fn test_bare_signature() {
        let param = ParamSpec::builder("flag").build().unwrap();
        assert_eq!(signature(&param), "flag");
    }
}
