//! Help rendering through embedded templates.

use conch_schema::CommandSpec;
use minijinja::{context, Environment};

use super::data;
use crate::registry::ContextsView;

fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("summary", include_str!("summary.txt"))?;
    env.add_template("detail", include_str!("detail.txt"))?;
    env.add_template("collapsed", include_str!("collapsed.txt"))?;
    Ok(env)
}

/// The `help` listing: every command's identity and description.
pub(crate) fn command_listing(view: &ContextsView<'_>) -> Result<String, minijinja::Error> {
    let commands: Vec<_> = view.commands().map(data::summarize).collect();
    let rendered = environment()?
        .get_template("summary")?
        .render(context! { commands })?;
    Ok(rendered.trim_end().to_string())
}

/// The `help <name>` view: one command's full descriptor.
pub(crate) fn command_detail(spec: &CommandSpec) -> Result<String, minijinja::Error> {
    let rendered = environment()?
        .get_template("detail")?
        .render(data::detail(spec))?;
    Ok(rendered.trim_end().to_string())
}

/// The `commands` listing: collapsed descriptors.
pub(crate) fn collapsed_listing<'a, I>(specs: I) -> Result<String, minijinja::Error>
where
    I: IntoIterator<Item = &'a CommandSpec>,
{
    let commands: Vec<_> = specs.into_iter().map(data::collapse).collect();
    let rendered = environment()?
        .get_template("collapsed")?
        .render(context! { commands })?;
    Ok(rendered.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use conch_schema::{ParamSpec, Scalar, ValueKind};

    fn sum_spec() -> CommandSpec {
        CommandSpec::builder("sum")
            .alias("s")
            .describe("Adds the given integers")
            .param(
                ParamSpec::builder("values")
                    .required()
                    .alias("v")
                    .value(Scalar::I64)
                    .value(ValueKind::Array(Scalar::I64))
                    .describe("The integers to add")
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_detail_rendering() {
        let rendered = command_detail(&sum_spec()).unwrap();
        assert_eq!(
            rendered,
            "Command: sum\n\
             Aliases: s\n\
             Adds the given integers\n\
             \n\
             Parameter: values\n\
             Aliases: v\n\
             Required: Yes\n\
             Values: i64 [i64]\n\
             Description: The integers to add"
        );
    }

    #[test]
    fn test_detail_omits_empty_sections() {
        let spec = CommandSpec::builder("ping").build().unwrap();
        assert_eq!(command_detail(&spec).unwrap(), "Command: ping");
    }

    #[test]
    fn test_collapsed_rendering() {
        let rendered = collapsed_listing([&sum_spec()]).unwrap();
        assert_eq!(
            rendered,
            "Command: sum\n\
             Aliases: s\n\
             Parameters: values*{v}(i64 [i64])"
        );
    }

    #[test]
    fn test_collapsed_uses_dashes_for_missing_parts() {
        let spec = CommandSpec::builder("ping").build().unwrap();
        let rendered = collapsed_listing([&spec]).unwrap();
        assert_eq!(rendered, "Command: ping\nAliases: -\nParameters: -");
    }
}
