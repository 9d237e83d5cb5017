//! The built-in command context.
//!
//! Every shell gets these four commands, prepended ahead of the host's
//! contexts: `help` and `commands` for discovery, `clear` and `exit` for
//! shell control. They are ordinary registered commands once the engine
//! exists — only their handler shapes are special, and those shapes are
//! constructible nowhere else.

use conch_bind::ParamValues;
use conch_schema::{CommandSpec, ContextSpec, ParamSpec, Scalar};

use crate::context::Context;
use crate::handler::{BuiltinControl, BuiltinIntrospect, Handler, HandlerResult, Outcome};
use crate::help;
use crate::registry::ContextsView;
use crate::shell::ShellControl;

pub(crate) const BUILTIN_CONTEXT: &str = "builtin";

pub(crate) fn builtin_context() -> Context {
    Context::builder(BUILTIN_CONTEXT)
        .command(
            help_spec(),
            Handler::Introspect(BuiltinIntrospect(help)),
        )
        .command(
            commands_spec(),
            Handler::Introspect(BuiltinIntrospect(commands)),
        )
        .command(clear_spec(), Handler::Control(BuiltinControl(clear)))
        .command(exit_spec(), Handler::Control(BuiltinControl(exit)))
        .build()
}

/// The built-in descriptors without handlers, for hosts that want to show
/// or document them.
pub fn builtin_spec() -> ContextSpec {
    builtin_context().spec()
}

fn command_param() -> ParamSpec {
    ParamSpec::builder("command")
        .alias("cmd")
        .alias("c")
        .value(Scalar::Str)
        .describe("Any command's name")
        .build()
        .expect("built-in param declarations are valid")
}

fn help_spec() -> CommandSpec {
    CommandSpec::builder("help")
        .describe("Used to see all the available commands")
        .describe("You can also use 'help <command name>' to see any command's details")
        .param(command_param())
        .build()
        .expect("built-in command declarations are valid")
}

fn commands_spec() -> CommandSpec {
    CommandSpec::builder("commands")
        .alias("cmds")
        .describe("Used to see short commands description")
        .describe("You can also use 'commands <command name>' to see the exact command's details")
        .param(command_param())
        .build()
        .expect("built-in command declarations are valid")
}

fn clear_spec() -> CommandSpec {
    CommandSpec::builder("clear")
        .alias("clr")
        .describe("Used to clear all current output")
        .build()
        .expect("built-in command declarations are valid")
}

fn exit_spec() -> CommandSpec {
    CommandSpec::builder("exit")
        .alias("e")
        .describe("Used to exit from current shell")
        .build()
        .expect("built-in command declarations are valid")
}

fn help(view: &ContextsView<'_>, values: &ParamValues) -> HandlerResult {
    match values.get::<String>("c", 0) {
        Some(name) => match view.find(&name) {
            Some(spec) => Ok(Outcome::Text(help::command_detail(spec)?)),
            None => Ok(Outcome::Text(format!("Unknown command: {name}"))),
        },
        None => Ok(Outcome::Text(help::command_listing(view)?)),
    }
}

fn commands(view: &ContextsView<'_>, values: &ParamValues) -> HandlerResult {
    match values.get::<String>("c", 0) {
        Some(name) => match view.find(&name) {
            Some(spec) => Ok(Outcome::Text(help::collapsed_listing([spec])?)),
            None => Ok(Outcome::Text(format!("Unknown command: {name}"))),
        },
        None => Ok(Outcome::Text(help::collapsed_listing(view.commands())?)),
    }
}

fn clear(control: &mut ShellControl<'_>) -> HandlerResult {
    control.clear()?;
    Ok(Outcome::Silent)
}

fn exit(control: &mut ShellControl<'_>) -> HandlerResult {
    control.exit();
    Ok(Outcome::Silent)
}
