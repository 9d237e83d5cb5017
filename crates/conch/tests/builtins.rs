//! Behavior of the built-in commands through a scripted session.

use conch::{Context, Handler, Outcome, ScriptedConsole, Shell};
use conch_schema::{CommandSpec, ParamSpec, Scalar, ValueKind};

fn shell_lines(lines: &[&str]) -> String {
    let sum = CommandSpec::builder("sum")
        .alias("s")
        .describe("Adds the given integers")
        .param(
            ParamSpec::builder("values")
                .required()
                .alias("v")
                .value(ValueKind::Array(Scalar::I64))
                .describe("The integers to add")
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    let math = Context::builder("math")
        .command(
            sum,
            Handler::bound(|values| {
                let total: i64 = values
                    .get_array::<i64>("values")
                    .unwrap_or_default()
                    .iter()
                    .sum();
                Ok(Outcome::Text(total.to_string()))
            }),
        )
        .build();

    let console = ScriptedConsole::new(lines.iter().copied());
    let transcript = console.transcript();
    let mut shell = Shell::builder("calc")
        .context(math)
        .console(console)
        .build()
        .unwrap();
    shell.run().unwrap();
    transcript.contents()
}

#[test]
fn test_help_lists_builtins_and_user_commands() {
    let transcript = shell_lines(&["help"]);
    for name in ["help", "commands", "clear", "exit", "sum"] {
        assert!(
            transcript.contains(&format!("Command: {name}")),
            "help output missing {name}: {transcript}"
        );
    }
    assert!(transcript.contains("Adds the given integers"));
}

#[test]
fn test_help_for_one_command_shows_params() {
    let transcript = shell_lines(&["help --c sum"]);
    assert!(transcript.contains("Command: sum"));
    assert!(transcript.contains("Aliases: s"));
    assert!(transcript.contains("Parameter: values"));
    assert!(transcript.contains("Required: Yes"));
    assert!(transcript.contains("Values: [i64]"));
    assert!(transcript.contains("Description: The integers to add"));
}

#[test]
fn test_help_accepts_the_shorthand_default_bucket() {
    // `help sum` retargets the bare token to help's only parameter.
    let transcript = shell_lines(&["help sum"]);
    assert!(transcript.contains("Parameter: values"));
}

#[test]
fn test_help_for_unknown_command() {
    let transcript = shell_lines(&["help --c frob"]);
    assert!(transcript.contains("Unknown command: frob"));
}

#[test]
fn test_commands_lists_collapsed_signatures() {
    let transcript = shell_lines(&["commands"]);
    assert!(transcript.contains("Parameters: values*{v}([i64])"));
    assert!(transcript.contains("Command: clear"));
    assert!(transcript.contains("Aliases: clr"));
}

#[test]
fn test_commands_alias_and_filter() {
    let transcript = shell_lines(&["cmds sum"]);
    assert!(transcript.contains("Command: sum"));
    assert!(!transcript.contains("Command: clear"));
}

#[test]
fn test_clear_wipes_transcript_and_reprints_banner() {
    let transcript = shell_lines(&["sum --v 2 3", "clear"]);
    assert!(!transcript.contains("5"), "old output survived: {transcript}");
    assert!(transcript.contains("calc v"));
    assert!(transcript.contains("Use 'help <command name>'"));
}

#[test]
fn test_clear_alias() {
    let transcript = shell_lines(&["sum --v 2 3", "clr"]);
    assert!(!transcript.contains("5"));
}

#[test]
fn test_exit_alias_ends_the_loop() {
    let transcript = shell_lines(&["e", "sum --v 4 4"]);
    assert!(!transcript.contains("8"));
}
