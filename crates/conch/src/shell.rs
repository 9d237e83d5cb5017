//! The shell: construction, runtime loop, and cancellation.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use conch_bind::bind;
use conch_lexer::tokenize;

use crate::builtin::builtin_context;
use crate::context::Context;
use crate::error::{domain_message, ShellError};
use crate::handler::{BuiltinControl, BuiltinIntrospect, Handler, Outcome};
use crate::reader::{Console, TermConsole};
use crate::registry::Registry;

/// Default prompt suffix after the shell name.
pub const DEFAULT_COMMAND_MARKER: &str = ">";
/// Default parameter marker prefix.
pub const DEFAULT_PARAMS_MARKER: &str = "--";

/// Cooperative cancellation flag, cloneable across threads.
///
/// The flag is observed once per loop iteration, never preemptively — a
/// running invocation always finishes before the shell stops.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// A fresh, uncancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns true once cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// An interactive, line-oriented command shell.
///
/// Built through [`Shell::builder`], which validates the whole registry
/// before a shell exists. Each loop iteration reads one line, runs the
/// tokenize → bind → validate → coerce → dispatch pipeline, prints the
/// outcome or the error, and checks the cancellation flag; a bad line
/// never terminates the shell.
///
/// # Example
///
/// ```rust,no_run
/// use conch::{Context, Handler, Outcome, Shell};
/// use conch_schema::{CommandSpec, ParamSpec, Scalar, ValueKind};
///
/// let sum = CommandSpec::builder("sum")
///     .param(
///         ParamSpec::builder("values")
///             .required()
///             .value(ValueKind::Array(Scalar::I64))
///             .build()?,
///     )
///     .build()?;
///
/// let math = Context::builder("math").command(
///     sum,
///     Handler::bound(|values| {
///         let total: i64 = values.get_array("values").unwrap_or_default().iter().sum();
///         Ok(Outcome::Text(total.to_string()))
///     }),
/// );
///
/// Shell::builder("calc").context(math.build()).build()?.run()?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct Shell {
    name: String,
    command_marker: String,
    params_marker: String,
    registry: Registry,
    console: Box<dyn Console>,
    cancel: CancelToken,
}

impl Shell {
    /// Starts building a shell with the given name.
    pub fn builder(name: impl Into<String>) -> ShellBuilder {
        ShellBuilder {
            name: name.into(),
            command_marker: DEFAULT_COMMAND_MARKER.to_string(),
            params_marker: DEFAULT_PARAMS_MARKER.to_string(),
            contexts: Vec::new(),
            console: None,
        }
    }

    /// The shell's name, shown in the prompt and the banner.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// A cancellation token for this shell; cancelling it ends the loop
    /// after the current line finishes.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Runs the shell on the calling thread until `exit`, cancellation,
    /// or end of input.
    ///
    /// # Errors
    ///
    /// Only console failures escape; every pipeline or handler failure is
    /// printed and the loop continues.
    pub fn run(&mut self) -> Result<(), ShellError> {
        self.clear()?;
        let prompt = format!("{}{} ", self.name, self.command_marker);
        loop {
            let Some(line) = self.read_nonempty(&prompt)? else {
                break;
            };
            self.handle_line(&line)?;
            if self.cancel.is_cancelled() {
                break;
            }
        }
        Ok(())
    }

    /// Runs the shell on a background thread, returning a handle that can
    /// cancel it and reclaim it.
    pub fn spawn(mut self) -> ShellHandle {
        let token = self.cancel.clone();
        let thread = thread::spawn(move || {
            let result = self.run();
            (self, result)
        });
        ShellHandle { token, thread }
    }

    /// Clears the visible transcript and reprints the version banner.
    pub fn clear(&mut self) -> Result<(), ShellError> {
        self.console.clear()?;
        self.console.print(&banner(&self.name))?;
        Ok(())
    }

    /// Re-prompts until a non-empty line arrives; `None` on end of input.
    fn read_nonempty(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        loop {
            match self.console.read_line(prompt)? {
                None => return Ok(None),
                Some(line) if line.trim().is_empty() => continue,
                Some(line) => return Ok(Some(line)),
            }
        }
    }

    /// Runs one line through the pipeline and prints its outcome; this is
    /// the per-line error boundary.
    fn handle_line(&mut self, line: &str) -> Result<(), ShellError> {
        match self.execute(line) {
            Ok(Outcome::Text(text)) => self.console.print(&format!("{text}\n"))?,
            Ok(Outcome::Silent) => {}
            Err(err) => self.console.print(&format!("{}\n", domain_message(&err)))?,
        }
        Ok(())
    }

    /// Tokenize → resolve → bind → dispatch for one line.
    fn execute(&mut self, line: &str) -> Result<Outcome, anyhow::Error> {
        let mut tokens = tokenize(line);
        let Some(name) = tokens.next() else {
            return Ok(Outcome::Silent);
        };

        let command = self
            .registry
            .find(name)
            .ok_or_else(|| ShellError::CommandNotFound(name.to_string()))?;

        // Binding always runs, so stray tokens after a parameterless
        // command are rejected like any other arity violation. The
        // invocation lives exactly as long as this call.
        let invocation = bind(&command.spec, tokens, &self.params_marker)?;

        match &command.handler {
            Handler::Nullary(handler) => handler(),
            Handler::Bound(handler) => handler(invocation.values()),
            Handler::Introspect(BuiltinIntrospect(handler)) => {
                handler(&self.registry.view(), invocation.values())
            }
            Handler::Control(BuiltinControl(handler)) => {
                let mut control = ShellControl {
                    name: &self.name,
                    cancel: &self.cancel,
                    console: self.console.as_mut(),
                };
                handler(&mut control)
            }
        }
    }
}

/// Handle to a shell running on a background thread.
pub struct ShellHandle {
    token: CancelToken,
    thread: JoinHandle<(Shell, Result<(), ShellError>)>,
}

impl ShellHandle {
    /// Requests cancellation; the loop ends after the current line.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// A clone of the running shell's cancellation token.
    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Waits for the loop to finish and reclaims the shell.
    pub fn join(self) -> Result<Shell, ShellError> {
        let (shell, result) = self.thread.join().map_err(|_| {
            ShellError::Io(io::Error::new(io::ErrorKind::Other, "shell thread panicked"))
        })?;
        result.map(|()| shell)
    }
}

/// Explicit shell access for the control built-ins (`clear`, `exit`).
/// Constructed per dispatch; handlers cannot hold on to it.
pub struct ShellControl<'a> {
    pub(crate) name: &'a str,
    pub(crate) cancel: &'a CancelToken,
    pub(crate) console: &'a mut dyn Console,
}

impl ShellControl<'_> {
    /// The owning shell's name.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Clears the transcript and reprints the version banner.
    pub fn clear(&mut self) -> io::Result<()> {
        self.console.clear()?;
        self.console.print(&banner(self.name))
    }

    /// Requests cooperative cancellation of the owning shell.
    pub fn exit(&self) {
        self.cancel.cancel();
    }
}

fn banner(name: &str) -> String {
    format!(
        "{name} v{}\nUse 'help <command name>' to see the available commands.\n",
        env!("CARGO_PKG_VERSION")
    )
}

/// Builder for [`Shell`]. Created by [`Shell::builder`].
///
/// `build` prepends the built-in context, validates the whole registry,
/// and fails with a [`RegistryError`](conch_schema::RegistryError)
/// enumerating every violation if anything is inconsistent.
pub struct ShellBuilder {
    name: String,
    command_marker: String,
    params_marker: String,
    contexts: Vec<Context>,
    console: Option<Box<dyn Console>>,
}

impl ShellBuilder {
    /// Registers one command context.
    pub fn context(mut self, context: Context) -> Self {
        self.contexts.push(context);
        self
    }

    /// Sets the prompt suffix (default `>`).
    pub fn command_marker(mut self, marker: impl Into<String>) -> Self {
        self.command_marker = marker.into();
        self
    }

    /// Sets the parameter marker prefix (default `--`).
    pub fn params_marker(mut self, marker: impl Into<String>) -> Self {
        self.params_marker = marker.into();
        self
    }

    /// Replaces the interactive console with a custom adapter.
    pub fn console(mut self, console: impl Console + 'static) -> Self {
        self.console = Some(Box::new(console));
        self
    }

    /// Validates the registry and produces the shell.
    ///
    /// # Errors
    ///
    /// [`ShellError::Registry`] carrying every structural violation found.
    pub fn build(self) -> Result<Shell, ShellError> {
        let mut contexts = vec![builtin_context()];
        contexts.extend(self.contexts);
        let registry = Registry::build(contexts, 1)?;

        Ok(Shell {
            name: self.name,
            command_marker: self.command_marker,
            params_marker: self.params_marker,
            registry,
            console: self
                .console
                .unwrap_or_else(|| Box::new(TermConsole::stdout())),
            cancel: CancelToken::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_token_is_shared() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn test_banner_names_the_shell() {
        let text = banner("calc");
        assert!(text.starts_with("calc v"));
        assert!(text.contains("help <command name>"));
    }
}
