//! Command contexts: descriptors paired with their handlers.

use conch_schema::{CommandSpec, ContextSpec};

use crate::handler::Handler;

/// One registered command: its descriptor plus the handler dispatched to.
#[derive(Debug)]
pub(crate) struct Command {
    pub(crate) spec: CommandSpec,
    pub(crate) handler: Handler,
}

/// A source of related commands, registered on the shell builder.
///
/// A context pairs each [`CommandSpec`] with a [`Handler`]. It carries no
/// other state — handlers are plain closures, and everything a handler
/// may need beyond its bound values (the context list for `help`, the
/// shell handle for `exit`) is passed in explicitly at dispatch time.
///
/// # Example
///
/// ```rust
/// use conch::{CommandSpec, Context, Handler, Outcome};
///
/// let ping = CommandSpec::builder("ping").build()?;
/// let context = Context::builder("net")
///     .command(ping, Handler::nullary(|| Ok(Outcome::Text("pong".into()))))
///     .build();
/// assert_eq!(context.spec().name(), "net");
/// # Ok::<(), conch::DeclarationError>(())
/// ```
#[derive(Debug)]
pub struct Context {
    name: String,
    commands: Vec<Command>,
}

impl Context {
    /// Starts building a context with the given name.
    pub fn builder(name: impl Into<String>) -> ContextBuilder {
        ContextBuilder {
            name: name.into(),
            commands: Vec::new(),
        }
    }

    /// The context name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The metadata view of this context, as the registry validates it.
    pub fn spec(&self) -> ContextSpec {
        let mut builder = ContextSpec::builder(self.name.clone());
        for command in &self.commands {
            builder = builder.command(command.spec.clone());
        }
        builder.build()
    }

    pub(crate) fn commands(&self) -> &[Command] {
        &self.commands
    }
}

/// Builder for [`Context`]. Created by [`Context::builder`].
pub struct ContextBuilder {
    name: String,
    commands: Vec<Command>,
}

impl ContextBuilder {
    /// Registers one command: its descriptor and the handler to invoke.
    ///
    /// Whether the handler's shape matches the descriptor (parameters
    /// declared ⇒ a bound handler, none declared ⇒ a nullary one) is
    /// checked with everything else when the shell is built.
    pub fn command(mut self, spec: CommandSpec, handler: Handler) -> Self {
        self.commands.push(Command { spec, handler });
        self
    }

    /// Produces the [`Context`].
    pub fn build(self) -> Context {
        Context {
            name: self.name,
            commands: self.commands,
        }
    }
}
