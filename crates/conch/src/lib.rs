//! A library for building interactive, line-oriented command shells.
//!
//! A host declares commands and their parameter metadata through fluent
//! builders, attaches a handler to each, and hands everything to a
//! [`Shell`]. Construction validates the whole registry up front — names,
//! aliases, parameter declarations, handler shapes — and fails with one
//! error listing every violation. At runtime, each entered line is
//! tokenized, bound to named parameter buckets, validated, coerced into
//! strongly typed values, and dispatched to the matching handler; a bad
//! line prints its diagnosis and the loop keeps reading.
//!
//! # Line grammar
//!
//! ```text
//! <command-or-alias> [ <bare-value>... | (--<param> <value>... )... ]
//! ```
//!
//! - commands and parameters resolve case-insensitively by name or alias;
//! - `--` (configurable) marks a parameter; following tokens are its
//!   values until the next marker;
//! - quoted spans (`"x y"` or `'x y'`) form single tokens;
//! - bare values with no marker bind to the command's only parameter, or
//!   its only required parameter — mixing bare values with marked
//!   parameters is rejected;
//! - a parameter whose last declared type is an array collects all its
//!   trailing values into a typed array.
//!
//! # Example
//!
//! ```rust
//! use conch::{Context, Handler, Outcome, ScriptedConsole, Shell};
//! use conch_schema::{CommandSpec, ParamSpec, Scalar, ValueKind};
//!
//! let sum = CommandSpec::builder("sum")
//!     .alias("s")
//!     .describe("Adds the given integers")
//!     .param(
//!         ParamSpec::builder("values")
//!             .required()
//!             .alias("v")
//!             .value(ValueKind::Array(Scalar::I64))
//!             .build()?,
//!     )
//!     .build()?;
//!
//! let math = Context::builder("math")
//!     .command(
//!         sum,
//!         Handler::bound(|values| {
//!             let total: i64 = values.get_array("values").unwrap_or_default().iter().sum();
//!             Ok(Outcome::Text(total.to_string()))
//!         }),
//!     )
//!     .build();
//!
//! let console = ScriptedConsole::new(["sum --v 1 2 3", "exit"]);
//! let transcript = console.transcript();
//!
//! let mut shell = Shell::builder("calc").context(math).console(console).build()?;
//! shell.run()?;
//!
//! assert!(transcript.contents().contains("6"));
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! # Built-in commands
//!
//! Every shell carries `help`, `commands` (alias `cmds`), `clear` (alias
//! `clr`) and `exit` (alias `e`). They are ordinary registered commands;
//! hosts cannot redeclare their names or aliases.
//!
//! # Crates
//!
//! The engine is split the same way it is specified: `conch-lexer`
//! tokenizes, `conch-schema` holds descriptors and registry validation,
//! `conch-bind` binds and coerces, and this crate adds handlers, dispatch,
//! the built-ins, and the runtime loop. The commonly needed types from
//! the lower crates are re-exported here.

mod builtin;
mod context;
mod error;
mod handler;
mod help;
mod reader;
mod registry;
mod shell;

pub use builtin::builtin_spec;
pub use context::{Context, ContextBuilder};
pub use error::ShellError;
pub use handler::{Handler, HandlerResult, Outcome};
pub use reader::{Console, ScriptedConsole, TermConsole, Transcript};
pub use registry::ContextsView;
pub use shell::{
    CancelToken, Shell, ShellBuilder, ShellControl, ShellHandle, DEFAULT_COMMAND_MARKER,
    DEFAULT_PARAMS_MARKER,
};

pub use conch_bind::{
    bind, BindError, FromValue, Invocation, ParamValues, Value, ValueBucket,
};
pub use conch_lexer::tokenize;
pub use conch_schema::{
    CommandSpec, ContextSpec, DeclarationError, ParamSpec, RegistryError, Scalar, ValueKind,
    Violation,
};
