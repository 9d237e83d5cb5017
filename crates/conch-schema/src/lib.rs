//! Command metadata model and registry validation for the conch shell.
//!
//! `conch-schema` holds the immutable descriptors a host declares before
//! its shell ever runs, and the registry-wide structural validator that
//! makes sure those declarations are internally consistent:
//!
//! - **Value kinds**: the closed primitive set ([`Scalar`]) and the
//!   declared-type entries built from it ([`ValueKind`], where arrays are
//!   legal only as a trailing entry)
//! - **Descriptors**: [`ParamSpec`], [`CommandSpec`] and [`ContextSpec`],
//!   each with a fluent builder that rejects declaration-local defects
//! - **Registry validation**: [`verify_contexts`] collects every
//!   cross-declaration violation (duplicate commands, alias clashes, param
//!   conflicts, empty contexts, ...) and [`RegistryError`] reports them all
//!   at once, grouped by kind
//!
//! # Example
//!
//! ```rust
//! use conch_schema::{CommandSpec, ContextSpec, ParamSpec, Scalar, ValueKind};
//!
//! let sum = CommandSpec::builder("sum")
//!     .alias("s")
//!     .describe("Adds the given integers")
//!     .param(
//!         ParamSpec::builder("values")
//!             .required()
//!             .alias("v")
//!             .value(ValueKind::Array(Scalar::I64))
//!             .describe("The integers to add")
//!             .build()?,
//!     )
//!     .build()?;
//!
//! let math = ContextSpec::builder("math").command(sum).build();
//! assert_eq!(math.commands()[0].name(), "sum");
//! # Ok::<(), conch_schema::DeclarationError>(())
//! ```
//!
//! Handlers are deliberately absent from this crate: a descriptor is pure
//! metadata, and the shell attaches behavior at registration time.

mod command;
mod context;
mod error;
mod param;
mod registry;
mod value;

pub use command::{CommandSpec, CommandSpecBuilder};
pub use context::{ContextSpec, ContextSpecBuilder};
pub use error::DeclarationError;
pub use param::{ParamSpec, ParamSpecBuilder};
pub use registry::{verify_contexts, RegistryError, Violation};
pub use value::{Scalar, ValueKind};
