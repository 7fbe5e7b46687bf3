//! # pygen-ir
//!
//! Intermediate representation for generating bindings, stubs and
//! documentation from the public surface of a scripting-language module.
//!
//! The IR sits between two collaborators: an introspector that walks a
//! source module and an emitter that renders output from it. It records
//! signatures only, never behavior.
//!
//! ## Quick Start
//!
//! ```rust
//! use pygen_ir::{codec, Module, Symbol};
//!
//! let mut module = Module::new("mathx");
//! module.add_function(Symbol::function("add", "Adds two numbers.", "(a: int, b: int) -> int")?);
//! module.add_variable(Symbol::variable("PI", "", "float")?);
//!
//! let json = codec::to_string(&module)?;
//! assert_eq!(codec::from_str(&json)?, module);
//! # Ok::<(), pygen_ir::IrError>(())
//! ```
//!
//! ## Exchange format
//!
//! | Record | Keys |
//! |--------|------|
//! | Module | `name`, `functions`, `variables` |
//! | Symbol | `name`, `type`, `doc`, `sig` |
//!
//! Every key is always present. Missing documentation or signature text is
//! an empty string.
//!
//! ## Modules
//!
//! - [`ir`] - `Symbol`, `Module` and the consistency check
//! - [`codec`] - JSON encoding and decoding
//! - [`signature`] - optional structured parsing of signature text
//! - [`pipeline`] - `Introspector` and `Emitter` interfaces
//! - [`emit`] - built-in stub and Markdown emitters
//! - [`error`] - error types

pub mod codec;
pub mod emit;
pub mod error;
pub mod ir;
pub mod pipeline;
pub mod signature;

pub use error::{IrError, IrResult, SignatureError};
pub use ir::{ConsistencyIssue, ConsistencyReport, Module, Partition, Symbol, SymbolKind};
pub use pipeline::{EmitConfig, EmittedFile, Emitter, IndentStyle, Introspector, LineEnding, SymbolEntry};
pub use signature::{Parameter, ParameterKind, Signature};
