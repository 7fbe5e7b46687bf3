//! Intermediate Representation (IR) module.
//!
//! This module defines the language-neutral data structures exchanged
//! between an introspector and an emitter: [`Symbol`] records grouped
//! into a [`Module`].

pub mod consistency;
pub mod module;
pub mod symbol;

#[cfg(test)]
mod proptest;

pub use consistency::{ConsistencyIssue, ConsistencyReport};
pub use module::{Module, Partition};
pub use symbol::{Symbol, SymbolKind};
