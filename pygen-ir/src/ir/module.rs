//! Module IR definitions.
//!
//! A [`Module`] is the root of the IR: the public surface of one source
//! module, split into a function partition and a variable partition.

use serde::{Deserialize, Serialize};

use super::consistency::ConsistencyReport;
use super::symbol::Symbol;

/// Which sequence of a module a symbol lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Partition {
    Functions,
    Variables,
}

impl Partition {
    /// Returns the exchange key of the partition.
    pub fn as_str(&self) -> &'static str {
        match self {
            Partition::Functions => "functions",
            Partition::Variables => "variables",
        }
    }
}

/// The extracted public surface of one source module.
///
/// Both partitions keep insertion order. The module performs no
/// reordering, filtering or deduplication; [`Module::check_consistency`]
/// reports producer-contract violations without acting on them.
///
/// Appending takes `&mut self`, so a module has a single writer while it
/// is being built and is read-only once it is shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// Fully-qualified dotted module name
    name: String,

    /// Function symbols in discovery order
    functions: Vec<Symbol>,

    /// Variable symbols in discovery order
    variables: Vec<Symbol>,
}

impl Module {
    /// Create an empty module with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            functions: Vec::new(),
            variables: Vec::new(),
        }
    }

    /// Append a symbol to the function partition.
    pub fn add_function(&mut self, symbol: Symbol) {
        tracing::trace!(module = %self.name, symbol = %symbol.name(), "add function");
        self.functions.push(symbol);
    }

    /// Append a symbol to the variable partition.
    pub fn add_variable(&mut self, symbol: Symbol) {
        tracing::trace!(module = %self.name, symbol = %symbol.name(), "add variable");
        self.variables.push(symbol);
    }

    /// Append a symbol to the given partition.
    pub fn add(&mut self, partition: Partition, symbol: Symbol) {
        match partition {
            Partition::Functions => self.add_function(symbol),
            Partition::Variables => self.add_variable(symbol),
        }
    }

    /// Builder-style variant of [`Module::add_function`].
    pub fn with_function(mut self, symbol: Symbol) -> Self {
        self.add_function(symbol);
        self
    }

    /// Builder-style variant of [`Module::add_variable`].
    pub fn with_variable(mut self, symbol: Symbol) -> Self {
        self.add_variable(symbol);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn functions(&self) -> &[Symbol] {
        &self.functions
    }

    pub fn variables(&self) -> &[Symbol] {
        &self.variables
    }

    /// Returns the symbols of one partition.
    pub fn partition(&self, partition: Partition) -> &[Symbol] {
        match partition {
            Partition::Functions => &self.functions,
            Partition::Variables => &self.variables,
        }
    }

    /// Iterate over all symbols, functions first, each tagged with its partition.
    pub fn symbols(&self) -> impl Iterator<Item = (Partition, &Symbol)> {
        self.functions
            .iter()
            .map(|s| (Partition::Functions, s))
            .chain(self.variables.iter().map(|s| (Partition::Variables, s)))
    }

    /// Total number of symbols across both partitions.
    pub fn len(&self) -> usize {
        self.functions.len() + self.variables.len()
    }

    /// Check if the module has no symbols at all.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.variables.is_empty()
    }

    /// Report duplicate names, names present in both partitions and kind
    /// tags that disagree with their partition.
    pub fn check_consistency(&self) -> ConsistencyReport {
        ConsistencyReport::for_module(self)
    }
}
