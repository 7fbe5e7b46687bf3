//! Symbol IR definitions.
//!
//! A [`Symbol`] is the leaf record of the IR: one introspected top-level
//! name together with its documentation and signature text.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};

/// Classification tag of a symbol.
///
/// The set is open: kinds the IR does not know yet are carried in
/// [`SymbolKind::Other`] and survive a round-trip unchanged. On the wire
/// the kind is a plain lowercase string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SymbolKind {
    /// A callable
    Function,

    /// A module-level value
    Variable,

    /// Any other kind reported by a producer (`"constant"`, `"class"`, ...)
    Other(String),
}

impl SymbolKind {
    /// Returns the wire representation of the kind.
    pub fn as_str(&self) -> &str {
        match self {
            SymbolKind::Function => "function",
            SymbolKind::Variable => "variable",
            SymbolKind::Other(kind) => kind,
        }
    }

    /// Check whether this is one of the kinds the IR partitions on.
    pub fn is_known(&self) -> bool {
        !matches!(self, SymbolKind::Other(_))
    }
}

impl From<String> for SymbolKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "function" => SymbolKind::Function,
            "variable" => SymbolKind::Variable,
            _ => SymbolKind::Other(kind),
        }
    }
}

impl From<&str> for SymbolKind {
    fn from(kind: &str) -> Self {
        SymbolKind::from(kind.to_string())
    }
}

impl From<SymbolKind> for String {
    fn from(kind: SymbolKind) -> Self {
        match kind {
            SymbolKind::Other(kind) => kind,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One introspected top-level name.
///
/// Fields are private so a symbol cannot change after construction; the
/// only way in is [`Symbol::new`] (or one of its shorthands), which
/// rejects an empty name. Deserialization goes through the same check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SymbolRecord")]
pub struct Symbol {
    name: String,

    #[serde(rename = "type")]
    kind: SymbolKind,

    doc: String,

    sig: String,
}

/// Wire shape of a symbol. Every key is required and must be a string.
#[derive(Deserialize)]
struct SymbolRecord {
    name: String,
    #[serde(rename = "type")]
    kind: SymbolKind,
    doc: String,
    sig: String,
}

impl TryFrom<SymbolRecord> for Symbol {
    type Error = IrError;

    fn try_from(record: SymbolRecord) -> Result<Self, Self::Error> {
        Symbol::new(record.name, record.kind, record.doc, record.sig)
    }
}

impl Symbol {
    /// Create a new symbol.
    ///
    /// `doc` and `sig` may be empty; `name` may not.
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<SymbolKind>,
        doc: impl Into<String>,
        sig: impl Into<String>,
    ) -> IrResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(IrError::EmptyName);
        }
        Ok(Self {
            name,
            kind: kind.into(),
            doc: doc.into(),
            sig: sig.into(),
        })
    }

    /// Create a function symbol.
    pub fn function(
        name: impl Into<String>,
        doc: impl Into<String>,
        sig: impl Into<String>,
    ) -> IrResult<Self> {
        Self::new(name, SymbolKind::Function, doc, sig)
    }

    /// Create a variable symbol.
    pub fn variable(
        name: impl Into<String>,
        doc: impl Into<String>,
        sig: impl Into<String>,
    ) -> IrResult<Self> {
        Self::new(name, SymbolKind::Variable, doc, sig)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &SymbolKind {
        &self.kind
    }

    pub fn doc(&self) -> &str {
        &self.doc
    }

    pub fn sig(&self) -> &str {
        &self.sig
    }

    /// Check if the symbol carries documentation.
    pub fn has_doc(&self) -> bool {
        !self.doc.is_empty()
    }

    /// Check if the symbol carries a signature or annotation.
    pub fn has_sig(&self) -> bool {
        !self.sig.is_empty()
    }
}
