//! Collaborator interfaces around the IR.
//!
//! An [`Introspector`] reads a source module and produces a [`Module`]; an
//! [`Emitter`] turns a finished module into an output file. Both sides
//! only meet through the IR types.

use std::path::PathBuf;

use crate::error::IrResult;
use crate::ir::{Module, Partition, Symbol, SymbolKind};

/// One discovered top-level name, as reported by an introspector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    pub name: String,
    pub kind: SymbolKind,
    pub doc: String,
    pub sig: String,
}

impl SymbolEntry {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<SymbolKind>,
        doc: impl Into<String>,
        sig: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            doc: doc.into(),
            sig: sig.into(),
        }
    }

    /// Build the IR symbol for this entry.
    pub fn into_symbol(self) -> IrResult<Symbol> {
        Symbol::new(self.name, self.kind, self.doc, self.sig)
    }
}

/// Producer side of the pipeline.
///
/// Implementors only need [`Introspector::discover`]; the provided
/// [`Introspector::introspect`] turns the discovered entries into a
/// module, keeping discovery order within each partition.
pub trait Introspector {
    /// List the public top-level names of a source module in declaration order.
    fn discover(&self, module_name: &str) -> IrResult<Vec<SymbolEntry>>;

    /// Build the IR module for a source module.
    ///
    /// Fails on the first entry with an empty name. Entries whose kind is
    /// neither function nor variable have no partition yet and are skipped
    /// with a warning.
    fn introspect(&self, module_name: &str) -> IrResult<Module> {
        let mut module = Module::new(module_name);

        for entry in self.discover(module_name)? {
            let symbol = entry.into_symbol()?;
            let partition = match symbol.kind() {
                SymbolKind::Function => Partition::Functions,
                SymbolKind::Variable => Partition::Variables,
                SymbolKind::Other(kind) => {
                    tracing::warn!(
                        module = %module_name,
                        symbol = %symbol.name(),
                        kind = %kind,
                        "skipping symbol of unsupported kind"
                    );
                    continue;
                }
            };
            module.add(partition, symbol);
        }

        tracing::debug!(
            module = %module_name,
            functions = module.functions().len(),
            variables = module.variables().len(),
            "introspected module"
        );
        Ok(module)
    }
}

/// Consumer side of the pipeline.
///
/// Implement this trait to add a new output format. Emitters receive the
/// module by shared reference and must not depend on anything outside it.
pub trait Emitter: Send + Sync {
    /// Short lowercase identifier used to select the emitter (e.g. "stub").
    fn id(&self) -> &'static str;

    /// Human-readable name of the emitter.
    fn name(&self) -> &'static str;

    /// Extension of the produced file, without the dot.
    fn file_extension(&self) -> &'static str;

    /// Render a module.
    fn emit(&self, module: &Module, config: &EmitConfig) -> IrResult<EmittedFile>;
}

/// Options shared by all emitters.
#[derive(Debug, Clone)]
pub struct EmitConfig {
    /// Whether to render documentation strings
    pub include_docs: bool,

    /// Indentation style
    pub indent: IndentStyle,

    /// Line ending style
    pub line_ending: LineEnding,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            include_docs: true,
            indent: IndentStyle::default(),
            line_ending: LineEnding::default(),
        }
    }
}

impl EmitConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to render documentation strings.
    pub fn with_include_docs(mut self, include_docs: bool) -> Self {
        self.include_docs = include_docs;
        self
    }

    /// Set the indentation style.
    pub fn with_indent(mut self, indent: IndentStyle) -> Self {
        self.indent = indent;
        self
    }

    /// Set the line ending style.
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }
}

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndentStyle {
    /// 2 spaces
    Spaces2,

    /// 4 spaces
    #[default]
    Spaces4,

    /// Tabs
    Tabs,
}

impl IndentStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndentStyle::Spaces2 => "  ",
            IndentStyle::Spaces4 => "    ",
            IndentStyle::Tabs => "\t",
        }
    }

    /// Parse a configuration value (`spaces2`, `spaces4`, `tabs`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "spaces2" => Some(IndentStyle::Spaces2),
            "spaces4" => Some(IndentStyle::Spaces4),
            "tabs" => Some(IndentStyle::Tabs),
            _ => None,
        }
    }
}

/// Line ending style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// Unix-style line endings (LF)
    #[default]
    Lf,

    /// Windows-style line endings (CRLF)
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Output of an emitter run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedFile {
    /// Name of the rendered module
    pub module: String,

    /// Output path relative to the output directory
    pub path: PathBuf,

    /// Rendered content
    pub content: String,
}

impl EmittedFile {
    pub fn new(module: impl Into<String>, path: impl Into<PathBuf>, content: String) -> Self {
        Self {
            module: module.into(),
            path: path.into(),
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IrError;

    struct FixedIntrospector(Vec<SymbolEntry>);

    impl Introspector for FixedIntrospector {
        fn discover(&self, _module_name: &str) -> IrResult<Vec<SymbolEntry>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_introspect_routes_by_kind() {
        let introspector = FixedIntrospector(vec![
            SymbolEntry::new("PI", "variable", "", "float"),
            SymbolEntry::new("add", "function", "Adds.", "(a, b)"),
            SymbolEntry::new("E", "variable", "", "float"),
            SymbolEntry::new("sub", "function", "", "(a, b)"),
        ]);

        let module = introspector.introspect("mathx").unwrap();
        assert_eq!(module.name(), "mathx");

        let functions: Vec<_> = module.functions().iter().map(Symbol::name).collect();
        let variables: Vec<_> = module.variables().iter().map(Symbol::name).collect();
        assert_eq!(functions, vec!["add", "sub"]);
        assert_eq!(variables, vec!["PI", "E"]);
    }

    #[test]
    fn test_introspect_skips_other_kinds() {
        let introspector = FixedIntrospector(vec![
            SymbolEntry::new("Point", "class", "", ""),
            SymbolEntry::new("f", "function", "", "()"),
        ]);
        let module = introspector.introspect("geo").unwrap();
        assert_eq!(module.len(), 1);
    }

    #[test]
    fn test_introspect_rejects_empty_name() {
        let introspector = FixedIntrospector(vec![SymbolEntry::new("", "function", "", "()")]);
        let err = introspector.introspect("bad").unwrap_err();
        assert!(matches!(err, IrError::EmptyName));
    }

    #[test]
    fn test_emit_config_builder() {
        let config = EmitConfig::new()
            .with_include_docs(false)
            .with_indent(IndentStyle::Tabs)
            .with_line_ending(LineEnding::CrLf);
        assert!(!config.include_docs);
        assert_eq!(config.indent.as_str(), "\t");
        assert_eq!(config.line_ending.as_str(), "\r\n");
    }

    #[test]
    fn test_indent_from_name() {
        assert_eq!(IndentStyle::from_name("spaces2"), Some(IndentStyle::Spaces2));
        assert_eq!(IndentStyle::from_name("tabs"), Some(IndentStyle::Tabs));
        assert_eq!(IndentStyle::from_name("3"), None);
    }
}
