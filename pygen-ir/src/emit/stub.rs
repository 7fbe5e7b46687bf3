//! Type stub emitter.

use crate::error::IrResult;
use crate::ir::{Module, Symbol};
use crate::pipeline::{EmitConfig, EmittedFile, Emitter};

use super::{join_lines, module_path, render_signature};

/// Renders a module as a `.pyi` type stub.
///
/// Functions become `def` declarations with an ellipsis body, variables
/// become annotated names. A variable without an annotation is typed
/// `Any`, which pulls in the `typing` import.
#[derive(Debug, Clone, Default)]
pub struct StubEmitter;

impl StubEmitter {
    pub fn new() -> Self {
        Self
    }

    fn function_lines(&self, symbol: &Symbol, config: &EmitConfig) -> Vec<String> {
        let head = format!("def {}{}:", symbol.name(), render_signature(symbol));
        if !(config.include_docs && symbol.has_doc()) {
            return vec![format!("{} ...", head)];
        }

        let indent = config.indent.as_str();
        let doc = escape_docstring(symbol.doc());
        let mut lines = vec![head];
        let mut doc_lines = doc.lines();
        let first = doc_lines.next().unwrap_or_default();
        let rest: Vec<&str> = doc_lines.collect();

        if rest.is_empty() {
            lines.push(format!("{}\"\"\"{}\"\"\"", indent, first));
        } else {
            lines.push(format!("{}\"\"\"{}", indent, first));
            for line in rest {
                if line.is_empty() {
                    lines.push(String::new());
                } else {
                    lines.push(format!("{}{}", indent, line));
                }
            }
            lines.push(format!("{}\"\"\"", indent));
        }
        lines.push(format!("{}...", indent));
        lines
    }

    fn variable_lines(&self, symbol: &Symbol, config: &EmitConfig) -> Vec<String> {
        let mut lines = Vec::new();
        if config.include_docs && symbol.has_doc() {
            for line in symbol.doc().lines() {
                if line.is_empty() {
                    lines.push("#".to_string());
                } else {
                    lines.push(format!("# {}", line));
                }
            }
        }
        let annotation = if symbol.has_sig() { symbol.sig() } else { "Any" };
        lines.push(format!("{}: {}", symbol.name(), annotation));
        lines
    }
}

/// Escapes text for the body of a `"""` literal.
///
/// Backslashes are doubled. Quotes are escaped when they form a run of three
/// or more, or when they end the text and would merge with the closing
/// delimiter.
fn escape_docstring(doc: &str) -> String {
    let mut out = String::with_capacity(doc.len());
    let mut chars = doc.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => {
                let mut run = 1;
                while chars.next_if_eq(&'"').is_some() {
                    run += 1;
                }
                let quote = if run >= 3 || chars.peek().is_none() {
                    "\\\""
                } else {
                    "\""
                };
                out.push_str(&quote.repeat(run));
            }
            _ => out.push(c),
        }
    }
    out
}

impl Emitter for StubEmitter {
    fn id(&self) -> &'static str {
        "stub"
    }

    fn name(&self) -> &'static str {
        "Type Stub Emitter"
    }

    fn file_extension(&self) -> &'static str {
        "pyi"
    }

    fn emit(&self, module: &Module, config: &EmitConfig) -> IrResult<EmittedFile> {
        tracing::debug!(module = %module.name(), emitter = self.id(), "emitting");

        let mut lines = vec![
            format!("# Type stubs for module `{}`.", module.name()),
            "# Generated by pygen. Do not edit.".to_string(),
        ];

        if module.variables().iter().any(|v| !v.has_sig()) {
            lines.push(String::new());
            lines.push("from typing import Any".to_string());
        }

        for function in module.functions() {
            lines.push(String::new());
            lines.extend(self.function_lines(function, config));
        }

        if !module.variables().is_empty() {
            lines.push(String::new());
            for variable in module.variables() {
                lines.extend(self.variable_lines(variable, config));
            }
        }

        let path = module_path(self, module, true)?;
        let content = join_lines(&lines, config.line_ending.as_str());
        Ok(EmittedFile::new(module.name(), path, content))
    }
}
