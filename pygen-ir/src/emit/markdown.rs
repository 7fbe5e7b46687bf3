//! Markdown reference emitter.

use crate::error::IrResult;
use crate::ir::{Module, Symbol};
use crate::pipeline::{EmitConfig, EmittedFile, Emitter};

use super::{join_lines, module_path, render_signature};

/// Renders a module as a Markdown reference page.
#[derive(Debug, Clone, Default)]
pub struct MarkdownEmitter;

impl MarkdownEmitter {
    pub fn new() -> Self {
        Self
    }

    fn function_lines(&self, symbol: &Symbol, config: &EmitConfig) -> Vec<String> {
        let mut lines = vec![
            format!("### `{}`", symbol.name()),
            String::new(),
            "```python".to_string(),
            format!("def {}{}", symbol.name(), render_signature(symbol)),
            "```".to_string(),
        ];
        if config.include_docs && symbol.has_doc() {
            lines.push(String::new());
            lines.extend(symbol.doc().lines().map(str::to_string));
        }
        lines
    }

    fn variable_row(&self, symbol: &Symbol, config: &EmitConfig) -> String {
        let ty = if symbol.has_sig() {
            format!("`{}`", escape_cell(symbol.sig()))
        } else {
            String::new()
        };
        if config.include_docs {
            format!(
                "| `{}` | {} | {} |",
                symbol.name(),
                ty,
                escape_cell(symbol.doc())
            )
        } else {
            format!("| `{}` | {} |", symbol.name(), ty)
        }
    }
}

/// Keeps a doc string inside one table cell.
fn escape_cell(text: &str) -> String {
    text.trim()
        .replace('|', "\\|")
        .lines()
        .collect::<Vec<_>>()
        .join("<br>")
}

impl Emitter for MarkdownEmitter {
    fn id(&self) -> &'static str {
        "markdown"
    }

    fn name(&self) -> &'static str {
        "Markdown Reference Emitter"
    }

    fn file_extension(&self) -> &'static str {
        "md"
    }

    fn emit(&self, module: &Module, config: &EmitConfig) -> IrResult<EmittedFile> {
        tracing::debug!(module = %module.name(), emitter = self.id(), "emitting");

        let mut lines = vec![format!("# `{}`", module.name())];

        if module.is_empty() {
            lines.push(String::new());
            lines.push("This module has no public symbols.".to_string());
        }

        if !module.functions().is_empty() {
            lines.push(String::new());
            lines.push("## Functions".to_string());
            for function in module.functions() {
                lines.push(String::new());
                lines.extend(self.function_lines(function, config));
            }
        }

        if !module.variables().is_empty() {
            lines.push(String::new());
            lines.push("## Variables".to_string());
            lines.push(String::new());
            if config.include_docs {
                lines.push("| Name | Type | Description |".to_string());
                lines.push("| --- | --- | --- |".to_string());
            } else {
                lines.push("| Name | Type |".to_string());
                lines.push("| --- | --- |".to_string());
            }
            for variable in module.variables() {
                lines.push(self.variable_row(variable, config));
            }
        }

        let path = module_path(self, module, false)?;
        let content = join_lines(&lines, config.line_ending.as_str());
        Ok(EmittedFile::new(module.name(), path, content))
    }
}
