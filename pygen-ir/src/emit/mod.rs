//! Built-in emitters.
//!
//! - [`StubEmitter`] renders a type stub (`.pyi`) for the source module.
//! - [`MarkdownEmitter`] renders reference documentation.
//!
//! Use [`emitter_for`] to select one by id.

mod markdown;
mod stub;

pub use markdown::MarkdownEmitter;
pub use stub::StubEmitter;

use std::path::PathBuf;

use crate::error::{IrError, IrResult};
use crate::ir::{Module, Symbol};
use crate::pipeline::Emitter;
use crate::signature::Signature;

/// Ids of the built-in emitters.
pub const EMITTER_IDS: &[&str] = &["stub", "markdown"];

/// Look up a built-in emitter by id.
pub fn emitter_for(id: &str) -> Option<Box<dyn Emitter>> {
    match id {
        "stub" => Some(Box::new(StubEmitter::new())),
        "markdown" | "md" => Some(Box::new(MarkdownEmitter::new())),
        _ => None,
    }
}

/// Parameter list and return annotation of a function, ready to follow its name.
///
/// Parsed signatures are re-rendered in canonical form. Text that does not
/// parse is passed through unchanged.
pub(crate) fn render_signature(symbol: &Symbol) -> String {
    if !symbol.has_sig() {
        return "(*args, **kwargs)".to_string();
    }
    match Signature::parse(symbol.sig()) {
        Ok(sig) => sig.to_string(),
        Err(e) => {
            tracing::warn!(
                symbol = %symbol.name(),
                sig = %symbol.sig(),
                error = %e,
                "passing unparsable signature through verbatim"
            );
            symbol.sig().to_string()
        }
    }
}

/// Relative output path for a module.
///
/// With `nested`, each dotted segment but the last becomes a directory
/// (`pkg.sub` gives `pkg/sub.<ext>`); otherwise the dotted name is kept as
/// the file stem. The name must be a dotted identifier path: no separators,
/// no drive prefixes and no empty segments, so the result never leaves the
/// directory it is joined onto.
pub(crate) fn module_path(
    emitter: &dyn Emitter,
    module: &Module,
    nested: bool,
) -> IrResult<PathBuf> {
    let name = module.name();
    if let Some(reason) = unsafe_name_reason(name) {
        return Err(IrError::emit(
            emitter.id(),
            format!("cannot derive an output path from module name '{}': {}", name, reason),
        ));
    }

    let stem = if nested {
        name.replace('.', "/")
    } else {
        name.to_string()
    };
    Ok(PathBuf::from(format!("{}.{}", stem, emitter.file_extension())))
}

fn unsafe_name_reason(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name is empty");
    }
    if name.chars().any(|c| matches!(c, '/' | '\\' | ':' | '\0')) {
        return Some("name contains a path separator");
    }
    if name.split('.').any(str::is_empty) {
        return Some("name has an empty dotted segment");
    }
    None
}

/// Joins rendered lines with the configured line ending, ending with one.
pub(crate) fn join_lines(lines: &[String], line_ending: &str) -> String {
    let mut out = lines.join(line_ending);
    out.push_str(line_ending);
    out
}
