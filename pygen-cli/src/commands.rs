//! Command implementations shared by the binary and the tests.
//!
//! Each function does the work of one subcommand and returns an outcome
//! value; printing and exit codes are left to `main`.

use std::path::Path;

use pygen_ir::{codec, emit, ConsistencyReport, EmittedFile, Module};

use crate::config::Config;
use crate::error::{CliResult, ConfigError};
use crate::loader::{load_module, read_document};

/// Outcome of `pygen check`.
#[derive(Debug)]
pub struct CheckOutcome {
    pub module: Module,
    pub report: ConsistencyReport,
}

impl CheckOutcome {
    /// Whether the check passes under the given warning policy.
    pub fn passes(&self, deny_warnings: bool) -> bool {
        !deny_warnings || self.report.is_clean()
    }
}

/// Decode a document and run the consistency check on it.
pub fn check(path: &Path) -> CliResult<CheckOutcome> {
    let module = load_module(path)?;
    let report = module.check_consistency();
    report.log();
    Ok(CheckOutcome { module, report })
}

/// Outcome of `pygen fmt`.
#[derive(Debug)]
pub struct FormatOutcome {
    pub original: String,
    pub canonical: String,
}

impl FormatOutcome {
    /// Whether the document was already in canonical form.
    pub fn is_canonical(&self) -> bool {
        self.original == self.canonical
    }
}

/// Canonical text of a module: encoder output followed by a newline.
pub fn canonical_text(module: &Module, pretty: bool) -> CliResult<String> {
    let mut text = if pretty {
        codec::to_string_pretty(module)?
    } else {
        codec::to_string(module)?
    };
    text.push('\n');
    Ok(text)
}

/// Decode a document and produce its canonical form.
pub fn format(path: &Path, pretty: bool) -> CliResult<FormatOutcome> {
    let (original, module) = read_document(path)?;
    let canonical = canonical_text(&module, pretty)?;
    Ok(FormatOutcome {
        original,
        canonical,
    })
}

/// Decode a document and render it with the configured emitter.
pub fn render(path: &Path, config: &Config) -> CliResult<EmittedFile> {
    let emitter = emit::emitter_for(&config.render.format).ok_or_else(|| {
        ConfigError::invalid_value(
            "render.format",
            format!("unknown emitter '{}'", config.render.format),
        )
    })?;
    let emit_config = config.emit_config()?;

    let module = load_module(path)?;
    let file = emitter.emit(&module, &emit_config)?;
    tracing::info!(
        module = %module.name(),
        emitter = emitter.id(),
        path = %file.path.display(),
        "rendered module"
    );
    Ok(file)
}
