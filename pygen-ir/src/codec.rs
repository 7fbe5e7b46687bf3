//! JSON exchange format.
//!
//! A module is one JSON object with the keys `name`, `functions` and
//! `variables`; each symbol is an object with `name`, `type`, `doc` and
//! `sig`. All keys are written every time and required on read. Unknown
//! keys are ignored on read so newer producers can add sections.

use std::io::{Read, Write};

use crate::error::IrResult;
use crate::ir::Module;

/// Encode a module as compact JSON.
pub fn to_string(module: &Module) -> IrResult<String> {
    let json = serde_json::to_string(module)?;
    tracing::debug!(module = %module.name(), bytes = json.len(), "encoded IR");
    Ok(json)
}

/// Encode a module as indented JSON.
pub fn to_string_pretty(module: &Module) -> IrResult<String> {
    let json = serde_json::to_string_pretty(module)?;
    tracing::debug!(module = %module.name(), bytes = json.len(), "encoded IR");
    Ok(json)
}

/// Encode a module into a writer.
pub fn to_writer<W: Write>(writer: W, module: &Module, pretty: bool) -> IrResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, module)?;
    } else {
        serde_json::to_writer(writer, module)?;
    }
    Ok(())
}

/// Decode a module from a JSON string.
pub fn from_str(input: &str) -> IrResult<Module> {
    let module: Module = serde_json::from_str(input)?;
    log_decoded(&module);
    Ok(module)
}

/// Decode a module from JSON bytes.
pub fn from_slice(input: &[u8]) -> IrResult<Module> {
    let module: Module = serde_json::from_slice(input)?;
    log_decoded(&module);
    Ok(module)
}

/// Decode a module from a reader.
pub fn from_reader<R: Read>(reader: R) -> IrResult<Module> {
    let module: Module = serde_json::from_reader(reader)?;
    log_decoded(&module);
    Ok(module)
}

fn log_decoded(module: &Module) {
    tracing::debug!(
        module = %module.name(),
        functions = module.functions().len(),
        variables = module.variables().len(),
        "decoded IR"
    );
}
