//! Reading IR documents from disk.

use std::path::Path;

use pygen_ir::{codec, Module};

use crate::error::LoadError;

/// Read and decode one IR document.
pub fn load_module(path: &Path) -> Result<Module, LoadError> {
    read_document(path).map(|(_, module)| module)
}

/// Read one IR document, returning its text together with the decoded module.
pub fn read_document(path: &Path) -> Result<(String, Module), LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let module = codec::from_str(&content).map_err(|e| LoadError::Invalid {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), module = %module.name(), "loaded IR document");
    Ok((content, module))
}
