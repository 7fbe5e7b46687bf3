//! File writer for rendered output and reformatted IR documents.
//!
//! Every write can run in dry-run mode, in which case the content is
//! handed back instead of touching the disk.

use crate::error::{CliResult, WriteError};
use pygen_ir::EmittedFile;
use std::path::{Component, Path, PathBuf};

/// Result of a write operation.
#[derive(Debug)]
pub enum WriteResult {
    /// File was written.
    Written { path: PathBuf, bytes: usize },

    /// File already had the exact content; nothing was written.
    Unchanged { path: PathBuf },

    /// Dry run - content was not written.
    DryRun { path: PathBuf, content: String },
}

/// File writer with dry-run support.
#[derive(Debug)]
pub struct FileWriter {
    dry_run: bool,
}

impl FileWriter {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Write an emitted file below `out_dir`.
    ///
    /// The emitted path must be relative and made of plain components only.
    pub fn write_emitted(&self, out_dir: &Path, file: &EmittedFile) -> CliResult<WriteResult> {
        let contained = file.path.components().next().is_some()
            && file
                .path
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !contained {
            tracing::warn!(module = %file.module, path = %file.path.display(), "rejected output path");
            return Err(WriteError::OutsideOutputDir {
                path: file.path.clone(),
            }
            .into());
        }
        self.write(&out_dir.join(&file.path), &file.content)
    }

    /// Write content to a file, creating parent directories as needed.
    ///
    /// Files whose current content already matches are left alone.
    pub fn write(&self, path: &Path, content: &str) -> CliResult<WriteResult> {
        if self.dry_run {
            return Ok(WriteResult::DryRun {
                path: path.to_path_buf(),
                content: content.to_string(),
            });
        }

        if std::fs::read_to_string(path).is_ok_and(|existing| existing == content) {
            tracing::debug!(path = %path.display(), "output unchanged");
            return Ok(WriteResult::Unchanged {
                path: path.to_path_buf(),
            });
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| WriteError::CreateDir {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        std::fs::write(path, content).map_err(|e| WriteError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
        Ok(WriteResult::Written {
            path: path.to_path_buf(),
            bytes: content.len(),
        })
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path, .. }
            | WriteResult::Unchanged { path }
            | WriteResult::DryRun { path, .. } => path,
        }
    }

    /// Check if the file on disk was modified.
    pub fn was_written(&self) -> bool {
        matches!(self, WriteResult::Written { .. })
    }
}
