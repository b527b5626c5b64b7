// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/annotation.rs
//
// Append-only list of free-text notes, written out on demand.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnnotationError {
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Free-text notes in insertion order. Not tied to a page or position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationLog {
    entries: Vec<String>,
}

impl AnnotationLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append<S: Into<String>>(&mut self, text: S) {
        self.entries.push(text.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// File contents: one line per entry, each newline-terminated.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.entries.iter().map(|e| e.len() + 1).sum());
        for entry in &self.entries {
            out.push_str(entry);
            out.push('\n');
        }
        out
    }

    /// Overwrite `path` with the log.
    pub fn save_to(&self, path: &Path) -> Result<(), AnnotationError> {
        fs::write(path, self.to_text()).map_err(|source| AnnotationError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Saved {} annotations to {}", self.len(), path.display());
        Ok(())
    }
}
