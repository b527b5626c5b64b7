// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/mod.rs
//
// Loaded document: pre-rendered page bitmaps and load errors.

pub mod rasterizer;

use std::path::{Path, PathBuf};

use image::DynamicImage;
use thiserror::Error;

pub use self::rasterizer::Rasterizer;

/// A rasterized page. Produced once at load time, never regenerated.
pub type Bitmap = DynamicImage;

/// Errors raised while opening a document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{} does not exist", .0.display())]
    NotFound(PathBuf),
    #[error("failed to parse PDF: {0}")]
    Parse(String),
    #[error("PDF has no pages")]
    Empty,
    #[error("failed to render page {page}: {reason}")]
    Render { page: usize, reason: String },
    #[error("PDF support is not available in this build")]
    #[cfg_attr(feature = "portable", allow(dead_code))]
    Unsupported,
}

/// An opened document with every page already rendered.
pub struct Document {
    pages: Vec<Bitmap>,
    source: PathBuf,
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("source", &self.source)
            .field("pages", &self.pages.len())
            .finish()
    }
}

impl Document {
    /// Rasterize every page of `path`.
    ///
    /// The whole document is decoded before this returns; a failure on any
    /// page fails the load.
    pub fn open(path: &Path, rasterizer: &dyn Rasterizer) -> Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::NotFound(path.to_path_buf()));
        }

        let pages = rasterizer.rasterize(path)?;
        if pages.is_empty() {
            return Err(LoadError::Empty);
        }

        log::info!("Loaded {} ({} pages)", path.display(), pages.len());

        Ok(Self {
            pages,
            source: path.to_path_buf(),
        })
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn page(&self, index: usize) -> Option<&Bitmap> {
        self.pages.get(index)
    }

    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// File name for window titles.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.source()
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Rasterizer producing blank pages of fixed sizes.
    pub struct FixedPages(pub Vec<(u32, u32)>);

    impl Rasterizer for FixedPages {
        fn rasterize(&self, _path: &Path) -> Result<Vec<Bitmap>, LoadError> {
            Ok(self
                .0
                .iter()
                .map(|&(w, h)| DynamicImage::new_rgb8(w, h))
                .collect())
        }
    }

    /// Rasterizer that always fails to parse.
    pub struct Broken;

    impl Rasterizer for Broken {
        fn rasterize(&self, _path: &Path) -> Result<Vec<Bitmap>, LoadError> {
            Err(LoadError::Parse("not a PDF".into()))
        }
    }

    /// An existing file to hand to the fake rasterizers.
    pub fn existing_file() -> tempfile::NamedTempFile {
        tempfile::Builder::new()
            .suffix(".pdf")
            .tempfile()
            .expect("create temp file")
    }
}
