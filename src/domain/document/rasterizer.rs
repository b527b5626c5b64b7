// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/rasterizer.rs
//
// Page rasterization boundary, with the poppler backend.

use std::path::Path;

use super::{Bitmap, LoadError};

/// Turns a document file into one bitmap per page, in document order.
pub trait Rasterizer {
    fn rasterize(&self, path: &Path) -> Result<Vec<Bitmap>, LoadError>;
}

/// Rasterizer backed by poppler and cairo.
#[derive(Debug, Clone, Copy)]
pub struct PopplerRasterizer {
    scale: f64,
}

impl PopplerRasterizer {
    #[must_use]
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }
}

impl Default for PopplerRasterizer {
    fn default() -> Self {
        Self::new(crate::constant::PDF_RENDER_SCALE)
    }
}

#[cfg(feature = "portable")]
impl Rasterizer for PopplerRasterizer {
    fn rasterize(&self, path: &Path) -> Result<Vec<Bitmap>, LoadError> {
        use poppler::PopplerDocument;

        let document = PopplerDocument::new_from_file(path, None)
            .map_err(|e| LoadError::Parse(e.to_string()))?;

        let num_pages = document.get_n_pages();
        let mut pages = Vec::with_capacity(num_pages);
        for index in 0..num_pages {
            let page = render_page(&document, index, self.scale)
                .map_err(|reason| LoadError::Render { page: index, reason })?;
            pages.push(page);
        }

        Ok(pages)
    }
}

#[cfg(not(feature = "portable"))]
impl Rasterizer for PopplerRasterizer {
    fn rasterize(&self, _path: &Path) -> Result<Vec<Bitmap>, LoadError> {
        Err(LoadError::Unsupported)
    }
}

/// Render one page at `scale` into an RGB bitmap.
#[cfg(feature = "portable")]
fn render_page(
    document: &poppler::PopplerDocument,
    page_index: usize,
    scale: f64,
) -> Result<Bitmap, String> {
    use std::io::Cursor;

    use cairo::{Context, Format, ImageSurface};
    use image::{DynamicImage, ImageReader};

    let page = document
        .get_page(page_index)
        .ok_or_else(|| format!("page {page_index} is missing"))?;

    let (page_width, page_height) = page.get_size();
    let scaled_width = (page_width * scale) as i32;
    let scaled_height = (page_height * scale) as i32;

    let surface = ImageSurface::create(Format::ARgb32, scaled_width, scaled_height)
        .map_err(|e| format!("failed to create Cairo surface: {e}"))?;

    let context =
        Context::new(&surface).map_err(|e| format!("failed to create Cairo context: {e}"))?;

    // White paper under transparent page content.
    context.set_source_rgb(1.0, 1.0, 1.0);
    let _ = context.paint();

    context.scale(scale, scale);
    page.render(&context);

    drop(context);
    surface.flush();

    let mut png_data: Vec<u8> = Vec::new();
    surface
        .write_to_png(&mut png_data)
        .map_err(|e| format!("failed to write PNG: {e}"))?;

    let image = ImageReader::new(Cursor::new(png_data))
        .with_guessed_format()
        .map_err(|e| format!("failed to read PNG format: {e}"))?
        .decode()
        .map_err(|e| format!("failed to decode PNG: {e}"))?;

    Ok(DynamicImage::ImageRgb8(image.to_rgb8()))
}
