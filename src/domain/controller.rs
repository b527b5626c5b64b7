// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/controller.rs
//
// Toolkit-agnostic interaction controller. The only place document, view
// and pan state are mutated.

use std::path::Path;

use image::DynamicImage;

use super::document::{Document, LoadError, Rasterizer};
use super::view::{Pan, ViewState, WheelDirection, transform};

/// Whether an operation requires the display to be recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Redraw {
    Needed,
    Skipped,
}

impl Redraw {
    pub fn is_needed(self) -> bool {
        self == Self::Needed
    }
}

#[derive(Debug, Default)]
pub struct Controller {
    document: Option<Document>,
    view: ViewState,
    pan: Pan,
}

impl Controller {
    #[must_use]
    pub fn new(view: ViewState) -> Self {
        Self {
            document: None,
            view,
            pan: Pan::default(),
        }
    }

    #[must_use]
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    #[must_use]
    pub fn pan(&self) -> Pan {
        self.pan
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.document.as_ref().map_or(0, Document::page_count)
    }

    /// Replace the current document. On error nothing changes.
    pub fn load(&mut self, path: &Path, rasterizer: &dyn Rasterizer) -> Result<Redraw, LoadError> {
        let document = Document::open(path, rasterizer)?;
        self.document = Some(document);
        Ok(self.apply(self.view.reset_for_new_document()))
    }

    pub fn next_page(&mut self) -> Redraw {
        match self.view.next_page(self.page_count()) {
            Some(view) => {
                log::debug!("Next page: {}", view.page_index + 1);
                self.apply(view)
            }
            None => Redraw::Skipped,
        }
    }

    pub fn previous_page(&mut self) -> Redraw {
        if self.document.is_none() {
            return Redraw::Skipped;
        }
        match self.view.previous_page() {
            Some(view) => {
                log::debug!("Previous page: {}", view.page_index + 1);
                self.apply(view)
            }
            None => Redraw::Skipped,
        }
    }

    pub fn rotate(&mut self) -> Redraw {
        if self.document.is_none() {
            return Redraw::Skipped;
        }
        self.apply(self.view.rotate())
    }

    /// Allowed without a document; the zoom carries over to the next load.
    /// Non-finite values are dropped and keep the current pan.
    pub fn set_zoom(&mut self, value: f32) -> Redraw {
        if !value.is_finite() {
            log::debug!("Ignoring non-finite zoom {value}");
            return Redraw::Skipped;
        }
        self.apply(self.view.set_zoom(value))
    }

    pub fn wheel_zoom(&mut self, direction: WheelDirection) -> Redraw {
        self.apply(self.view.wheel_zoom(direction))
    }

    pub fn begin_drag(&mut self, x: f32, y: f32) {
        self.pan.begin_drag(x, y);
    }

    /// Returns true when the pan offset moved.
    pub fn drag_to(&mut self, x: f32, y: f32) -> bool {
        self.pan.drag_to(x, y)
    }

    pub fn end_drag(&mut self) {
        self.pan.end_drag();
    }

    /// Bitmap for the current page under the current view.
    #[must_use]
    pub fn render(&self) -> Option<DynamicImage> {
        let page = self.document.as_ref()?.page(self.view.page_index)?;
        Some(transform::render(page, &self.view))
    }

    // Every redraw starts from an unpanned canvas.
    fn apply(&mut self, view: ViewState) -> Redraw {
        self.view = view;
        self.pan.reset();
        Redraw::Needed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::testing::{Broken, FixedPages, existing_file};
    use crate::domain::view::Rotation;
    use image::GenericImageView;

    fn loaded(sizes: Vec<(u32, u32)>) -> (Controller, tempfile::NamedTempFile) {
        let file = existing_file();
        let mut controller = Controller::default();
        let redraw = controller.load(file.path(), &FixedPages(sizes)).unwrap();
        assert!(redraw.is_needed());
        (controller, file)
    }

    #[test]
    fn three_page_navigation_clamps_at_end() {
        let (mut c, _file) = loaded(vec![(10, 10); 3]);

        assert!(c.next_page().is_needed());
        assert!(c.next_page().is_needed());
        assert_eq!(c.view().page_index, 2);

        assert_eq!(c.next_page(), Redraw::Skipped);
        assert_eq!(c.view().page_index, 2);
    }

    #[test]
    fn previous_page_clamps_at_start() {
        let (mut c, _file) = loaded(vec![(10, 10); 2]);
        assert_eq!(c.previous_page(), Redraw::Skipped);
        assert_eq!(c.view().page_index, 0);
    }

    #[test]
    fn page_change_resets_rotation() {
        let (mut c, _file) = loaded(vec![(10, 10); 2]);
        let _ = c.rotate();
        let _ = c.rotate();
        let _ = c.rotate();
        assert_eq!(c.view().rotation, Rotation::Rotate270);

        let _ = c.next_page();
        assert_eq!(c.view().rotation, Rotation::None);
    }

    #[test]
    fn rotate_swaps_displayed_dimensions() {
        let (mut c, _file) = loaded(vec![(60, 80)]);
        assert_eq!(c.render().unwrap().dimensions(), (60, 80));

        let _ = c.rotate();
        assert_eq!(c.render().unwrap().dimensions(), (80, 60));
    }

    #[test]
    fn operations_without_document_are_noops() {
        let mut c = Controller::default();
        assert_eq!(c.next_page(), Redraw::Skipped);
        assert_eq!(c.previous_page(), Redraw::Skipped);
        assert_eq!(c.rotate(), Redraw::Skipped);
        assert_eq!(c.view(), ViewState::default());
        assert!(c.render().is_none());
    }

    #[test]
    fn zoom_before_load_is_kept() {
        let mut c = Controller::default();
        let _ = c.set_zoom(5.0);
        assert_eq!(c.view().zoom, 2.0);

        let file = existing_file();
        let _ = c.load(file.path(), &FixedPages(vec![(10, 4)])).unwrap();
        assert_eq!(c.view().zoom, 2.0);
        assert_eq!(c.render().unwrap().dimensions(), (20, 8));
    }

    #[test]
    fn load_resets_page_and_rotation() {
        let (mut c, file) = loaded(vec![(10, 10); 4]);
        let _ = c.next_page();
        let _ = c.rotate();
        let _ = c.set_zoom(1.5);

        let _ = c.load(file.path(), &FixedPages(vec![(5, 5); 2])).unwrap();
        assert_eq!(c.page_count(), 2);
        assert_eq!(c.view(), ViewState::with_zoom(1.5));
    }

    #[test]
    fn failed_load_keeps_previous_state() {
        let (mut c, file) = loaded(vec![(12, 34), (56, 78)]);
        let _ = c.next_page();
        let _ = c.rotate();
        let view_before = c.view();
        let bytes_before = c.render().unwrap().into_bytes();

        let err = c
            .load(Path::new("/definitely/not/here.pdf"), &FixedPages(vec![(1, 1)]))
            .unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));

        let err = c.load(file.path(), &Broken).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));

        assert_eq!(c.view(), view_before);
        assert_eq!(c.page_count(), 2);
        assert_eq!(c.render().unwrap().into_bytes(), bytes_before);
    }

    #[test]
    fn drag_pans_without_touching_view() {
        let (mut c, _file) = loaded(vec![(10, 10)]);
        let view = c.view();

        c.begin_drag(5.0, 5.0);
        assert!(c.drag_to(12.0, 1.0));
        c.end_drag();

        assert_eq!((c.pan().offset_x, c.pan().offset_y), (7.0, -4.0));
        assert_eq!(c.view(), view);
    }

    #[test]
    fn redraw_resets_pan() {
        let (mut c, _file) = loaded(vec![(10, 10)]);
        c.begin_drag(0.0, 0.0);
        c.drag_to(30.0, 40.0);

        let _ = c.wheel_zoom(WheelDirection::Up);
        assert_eq!(c.pan(), Pan::default());
        assert!((c.view().zoom - 1.1).abs() < 1e-6);
    }

    #[test]
    fn non_finite_zoom_keeps_pan() {
        let (mut c, _file) = loaded(vec![(10, 10)]);
        c.begin_drag(0.0, 0.0);
        assert!(c.drag_to(15.0, -5.0));
        let pan = c.pan();
        let view = c.view();

        assert_eq!(c.set_zoom(f32::NAN), Redraw::Skipped);
        assert_eq!(c.set_zoom(f32::INFINITY), Redraw::Skipped);
        assert_eq!(c.pan(), pan);
        assert_eq!(c.view(), view);
    }
}
