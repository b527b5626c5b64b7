// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/model.rs
//
// Application state.

use cosmic::widget::image::Handle as ImageHandle;
use image::GenericImageView;

use crate::domain::annotation::AnnotationLog;
use crate::domain::controller::Controller;
use crate::domain::document::rasterizer::PopplerRasterizer;
use crate::domain::view::ViewState;

// =============================================================================
// Display
// =============================================================================

/// The transformed page as handed to the canvas.
#[derive(Debug, Clone)]
pub struct DisplayPage {
    pub handle: ImageHandle,
    pub width: u32,
    pub height: u32,
}

impl DisplayPage {
    pub fn from_image(img: &image::DynamicImage) -> Self {
        let (width, height) = img.dimensions();
        let rgba = img.to_rgba8();
        Self {
            handle: ImageHandle::from_rgba(width, height, rgba.into_raw()),
            width,
            height,
        }
    }
}

/// Modal message shown over the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

// =============================================================================
// Model
// =============================================================================

pub struct AppModel {
    pub controller: Controller,
    pub rasterizer: PopplerRasterizer,
    pub annotations: AnnotationLog,
    pub display: Option<DisplayPage>,
    pub notice: Option<Notice>,
}

impl AppModel {
    pub fn new(initial_zoom: f32) -> Self {
        Self {
            controller: Controller::new(ViewState::with_zoom(initial_zoom)),
            rasterizer: PopplerRasterizer::default(),
            annotations: AnnotationLog::new(),
            display: None,
            notice: None,
        }
    }

    pub fn set_error<S: Into<String>>(&mut self, msg: S) {
        self.notice = Some(Notice {
            kind: NoticeKind::Error,
            message: msg.into(),
        });
    }

    pub fn set_info<S: Into<String>>(&mut self, msg: S) {
        self.notice = Some(Notice {
            kind: NoticeKind::Info,
            message: msg.into(),
        });
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Recompute the displayed bitmap from the controller state.
    pub fn refresh_display(&mut self) {
        self.display = self
            .controller
            .render()
            .map(|img| DisplayPage::from_image(&img));
    }
}
