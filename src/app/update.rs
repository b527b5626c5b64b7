// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/update.rs
//
// Message dispatch: route UI events into the controller and redraw.

use std::path::{Path, PathBuf};

use cosmic::{Action, Task};

use super::VellumApp;
use super::message::AppMessage;
use crate::constant::{ANNOTATIONS_FILE, PDF_EXTENSION};
use crate::domain::controller::Redraw;
use crate::fl;

pub enum UpdateResult {
    None,
    Task(Task<Action<AppMessage>>),
}

pub fn update(app: &mut VellumApp, message: &AppMessage) -> UpdateResult {
    let redraw = match message {
        // ---- File -------------------------------------------------------
        AppMessage::OpenFile => {
            let start_dir = app.config.default_pdf_dir.clone();
            return UpdateResult::Task(Task::perform(pick_pdf(start_dir), |path| {
                Action::App(AppMessage::FileChosen(path))
            }));
        }
        AppMessage::FileChosen(None) => {
            log::debug!("Open dialog cancelled");
            Redraw::Skipped
        }
        AppMessage::FileChosen(Some(path)) => open_path(app, path),
        AppMessage::SaveAnnotations => {
            save_annotations(app);
            Redraw::Skipped
        }
        AppMessage::Exit => return UpdateResult::Task(cosmic::iced::exit()),

        // ---- Navigation -------------------------------------------------
        AppMessage::NextPage => app.model.controller.next_page(),
        AppMessage::PrevPage => app.model.controller.previous_page(),

        // ---- Transformations / zoom ------------------------------------
        AppMessage::Rotate => app.model.controller.rotate(),
        AppMessage::ZoomChanged(value) => app.model.controller.set_zoom(*value),
        AppMessage::WheelZoom(direction) => app.model.controller.wheel_zoom(*direction),

        // ---- Pan --------------------------------------------------------
        AppMessage::DragStart { x, y } => {
            app.model.controller.begin_drag(*x, *y);
            Redraw::Skipped
        }
        AppMessage::DragMove { x, y } => {
            app.model.controller.drag_to(*x, *y);
            Redraw::Skipped
        }
        AppMessage::DragEnd => {
            app.model.controller.end_drag();
            Redraw::Skipped
        }

        // ---- Annotations -----------------------------------------------
        AppMessage::AddAnnotation(text) => {
            app.model.annotations.append(text.clone());
            Redraw::Skipped
        }

        // ---- Dialogs ----------------------------------------------------
        AppMessage::DismissNotice => {
            app.model.clear_notice();
            Redraw::Skipped
        }
    };

    if redraw.is_needed() {
        app.model.refresh_display();
    }

    UpdateResult::None
}

/// Load `path`, keeping the current document when it fails.
pub fn open_path(app: &mut VellumApp, path: &Path) -> Redraw {
    match app.model.controller.load(path, &app.model.rasterizer) {
        Ok(redraw) => {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                app.config.default_pdf_dir = Some(dir.to_path_buf());
                app.save_config();
            }
            app.update_title();
            redraw
        }
        Err(e) => {
            log::error!("Failed to open {}: {}", path.display(), e);
            app.model.set_error(fl!("load-failed", reason = e.to_string()));
            Redraw::Skipped
        }
    }
}

fn save_annotations(app: &mut VellumApp) {
    let model = &mut app.model;
    if model.annotations.is_empty() {
        log::debug!("No annotations yet, writing an empty {ANNOTATIONS_FILE}");
    }
    match model.annotations.save_to(Path::new(ANNOTATIONS_FILE)) {
        Ok(()) => model.set_info(fl!("annotations-saved")),
        Err(e) => {
            log::error!("{e}");
            model.set_error(fl!("save-failed", reason = e.to_string()));
        }
    }
}

async fn pick_pdf(start_dir: Option<PathBuf>) -> Option<PathBuf> {
    let mut dialog = rfd::AsyncFileDialog::new().add_filter("PDF Files", &[PDF_EXTENSION]);
    if let Some(dir) = start_dir.filter(|d| d.is_dir()) {
        dialog = dialog.set_directory(dir);
    }
    dialog.pick_file().await.map(|file| file.path().to_path_buf())
}
