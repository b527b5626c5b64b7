// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Application messages: events, user actions, and internal signals.

use std::path::PathBuf;

use crate::domain::view::WheelDirection;

#[derive(Debug, Clone)]
pub enum AppMessage {
    // File.
    OpenFile,
    /// Result of the open dialog; `None` when cancelled.
    FileChosen(Option<PathBuf>),
    SaveAnnotations,
    Exit,

    // Navigation.
    NextPage,
    PrevPage,

    // Transformations.
    Rotate,

    // View / zoom.
    ZoomChanged(f32),
    WheelZoom(WheelDirection),

    // Pan control.
    DragStart { x: f32, y: f32 },
    DragMove { x: f32, y: f32 },
    DragEnd,

    // Annotations. Nothing in the UI emits this yet.
    #[allow(dead_code)]
    AddAnnotation(String),

    // Dialogs.
    DismissNotice,
}
