// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/header.rs
//
// Header bar: file actions.

use cosmic::Element;
use cosmic::widget::button;

use crate::app::{AppMessage, AppModel};
use crate::fl;

pub fn start(_model: &AppModel) -> Vec<Element<'_, AppMessage>> {
    vec![
        button::text(fl!("open-pdf"))
            .on_press(AppMessage::OpenFile)
            .into(),
        button::text(fl!("save-annotations"))
            .on_press(AppMessage::SaveAnnotations)
            .into(),
        button::text(fl!("exit")).on_press(AppMessage::Exit).into(),
    ]
}
