// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/canvas.rs
//
// Render the center canvas area with the current page.

use cosmic::Element;
use cosmic::iced::Length;
use cosmic::widget::{container, text};

use super::page_canvas::page_canvas;
use crate::app::{AppMessage, AppModel};
use crate::fl;

/// Render the center canvas area with the current page.
pub fn view(model: &AppModel) -> Element<'_, AppMessage> {
    if let Some(page) = &model.display {
        let pan = model.controller.pan();

        container(page_canvas(page, pan.offset_x, pan.offset_y, pan.is_dragging()))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    } else {
        container(text(fl!("no-document")))
            .width(Length::Fill)
            .height(Length::Fill)
            .center(Length::Fill)
            .into()
    }
}
