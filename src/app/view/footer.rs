// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/footer.rs
//
// Control bar: page navigation, rotation and the zoom slider.

use cosmic::Element;
use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, row, slider, text};

use crate::app::{AppMessage, AppModel, zoom_percent};
use crate::constant::{ZOOM_MAX, ZOOM_MIN, ZOOM_SLIDER_STEP};
use crate::fl;

const SPACING: u16 = 10;

pub fn view(model: &AppModel) -> Element<'_, AppMessage> {
    let state = model.controller.view();

    let page_label = match model.controller.page_count() {
        0 => fl!("page-indicator-empty"),
        total => fl!(
            "page-indicator",
            current = state.page_index + 1,
            total = total
        ),
    };

    // The slider reads the stored zoom, so wheel zoom keeps it in sync.
    let zoom_slider = slider(ZOOM_MIN..=ZOOM_MAX, state.zoom, AppMessage::ZoomChanged)
        .step(ZOOM_SLIDER_STEP)
        .width(Length::Fill);

    row::with_capacity(7)
        .push(button::text(fl!("previous")).on_press(AppMessage::PrevPage))
        .push(button::text(fl!("next")).on_press(AppMessage::NextPage))
        .push(button::text(fl!("rotate")).on_press(AppMessage::Rotate))
        .push(text::body(page_label))
        .push(text::body(fl!("zoom")))
        .push(zoom_slider)
        .push(text::body(fl!(
            "zoom-percent",
            percent = zoom_percent(state.zoom)
        )))
        .spacing(SPACING)
        .padding(SPACING)
        .align_y(Alignment::Center)
        .into()
}
