// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/dialog.rs
//
// Modal notice for load/save results.

use cosmic::Element;
use cosmic::widget::{button, dialog};

use crate::app::model::NoticeKind;
use crate::app::{AppMessage, AppModel};
use crate::fl;

pub fn view(model: &AppModel) -> Option<Element<'_, AppMessage>> {
    let notice = model.notice.as_ref()?;

    let title = match notice.kind {
        NoticeKind::Error => fl!("error-title"),
        NoticeKind::Info => fl!("saved-title"),
    };

    Some(
        dialog()
            .title(title)
            .body(notice.message.as_str())
            .primary_action(button::suggested(fl!("ok")).on_press(AppMessage::DismissNotice))
            .into(),
    )
}
