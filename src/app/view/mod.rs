// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/mod.rs
//
// View functions for the header, canvas, footer and dialogs.

pub mod canvas;
pub mod dialog;
pub mod footer;
pub mod header;
pub mod page_canvas;
