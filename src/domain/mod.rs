// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// Toolkit-independent document, view and annotation logic.

pub mod annotation;
pub mod controller;
pub mod document;
pub mod view;
