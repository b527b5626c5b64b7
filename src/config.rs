// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Global configuration for the application with cosmic-config support.

use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use std::path::PathBuf;

use crate::constant::ZOOM_DEFAULT;

/// Global configuration for the application.
#[derive(Debug, Clone, CosmicConfigEntry, PartialEq)]
#[version = 1]
pub struct AppConfig {
    /// Directory the open dialog starts in. Follows the last opened file.
    pub default_pdf_dir: Option<PathBuf>,
    /// Zoom factor applied at startup (clamped into the zoom range).
    pub initial_zoom: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_pdf_dir: dirs::document_dir().or_else(dirs::home_dir),
            initial_zoom: ZOOM_DEFAULT,
        }
    }
}
