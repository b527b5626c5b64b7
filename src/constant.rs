// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Application constants that should not be changed by the user.

/// Rotation step in degrees (90 = quarter turn).
pub const ROTATION_STEP: u16 = 90;

/// Full rotation in degrees (for modulo calculation in angle normalization).
pub const FULL_ROTATION: u16 = 360;

/// Render scale for PDF pages (2.0 = double resolution for sharp display).
pub const PDF_RENDER_SCALE: f64 = 2.0;

/// Smallest zoom factor reachable from the slider or the mouse wheel.
pub const ZOOM_MIN: f32 = 0.5;

/// Largest zoom factor reachable from the slider or the mouse wheel.
pub const ZOOM_MAX: f32 = 2.0;

/// Zoom applied when nothing else was configured.
pub const ZOOM_DEFAULT: f32 = 1.0;

/// Zoom change per mouse wheel notch.
pub const WHEEL_ZOOM_STEP: f32 = 0.1;

/// Slider granularity.
pub const ZOOM_SLIDER_STEP: f32 = 0.01;

/// Annotation output file, relative to the working directory.
pub const ANNOTATIONS_FILE: &str = "annotations.txt";

/// File dialog filter extension.
pub const PDF_EXTENSION: &str = "pdf";

/// Initial window size.
pub const WINDOW_WIDTH: f32 = 800.0;
pub const WINDOW_HEIGHT: f32 = 600.0;
