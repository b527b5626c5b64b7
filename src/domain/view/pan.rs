// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/view/pan.rs
//
// Drag-to-pan offset of the displayed page.

/// Translation of the displayed bitmap plus the last pointer position of an
/// active drag. Lives only until the next redraw.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pan {
    pub offset_x: f32,
    pub offset_y: f32,
    anchor: Option<(f32, f32)>,
}

impl Pan {
    pub fn begin_drag(&mut self, x: f32, y: f32) {
        self.anchor = Some((x, y));
    }

    /// Move by the delta from the previous pointer position.
    /// Returns false when no drag is active.
    pub fn drag_to(&mut self, x: f32, y: f32) -> bool {
        let Some((start_x, start_y)) = self.anchor else {
            return false;
        };

        self.offset_x += x - start_x;
        self.offset_y += y - start_y;
        self.anchor = Some((x, y));
        true
    }

    pub fn end_drag(&mut self) {
        self.anchor = None;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    /// Back to the origin. Also drops an active drag.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
