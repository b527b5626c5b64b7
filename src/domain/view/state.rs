// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/view/state.rs
//
// Page, rotation and zoom state. Every transition returns a new valid state.

use crate::constant::{
    FULL_ROTATION, ROTATION_STEP, WHEEL_ZOOM_STEP, ZOOM_DEFAULT, ZOOM_MAX, ZOOM_MIN,
};

/// Quarter-turn rotation applied at display time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    None,
    Rotate90,
    Rotate180,
    Rotate270,
}

impl Rotation {
    #[must_use]
    pub fn from_degrees(degrees: u16) -> Self {
        match degrees % FULL_ROTATION {
            90 => Self::Rotate90,
            180 => Self::Rotate180,
            270 => Self::Rotate270,
            _ => Self::None,
        }
    }

    #[must_use]
    pub fn degrees(self) -> u16 {
        match self {
            Self::None => 0,
            Self::Rotate90 => 90,
            Self::Rotate180 => 180,
            Self::Rotate270 => 270,
        }
    }

    /// Advance by one rotation step.
    #[must_use]
    pub fn step(self) -> Self {
        Self::from_degrees((self.degrees() + ROTATION_STEP) % FULL_ROTATION)
    }
}

/// Direction of a mouse wheel notch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    Up,
    Down,
}

/// Clamp a zoom factor into the supported range. NaN and infinities fall
/// back to the default zoom.
#[must_use]
pub fn clamp_zoom(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(ZOOM_MIN, ZOOM_MAX)
    } else {
        ZOOM_DEFAULT
    }
}

/// What is shown: which page, turned how far, at which zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub page_index: usize,
    pub rotation: Rotation,
    pub zoom: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::with_zoom(ZOOM_DEFAULT)
    }
}

impl ViewState {
    #[must_use]
    pub fn with_zoom(zoom: f32) -> Self {
        Self {
            page_index: 0,
            rotation: Rotation::None,
            zoom: clamp_zoom(zoom),
        }
    }

    /// State right after a document was opened: first page, upright, same zoom.
    #[must_use]
    pub fn reset_for_new_document(self) -> Self {
        Self {
            page_index: 0,
            rotation: Rotation::None,
            zoom: self.zoom,
        }
    }

    /// Move to the next page. `None` when already on the last page.
    #[must_use]
    pub fn next_page(self, page_count: usize) -> Option<Self> {
        (self.page_index + 1 < page_count).then(|| self.goto(self.page_index + 1))
    }

    /// Move to the previous page. `None` when already on the first page.
    #[must_use]
    pub fn previous_page(self) -> Option<Self> {
        self.page_index
            .checked_sub(1)
            .map(|index| self.goto(index))
    }

    #[must_use]
    pub fn rotate(self) -> Self {
        Self {
            rotation: self.rotation.step(),
            ..self
        }
    }

    /// Set the zoom factor, clamped. Non-finite values leave the state as is.
    #[must_use]
    pub fn set_zoom(self, value: f32) -> Self {
        if !value.is_finite() {
            return self;
        }
        Self {
            zoom: clamp_zoom(value),
            ..self
        }
    }

    /// One wheel notch of zoom.
    #[must_use]
    pub fn wheel_zoom(self, direction: WheelDirection) -> Self {
        let delta = match direction {
            WheelDirection::Up => WHEEL_ZOOM_STEP,
            WheelDirection::Down => -WHEEL_ZOOM_STEP,
        };
        self.set_zoom(self.zoom + delta)
    }

    // Page changes always drop the rotation.
    fn goto(self, page_index: usize) -> Self {
        Self {
            page_index,
            rotation: Rotation::None,
            zoom: self.zoom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn four_rotations_return_to_start() {
        let start = ViewState::default().rotate();
        let after = start.rotate().rotate().rotate().rotate();
        assert_eq!(after.rotation, start.rotation);
        assert_eq!(ViewState::default().rotate().rotation.degrees(), 90);
    }

    #[test]
    fn page_change_resets_rotation() {
        let state = ViewState::default().rotate().rotate();
        assert_eq!(state.rotation, Rotation::Rotate180);

        let next = state.next_page(3).unwrap();
        assert_eq!(next.page_index, 1);
        assert_eq!(next.rotation, Rotation::None);

        let back = next.rotate().previous_page().unwrap();
        assert_eq!(back.page_index, 0);
        assert_eq!(back.rotation, Rotation::None);
    }

    #[test]
    fn navigation_stops_at_bounds() {
        let first = ViewState::default();
        assert!(first.previous_page().is_none());

        let last = ViewState {
            page_index: 2,
            ..first
        };
        assert!(last.next_page(3).is_none());
    }

    #[test]
    fn wheel_zoom_saturates() {
        let mut state = ViewState::with_zoom(1.95);
        state = state.wheel_zoom(WheelDirection::Up);
        assert_eq!(state.zoom, ZOOM_MAX);
        state = state.wheel_zoom(WheelDirection::Up);
        assert_eq!(state.zoom, ZOOM_MAX);

        let mut state = ViewState::with_zoom(0.55);
        state = state.wheel_zoom(WheelDirection::Down);
        assert_eq!(state.zoom, ZOOM_MIN);
    }

    #[test]
    fn non_finite_zoom_is_ignored() {
        let state = ViewState::with_zoom(1.3);
        assert_eq!(state.set_zoom(f32::NAN), state);
        assert_eq!(state.set_zoom(f32::INFINITY), state);
    }

    #[test]
    fn initial_zoom_is_always_in_range() {
        for value in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            assert_eq!(ViewState::with_zoom(value).zoom, ZOOM_DEFAULT);
        }
        assert_eq!(ViewState::with_zoom(0.1).zoom, ZOOM_MIN);
        assert_eq!(ViewState::with_zoom(9.0).zoom, ZOOM_MAX);
    }

    #[test]
    fn new_document_keeps_zoom() {
        let state = ViewState {
            page_index: 4,
            rotation: Rotation::Rotate270,
            zoom: 1.7,
        };
        assert_eq!(state.reset_for_new_document(), ViewState::with_zoom(1.7));
    }

    proptest! {
        #[test]
        fn zoom_is_clamped_or_exact(value in -10.0f32..10.0) {
            let zoom = ViewState::default().set_zoom(value).zoom;
            if value < ZOOM_MIN {
                prop_assert_eq!(zoom, ZOOM_MIN);
            } else if value > ZOOM_MAX {
                prop_assert_eq!(zoom, ZOOM_MAX);
            } else {
                prop_assert_eq!(zoom, value);
            }
        }

        #[test]
        fn page_index_stays_in_bounds(
            page_count in 1usize..20,
            moves in proptest::collection::vec(any::<bool>(), 0..60),
        ) {
            let mut state = ViewState::default();
            for forward in moves {
                let moved = if forward {
                    state.next_page(page_count)
                } else {
                    state.previous_page()
                };
                state = moved.unwrap_or(state);
                prop_assert!(state.page_index < page_count);
            }
        }
    }
}
