// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/view/mod.rs
//
// View state, pan and the display transform.

pub mod pan;
pub mod state;
pub mod transform;

pub use pan::Pan;
pub use state::{Rotation, ViewState, WheelDirection};
