// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for all UI components.

pub mod button;
pub mod overlay;

pub use button::{overlay as button_overlay, primary as button_primary};
