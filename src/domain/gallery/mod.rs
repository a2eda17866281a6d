// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! This module contains the value objects consumed and produced by the
//! carousel/viewer engine, independent of any presentation framework.

pub mod input;
pub mod newtypes;

// Re-export commonly used types
pub use input::{ClickTarget, InputEvent, Key, ListenerKind, SwipeSignal};
pub use newtypes::{threshold_bounds, ImageRef, ImageSet, SwipeThreshold};
