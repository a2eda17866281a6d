// SPDX-License-Identifier: MPL-2.0
//! Iced widgets for the gallery.
//!
//! The views are stateless: they draw a [`crate::gallery::CarouselFrame`] or
//! [`crate::gallery::OverlayFrame`] and emit [`crate::domain::gallery::ClickTarget`]s.
//!
//! - [`carousel`] - Inline carousel with arrows, indicator dots and position label
//! - [`overlay`] - Full-screen viewer layer
//! - [`picture`] - Image or placeholder for a single reference
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod carousel;
pub mod design_tokens;
pub mod overlay;
pub mod picture;
pub mod styles;
