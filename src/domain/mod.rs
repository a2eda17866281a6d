// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery types with ZERO external dependencies.
//!
//! This module contains pure value objects shared by the gallery engine and
//! the presentation layer. It has no dependencies on external crates (except
//! `std`) to ensure testability and architectural purity.
//!
//! # Modules
//!
//! - [`gallery`]: Image references ([`ImageRef`](gallery::ImageRef),
//!   [`ImageSet`](gallery::ImageSet)), gesture configuration
//!   ([`SwipeThreshold`](gallery::SwipeThreshold)) and input events
//!   ([`InputEvent`](gallery::InputEvent), [`ClickTarget`](gallery::ClickTarget))

pub mod gallery;
