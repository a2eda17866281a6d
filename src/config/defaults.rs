// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! Bounds for the values themselves live next to their newtypes in
//! [`crate::domain::gallery::threshold_bounds`]; this module only re-exports
//! what the settings file needs.

use crate::domain::gallery::threshold_bounds;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Default swipe threshold in device-independent pixels.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = threshold_bounds::DEFAULT_PX;

/// Minimum accepted swipe threshold.
pub const MIN_SWIPE_THRESHOLD_PX: f32 = threshold_bounds::MIN_PX;

/// Maximum accepted swipe threshold.
pub const MAX_SWIPE_THRESHOLD_PX: f32 = threshold_bounds::MAX_PX;

// ==========================================================================
// Catalog Defaults
// ==========================================================================

/// Catalog file looked up next to `settings.toml` when none is configured.
pub const DEFAULT_CATALOG_FILE: &str = "projects.toml";
