// SPDX-License-Identifier: MPL-2.0
//! Gallery newtypes.
//!
//! This module provides type-safe wrappers for gallery values,
//! ensuring they are always within valid ranges.

use std::fmt;
use std::sync::Arc;

// =============================================================================
// ImageRef
// =============================================================================

/// Reference to a single image: a URL, a file path or any opaque handle the
/// presentation layer knows how to draw.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    /// Creates a new image reference.
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// Returns the raw reference.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the reference looks like a remote URL (`scheme://...`).
    #[must_use]
    pub fn is_remote(&self) -> bool {
        self.0.contains("://")
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ImageRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// =============================================================================
// ImageSet
// =============================================================================

/// Ordered, immutable sequence of image references for one project view.
///
/// Cloning is cheap: the references are shared. A new project means a new
/// `ImageSet`, never an in-place edit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageSet(Arc<[ImageRef]>);

impl ImageSet {
    /// Creates an image set from any sequence of references.
    #[must_use]
    pub fn new<I, R>(images: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<ImageRef>,
    {
        Self(images.into_iter().map(Into::into).collect())
    }

    /// Creates an empty image set.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the number of images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set holds no images.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the image at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageRef> {
        self.0.get(index)
    }

    /// Returns the last valid index, or `None` for an empty set.
    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.0.len().checked_sub(1)
    }

    /// Iterates over the references in order.
    pub fn iter(&self) -> impl Iterator<Item = &ImageRef> {
        self.0.iter()
    }
}

impl<R: Into<ImageRef>> FromIterator<R> for ImageSet {
    fn from_iter<T: IntoIterator<Item = R>>(iter: T) -> Self {
        Self::new(iter)
    }
}

// =============================================================================
// Swipe Threshold Bounds
// =============================================================================

/// Swipe threshold bounds in device-independent pixels.
pub mod threshold_bounds {
    /// Minimum threshold.
    pub const MIN_PX: f32 = 1.0;
    /// Maximum threshold.
    pub const MAX_PX: f32 = 500.0;
    /// Default threshold.
    pub const DEFAULT_PX: f32 = 50.0;
}

// =============================================================================
// SwipeThreshold
// =============================================================================

/// Minimum horizontal distance for a touch to count as a swipe, guaranteed
/// to be within valid range (1–500 px).
///
/// Non-finite inputs fall back to the default instead of poisoning every
/// later comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a new threshold, clamping the value to the valid range.
    #[must_use]
    pub fn new(pixels: f32) -> Self {
        if !pixels.is_finite() {
            return Self::default();
        }
        Self(pixels.clamp(threshold_bounds::MIN_PX, threshold_bounds::MAX_PX))
    }

    /// Returns the raw pixel value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the threshold is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= threshold_bounds::MIN_PX
    }

    /// Returns whether the threshold is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= threshold_bounds::MAX_PX
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(threshold_bounds::DEFAULT_PX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // ImageSet tests
    // -------------------------------------------------------------------------

    #[test]
    fn image_set_preserves_order() {
        let set = ImageSet::new(["a.jpg", "b.jpg", "c.jpg"]);
        let names: Vec<&str> = set.iter().map(ImageRef::as_str).collect();
        assert_eq!(names, vec!["a.jpg", "b.jpg", "c.jpg"]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.last_index(), Some(2));
    }

    #[test]
    fn empty_image_set_has_no_last_index() {
        let set = ImageSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.last_index(), None);
        assert_eq!(set.get(0), None);
    }

    #[test]
    fn image_set_clones_share_storage() {
        let set: ImageSet = vec!["x.png".to_string(), "y.png".to_string()]
            .into_iter()
            .collect();
        let copy = set.clone();
        assert_eq!(set, copy);
        assert_eq!(copy.get(1).map(ImageRef::as_str), Some("y.png"));
    }

    #[test]
    fn image_ref_detects_remote_urls() {
        assert!(ImageRef::new("https://example.org/shot.jpg").is_remote());
        assert!(!ImageRef::new("shots/local.jpg").is_remote());
    }

    // -------------------------------------------------------------------------
    // SwipeThreshold tests
    // -------------------------------------------------------------------------

    #[test]
    fn swipe_threshold_clamps() {
        assert!((SwipeThreshold::new(0.0).value() - threshold_bounds::MIN_PX).abs() < f32::EPSILON);
        assert!(
            (SwipeThreshold::new(9000.0).value() - threshold_bounds::MAX_PX).abs() < f32::EPSILON
        );
        assert!((SwipeThreshold::new(75.0).value() - 75.0).abs() < f32::EPSILON);
    }

    #[test]
    fn swipe_threshold_default() {
        assert!(
            (SwipeThreshold::default().value() - threshold_bounds::DEFAULT_PX).abs()
                < f32::EPSILON
        );
    }

    #[test]
    fn swipe_threshold_rejects_non_finite() {
        assert_eq!(SwipeThreshold::new(f32::NAN), SwipeThreshold::default());
        assert_eq!(SwipeThreshold::new(f32::INFINITY), SwipeThreshold::default());
    }

    #[test]
    fn swipe_threshold_min_max() {
        assert!(SwipeThreshold::new(threshold_bounds::MIN_PX).is_min());
        assert!(SwipeThreshold::new(threshold_bounds::MAX_PX).is_max());
        assert!(!SwipeThreshold::default().is_min());
        assert!(!SwipeThreshold::default().is_max());
    }
}
