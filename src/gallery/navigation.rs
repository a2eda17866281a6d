// SPDX-License-Identifier: MPL-2.0
//! Index navigation with wrap-around.
//!
//! Keyboard, swipe and click paths all end up in [`transition`], so "swipe
//! past the last image" and "click the first indicator" can never disagree.

use super::state::GalleryState;

/// Navigation request from any input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Move forward, wrapping from last to first.
    Next,
    /// Move backward, wrapping from first to last.
    Previous,
    /// Jump to an explicit index (indicator dot, thumbnail click).
    Select(usize),
}

/// Computes the index that follows `current` for the given action.
///
/// Returns `None` only when `len == 0`. A missing `current` on a non-empty
/// set is treated as 0, and explicit selections are clamped to the last
/// index.
#[must_use]
pub fn transition(current: Option<usize>, len: usize, action: NavAction) -> Option<usize> {
    let last = len.checked_sub(1)?;
    let current = current.unwrap_or(0).min(last);
    let next = match action {
        NavAction::Next => (current + 1) % len,
        NavAction::Previous => (current + len - 1) % len,
        NavAction::Select(index) => index.min(last),
    };
    Some(next)
}

/// Applies [`NavAction`]s to a borrowed [`GalleryState`].
///
/// This is the only path through which input handlers move the index.
#[derive(Debug)]
pub struct NavigationController<'a> {
    state: &'a mut GalleryState,
}

impl<'a> NavigationController<'a> {
    /// Binds a controller to the given state.
    pub fn new(state: &'a mut GalleryState) -> Self {
        Self { state }
    }

    /// Advances to the next image. No-op on an empty set.
    pub fn next(&mut self) -> Option<usize> {
        self.apply(NavAction::Next)
    }

    /// Goes back to the previous image. No-op on an empty set.
    pub fn prev(&mut self) -> Option<usize> {
        self.apply(NavAction::Previous)
    }

    /// Jumps to `index`. Out-of-range values are clamped.
    pub fn select_explicit(&mut self, index: usize) -> Option<usize> {
        self.apply(NavAction::Select(index))
    }

    /// Applies `action` and returns the resulting index.
    pub fn apply(&mut self, action: NavAction) -> Option<usize> {
        let len = self.state.len();
        if let NavAction::Select(index) = action {
            if index >= len && len > 0 {
                log::warn!("explicit selection {index} out of range for {len} images, clamping");
            }
        }
        let target = transition(self.state.current_index(), len, action)?;
        self.state.set_index(target);
        Some(target)
    }
}
