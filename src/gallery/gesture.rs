// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe recognition.
//!
//! Turns a touch-start/touch-end pair into an [`SwipeSignal`]. Only the
//! horizontal displacement is considered; vertical drift is ignored.

use crate::domain::gallery::{SwipeSignal, SwipeThreshold};

/// Recognizer state between touch events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No touch in progress.
    #[default]
    Idle,
    /// A touch started at `start_x` and has not ended yet.
    Tracking { start_x: f32 },
}

/// Two-state swipe recognizer (Idle/Tracking).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureRecognizer {
    threshold: SwipeThreshold,
    state: GestureState,
}

impl GestureRecognizer {
    /// Creates an idle recognizer with the given threshold.
    #[must_use]
    pub fn new(threshold: SwipeThreshold) -> Self {
        Self {
            threshold,
            state: GestureState::Idle,
        }
    }

    /// Returns the configured threshold.
    #[must_use]
    pub fn threshold(&self) -> SwipeThreshold {
        self.threshold
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Returns the tracked start coordinate, if a touch is in progress.
    #[must_use]
    pub fn start_x(&self) -> Option<f32> {
        match self.state {
            GestureState::Idle => None,
            GestureState::Tracking { start_x } => Some(start_x),
        }
    }

    /// Begins tracking at `x`. A touch already in progress is abandoned.
    pub fn touch_start(&mut self, x: f32) {
        if let GestureState::Tracking { start_x } = self.state {
            log::trace!("touch restarted at {x} (abandoning start at {start_x})");
        }
        self.state = GestureState::Tracking { start_x: x };
    }

    /// Ends the touch at `end_x` and returns the recognized swipe, if any.
    ///
    /// Always returns to Idle. A touch-end without a matching start is ignored.
    pub fn touch_end(&mut self, end_x: f32) -> Option<SwipeSignal> {
        let GestureState::Tracking { start_x } = std::mem::take(&mut self.state) else {
            log::trace!("ignoring touch end at {end_x} with no touch in progress");
            return None;
        };
        let signal = classify(start_x - end_x, self.threshold);
        log::trace!("swipe {start_x} -> {end_x}: {signal:?}");
        signal
    }

    /// Drops any touch in progress without emitting.
    pub fn cancel(&mut self) {
        self.state = GestureState::Idle;
    }
}

/// Maps a signed horizontal distance (`start - end`) to a swipe.
///
/// The threshold itself is not enough: the distance must strictly exceed it.
#[must_use]
pub fn classify(distance: f32, threshold: SwipeThreshold) -> Option<SwipeSignal> {
    let threshold = threshold.value();
    if distance > threshold {
        Some(SwipeSignal::Advance)
    } else if distance < -threshold {
        Some(SwipeSignal::Retreat)
    } else {
        None
    }
}
