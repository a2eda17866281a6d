// SPDX-License-Identifier: MPL-2.0
//! Input events understood by the gallery.
//!
//! Hosts translate their native keyboard, touch and click events into these
//! types; nothing here depends on a particular windowing toolkit.

/// Discrete result of a recognized horizontal swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeSignal {
    /// Finger moved right-to-left: show the next image.
    Advance,
    /// Finger moved left-to-right: show the previous image.
    Retreat,
}

/// Keys as seen by the gallery. Only the horizontal arrows are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    /// Any other key; always ignored.
    Other,
}

/// Which window-level listener an event is delivered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    Keyboard,
    Touch,
}

/// Window-level input delivered through listener subscriptions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A key went down.
    KeyDown(Key),
    /// A touch point went down at screen-space `x`.
    TouchStart { x: f32 },
    /// A touch point was lifted at screen-space `x`.
    TouchEnd { x: f32 },
    /// The platform abandoned the touch (e.g. focus loss).
    TouchCancel,
}

impl InputEvent {
    /// Returns the listener kind that receives this event.
    #[must_use]
    pub fn listener_kind(&self) -> ListenerKind {
        match self {
            Self::KeyDown(_) => ListenerKind::Keyboard,
            Self::TouchStart { .. } | Self::TouchEnd { .. } | Self::TouchCancel => {
                ListenerKind::Touch
            }
        }
    }
}

/// Clickable parts of the carousel and the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The inline (non full-screen) image at the given index.
    InlineImage(usize),
    /// Previous arrow, inline or in the overlay.
    PreviousArrow,
    /// Next arrow, inline or in the overlay.
    NextArrow,
    /// Position indicator dot for the given index.
    Indicator(usize),
    /// Overlay close control or the backdrop around the image.
    OverlayClose,
}

impl ClickTarget {
    /// Whether this click opens or closes the full-screen viewer.
    ///
    /// On touch screens the release of a swipe also lands on these surfaces,
    /// so they are only honoured once the touch is known to be a tap.
    #[must_use]
    pub fn toggles_viewer(self) -> bool {
        matches!(self, Self::InlineImage(_) | Self::OverlayClose)
    }
}
