// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::gallery::{ClickTarget, InputEvent};

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Mount the catalog project at this index.
    OpenProject(usize),
    /// Unmount the current project and return to the list.
    BackToList,
    /// Raw keyboard or touch input, forwarded to the event hub.
    Input(InputEvent),
    /// A click on one of the gallery controls.
    Click(ClickTarget),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `FOLIO_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional catalog file; takes precedence over `[catalog] path`.
    pub catalog: Option<String>,
    /// Optional swipe threshold in pixels; takes precedence over `[gesture]`.
    pub threshold: Option<f32>,
    /// Image references given on the command line. When present they form a
    /// single ad-hoc project and the catalog is not read.
    pub images: Vec<String>,
}
