// SPDX-License-Identifier: MPL-2.0
//! `folio_gallery` is the image carousel and full-screen viewer of a
//! portfolio site, packaged as a library plus a small Iced desktop host.
//!
//! The [`gallery`] module is the engine: one shared index drives both the
//! inline carousel and the full-screen overlay, with keyboard, swipe and click
//! input routed through a single navigation controller. The remaining modules
//! load settings and project catalogs and draw the gallery with Iced.

#![doc(html_root_url = "https://docs.rs/folio_gallery/0.1.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod ui;
