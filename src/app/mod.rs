// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the project list and the
//! mounted gallery.
//!
//! The `App` owns the [`EventHub`] that stands in for window-level listeners.
//! Entering a project mounts a [`ProjectView`] on that hub; leaving it drops
//! the view, which unregisters its listeners before anything else can run.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;
pub use subscription::{map_event, map_key};

use crate::catalog::Catalog;
use crate::config::{self, Config};
use crate::domain::gallery::SwipeThreshold;
use crate::gallery::{EventHub, ProjectView};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

const APP_TITLE: &str = "Folio Gallery";

/// Title of the ad-hoc project built from command-line images.
pub const AD_HOC_PROJECT_TITLE: &str = "Command line";

/// Root Iced application state.
pub struct App {
    screen: Screen,
    catalog: Catalog,
    threshold: SwipeThreshold,
    hub: EventHub,
    project: Option<ProjectView>,
    /// Startup warning shown above the current screen.
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("projects", &self.catalog.len())
            .field("mounted", &self.project.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed on first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Chooses the project source: command-line images win over the catalog flag,
/// which wins over the configured catalog, which wins over the default file.
///
/// Returns the catalog plus a warning when a catalog file could not be read.
pub fn resolve_catalog(
    images: Vec<String>,
    catalog_flag: Option<String>,
    config: &Config,
) -> (Catalog, Option<String>) {
    if !images.is_empty() {
        return (Catalog::single(AD_HOC_PROJECT_TITLE, images), None);
    }

    let explicit = catalog_flag
        .map(PathBuf::from)
        .or_else(|| config.catalog.path.clone());
    let path = match explicit {
        Some(path) => path,
        None => match config::default_catalog_path() {
            Some(path) if path.exists() => path,
            _ => return (Catalog::default(), None),
        },
    };

    match Catalog::load_from_path(&path) {
        Ok(catalog) => (catalog, None),
        Err(err) => {
            log::warn!("failed to load catalog {}: {err}", path.display());
            (
                Catalog::default(),
                Some(format!("Catalog {} could not be read ({err}).", path.display())),
            )
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            screen: Screen::ProjectList,
            catalog: Catalog::default(),
            threshold: SwipeThreshold::default(),
            hub: EventHub::new(),
            project: None,
            notice: None,
        }
    }
}

impl App {
    /// Initializes application state from the CLI flags and `settings.toml`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let threshold = flags
            .threshold
            .map_or_else(|| config.swipe_threshold(), SwipeThreshold::new);
        let (catalog, catalog_warning) = resolve_catalog(flags.images, flags.catalog, &config);

        let mut app = App {
            catalog,
            threshold,
            notice: config_warning.or(catalog_warning),
            ..App::default()
        };

        // A lone project skips the list.
        if app.catalog.len() == 1 {
            let _ = app.update(Message::OpenProject(0));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.screen {
            Screen::Project(index) => match self.catalog.get(index) {
                Some(project) => format!("{} - {APP_TITLE}", project.title),
                None => APP_TITLE.to_string(),
            },
            Screen::ProjectList => APP_TITLE.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_input_subscription(self.project.is_some())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            catalog: &self.catalog,
            threshold: self.threshold,
            hub: &self.hub,
            project: &mut self.project,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            catalog: &self.catalog,
            project: self.project.as_ref(),
            notice: self.notice.as_deref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Project;
    use crate::domain::gallery::{ClickTarget, InputEvent, Key, ListenerKind};
    use std::fs;
    use tempfile::tempdir;

    fn app_with_projects() -> App {
        App {
            catalog: Catalog {
                projects: vec![
                    Project {
                        title: "Harbour".into(),
                        images: vec!["h1.jpg".into(), "h2.jpg".into(), "h3.jpg".into()],
                    },
                    Project {
                        title: "Dunes".into(),
                        images: vec!["d1.jpg".into(), "d2.jpg".into()],
                    },
                ],
            },
            ..App::default()
        }
    }

    fn current_index(app: &App) -> Option<usize> {
        app.project.as_ref().and_then(ProjectView::current_index)
    }

    #[test]
    fn default_starts_on_project_list_without_listeners() {
        let app = App::default();
        assert_eq!(app.screen, Screen::ProjectList);
        assert!(app.project.is_none());
        assert_eq!(app.hub.listener_count(), 0);
    }

    #[test]
    fn open_project_mounts_view_and_registers_listeners() {
        let mut app = app_with_projects();
        let _ = app.update(Message::OpenProject(0));

        assert_eq!(app.screen, Screen::Project(0));
        assert_eq!(current_index(&app), Some(0));
        assert_eq!(app.hub.listener_count_of(ListenerKind::Keyboard), 1);
        assert_eq!(app.hub.listener_count_of(ListenerKind::Touch), 1);
    }

    #[test]
    fn input_messages_drive_navigation() {
        let mut app = app_with_projects();
        let _ = app.update(Message::OpenProject(0));

        let _ = app.update(Message::Input(InputEvent::KeyDown(Key::ArrowLeft)));
        assert_eq!(current_index(&app), Some(2));

        let _ = app.update(Message::Input(InputEvent::TouchStart { x: 300.0 }));
        let _ = app.update(Message::Input(InputEvent::TouchEnd { x: 200.0 }));
        assert_eq!(current_index(&app), Some(0));
    }

    #[test]
    fn click_messages_open_and_close_viewer() {
        let mut app = app_with_projects();
        let _ = app.update(Message::OpenProject(0));

        let _ = app.update(Message::Click(ClickTarget::InlineImage(1)));
        let view = app.project.as_ref().expect("project mounted");
        assert!(view.viewer_open());
        assert_eq!(view.current_index(), Some(1));

        let _ = app.update(Message::Click(ClickTarget::OverlayClose));
        assert!(!app.project.as_ref().expect("project mounted").viewer_open());
    }

    #[test]
    fn finger_release_on_the_picture_after_a_swipe_only_navigates() {
        let mut app = app_with_projects();
        let _ = app.update(Message::OpenProject(0));

        let _ = app.update(Message::Input(InputEvent::TouchStart { x: 300.0 }));
        let _ = app.update(Message::Click(ClickTarget::InlineImage(0)));
        let _ = app.update(Message::Input(InputEvent::TouchEnd { x: 200.0 }));

        let view = app.project.as_ref().expect("project mounted");
        assert!(!view.viewer_open());
        assert_eq!(view.current_index(), Some(1));
    }

    #[test]
    fn finger_release_on_the_backdrop_after_a_swipe_keeps_the_viewer() {
        let mut app = app_with_projects();
        let _ = app.update(Message::OpenProject(0));
        let _ = app.update(Message::Click(ClickTarget::InlineImage(0)));

        let _ = app.update(Message::Input(InputEvent::TouchStart { x: 300.0 }));
        let _ = app.update(Message::Input(InputEvent::TouchEnd { x: 200.0 }));
        let _ = app.update(Message::Click(ClickTarget::OverlayClose));

        let view = app.project.as_ref().expect("project mounted");
        assert!(view.viewer_open());
        assert_eq!(view.current_index(), Some(1));
    }

    #[test]
    fn switching_projects_starts_fresh() {
        let mut app = app_with_projects();
        let _ = app.update(Message::OpenProject(0));
        let _ = app.update(Message::Click(ClickTarget::Indicator(2)));
        let _ = app.update(Message::Click(ClickTarget::InlineImage(2)));

        let _ = app.update(Message::OpenProject(1));
        let view = app.project.as_ref().expect("project mounted");
        assert_eq!(app.screen, Screen::Project(1));
        assert_eq!(view.len(), 2);
        assert_eq!(view.current_index(), Some(0));
        assert!(!view.viewer_open());
        assert_eq!(app.hub.listener_count(), 2);
    }

    #[test]
    fn back_to_list_unmounts_and_ignores_later_input() {
        let mut app = app_with_projects();
        let _ = app.update(Message::OpenProject(0));
        let _ = app.update(Message::BackToList);

        assert_eq!(app.screen, Screen::ProjectList);
        assert!(app.project.is_none());
        assert_eq!(app.hub.listener_count(), 0);

        let _ = app.update(Message::Input(InputEvent::KeyDown(Key::ArrowRight)));
        let _ = app.update(Message::Click(ClickTarget::NextArrow));
        assert!(app.project.is_none());
    }

    #[test]
    fn open_unknown_project_is_ignored() {
        let mut app = app_with_projects();
        let _ = app.update(Message::OpenProject(7));
        assert_eq!(app.screen, Screen::ProjectList);
        assert!(app.project.is_none());
    }

    #[test]
    fn title_names_the_open_project() {
        let mut app = app_with_projects();
        assert_eq!(app.title(), APP_TITLE);
        let _ = app.update(Message::OpenProject(1));
        assert_eq!(app.title(), format!("Dunes - {APP_TITLE}"));
    }

    #[test]
    fn command_line_images_form_a_single_project() {
        let (catalog, warning) = resolve_catalog(
            vec!["a.png".into(), "b.png".into()],
            Some("/ignored/projects.toml".into()),
            &Config::default(),
        );
        assert!(warning.is_none());
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.get(0).map(|p| p.title.as_str()),
            Some(AD_HOC_PROJECT_TITLE)
        );
    }

    #[test]
    fn catalog_flag_is_loaded() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("projects.toml");
        fs::write(&path, "[[project]]\ntitle = \"One\"\nimages = [\"1.jpg\"]\n")
            .expect("failed to write catalog");

        let (catalog, warning) = resolve_catalog(
            Vec::new(),
            Some(path.to_string_lossy().into_owned()),
            &Config::default(),
        );
        assert!(warning.is_none());
        assert_eq!(catalog.get(0).map(|p| p.title.as_str()), Some("One"));
    }

    #[test]
    fn unreadable_catalog_yields_empty_list_and_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut config = Config::default();
        config.catalog.path = Some(temp_dir.path().join("missing.toml"));

        let (catalog, warning) = resolve_catalog(Vec::new(), None, &config);
        assert!(catalog.is_empty());
        assert!(warning.is_some());
    }
}
