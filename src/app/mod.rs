// SPDX-License-Identifier: MPL-2.0
//! Application root state: the stories tray and at most one open viewer.
//!
//! The `App` owns the loaded catalog and the set of viewed items, which
//! outlives individual viewer instances so the tray can mark seen authors.

mod message;

pub use message::{Flags, Message};

use crate::catalog::StoryCatalog;
use crate::config::{self, Config};
use crate::domain::story::AuthorId;
use crate::i18n::I18n;
use crate::story::{Effect, PlaybackObserver, ViewedStories};
use crate::ui::{story_viewer, tray};
use iced::{event, window, Element, Subscription, Task};
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: f32 = 390.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 844.0;
pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Message shown under the tray.
#[derive(Debug, Clone, PartialEq)]
enum Notice {
    NoStories,
    CatalogFailed(String),
    ConfigFailed(String),
}

impl Notice {
    fn localize(&self, i18n: &I18n) -> String {
        match self {
            Notice::NoStories => i18n.tr("notice-no-stories"),
            Notice::CatalogFailed(error) => {
                i18n.tr_with_args("notice-catalog-failed", &[("error", error.as_str())])
            }
            Notice::ConfigFailed(error) => {
                i18n.tr_with_args("notice-config-failed", &[("error", error.as_str())])
            }
        }
    }
}

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    i18n: I18n,
    catalog: StoryCatalog,
    config: Config,
    config_dir: Option<PathBuf>,
    viewed: ViewedStories,
    viewer: Option<story_viewer::State>,
    notice: Option<Notice>,
    window_width: f32,
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            catalog: StoryCatalog::default(),
            config: Config::default(),
            config_dir: None,
            viewed: ViewedStories::new(),
            viewer: None,
            notice: None,
            window_width: WINDOW_DEFAULT_WIDTH,
        }
    }
}

/// Builds the window settings: a phone-sized portrait window.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an Fn boot function; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config and catalog, opening the viewer right away when the
    /// launcher asked for a focus author.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir.clone());
        let mut app = App {
            i18n: I18n::new(flags.lang),
            config,
            config_dir: flags.config_dir,
            ..Self::default()
        };

        if let Some(warning) = config_warning {
            tracing::warn!(%warning, "using default configuration");
            app.notice = Some(Notice::ConfigFailed(warning));
        }

        if let Some(path) = flags.catalog_path {
            match StoryCatalog::load_from_path(&path) {
                Ok(catalog) => app.catalog = catalog,
                Err(err) => {
                    tracing::error!(path = %path.display(), error = %err, "failed to load catalog");
                    app.notice = Some(Notice::CatalogFailed(err.to_string()));
                }
            }
        }

        if let Some(focus) = flags.focus {
            app.open_viewer(Some(AuthorId::new(focus)));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        match self
            .viewer
            .as_ref()
            .and_then(|viewer| viewer.controller().state().current_author())
        {
            Some(author) => self
                .i18n
                .tr_with_args("app-title-author", &[("author", author.display_name.as_str())]),
            None => self.i18n.tr("app-title"),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tray(tray::Message::Open(author)) => self.open_viewer(Some(author)),
            Message::Viewer(message) => {
                if let Some(viewer) = self.viewer.as_mut() {
                    let effects = viewer.update(message);
                    let muted = viewer.controller().state().is_muted();
                    if self.config.playback.start_muted.unwrap_or(false) != muted {
                        self.config.playback.start_muted = Some(muted);
                        self.persist_preferences();
                    }
                    self.apply_effects(effects);
                }
            }
            Message::WindowResized(width) => {
                self.window_width = width;
                if let Some(viewer) = self.viewer.as_mut() {
                    viewer.set_window_width(width);
                }
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        match &self.viewer {
            Some(viewer) => viewer.view(&self.i18n).map(Message::Viewer),
            None => tray::view(
                &self.catalog,
                &self.viewed,
                self.notice.as_ref().map(|notice| notice.localize(&self.i18n)),
                &self.i18n,
            )
            .map(Message::Tray),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let resize = event::listen_with(|event, _status, _window| match event {
            event::Event::Window(window::Event::Resized(size)) => {
                Some(Message::WindowResized(size.width))
            }
            _ => None,
        });

        let viewer = match &self.viewer {
            Some(viewer) => viewer.subscription().map(Message::Viewer),
            None => Subscription::none(),
        };

        Subscription::batch([resize, viewer])
    }

    fn open_viewer(&mut self, focus: Option<AuthorId>) {
        let (viewer, effects) =
            story_viewer::State::open(&self.catalog, focus, &self.config, self.window_width);
        if viewer.playback().is_closed() {
            self.viewer = None;
            self.notice = Some(Notice::NoStories);
            return;
        }
        self.notice = None;
        self.viewer = Some(viewer);
        self.apply_effects(effects);
    }

    /// Writes the current settings, keeping the viewer's last mute choice
    /// for the next session.
    fn persist_preferences(&self) {
        if let Err(error) = config::save_with_override(&self.config, self.config_dir.clone()) {
            tracing::warn!(%error, "failed to save config");
        }
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            self.viewed.notify(&effect);
            if effect.closes_viewer() {
                tracing::debug!(?effect, "story viewer closed");
                self.viewer = None;
            }
        }
    }

    #[must_use]
    pub fn is_viewer_open(&self) -> bool {
        self.viewer.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::story::ItemId;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    const CATALOG: &str = r#"
        viewer_id = "me"
        following = ["a"]

        [[authors]]
        id = "a"
        display_name = "jessica_m"

        [[authors.items]]
        id = "a1"
        url = "https://cdn.example/a1.jpg"

        [[authors]]
        id = "b"
        display_name = "not_followed"
    "#;

    fn app_with_catalog() -> (App, TempDir) {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("catalog.toml");
        fs::write(&path, CATALOG).expect("write catalog");
        let (app, _task) = App::new(Flags {
            lang: Some("en-US".to_string()),
            catalog_path: Some(path),
            focus: None,
            config_dir: Some(dir.path().to_path_buf()),
        });
        (app, dir)
    }

    #[test]
    fn opening_from_tray_marks_item_viewed() {
        let (mut app, _dir) = app_with_catalog();
        let _ = app.update(Message::Tray(tray::Message::Open(AuthorId::new("a"))));
        assert!(app.is_viewer_open());
        assert!(app.viewed.contains(&ItemId::new("a1")));
    }

    #[test]
    fn closing_viewer_returns_to_tray() {
        let (mut app, _dir) = app_with_catalog();
        let _ = app.update(Message::Tray(tray::Message::Open(AuthorId::new("a"))));
        let _ = app.update(Message::Viewer(story_viewer::Message::Close));
        assert!(!app.is_viewer_open());
    }

    #[test]
    fn advancing_past_end_closes_viewer() {
        let (mut app, _dir) = app_with_catalog();
        let _ = app.update(Message::Tray(tray::Message::Open(AuthorId::new("a"))));
        for _ in 0..50 {
            let _ = app.update(Message::Viewer(story_viewer::Message::Tick));
        }
        assert!(!app.is_viewer_open());
    }

    #[test]
    fn focus_on_author_without_items_shows_notice() {
        let (mut app, _dir) = app_with_catalog();
        app.catalog.authors.remove(0);
        let _ = app.update(Message::Tray(tray::Message::Open(AuthorId::new("b"))));
        assert!(!app.is_viewer_open());
        assert_eq!(app.notice, Some(Notice::NoStories));
        assert_eq!(
            app.notice.as_ref().map(|notice| notice.localize(&app.i18n)),
            Some("No stories to show".to_string())
        );
    }

    #[test]
    fn missing_catalog_is_reported() {
        let dir = tempdir().expect("temp dir");
        let (app, _task) = App::new(Flags {
            lang: Some("en-US".to_string()),
            catalog_path: Some(dir.path().join("missing.toml")),
            focus: None,
            config_dir: Some(dir.path().to_path_buf()),
        });
        assert!(matches!(app.notice, Some(Notice::CatalogFailed(_))));
        assert!(app.catalog.authors.is_empty());
    }

    #[test]
    fn mute_choice_is_saved_for_next_session() {
        let (mut app, dir) = app_with_catalog();
        let _ = app.update(Message::Tray(tray::Message::Open(AuthorId::new("a"))));
        let _ = app.update(Message::Viewer(story_viewer::Message::ToggleMute));

        let (saved, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(saved.playback.start_muted, Some(true));

        let _ = app.update(Message::Viewer(story_viewer::Message::Close));
        let _ = app.update(Message::Tray(tray::Message::Open(AuthorId::new("a"))));
        let reopened = app.viewer.as_ref().expect("viewer reopened");
        assert!(reopened.controller().state().is_muted());
    }

    #[test]
    fn navigation_does_not_write_settings() {
        let (mut app, dir) = app_with_catalog();
        let _ = app.update(Message::Tray(tray::Message::Open(AuthorId::new("a"))));
        let _ = app.update(Message::Viewer(story_viewer::Message::TogglePause));
        assert!(!dir.path().join("settings.toml").exists());
    }
}
