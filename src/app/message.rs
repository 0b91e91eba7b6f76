// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{story_viewer, tray};
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Tray(tray::Message),
    Viewer(story_viewer::Message),
    /// The window was resized to this width.
    WindowResized(f32),
}

/// Runtime flags passed in from the launcher.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Catalog file describing authors and follows.
    pub catalog_path: Option<PathBuf>,
    /// Author to open the viewer on at startup.
    pub focus: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `CHEKMATE_STORIES_CONFIG_DIR` environment variable.
    pub config_dir: Option<PathBuf>,
}
