use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::common::storage::{get_local_storage, set_local_storage};

// stored as "folio_theme"
pub const THEME_KEY: &str = "theme";

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    // the order the toggle walks through
    pub fn next(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::System,
            Theme::System => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::System => "System",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        })
    }
}

// where the theme comes from: a stored preference, falling back to whatever
// the operating system says
pub trait DisplayContext {
    fn stored_theme(&self) -> Option<Theme>;

    fn prefers_dark(&self) -> bool;
}

pub fn resolve_theme(ctx: Option<&dyn DisplayContext>) -> Theme {
    match ctx {
        None => Theme::System,
        Some(ctx) => ctx.stored_theme().unwrap_or(if ctx.prefers_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }),
    }
}

// whether the page should actually be drawn dark
pub fn is_dark(theme: Theme, ctx: Option<&dyn DisplayContext>) -> bool {
    match theme {
        Theme::Light => false,
        Theme::Dark => true,
        Theme::System => ctx.is_some_and(|ctx| ctx.prefers_dark()),
    }
}

pub struct BrowserDisplay {
    window: web_sys::Window,
}

impl BrowserDisplay {
    pub fn current() -> Option<Self> {
        web_sys::window().map(|window| BrowserDisplay { window })
    }

    pub fn store_theme(&self, theme: Theme) {
        set_local_storage(THEME_KEY, theme);
    }
}

impl DisplayContext for BrowserDisplay {
    fn stored_theme(&self) -> Option<Theme> {
        // storage failures are already on the console
        get_local_storage::<Theme>(THEME_KEY).ok().flatten()
    }

    fn prefers_dark(&self) -> bool {
        match self.window.match_media(DARK_QUERY) {
            Ok(Some(query)) => query.matches(),
            Ok(None) => false,
            Err(err) => {
                warn!({ error = ?err }, "color scheme query failed");
                false
            }
        }
    }
}
