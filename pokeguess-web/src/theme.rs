//! Dark and light style bundles.
//!
//! Every themed surface of the capture dialog is listed here so switching
//! the flag swaps the whole palette at once.

use pokeguess_game::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub panel: &'static str,
    pub title: &'static str,
    pub glow: &'static str,
    pub name: &'static str,
    pub tile: &'static str,
    pub tile_label: &'static str,
    pub tile_value: &'static str,
    pub secondary_button: &'static str,
}

pub const DARK: ThemePalette = ThemePalette {
    panel: "bg-gray-900 border-2 border-green-600",
    title: "text-gray-100",
    glow: "bg-green-700/30",
    name: "text-green-400",
    tile: "bg-gray-700 shadow-black/20",
    tile_label: "text-green-300",
    tile_value: "text-gray-300",
    secondary_button: "bg-gray-700 hover:bg-gray-600 text-gray-200 border-gray-600",
};

pub const LIGHT: ThemePalette = ThemePalette {
    panel: "bg-white border-2 border-green-500",
    title: "text-gray-800",
    glow: "bg-green-100/50",
    name: "text-green-600",
    tile: "bg-gray-100 shadow-gray-200",
    tile_label: "text-green-600",
    tile_value: "text-gray-700",
    secondary_button: "bg-gray-200 hover:bg-gray-300 text-gray-800 border-gray-300",
};

#[must_use]
pub const fn palette(theme: Theme) -> &'static ThemePalette {
    match theme {
        Theme::Dark => &DARK,
        Theme::Light => &LIGHT,
    }
}

const THEME_KEY: &str = "pokeguess.theme";

/// Theme saved by a previous session, if any.
#[must_use]
pub fn saved_theme() -> Option<Theme> {
    crate::dom::load_pref(THEME_KEY).and_then(|raw| match raw.parse() {
        Ok(theme) => Some(theme),
        Err(err) => {
            log::debug!("Discarding saved theme: {err}");
            None
        }
    })
}

pub fn save_theme(theme: Theme) {
    crate::dom::store_pref(THEME_KEY, theme.as_str());
}
