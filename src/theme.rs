// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Card color themes.
//!
//! A theme is a complete palette plus the key of the icon shown next to the
//! card title. Builtin palettes follow GitHub's Primer color modes, with a
//! few seasonal extras.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{color, error::Error};

/// Theme map key for the background color.
pub const KEY_BACKGROUND: &str = "bg";
/// Theme map key for the border color.
pub const KEY_BORDER: &str = "border";
/// Theme map key for the icon color.
pub const KEY_ICONS: &str = "icons";
/// Theme map key for the text color.
pub const KEY_TEXT: &str = "text";
/// Theme map key for the title color.
pub const KEY_TITLE: &str = "title";
/// Theme map key for the title icon.
pub const KEY_TITLE_ICON: &str = "title-icon";

/// Every key a theme map must provide.
pub const REQUIRED_KEYS: [&str; 6] =
    [KEY_BACKGROUND, KEY_BORDER, KEY_ICONS, KEY_TEXT, KEY_TITLE, KEY_TITLE_ICON,];

/// Resolved card palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct Theme
{
    /// Card background.
    pub background: String,
    /// Card border.
    pub border:     String,
    /// Statistic icons.
    pub icons:      String,
    /// Labels and values.
    pub text:       String,
    /// Title and headings.
    pub title:      String,
    /// Icon key shown before the title.
    pub title_icon: String,
}

struct Palette
{
    name:       &'static str,
    background: &'static str,
    border:     &'static str,
    icons:      &'static str,
    text:       &'static str,
    title:      &'static str,
    title_icon: &'static str,
}

const fn palette(
    name: &'static str,
    colors: [&'static str; 5],
    title_icon: &'static str,
) -> Palette
{
    let [background, border, icons, text, title,] = colors;
    Palette {
        name,
        background,
        border,
        icons,
        text,
        title,
        title_icon,
    }
}

const LIGHT: [&str; 5] = ["#ffffff", "#d0d7de", "#57606a", "#24292f", "#0969da",];
const DARK: [&str; 5] = ["#0d1117", "#30363d", "#8b949e", "#c9d1d9", "#58a6ff",];

const BUILTIN: [Palette; 12] = [
    palette("light", LIGHT, "github",),
    palette("light-colorblind", LIGHT, "github",),
    palette("light-tritanopia", LIGHT, "github",),
    palette("light-high-contrast", ["#ffffff", "#20252c", "#0e1116", "#0e1116", "#0349b4",], "github",),
    palette("dark", DARK, "github",),
    palette("dark-colorblind", DARK, "github",),
    palette("dark-tritanopia", DARK, "github",),
    palette("dark-dimmed", ["#22272e", "#444c56", "#768390", "#adbac7", "#539bf5",], "github",),
    palette("dark-high-contrast", ["#0a0c10", "#7a828e", "#f0f3f6", "#f0f3f6", "#71b7ff",], "github",),
    palette("halloween", ["#090d13", "#ff7518", "#ff7518", "#f0f3f6", "#ff9a00",], "pumpkin",),
    palette("halloween-light", ["#fff8eb", "#ff7518", "#bd561d", "#2c1a0e", "#9a3d00",], "pumpkin",),
    palette("batty", ["#1b1521", "#6e5494", "#b39ddb", "#e8e0f0", "#c9a8ff",], "bat",),
];

/// Theme used when the configuration names none.
pub const DEFAULT_THEME: &str = "light";

/// Names of the builtin themes in table order.
pub fn builtin_names() -> impl Iterator<Item = &'static str,>
{
    BUILTIN.iter().map(|palette| palette.name,)
}

impl Theme
{
    /// Looks up a builtin theme by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTheme`] when no builtin theme has that name.
    pub fn builtin(name: &str,) -> Result<Self, Error,>
    {
        BUILTIN
            .iter()
            .find(|palette| palette.name == name,)
            .map(|palette| Self {
                background: palette.background.to_owned(),
                border:     palette.border.to_owned(),
                icons:      palette.icons.to_owned(),
                text:       palette.text.to_owned(),
                title:      palette.title.to_owned(),
                title_icon: palette.title_icon.to_owned(),
            },)
            .ok_or_else(|| Error::UnknownTheme {
                name: name.to_owned(),
            },)
    }

    /// Builds a theme from a key/value map.
    ///
    /// Every key of [`REQUIRED_KEYS`] must be present and every color must
    /// pass [`color::is_valid_color`]. Extra keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingThemeKey`] for the first absent key and
    /// [`Error::InvalidColor`] for a malformed color.
    pub fn from_map(map: &BTreeMap<String, String,>,) -> Result<Self, Error,>
    {
        let read_color = |key: &str| -> Result<String, Error,> {
            let value = required(map, key,)?;
            if color::is_valid_color(value,) {
                Ok(value.to_owned(),)
            } else {
                Err(Error::InvalidColor {
                    value: value.to_owned(),
                },)
            }
        };

        Ok(Self {
            background: read_color(KEY_BACKGROUND,)?,
            border:     read_color(KEY_BORDER,)?,
            icons:      read_color(KEY_ICONS,)?,
            text:       read_color(KEY_TEXT,)?,
            title:      read_color(KEY_TITLE,)?,
            title_icon: required(map, KEY_TITLE_ICON,)?.to_owned(),
        },)
    }

    /// Converts the theme back into its key/value map.
    pub fn to_map(&self,) -> BTreeMap<String, String,>
    {
        [
            (KEY_BACKGROUND, &self.background,),
            (KEY_BORDER, &self.border,),
            (KEY_ICONS, &self.icons,),
            (KEY_TEXT, &self.text,),
            (KEY_TITLE, &self.title,),
            (KEY_TITLE_ICON, &self.title_icon,),
        ]
        .into_iter()
        .map(|(key, value,)| (key.to_owned(), value.clone(),),)
        .collect()
    }

    /// Lowest contrast of text and title against the background.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] when a color cannot be parsed.
    pub fn min_text_contrast(&self,) -> Result<f64, Error,>
    {
        let text = color::contrast_ratio(&self.background, &self.text,)?;
        let title = color::contrast_ratio(&self.background, &self.title,)?;
        Ok(text.min(title,),)
    }
}

fn required<'a,>(map: &'a BTreeMap<String, String,>, key: &str,) -> Result<&'a str, Error,>
{
    map.get(key,).map(String::as_str,).ok_or_else(|| Error::MissingThemeKey {
        key: key.to_owned(),
    },)
}
