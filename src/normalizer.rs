// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Transformation logic that converts a raw [`CardConfig`] into validated
//! [`CardSettings`].
//!
//! Normalization applies defaults, resolves the locale and theme, and
//! rejects values that cannot produce a card. The resulting settings carry
//! everything the aggregation and layout engines need.

use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    fs,
    path::Path,
};

use tracing::{debug, warn};

use crate::{
    aggregate::{AggregateOptions, DEFAULT_MAX_LANGUAGES},
    color::{self, MIN_TEXT_CONTRAST},
    config::{CardConfig, CardOptions, LanguageOptions},
    error::{self, Error},
    layout::{DEFAULT_ANIMATION_MS, DEFAULT_BORDER_RADIUS, DEFAULT_FONT_SIZE, DEFAULT_TITLE_SIZE, Dimension, RenderOptions},
    locale::{self, DEFAULT_LOCALE},
    stats::Category,
    theme::{DEFAULT_THEME, KEY_BACKGROUND, KEY_ICONS, KEY_TEXT, KEY_TITLE, Theme},
};

/// Theme name selecting a palette given entirely by `colors`.
pub const CUSTOM_THEME: &str = "custom";
const DEFAULT_COLUMNS: u8 = 1;

/// Validated card settings.
#[derive(Debug, Clone, PartialEq,)]
pub struct CardSettings
{
    /// Supported locale code.
    pub locale:     &'static str,
    /// Resolved palette.
    pub theme:      Theme,
    /// Categories in rendering order, without duplicates.
    pub categories: Vec<Category,>,
    /// Aggregation options.
    pub aggregate:  AggregateOptions,
    /// Layout options.
    pub render:     RenderOptions,
}

/// Loads card settings from the provided YAML configuration file path.
///
/// # Errors
///
/// Returns an [`Error`] when the file cannot be read, the YAML cannot be
/// deserialized, or the configuration cannot be normalized.
pub fn load_config(path: &Path,) -> Result<CardSettings, Error,>
{
    let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
    parse_config(&contents,)
}

/// Parses card settings from the provided YAML document string.
///
/// An empty document yields the default card.
///
/// # Errors
///
/// Propagates [`Error::Parse`](Error::Parse) when the YAML cannot be decoded
/// and the errors of [`normalize_config`].
pub fn parse_config(contents: &str,) -> Result<CardSettings, Error,>
{
    let config: CardConfig =
        if contents.trim().is_empty() { CardConfig::default() } else { serde_yaml::from_str(contents,)? };
    normalize_config(&config,)
}

/// Applies defaults and validates a configuration document.
///
/// # Errors
///
/// Returns [`Error::UnsupportedLocale`], [`Error::UnknownTheme`],
/// [`Error::MissingThemeKey`] or [`Error::InvalidColor`] when the locale or
/// theme cannot be resolved, and [`Error::Validation`](Error::Validation)
/// for empty category lists or zero font sizes.
pub fn normalize_config(config: &CardConfig,) -> Result<CardSettings, Error,>
{
    let locale = locale::lookup(config.locale.as_deref().unwrap_or(DEFAULT_LOCALE,).trim(),)?.code;
    let theme = resolve_theme(config.theme.as_deref().unwrap_or(DEFAULT_THEME,).trim(), &config.colors,)?;
    let categories = normalize_categories(config.categories.as_deref(),)?;
    let aggregate = normalize_aggregate(config.languages.as_ref(), config.featured_repository.as_deref(),);
    let render = normalize_render(config.card.as_ref(),)?;

    Ok(CardSettings {
        locale,
        theme,
        categories,
        aggregate,
        render,
    },)
}

fn resolve_theme(name: &str, overrides: &BTreeMap<String, String,>,) -> Result<Theme, Error,>
{
    let theme = if name == CUSTOM_THEME {
        Theme::from_map(&complete_custom_palette(overrides,)?,)?
    } else {
        let mut map = Theme::builtin(name,)?.to_map();
        map.extend(overrides.iter().map(|(key, value,)| (key.clone(), value.clone(),),),);
        Theme::from_map(&map,)?
    };

    let contrast = theme.min_text_contrast()?;
    if contrast < MIN_TEXT_CONTRAST {
        warn!("theme '{name}' text contrast {contrast:.2} is below {MIN_TEXT_CONTRAST}");
    }
    Ok(theme,)
}

/// Fills the icon, text and title colors of a custom palette that omits
/// them with the foreground that contrasts most with its background.
fn complete_custom_palette(colors: &BTreeMap<String, String,>,) -> Result<BTreeMap<String, String,>, Error,>
{
    let mut map = colors.clone();
    let Some(background,) = colors.get(KEY_BACKGROUND,) else {
        return Err(Error::MissingThemeKey {
            key: KEY_BACKGROUND.to_owned(),
        },);
    };

    let foreground = color::high_contrasting_color(background,)?;
    for key in [KEY_ICONS, KEY_TEXT, KEY_TITLE,] {
        map.entry(key.to_owned(),).or_insert_with(|| {
            debug!("custom theme derives '{key}' as {foreground}");
            foreground.to_owned()
        },);
    }
    Ok(map,)
}

fn normalize_categories(categories: Option<&[Category],>,) -> Result<Vec<Category,>, Error,>
{
    let Some(categories,) = categories else {
        return Ok(Category::ALL.to_vec(),);
    };
    if categories.is_empty() {
        return Err(Error::validation("categories must name at least one category",),);
    }

    let mut seen = HashSet::new();
    Ok(categories.iter().copied().filter(|category| seen.insert(*category,),).collect(),)
}

fn normalize_aggregate(languages: Option<&LanguageOptions,>, featured: Option<&str,>,) -> AggregateOptions
{
    let excluded_repositories: BTreeSet<String,> = languages
        .map(|options| options.exclude_repositories.as_slice(),)
        .unwrap_or_default()
        .iter()
        .map(|name| name.trim(),)
        .filter(|name| !name.is_empty(),)
        .map(str::to_owned,)
        .collect();

    AggregateOptions {
        auto_languages: languages.and_then(|options| options.auto,).unwrap_or(false,),
        max_languages: languages
            .and_then(|options| options.max,)
            .unwrap_or(DEFAULT_MAX_LANGUAGES,)
            .max(1,),
        excluded_repositories,
        featured_repository: non_empty(featured,),
    }
}

fn normalize_render(card: Option<&CardOptions,>,) -> Result<RenderOptions, Error,>
{
    let font_size = card.and_then(|card| card.font_size,).map_or(Ok(DEFAULT_FONT_SIZE,), |size| {
        positive(size, "card.font_size",)
    },)?;
    let title_size = card.and_then(|card| card.title_size,).map_or(Ok(DEFAULT_TITLE_SIZE,), |size| {
        positive(size, "card.title_size",)
    },)?;
    let animation_speed_ms =
        card.and_then(|card| card.animation_speed_ms,).unwrap_or(DEFAULT_ANIMATION_MS,);
    if animation_speed_ms == 0 {
        return Err(Error::validation("card.animation_speed_ms must be positive",),);
    }

    Ok(RenderOptions {
        font_size,
        title_size,
        border_radius: card
            .and_then(|card| card.border_radius,)
            .map_or(DEFAULT_BORDER_RADIUS, f64::from,),
        width: Dimension::from_pixels(card.and_then(|card| card.width,).unwrap_or(0,),),
        height: Dimension::from_pixels(card.and_then(|card| card.height,).unwrap_or(0,),),
        columns: usize::from(card.and_then(|card| card.columns,).unwrap_or(DEFAULT_COLUMNS,),),
        include_title: card.and_then(|card| card.include_title,).unwrap_or(true,),
        custom_title: non_empty(card.and_then(|card| card.custom_title.as_deref(),),),
        hidden: card.map(|card| card.hide.iter().copied().collect(),).unwrap_or_default(),
        animate_languages: card.and_then(|card| card.animate_languages,).unwrap_or(false,),
        animation_speed_ms,
    },)
}

fn positive(value: u8, field: &str,) -> Result<f64, Error,>
{
    if value == 0 {
        return Err(Error::validation(format!("{field} must be positive"),),);
    }
    Ok(f64::from(value,),)
}

fn non_empty(value: Option<&str,>,) -> Option<String,>
{
    value.map(str::trim,).filter(|value| !value.is_empty(),).map(str::to_owned,)
}
