// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Aggregates GitHub activity into statistics and renders them as SVG cards.
//!
//! The library is organised as a pipeline. Paginated GraphQL pages
//! ([`pages`]) are folded into a [`StatisticsModel`] by [`aggregate`], which
//! is a pure function of the pages and the [`AggregateOptions`]. The
//! [`layout`] engine then measures text with [`measure`], places categories
//! on a grid and [`render`] serializes the result as a deterministic SVG
//! document. Card appearance is described by a YAML [`CardConfig`] that
//! [`load_config`] validates into [`CardSettings`]. The [`fetch`] module
//! collects pages from the GitHub API.

mod aggregate;
mod color;
mod config;
mod error;
pub mod fetch;
pub mod icons;
pub mod layout;
pub mod locale;
mod normalizer;
pub mod pages;
mod stats;
mod svg;
mod text;
mod theme;

pub use aggregate::{
    AggregateOptions, DEFAULT_MAX_LANGUAGES, FALLBACK_LANGUAGE_COLOR, aggregate, aggregate_results,
};
pub use color::{
    DARK_FOREGROUND, LIGHT_FOREGROUND, MIN_TEXT_CONTRAST, Rgb, contrast_ratio, high_contrasting_color,
    is_valid_color,
};
pub use config::{CardConfig, CardOptions, LanguageOptions};
pub use error::{Error, io_error, svg_io_error, write_io_error};
pub use layout::{Dimension, RenderModel, RenderOptions};
pub use normalizer::{CUSTOM_THEME, CardSettings, load_config, normalize_config, parse_config};
pub use pages::{QueryResults, load_query_results, parse_query_results, write_query_results};
pub use stats::{
    Category, ContribStats, LanguageShare, LanguageStats, RepoStats, StatKey, StatPair, StatValue,
    StatisticsModel, UserStats,
};
pub use svg::{render, write_card};
pub use text::{BOLD_THRESHOLD, FontWeight, measure};
pub use theme::{
    DEFAULT_THEME, KEY_BACKGROUND, KEY_BORDER, KEY_ICONS, KEY_TEXT, KEY_TITLE, KEY_TITLE_ICON,
    REQUIRED_KEYS, Theme, builtin_names,
};
