// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Configuration document types describing a stat card.
//!
//! The types mirror the YAML document consumed by the CLI. Every value is
//! optional so that a minimal document renders the default card; the
//! [`crate::normalizer`] module applies defaults and cross-field validation.
//! Range constraints that do not depend on other fields are enforced during
//! deserialization.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::stats::{Category, StatKey};

/// Root configuration document.
///
/// # Examples
///
/// ```
/// use statcard::CardConfig;
///
/// let yaml = r#"
/// theme: dark
/// languages:
///   max: 5
///   exclude_repositories: [dotfiles]
/// card:
///   columns: 2
///   hide: [sponsoring]
/// "#;
/// let config: CardConfig = serde_yaml::from_str(yaml,).expect("valid configuration",);
/// assert_eq!(config.theme.as_deref(), Some("dark"));
/// assert_eq!(config.card.and_then(|card| card.columns,), Some(2));
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq,)]
#[serde(deny_unknown_fields)]
pub struct CardConfig
{
    /// Locale code of labels and headings.
    #[serde(default)]
    pub locale: Option<String,>,

    /// Builtin theme name, or `custom` for a palette given in `colors`.
    #[serde(default)]
    pub theme: Option<String,>,

    /// Theme map entries overriding the selected theme.
    #[serde(default)]
    pub colors: BTreeMap<String, String,>,

    /// Categories in rendering order.
    #[serde(default)]
    pub categories: Option<Vec<Category,>,>,

    /// Repository featured in the general category.
    #[serde(default, alias = "featured-repository", alias = "featuredRepository")]
    pub featured_repository: Option<String,>,

    /// Language distribution options.
    #[serde(default)]
    pub languages: Option<LanguageOptions,>,

    /// Card geometry options.
    #[serde(default)]
    pub card: Option<CardOptions,>,
}

/// Controls which repositories and languages are counted.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq,)]
#[serde(deny_unknown_fields)]
pub struct LanguageOptions
{
    /// Drop languages whose share would display as `0.0%`.
    #[serde(default)]
    pub auto: Option<bool,>,

    /// Maximum number of languages; values below one are treated as one.
    #[serde(default)]
    pub max: Option<usize,>,

    /// Repository names excluded from repository and language statistics.
    #[serde(default, alias = "exclude")]
    pub exclude_repositories: Vec<String,>,
}

/// Card geometry and presentation overrides.
///
/// Values outside the documented ranges are rejected during
/// deserialization.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq,)]
#[serde(deny_unknown_fields)]
pub struct CardOptions
{
    /// Border corner radius, constrained to the range `0..=32` pixels.
    #[serde(default, deserialize_with = "deserialize_optional_border_radius")]
    pub border_radius: Option<u8,>,

    /// Title font size in pixels.
    #[serde(default)]
    pub title_size: Option<u8,>,

    /// Row font size in pixels.
    #[serde(default)]
    pub font_size: Option<u8,>,

    /// Canvas width in pixels, `0` for automatic.
    #[serde(default)]
    pub width: Option<u32,>,

    /// Canvas height in pixels, `0` for automatic.
    #[serde(default)]
    pub height: Option<u32,>,

    /// Categories per grid row, constrained to the range `1..=4`.
    #[serde(default, deserialize_with = "deserialize_optional_columns")]
    pub columns: Option<u8,>,

    /// Whether the title line is drawn.
    #[serde(default)]
    pub include_title: Option<bool,>,

    /// Title text replacing the localized template.
    #[serde(default)]
    pub custom_title: Option<String,>,

    /// Statistics never rendered.
    #[serde(default)]
    pub hide: Vec<StatKey,>,

    /// Whether the language bar grows in when the card loads.
    #[serde(default)]
    pub animate_languages: Option<bool,>,

    /// Duration of the language bar animation in milliseconds.
    #[serde(default)]
    pub animation_speed_ms: Option<u32,>,
}

fn deserialize_optional_columns<'de, D,>(deserializer: D,) -> Result<Option<u8,>, D::Error,>
where
    D: serde::Deserializer<'de,>,
{
    let value: Option<u8,> = Option::deserialize(deserializer,)?;
    if let Some(columns,) = value
        && (columns == 0 || columns > 4)
    {
        return Err(serde::de::Error::custom("card.columns must be between 1 and 4",),);
    }
    Ok(value,)
}

fn deserialize_optional_border_radius<'de, D,>(deserializer: D,) -> Result<Option<u8,>, D::Error,>
where
    D: serde::Deserializer<'de,>,
{
    let value: Option<u8,> = Option::deserialize(deserializer,)?;
    if let Some(radius,) = value
        && radius > 32
    {
        return Err(serde::de::Error::custom("card.border_radius must not exceed 32",),);
    }
    Ok(value,)
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn empty_document_is_valid()
    {
        let config: CardConfig = serde_yaml::from_str("{}",).expect("valid configuration",);
        assert_eq!(config, CardConfig::default());
    }

    #[test]
    fn parses_full_document()
    {
        let yaml = r##"
locale: de
theme: custom
colors:
  bg: "#101010"
  title-icon: bat
categories: [languages, general]
featured-repository: pet
languages:
  auto: true
  max: 3
  exclude: [dotfiles]
card:
  border_radius: 10
  title_size: 20
  font_size: 12
  width: 600
  height: 0
  columns: 4
  include_title: false
  custom_title: Stats
  hide: [mostForked, contribTo]
  animate_languages: true
  animation_speed_ms: 1200
"##;
        let config: CardConfig = serde_yaml::from_str(yaml,).expect("valid configuration",);

        assert_eq!(config.locale.as_deref(), Some("de"));
        assert_eq!(config.colors.get("title-icon").map(String::as_str), Some("bat"));
        assert_eq!(config.categories, Some(vec![Category::Languages, Category::General]));
        assert_eq!(config.featured_repository.as_deref(), Some("pet"));

        let languages = config.languages.expect("language options",);
        assert_eq!(languages.max, Some(3));
        assert_eq!(languages.exclude_repositories, vec!["dotfiles".to_owned()]);

        let card = config.card.expect("card options",);
        assert_eq!(card.columns, Some(4));
        assert_eq!(card.hide, vec![StatKey::MostForked, StatKey::ContribTo]);
        assert_eq!(card.animation_speed_ms, Some(1200));
    }

    #[test]
    fn rejects_unknown_fields()
    {
        let error = serde_yaml::from_str::<CardConfig,>("card:\n  colour: red\n",)
            .expect_err("unknown field",);
        assert!(error.to_string().contains("colour"));
    }

    #[test]
    fn rejects_columns_out_of_range()
    {
        for columns in ["0", "5"] {
            let yaml = format!("card:\n  columns: {columns}\n");
            let error = serde_yaml::from_str::<CardConfig,>(&yaml,).expect_err("columns out of range",);
            assert!(error.to_string().contains("card.columns must be between 1 and 4"));
        }
    }

    #[test]
    fn rejects_border_radius_out_of_range()
    {
        let error = serde_yaml::from_str::<CardConfig,>("card:\n  border_radius: 33\n",)
            .expect_err("radius out of range",);
        assert!(error.to_string().contains("card.border_radius must not exceed 32"));
    }

    #[test]
    fn rejects_unknown_statistic_keys()
    {
        assert!(serde_yaml::from_str::<CardConfig,>("card:\n  hide: [karma]\n",).is_err());
    }
}
