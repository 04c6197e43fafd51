// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Card geometry.
//!
//! [`layout`] turns a [`StatisticsModel`] into a [`RenderModel`]: one block
//! per rendered category, each with its heading, rows and value columns
//! measured through [`crate::text::measure`], arranged on a grid and wrapped
//! in a canvas that grows to fit when sized automatically. Block contents
//! use coordinates relative to the block origin; block origins, the title
//! and the canvas use card coordinates.

use std::collections::{BTreeSet, HashSet};

use tracing::{debug, warn};

use crate::{
    error::Error,
    icons::{self, Icon},
    locale::LocaleTable,
    stats::{Category, StatKey, StatValue, StatisticsModel},
    text::{FontWeight, measure},
    theme::Theme,
};

/// Default row font size in pixels.
pub const DEFAULT_FONT_SIZE: f64 = 14.0;
/// Default title font size in pixels.
pub const DEFAULT_TITLE_SIZE: f64 = 18.0;
/// Default corner radius of the card border.
pub const DEFAULT_BORDER_RADIUS: f64 = 6.0;
/// Largest number of categories placed side by side.
pub const MAX_COLUMNS: usize = 4;
/// Default duration of the language bar animation.
pub const DEFAULT_ANIMATION_MS: u32 = 3000;

/// Requested canvas extent.
#[derive(Debug, Clone, Copy, PartialEq, Default,)]
pub enum Dimension
{
    /// Grow to fit the content.
    #[default]
    Auto,
    /// Use exactly this many pixels.
    Fixed(f64,),
}

impl Dimension
{
    /// Interprets a configured pixel count, where `0` means automatic.
    pub fn from_pixels(pixels: u32,) -> Self
    {
        if pixels == 0 { Self::Auto } else { Self::Fixed(f64::from(pixels,),) }
    }

    fn resolve(self, required: f64,) -> f64
    {
        match self {
            Self::Auto => required,
            Self::Fixed(pixels,) => {
                if pixels < required {
                    warn!("fixed dimension {pixels}px is smaller than the {required:.1}px content");
                }
                pixels
            }
        }
    }
}

/// Presentation options of a card.
#[derive(Debug, Clone, PartialEq,)]
pub struct RenderOptions
{
    /// Font size of rows, in pixels.
    pub font_size:          f64,
    /// Font size of the title, in pixels.
    pub title_size:         f64,
    /// Corner radius of the card border.
    pub border_radius:      f64,
    /// Canvas width.
    pub width:              Dimension,
    /// Canvas height.
    pub height:             Dimension,
    /// Categories per grid row, clamped to `1..=MAX_COLUMNS`.
    pub columns:            usize,
    /// Whether the title line is drawn.
    pub include_title:      bool,
    /// Title text replacing the localized template.
    pub custom_title:       Option<String,>,
    /// Statistics that never produce a row.
    pub hidden:             BTreeSet<StatKey,>,
    /// Whether the language bar grows in when the card loads.
    pub animate_languages:  bool,
    /// Duration of the language bar animation.
    pub animation_speed_ms: u32,
}

impl Default for RenderOptions
{
    fn default() -> Self
    {
        Self {
            font_size:          DEFAULT_FONT_SIZE,
            title_size:         DEFAULT_TITLE_SIZE,
            border_radius:      DEFAULT_BORDER_RADIUS,
            width:              Dimension::Auto,
            height:             Dimension::Auto,
            columns:            1,
            include_title:      true,
            custom_title:       None,
            hidden:             BTreeSet::new(),
            animate_languages:  false,
            animation_speed_ms: DEFAULT_ANIMATION_MS,
        }
    }
}

/// A measured piece of text. `y` is the baseline.
#[derive(Debug, Clone, PartialEq,)]
pub struct TextSpan
{
    /// Unescaped text.
    pub text:  String,
    /// Left edge.
    pub x:     f64,
    /// Baseline.
    pub y:     f64,
    /// Estimated width.
    pub width: f64,
}

/// Icon placement.
#[derive(Debug, Clone, PartialEq,)]
pub struct IconPlacement
{
    /// Icon descriptor.
    pub icon: &'static Icon,
    /// Left edge.
    pub x:    f64,
    /// Top edge.
    pub y:    f64,
    /// Edge length.
    pub size: f64,
}

/// Title line of the card.
#[derive(Debug, Clone, PartialEq,)]
pub struct TitleLayout
{
    /// Theme title icon.
    pub icon: IconPlacement,
    /// Title text.
    pub text: TextSpan,
}

/// One statistic row.
#[derive(Debug, Clone, PartialEq,)]
pub struct RowLayout
{
    /// Statistic shown by the row.
    pub key:    StatKey,
    /// Row icon.
    pub icon:   IconPlacement,
    /// Localized label.
    pub label:  TextSpan,
    /// One span per value column.
    pub values: Vec<TextSpan,>,
}

/// One bar segment.
#[derive(Debug, Clone, PartialEq,)]
pub struct LanguageSegment
{
    /// Language name.
    pub name:  String,
    /// Fill color.
    pub color: String,
    /// Left edge.
    pub x:     f64,
    /// Segment width.
    pub width: f64,
}

/// One legend entry.
#[derive(Debug, Clone, PartialEq,)]
pub struct LegendEntry
{
    /// Swatch color.
    pub color:  String,
    /// Swatch center x.
    pub cx:     f64,
    /// Swatch center y.
    pub cy:     f64,
    /// Swatch radius.
    pub radius: f64,
    /// `Name 12.3%` text.
    pub text:   TextSpan,
}

/// Language bar plus legend.
#[derive(Debug, Clone, PartialEq,)]
pub struct LanguageChart
{
    /// Bar top edge.
    pub bar_y:      f64,
    /// Bar width; segments fill it.
    pub bar_width:  f64,
    /// Bar height.
    pub bar_height: f64,
    /// Segments in ranked order.
    pub segments:   Vec<LanguageSegment,>,
    /// Legend entries in ranked order, filled row by row.
    pub legend:     Vec<LegendEntry,>,
    fractions:      Vec<f64,>,
}

impl LanguageChart
{
    fn stretch(&mut self, width: f64,)
    {
        self.bar_width = width;
        let mut offset = 0.0;
        for (segment, fraction,) in self.segments.iter_mut().zip(&self.fractions,) {
            segment.x = offset;
            segment.width = fraction * width;
            offset += segment.width;
        }
    }
}

/// What a block draws under its heading.
#[derive(Debug, Clone, PartialEq,)]
pub enum BlockContent
{
    /// Label/value rows.
    Rows(Vec<RowLayout,>,),
    /// Language chart.
    Languages(LanguageChart,),
}

/// One rendered category.
#[derive(Debug, Clone, PartialEq,)]
pub struct Block
{
    /// Category drawn by the block.
    pub category:       Category,
    /// Left edge on the card.
    pub x:              f64,
    /// Top edge on the card.
    pub y:              f64,
    /// Width of the grid column holding the block.
    pub width:          f64,
    /// Content height.
    pub height:         f64,
    /// Category heading.
    pub heading:        TextSpan,
    /// Value column headers, aligned with the value columns.
    pub column_headers: Vec<TextSpan,>,
    /// Rows or chart.
    pub content:        BlockContent,
}

/// Complete card geometry.
#[derive(Debug, Clone, PartialEq,)]
pub struct RenderModel
{
    /// Canvas width.
    pub width:         f64,
    /// Canvas height.
    pub height:        f64,
    /// Row font size.
    pub font_size:     f64,
    /// Heading font size.
    pub heading_size:  f64,
    /// Title font size.
    pub title_size:    f64,
    /// Corner radius of the border.
    pub border_radius: f64,
    /// Accessible name of the image.
    pub label:         String,
    /// Title line, when enabled.
    pub title:         Option<TitleLayout,>,
    /// Category blocks in rendering order.
    pub blocks:        Vec<Block,>,
    /// Language bar animation duration, when enabled.
    pub animation_ms:  Option<u32,>,
}

/// Spacing derived from the row font size.
struct Metrics
{
    font_size:    f64,
    heading_size: f64,
    line_height:  f64,
    heading_line: f64,
    icon_gap:     f64,
    column_gap:   f64,
    padding:      f64,
    block_gap_x:  f64,
    block_gap_y:  f64,
}

impl Metrics
{
    fn new(font_size: f64,) -> Self
    {
        let heading_size = font_size + 2.0;
        Self {
            font_size,
            heading_size,
            line_height: font_size * 1.6,
            heading_line: heading_size * 1.6,
            icon_gap: font_size * 0.5,
            column_gap: font_size * 1.25,
            padding: font_size,
            block_gap_x: font_size * 2.0,
            block_gap_y: font_size,
        }
    }

    /// Baseline of text of `size` centered in a line of `line` pixels.
    fn baseline(top: f64, line: f64, size: f64,) -> f64
    {
        top + (line + size * 0.7) / 2.0
    }
}

/// Computes the geometry of a card.
///
/// Categories are drawn in the given order, duplicates ignored. A category
/// without rows after hiding and omitting absent values is skipped, as is a
/// language category without languages.
///
/// # Errors
///
/// Returns [`Error::UnknownIcon`] when the theme names an unknown title icon.
pub fn layout(
    model: &StatisticsModel,
    theme: &Theme,
    locale: &LocaleTable,
    categories: &[Category],
    options: &RenderOptions,
) -> Result<RenderModel, Error,>
{
    let title_icon = icons::lookup(&theme.title_icon,)?;
    let metrics = Metrics::new(options.font_size,);

    let label = options
        .custom_title
        .clone()
        .unwrap_or_else(|| locale.fill_title(model.display_name(),),);
    let title = options
        .include_title
        .then(|| title_layout(&label, title_icon, options.title_size, metrics.padding,),);
    let content_top = if title.is_some() {
        metrics.padding + options.title_size * 1.6 + metrics.font_size * 0.5
    } else {
        metrics.padding
    };

    let mut seen = HashSet::new();
    let mut blocks: Vec<Block,> = categories
        .iter()
        .filter(|category| seen.insert(**category,),)
        .filter_map(|category| match category {
            Category::Languages => language_block(model, locale, &metrics,),
            other => row_block(*other, model, locale, &options.hidden, &metrics,),
        },)
        .collect();

    let (grid_width, grid_height,) = arrange(&mut blocks, options.columns, content_top, &metrics,);

    let title_width = title.as_ref().map_or(0.0, |title| title.text.x + title.text.width,);
    let required_width = grid_width.max(title_width - metrics.padding,) + 2.0 * metrics.padding;
    let required_height = content_top + grid_height + metrics.padding;
    let width = options.width.resolve(required_width,);
    let height = options.height.resolve(required_height,);

    debug!("laid out {} blocks on a {width:.1}x{height:.1} canvas", blocks.len());

    Ok(RenderModel {
        width,
        height,
        font_size: metrics.font_size,
        heading_size: metrics.heading_size,
        title_size: options.title_size,
        border_radius: options.border_radius,
        label,
        title,
        blocks,
        animation_ms: options.animate_languages.then_some(options.animation_speed_ms,),
    },)
}

fn title_layout(text: &str, icon: &'static Icon, size: f64, top: f64,) -> TitleLayout
{
    let line = size * 1.6;
    TitleLayout {
        icon: IconPlacement {
            icon,
            x: top,
            y: top + (line - size) / 2.0,
            size,
        },
        text: TextSpan {
            text:  text.to_owned(),
            x:     top + size * 1.5,
            y:     Metrics::baseline(top, line, size,),
            width: measure(text, size, FontWeight::Bold,),
        },
    }
}

fn heading_span(category: Category, locale: &LocaleTable, metrics: &Metrics,) -> TextSpan
{
    let text = locale.heading(category,);
    TextSpan {
        text:  text.to_owned(),
        x:     0.0,
        y:     Metrics::baseline(0.0, metrics.heading_line, metrics.heading_size,),
        width: measure(text, metrics.heading_size, FontWeight::Bold,),
    }
}

fn value_strings(value: StatValue<'_,>,) -> Vec<String,>
{
    match value {
        StatValue::Year(year,) => vec![year.to_string()],
        StatValue::Repository(name,) => vec![name.to_owned()],
        StatValue::Count(count,) => vec![count.to_string()],
        StatValue::Pair(pair,) => {
            let mut values = vec![pair.current.to_string()];
            values.extend(pair.total.map(|total| total.to_string(),),);
            values
        }
    }
}

fn row_block(
    category: Category,
    model: &StatisticsModel,
    locale: &LocaleTable,
    hidden: &BTreeSet<StatKey,>,
    metrics: &Metrics,
) -> Option<Block,>
{
    let entries: Vec<(StatKey, Vec<String,>,),> = category
        .stats()
        .iter()
        .filter(|key| !hidden.contains(*key,),)
        .filter_map(|key| model.value(*key,).map(|value| (*key, value_strings(value,),),),)
        .collect();
    if entries.is_empty() {
        debug!("category {} has no rows; skipping", category.as_str());
        return None;
    }

    let size = metrics.font_size;
    let heading = heading_span(category, locale, metrics,);
    let headers = locale.columns(category,);
    let widest_row = entries.iter().map(|(_, values,)| values.len(),).max().unwrap_or(1,);
    let column_count = headers.map_or(1, |headers| headers.len().min(widest_row,),);

    let label_x = size + metrics.icon_gap;
    let label_width = entries
        .iter()
        .map(|(key, _,)| measure(locale.label(*key,), size, FontWeight::Regular,),)
        .fold(0.0, f64::max,);

    let mut column_widths = vec![0.0_f64; column_count];
    for (index, width,) in column_widths.iter_mut().enumerate() {
        let header = headers.map_or(0.0, |headers| measure(headers[index], size, FontWeight::Bold,),);
        let widest_value = entries
            .iter()
            .filter_map(|(_, values,)| values.get(index,),)
            .map(|value| measure(value, size, FontWeight::Bold,),)
            .fold(0.0, f64::max,);
        *width = header.max(widest_value,);
    }

    let mut column_x = Vec::with_capacity(column_count,);
    let mut next = (label_x + label_width).max(heading.width,) + metrics.column_gap;
    for width in &column_widths {
        column_x.push(next,);
        next += width + metrics.column_gap;
    }
    let width = next - metrics.column_gap;

    let header_baseline = Metrics::baseline(0.0, metrics.heading_line, size,);
    let column_headers: Vec<TextSpan,> = headers
        .map(|headers| {
            headers
                .iter()
                .zip(&column_x,)
                .map(|(text, x,)| TextSpan {
                    text:  (*text).to_owned(),
                    x:     *x,
                    y:     header_baseline,
                    width: measure(text, size, FontWeight::Bold,),
                },)
                .collect()
        },)
        .unwrap_or_default();

    let rows: Vec<RowLayout,> = entries
        .into_iter()
        .enumerate()
        .map(|(index, (key, values,),)| {
            let top = metrics.heading_line + index as f64 * metrics.line_height;
            let baseline = Metrics::baseline(top, metrics.line_height, size,);
            let label = locale.label(key,);
            RowLayout {
                key,
                icon: IconPlacement {
                    icon: Icon::for_stat(key,),
                    x:    0.0,
                    y:    top + (metrics.line_height - size) / 2.0,
                    size,
                },
                label: TextSpan {
                    text:  label.to_owned(),
                    x:     label_x,
                    y:     baseline,
                    width: measure(label, size, FontWeight::Regular,),
                },
                values: values
                    .into_iter()
                    .zip(&column_x,)
                    .map(|(value, x,)| TextSpan {
                        width: measure(&value, size, FontWeight::Bold,),
                        text:  value,
                        x:     *x,
                        y:     baseline,
                    },)
                    .collect(),
            }
        },)
        .collect();

    let height = metrics.heading_line + rows.len() as f64 * metrics.line_height;
    Some(Block {
        category,
        x: 0.0,
        y: 0.0,
        width,
        height,
        heading,
        column_headers,
        content: BlockContent::Rows(rows,),
    },)
}

fn language_block(model: &StatisticsModel, locale: &LocaleTable, metrics: &Metrics,) -> Option<Block,>
{
    let languages = &model.languages.languages;
    if languages.is_empty() {
        debug!("no languages to chart; skipping");
        return None;
    }

    let size = metrics.font_size;
    let heading = heading_span(Category::Languages, locale, metrics,);
    let bar_margin = size * 0.5;
    let bar_y = metrics.heading_line + bar_margin * 0.5;
    let bar_height = size * 0.6;
    let legend_top = bar_y + bar_height + bar_margin;

    let radius = size * 0.35;
    let text_offset = radius * 2.0 + size * 0.5;
    let texts: Vec<(String, f64,),> = languages
        .iter()
        .map(|language| {
            let text = format!("{} {:.1}%", language.name, language.fraction * 100.0);
            let width = measure(&text, size, FontWeight::Regular,);
            (text, width,)
        },)
        .collect();
    let legend_column = texts.iter().map(|(_, width,)| text_offset + width,).fold(0.0, f64::max,);
    let second_column_x = legend_column + metrics.column_gap;

    let legend = languages
        .iter()
        .zip(texts,)
        .enumerate()
        .map(|(index, (language, (text, width,),),)| {
            let column_x = if index % 2 == 0 { 0.0 } else { second_column_x };
            let top = legend_top + (index / 2) as f64 * metrics.line_height;
            LegendEntry {
                color: language.color.clone(),
                cx: column_x + radius,
                cy: top + metrics.line_height / 2.0,
                radius,
                text: TextSpan {
                    text,
                    x: column_x + text_offset,
                    y: Metrics::baseline(top, metrics.line_height, size,),
                    width,
                },
            }
        },)
        .collect();

    let legend_rows = languages.len().div_ceil(2,);
    let legend_width = if languages.len() > 1 { second_column_x + legend_column } else { legend_column };
    let width = heading.width.max(legend_width,).max(size * 12.0,);

    let mut chart = LanguageChart {
        bar_y,
        bar_width: width,
        bar_height,
        segments: languages
            .iter()
            .map(|language| LanguageSegment {
                name:  language.name.clone(),
                color: language.color.clone(),
                x:     0.0,
                width: 0.0,
            },)
            .collect(),
        legend,
        fractions: languages.iter().map(|language| language.fraction,).collect(),
    };
    chart.stretch(width,);

    Some(Block {
        category: Category::Languages,
        x: 0.0,
        y: 0.0,
        width,
        height: legend_top + legend_rows as f64 * metrics.line_height,
        heading,
        column_headers: Vec::new(),
        content: BlockContent::Languages(chart,),
    },)
}

/// Places blocks on the grid and returns its width and height.
fn arrange(blocks: &mut [Block], columns: usize, top: f64, metrics: &Metrics,) -> (f64, f64,)
{
    if blocks.is_empty() {
        return (0.0, 0.0,);
    }

    let columns = columns.clamp(1, MAX_COLUMNS,).min(blocks.len(),);
    let rows = blocks.len().div_ceil(columns,);
    let mut column_widths = vec![0.0_f64; columns];
    let mut row_heights = vec![0.0_f64; rows];
    for (index, block,) in blocks.iter().enumerate() {
        let (row, column,) = (index / columns, index % columns,);
        column_widths[column] = column_widths[column].max(block.width,);
        row_heights[row] = row_heights[row].max(block.height,);
    }

    for (index, block,) in blocks.iter_mut().enumerate() {
        let (row, column,) = (index / columns, index % columns,);
        block.x = metrics.padding
            + column_widths[..column].iter().sum::<f64>()
            + column as f64 * metrics.block_gap_x;
        block.y = top + row_heights[..row].iter().sum::<f64>() + row as f64 * metrics.block_gap_y;
        block.width = column_widths[column];
        if let BlockContent::Languages(chart,) = &mut block.content {
            chart.stretch(block.width,);
        }
    }

    let width = column_widths.iter().sum::<f64>() + (columns - 1) as f64 * metrics.block_gap_x;
    let height = row_heights.iter().sum::<f64>() + (rows - 1) as f64 * metrics.block_gap_y;
    (width, height,)
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::{
        locale,
        stats::{LanguageShare, LanguageStats, StatPair},
    };

    fn sample_model() -> StatisticsModel
    {
        let mut model = StatisticsModel {
            login: "octocat".to_owned(),
            ..StatisticsModel::default()
        };
        model.user.joined = Some(2011,);
        model.user.most_starred = Some("hello-world".to_owned(),);
        model.user.followers = 12;
        model.repo.public = StatPair::new(29, 31,);
        model.repo.starred_by = StatPair::new(36, 36,);
        model.repo.forked_by = StatPair::new(28, 28,);
        model.repo.watched_by = StatPair::new(3, 3,);
        model.repo.templates = StatPair::new(1, 1,);
        model.repo.archived = StatPair::new(2, 2,);
        model.contrib.commits = StatPair::new(3602, 4402,);
        model.languages = LanguageStats {
            total_size: 100,
            languages:  vec![
                LanguageShare {
                    name:     "Rust".to_owned(),
                    color:    "#dea584".to_owned(),
                    size:     75,
                    fraction: 0.75,
                },
                LanguageShare {
                    name:     "Shell".to_owned(),
                    color:    "#89e051".to_owned(),
                    size:     25,
                    fraction: 0.25,
                },
            ],
        };
        model
    }

    fn run(model: &StatisticsModel, options: &RenderOptions,) -> RenderModel
    {
        let theme = Theme::builtin("dark",).expect("builtin theme",);
        let locale = locale::lookup("en",).expect("shipped locale",);
        layout(model, &theme, locale, &Category::ALL, options,).expect("layout succeeds",)
    }

    fn rows(block: &Block,) -> &[RowLayout]
    {
        match &block.content {
            BlockContent::Rows(rows,) => rows,
            BlockContent::Languages(_,) => panic!("expected rows"),
        }
    }

    #[test]
    fn absent_values_and_hidden_keys_produce_no_rows()
    {
        let mut options = RenderOptions::default();
        options.hidden.insert(StatKey::Followers,);
        let card = run(&sample_model(), &options,);

        let general = &card.blocks[0];
        assert_eq!(general.category, Category::General);
        let keys: Vec<StatKey,> = rows(general,).iter().map(|row| row.key,).collect();
        assert!(keys.contains(&StatKey::Joined));
        assert!(keys.contains(&StatKey::MostStarred));
        assert!(!keys.contains(&StatKey::MostForked));
        assert!(!keys.contains(&StatKey::Featured));
        assert!(!keys.contains(&StatKey::Followers));
    }

    #[test]
    fn value_columns_clear_labels_and_headers()
    {
        let card = run(&sample_model(), &RenderOptions::default(),);
        let repositories = &card.blocks[1];
        assert_eq!(repositories.column_headers.len(), 2);

        for row in rows(repositories,) {
            assert_eq!(row.values.len(), 2);
            assert!(row.values[0].x >= row.label.x + row.label.width);
            assert!(row.values[1].x >= row.values[0].x + row.values[0].width);
            assert!(row.values[1].x + row.values[1].width <= repositories.width + 1e-9);
        }
        assert!(repositories.column_headers[0].x >= repositories.heading.width);
    }

    #[test]
    fn pair_without_total_renders_one_value()
    {
        let mut model = sample_model();
        model.repo.forked_by = StatPair::current(28,);
        let card = run(&model, &RenderOptions::default(),);

        let forked = rows(&card.blocks[1],)
            .iter()
            .find(|row| row.key == StatKey::ForkedBy,)
            .expect("forked row",);
        assert_eq!(forked.values.len(), 1);
        assert_eq!(forked.values[0].text, "28");
        assert_eq!(card.blocks[1].column_headers.len(), 2);
    }

    #[test]
    fn contributions_without_totals_draw_one_header()
    {
        let mut model = sample_model();
        model.contrib.commits = StatPair::current(3602,);
        let card = run(&model, &RenderOptions::default(),);

        let contributions = &card.blocks[2];
        assert_eq!(contributions.category, Category::Contributions);
        assert_eq!(contributions.column_headers.len(), 1);
        assert_eq!(contributions.column_headers[0].text, "Past Year");
        for row in rows(contributions,) {
            assert_eq!(row.values.len(), 1);
        }
    }

    #[test]
    fn auto_canvas_contains_every_block()
    {
        let card = run(&sample_model(), &RenderOptions::default(),);
        assert_eq!(card.blocks.len(), 4);
        for block in &card.blocks {
            assert!(block.x + block.width <= card.width);
            assert!(block.y + block.height <= card.height);
        }
        for pair in card.blocks.windows(2,) {
            assert!(pair[1].y >= pair[0].y + pair[0].height);
        }
    }

    #[test]
    fn grid_places_blocks_side_by_side()
    {
        let options = RenderOptions {
            columns: 2,
            ..RenderOptions::default()
        };
        let card = run(&sample_model(), &options,);
        let [general, repositories, contributions, languages,] = card.blocks.as_slice() else {
            panic!("expected four blocks");
        };
        assert_eq!(general.y, repositories.y);
        assert!(repositories.x >= general.x + general.width);
        assert_eq!(contributions.x, general.x);
        assert!(contributions.y >= general.y + general.height.max(repositories.height));
        assert_eq!(languages.x, repositories.x);
    }

    #[test]
    fn fixed_dimensions_are_honored()
    {
        let options = RenderOptions {
            width: Dimension::from_pixels(300,),
            height: Dimension::from_pixels(0,),
            ..RenderOptions::default()
        };
        let card = run(&sample_model(), &options,);
        assert_eq!(card.width, 300.0);
        let lowest = card.blocks.iter().map(|block| block.y + block.height,).fold(0.0, f64::max,);
        assert!(card.height > lowest);
    }

    #[test]
    fn language_segments_fill_the_bar_in_rank_order()
    {
        let card = run(&sample_model(), &RenderOptions::default(),);
        let Some(BlockContent::Languages(chart,),) = card.blocks.last().map(|block| &block.content,) else {
            panic!("expected language chart");
        };
        assert_eq!(chart.segments[0].name, "Rust");
        assert!((chart.segments[0].width - chart.bar_width * 0.75).abs() < 1e-9);
        let end = chart.segments.last().map(|segment| segment.x + segment.width,).unwrap_or_default();
        assert!((end - chart.bar_width).abs() < 1e-9);
        assert_eq!(chart.legend[0].text.text, "Rust 75.0%");
        assert_eq!(chart.legend[1].text.text, "Shell 25.0%");
    }

    #[test]
    fn empty_categories_are_skipped()
    {
        let card = run(&StatisticsModel::default(), &RenderOptions::default(),);
        let categories: Vec<Category,> = card.blocks.iter().map(|block| block.category,).collect();
        assert!(!categories.contains(&Category::Languages));
        assert!(card.height > 0.0);
    }

    #[test]
    fn duplicate_categories_render_once()
    {
        let theme = Theme::builtin("light",).expect("builtin theme",);
        let locale = locale::lookup("en",).expect("shipped locale",);
        let card = layout(
            &sample_model(),
            &theme,
            locale,
            &[Category::Contributions, Category::Contributions],
            &RenderOptions::default(),
        )
        .expect("layout succeeds",);
        assert_eq!(card.blocks.len(), 1);
    }

    #[test]
    fn title_uses_display_name_or_custom_text()
    {
        let card = run(&sample_model(), &RenderOptions::default(),);
        assert_eq!(card.title.as_ref().map(|title| title.text.text.as_str()), Some("octocat's GitHub Activity"));

        let options = RenderOptions {
            custom_title: Some("Stats".to_owned(),),
            include_title: false,
            ..RenderOptions::default()
        };
        let card = run(&sample_model(), &options,);
        assert!(card.title.is_none());
        assert_eq!(card.label, "Stats");
    }

    #[test]
    fn unknown_title_icon_is_fatal()
    {
        let mut theme = Theme::builtin("dark",).expect("builtin theme",);
        theme.title_icon = "ghost".to_owned();
        let locale = locale::lookup("en",).expect("shipped locale",);
        let error = layout(&sample_model(), &theme, locale, &Category::ALL, &RenderOptions::default(),)
            .expect_err("unknown icon",);
        assert!(matches!(error, Error::UnknownIcon { .. }));
    }
}
