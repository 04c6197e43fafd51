// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! SVG card rendering.
//!
//! The renderer serializes a [`RenderModel`] into a self-contained SVG
//! document: no external stylesheet, font or image is referenced, and the
//! output is byte-for-byte deterministic for identical inputs so cards can be
//! committed and diffed.

use std::{
    borrow::Cow,
    fmt::{self, Write as _},
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path
};

use tracing::info;

use crate::{
    error::{self, Error},
    layout::{self, Block, BlockContent, LanguageChart, RenderModel, RenderOptions, TextSpan},
    locale,
    stats::{Category, StatisticsModel},
    theme::Theme
};

const FONT_FAMILY: &str =
    "-apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif";
const LANGUAGE_CLIP_ID: &str = "statcard-languages";

/// Formats a coordinate with at most two decimals.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Num(pub(crate) f64);

impl fmt::Display for Num {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = (self.0 * 100.0).round() / 100.0;
        if rounded == 0.0 {
            formatter.write_str("0")
        } else {
            write!(formatter, "{rounded}")
        }
    }
}

/// Renders the statistics model as an SVG document.
///
/// Looks up the locale, lays the card out and serializes it.
///
/// # Errors
///
/// Returns [`Error::UnsupportedLocale`] for an unknown locale code and
/// [`Error::UnknownIcon`] when the theme names an unknown title icon.
///
/// # Example
///
/// ```
/// use statcard::{Category, RenderOptions, StatisticsModel, Theme, render};
///
/// # fn main() -> Result<(), statcard::Error> {
/// let model = StatisticsModel {
///     login: "octocat".to_owned(),
///     ..StatisticsModel::default()
/// };
/// let theme = Theme::builtin("dark")?;
/// let svg = render(&model, &theme, "en", &Category::ALL, &RenderOptions::default())?;
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.contains("octocat&apos;s GitHub Activity"));
/// # Ok(())
/// # }
/// ```
pub fn render(
    model: &StatisticsModel,
    theme: &Theme,
    locale: &str,
    categories: &[Category],
    options: &RenderOptions
) -> Result<String, Error> {
    let table = locale::lookup(locale)?;
    let card = layout::layout(model, theme, table, categories, options)?;
    Ok(build_svg_content(&card, theme))
}

/// Writes a rendered card to `path`, creating parent directories.
///
/// # Errors
///
/// Returns [`Error::SvgIo`] when directories or the file cannot be written.
pub fn write_card(path: &Path, contents: &str) -> Result<(), Error> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| error::svg_io_error(parent, source))?;
    }

    let file = File::create(path).map_err(|source| error::svg_io_error(path, source))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .map_err(|source| error::svg_io_error(path, source))?;
    writer
        .flush()
        .map_err(|source| error::svg_io_error(path, source))?;

    info!("wrote card to {}", path.display());
    Ok(())
}

fn build_svg_content(card: &RenderModel, theme: &Theme) -> String {
    let mut buffer = String::with_capacity(8 * 1024);
    let label = escape_xml(&card.label);
    let (width, height) = (Num(card.width), Num(card.height));

    let _ = writeln!(
        buffer,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\" role=\"img\" aria-label=\"{label}\" font-family=\"{FONT_FAMILY}\">",
    );
    let _ = writeln!(buffer, "  <title>{label}</title>");
    let _ = writeln!(
        buffer,
        "  <rect x=\"0.5\" y=\"0.5\" width=\"{}\" height=\"{}\" rx=\"{}\" fill=\"{}\" stroke=\"{}\"/>",
        Num(card.width - 1.0),
        Num(card.height - 1.0),
        Num(card.border_radius),
        theme.background,
        theme.border,
    );

    if let Some(title) = &card.title {
        let _ = writeln!(
            buffer,
            "  {}",
            title.icon.icon.render(title.icon.size, title.icon.x, title.icon.y, &theme.title)
        );
        push_text(&mut buffer, 1, &title.text, card.title_size, true, &theme.title);
    }

    for (index, block) in card.blocks.iter().enumerate() {
        push_block(&mut buffer, index, block, card, theme);
    }

    buffer.push_str("</svg>\n");
    buffer
}

fn push_block(buffer: &mut String, index: usize, block: &Block, card: &RenderModel, theme: &Theme) {
    let _ = writeln!(
        buffer,
        "  <g id=\"{}\" transform=\"translate({} {})\">",
        block.category.as_str(),
        Num(block.x),
        Num(block.y),
    );
    push_text(buffer, 2, &block.heading, card.heading_size, true, &theme.title);
    for header in &block.column_headers {
        push_text(buffer, 2, header, card.font_size, true, &theme.title);
    }

    match &block.content {
        BlockContent::Rows(rows) => {
            for row in rows {
                let _ = writeln!(
                    buffer,
                    "    {}",
                    row.icon.icon.render(row.icon.size, row.icon.x, row.icon.y, &theme.icons)
                );
                push_text(buffer, 2, &row.label, card.font_size, false, &theme.text);
                for value in &row.values {
                    push_text(buffer, 2, value, card.font_size, true, &theme.text);
                }
            }
        }
        BlockContent::Languages(chart) => {
            push_language_chart(buffer, index, chart, card, theme);
        }
    }

    buffer.push_str("  </g>\n");
}

fn push_language_chart(
    buffer: &mut String,
    index: usize,
    chart: &LanguageChart,
    card: &RenderModel,
    theme: &Theme
) {
    let clip_id = format!("{LANGUAGE_CLIP_ID}-{index}");
    let radius = Num(chart.bar_height / 2.0);
    let (bar_y, bar_width, bar_height) = (Num(chart.bar_y), Num(chart.bar_width), Num(chart.bar_height));

    let _ = writeln!(buffer, "    <defs>\n      <clipPath id=\"{clip_id}\">");
    match card.animation_ms {
        Some(duration) => {
            let _ = writeln!(
                buffer,
                "        <rect x=\"0\" y=\"{bar_y}\" width=\"0\" height=\"{bar_height}\" rx=\"{radius}\">\n          <animate attributeName=\"width\" from=\"0\" to=\"{bar_width}\" dur=\"{duration}ms\" fill=\"freeze\"/>\n        </rect>",
            );
        }
        None => {
            let _ = writeln!(
                buffer,
                "        <rect x=\"0\" y=\"{bar_y}\" width=\"{bar_width}\" height=\"{bar_height}\" rx=\"{radius}\"/>",
            );
        }
    }
    let _ = writeln!(buffer, "      </clipPath>\n    </defs>");

    let _ = writeln!(buffer, "    <g clip-path=\"url(#{clip_id})\">");
    for segment in &chart.segments {
        let _ = writeln!(
            buffer,
            "      <rect x=\"{}\" y=\"{bar_y}\" width=\"{}\" height=\"{bar_height}\" fill=\"{}\"><title>{}</title></rect>",
            Num(segment.x),
            Num(segment.width),
            escape_xml(&segment.color),
            escape_xml(&segment.name),
        );
    }
    buffer.push_str("    </g>\n");

    for entry in &chart.legend {
        let _ = writeln!(
            buffer,
            "    <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
            Num(entry.cx),
            Num(entry.cy),
            Num(entry.radius),
            escape_xml(&entry.color),
        );
        push_text(buffer, 2, &entry.text, card.font_size, false, &theme.text);
    }
}

fn push_text(buffer: &mut String, depth: usize, span: &TextSpan, size: f64, bold: bool, fill: &str) {
    let weight = if bold { " font-weight=\"600\"" } else { "" };
    let _ = writeln!(
        buffer,
        "{:indent$}<text x=\"{}\" y=\"{}\" font-size=\"{}\"{weight} fill=\"{fill}\">{}</text>",
        "",
        Num(span.x),
        Num(span.y),
        Num(size),
        escape_xml(&span.text),
        indent = depth * 2,
    );
}

fn escape_xml(value: &str) -> Cow<'_, str> {
    if value
        .chars()
        .any(|character| matches!(character, '&' | '<' | '>' | '\"' | '\''))
    {
        let mut escaped = String::with_capacity(value.len());
        for character in value.chars() {
            match character {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '\"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&apos;"),
                other => escaped.push(other)
            }
        }
        Cow::Owned(escaped)
    } else {
        Cow::Borrowed(value)
    }
}
