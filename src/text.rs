// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Text width estimation for SVG layout.
//!
//! Widths come from per-glyph tables of DejaVu Sans advances for printable
//! ASCII, each rounded to a tenth of a pixel at the 11px reference size and
//! stored in hundredths of a pixel. Bold text uses the DejaVu Sans Bold table
//! because bold glyphs do not widen uniformly.

/// Reference font size the tables were measured at.
const REFERENCE_SIZE: f64 = 11.0;
/// Table values are stored in hundredths of a pixel.
const TABLE_SCALE: f64 = 100.0;
/// First character covered by the tables (space).
const FIRST_GLYPH: u32 = 32;
/// Weights at or above this value use the bold table.
pub const BOLD_THRESHOLD: u16 = 600;

/// Width used for characters outside the regular table.
const REGULAR_DEFAULT: u32 = 660;
/// Width used for characters outside the bold table.
const BOLD_DEFAULT: u32 = 730;

#[rustfmt::skip]
const REGULAR_WIDTHS: [u32; 95] = [
    350, 440, 510, 920, 700, 1050, 860, 300, 430, 430, 550, 920,
    350, 400, 350, 370, 700, 700, 700, 700, 700, 700, 700, 700,
    700, 700, 370, 370, 920, 920, 920, 580, 1100, 750, 750, 770,
    850, 700, 630, 850, 830, 320, 320, 720, 610, 950, 820, 870,
    660, 870, 760, 700, 670, 810, 750, 1090, 750, 670, 750, 430,
    370, 430, 920, 550, 550, 670, 700, 600, 700, 680, 390, 700,
    700, 310, 310, 640, 310, 1070, 700, 670, 700, 700, 450, 570,
    430, 700, 650, 900, 650, 650, 580, 700, 370, 700, 920,
];

#[rustfmt::skip]
const BOLD_WIDTHS: [u32; 95] = [
    380, 500, 570, 920, 770, 1100, 960, 340, 500, 500, 580, 920,
    420, 460, 420, 400, 770, 770, 770, 770, 770, 770, 770, 770,
    770, 770, 440, 440, 920, 920, 920, 640, 1100, 850, 840, 810,
    910, 750, 750, 900, 920, 410, 410, 850, 700, 1090, 920, 940,
    810, 940, 850, 790, 750, 890, 850, 1210, 850, 800, 800, 500,
    400, 500, 920, 550, 550, 740, 790, 650, 790, 750, 480, 790,
    780, 380, 380, 730, 380, 1150, 780, 760, 790, 790, 540, 650,
    530, 780, 720, 1020, 710, 720, 640, 780, 400, 780, 920,
];

/// Font weight selecting the width table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default,)]
pub enum FontWeight
{
    /// Normal text.
    #[default]
    Regular,
    /// Bold text (weight 600 and above).
    Bold,
}

impl FontWeight
{
    /// Resolves the table from a bold flag and an optional CSS weight.
    ///
    /// Either a set flag or a weight of at least [`BOLD_THRESHOLD`] selects
    /// the bold table.
    pub fn from_css(bold: bool, weight: Option<u16,>,) -> Self
    {
        if bold || weight.is_some_and(|value| value >= BOLD_THRESHOLD,) {
            Self::Bold
        } else {
            Self::Regular
        }
    }

    /// Value for the SVG `font-weight` attribute.
    pub fn css_value(self,) -> &'static str
    {
        match self {
            Self::Regular => "400",
            Self::Bold => "600",
        }
    }

    fn glyph_width(self, glyph: char,) -> u32
    {
        let (table, fallback,) = match self {
            Self::Regular => (&REGULAR_WIDTHS, REGULAR_DEFAULT,),
            Self::Bold => (&BOLD_WIDTHS, BOLD_DEFAULT,),
        };
        (glyph as u32)
            .checked_sub(FIRST_GLYPH,)
            .and_then(|index| table.get(index as usize,),)
            .copied()
            .unwrap_or(fallback,)
    }
}

/// Estimates the rendered width of `text` in pixels.
///
/// Glyph widths are summed as integers and scaled once, so the result is
/// identical for identical inputs.
///
/// # Examples
///
/// ```
/// use statcard::{FontWeight, measure};
///
/// let regular = measure("Commits", 11.0, FontWeight::Regular,);
/// assert!((regular - 48.9).abs() < 1e-9);
/// assert!(measure("Commits", 11.0, FontWeight::Bold,) > regular);
/// ```
pub fn measure(text: &str, font_size_px: f64, weight: FontWeight,) -> f64
{
    let hundredths: u64 = text.chars().map(|glyph| u64::from(weight.glyph_width(glyph,),),).sum();
    hundredths as f64 * font_size_px / (REFERENCE_SIZE * TABLE_SCALE)
}
