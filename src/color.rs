// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Color validation and WCAG contrast computations.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Error;

/// Foreground used on light backgrounds; preferred on ties.
pub const DARK_FOREGROUND: &str = "#000000";
/// Foreground used on dark backgrounds.
pub const LIGHT_FOREGROUND: &str = "#ffffff";
/// Minimum contrast ratio for legible text.
pub const MIN_TEXT_CONTRAST: f64 = 4.5;

static HEX_COLOR: LazyLock<Option<Regex,>,> =
    LazyLock::new(|| Regex::new(r"^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$",).ok(),);

/// CSS named colors, sorted by name.
const NAMED_COLORS: [(&str, u32,); 148] = [
    ("aliceblue", 0xf0f8ff),
    ("antiquewhite", 0xfaebd7),
    ("aqua", 0x00ffff),
    ("aquamarine", 0x7fffd4),
    ("azure", 0xf0ffff),
    ("beige", 0xf5f5dc),
    ("bisque", 0xffe4c4),
    ("black", 0x000000),
    ("blanchedalmond", 0xffebcd),
    ("blue", 0x0000ff),
    ("blueviolet", 0x8a2be2),
    ("brown", 0xa52a2a),
    ("burlywood", 0xdeb887),
    ("cadetblue", 0x5f9ea0),
    ("chartreuse", 0x7fff00),
    ("chocolate", 0xd2691e),
    ("coral", 0xff7f50),
    ("cornflowerblue", 0x6495ed),
    ("cornsilk", 0xfff8dc),
    ("crimson", 0xdc143c),
    ("cyan", 0x00ffff),
    ("darkblue", 0x00008b),
    ("darkcyan", 0x008b8b),
    ("darkgoldenrod", 0xb8860b),
    ("darkgray", 0xa9a9a9),
    ("darkgreen", 0x006400),
    ("darkgrey", 0xa9a9a9),
    ("darkkhaki", 0xbdb76b),
    ("darkmagenta", 0x8b008b),
    ("darkolivegreen", 0x556b2f),
    ("darkorange", 0xff8c00),
    ("darkorchid", 0x9932cc),
    ("darkred", 0x8b0000),
    ("darksalmon", 0xe9967a),
    ("darkseagreen", 0x8fbc8f),
    ("darkslateblue", 0x483d8b),
    ("darkslategray", 0x2f4f4f),
    ("darkslategrey", 0x2f4f4f),
    ("darkturquoise", 0x00ced1),
    ("darkviolet", 0x9400d3),
    ("deeppink", 0xff1493),
    ("deepskyblue", 0x00bfff),
    ("dimgray", 0x696969),
    ("dimgrey", 0x696969),
    ("dodgerblue", 0x1e90ff),
    ("firebrick", 0xb22222),
    ("floralwhite", 0xfffaf0),
    ("forestgreen", 0x228b22),
    ("fuchsia", 0xff00ff),
    ("gainsboro", 0xdcdcdc),
    ("ghostwhite", 0xf8f8ff),
    ("gold", 0xffd700),
    ("goldenrod", 0xdaa520),
    ("gray", 0x808080),
    ("green", 0x008000),
    ("greenyellow", 0xadff2f),
    ("grey", 0x808080),
    ("honeydew", 0xf0fff0),
    ("hotpink", 0xff69b4),
    ("indianred", 0xcd5c5c),
    ("indigo", 0x4b0082),
    ("ivory", 0xfffff0),
    ("khaki", 0xf0e68c),
    ("lavender", 0xe6e6fa),
    ("lavenderblush", 0xfff0f5),
    ("lawngreen", 0x7cfc00),
    ("lemonchiffon", 0xfffacd),
    ("lightblue", 0xadd8e6),
    ("lightcoral", 0xf08080),
    ("lightcyan", 0xe0ffff),
    ("lightgoldenrodyellow", 0xfafad2),
    ("lightgray", 0xd3d3d3),
    ("lightgreen", 0x90ee90),
    ("lightgrey", 0xd3d3d3),
    ("lightpink", 0xffb6c1),
    ("lightsalmon", 0xffa07a),
    ("lightseagreen", 0x20b2aa),
    ("lightskyblue", 0x87cefa),
    ("lightslategray", 0x778899),
    ("lightslategrey", 0x778899),
    ("lightsteelblue", 0xb0c4de),
    ("lightyellow", 0xffffe0),
    ("lime", 0x00ff00),
    ("limegreen", 0x32cd32),
    ("linen", 0xfaf0e6),
    ("magenta", 0xff00ff),
    ("maroon", 0x800000),
    ("mediumaquamarine", 0x66cdaa),
    ("mediumblue", 0x0000cd),
    ("mediumorchid", 0xba55d3),
    ("mediumpurple", 0x9370db),
    ("mediumseagreen", 0x3cb371),
    ("mediumslateblue", 0x7b68ee),
    ("mediumspringgreen", 0x00fa9a),
    ("mediumturquoise", 0x48d1cc),
    ("mediumvioletred", 0xc71585),
    ("midnightblue", 0x191970),
    ("mintcream", 0xf5fffa),
    ("mistyrose", 0xffe4e1),
    ("moccasin", 0xffe4b5),
    ("navajowhite", 0xffdead),
    ("navy", 0x000080),
    ("oldlace", 0xfdf5e6),
    ("olive", 0x808000),
    ("olivedrab", 0x6b8e23),
    ("orange", 0xffa500),
    ("orangered", 0xff4500),
    ("orchid", 0xda70d6),
    ("palegoldenrod", 0xeee8aa),
    ("palegreen", 0x98fb98),
    ("paleturquoise", 0xafeeee),
    ("palevioletred", 0xdb7093),
    ("papayawhip", 0xffefd5),
    ("peachpuff", 0xffdab9),
    ("peru", 0xcd853f),
    ("pink", 0xffc0cb),
    ("plum", 0xdda0dd),
    ("powderblue", 0xb0e0e6),
    ("purple", 0x800080),
    ("rebeccapurple", 0x663399),
    ("red", 0xff0000),
    ("rosybrown", 0xbc8f8f),
    ("royalblue", 0x4169e1),
    ("saddlebrown", 0x8b4513),
    ("salmon", 0xfa8072),
    ("sandybrown", 0xf4a460),
    ("seagreen", 0x2e8b57),
    ("seashell", 0xfff5ee),
    ("sienna", 0xa0522d),
    ("silver", 0xc0c0c0),
    ("skyblue", 0x87ceeb),
    ("slateblue", 0x6a5acd),
    ("slategray", 0x708090),
    ("slategrey", 0x708090),
    ("snow", 0xfffafa),
    ("springgreen", 0x00ff7f),
    ("steelblue", 0x4682b4),
    ("tan", 0xd2b48c),
    ("teal", 0x008080),
    ("thistle", 0xd8bfd8),
    ("tomato", 0xff6347),
    ("turquoise", 0x40e0d0),
    ("violet", 0xee82ee),
    ("wheat", 0xf5deb3),
    ("white", 0xffffff),
    ("whitesmoke", 0xf5f5f5),
    ("yellow", 0xffff00),
    ("yellowgreen", 0x9acd32),
];

/// Returns `true` for a CSS color name or a hex color with three or six
/// digits and an optional leading `#`.
pub fn is_valid_color(value: &str,) -> bool
{
    named_color(value,).is_some() || is_hex_color(value,)
}

fn is_hex_color(value: &str,) -> bool
{
    HEX_COLOR.as_ref().is_some_and(|pattern| pattern.is_match(value,),)
}

fn named_color(value: &str,) -> Option<u32,>
{
    let name = value.to_ascii_lowercase();
    NAMED_COLORS
        .binary_search_by(|(candidate, _,)| (*candidate).cmp(name.as_str(),),)
        .ok()
        .map(|index| NAMED_COLORS[index].1,)
}

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq,)]
pub struct Rgb
{
    /// Red channel.
    pub red:   u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue:  u8,
}

impl Rgb
{
    /// Parses a named or hex color.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] when [`is_valid_color`] rejects the
    /// value.
    pub fn parse(value: &str,) -> Result<Self, Error,>
    {
        if let Some(packed,) = named_color(value,) {
            return Ok(Self::from_packed(packed,),);
        }
        if !is_hex_color(value,) {
            return Err(Error::InvalidColor {
                value: value.to_owned(),
            },);
        }

        let digits = value.trim_start_matches('#',);
        let expanded: String = if digits.len() == 3 {
            digits.chars().flat_map(|digit| [digit, digit,],).collect()
        } else {
            digits.to_owned()
        };
        u32::from_str_radix(&expanded, 16,).map(Self::from_packed,).map_err(|_| Error::InvalidColor {
            value: value.to_owned(),
        },)
    }

    fn from_packed(packed: u32,) -> Self
    {
        let [_, red, green, blue,] = packed.to_be_bytes();
        Self {
            red,
            green,
            blue,
        }
    }

    /// Relative luminance in `0.0..=1.0`.
    pub fn relative_luminance(self,) -> f64
    {
        0.2126 * linearize(self.red,) + 0.7152 * linearize(self.green,) + 0.0722 * linearize(self.blue,)
    }
}

fn linearize(channel: u8,) -> f64
{
    let value = f64::from(channel,) / 255.0;
    if value <= 0.03928 { value / 12.92 } else { ((value + 0.055) / 1.055).powf(2.4,) }
}

/// Contrast ratio between two colors, in `1.0..=21.0`.
///
/// # Errors
///
/// Returns [`Error::InvalidColor`] when either color cannot be parsed.
///
/// # Examples
///
/// ```
/// use statcard::contrast_ratio;
///
/// let ratio = contrast_ratio("#000", "white",)?;
/// assert!((ratio - 21.0).abs() < 1e-9);
/// # Ok::<(), statcard::Error>(())
/// ```
pub fn contrast_ratio(first: &str, second: &str,) -> Result<f64, Error,>
{
    let first = Rgb::parse(first,)?.relative_luminance();
    let second = Rgb::parse(second,)?.relative_luminance();
    let (lighter, darker,) = if first >= second { (first, second,) } else { (second, first,) };
    Ok((lighter + 0.05) / (darker + 0.05),)
}

/// Picks black or white, whichever contrasts more with `background`.
///
/// # Errors
///
/// Returns [`Error::InvalidColor`] when the background cannot be parsed.
pub fn high_contrasting_color(background: &str,) -> Result<&'static str, Error,>
{
    let against_dark = contrast_ratio(background, DARK_FOREGROUND,)?;
    let against_light = contrast_ratio(background, LIGHT_FOREGROUND,)?;
    Ok(if against_dark >= against_light { DARK_FOREGROUND } else { LIGHT_FOREGROUND },)
}
