// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Icon glyphs drawn on a 16x16 grid.
//!
//! Every icon is a static SVG fragment wrapped into a nested `<svg>` element
//! positioned by [`Icon::render`]. Icons with `accepts_fill` take their color
//! from the `fill` attribute of the wrapper; multicolored icons carry their
//! own fills and ignore the supplied color.

use crate::{error::Error, stats::StatKey, svg::Num};

/// Static icon descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq,)]
pub struct Icon
{
    /// Lookup key.
    pub key:          &'static str,
    /// Shapes drawn inside a `0 0 16 16` view box.
    pub body:         &'static str,
    /// Whether the wrapper's `fill` attribute colors the shapes.
    pub accepts_fill: bool,
}

const fn mono(key: &'static str, body: &'static str,) -> Icon
{
    Icon {
        key,
        body,
        accepts_fill: true,
    }
}

const CALENDAR: &str = r#"<path fill-rule="evenodd" d="M4 0h1.5v2h5V0H12v2h2.25C15.22 2 16 2.78 16 3.75v10.5c0 .97-.78 1.75-1.75 1.75H1.75C.78 16 0 15.22 0 14.25V3.75C0 2.78.78 2 1.75 2H4V0ZM1.5 6v8c0 .14.11.25.25.25h12.5c.14 0 .25-.11.25-.25V6h-13Z"/>"#;
const PIN: &str = r#"<path fill-rule="evenodd" d="M4.75 0h6.5C12.22 0 13 .78 13 1.75v13.5a.75.75 0 0 1-1.2.6L8 13l-3.8 2.85a.75.75 0 0 1-1.2-.6V1.75C3 .78 3.78 0 4.75 0Zm0 1.5a.25.25 0 0 0-.25.25v12l2.8-2.1a1.25 1.25 0 0 1 1.4 0l2.8 2.1v-12a.25.25 0 0 0-.25-.25h-6.5Z"/>"#;
const STAR: &str = r#"<path fill-rule="evenodd" d="M8 .25a.75.75 0 0 1 .67.42l1.88 3.8 4.2.61a.75.75 0 0 1 .41 1.28l-3.04 2.96.72 4.18a.75.75 0 0 1-1.09.79L8 12.31l-3.75 1.98a.75.75 0 0 1-1.09-.79l.72-4.18L.84 6.36a.75.75 0 0 1 .41-1.28l4.2-.61L7.33.67A.75.75 0 0 1 8 .25Z"/>"#;
const FORK: &str = r#"<path fill-rule="evenodd" d="M3.75 1a2.25 2.25 0 0 1 .75 4.37V6c0 .41.34.75.75.75h5.5c.41 0 .75-.34.75-.75v-.63a2.25 2.25 0 1 1 1.5 0V6A2.25 2.25 0 0 1 10.75 8.25h-2v2.38a2.25 2.25 0 1 1-1.5 0V8.25h-2A2.25 2.25 0 0 1 3 6v-.63A2.25 2.25 0 0 1 3.75 1Zm0 1.5a.75.75 0 1 0 0 1.5.75.75 0 0 0 0-1.5Zm8.5 0a.75.75 0 1 0 0 1.5.75.75 0 0 0 0-1.5ZM8 12a.75.75 0 1 0 0 1.5A.75.75 0 0 0 8 12Z"/>"#;
const PEOPLE: &str = r#"<path fill-rule="evenodd" d="M5.5 3.5a2 2 0 1 0 0 4 2 2 0 0 0 0-4ZM2 5.5a3.5 3.5 0 1 1 5.9 2.55A5 5 0 0 1 11 12.25a.75.75 0 0 1-1.5.1 3.5 3.5 0 0 0-7 0 .75.75 0 0 1-1.5-.1 5 5 0 0 1 3.1-4.2A3.49 3.49 0 0 1 2 5.5ZM11 4a.75.75 0 0 0 0 1.5 1.5 1.5 0 0 1 .67 2.84.75.75 0 0 0-.42.67v.35a.75.75 0 0 0 .47.7A3.5 3.5 0 0 1 14 13.25a.75.75 0 0 0 1.5 0 5 5 0 0 0-2.39-4.27A3 3 0 0 0 11 4Z"/>"#;
const PERSON_ADD: &str = r#"<path fill-rule="evenodd" d="M7.9 8.55a4.5 4.5 0 0 1 2.6 4.08.75.75 0 0 1-1.5.07 3 3 0 0 0-6 0 .75.75 0 0 1-1.5-.07 4.5 4.5 0 0 1 2.6-4.08 3 3 0 1 1 3.8 0ZM6 4a1.5 1.5 0 1 0 0 3 1.5 1.5 0 0 0 0-3Zm6.75 1a.75.75 0 0 1 .75.75V7h1.25a.75.75 0 0 1 0 1.5H13.5v1.25a.75.75 0 0 1-1.5 0V8.5h-1.25a.75.75 0 0 1 0-1.5H12V5.75a.75.75 0 0 1 .75-.75Z"/>"#;
const HEART: &str = r#"<path fill-rule="evenodd" d="M8 14.25.35 6.7A4.36 4.36 0 0 1 6.5.55L8 2.05 9.5.55a4.36 4.36 0 0 1 6.15 6.15Z"/>"#;
const HEART_OUTLINE: &str = r#"<path fill-rule="evenodd" d="M4.5 1.25C2.3 1.25.75 3 .75 5c0 2.1 1.4 4 3.05 5.5A23 23 0 0 0 8 13.95a23 23 0 0 0 4.2-3.45C13.85 9 15.25 7.1 15.25 5c0-2-1.55-3.75-3.75-3.75-1.42 0-2.67.82-3.5 2-.83-1.18-2.08-2-3.5-2Zm0 1.5c1.1 0 2.1.82 2.8 2.1a.75.75 0 0 0 1.4 0c.7-1.28 1.7-2.1 2.8-2.1 1.3 0 2.25 1 2.25 2.25 0 1.5-1.05 3.05-2.6 4.45A21 21 0 0 1 8 12.2a21 21 0 0 1-3.15-2.75C3.3 8.05 2.25 6.5 2.25 5c0-1.25.95-2.25 2.25-2.25Z"/>"#;
const REPO: &str = r#"<path fill-rule="evenodd" d="M2 2.5A2.5 2.5 0 0 1 4.5 0h8.75a.75.75 0 0 1 .75.75v12.5a.75.75 0 0 1-.75.75h-2.5a.75.75 0 0 1 0-1.5h1.75v-2h-8a1 1 0 0 0-.71 1.71.75.75 0 0 1-1.07 1.05A2.5 2.5 0 0 1 2 11.5Zm10.5-1h-8a1 1 0 0 0-1 1v6.71A2.5 2.5 0 0 1 4.5 9h8ZM5 12.25a.25.25 0 0 1 .25-.25h3.5a.25.25 0 0 1 .25.25v3.25a.25.25 0 0 1-.4.2l-1.45-1.09a.25.25 0 0 0-.3 0L5.4 15.7a.25.25 0 0 1-.4-.2Z"/>"#;
const EYE: &str = r#"<path fill-rule="evenodd" d="M8 2c1.98 0 3.67 1.02 4.9 2.16C14.14 5.3 15 6.6 15.43 7.37a1.3 1.3 0 0 1 0 1.26C15 9.4 14.14 10.7 12.9 11.84 11.67 12.98 9.98 14 8 14s-3.67-1.02-4.9-2.16C1.86 10.7 1 9.4.57 8.63a1.3 1.3 0 0 1 0-1.26C1 6.6 1.86 5.3 3.1 4.16 4.33 3.02 6.02 2 8 2Zm0 1.5c-1.5 0-2.83.78-3.88 1.76A9 9 0 0 0 2.06 8a9 9 0 0 0 2.06 2.74C5.17 11.72 6.5 12.5 8 12.5s2.83-.78 3.88-1.76A9 9 0 0 0 13.94 8a9 9 0 0 0-2.06-2.74C10.83 4.28 9.5 3.5 8 3.5Zm0 2a2.5 2.5 0 1 1 0 5 2.5 2.5 0 0 1 0-5Z"/>"#;
const TEMPLATE: &str = r#"<path fill-rule="evenodd" d="M6 0h2.5v1.5H6V0Zm3.5 0H12a.75.75 0 0 1 .75.75v2.5h-1.5V1.5H9.5V0ZM3.25 0H5v1.5H4v1.75H2.5V.75A.75.75 0 0 1 3.25 0ZM2.5 4.25H4v2.5H2.5v-2.5Zm8.75 0h1.5v2.5h-1.5v-2.5ZM2.5 7.75H4V9.5h1v1.5H3.25a.75.75 0 0 1-.75-.75v-2.5Zm8.75 0h1.5v2.5a.75.75 0 0 1-.75.75H10v-1.5h1.25V7.75ZM6 9.5h3V11H6V9.5ZM5 12.5h1.5V15l1.05-.8a.75.75 0 0 1 .9 0L9.5 15v-2.5H11v3.75a.5.5 0 0 1-.8.4L8 15l-2.2 1.65a.5.5 0 0 1-.8-.4V12.5Z"/>"#;
const ARCHIVE: &str = r#"<path fill-rule="evenodd" d="M0 1.75C0 .78.78 0 1.75 0h12.5C15.22 0 16 .78 16 1.75v1.5c0 .65-.36 1.22-.89 1.52A.75.75 0 0 1 15 5.25v9A1.75 1.75 0 0 1 13.25 16H2.75A1.75 1.75 0 0 1 1 14.25v-9c0-.17.04-.33.11-.48A1.75 1.75 0 0 1 0 3.25ZM2.5 5.5v8.75c0 .14.11.25.25.25h10.5c.14 0 .25-.11.25-.25V5.5Zm-.75-4a.25.25 0 0 0-.25.25v1.5c0 .14.11.25.25.25h12.5c.14 0 .25-.11.25-.25v-1.5a.25.25 0 0 0-.25-.25ZM6 8.25a.75.75 0 0 1 .75-.75h2.5a.75.75 0 0 1 0 1.5h-2.5A.75.75 0 0 1 6 8.25Z"/>"#;
const COMMIT: &str = r#"<path fill-rule="evenodd" d="M11.93 8.5a4 4 0 0 1-7.86 0H.75a.75.75 0 0 1 0-1.5h3.32a4 4 0 0 1 7.86 0h3.32a.75.75 0 0 1 0 1.5Zm-1.43-.75a2.5 2.5 0 1 0-5 0 2.5 2.5 0 0 0 5 0Z"/>"#;
const ISSUE: &str = r#"<path fill-rule="evenodd" d="M8 0a8 8 0 1 1 0 16A8 8 0 0 1 8 0ZM1.5 8a6.5 6.5 0 1 0 13 0 6.5 6.5 0 0 0-13 0ZM8 6a2 2 0 1 1 0 4 2 2 0 0 1 0-4Z"/>"#;
const PULL_REQUEST: &str = r#"<path fill-rule="evenodd" d="M1.5 3.25a2.25 2.25 0 1 1 3 2.12v5.26a2.25 2.25 0 1 1-1.5 0V5.37A2.25 2.25 0 0 1 1.5 3.25Zm2.25-.75a.75.75 0 1 0 0 1.5.75.75 0 0 0 0-1.5Zm0 9.5a.75.75 0 1 0 0 1.5.75.75 0 0 0 0-1.5ZM9.72.22a.75.75 0 0 1 1.06 1.06L10.06 2h.69A2.75 2.75 0 0 1 13.5 4.75v5.88a2.25 2.25 0 1 1-1.5 0V4.75c0-.69-.56-1.25-1.25-1.25h-.69l.72.72a.75.75 0 1 1-1.06 1.06l-2-2a.75.75 0 0 1 0-1.06ZM12.75 12a.75.75 0 1 0 0 1.5.75.75 0 0 0 0-1.5Z"/>"#;
const REVIEW: &str = r#"<path fill-rule="evenodd" d="M1.75 1h12.5c.97 0 1.75.78 1.75 1.75v8.5A1.75 1.75 0 0 1 14.25 13H8.06l-2.57 2.57A1.46 1.46 0 0 1 3 14.54V13H1.75A1.75 1.75 0 0 1 0 11.25v-8.5C0 1.78.78 1 1.75 1Zm0 1.5a.25.25 0 0 0-.25.25v8.5c0 .14.11.25.25.25h2a.75.75 0 0 1 .75.75v2.19l2.72-2.72a.75.75 0 0 1 .53-.22h6.5a.25.25 0 0 0 .25-.25v-8.5a.25.25 0 0 0-.25-.25Zm9.03 2.72a.75.75 0 0 1 0 1.06l-3.5 3.5a.75.75 0 0 1-1.06 0l-1.5-1.5a.75.75 0 1 1 1.06-1.06l.97.97 2.97-2.97a.75.75 0 0 1 1.06 0Z"/>"#;
const REPO_PUSH: &str = r#"<path fill-rule="evenodd" d="M1 2.5A2.5 2.5 0 0 1 3.5 0h8.75a.75.75 0 0 1 .75.75v3.5a.75.75 0 0 1-1.5 0V1.5h-8a1 1 0 0 0-1 1v6.71A2.5 2.5 0 0 1 3.5 9h3.25a.75.75 0 0 1 0 1.5H3.5a1 1 0 0 0 0 2h.75a.75.75 0 0 1 0 1.5H3.5A2.5 2.5 0 0 1 1 11.5Zm12.23 7.79h-.03l-2.5-2.5v6.46a.75.75 0 0 1-1.5 0V7.79l-2.5 2.5a.75.75 0 1 1-1.06-1.06l3.78-3.78a.75.75 0 0 1 1.06 0l3.78 3.78a.75.75 0 0 1-1.03 1.06Z"/>"#;
const LOCK: &str = r#"<path fill-rule="evenodd" d="M4 4a4 4 0 0 1 8 0v2h.25c.97 0 1.75.78 1.75 1.75v5.5A1.75 1.75 0 0 1 12.25 15h-8.5A1.75 1.75 0 0 1 2 13.25v-5.5C2 6.78 2.78 6 3.75 6H4Zm8.25 3.5h-8.5a.25.25 0 0 0-.25.25v5.5c0 .14.11.25.25.25h8.5a.25.25 0 0 0 .25-.25v-5.5a.25.25 0 0 0-.25-.25ZM10.5 6V4a2.5 2.5 0 1 0-5 0v2Z"/>"#;
const MARK_GITHUB: &str = r#"<path fill-rule="evenodd" d="M8 0C3.58 0 0 3.58 0 8c0 3.54 2.29 6.53 5.47 7.59.4.07.55-.17.55-.38 0-.19-.01-.82-.01-1.49-2.01.37-2.53-.49-2.69-.94-.09-.23-.48-.94-.82-1.13-.28-.15-.68-.52-.01-.53.63-.01 1.08.58 1.23.82.72 1.21 1.87.87 2.33.66.07-.52.28-.87.51-1.07-1.78-.2-3.64-.89-3.64-3.95 0-.87.31-1.59.82-2.15-.08-.2-.36-1.02.08-2.12 0 0 .67-.21 2.2.82.64-.18 1.32-.27 2-.27.68 0 1.36.09 2 .27 1.53-1.04 2.2-.82 2.2-.82.44 1.1.16 1.92.08 2.12.51.56.82 1.27.82 2.15 0 3.07-1.87 3.75-3.65 3.95.29.25.54.73.54 1.48 0 1.07-.01 1.93-.01 2.2 0 .21.15.46.55.38A8.01 8.01 0 0 0 16 8c0-4.42-3.58-8-8-8Z"/>"#;
const PUMPKIN: &str = r##"<path fill="#ff7518" d="M8 4.5c-1-.9-2.6-1-3.9-.5C1.5 5 .5 7.4.5 9.5c0 2.6 1.7 5 4.2 5 1.3 0 2.4-.5 3.3-1.2.9.7 2 1.2 3.3 1.2 2.5 0 4.2-2.4 4.2-5 0-2.1-1-4.5-3.6-5.5-1.3-.5-2.9-.4-3.9.5Z"/><path fill="#c14d05" d="M8 5.5c-.8 1.2-1.2 2.6-1.2 4.1 0 1.5.4 2.8 1.2 3.7.8-.9 1.2-2.2 1.2-3.7 0-1.5-.4-2.9-1.2-4.1Z"/><path fill="#4a7c23" d="M7.4 4.6 7 1.7c0-.4.3-.7.7-.7h.9c.4 0 .6.4.5.7L8.6 4.6Z"/>"##;
const BAT: &str = r#"<path fill-rule="evenodd" d="M8 5.2 7.1 3.6 6.7 5c-1.6-.3-3.3-.2-4.8.6C.9 6.1.2 7 0 8.1c.8-.5 1.8-.6 2.6-.2.7.4 1.1 1.1 1.2 1.9.7-.7 1.8-.9 2.7-.5.7.3 1.2 1 1.5 1.7.3-.7.8-1.4 1.5-1.7.9-.4 2-.2 2.7.5.1-.8.5-1.5 1.2-1.9.8-.4 1.8-.3 2.6.2-.2-1.1-.9-2-1.9-2.5-1.5-.8-3.2-.9-4.8-.6l-.4-1.4Z"/>"#;

const STAT_ICONS: [Icon; 20] = [
    mono("calendar", CALENDAR,),
    mono("pin", PIN,),
    mono("star", STAR,),
    mono("fork", FORK,),
    mono("people", PEOPLE,),
    mono("person-add", PERSON_ADD,),
    mono("heart", HEART,),
    mono("heart-outline", HEART_OUTLINE,),
    mono("repo", REPO,),
    mono("star", STAR,),
    mono("fork", FORK,),
    mono("eye", EYE,),
    mono("template", TEMPLATE,),
    mono("archive", ARCHIVE,),
    mono("commit", COMMIT,),
    mono("issue", ISSUE,),
    mono("pull-request", PULL_REQUEST,),
    mono("review", REVIEW,),
    mono("repo-push", REPO_PUSH,),
    mono("lock", LOCK,),
];

const TITLE_ICONS: [Icon; 5] = [
    mono("github", MARK_GITHUB,),
    Icon {
        key:          "pumpkin",
        body:         PUMPKIN,
        accepts_fill: false,
    },
    mono("bat", BAT,),
    mono("star", STAR,),
    mono("heart", HEART,),
];

impl Icon
{
    /// Icon drawn next to a statistic row.
    pub fn for_stat(key: StatKey,) -> &'static Icon
    {
        &STAT_ICONS[key.index()]
    }

    /// Renders the icon as a nested `<svg>` element of `size` pixels at
    /// `(x, y)`.
    ///
    /// `fill` becomes the wrapper's `fill` attribute for icons that accept
    /// one and is ignored otherwise.
    pub fn render(&self, size: f64, x: f64, y: f64, fill: &str,) -> String
    {
        let fill = if self.accepts_fill { format!(r#" fill="{fill}""#) } else { String::new() };
        format!(
            r#"<svg x="{x}" y="{y}" width="{size}" height="{size}" viewBox="0 0 16 16"{fill}>{body}</svg>"#,
            x = Num(x,),
            y = Num(y,),
            size = Num(size,),
            body = self.body,
        )
    }
}

/// Looks up a title icon by key.
///
/// # Errors
///
/// Returns [`Error::UnknownIcon`] when no title icon has that key.
pub fn lookup(key: &str,) -> Result<&'static Icon, Error,>
{
    TITLE_ICONS.iter().find(|icon| icon.key == key,).ok_or_else(|| Error::UnknownIcon {
        key: key.to_owned(),
    },)
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn all_icons() -> impl Iterator<Item = &'static Icon,>
    {
        STAT_ICONS.iter().chain(TITLE_ICONS.iter(),)
    }

    #[test]
    fn fill_color_is_substituted_into_fill_attribute()
    {
        for icon in all_icons().filter(|icon| icon.accepts_fill,) {
            let rendered = icon.render(16.0, 3.0, 4.5, "#abcdef",);
            assert!(rendered.contains(r##"fill="#abcdef""##), "{}", icon.key);
        }
    }

    #[test]
    fn multicolor_icon_ignores_supplied_fill()
    {
        let pumpkin = lookup("pumpkin",).expect("title icon",);
        assert!(!pumpkin.accepts_fill);
        let rendered = pumpkin.render(20.0, 0.0, 0.0, "#abcdef",);
        assert!(!rendered.contains("#abcdef"));
        assert!(rendered.contains(r##"fill="#ff7518""##));
    }

    #[test]
    fn render_places_and_sizes_wrapper()
    {
        let rendered = Icon::for_stat(StatKey::Commits,).render(14.0, 10.5, 20.0, "red",);
        assert!(rendered.starts_with(
            r#"<svg x="10.5" y="20" width="14" height="14" viewBox="0 0 16 16" fill="red">"#
        ));
        assert!(rendered.ends_with("</svg>"));
    }

    #[test]
    fn every_stat_has_a_single_element_body()
    {
        for key in StatKey::ALL {
            let icon = Icon::for_stat(key,);
            assert!(icon.body.starts_with("<path "), "{key:?}");
            assert!(icon.body.ends_with("/>"), "{key:?}");
        }
    }

    #[test]
    fn unknown_icon_is_an_error()
    {
        assert!(matches!(lookup("ghost"), Err(Error::UnknownIcon { ref key }) if key == "ghost"));
    }
}
