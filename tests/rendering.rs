// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

use std::{fs, io::Write};

use statcard::{
    AggregateOptions, CardSettings, Category, RenderOptions, StatisticsModel, Theme,
    aggregate_results, load_config, parse_config, parse_query_results, render, write_card,
};
use tempfile::{NamedTempFile, tempdir};

const PAGES: &str = include_str!("fixtures/query_results.json");

fn fixture_model(options: &AggregateOptions,) -> StatisticsModel
{
    let results = parse_query_results(PAGES,).expect("fixture parses",);
    aggregate_results(&results, options,)
}

fn render_with(settings: &CardSettings,) -> String
{
    let model = fixture_model(&settings.aggregate,);
    render(&model, &settings.theme, settings.locale, &settings.categories, &settings.render,)
        .expect("render succeeds",)
}

fn root_dimension(svg: &str, attribute: &str,) -> f64
{
    let root = svg.lines().next().expect("root element",);
    let marker = format!(" {attribute}=\"");
    let start = root.find(&marker,).expect("attribute present",) + marker.len();
    let end = root[start..].find('"',).expect("closing quote",) + start;
    root[start..end].parse().expect("numeric attribute",)
}

#[test]
fn renders_fixture_card_end_to_end()
{
    let settings = parse_config("theme: dark\n",).expect("valid settings",);
    let svg = render_with(&settings,);

    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.contains("<title>Mona Octocat&apos;s GitHub Activity</title>"));
    for category in Category::ALL {
        assert!(svg.contains(&format!("<g id=\"{}\"", category.as_str())), "{category:?}");
    }
    assert!(svg.contains(">Non-Forks</text>"));
    assert!(svg.contains(">Past Year</text>"));
    assert!(svg.contains(">3602</text>"));
    assert!(svg.contains(">4402</text>"));
    assert!(svg.contains(">repo23</text>"));
    assert!(svg.contains(">Java 64.9%</text>"));
    assert!(svg.contains("fill=\"#0d1117\""));
}

#[test]
fn rendering_is_byte_for_byte_deterministic()
{
    let settings = parse_config("card:\n  columns: 2\n  animate_languages: true\n",).expect("valid settings",);
    assert_eq!(render_with(&settings), render_with(&settings));
}

#[test]
fn explicit_width_is_honored_with_automatic_height()
{
    let settings = parse_config("card:\n  width: 300\n",).expect("valid settings",);
    let svg = render_with(&settings,);

    assert_eq!(root_dimension(&svg, "width"), 300.0);
    assert!(root_dimension(&svg, "height") > 0.0);
}

#[test]
fn two_columns_widen_and_shorten_the_card()
{
    let one = render_with(&parse_config("",).expect("valid settings",),);
    let two = render_with(&parse_config("card:\n  columns: 2\n",).expect("valid settings",),);

    assert!(root_dimension(&two, "width") > root_dimension(&one, "width"));
    assert!(root_dimension(&two, "height") < root_dimension(&one, "height"));
}

#[test]
fn hidden_statistics_and_title_are_omitted()
{
    let settings =
        parse_config("card:\n  include_title: false\n  hide: [commits, sponsors]\n",).expect("valid settings",);
    let svg = render_with(&settings,);

    assert!(!svg.contains(">Commits</text>"));
    assert!(!svg.contains(">Sponsors</text>"));
    assert!(svg.contains(">Issues</text>"));
    assert!(!svg.contains(">Mona Octocat&apos;s GitHub Activity</text>"));
}

#[test]
fn localized_card_uses_locale_strings()
{
    let settings = parse_config("locale: de\ncategories: [general]\n",).expect("valid settings",);
    let svg = render_with(&settings,);

    assert!(svg.contains("GitHub-Aktivität von Mona Octocat"));
    assert!(svg.contains(">Allgemeine Statistiken und Infos</text>"));
    assert!(!svg.contains("<g id=\"languages\""));
}

#[test]
fn card_without_counted_repositories_drops_empty_rows()
{
    let mut results = parse_query_results(PAGES,).expect("fixture parses",);
    for page in &mut results.repositories {
        for record in &mut page.data.user.repositories.nodes {
            record.is_fork = true;
        }
    }
    let model = aggregate_results(&results, &AggregateOptions::default(),);
    let theme = Theme::builtin("light",).expect("builtin theme",);
    let svg = render(&model, &theme, "en", &Category::ALL, &RenderOptions::default(),).expect("render succeeds",);

    assert!(!svg.contains(">Most Starred Repo</text>"));
    assert!(!svg.contains("<g id=\"languages\""));
    assert!(svg.contains(">Public Repositories</text>"));
}

#[test]
fn configuration_file_drives_written_card()
{
    let mut config = NamedTempFile::new().expect("expected temp file",);
    write!(config, "theme: halloween\nfeatured_repository: repo29\ncard:\n  custom_title: Spooky Stats\n")
        .expect("expected write to succeed",);

    let settings = load_config(config.path(),).expect("valid settings",);
    let svg = render_with(&settings,);

    let dir = tempdir().expect("expected tempdir",);
    let path = dir.path().join("cards/octocat.svg",);
    write_card(&path, &svg,).expect("card written",);

    let written = fs::read_to_string(&path,).expect("card readable",);
    assert_eq!(written, svg);
    assert!(written.contains(">Spooky Stats</text>"));
    assert!(written.contains(">Featured Repo</text>"));
    assert!(written.contains("fill=\"#ff7518\""));
}
