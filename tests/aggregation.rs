// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

use std::collections::BTreeSet;

use statcard::{
    AggregateOptions, QueryResults, StatPair, StatisticsModel, aggregate, aggregate_results,
    parse_query_results,
};

const SINGLE_PAGE: &str = include_str!("fixtures/query_results.json");
const MULTIPAGE: &str = include_str!("fixtures/query_results_multipage.json");

fn fixture(contents: &str,) -> QueryResults
{
    parse_query_results(contents,).expect("fixture parses",)
}

fn all_languages() -> AggregateOptions
{
    AggregateOptions {
        max_languages: 100,
        ..AggregateOptions::default()
    }
}

fn assert_contributions(model: &StatisticsModel,)
{
    let contrib = &model.contrib;
    assert_eq!(contrib.commits, StatPair::new(3602, 4402));
    assert_eq!(contrib.issues, StatPair::new(79, 81));
    assert_eq!(contrib.prs, StatPair::new(289, 289));
    assert_eq!(contrib.reviews, StatPair::new(315, 315));
    assert_eq!(contrib.contrib_to, StatPair::new(3, 7));
    assert_eq!(contrib.private, StatPair::new(105, 105));
}

#[test]
fn aggregates_single_page_fixture()
{
    let model = aggregate_results(&fixture(SINGLE_PAGE,), &all_languages(),);

    assert_eq!(model.login, "octocat");
    assert_eq!(model.display_name(), "Mona Octocat");
    assert_eq!(model.user.joined, Some(2011));
    assert_eq!(model.user.most_starred.as_deref(), Some("repo23"));
    assert_eq!(model.user.most_forked.as_deref(), Some("repo23"));
    assert_eq!(model.user.followers, 9);
    assert_eq!(model.user.following, 7);
    assert_eq!(model.user.sponsors, 7);
    assert_eq!(model.user.sponsoring, 5);

    let repo = &model.repo;
    assert_eq!(repo.public, StatPair::new(29, 31));
    assert_eq!(repo.starred_by, StatPair::new(36, 36));
    assert_eq!(repo.forked_by, StatPair::new(28, 28));
    assert_eq!(repo.watched_by, StatPair::new(3, 3));
    assert_eq!(repo.archived, StatPair::new(2, 2));
    assert_eq!(repo.templates, StatPair::new(1, 1));

    assert_contributions(&model,);

    assert_eq!(model.languages.total_size, 5_222_379);
    assert_eq!(model.languages.languages.len(), 11);
    assert_eq!(model.languages.languages[0].name, "Java");
    assert_eq!(model.languages.languages[0].color, "#b07219");
    assert_eq!(model.languages.languages[10].name, "Batchfile");
}

#[test]
fn multipage_fixture_matches_single_page()
{
    let options = all_languages();
    let single = aggregate_results(&fixture(SINGLE_PAGE,), &options,);
    let multi = aggregate_results(&fixture(MULTIPAGE,), &options,);
    assert_eq!(single, multi);
}

#[test]
fn excluded_repository_changes_only_counted_column()
{
    for contents in [SINGLE_PAGE, MULTIPAGE,] {
        let baseline = aggregate_results(&fixture(contents,), &all_languages(),);
        let options = AggregateOptions {
            excluded_repositories: BTreeSet::from(["repo29".to_owned(),],),
            ..all_languages()
        };
        let model = aggregate_results(&fixture(contents,), &options,);

        assert_eq!(model.user.joined, Some(2011));
        assert_eq!(model.user.followers, 9);
        assert_eq!(model.user.following, baseline.user.following);
        assert_eq!(model.user.sponsors, baseline.user.sponsors);
        assert_eq!(model.user.sponsoring, baseline.user.sponsoring);
        assert_eq!(model.user.most_starred.as_deref(), Some("repo23"));
        assert_eq!(model.user.most_forked, baseline.user.most_forked);

        assert_eq!(model.repo.public, StatPair::new(28, 31));
        assert_eq!(model.repo.starred_by, StatPair::new(34, 36));
        assert_eq!(model.repo.watched_by, StatPair::new(2, 3));
        assert_eq!(model.languages.languages.len(), 10);
        assert_eq!(model.languages.total_size, 5_147_159);
        assert!(model.languages.languages.iter().all(|language| language.name != "GraphQL"));
        assert_contributions(&model,);
    }
}

#[test]
fn all_forks_leave_counted_column_empty()
{
    let mut results = fixture(SINGLE_PAGE,);
    for page in &mut results.repositories {
        for record in &mut page.data.user.repositories.nodes {
            record.is_fork = true;
        }
    }

    let model = aggregate_results(&results, &AggregateOptions::default(),);
    assert_eq!(model.repo.public, StatPair::new(0, 31));
    assert_eq!(model.repo.starred_by, StatPair::new(0, 36));
    assert!(model.user.most_starred.is_none());
    assert!(model.user.most_forked.is_none());
    assert!(model.languages.languages.is_empty());
    assert_eq!(model.languages.total_size, 0);
    assert_contributions(&model,);
}

#[test]
fn default_options_keep_eight_languages()
{
    let model = aggregate_results(&fixture(SINGLE_PAGE,), &AggregateOptions::default(),);
    assert_eq!(model.languages.languages.len(), 8);
    assert_eq!(model.languages.total_size, 5_220_354);
}

#[test]
fn max_languages_truncates_and_renormalizes()
{
    let options = AggregateOptions {
        max_languages: 3,
        ..AggregateOptions::default()
    };
    let model = aggregate_results(&fixture(SINGLE_PAGE,), &options,);

    let names: Vec<&str,> = model.languages.languages.iter().map(|language| language.name.as_str(),).collect();
    assert_eq!(names, ["Java", "HTML", "Python"]);
    assert_eq!(model.languages.total_size, 5_003_812);
    let sum: f64 = model.languages.languages.iter().map(|language| language.fraction,).sum();
    assert!((sum - 1.0).abs() < 1e-9);
}

#[test]
fn auto_languages_drops_invisible_shares()
{
    let options = AggregateOptions {
        auto_languages: true,
        ..all_languages()
    };
    let model = aggregate_results(&fixture(SINGLE_PAGE,), &options,);

    assert_eq!(model.languages.languages.len(), 6);
    assert_eq!(model.languages.total_size, 5_216_526);
    assert!(model.languages.languages.iter().all(|language| language.fraction >= 0.0005));
}

#[test]
fn featured_repository_overrides_most_starred()
{
    let options = AggregateOptions {
        featured_repository: Some("repo29".to_owned(),),
        ..AggregateOptions::default()
    };
    let model = aggregate_results(&fixture(SINGLE_PAGE,), &options,);
    assert_eq!(model.user.featured.as_deref(), Some("repo29"));
    assert_eq!(model.user.most_starred.as_deref(), Some("repo29"));

    let forked = AggregateOptions {
        featured_repository: Some("repo30".to_owned(),),
        ..AggregateOptions::default()
    };
    let model = aggregate_results(&fixture(SINGLE_PAGE,), &forked,);
    assert!(model.user.featured.is_none());
    assert_eq!(model.user.most_starred.as_deref(), Some("repo23"));
}

#[test]
fn prior_years_merge_separately()
{
    let results = fixture(SINGLE_PAGE,);
    let options = AggregateOptions::default();
    let current = aggregate(
        &results.profile,
        &results.repositories,
        &results.watching,
        &[],
        &results.top_repositories,
        &options,
    );
    assert_eq!(current.contrib.commits, StatPair::current(3602));
    assert_eq!(current.contrib.contrib_to, StatPair::current(3));

    let merged = current.with_prior_years(&results.years,);
    assert_eq!(merged, aggregate_results(&results, &options));
}

#[test]
fn model_serializes_to_json()
{
    let model = aggregate_results(&fixture(SINGLE_PAGE,), &AggregateOptions::default(),);
    let json = serde_json::to_value(&model,).expect("model serializes",);

    assert_eq!(json["repo"]["public"]["current"], 29);
    assert_eq!(json["repo"]["public"]["total"], 31);
    assert_eq!(json["contrib"]["contribTo"]["total"], 7);
    assert_eq!(json["user"]["mostStarred"], "repo23");
}
