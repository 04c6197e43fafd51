// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Aggregation engine merging paginated query results into a
//! [`StatisticsModel`].
//!
//! Pages of each category are concatenated in page order and repositories
//! are de-duplicated by name, the first occurrence winning. A repository is
//! *eligible* when it is not a fork and not excluded by name; only eligible
//! repositories feed the first column of repository counters, the
//! most-starred/most-forked selection and the language distribution. The
//! second column of repository counters covers every owned repository.
//!
//! Aggregation is a pure function of its inputs and never fails: degenerate
//! inputs such as "every repository is a fork" produce a model with empty
//! language data and no most-starred/most-forked keys.

use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::{debug, info};

use crate::{
    pages::{
        ProfilePage, ProfileUser, QueryResults, RepoRecord, RepositoriesPage, TopRepositoriesPage,
        WatchingPage, YearPage,
    },
    stats::{
        ContribStats, LanguageShare, LanguageStats, RepoStats, StatPair, StatisticsModel,
        UserStats,
    },
};

/// Default number of languages kept in the distribution.
pub const DEFAULT_MAX_LANGUAGES: usize = 8;
/// Color used for languages without a linguist color.
pub const FALLBACK_LANGUAGE_COLOR: &str = "#8b949e";
/// Smallest share a language needs to survive automatic selection; smaller
/// shares would display as `0.0%`.
const AUTO_LANGUAGE_THRESHOLD: f64 = 0.0005;

/// Options controlling which repositories and languages are counted.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct AggregateOptions
{
    /// Drop languages too small to display after truncation.
    pub auto_languages:        bool,
    /// Maximum number of kept languages; values below one are treated as one.
    pub max_languages:         usize,
    /// Repository names excluded from repository and language aggregation.
    pub excluded_repositories: BTreeSet<String,>,
    /// Repository to feature in place of the computed most-starred one.
    pub featured_repository:   Option<String,>,
}

impl Default for AggregateOptions
{
    fn default() -> Self
    {
        Self {
            auto_languages:        false,
            max_languages:         DEFAULT_MAX_LANGUAGES,
            excluded_repositories: BTreeSet::new(),
            featured_repository:   None,
        }
    }
}

impl AggregateOptions
{
    fn is_eligible(&self, record: &RepoRecord,) -> bool
    {
        !record.is_fork && !self.excluded_repositories.contains(&record.name,)
    }
}

/// Aggregates a full bundle of pages.
///
/// Equivalent to calling [`aggregate`] with the bundle's page lists.
pub fn aggregate_results(results: &QueryResults, options: &AggregateOptions,) -> StatisticsModel
{
    aggregate(
        &results.profile,
        &results.repositories,
        &results.watching,
        &results.years,
        &results.top_repositories,
        options,
    )
}

/// Builds the statistics model from already fetched pages.
///
/// The year pages are merged through [`StatisticsModel::with_prior_years`]
/// after the current-window statistics are computed.
///
/// # Examples
///
/// ```
/// use statcard::{AggregateOptions, aggregate};
///
/// let model = aggregate(&[], &[], &[], &[], &[], &AggregateOptions::default(),);
/// assert_eq!(model.languages.total_size, 0);
/// assert!(model.user.most_starred.is_none());
/// ```
pub fn aggregate(
    profile: &[ProfilePage],
    repositories: &[RepositoriesPage],
    watching: &[WatchingPage],
    years: &[YearPage],
    top_repositories: &[TopRepositoriesPage],
    options: &AggregateOptions,
) -> StatisticsModel
{
    let default_profile = ProfileUser::default();
    let user = profile.first().map_or(&default_profile, |page| page.user(),);

    let owned = unique_repositories(repositories,);
    let eligible: Vec<&RepoRecord,> =
        owned.iter().copied().filter(|record| options.is_eligible(record,),).collect();
    let self_watched = watched_names(watching,);

    info!(
        "aggregating {} repositories ({} eligible) for {}",
        owned.len(),
        eligible.len(),
        user.login
    );

    let repo = RepoStats {
        public:     pair(&eligible, &owned, |_| 1,),
        starred_by: pair(&eligible, &owned, |record| record.stargazer_count,),
        forked_by:  pair(&eligible, &owned, |record| record.fork_count,),
        watched_by: pair(&eligible, &owned, |record| {
            let own_watch = u64::from(self_watched.contains(record.name.as_str(),),);
            record.watcher_count().saturating_sub(own_watch,)
        },),
        templates:  pair(&eligible, &owned, |record| u64::from(record.is_template,),),
        archived:   pair(&eligible, &owned, |record| u64::from(record.is_archived,),),
    };

    let featured = options
        .featured_repository
        .as_deref()
        .and_then(|name| eligible.iter().find(|record| record.name == name,),)
        .map(|record| record.name.clone(),);
    let most_starred = featured
        .clone()
        .or_else(|| select_max(&eligible, |record| record.stargazer_count,),);
    let most_forked = select_max(&eligible, |record| record.fork_count,);

    let window = &user.contributions_collection;
    let contrib = ContribStats {
        commits:    StatPair::current(window.total_commit_contributions,),
        issues:     StatPair::current(window.total_issue_contributions,),
        prs:        StatPair::current(window.total_pull_request_contributions,),
        reviews:    StatPair::current(window.total_pull_request_review_contributions,),
        contrib_to: StatPair::current(count_top_repositories(top_repositories,),),
        private:    StatPair::current(window.restricted_contributions_count,),
    };

    let model = StatisticsModel {
        login: user.login.clone(),
        name: user.name.clone(),
        user: UserStats {
            joined: joined_year(user,),
            featured,
            most_starred,
            most_forked,
            followers: user.followers.total_count,
            following: user.following.total_count,
            sponsors: user.sponsors.total_count,
            sponsoring: user.sponsoring.total_count,
        },
        repo,
        contrib,
        languages: rank_languages(&eligible, options,),
    };

    model.with_prior_years(years,)
}

impl StatisticsModel
{
    /// Attaches the cumulative second column of every contribution counter.
    ///
    /// Counters are summed over the year pages; the contributed-to total is
    /// the number of distinct repositories named across them, never less than
    /// the current value. Without year pages the model is returned unchanged.
    pub fn with_prior_years(mut self, years: &[YearPage],) -> Self
    {
        if years.is_empty() {
            debug!("no year pages supplied; contribution totals left empty");
            return self;
        }

        let mut commits = 0u64;
        let mut issues = 0u64;
        let mut prs = 0u64;
        let mut reviews = 0u64;
        let mut private = 0u64;
        let mut repositories = HashSet::new();

        for page in years {
            let year = &page.user().contributions_collection;
            commits += year.totals.total_commit_contributions;
            issues += year.totals.total_issue_contributions;
            prs += year.totals.total_pull_request_contributions;
            reviews += year.totals.total_pull_request_review_contributions;
            private += year.totals.restricted_contributions_count;
            repositories.extend(year.repository_names(),);
        }

        let contrib = &mut self.contrib;
        contrib.commits.total = Some(commits,);
        contrib.issues.total = Some(issues,);
        contrib.prs.total = Some(prs,);
        contrib.reviews.total = Some(reviews,);
        contrib.private.total = Some(private,);
        contrib.contrib_to.total =
            Some((repositories.len() as u64).max(contrib.contrib_to.current,),);

        debug!("merged {} year pages", years.len());
        self
    }
}

fn unique_repositories(pages: &[RepositoriesPage],) -> Vec<&RepoRecord,>
{
    let mut seen = HashSet::new();
    let mut records = Vec::new();
    for record in pages.iter().flat_map(|page| &page.user().repositories.nodes,) {
        if seen.insert(record.name.as_str(),) {
            records.push(record,);
        } else {
            debug!("skipping duplicate repository record '{}'", record.name);
        }
    }
    records
}

fn watched_names(pages: &[WatchingPage],) -> HashSet<&str,>
{
    pages
        .iter()
        .flat_map(|page| &page.user().watching.nodes,)
        .map(|record| record.name.as_str(),)
        .collect()
}

fn count_top_repositories(pages: &[TopRepositoriesPage],) -> u64
{
    let names: HashSet<&str,> = pages
        .iter()
        .flat_map(|page| &page.user().top_repositories.nodes,)
        .map(|record| record.name_with_owner.as_str(),)
        .collect();
    names.len() as u64
}

fn pair<F,>(eligible: &[&RepoRecord], owned: &[&RepoRecord], metric: F,) -> StatPair
where
    F: Fn(&RepoRecord,) -> u64,
{
    let current = eligible.iter().map(|record| metric(*record,),).sum();
    let total = owned.iter().map(|record| metric(*record,),).sum();
    StatPair::new(current, total,)
}

/// Picks the repository with the largest metric; the first one encountered
/// wins ties.
fn select_max<F,>(eligible: &[&RepoRecord], metric: F,) -> Option<String,>
where
    F: Fn(&RepoRecord,) -> u64,
{
    let mut best: Option<(&RepoRecord, u64,),> = None;
    for &record in eligible {
        let value = metric(record,);
        if best.is_none_or(|(_, best_value,)| value > best_value,) {
            best = Some((record, value,),);
        }
    }
    best.map(|(record, _,)| record.name.clone(),)
}

fn joined_year(user: &ProfileUser,) -> Option<i32,>
{
    user.contributions_collection.contribution_years.iter().copied().min().or_else(|| {
        user.created_at.as_deref().and_then(|stamp| stamp.get(..4,),).and_then(|year| year.parse().ok(),)
    },)
}

struct LanguageTotal<'a,>
{
    name:  &'a str,
    color: Option<&'a str,>,
    size:  u64,
}

fn rank_languages(eligible: &[&RepoRecord], options: &AggregateOptions,) -> LanguageStats
{
    let mut totals: Vec<LanguageTotal<'_,>,> = Vec::new();
    let mut positions: HashMap<&str, usize,> = HashMap::new();

    for edge in eligible.iter().flat_map(|record| &record.languages.edges,) {
        if edge.size == 0 {
            continue;
        }
        let name = edge.node.name.as_str();
        let color = edge.node.color.as_deref();
        match positions.get(name,) {
            Some(&position,) => {
                let entry = &mut totals[position];
                entry.size += edge.size;
                if entry.color.is_none() {
                    entry.color = color;
                }
            }
            None => {
                positions.insert(name, totals.len(),);
                totals.push(LanguageTotal {
                    name,
                    color,
                    size: edge.size,
                },);
            }
        }
    }

    // Stable sort keeps first-encountered order among equal sizes.
    totals.sort_by(|left, right| right.size.cmp(&left.size,),);

    let limit = options.max_languages.max(1,);
    if totals.len() > limit {
        debug!("truncating {} languages to {}", totals.len(), limit);
        totals.truncate(limit,);
    }

    if options.auto_languages {
        let kept: u64 = totals.iter().map(|language| language.size,).sum();
        totals.retain(|language| language.size as f64 / kept as f64 >= AUTO_LANGUAGE_THRESHOLD,);
    }

    let total_size: u64 = totals.iter().map(|language| language.size,).sum();
    let languages = totals
        .into_iter()
        .map(|language| LanguageShare {
            name:     language.name.to_owned(),
            color:    language.color.unwrap_or(FALLBACK_LANGUAGE_COLOR,).to_owned(),
            size:     language.size,
            fraction: language.size as f64 / total_size as f64,
        },)
        .collect();

    LanguageStats {
        total_size,
        languages,
    }
}
