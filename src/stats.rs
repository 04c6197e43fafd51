// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Normalized statistics model produced by aggregation.
//!
//! The model is split into four groups (user, repositories, contributions,
//! languages). Every statistic key belongs to exactly one group and to
//! exactly one rendered [`Category`]; the mapping lives in
//! [`Category::stats`] and [`StatKey::category`].

use serde::{Deserialize, Serialize};

/// Card categories in their default order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize,)]
#[serde(rename_all = "lowercase")]
pub enum Category
{
    /// Profile facts and highlighted repositories.
    General,
    /// Counters accumulated over owned repositories.
    Repositories,
    /// Contribution counters.
    Contributions,
    /// Language distribution chart.
    Languages,
}

impl Category
{
    /// All categories in default rendering order.
    pub const ALL: [Category; 4] =
        [Category::General, Category::Repositories, Category::Contributions, Category::Languages,];

    /// Statistic keys rendered as rows of the category, in row order.
    pub fn stats(self,) -> &'static [StatKey]
    {
        match self {
            Self::General => &[
                StatKey::Joined,
                StatKey::Featured,
                StatKey::MostStarred,
                StatKey::MostForked,
                StatKey::Followers,
                StatKey::Following,
                StatKey::Sponsors,
                StatKey::Sponsoring,
            ],
            Self::Repositories => &[
                StatKey::Public,
                StatKey::StarredBy,
                StatKey::ForkedBy,
                StatKey::WatchedBy,
                StatKey::Templates,
                StatKey::Archived,
            ],
            Self::Contributions => &[
                StatKey::Commits,
                StatKey::Issues,
                StatKey::Prs,
                StatKey::Reviews,
                StatKey::ContribTo,
                StatKey::Private,
            ],
            Self::Languages => &[],
        }
    }

    /// Configuration name of the category.
    pub fn as_str(self,) -> &'static str
    {
        match self {
            Self::General => "general",
            Self::Repositories => "repositories",
            Self::Contributions => "contributions",
            Self::Languages => "languages",
        }
    }
}

/// Identifier of a single statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize,)]
#[serde(rename_all = "camelCase")]
pub enum StatKey
{
    /// Year the account joined.
    Joined,
    /// Featured repository chosen by the user.
    Featured,
    /// Repository with the most stars.
    MostStarred,
    /// Repository with the most forks.
    MostForked,
    /// Followers.
    Followers,
    /// Accounts followed.
    Following,
    /// Sponsors.
    Sponsors,
    /// Accounts sponsored.
    Sponsoring,
    /// Public owned repositories.
    Public,
    /// Stars received.
    StarredBy,
    /// Forks received.
    ForkedBy,
    /// Watchers, excluding self-watches.
    WatchedBy,
    /// Template repositories.
    Templates,
    /// Archived repositories.
    Archived,
    /// Commits.
    Commits,
    /// Issues opened.
    Issues,
    /// Pull requests opened.
    Prs,
    /// Pull request reviews.
    Reviews,
    /// Repositories contributed to.
    ContribTo,
    /// Private contributions.
    Private,
}

impl StatKey
{
    /// Every statistic key.
    pub const ALL: [StatKey; 20] = [
        StatKey::Joined,
        StatKey::Featured,
        StatKey::MostStarred,
        StatKey::MostForked,
        StatKey::Followers,
        StatKey::Following,
        StatKey::Sponsors,
        StatKey::Sponsoring,
        StatKey::Public,
        StatKey::StarredBy,
        StatKey::ForkedBy,
        StatKey::WatchedBy,
        StatKey::Templates,
        StatKey::Archived,
        StatKey::Commits,
        StatKey::Issues,
        StatKey::Prs,
        StatKey::Reviews,
        StatKey::ContribTo,
        StatKey::Private,
    ];

    /// Category the key is rendered in.
    pub fn category(self,) -> Category
    {
        match self {
            Self::Joined
            | Self::Featured
            | Self::MostStarred
            | Self::MostForked
            | Self::Followers
            | Self::Following
            | Self::Sponsors
            | Self::Sponsoring => Category::General,
            Self::Public
            | Self::StarredBy
            | Self::ForkedBy
            | Self::WatchedBy
            | Self::Templates
            | Self::Archived => Category::Repositories,
            Self::Commits
            | Self::Issues
            | Self::Prs
            | Self::Reviews
            | Self::ContribTo
            | Self::Private => Category::Contributions,
        }
    }

    /// Position of the key inside [`StatKey::ALL`], used to index label
    /// tables.
    pub fn index(self,) -> usize
    {
        self as usize
    }
}

/// A statistic with its current value and, where one exists, a second
/// column.
///
/// For repository counters `total` covers every owned repository including
/// forks; for contribution counters it is the cumulative value merged from
/// the yearly pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize,)]
pub struct StatPair
{
    /// Value for the counted subset (eligible repositories, current window).
    pub current: u64,
    /// Second column, absent until known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total:   Option<u64,>,
}

impl StatPair
{
    /// Creates a pair with both columns.
    pub fn new(current: u64, total: u64,) -> Self
    {
        Self {
            current,
            total: Some(total,),
        }
    }

    /// Creates a pair whose second column is not known yet.
    pub fn current(current: u64,) -> Self
    {
        Self {
            current,
            total: None,
        }
    }
}

/// User-level facts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct UserStats
{
    /// Year the account joined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined:       Option<i32,>,
    /// Featured repository, present only when it names an eligible
    /// repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured:     Option<String,>,
    /// Most starred eligible repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub most_starred: Option<String,>,
    /// Most forked eligible repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub most_forked:  Option<String,>,
    /// Followers.
    pub followers:    u64,
    /// Following.
    pub following:    u64,
    /// Sponsors.
    pub sponsors:     u64,
    /// Sponsoring.
    pub sponsoring:   u64,
}

/// Repository-level counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct RepoStats
{
    /// Owned public repositories.
    pub public:     StatPair,
    /// Stars received.
    pub starred_by: StatPair,
    /// Forks received.
    pub forked_by:  StatPair,
    /// Watchers, excluding self-watches.
    pub watched_by: StatPair,
    /// Template repositories.
    pub templates:  StatPair,
    /// Archived repositories.
    pub archived:   StatPair,
}

/// Contribution counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct ContribStats
{
    /// Commits.
    pub commits:    StatPair,
    /// Issues.
    pub issues:     StatPair,
    /// Pull requests.
    pub prs:        StatPair,
    /// Pull request reviews.
    pub reviews:    StatPair,
    /// Repositories contributed to.
    pub contrib_to: StatPair,
    /// Private contributions.
    pub private:    StatPair,
}

/// One kept language.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize,)]
pub struct LanguageShare
{
    /// Language name.
    pub name:     String,
    /// Display color.
    pub color:    String,
    /// Bytes across counted repositories.
    pub size:     u64,
    /// `size` divided by the reported total.
    pub fraction: f64,
}

/// Language distribution across counted repositories.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct LanguageStats
{
    /// Sum of the kept languages' sizes.
    pub total_size: u64,
    /// Kept languages sorted by descending size.
    pub languages:  Vec<LanguageShare,>,
}

/// Aggregated statistics for one user.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize,)]
pub struct StatisticsModel
{
    /// Account login.
    pub login:     String,
    /// Display name, when configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name:      Option<String,>,
    /// User-level facts.
    pub user:      UserStats,
    /// Repository counters.
    pub repo:      RepoStats,
    /// Contribution counters.
    pub contrib:   ContribStats,
    /// Language distribution.
    pub languages: LanguageStats,
}

/// Borrowed view of a single statistic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq,)]
pub enum StatValue<'a,>
{
    /// A calendar year.
    Year(i32,),
    /// A repository name.
    Repository(&'a str,),
    /// A single count.
    Count(u64,),
    /// A count with an optional second column.
    Pair(StatPair,),
}

impl StatisticsModel
{
    /// Name shown in the card title: the display name, or the login.
    pub fn display_name(&self,) -> &str
    {
        self.name.as_deref().filter(|name| !name.trim().is_empty(),).unwrap_or(&self.login,)
    }

    /// Looks up a statistic by key. Returns `None` for keys omitted from the
    /// model (for example `mostStarred` when every repository is a fork).
    pub fn value(&self, key: StatKey,) -> Option<StatValue<'_,>,>
    {
        let user = &self.user;
        let value = match key {
            StatKey::Joined => StatValue::Year(user.joined?,),
            StatKey::Featured => StatValue::Repository(user.featured.as_deref()?,),
            StatKey::MostStarred => StatValue::Repository(user.most_starred.as_deref()?,),
            StatKey::MostForked => StatValue::Repository(user.most_forked.as_deref()?,),
            StatKey::Followers => StatValue::Count(user.followers,),
            StatKey::Following => StatValue::Count(user.following,),
            StatKey::Sponsors => StatValue::Count(user.sponsors,),
            StatKey::Sponsoring => StatValue::Count(user.sponsoring,),
            StatKey::Public => StatValue::Pair(self.repo.public,),
            StatKey::StarredBy => StatValue::Pair(self.repo.starred_by,),
            StatKey::ForkedBy => StatValue::Pair(self.repo.forked_by,),
            StatKey::WatchedBy => StatValue::Pair(self.repo.watched_by,),
            StatKey::Templates => StatValue::Pair(self.repo.templates,),
            StatKey::Archived => StatValue::Pair(self.repo.archived,),
            StatKey::Commits => StatValue::Pair(self.contrib.commits,),
            StatKey::Issues => StatValue::Pair(self.contrib.issues,),
            StatKey::Prs => StatValue::Pair(self.contrib.prs,),
            StatKey::Reviews => StatValue::Pair(self.contrib.reviews,),
            StatKey::ContribTo => StatValue::Pair(self.contrib.contrib_to,),
            StatKey::Private => StatValue::Pair(self.contrib.private,),
        };
        Some(value,)
    }
}
