// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Serde mirrors of the paginated GraphQL responses consumed by aggregation.
//!
//! Every page keeps the `{"data": {"user": {...}}}` envelope of the GitHub
//! GraphQL API so that fetched responses and recorded fixtures deserialize
//! without reshaping. Only the fields the aggregation engine reads are
//! modelled; everything else in a response is ignored.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::error::{self, Error};

/// Response envelope shared by every query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize,)]
pub struct Envelope<U,>
{
    /// GraphQL `data` root.
    pub data: UserRoot<U,>,
}

/// The `user` object below the `data` root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize,)]
pub struct UserRoot<U,>
{
    /// Query-specific user payload.
    pub user: U,
}

impl<U,> Envelope<U,>
{
    /// Wraps a user payload into a response envelope.
    pub fn new(user: U,) -> Self
    {
        Self {
            data: UserRoot {
                user,
            },
        }
    }

    /// Returns the user payload.
    pub fn user(&self,) -> &U
    {
        &self.data.user
    }
}

/// Cursor information attached to paginated collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo
{
    /// Whether another page follows this one.
    #[serde(default)]
    pub has_next_page: bool,
    /// Cursor to pass as `after` when requesting the next page.
    #[serde(default)]
    pub end_cursor:    Option<String,>,
}

/// Paginated collection of nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T,>
{
    /// Total number of nodes across all pages as reported by the API.
    #[serde(default)]
    pub total_count: u64,
    /// Nodes carried by this page.
    #[serde(default = "Vec::new")]
    pub nodes:       Vec<T,>,
    /// Pagination cursor for this page.
    #[serde(default)]
    pub page_info:   PageInfo,
}

/// `{ totalCount }` wrapper used for followers, watchers and similar counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct TotalCount
{
    /// Reported count.
    #[serde(default)]
    pub total_count: u64,
}

/// Contribution totals for one collection window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct ContributionTotals
{
    /// Start of the collection window as an ISO-8601 timestamp.
    #[serde(default)]
    pub started_at: Option<String,>,
    /// Years in which the user made contributions.
    #[serde(default)]
    pub contribution_years: Vec<i32,>,
    /// Commits authored in the window.
    #[serde(default)]
    pub total_commit_contributions: u64,
    /// Issues opened in the window.
    #[serde(default)]
    pub total_issue_contributions: u64,
    /// Pull requests opened in the window.
    #[serde(default)]
    pub total_pull_request_contributions: u64,
    /// Pull request reviews submitted in the window.
    #[serde(default)]
    pub total_pull_request_review_contributions: u64,
    /// Contributions made to private repositories.
    #[serde(default)]
    pub restricted_contributions_count: u64,
}

/// Profile facts returned by the basic statistics query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUser
{
    /// Account login.
    #[serde(default)]
    pub login: String,
    /// Display name, when the user configured one.
    #[serde(default)]
    pub name: Option<String,>,
    /// Account creation timestamp.
    #[serde(default)]
    pub created_at: Option<String,>,
    /// Follower count.
    #[serde(default)]
    pub followers: TotalCount,
    /// Following count.
    #[serde(default)]
    pub following: TotalCount,
    /// Number of sponsors.
    #[serde(default)]
    pub sponsors: TotalCount,
    /// Number of sponsored accounts.
    #[serde(default)]
    pub sponsoring: TotalCount,
    /// Contributions over the most recent one-year window.
    #[serde(default)]
    pub contributions_collection: ContributionTotals,
}

/// One language entry of a repository language breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize,)]
pub struct LanguageEdge
{
    /// Bytes of code written in the language.
    pub size: u64,
    /// Language descriptor.
    pub node: LanguageNode,
}

/// Language name and display color.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize,)]
pub struct LanguageNode
{
    /// Language name.
    pub name:  String,
    /// Linguist color; absent for some languages.
    #[serde(default)]
    pub color: Option<String,>,
}

/// Per-repository language breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct LanguageConnection
{
    /// Sum of all language sizes reported for the repository.
    #[serde(default)]
    pub total_size: u64,
    /// Languages in the order reported by the API.
    #[serde(default)]
    pub edges:      Vec<LanguageEdge,>,
}

/// Facts about a single owned repository.
///
/// The repository name is the record key used for de-duplication across
/// pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct RepoRecord
{
    /// Repository name, unique per owner.
    pub name:            String,
    /// Stars received.
    #[serde(default)]
    pub stargazer_count: u64,
    /// Forks created from the repository.
    #[serde(default)]
    pub fork_count:      u64,
    /// Whether the repository is itself a fork.
    #[serde(default)]
    pub is_fork:         bool,
    /// Whether the repository is archived.
    #[serde(default)]
    pub is_archived:     bool,
    /// Whether the repository is a template.
    #[serde(default)]
    pub is_template:     bool,
    /// Watchers, including the owner when they watch their own repository.
    #[serde(default)]
    pub watchers:        TotalCount,
    /// Language byte sizes.
    #[serde(default)]
    pub languages:       LanguageConnection,
}

impl RepoRecord
{
    /// Number of accounts watching the repository.
    pub fn watcher_count(&self,) -> u64
    {
        self.watchers.total_count
    }
}

/// Repository owned by the user and watched by them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize,)]
pub struct WatchedRecord
{
    /// Repository name.
    pub name: String,
}

/// Repository the user contributed to, identified by `owner/name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct ContributedRecord
{
    /// Fully qualified repository name.
    pub name_with_owner: String,
}

/// Wrapper for per-repository contribution entries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize,)]
pub struct RepositoryContribution
{
    /// Repository receiving the contributions.
    pub repository: ContributedRecord,
}

/// Contribution totals for one calendar year plus the repositories touched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct YearContributions
{
    /// Totals for the year.
    #[serde(flatten)]
    pub totals: ContributionTotals,
    /// Repositories that received commits.
    #[serde(default)]
    pub commit_contributions_by_repository: Vec<RepositoryContribution,>,
    /// Repositories that received issues.
    #[serde(default)]
    pub issue_contributions_by_repository: Vec<RepositoryContribution,>,
    /// Repositories that received pull requests.
    #[serde(default)]
    pub pull_request_contributions_by_repository: Vec<RepositoryContribution,>,
    /// Repositories that received pull request reviews.
    #[serde(default)]
    pub pull_request_review_contributions_by_repository: Vec<RepositoryContribution,>,
}

impl YearContributions
{
    /// Iterates over every repository name touched during the year.
    pub fn repository_names(&self,) -> impl Iterator<Item = &str,> + '_
    {
        self.commit_contributions_by_repository
            .iter()
            .chain(&self.issue_contributions_by_repository,)
            .chain(&self.pull_request_contributions_by_repository,)
            .chain(&self.pull_request_review_contributions_by_repository,)
            .map(|entry| entry.repository.name_with_owner.as_str(),)
    }
}

/// Payload of the repositories query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize,)]
pub struct RepositoriesUser
{
    /// Owned repositories.
    pub repositories: Connection<RepoRecord,>,
}

/// Payload of the watching query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize,)]
pub struct WatchingUser
{
    /// Owned repositories the user watches.
    pub watching: Connection<WatchedRecord,>,
}

/// Payload of the top repositories query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct TopRepositoriesUser
{
    /// Repositories contributed to during the current window.
    pub top_repositories: Connection<ContributedRecord,>,
}

/// Payload of a single-year contributions query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct YearUser
{
    /// Contributions for the requested year.
    pub contributions_collection: YearContributions,
}

/// Page of the basic profile query.
pub type ProfilePage = Envelope<ProfileUser,>;
/// Page of owned repositories.
pub type RepositoriesPage = Envelope<RepositoriesUser,>;
/// Page of watched repositories.
pub type WatchingPage = Envelope<WatchingUser,>;
/// Page of repositories contributed to in the current window.
pub type TopRepositoriesPage = Envelope<TopRepositoriesUser,>;
/// Contributions for one year.
pub type YearPage = Envelope<YearUser,>;

/// Access to the pagination cursor of a page.
///
/// Implemented by every paginated page type so the fetch layer can follow
/// cursors generically.
pub trait Paginated
{
    /// Cursor information of the page.
    fn page_info(&self,) -> &PageInfo;
}

impl Paginated for RepositoriesPage
{
    fn page_info(&self,) -> &PageInfo
    {
        &self.user().repositories.page_info
    }
}

impl Paginated for WatchingPage
{
    fn page_info(&self,) -> &PageInfo
    {
        &self.user().watching.page_info
    }
}

impl Paginated for TopRepositoriesPage
{
    fn page_info(&self,) -> &PageInfo
    {
        &self.user().top_repositories.page_info
    }
}

/// All pages gathered for one user, in fetch order per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct QueryResults
{
    /// Profile pages; scalar facts come from the first page.
    #[serde(default)]
    pub profile:          Vec<ProfilePage,>,
    /// Owned repository pages.
    #[serde(default)]
    pub repositories:     Vec<RepositoriesPage,>,
    /// Watched repository pages.
    #[serde(default)]
    pub watching:         Vec<WatchingPage,>,
    /// One page per contribution year.
    #[serde(default)]
    pub years:            Vec<YearPage,>,
    /// Top repository pages for the current window.
    #[serde(default)]
    pub top_repositories: Vec<TopRepositoriesPage,>,
}

/// Loads a page bundle from a JSON file.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read and [`Error::Json`]
/// when it is not a valid bundle.
pub fn load_query_results(path: &Path,) -> Result<QueryResults, Error,>
{
    let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
    parse_query_results(&contents,)
}

/// Parses a page bundle from a JSON string.
///
/// # Errors
///
/// Returns [`Error::Json`] when the document is not a valid bundle.
pub fn parse_query_results(contents: &str,) -> Result<QueryResults, Error,>
{
    Ok(serde_json::from_str(contents,)?,)
}

/// Writes a page bundle as pretty-printed JSON, creating parent directories.
///
/// # Errors
///
/// Returns [`Error::WriteIo`] when the file cannot be written and
/// [`Error::Json`] when serialization fails.
pub fn write_query_results(path: &Path, results: &QueryResults,) -> Result<(), Error,>
{
    if let Some(parent,) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent,).map_err(|source| error::write_io_error(parent, source,),)?;
    }

    let file = File::create(path,).map_err(|source| error::write_io_error(path, source,),)?;
    let mut writer = BufWriter::new(file,);
    serde_json::to_writer_pretty(&mut writer, results,)?;
    writer.write_all(b"\n",).map_err(|source| error::write_io_error(path, source,),)?;
    writer.flush().map_err(|source| error::write_io_error(path, source,),)
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn repository_page_deserializes_graphql_shape()
    {
        let json = r##"{
            "data": {"user": {"repositories": {
                "totalCount": 1,
                "nodes": [{
                    "name": "hello",
                    "stargazerCount": 4,
                    "forkCount": 2,
                    "isFork": false,
                    "isArchived": true,
                    "isTemplate": false,
                    "watchers": {"totalCount": 3},
                    "languages": {"totalSize": 10, "edges": [
                        {"size": 10, "node": {"name": "Rust", "color": "#dea584"}}
                    ]}
                }],
                "pageInfo": {"hasNextPage": true, "endCursor": "abc"}
            }}}
        }"##;

        let page: RepositoriesPage = serde_json::from_str(json,).expect("valid page",);
        let connection = &page.user().repositories;
        assert_eq!(connection.total_count, 1);
        assert_eq!(connection.nodes[0].name, "hello");
        assert_eq!(connection.nodes[0].watcher_count(), 3);
        assert!(connection.nodes[0].is_archived);
        assert_eq!(connection.nodes[0].languages.edges[0].node.color.as_deref(), Some("#dea584"));
        assert!(page.page_info().has_next_page);
        assert_eq!(page.page_info().end_cursor.as_deref(), Some("abc"));
    }

    #[test]
    fn missing_optional_fields_default()
    {
        let json = r#"{"data": {"user": {"repositories": {"nodes": [{"name": "bare"}]}}}}"#;

        let page: RepositoriesPage = serde_json::from_str(json,).expect("valid page",);
        let record = &page.user().repositories.nodes[0];
        assert_eq!(record.stargazer_count, 0);
        assert!(!record.is_fork);
        assert!(record.languages.edges.is_empty());
        assert!(!page.page_info().has_next_page);
    }

    #[test]
    fn year_page_lists_repository_names()
    {
        let json = r#"{"data": {"user": {"contributionsCollection": {
            "totalCommitContributions": 12,
            "restrictedContributionsCount": 1,
            "commitContributionsByRepository": [{"repository": {"nameWithOwner": "a/b"}}],
            "issueContributionsByRepository": [{"repository": {"nameWithOwner": "c/d"}}]
        }}}}"#;

        let page: YearPage = serde_json::from_str(json,).expect("valid page",);
        let year = &page.user().contributions_collection;
        assert_eq!(year.totals.total_commit_contributions, 12);
        assert_eq!(year.totals.restricted_contributions_count, 1);
        let names: Vec<&str,> = year.repository_names().collect();
        assert_eq!(names, vec!["a/b", "c/d"]);
    }

    #[test]
    fn watching_and_top_repository_pages_default_to_empty()
    {
        let watching = WatchingPage::new(WatchingUser::default(),);
        assert!(watching.user().watching.nodes.is_empty());
        assert!(!watching.page_info().has_next_page);

        let top = TopRepositoriesPage::new(TopRepositoriesUser {
            top_repositories: Connection {
                nodes: vec![ContributedRecord::default()],
                ..Connection::default()
            },
        },);
        assert_eq!(top.user().top_repositories.nodes[0].name_with_owner, "");
        assert_eq!(WatchedRecord::default().name, "");
    }

    #[test]
    fn query_results_accept_partial_bundles()
    {
        let results = parse_query_results(r#"{"profile": []}"#,).expect("valid bundle",);
        assert!(results.repositories.is_empty());
        assert!(results.top_repositories.is_empty());
    }

    #[test]
    fn query_results_reject_invalid_json()
    {
        let error = parse_query_results("{",).expect_err("expected json error",);
        assert!(matches!(error, Error::Json { .. }));
    }

    #[test]
    fn written_bundle_loads_back()
    {
        let dir = tempfile::tempdir().expect("expected tempdir",);
        let path = dir.path().join("nested/pages.json",);
        let results = QueryResults {
            profile: vec![ProfilePage::new(ProfileUser {
                login: "mona".to_owned(),
                ..ProfileUser::default()
            },)],
            ..QueryResults::default()
        };

        write_query_results(&path, &results,).expect("expected write to succeed",);
        assert_eq!(load_query_results(&path).expect("expected load to succeed"), results);
    }

    #[test]
    fn write_failure_reports_path()
    {
        let dir = tempfile::tempdir().expect("expected tempdir",);
        let error = write_query_results(dir.path(), &QueryResults::default(),).expect_err("directory target",);
        assert!(matches!(error, Error::WriteIo { ref path, .. } if path == dir.path()));
    }
}
