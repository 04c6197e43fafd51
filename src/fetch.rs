// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Fetches the page bundle of a user through the GitHub GraphQL API.
//!
//! Five query families are executed: the profile, owned repositories,
//! watched repositories, repositories contributed to during the current
//! window, and one contributions query per contribution year. Paginated
//! families follow `endCursor` until `hasNextPage` is false or the page
//! limit is reached. Requests are not retried.

use octocrab::Octocrab;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Value, json};
use tracing::{debug, info, warn};

use crate::{
    error::Error,
    pages::{
        Envelope, PageInfo, Paginated, ProfilePage, QueryResults, RepositoriesPage, TopRepositoriesPage,
        WatchingPage, YearPage,
    },
};

/// Upper bound of pages requested per paginated query.
pub const MAX_PAGES: usize = 50;

const PROFILE_QUERY: &str = r"
query($login: String!) {
  user(login: $login) {
    login
    name
    createdAt
    followers { totalCount }
    following { totalCount }
    sponsors { totalCount }
    sponsoring { totalCount }
    contributionsCollection {
      startedAt
      contributionYears
      totalCommitContributions
      totalIssueContributions
      totalPullRequestContributions
      totalPullRequestReviewContributions
      restrictedContributionsCount
    }
  }
}";

const REPOSITORIES_QUERY: &str = r"
query($login: String!, $after: String) {
  user(login: $login) {
    repositories(first: 100, after: $after, ownerAffiliations: OWNER) {
      totalCount
      nodes {
        name
        stargazerCount
        forkCount
        isFork
        isArchived
        isTemplate
        watchers { totalCount }
        languages(first: 100, orderBy: {field: SIZE, direction: DESC}) {
          totalSize
          edges { size node { name color } }
        }
      }
      pageInfo { hasNextPage endCursor }
    }
  }
}";

const WATCHING_QUERY: &str = r"
query($login: String!, $after: String) {
  user(login: $login) {
    watching(first: 100, after: $after, ownerAffiliations: OWNER) {
      totalCount
      nodes { name }
      pageInfo { hasNextPage endCursor }
    }
  }
}";

const TOP_REPOSITORIES_QUERY: &str = r"
query($login: String!, $after: String, $since: DateTime) {
  user(login: $login) {
    topRepositories(first: 100, after: $after, since: $since, orderBy: {field: UPDATED_AT, direction: DESC}) {
      totalCount
      nodes { nameWithOwner }
      pageInfo { hasNextPage endCursor }
    }
  }
}";

const YEAR_QUERY: &str = r"
query($login: String!, $from: DateTime!, $to: DateTime!) {
  user(login: $login) {
    contributionsCollection(from: $from, to: $to) {
      startedAt
      totalCommitContributions
      totalIssueContributions
      totalPullRequestContributions
      totalPullRequestReviewContributions
      restrictedContributionsCount
      commitContributionsByRepository(maxRepositories: 100) { repository { nameWithOwner } }
      issueContributionsByRepository(maxRepositories: 100) { repository { nameWithOwner } }
      pullRequestContributionsByRepository(maxRepositories: 100) { repository { nameWithOwner } }
      pullRequestReviewContributionsByRepository(maxRepositories: 100) { repository { nameWithOwner } }
    }
  }
}";

/// Raw GraphQL response before the `user` payload is validated.
#[derive(Debug, Deserialize,)]
struct Response<U,>
{
    #[serde(default = "Option::default")]
    data:   Option<ResponseData<U,>,>,
    #[serde(default = "Vec::new")]
    errors: Vec<ResponseError,>,
}

#[derive(Debug, Deserialize,)]
struct ResponseData<U,>
{
    #[serde(default = "Option::default")]
    user: Option<U,>,
}

#[derive(Debug, Deserialize,)]
struct ResponseError
{
    message: String,
}

/// Builds an authenticated GitHub client.
///
/// # Errors
///
/// Returns [`Error::Service`](Error::Service) when the client cannot be
/// constructed.
pub fn client(token: &str,) -> Result<Octocrab, Error,>
{
    Octocrab::builder()
        .personal_token(token.to_owned(),)
        .build()
        .map_err(|error| Error::service(format!("failed to initialize GitHub client: {error}"),),)
}

/// Fetches every page the aggregation engine consumes for `login`.
///
/// # Errors
///
/// Returns [`Error::Service`](Error::Service) when a request fails, GitHub
/// reports GraphQL errors, or the user does not exist.
///
/// # Example
///
/// ```no_run
/// use statcard::{aggregate_results, fetch, AggregateOptions};
///
/// # async fn example() -> Result<(), statcard::Error> {
/// let token = std::env::var("GITHUB_TOKEN",).unwrap_or_default();
/// let client = fetch::client(&token,)?;
/// let results = fetch::fetch_query_results(&client, "octocat",).await?;
/// let model = aggregate_results(&results, &AggregateOptions::default(),);
/// println!("{}", model.display_name());
/// # Ok(())
/// # }
/// ```
pub async fn fetch_query_results(client: &Octocrab, login: &str,) -> Result<QueryResults, Error,>
{
    let profile: ProfilePage = query(client, login, PROFILE_QUERY, json!({ "login": login }),).await?;
    let since = profile.user().contributions_collection.started_at.clone();
    let years = profile.user().contributions_collection.contribution_years.clone();

    let repositories: Vec<RepositoriesPage,> =
        paginate(client, login, REPOSITORIES_QUERY, json!({ "login": login }),).await?;
    let watching: Vec<WatchingPage,> = paginate(client, login, WATCHING_QUERY, json!({ "login": login }),).await?;
    let top_repositories: Vec<TopRepositoriesPage,> = paginate(
        client,
        login,
        TOP_REPOSITORIES_QUERY,
        json!({ "login": login, "since": since }),
    )
    .await?;

    let mut year_pages = Vec::with_capacity(years.len(),);
    for year in years {
        let (from, to,) = year_window(year,);
        debug!("fetching contributions of {login} for {year}");
        let page: YearPage =
            query(client, login, YEAR_QUERY, json!({ "login": login, "from": from, "to": to }),).await?;
        year_pages.push(page,);
    }

    info!(
        "fetched {} repository pages, {} watching pages, {} top repository pages and {} years for {login}",
        repositories.len(),
        watching.len(),
        top_repositories.len(),
        year_pages.len()
    );

    Ok(QueryResults {
        profile: vec![profile],
        repositories,
        watching,
        years: year_pages,
        top_repositories,
    },)
}

async fn paginate<U,>(
    client: &Octocrab,
    login: &str,
    document: &str,
    mut variables: Value,
) -> Result<Vec<Envelope<U,>,>, Error,>
where
    U: DeserializeOwned,
    Envelope<U,>: Paginated,
{
    let mut pages = Vec::new();
    loop {
        let page: Envelope<U,> = query(client, login, document, variables.clone(),).await?;
        let cursor = next_cursor(page.page_info(),);
        pages.push(page,);
        debug!("fetched page {} for {login}", pages.len());

        let Some(cursor,) = cursor else {
            break;
        };
        if pages.len() >= MAX_PAGES {
            warn!("stopping after {MAX_PAGES} pages for {login}; remaining records are ignored");
            break;
        }
        variables["after"] = Value::String(cursor,);
    }
    Ok(pages,)
}

async fn query<U,>(client: &Octocrab, login: &str, document: &str, variables: Value,) -> Result<Envelope<U,>, Error,>
where
    U: DeserializeOwned,
{
    let response: Response<U,> = client
        .graphql(&json!({ "query": document, "variables": variables }),)
        .await
        .map_err(|error| Error::service(format!("GitHub GraphQL request failed: {error}"),),)?;
    into_page(response, login,)
}

fn into_page<U,>(response: Response<U,>, login: &str,) -> Result<Envelope<U,>, Error,>
{
    if !response.errors.is_empty() {
        let messages: Vec<&str,> = response.errors.iter().map(|error| error.message.as_str(),).collect();
        return Err(Error::service(format!("GitHub GraphQL errors: {}", messages.join("; ")),),);
    }

    response
        .data
        .and_then(|data| data.user,)
        .map(Envelope::new,)
        .ok_or_else(|| Error::service(format!("GitHub user '{login}' was not found"),),)
}

fn next_cursor(info: &PageInfo,) -> Option<String,>
{
    if info.has_next_page { info.end_cursor.clone() } else { None }
}

/// First and last instant of a calendar year in UTC.
fn year_window(year: i32,) -> (String, String,)
{
    (format!("{year}-01-01T00:00:00Z"), format!("{year}-12-31T23:59:59Z"),)
}
