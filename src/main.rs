// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Command-line interface for the statcard binary.
//!
//! The CLI aggregates recorded or freshly fetched GitHub pages into a
//! statistics model and renders it as an SVG card.

use std::{
    io,
    path::{Path, PathBuf},
    process,
};

use clap::{ArgAction, Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use statcard::{
    CardConfig, CardSettings, Error, QueryResults, StatisticsModel, aggregate_results, fetch,
    load_config, load_query_results, normalize_config, render, write_card, write_query_results,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Command line interface for building GitHub stat cards.
#[derive(Debug, Parser,)]
#[command(name = "statcard", version, about = "Aggregate GitHub activity into an SVG stat card")]
struct Cli
{
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand,)]
/// Supported commands exposed by the CLI.
enum Command
{
    /// Print the statistics model of a recorded page bundle as JSON.
    Stats(StatsArgs,),
    /// Render a card from a recorded page bundle.
    Render(RenderArgs,),
    /// Fetch the page bundle of a user and store it as JSON.
    Fetch(FetchArgs,),
    /// Fetch the pages of a user and render their card.
    Generate(GenerateArgs,),
}

#[derive(Debug, Args,)]
struct StatsArgs
{
    /// JSON page bundle produced by `fetch`.
    #[arg(long = "pages", value_name = "JSON")]
    pages: PathBuf,

    /// YAML card configuration providing aggregation options.
    #[arg(long = "config", value_name = "YAML")]
    config: Option<PathBuf,>,

    /// Output formatted JSON for easier inspection.
    #[arg(long = "pretty", action = ArgAction::SetTrue)]
    pretty: bool,
}

#[derive(Debug, Args,)]
struct RenderArgs
{
    /// JSON page bundle produced by `fetch`.
    #[arg(long = "pages", value_name = "JSON")]
    pages: PathBuf,

    /// YAML card configuration.
    #[arg(long = "config", value_name = "YAML")]
    config: PathBuf,

    /// Destination of the SVG card.
    #[arg(long = "output", value_name = "SVG")]
    output: PathBuf,
}

#[derive(Debug, Args,)]
struct FetchArgs
{
    /// GitHub login whose activity is fetched.
    #[arg(long = "user", value_name = "LOGIN")]
    user: String,

    /// Destination of the JSON page bundle.
    #[arg(long = "output", value_name = "JSON")]
    output: PathBuf,

    /// GitHub token used for GraphQL requests.
    #[arg(long = "token", env = "GITHUB_TOKEN", hide_env_values = true)]
    token: String,
}

#[derive(Debug, Args,)]
struct GenerateArgs
{
    /// GitHub login whose activity is fetched.
    #[arg(long = "user", value_name = "LOGIN")]
    user: String,

    /// YAML card configuration.
    #[arg(long = "config", value_name = "YAML")]
    config: PathBuf,

    /// Destination of the SVG card.
    #[arg(long = "output", value_name = "SVG")]
    output: PathBuf,

    /// GitHub token used for GraphQL requests.
    #[arg(long = "token", env = "GITHUB_TOKEN", hide_env_values = true)]
    token: String,
}

/// Entry point that reports errors and sets the appropriate exit status.
#[tokio::main]
async fn main()
{
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "statcard=info".into(),),)
        .with(fmt::layer().with_writer(io::stderr,),)
        .init();

    if let Err(error,) = run().await {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates loading, fetching, rendering and writing errors.
async fn run() -> Result<(), Error,>
{
    let cli = Cli::parse();

    match cli.command {
        Command::Stats(args,) => run_stats(&args,),
        Command::Render(args,) => run_render(&args,),
        Command::Fetch(args,) => run_fetch(&args,).await,
        Command::Generate(args,) => run_generate(&args,).await,
    }
}

fn run_stats(args: &StatsArgs,) -> Result<(), Error,>
{
    let settings = load_settings(args.config.as_deref(),)?;
    let results = load_query_results(&args.pages,)?;
    let model = aggregate_results(&results, &settings.aggregate,);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_model(&mut handle, &model, args.pretty,)
}

fn run_render(args: &RenderArgs,) -> Result<(), Error,>
{
    let settings = load_config(&args.config,)?;
    let results = load_query_results(&args.pages,)?;
    render_card(&results, &settings, &args.output,)
}

async fn run_fetch(args: &FetchArgs,) -> Result<(), Error,>
{
    let results = fetch_with_progress(&args.user, &args.token,).await?;
    write_query_results(&args.output, &results,)?;
    info!("wrote pages of {} to {}", args.user, args.output.display());
    Ok((),)
}

async fn run_generate(args: &GenerateArgs,) -> Result<(), Error,>
{
    let settings = load_config(&args.config,)?;
    let results = fetch_with_progress(&args.user, &args.token,).await?;
    render_card(&results, &settings, &args.output,)
}

/// Loads settings from `path`, or the default card when no path is given.
fn load_settings(path: Option<&Path,>,) -> Result<CardSettings, Error,>
{
    match path {
        Some(path,) => load_config(path,),
        None => normalize_config(&CardConfig::default(),),
    }
}

fn render_card(results: &QueryResults, settings: &CardSettings, output: &Path,) -> Result<(), Error,>
{
    let model = aggregate_results(results, &settings.aggregate,);
    let svg = render(&model, &settings.theme, settings.locale, &settings.categories, &settings.render,)?;
    write_card(output, &svg,)?;
    info!("wrote card of {} to {}", model.login, output.display());
    Ok((),)
}

async fn fetch_with_progress(login: &str, token: &str,) -> Result<QueryResults, Error,>
{
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}",)
            .unwrap_or_else(|_| ProgressStyle::default_spinner(),),
    );
    spinner.set_message(format!("Fetching GitHub activity of {login}..."),);
    spinner.enable_steady_tick(std::time::Duration::from_millis(100,),);

    let client = fetch::client(token,)?;
    let results = fetch::fetch_query_results(&client, login,).await;
    spinner.finish_and_clear();
    results
}

fn write_model<W: io::Write,>(writer: &mut W, model: &StatisticsModel, pretty: bool,) -> Result<(), Error,>
{
    if pretty {
        serde_json::to_writer_pretty(writer, model,)?;
    } else {
        serde_json::to_writer(writer, model,)?;
    }

    Ok((),)
}

#[cfg(test)]
mod tests
{
    use std::{fs, io::Cursor, path::Path};

    use clap::Parser;
    use statcard::StatisticsModel;
    use tempfile::tempdir;

    use super::{Cli, Command, RenderArgs, load_settings, run_render, write_model};

    const PAGES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/query_results.json");

    #[test]
    fn stats_subcommand_parses_optional_config()
    {
        let cli = Cli::try_parse_from([env!("CARGO_PKG_NAME"), "stats", "--pages", "pages.json", "--pretty",],)
            .expect("failed to parse CLI",);

        match cli.command {
            Command::Stats(args,) => {
                assert_eq!(args.pages, Path::new("pages.json"));
                assert!(args.config.is_none());
                assert!(args.pretty);
            }
            other => panic!("unexpected command variant: {other:?}"),
        }
    }

    #[test]
    fn fetch_subcommand_accepts_explicit_token()
    {
        let cli = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            "fetch",
            "--user",
            "octocat",
            "--output",
            "pages.json",
            "--token",
            "secret",
        ],)
        .expect("failed to parse CLI",);

        match cli.command {
            Command::Fetch(args,) => {
                assert_eq!(args.user, "octocat");
                assert_eq!(args.token, "secret");
            }
            other => panic!("unexpected command variant: {other:?}"),
        }
    }

    #[test]
    fn render_requires_config()
    {
        let result = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            "render",
            "--pages",
            "pages.json",
            "--output",
            "card.svg",
        ],);
        assert!(result.is_err());
    }

    #[test]
    fn missing_config_uses_default_settings()
    {
        let settings = load_settings(None,).expect("default settings",);
        assert_eq!(settings.locale, "en");
        assert_eq!(settings.categories.len(), 4);
    }

    #[test]
    fn model_writer_switches_between_compact_and_pretty()
    {
        let model = StatisticsModel {
            login: "mona".to_owned(),
            ..StatisticsModel::default()
        };

        let mut compact = Cursor::new(Vec::new(),);
        write_model(&mut compact, &model, false,).expect("failed to serialize model",);
        let compact = String::from_utf8(compact.into_inner(),).expect("invalid UTF-8",);
        assert!(compact.starts_with("{\"login\":\"mona\""));

        let mut pretty = Cursor::new(Vec::new(),);
        write_model(&mut pretty, &model, true,).expect("failed to serialize model",);
        let pretty = String::from_utf8(pretty.into_inner(),).expect("invalid UTF-8",);
        assert!(pretty.starts_with("{\n  \"login\": \"mona\""));
    }

    #[test]
    fn render_writes_card_from_recorded_pages()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let config = temp.path().join("card.yaml",);
        let output = temp.path().join("cards/octocat.svg",);
        fs::write(&config, "theme: dark\ncard:\n  columns: 2\n",).expect("failed to write config",);

        run_render(&RenderArgs {
            pages: PAGES.into(),
            config,
            output: output.clone(),
        },)
        .expect("render failed",);

        let svg = fs::read_to_string(&output,).expect("card written",);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("#0d1117"));
    }
}
