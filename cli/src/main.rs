//! `bechdel`: does your movie pass the Bechdel Test?
//!
//! Resolves each query against the bechdeltest.com dataset and prints the
//! verdict. With no query on the command line, reads one title per line from
//! stdin, reusing the dataset across lines.

mod messages;
mod render;

use anyhow::{Context, Result};
use bechdel_core::types::{AppConfig, Language};
use bechdel_search::MovieFinder;
use clap::Parser;
use messages::Catalog;
use render::{Descriptors, render_load_error, render_lookup};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bechdel")]
#[command(about = "Does your movie pass the Bechdel Test?")]
struct Cli {
    /// Movie title. Reads titles from stdin, one per line, when omitted.
    query: Vec<String>,

    /// Config file (defaults to ./bechdel.toml).
    #[arg(long, env = "BECHDEL_CONFIG")]
    config: Option<PathBuf>,

    /// Dataset path or http(s) URL, overriding the config file.
    #[arg(long, env = "BECHDEL_DATASET")]
    dataset: Option<String>,

    /// Message language: en or fr.
    #[arg(long)]
    lang: Option<Language>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Answer {
    Found,
    NotFound,
    Failed,
}

impl From<Answer> for ExitCode {
    fn from(answer: Answer) -> Self {
        match answer {
            Answer::Found => ExitCode::SUCCESS,
            Answer::NotFound => ExitCode::from(1),
            Answer::Failed => ExitCode::from(2),
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let finder = MovieFinder::from_config(&config).context("invalid dataset location")?;
    let catalog = Catalog::for_language(config.display.language);
    let mut descriptors = Descriptors::new(catalog);

    if !cli.query.is_empty() {
        let query = cli.query.join(" ");
        let answer = answer(&finder, &query, catalog, &mut descriptors).await;
        return Ok(answer.into());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut last = Answer::NotFound;
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        if line.trim().is_empty() {
            continue;
        }
        last = answer(&finder, &line, catalog, &mut descriptors).await;
        println!();
    }

    Ok(last.into())
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let path = cli
        .config
        .clone()
        .unwrap_or_else(|| AppConfig::path(Path::new(".")));
    let loaded = AppConfig::load(&path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;

    let errors = loaded.validate();
    for error in &errors {
        warn!(config = %path.display(), "{error}; using default");
    }
    let config = if errors.is_empty() {
        loaded
    } else {
        loaded.with_defaults_for_invalid()
    };

    Ok(apply_overrides(config, cli))
}

/// Command-line flags win over the config file.
fn apply_overrides(mut config: AppConfig, cli: &Cli) -> AppConfig {
    if let Some(dataset) = &cli.dataset {
        config.dataset.source = dataset.clone();
    }
    if let Some(language) = cli.lang {
        config.display.language = language;
    }
    config
}

async fn answer(
    finder: &MovieFinder,
    query: &str,
    catalog: &'static Catalog,
    descriptors: &mut Descriptors,
) -> Answer {
    match finder.find_movie(query).await {
        Ok(lookup) => {
            println!("{}", render_lookup(&lookup, query, catalog, descriptors));
            if lookup.is_found() {
                Answer::Found
            } else {
                Answer::NotFound
            }
        }
        Err(error) => {
            eprintln!("{}", render_load_error(&error, catalog));
            Answer::Failed
        }
    }
}
