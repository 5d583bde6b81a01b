//! credview — terminal browser for compromised-credential records.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use credview::client::{CredentialSource, HttpSource};
use credview::config::Config;
use credview::constants;
use credview::env::Env;
use credview::models::RecordQuery;
use credview::view::BrowseSession;

use cli::args::{BrowseArgs, Cli, Command, ListArgs};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::List(args) => run_list(args).await,
        Command::Browse(args) => run_browse(args).await,
        Command::Version => run_version(),
    }
}

/// Print version information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    Ok(())
}

/// One-shot fetch and render.
async fn run_list(args: ListArgs) -> Result<()> {
    let cwd = std::env::current_dir().ok();
    let config =
        Config::load(cwd.as_deref(), &Env::real()).context("failed to load configuration")?;

    let base_url = args.base_url.unwrap_or(config.api.base_url);
    let limit = args.limit.unwrap_or(config.api.limit);
    let reveal = args.reveal || config.output.reveal_passwords;

    let source = HttpSource::new(base_url).context("could not initialise HTTP client")?;
    let query = RecordQuery::new(&args.email, &args.domain, limit);
    let records = source.fetch(&query).await?;

    print!("{}", args.format.render(&records, reveal));
    Ok(())
}

/// Interactive browse session: an unfiltered fetch on startup, then a
/// command loop for editing filters and re-applying them.
async fn run_browse(args: BrowseArgs) -> Result<()> {
    let cwd = std::env::current_dir().ok();
    let config =
        Config::load(cwd.as_deref(), &Env::real()).context("failed to load configuration")?;

    let base_url = args.base_url.unwrap_or(config.api.base_url);
    let limit = args.limit.unwrap_or(config.api.limit);
    let reveal = args.reveal || config.output.reveal_passwords;

    cli::print_banner();

    let source: Arc<dyn CredentialSource> =
        Arc::new(HttpSource::new(base_url).context("could not initialise HTTP client")?);
    let session = BrowseSession::new(source, limit, reveal);
    session.run().await.context("browse session failed")?;

    Ok(())
}
