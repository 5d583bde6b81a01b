//! Clap argument types and output format selection.

use clap::{Parser, ValueEnum};

use credview::models::CredentialRecord;
use credview::output::RecordRenderer;
use credview::output::json::JsonRenderer;
use credview::output::table::TableRenderer;

/// Terminal browser for compromised-credential records.
#[derive(Parser, Debug)]
#[command(name = "credview", version = credview::constants::VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Fetch records once and render them.
    List(ListArgs),

    /// Browse records in an interactive session.
    Browse(BrowseArgs),

    /// Print version information.
    Version,
}

/// Arguments for the `list` subcommand.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Restrict results to this email server-side (empty means all).
    #[arg(long, default_value = "")]
    pub email: String,

    /// Restrict results to this domain server-side (empty means all).
    #[arg(long, default_value = "")]
    pub domain: String,

    /// Maximum number of records to request (default from config).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: Option<u32>,

    /// Output format.
    #[arg(long, default_value = "terminal")]
    pub format: OutputFormat,

    /// Show passwords in terminal output instead of masking them.
    #[arg(long, default_value_t = false)]
    pub reveal: bool,

    /// Endpoint base URL (overrides config and environment).
    #[arg(long)]
    pub base_url: Option<String>,
}

/// Arguments for the `browse` subcommand.
#[derive(Parser, Debug)]
pub struct BrowseArgs {
    /// Maximum number of records to request (default from config).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: Option<u32>,

    /// Show passwords instead of masking them.
    #[arg(long, default_value_t = false)]
    pub reveal: bool,

    /// Endpoint base URL (overrides config and environment).
    #[arg(long)]
    pub base_url: Option<String>,
}

/// Output format for the `list` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned grid for interactive terminals.
    Terminal,
    /// Pretty-printed JSON for scripting.
    Json,
}

impl OutputFormat {
    /// Render records with the matching renderer.
    pub fn render(&self, records: &[CredentialRecord], reveal: bool) -> String {
        match self {
            OutputFormat::Terminal => TableRenderer::new(reveal).render(records),
            OutputFormat::Json => JsonRenderer.render(records),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn list_parses_filters_and_limit() {
        let cli = Cli::parse_from([
            "credview", "list", "--email", "bob", "--domain", "acme", "--limit", "10",
        ]);
        match cli.command {
            Command::List(args) => {
                assert_eq!(args.email, "bob");
                assert_eq!(args.domain, "acme");
                assert_eq!(args.limit, Some(10));
                assert_eq!(args.format, OutputFormat::Terminal);
            }
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn list_rejects_zero_limit() {
        let result = Cli::try_parse_from(["credview", "list", "--limit", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn list_defaults_to_no_filters() {
        let cli = Cli::parse_from(["credview", "list"]);
        match cli.command {
            Command::List(args) => {
                assert_eq!(args.email, "");
                assert_eq!(args.domain, "");
                assert_eq!(args.limit, None);
                assert!(!args.reveal);
            }
            other => panic!("expected list, got {other:?}"),
        }
    }
}
