//! CLI for urlforge.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use urlforge_core::config;
use urlforge_core::NullValueHandling;

use commands::{run_build_query, run_build_url};

/// Top-level CLI for urlforge.
#[derive(Debug, Parser)]
#[command(name = "urlforge")]
#[command(about = "urlforge: build URLs and query strings from partial inputs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Build a URL from an optional base plus individual components.
    BuildUrl(BuildUrlArgs),

    /// Build a standalone query string.
    BuildQuery(BuildQueryArgs),
}

#[derive(Debug, Args)]
pub struct BuildUrlArgs {
    /// Base URL to start from.
    pub base: Option<String>,

    /// Host name.
    #[arg(long, visible_alias = "host-name")]
    pub host: Option<String>,

    /// Scheme (e.g. http, https).
    #[arg(long)]
    pub scheme: Option<String>,

    /// Port number (1-65535).
    #[arg(long, allow_negative_numbers = true)]
    pub port: Option<i64>,

    /// Path segments to append, in order.
    #[arg(long, value_name = "SEGMENT", num_args = 1..)]
    pub path: Option<Vec<String>>,

    /// Fragment; an empty value clears it.
    #[arg(long)]
    pub fragment: Option<String>,

    /// User name for the userinfo component.
    #[arg(long)]
    pub user_name: Option<String>,

    /// Password for the userinfo component (requires --user-name).
    #[arg(long, requires = "user_name")]
    pub password: Option<String>,

    #[command(flatten)]
    pub query: QueryArgs,

    /// Print the URL as a parsed URI.
    #[arg(long, conflicts_with_all = ["as_string", "encode_space_as_plus"])]
    pub as_uri: bool,

    /// Print the URL as text.
    #[arg(long)]
    pub as_string: bool,
}

#[derive(Debug, Args)]
pub struct BuildQueryArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Print the query as text instead of a JSON list of pairs.
    #[arg(long)]
    pub as_string: bool,
}

/// Query options shared by both commands.
#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Query input: `k=v&k2` text, or JSON (object, array of strings, pairs or objects). Repeatable.
    #[arg(long = "query", short = 'q', value_name = "QUERY")]
    pub queries: Vec<String>,

    /// How absent values merge: remove, ignore, name-only, always-append.
    #[arg(long, value_name = "POLICY")]
    pub null_value_handling: Option<NullValueHandling>,

    /// Encode spaces in the query as `+` (implies text output).
    #[arg(long)]
    pub encode_space_as_plus: bool,

    /// Read additional records from stdin, one JSON value per line.
    #[arg(long)]
    pub stdin: bool,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_default()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        match cli.command {
            CliCommand::BuildUrl(args) => run_build_url(args, &cfg, stdin.lock(), &mut out)?,
            CliCommand::BuildQuery(args) => run_build_query(args, &cfg, stdin.lock(), &mut out)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
