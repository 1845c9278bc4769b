use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod api;
mod cli;
mod migrate;
mod rewrite;

use api::HttpDmnApi;
use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    // The report goes to stdout; tracing stays on stderr so the two never mix.
    let default_filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let api = HttpDmnApi::new(args.api_base);
    let summary = migrate::run(&api, args.dry_run)?;

    tracing::debug!(
        total = summary.total,
        updated = summary.updated,
        "migration run complete"
    );
    Ok(())
}
