//! CLI argument parsing for the namespace migration run.
//!
//! The CLI is intentionally thin: one flat set of flags wiring a single batch
//! run, so the same loop can be exercised directly from tests.
use clap::Parser;

/// Default API base matching the workflow service's local deployment.
pub const DEFAULT_API_BASE: &str = "http://localhost:9002/api/dmn";

/// Root CLI entrypoint for the migration run.
#[derive(Parser, Debug)]
#[command(
    name = "dmn-ns-migrate",
    version,
    about = "Upgrade stored decision tables from DMN 1.2 to DMN 1.3 namespaces",
    after_help = "Examples:\n  dmn-ns-migrate\n  dmn-ns-migrate --dry-run\n  dmn-ns-migrate --api-base http://localhost:9002/api/dmn --verbose"
)]
pub struct Args {
    /// Base address of the decision-table API
    #[arg(long, value_name = "URL", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Report what would change without submitting any update
    #[arg(long)]
    pub dry_run: bool,

    /// Emit per-request tracing on stderr
    #[arg(long)]
    pub verbose: bool,
}
