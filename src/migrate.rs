//! The batch migration loop: list, fetch, rewrite, conditionally write back.

use crate::api::{DmnApi, UpdateResult};
use crate::rewrite;
use anyhow::Result;

/// Lifecycle status that allows a stored table to be overwritten.
const MUTABLE_STATUS: &str = "DRAFT";

/// Per-table outcome, mirroring the printed report lines.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Updated,
    WouldUpdate,
    Failed { body: String },
    Skipped { status: String },
    AlreadyCurrent,
}

/// Result of a full run, for callers that want more than the printed report.
#[derive(Debug)]
pub struct MigrationSummary {
    pub total: usize,
    pub updated: usize,
    pub outcomes: Vec<(String, Outcome)>,
}

/// Process every table once, in listing order, printing the report as it goes.
///
/// Fetch and decode failures abort the run; a rejected update is reported and
/// the loop continues. Eligibility is checked only after the rewrite, so
/// non-DRAFT tables are still fetched and rewritten in memory before being
/// skipped.
pub fn run(api: &dyn DmnApi, dry_run: bool) -> Result<MigrationSummary> {
    let tables = api.list_tables()?;
    println!("Found {} decision table(s)", tables.len());

    let mut updated = 0usize;
    let mut outcomes = Vec::with_capacity(tables.len());

    for table in &tables {
        let detail = api.fetch_table(&table.id)?;
        let outcome = if rewrite::is_outdated(&detail.dmn_xml) {
            let new_xml = rewrite::upgrade(&detail.dmn_xml);
            if table.status == MUTABLE_STATUS {
                if dry_run {
                    println!("  ~ Would update '{}' (DRAFT) to DMN 1.3", table.name);
                    Outcome::WouldUpdate
                } else {
                    match api.update_table(&table.id, &new_xml)? {
                        UpdateResult::Accepted => {
                            println!("  ✓ Updated '{}' (DRAFT) to DMN 1.3", table.name);
                            updated += 1;
                            Outcome::Updated
                        }
                        UpdateResult::Rejected { status, body } => {
                            println!("  ✗ Failed to update '{}': {}", table.name, body);
                            tracing::warn!(id = %table.id, status, "update rejected");
                            Outcome::Failed { body }
                        }
                    }
                }
            } else {
                println!(
                    "  ⚠ Skipped '{}' ({}) - only DRAFT tables can be updated",
                    table.name, table.status
                );
                Outcome::Skipped {
                    status: table.status.clone(),
                }
            }
        } else {
            println!("  - '{}' already using DMN 1.3 (https)", table.name);
            Outcome::AlreadyCurrent
        };
        outcomes.push((table.id.clone(), outcome));
    }

    println!("\nDone. Updated {updated} table(s).");

    Ok(MigrationSummary {
        total: tables.len(),
        updated,
        outcomes,
    })
}
