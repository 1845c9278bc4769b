//! HTTP access to the decision-table service.
//!
//! A thin blocking client over `ureq`. Non-2xx statuses are returned as
//! responses rather than transport errors so a rejected update can be reported
//! with its body while list/fetch failures stay fatal at the decode step.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use ureq::Agent;

/// Listing entry for a stored decision table.
///
/// The listing carries more fields than these; everything beyond the id, the
/// display name, and the lifecycle status is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TableSummary {
    pub id: String,
    pub name: String,
    pub status: String,
}

/// Full document body for a single table. A missing `dmnXml` field decodes as
/// the empty string.
#[derive(Debug, Deserialize)]
pub struct TableDetail {
    #[allow(dead_code)]
    pub id: String,
    #[serde(default, rename = "dmnXml")]
    pub dmn_xml: String,
}

#[derive(Debug, Serialize)]
struct UpdateBody<'a> {
    #[serde(rename = "dmnXml")]
    dmn_xml: &'a str,
}

/// Outcome of a write-back attempt.
#[derive(Debug)]
pub enum UpdateResult {
    Accepted,
    /// Non-success HTTP status; the body text is surfaced verbatim in the
    /// report.
    Rejected { status: u16, body: String },
}

/// Read/write operations the migration loop needs from the service.
pub trait DmnApi {
    fn list_tables(&self) -> Result<Vec<TableSummary>>;
    fn fetch_table(&self, id: &str) -> Result<TableDetail>;
    fn update_table(&self, id: &str, dmn_xml: &str) -> Result<UpdateResult>;
}

/// `ureq`-backed client against a fixed base address.
pub struct HttpDmnApi {
    agent: Agent,
    base: String,
}

impl HttpDmnApi {
    pub fn new(base: String) -> Self {
        let config = Agent::config_builder()
            .http_status_as_error(false)
            .build();
        Self {
            agent: config.into(),
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn table_url(&self, id: &str) -> String {
        format!("{}/{id}", self.base)
    }
}

impl DmnApi for HttpDmnApi {
    fn list_tables(&self) -> Result<Vec<TableSummary>> {
        let start = Instant::now();
        let mut response = self
            .agent
            .get(&self.base)
            .call()
            .with_context(|| format!("list decision tables from {}", self.base))?;
        let tables: Vec<TableSummary> = response
            .body_mut()
            .read_json()
            .context("decode decision-table listing")?;
        tracing::debug!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            count = tables.len(),
            "listed decision tables"
        );
        Ok(tables)
    }

    fn fetch_table(&self, id: &str) -> Result<TableDetail> {
        let url = self.table_url(id);
        let start = Instant::now();
        let mut response = self
            .agent
            .get(&url)
            .call()
            .with_context(|| format!("fetch decision table {id}"))?;
        let detail: TableDetail = response
            .body_mut()
            .read_json()
            .with_context(|| format!("decode decision table {id}"))?;
        tracing::debug!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            id,
            "fetched decision table"
        );
        Ok(detail)
    }

    fn update_table(&self, id: &str, dmn_xml: &str) -> Result<UpdateResult> {
        let url = self.table_url(id);
        let start = Instant::now();
        let mut response = self
            .agent
            .put(&url)
            .send_json(UpdateBody { dmn_xml })
            .with_context(|| format!("submit updated decision table {id}"))?;
        let status = response.status();
        tracing::debug!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            id,
            status = status.as_u16(),
            "submitted decision table update"
        );
        if status.is_success() {
            Ok(UpdateResult::Accepted)
        } else {
            let body = response.body_mut().read_to_string().unwrap_or_default();
            Ok(UpdateResult::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}
