use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::api::BatchReport;
use crate::error::Result;
use crate::types::OutputFormat;

/// Summary of a finished run, written as a JSON sidecar
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub completed_at: DateTime<Utc>,
    pub format: OutputFormat,
    #[serde(flatten)]
    pub counts: BatchReport,
}

impl RunReport {
    pub fn new(counts: BatchReport, format: OutputFormat) -> Self {
        Self {
            completed_at: Utc::now(),
            format,
            counts,
        }
    }
}

pub fn write_run_report(path: &Path, report: &RunReport) -> Result<()> {
    let json_string = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json_string)?;
    info!("Created run report: {:?}", path);
    Ok(())
}
