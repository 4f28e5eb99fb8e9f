//! Report structures for a Clientbook import validation run: a JSON
//! document the portal can archive alongside the import, and a terminal
//! rendering for the CLI.

mod text;

pub use text::render_text;

use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use serde::Serialize;

use clientbook_import_core::{DuplicateRecord, ValidatedRow, ValidationOutcome};

#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub validator_version: String,
    pub validated_at: String,
    pub row_count: usize,
    pub valid_row_count: usize,
    pub error_count: usize,
    pub warning_count: usize,
    pub duplicate_count: usize,
}

/// Full validation report: summary block plus the batch verdict and the
/// per-row detail of one [`ValidationOutcome`].
#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    pub summary: ReportSummary,
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub duplicates: Vec<DuplicateRecord>,
    pub rows: Vec<ValidatedRow>,
}

impl ImportReport {
    pub fn from_outcome(outcome: &ValidationOutcome, validator_version: &str) -> Self {
        Self::from_outcome_at(outcome, validator_version, Utc::now().to_rfc3339())
    }

    /// Build a report with an explicit timestamp. Kept separate so tests
    /// and replays can produce stable documents.
    pub fn from_outcome_at(
        outcome: &ValidationOutcome,
        validator_version: &str,
        validated_at: String,
    ) -> Self {
        let report = &outcome.report;
        Self {
            summary: ReportSummary {
                validator_version: validator_version.to_string(),
                validated_at,
                row_count: outcome.rows.len(),
                valid_row_count: outcome.valid_row_count(),
                error_count: report.errors.len(),
                warning_count: report.warnings.len(),
                duplicate_count: report.duplicates.len(),
            },
            is_valid: report.is_valid,
            errors: report.errors.clone(),
            warnings: report.warnings.clone(),
            duplicates: report.duplicates.clone(),
            rows: outcome.rows.clone(),
        }
    }

    pub fn write_json_with_format(&self, path: impl AsRef<Path>, pretty: bool) -> anyhow::Result<()> {
        let path = path.as_ref();
        let json = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
        .context("serialize import report")?;
        std::fs::write(path, format!("{}\n", json))
            .with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }
}
