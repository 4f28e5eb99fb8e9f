use std::fmt::Write as _;

use crate::ImportReport;

/// Render a report for the terminal: summary block, then errors,
/// duplicates and warnings in that order. Sections with nothing to say
/// are omitted.
pub fn render_text(report: &ImportReport) -> String {
    let mut out = String::new();
    let summary = &report.summary;

    let verdict = if report.is_valid { "VALID" } else { "INVALID" };
    let _ = writeln!(out, "Client import validation: {}", verdict);
    let _ = writeln!(
        out,
        "  {} rows, {} valid, {} errors, {} duplicates, {} warnings",
        summary.row_count,
        summary.valid_row_count,
        summary.error_count,
        summary.duplicate_count,
        summary.warning_count,
    );

    if !report.errors.is_empty() {
        let _ = writeln!(out, "\nErrors:");
        for error in &report.errors {
            let _ = writeln!(out, "  - {}", error);
        }
    }

    if !report.duplicates.is_empty() {
        let _ = writeln!(out, "\nDuplicates:");
        for duplicate in &report.duplicates {
            let _ = writeln!(
                out,
                "  - Row {}: {} \"{}\" already used in row {}",
                duplicate.row, duplicate.field, duplicate.value, duplicate.existing_row
            );
        }
    }

    if !report.warnings.is_empty() {
        let _ = writeln!(out, "\nWarnings:");
        for warning in &report.warnings {
            let _ = writeln!(out, "  - {}", warning);
        }
    }

    out
}
