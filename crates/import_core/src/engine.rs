use serde::Serialize;
use tracing::debug;

use crate::duplicates::{detect_duplicates, DuplicateRecord};
use crate::mapping::FieldMapping;
use crate::row::ParsedRow;
use crate::rules::{default_rules, RuleSet};

/// A parsed row plus the annotations one validation pass attaches to it.
/// The pipeline never mutates caller rows; it returns these copies.
#[derive(Debug, Clone, Serialize)]
pub struct ValidatedRow {
    pub row: ParsedRow,
    pub row_index: usize,
    pub errors: Vec<String>,
    pub is_valid: bool,
    pub is_duplicate: bool,
    pub duplicate_of: Option<String>,
}

/// Aggregate outcome of validating a full dataset. `is_valid` reflects
/// row errors only; duplicates and warnings are advisory and left to the
/// caller's import policy.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub duplicates: Vec<DuplicateRecord>,
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            duplicates: Vec::new(),
        }
    }
}

pub struct ValidationOutcome {
    pub rows: Vec<ValidatedRow>,
    pub report: ValidationReport,
}

/// Validate a dataset with the standard rule set.
pub fn validate_rows(rows: &[ParsedRow], mapping: &FieldMapping) -> ValidationOutcome {
    validate_rows_with(rows, mapping, &default_rules())
}

/// Validate a dataset with a caller-supplied rule set.
///
/// Rows are processed in input order. Each row gets its error list and
/// validity flag first; duplicate detection then runs once over the whole
/// set and folds its annotations onto the rows. Duplicate findings never
/// affect validity, per row or per batch.
pub fn validate_rows_with(
    rows: &[ParsedRow],
    mapping: &FieldMapping,
    rules: &RuleSet,
) -> ValidationOutcome {
    let mut report = ValidationReport::default();
    let mut validated = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        let errors = rules.check_row(row, mapping);
        let is_valid = errors.is_empty();
        if !is_valid {
            report.is_valid = false;
            report
                .errors
                .push(format!("Row {}: {}", index + 1, errors.join(", ")));
        }
        validated.push(ValidatedRow {
            row: row.clone(),
            row_index: index,
            errors,
            is_valid,
            is_duplicate: false,
            duplicate_of: None,
        });
    }

    let scan = detect_duplicates(rows, mapping);
    for (row, duplicate_of) in validated.iter_mut().zip(scan.flagged) {
        if let Some(value) = duplicate_of {
            row.is_duplicate = true;
            row.duplicate_of = Some(value);
        }
    }
    report.duplicates = scan.duplicates;
    report.warnings = scan.warnings;

    debug!(
        rows = rows.len(),
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        duplicates = report.duplicates.len(),
        "validated client import"
    );

    ValidationOutcome {
        rows: validated,
        report,
    }
}

impl ValidationOutcome {
    /// Rows eligible for import under the default policy: individually
    /// valid and not a hard duplicate.
    pub fn importable_rows(&self) -> impl Iterator<Item = &ValidatedRow> {
        self.rows
            .iter()
            .filter(|row| row.is_valid && !row.is_duplicate)
    }

    pub fn valid_row_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_valid).count()
    }
}
