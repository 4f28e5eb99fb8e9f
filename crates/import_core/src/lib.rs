//! Core validation pipeline for Clientbook client imports.
//!
//! An uploaded spreadsheet arrives as [`ParsedRow`]s keyed by source
//! column header, plus a [`FieldMapping`] saying which column feeds which
//! canonical client field. Validation is a pure, synchronous pass:
//! per-row field rules, then one duplicate-detection sweep over the whole
//! dataset, folded into a single [`ValidationOutcome`].

pub mod duplicates;
pub mod engine;
pub mod input;
pub mod mapper;
pub mod mapping;
pub mod row;
pub mod rules;
pub mod shapes;

pub use duplicates::{detect_duplicates, DuplicateRecord, DuplicateScan};
pub use engine::{
    validate_rows, validate_rows_with, ValidatedRow, ValidationOutcome, ValidationReport,
};
pub use input::{read_csv_bytes, read_csv_file, CsvImport, ImportInputError};
pub use mapper::map_row;
pub use mapping::{suggest_mapping, FieldMapping};
pub use row::{MappedRecord, ParsedRow};
pub use rules::{default_rules, RowRule, RuleSet};
pub use shapes::{is_valid_email, is_valid_mobile};
