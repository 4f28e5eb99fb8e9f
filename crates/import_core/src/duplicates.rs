use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::mapper::map_row;
use crate::mapping::FieldMapping;
use crate::row::{field_label, ParsedRow, EMAIL_FIELD, FILE_NO_FIELD};

/// One repeated file number, reported against the repeat occurrence.
/// Row numbers are 1-based to match what the user sees in their
/// spreadsheet (minus the header line).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateRecord {
    pub row: usize,
    pub field: String,
    pub value: String,
    pub existing_row: usize,
}

/// Outcome of one duplicate-detection pass over a full dataset.
/// `flagged` is aligned with the input rows: `Some(value)` marks a row
/// whose file number repeats an earlier one.
#[derive(Debug, Default)]
pub struct DuplicateScan {
    pub duplicates: Vec<DuplicateRecord>,
    pub warnings: Vec<String>,
    pub flagged: Vec<Option<String>>,
}

/// Scan the dataset for repeated identity keys: file number repeats are
/// hard duplicates, email repeats are advisory warnings.
///
/// Keys are composed as `field + "_" + lowercase(value)`, so values
/// compare case-insensitively while the field tag stays exact. Rows are
/// visited in order; the first occurrence of a key is never flagged, and
/// every later occurrence reports the first row as `existing_row`.
///
/// Email warnings compound: each repeat occurrence re-emits a warning
/// listing every row seen so far for that address, so an address
/// appearing three times yields two warnings. Intentionally preserved
/// from the portal's original import screen (see DESIGN.md).
pub fn detect_duplicates(rows: &[ParsedRow], mapping: &FieldMapping) -> DuplicateScan {
    let mut tracker: FxHashMap<String, Vec<usize>> = FxHashMap::default();
    let mut scan = DuplicateScan {
        flagged: vec![None; rows.len()],
        ..DuplicateScan::default()
    };

    for (index, row) in rows.iter().enumerate() {
        let record = map_row(row, mapping);

        if let Some(file_no) = record.get(FILE_NO_FIELD) {
            let key = format!("{}_{}", FILE_NO_FIELD, file_no.to_lowercase());
            let bucket = tracker.entry(key).or_default();
            if let Some(&first) = bucket.first() {
                scan.flagged[index] = Some(file_no.clone());
                scan.duplicates.push(DuplicateRecord {
                    row: index + 1,
                    field: field_label(FILE_NO_FIELD).to_string(),
                    value: file_no.clone(),
                    existing_row: first + 1,
                });
            }
            bucket.push(index);
        }

        if let Some(email) = record.get(EMAIL_FIELD) {
            let key = format!("{}_{}", EMAIL_FIELD, email.to_lowercase());
            let bucket = tracker.entry(key).or_default();
            bucket.push(index);
            if bucket.len() > 1 {
                let row_numbers = bucket
                    .iter()
                    .map(|occurrence| (occurrence + 1).to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                scan.warnings.push(format!(
                    "Duplicate email \"{}\" found in rows {}",
                    email, row_numbers
                ));
            }
        }
    }

    scan
}
