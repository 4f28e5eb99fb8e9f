use std::collections::HashMap;

use serde::Serialize;

pub const NAME_FIELD: &str = "name";
pub const FILE_NO_FIELD: &str = "file_no";
pub const EMAIL_FIELD: &str = "email";
pub const MOBILE_FIELD: &str = "mobile";
pub const ADDRESS_FIELD: &str = "address";
pub const GSTIN_FIELD: &str = "gstin";
pub const PAN_FIELD: &str = "pan";

/// Canonical client-record fields an import column may be mapped onto.
pub const CLIENT_FIELDS: &[&str] = &[
    NAME_FIELD,
    FILE_NO_FIELD,
    EMAIL_FIELD,
    MOBILE_FIELD,
    ADDRESS_FIELD,
    GSTIN_FIELD,
    PAN_FIELD,
];

/// Display label used for a field in user-facing duplicate descriptors.
pub fn field_label(field: &str) -> &str {
    match field {
        NAME_FIELD => "Name",
        FILE_NO_FIELD => "File Number",
        EMAIL_FIELD => "Email",
        MOBILE_FIELD => "Mobile",
        ADDRESS_FIELD => "Address",
        GSTIN_FIELD => "GSTIN",
        PAN_FIELD => "PAN",
        other => other,
    }
}

/// One spreadsheet row as parsed from the uploaded file, keyed by the
/// source column header. Values are kept verbatim; the pipeline never
/// writes back into a parsed row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ParsedRow {
    columns: HashMap<String, String>,
}

impl ParsedRow {
    pub fn new() -> Self {
        Self {
            columns: HashMap::new(),
        }
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.columns.insert(column.into(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns.get(column).map(String::as_str)
    }

    pub fn columns(&self) -> &HashMap<String, String> {
        &self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.columns.values().all(|value| value.trim().is_empty())
    }
}

impl FromIterator<(String, String)> for ParsedRow {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}

/// Projection of a [`ParsedRow`] onto canonical field names. Derived on
/// demand by the mapper and never stored back on the row.
pub type MappedRecord = HashMap<String, String>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_row_detects_whitespace_only_cells() {
        let mut row = ParsedRow::new();
        row.set("Client Name", "   ");
        row.set("File No", "");
        assert!(row.is_empty());

        row.set("File No", "F-100");
        assert!(!row.is_empty());
    }

    #[test]
    fn field_labels_cover_identity_fields() {
        assert_eq!(field_label(FILE_NO_FIELD), "File Number");
        assert_eq!(field_label(EMAIL_FIELD), "Email");
        assert_eq!(field_label("custom_field"), "custom_field");
    }
}
