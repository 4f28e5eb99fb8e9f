use crate::mapper::map_row;
use crate::mapping::FieldMapping;
use crate::row::{ParsedRow, FILE_NO_FIELD, NAME_FIELD};

pub const NAME_REQUIRED_MESSAGE: &str = "Name is required";
pub const FILE_NO_REQUIRED_MESSAGE: &str = "File Number is required";

/// Client name and file number are the identity of a record; a row
/// missing either cannot be imported. The two checks run independently,
/// so a row can accumulate both messages.
#[derive(Debug, Default)]
pub struct RequiredFieldsRule;

impl super::RowRule for RequiredFieldsRule {
    fn name(&self) -> &'static str {
        "required_fields"
    }

    fn check(&self, row: &ParsedRow, mapping: &FieldMapping) -> Vec<String> {
        let record = map_row(row, mapping);
        let mut messages = Vec::new();
        if is_blank(record.get(NAME_FIELD)) {
            messages.push(NAME_REQUIRED_MESSAGE.to_string());
        }
        if is_blank(record.get(FILE_NO_FIELD)) {
            messages.push(FILE_NO_REQUIRED_MESSAGE.to_string());
        }
        messages
    }
}

fn is_blank(value: Option<&String>) -> bool {
    value.map(|value| value.trim().is_empty()).unwrap_or(true)
}
