use crate::mapper::map_row;
use crate::mapping::FieldMapping;
use crate::row::{ParsedRow, EMAIL_FIELD};
use crate::shapes::is_valid_email;

pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email format";

/// Email is optional; this rule only fires when a value is present and
/// fails the shape test.
#[derive(Debug, Default)]
pub struct EmailFormatRule;

impl super::RowRule for EmailFormatRule {
    fn name(&self) -> &'static str {
        "email_format"
    }

    fn check(&self, row: &ParsedRow, mapping: &FieldMapping) -> Vec<String> {
        let record = map_row(row, mapping);
        match record.get(EMAIL_FIELD) {
            Some(email) if !is_valid_email(email) => vec![INVALID_EMAIL_MESSAGE.to_string()],
            _ => Vec::new(),
        }
    }
}
