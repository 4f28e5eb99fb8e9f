use crate::mapper::map_row;
use crate::mapping::FieldMapping;
use crate::row::{ParsedRow, MOBILE_FIELD};
use crate::shapes::is_valid_mobile;

pub const INVALID_MOBILE_MESSAGE: &str = "Invalid mobile number format";

/// Mobile is optional; this rule only fires when a value is present and
/// fails the shape test.
#[derive(Debug, Default)]
pub struct MobileFormatRule;

impl super::RowRule for MobileFormatRule {
    fn name(&self) -> &'static str {
        "mobile_format"
    }

    fn check(&self, row: &ParsedRow, mapping: &FieldMapping) -> Vec<String> {
        let record = map_row(row, mapping);
        match record.get(MOBILE_FIELD) {
            Some(mobile) if !is_valid_mobile(mobile) => {
                vec![INVALID_MOBILE_MESSAGE.to_string()]
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RowRule;

    fn mapping() -> FieldMapping {
        FieldMapping::new().with("Mobile", MOBILE_FIELD)
    }

    #[test]
    fn absent_mobile_is_not_an_error() {
        assert!(MobileFormatRule.check(&ParsedRow::new(), &mapping()).is_empty());
    }

    #[test]
    fn short_number_is_reported() {
        let mut row = ParsedRow::new();
        row.set("Mobile", "123");

        let messages = MobileFormatRule.check(&row, &mapping());
        assert_eq!(messages, vec![INVALID_MOBILE_MESSAGE.to_string()]);
    }

    #[test]
    fn formatted_number_passes() {
        let mut row = ParsedRow::new();
        row.set("Mobile", "+91 98765-43210");

        assert!(MobileFormatRule.check(&row, &mapping()).is_empty());
    }
}
