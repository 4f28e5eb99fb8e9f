use crate::mapping::FieldMapping;
use crate::row::{MappedRecord, ParsedRow};

/// Project a parsed row onto canonical field names through the caller's
/// column mapping.
///
/// Columns mapped to an empty target, columns absent from the mapping,
/// and empty source cells are all silently dropped, so a missing field is
/// simply absent from the result rather than present as an empty string.
/// Total and deterministic; never fails on well-formed input.
pub fn map_row(row: &ParsedRow, mapping: &FieldMapping) -> MappedRecord {
    let mut record = MappedRecord::new();
    for (source, target) in mapping.iter() {
        if target.is_empty() {
            continue;
        }
        if let Some(value) = row.get(source) {
            if !value.is_empty() {
                record.insert(target.to_string(), value.to_string());
            }
        }
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::{EMAIL_FIELD, FILE_NO_FIELD, NAME_FIELD};

    fn sample_mapping() -> FieldMapping {
        FieldMapping::new()
            .with("Client Name", NAME_FIELD)
            .with("File No", FILE_NO_FIELD)
            .with("Email Address", EMAIL_FIELD)
            .with("Remarks", "")
    }

    #[test]
    fn projects_mapped_columns() {
        let mut row = ParsedRow::new();
        row.set("Client Name", "Acme Traders");
        row.set("File No", "F-101");
        row.set("Email Address", "accounts@acme.example");
        row.set("Remarks", "priority client");
        row.set("Unmapped Column", "dropped");

        let record = map_row(&row, &sample_mapping());

        assert_eq!(record.get(NAME_FIELD).map(String::as_str), Some("Acme Traders"));
        assert_eq!(record.get(FILE_NO_FIELD).map(String::as_str), Some("F-101"));
        assert_eq!(
            record.get(EMAIL_FIELD).map(String::as_str),
            Some("accounts@acme.example")
        );
        // Empty-target and unmapped columns are dropped entirely.
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn drops_empty_source_values() {
        let mut row = ParsedRow::new();
        row.set("Client Name", "Acme Traders");
        row.set("Email Address", "");

        let record = map_row(&row, &sample_mapping());

        assert!(record.contains_key(NAME_FIELD));
        assert!(!record.contains_key(EMAIL_FIELD));
    }

    #[test]
    fn keeps_whitespace_only_values() {
        // Whitespace-only cells survive mapping; the required-field rule
        // is what trims and rejects them.
        let mut row = ParsedRow::new();
        row.set("Client Name", "   ");

        let record = map_row(&row, &sample_mapping());
        assert_eq!(record.get(NAME_FIELD).map(String::as_str), Some("   "));
    }

    #[test]
    fn mapping_is_idempotent() {
        let mut row = ParsedRow::new();
        row.set("Client Name", "Acme Traders");
        row.set("File No", "F-101");

        let mapping = sample_mapping();
        assert_eq!(map_row(&row, &mapping), map_row(&row, &mapping));
    }

    #[test]
    fn empty_mapping_yields_empty_record() {
        let mut row = ParsedRow::new();
        row.set("Client Name", "Acme Traders");
        assert!(map_row(&row, &FieldMapping::new()).is_empty());
    }
}
