use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::input::ImportInputError;
use crate::row::{
    CLIENT_FIELDS, EMAIL_FIELD, FILE_NO_FIELD, MOBILE_FIELD, NAME_FIELD,
};

/// Correspondence between uploaded-file column headers and canonical
/// client-record fields. An empty target means "ignore this column".
///
/// Mappings are supplied once per import session, either from a saved
/// JSON document or pre-filled by [`suggest_mapping`], and are read-only
/// while validation runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMapping {
    columns: BTreeMap<String, String>,
}

impl FieldMapping {
    pub fn new() -> Self {
        Self {
            columns: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, source: impl Into<String>, target: impl Into<String>) {
        self.columns.insert(source.into(), target.into());
    }

    pub fn with(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.insert(source, target);
        self
    }

    pub fn target_for(&self, source: &str) -> Option<&str> {
        self.columns.get(source).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns
            .iter()
            .map(|(source, target)| (source.as_str(), target.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Count of columns mapped onto a non-empty target field.
    pub fn mapped_column_count(&self) -> usize {
        self.columns.values().filter(|target| !target.is_empty()).count()
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ImportInputError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| ImportInputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| ImportInputError::MappingJson {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl FromIterator<(String, String)> for FieldMapping {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}

const HEADER_SYNONYMS: &[(&str, &str)] = &[
    ("client name", NAME_FIELD),
    ("client", NAME_FIELD),
    ("full name", NAME_FIELD),
    ("file number", FILE_NO_FIELD),
    ("file no", FILE_NO_FIELD),
    ("file no.", FILE_NO_FIELD),
    ("file #", FILE_NO_FIELD),
    ("email address", EMAIL_FIELD),
    ("e-mail", EMAIL_FIELD),
    ("mail", EMAIL_FIELD),
    ("mobile number", MOBILE_FIELD),
    ("mobile no", MOBILE_FIELD),
    ("phone", MOBILE_FIELD),
    ("phone number", MOBILE_FIELD),
    ("contact number", MOBILE_FIELD),
];

/// Pre-fill a mapping from common export headers, the way the portal's
/// import screen seeds its column-mapping step. Headers are matched
/// case-insensitively against the canonical field names and a short
/// synonym list; anything unrecognised maps to the empty target so the
/// caller can fill it in (or leave the column ignored).
pub fn suggest_mapping(headers: &[String]) -> FieldMapping {
    let mut mapping = FieldMapping::new();
    for header in headers {
        let normalized = header.trim().to_ascii_lowercase();
        let direct = CLIENT_FIELDS
            .iter()
            .find(|field| normalized == **field || normalized.replace(' ', "_") == **field);
        let target = match direct {
            Some(field) => field,
            None => HEADER_SYNONYMS
                .iter()
                .find(|(synonym, _)| normalized == *synonym)
                .map(|(_, field)| field)
                .unwrap_or(&""),
        };
        mapping.insert(header.clone(), *target);
    }
    mapping
}
