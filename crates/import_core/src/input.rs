use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use thiserror::Error;
use tracing::debug;

use crate::row::ParsedRow;

#[derive(Debug, Error)]
pub enum ImportInputError {
    #[error("input path {0} does not exist")]
    MissingPath(PathBuf),
    #[error("input path {0} is not a file")]
    NotAFile(PathBuf),
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse csv {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("failed to parse mapping {path}")]
    MappingJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A parsed upload: the header row plus every data row, in file order.
#[derive(Debug, Clone, Default)]
pub struct CsvImport {
    pub headers: Vec<String>,
    pub rows: Vec<ParsedRow>,
}

/// Read a client CSV export from disk.
pub fn read_csv_file(path: impl AsRef<Path>) -> Result<CsvImport, ImportInputError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ImportInputError::MissingPath(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(ImportInputError::NotAFile(path.to_path_buf()));
    }
    let data = std::fs::read(path).map_err(|source| ImportInputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv_bytes(&data).map_err(|source| ImportInputError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse CSV bytes into header + rows. Headers are trimmed; cell values
/// are kept verbatim. Short records leave trailing columns absent, extra
/// cells beyond the header width are dropped.
pub fn read_csv_bytes(data: &[u8]) -> Result<CsvImport, csv::Error> {
    let data = strip_utf8_bom(data);
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::None)
        .from_reader(data);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|header| header.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row: ParsedRow = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| (header.clone(), value.to_string()))
            .collect();
        // Spreadsheet exports often carry blank padding rows; dropping
        // them here keeps them out of required-field checks.
        if row.is_empty() {
            continue;
        }
        rows.push(row);
    }

    debug!(rows = rows.len(), columns = headers.len(), "parsed csv input");
    Ok(CsvImport { headers, rows })
}

fn strip_utf8_bom(data: &[u8]) -> &[u8] {
    data.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_headers_and_rows() {
        let data = b"Client Name,File No,Email\nAcme,F-101,a@acme.example\nBasel,F-102,\n";

        let import = read_csv_bytes(data).expect("parse");

        assert_eq!(import.headers, vec!["Client Name", "File No", "Email"]);
        assert_eq!(import.rows.len(), 2);
        assert_eq!(import.rows[0].get("Client Name"), Some("Acme"));
        assert_eq!(import.rows[1].get("Email"), Some(""));
    }

    #[test]
    fn strips_utf8_bom_before_headers() {
        let data = b"\xEF\xBB\xBFClient Name,File No\nAcme,F-101\n";

        let import = read_csv_bytes(data).expect("parse");

        assert_eq!(import.headers[0], "Client Name");
    }

    #[test]
    fn short_records_leave_columns_absent() {
        let data = b"Client Name,File No,Email\nAcme,F-101\n";

        let import = read_csv_bytes(data).expect("parse");

        assert_eq!(import.rows[0].get("File No"), Some("F-101"));
        assert_eq!(import.rows[0].get("Email"), None);
    }

    #[test]
    fn blank_padding_rows_are_dropped() {
        let data = b"Client Name,File No\nAcme,F-101\n,\n  ,\n";

        let import = read_csv_bytes(data).expect("parse");

        assert_eq!(import.rows.len(), 1);
    }

    #[test]
    fn missing_path_is_reported() {
        let err = read_csv_file("/definitely/not/here.csv").expect_err("missing");
        assert!(matches!(err, ImportInputError::MissingPath(_)));
    }
}
