//! Tabular employer intake.
//!
//! Admin uploads arrive as CSV exports with inconsistent header naming, so
//! the name and category columns are located heuristically: a header
//! containing "company" or "employer" (or exactly "name") carries the
//! employer name, and a header containing "category" carries the tier.
//! Rows without a usable name are dropped; unrecognized category values
//! default to D.

use std::io::Read;

use super::domain::{BulkEntry, EmployerCategory};

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("invalid CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("no company-name column found in headers {0:?}")]
    MissingNameColumn(Vec<String>),
}

pub(crate) fn parse_csv<R: Read>(reader: R) -> Result<Vec<BulkEntry>, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let name_column = headers
        .iter()
        .position(is_name_header)
        .ok_or_else(|| ImportError::MissingNameColumn(headers.iter().map(String::from).collect()))?;
    let category_column = headers.iter().position(is_category_header);

    let mut entries = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let name = record.get(name_column).unwrap_or("").trim();
        if name.is_empty() {
            continue;
        }

        let category = category_column
            .and_then(|column| record.get(column))
            .map(EmployerCategory::parse_lenient)
            .unwrap_or(EmployerCategory::D);

        entries.push(BulkEntry {
            name: name.to_string(),
            category,
        });
    }

    Ok(entries)
}

fn is_name_header(header: &str) -> bool {
    let normalized = header.trim().to_lowercase();
    normalized == "name"
        || normalized.contains("company")
        || normalized.contains("employer")
}

fn is_category_header(header: &str) -> bool {
    header.trim().to_lowercase().contains("category")
}
