//! Catalog Loading
//!
//! Reads CSV catalog exports into text records for [`Vocabulary::build`].
//! A record is the designated fields of one row joined by single spaces;
//! missing columns, empty cells and cells that are not valid UTF-8
//! contribute empty strings.
//!
//! [`Vocabulary::build`]: super::vocabulary::Vocabulary::build

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{SpellError, SpellResult};

/// Which catalog columns feed the vocabulary
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSet {
    /// Title, category, manufacturer and brand columns
    #[default]
    Basic,
    /// Basic columns plus description, top review and features
    Extended,
}

const BASIC_FIELDS: &[&str] = &[
    "title",
    "categories",
    "manufacturer",
    "brand",
    "category_code",
    "brand01",
];

const EXTENDED_FIELDS: &[&str] = &[
    "title",
    "categories",
    "manufacturer",
    "brand",
    "category_code",
    "brand01",
    "description",
    "top_review",
    "features",
];

impl FieldSet {
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            FieldSet::Basic => BASIC_FIELDS,
            FieldSet::Extended => EXTENDED_FIELDS,
        }
    }
}

/// One CSV file of catalog rows
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSource {
    pub path: PathBuf,
    #[serde(default)]
    pub field_set: FieldSet,
}

impl CatalogSource {
    pub fn new(path: impl Into<PathBuf>, field_set: FieldSet) -> Self {
        Self {
            path: path.into(),
            field_set,
        }
    }
}

/// Read catalog records from CSV data with a header row.
pub fn read_records<R: io::Read>(reader: R, field_set: FieldSet) -> Result<Vec<String>, csv::Error> {
    let csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let mut records = Vec::new();
    collect_records(csv_reader, field_set, &mut records)?;
    Ok(records)
}

/// Read and union the records of every source, in order.
pub fn load_records(sources: &[CatalogSource]) -> SpellResult<Vec<String>> {
    if sources.is_empty() {
        return Err(SpellError::NoCatalogSources);
    }

    let mut records = Vec::new();
    for source in sources {
        let count = read_source(&source.path, source.field_set, &mut records).map_err(|e| {
            SpellError::CatalogRead {
                path: source.path.clone(),
                source: e,
            }
        })?;
        log::info!("Loaded {} catalog rows from {}", count, source.path.display());
    }

    Ok(records)
}

fn read_source(path: &Path, field_set: FieldSet, out: &mut Vec<String>) -> Result<usize, csv::Error> {
    let csv_reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    collect_records(csv_reader, field_set, out)
}

fn collect_records<R: io::Read>(
    mut csv_reader: csv::Reader<R>,
    field_set: FieldSet,
    out: &mut Vec<String>,
) -> Result<usize, csv::Error> {
    let headers = csv_reader.byte_headers()?.clone();
    let positions: Vec<Option<usize>> = field_set
        .columns()
        .iter()
        .map(|column| {
            headers
                .iter()
                .position(|header| String::from_utf8_lossy(header).trim() == *column)
        })
        .collect();

    let missing: Vec<&str> = field_set
        .columns()
        .iter()
        .zip(&positions)
        .filter(|(_, position)| position.is_none())
        .map(|(column, _)| *column)
        .collect();
    if !missing.is_empty() {
        log::debug!("Catalog columns missing, treated as empty: {}", missing.join(", "));
    }

    let mut count = 0;
    for row in csv_reader.byte_records() {
        let row = row?;
        let text = positions
            .iter()
            .map(|position| position.and_then(|i| row.get(i)).map_or("", field_text))
            .collect::<Vec<_>>()
            .join(" ");
        out.push(text);
        count += 1;
    }

    Ok(count)
}

fn field_text(bytes: &[u8]) -> &str {
    match std::str::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            log::debug!("Catalog field is not valid UTF-8, treated as empty: {}", e);
            ""
        }
    }
}
