use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{Record, RecordSet};
use crate::error::{ScatterError, ScatterResult};

/// Header names of the CSV columns feeding each record field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvColumns {
    #[serde(default = "default_name_column")]
    pub name: String,
    #[serde(default = "default_x_column")]
    pub x: String,
    #[serde(default = "default_y_column")]
    pub y: String,
    #[serde(default = "default_size_column")]
    pub size: String,
    #[serde(default = "default_population_column")]
    pub population: String,
}

impl Default for CsvColumns {
    fn default() -> Self {
        Self {
            name: default_name_column(),
            x: default_x_column(),
            y: default_y_column(),
            size: default_size_column(),
            population: default_population_column(),
        }
    }
}

fn default_name_column() -> String {
    "country".to_owned()
}

fn default_x_column() -> String {
    "gdp".to_owned()
}

fn default_y_column() -> String {
    "ecc".to_owned()
}

fn default_size_column() -> String {
    "ec".to_owned()
}

fn default_population_column() -> String {
    "population".to_owned()
}

struct ColumnIndices {
    name: usize,
    x: usize,
    y: usize,
    size: usize,
    population: usize,
}

impl ColumnIndices {
    fn resolve(headers: &csv::StringRecord, columns: &CsvColumns) -> ScatterResult<Self> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|header| header == column)
                .ok_or_else(|| ScatterError::MissingColumn(column.to_owned()))
        };
        Ok(Self {
            name: find(&columns.name)?,
            x: find(&columns.x)?,
            y: find(&columns.y)?,
            size: find(&columns.size)?,
            population: find(&columns.population)?,
        })
    }
}

/// Parses a CSV stream into records.
///
/// The first row must be a header naming every configured column; extra
/// columns are ignored. Any unparseable or negative numeric field fails the
/// whole load.
pub fn load_records<R: Read>(reader: R, columns: &CsvColumns) -> ScatterResult<RecordSet> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = reader.headers()?.clone();
    let indices = ColumnIndices::resolve(&headers, columns)?;

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        // Header is line 1.
        let line = row
            .position()
            .map_or(index + 2, |position| position.line() as usize);
        let field = |column_index: usize, column: &str| -> ScatterResult<f64> {
            let raw = row.get(column_index).unwrap_or_default();
            raw.parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| ScatterError::InvalidField {
                    row: line,
                    column: column.to_owned(),
                    value: raw.to_owned(),
                })
        };

        let name = row.get(indices.name).unwrap_or_default();
        let record = Record::new(
            name,
            field(indices.x, &columns.x)?,
            field(indices.y, &columns.y)?,
            field(indices.size, &columns.size)?,
            field(indices.population, &columns.population)?,
        )?;
        records.push(record);
    }

    debug!(records = records.len(), "parsed csv dataset");
    RecordSet::new(records)
}

pub fn load_records_from_str(input: &str, columns: &CsvColumns) -> ScatterResult<RecordSet> {
    load_records(input.as_bytes(), columns)
}

pub fn load_records_from_path(
    path: impl AsRef<Path>,
    columns: &CsvColumns,
) -> ScatterResult<RecordSet> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let records = load_records(file, columns)?;
    info!(path = %path.display(), records = records.len(), "loaded dataset");
    Ok(records)
}
