//! CSV parsing of the `match` column.
//!
//! Only the column literally named `match` is interpreted; every other
//! column is ignored. Row order is the alignment key between a submission
//! and the ground truth.

use crate::errors::{DataFormatError, DataFormatResult};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Header of the column that is compared.
pub const MATCH_COLUMN: &str = "match";

const UTF8_BOM: char = '\u{feff}';

/// A single cell of the `match` column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cell(String);

impl Cell {
    /// Wrap a raw cell value; surrounding whitespace is dropped.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_string())
    }

    /// The trimmed cell text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Missing values never agree with anything, including other missing values.
    pub fn is_missing(&self) -> bool {
        self.0.is_empty()
    }

    fn as_number(&self) -> Option<f64> {
        self.0.parse::<f64>().ok().filter(|v| v.is_finite())
    }

    /// Elementwise equality used for scoring.
    ///
    /// Two numeric cells compare by value, so `1` agrees with `1.0`.
    /// Anything else compares as text.
    pub fn agrees_with(&self, other: &Cell) -> bool {
        if self.is_missing() || other.is_missing() {
            return false;
        }
        match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) => a == b,
            _ => self.0 == other.0,
        }
    }
}

/// The `match` column of a CSV table, in row order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchColumn {
    cells: Vec<Cell>,
}

impl MatchColumn {
    /// Build a column directly from cell values.
    pub fn from_cells<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            cells: cells.into_iter().map(Cell::new).collect(),
        }
    }

    /// Parse the `match` column out of CSV bytes with a header row.
    pub fn from_csv_bytes(data: &[u8]) -> DataFormatResult<Self> {
        Self::from_reader(data)
    }

    /// Parse the `match` column out of any CSV reader with a header row.
    pub fn from_reader<R: Read>(reader: R) -> DataFormatResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| DataFormatError::Csv(e.to_string()))?
            .clone();

        let index = headers
            .iter()
            .position(|h| h.trim_start_matches(UTF8_BOM).trim() == MATCH_COLUMN)
            .ok_or_else(|| DataFormatError::MissingColumn {
                column: MATCH_COLUMN.to_string(),
            })?;

        let mut cells = Vec::new();
        for (row_num, record) in reader.records().enumerate() {
            let record = record.map_err(|e| {
                DataFormatError::Csv(format!("failed to parse CSV row {}: {}", row_num + 1, e))
            })?;
            cells.push(Cell::new(record.get(index).unwrap_or_default()));
        }

        Ok(Self { cells })
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in row order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

/// The authoritative `match` column every submission is scored against.
///
/// Loaded once at startup and shared read-only for the process lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundTruth {
    column: MatchColumn,
    source: Option<PathBuf>,
}

impl GroundTruth {
    /// Ground truth built from an already parsed column.
    pub fn new(column: MatchColumn) -> Self {
        Self {
            column,
            source: None,
        }
    }

    /// Parse ground truth from CSV bytes, remembering where they came from.
    pub fn from_csv_bytes(data: &[u8], source: impl AsRef<Path>) -> DataFormatResult<Self> {
        let column = MatchColumn::from_csv_bytes(data)?;
        if column.is_empty() {
            return Err(DataFormatError::Empty);
        }
        Ok(Self {
            column,
            source: Some(source.as_ref().to_path_buf()),
        })
    }

    /// The expected `match` values.
    pub fn column(&self) -> &MatchColumn {
        &self.column
    }

    /// Number of ground-truth rows.
    pub fn len(&self) -> usize {
        self.column.len()
    }

    /// Whether the ground truth has no rows.
    pub fn is_empty(&self) -> bool {
        self.column.is_empty()
    }

    /// File the ground truth was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}
