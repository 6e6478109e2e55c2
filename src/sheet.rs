//! Raw-grid view of an uploaded statement workbook.
//!
//! Bank exports are messy: ragged row lengths, decorative banner rows above
//! the real header, entirely blank separator lines. `RawSheet` keeps all of
//! that as-is; the adapters decide what is a transaction.

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};

use crate::errors::{ConvertError, ConvertResult};

/// A single cell of the uploaded sheet, reduced to the three shapes the
/// extraction rules care about.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    /// Text form of the cell. Numbers use their shortest decimal
    /// representation, so `20260213.0` renders as `"20260213"`.
    pub fn to_text(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => format!("{n}"),
            Cell::Empty => String::new(),
        }
    }

    /// True when the cell trims to nothing.
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) => false,
            Cell::Empty => true,
        }
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty | Data::Error(_) => Cell::Empty,
            Data::String(s) => Cell::Text(s.clone()),
            Data::Float(f) => Cell::Number(*f),
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Bool(b) => Cell::Text(b.to_string()),
            Data::DateTime(dt) => Cell::Number(dt.as_f64()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        }
    }
}

/// The uploaded sheet as an ordered grid of cells. No shape invariant.
pub type RawSheet = Vec<Vec<Cell>>;

/// Reads the first sheet of an xlsx workbook from raw bytes.
///
/// Multi-sheet workbooks are quietly reduced to sheet 1; that is the
/// engine's contract with the upload layer.
pub fn read_first_sheet(data: &[u8]) -> ConvertResult<RawSheet> {
    let mut workbook = Xlsx::new(Cursor::new(data))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ConvertError::MissingSheet)??;

    Ok(range
        .rows()
        .map(|row| row.iter().map(Cell::from).collect())
        .collect())
}
