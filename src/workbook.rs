//! The ledger assembler: canonical rows in, single-sheet workbook out.

use std::path::Path;

use chrono::{Datelike, Local};
use rust_xlsxwriter::Workbook;

use crate::errors::ConvertResult;
use crate::labels;
use crate::sheet::Cell;
use crate::types::LedgerRow;

/// The converted household-ledger workbook: one sheet, a title row, the
/// fixed 9-column header, then the data rows in source order.
///
/// Assembly is pure; rows are never dropped, reordered or deduplicated here.
/// All of that already happened in the adapter.
#[derive(Debug, Clone)]
pub struct LedgerWorkbook {
    title: String,
    rows: Vec<LedgerRow>,
}

impl LedgerWorkbook {
    /// Derives the title from the first row's date year, falling back to
    /// the current calendar year when there are no rows at all.
    pub fn assemble(rows: Vec<LedgerRow>) -> Self {
        let year = rows
            .first()
            .and_then(|row| row.date.get(..4))
            .map(str::to_string)
            .unwrap_or_else(|| Local::now().year().to_string());

        LedgerWorkbook {
            title: format!("{year}{}", labels::LEDGER_TITLE_SUFFIX),
            rows,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rows(&self) -> &[LedgerRow] {
        &self.rows
    }

    /// The full sheet layout as cell rows, exactly as serialized.
    pub fn sheet_rows(&self) -> Vec<Vec<Cell>> {
        let mut out = Vec::with_capacity(self.rows.len() + 2);
        out.push(vec![Cell::Text(self.title.clone())]);
        out.push(
            labels::LEDGER_HEADERS
                .iter()
                .map(|h| Cell::Text(h.to_string()))
                .collect(),
        );
        out.extend(self.rows.iter().map(|row| row.to_cells().to_vec()));
        out
    }

    fn build(&self) -> ConvertResult<Workbook> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(labels::LEDGER_SHEET)?;

        for (r, row) in self.sheet_rows().iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                match cell {
                    Cell::Text(s) => sheet.write_string(r as u32, c as u16, s)?,
                    Cell::Number(n) => sheet.write_number(r as u32, c as u16, *n)?,
                    Cell::Empty => continue,
                };
            }
        }

        Ok(workbook)
    }

    pub fn save(&self, path: &Path) -> ConvertResult<()> {
        self.build()?.save(path)?;
        Ok(())
    }

    pub fn save_to_buffer(&self) -> ConvertResult<Vec<u8>> {
        Ok(self.build()?.save_to_buffer()?)
    }
}
