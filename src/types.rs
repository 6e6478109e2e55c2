use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::labels;
use crate::sheet::Cell;

/// A calendar date extracted from a statement cell.
///
/// Only produced when the source text unambiguously decomposes into the
/// year/month/day triple; the adapters skip rows whose date cell does not.
/// There is deliberately no calendar validation beyond that decomposition,
/// matching the tolerance of the source exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl ParsedDate {
    /// Canonical `YYYY-MM-DD` form used in the date and note columns.
    pub fn iso(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// Display month, unpadded: `"2월"`, not `"02월"`.
    pub fn month_label(&self) -> String {
        format!("{}{}", self.month, labels::MONTH_SUFFIX)
    }
}

/// The canonical 9-field ledger row every bank adapter produces.
///
/// Shape is bank-agnostic by construction; the assembler consumes it without
/// knowing which adapter ran. The two category columns are always blank in
/// converted output (they are filled in by hand in the ledger).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRow {
    pub entry_type: String,
    pub card: String,
    pub month: String,
    pub date: String,
    pub merchant: String,
    pub amount: Decimal,
    pub category1: String,
    pub category2: String,
    pub note: String,
}

impl LedgerRow {
    pub fn new(card: String, date: &ParsedDate, merchant: String, amount: Decimal) -> Self {
        let iso = date.iso();
        LedgerRow {
            entry_type: labels::ENTRY_TYPE_CARD.to_string(),
            card,
            month: date.month_label(),
            note: format!("{}{})", labels::NOTE_PREFIX, iso),
            date: iso,
            merchant,
            amount,
            category1: String::new(),
            category2: String::new(),
        }
    }

    /// The row as sheet cells, in output-column order.
    pub fn to_cells(&self) -> [Cell; 9] {
        [
            Cell::Text(self.entry_type.clone()),
            Cell::Text(self.card.clone()),
            Cell::Text(self.month.clone()),
            Cell::Text(self.date.clone()),
            Cell::Text(self.merchant.clone()),
            Cell::Number(self.amount.to_f64().unwrap_or(0.0)),
            Cell::Text(self.category1.clone()),
            Cell::Text(self.category2.clone()),
            Cell::Text(self.note.clone()),
        ]
    }
}
