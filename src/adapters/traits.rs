use rust_decimal::Decimal;

use super::layout::HeaderLayout;
use crate::converter::Bank;
use crate::errors::{ConvertError, ConvertResult};
use crate::fields::{clean_merchant_name, pick_amount};
use crate::sheet::{Cell, RawSheet};
use crate::types::{LedgerRow, ParsedDate};

/// One supported bank layout.
///
/// Adapters differ only in their header vocabulary, date encoding and
/// card-label normalization; the extraction control flow is shared through
/// the provided [`convert`](BankAdapter::convert). Adding a bank means one
/// impl of this trait plus one arm in [`Bank::convert`].
pub trait BankAdapter {
    const BANK: Bank;
    const LAYOUT: HeaderLayout;

    /// Whether the merchant cell of this layout echoes the amount at its
    /// tail and needs it stripped.
    const MERCHANT_AMOUNT_ECHO: bool;

    /// Decodes this bank's textual date encoding. `None` marks the row as
    /// not a transaction.
    fn parse_date(text: &str) -> Option<ParsedDate>;

    /// Normalizes the raw card cell into the ledger's card label.
    fn normalize_card(raw: &str) -> String;

    /// Index of the first row matching this bank's header signature.
    fn find_header(sheet: &RawSheet) -> Option<usize> {
        sheet.iter().position(|row| Self::LAYOUT.matches(row))
    }

    /// Extracts the canonical ledger rows from a raw sheet.
    ///
    /// A missing header row is a hard recognition failure. Everything else
    /// that is not a transaction — blank rows, undecodable dates,
    /// non-positive amounts — is skipped silently, because real exports
    /// routinely interleave such lines with the data.
    fn convert(sheet: &RawSheet) -> ConvertResult<Vec<LedgerRow>> {
        let header_idx =
            Self::find_header(sheet).ok_or(ConvertError::HeaderRowNotFound(Self::BANK))?;
        let columns = Self::LAYOUT.resolve(&sheet[header_idx]);

        let mut rows = Vec::new();
        for raw in &sheet[header_idx + 1..] {
            if raw.iter().all(Cell::is_blank) {
                continue;
            }

            let Some(date) = cell_text(raw, columns.date)
                .as_deref()
                .and_then(Self::parse_date)
            else {
                continue;
            };

            let amount = pick_amount(raw, columns.amount, columns.fallback_amount);
            if amount <= Decimal::ZERO {
                continue;
            }

            let card = cell_text(raw, columns.card).unwrap_or_default();
            let merchant_raw = cell_text(raw, columns.merchant).unwrap_or_default();
            let echo = Self::MERCHANT_AMOUNT_ECHO.then_some(&amount);

            rows.push(LedgerRow::new(
                Self::normalize_card(&card),
                &date,
                clean_merchant_name(&merchant_raw, echo),
                amount,
            ));
        }

        Ok(rows)
    }
}

fn cell_text(row: &[Cell], index: Option<usize>) -> Option<String> {
    index.and_then(|i| row.get(i)).map(Cell::to_text)
}
