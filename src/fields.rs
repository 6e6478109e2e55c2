//! Stateless field parsers shared by every bank adapter.
//!
//! All of these are total over messy input: a cell that does not hold what
//! the rule expects yields `None` (dates) or zero (amounts), never an error.
//! Row-level skipping decisions belong to the adapters.

use num_traits::{FromPrimitive, ToPrimitive};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use crate::sheet::Cell;
use crate::types::ParsedDate;

static KOREAN_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{4})년\s*(\d{1,2})월\s*(\d{1,2})일").unwrap());

/// Parses the spelled-out Korean date form, e.g. `"2026년 2월 13일"`.
/// Whitespace between number and unit marker is tolerated.
pub fn parse_korean_date(text: &str) -> Option<ParsedDate> {
    let caps = KOREAN_DATE_RE.captures(text.trim())?;
    Some(ParsedDate {
        year: caps[1].parse().ok()?,
        month: caps[2].parse().ok()?,
        day: caps[3].parse().ok()?,
    })
}

/// Parses a compact `YYYYMMDD` date after discarding every non-digit
/// character, so `"2026-02-13"` and `"20260213"` are equivalent. Any digit
/// count other than exactly 8 fails.
pub fn parse_compact_date(text: &str) -> Option<ParsedDate> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 8 {
        return None;
    }
    Some(ParsedDate {
        year: digits[0..4].parse().ok()?,
        month: digits[4..6].parse().ok()?,
        day: digits[6..8].parse().ok()?,
    })
}

/// Normalizes a cell into a decimal amount. Numeric cells pass through
/// unchanged; text cells lose thousands separators and surrounding
/// whitespace before parsing. Anything unparsable or empty is zero, which
/// downstream logic reads as "no transaction".
pub fn parse_amount(cell: &Cell) -> Decimal {
    match cell {
        Cell::Number(n) => Decimal::from_f64(*n).unwrap_or(Decimal::ZERO),
        Cell::Text(s) => {
            let clean = s.replace(',', "");
            let clean = clean.trim();
            if clean.is_empty() {
                return Decimal::ZERO;
            }
            clean.parse().unwrap_or(Decimal::ZERO)
        }
        Cell::Empty => Decimal::ZERO,
    }
}

/// Picks the transaction amount from a row, in strict priority order: the
/// primary column, the column immediately left of it, then the named
/// fallback column. First strictly-positive parse wins.
///
/// The primary-minus-one candidate tolerates the single-column drift between
/// header and data rows seen in real exports; it is kept verbatim rather
/// than generalized into layout auto-detection.
pub fn pick_amount(row: &[Cell], primary: Option<usize>, fallback: Option<usize>) -> Decimal {
    let candidates = [primary, primary.and_then(|i| i.checked_sub(1)), fallback];

    candidates
        .into_iter()
        .flatten()
        .filter_map(|idx| row.get(idx))
        .map(parse_amount)
        .find(|amount| *amount > Decimal::ZERO)
        .unwrap_or(Decimal::ZERO)
}

/// Trims a merchant cell and, when the transaction amount is known, strips a
/// trailing echo of it (some exports concatenate the amount onto the
/// merchant field). The echo is matched both with thousands separators and
/// as a plain integer. Trailing whitespace and commas go last.
pub fn clean_merchant_name(raw: &str, amount: Option<&Decimal>) -> String {
    let mut name = raw.trim().to_string();
    if name.is_empty() {
        return name;
    }

    if let Some(amount) = amount.filter(|a| **a > Decimal::ZERO) {
        if let Some(whole) = amount.trunc().to_u64() {
            name = name
                .strip_suffix(&group_thousands(whole))
                .unwrap_or(&name)
                .trim()
                .to_string();
            name = name
                .strip_suffix(&whole.to_string())
                .unwrap_or(&name)
                .trim()
                .to_string();
        }
    }

    name.trim_end_matches(|c: char| c.is_whitespace() || c == ',')
        .trim()
        .to_string()
}

/// `12345` → `"12,345"`.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
