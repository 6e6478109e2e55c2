//! Convert bank-issued credit card statements into a canonical household
//! ledger workbook.
//!
//! ```rust,ignore
//! use card_ledger_rs::{Bank, ConversionBuilder};
//!
//! let conversion = ConversionBuilder::new()
//!     .bank(Bank::Hyundai)
//!     .data(&upload_bytes)
//!     .export()?;
//! ```

mod converter;
mod types;
mod workbook;

pub mod adapters;
pub mod errors;
pub mod fields;
pub mod labels;
pub mod sheet;

pub use adapters::prelude::*;
pub use converter::{Bank, Conversion, ConversionBuilder, DEFAULT_EXPORT_DIR};
pub use errors::{ConvertError, ConvertResult};
pub use types::{LedgerRow, ParsedDate};
pub use workbook::LedgerWorkbook;
