use std::path::PathBuf;

use thiserror::Error;

use crate::converter::Bank;

/// Errors that can occur while converting a card statement into a ledger
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Bank identifier is not in the supported set
    #[error("Unsupported bank type: {0} (supported: hyundai, samsung)")]
    UnsupportedBank(String),

    /// No row of the uploaded sheet matched the bank's header signature
    #[error("Failed to locate {0} card header row")]
    HeaderRowNotFound(Bank),

    /// The uploaded bytes could not be opened as an xlsx workbook
    #[error("Failed to read workbook: {0}")]
    WorkbookRead(#[from] calamine::XlsxError),

    /// The uploaded workbook contains no sheets at all
    #[error("Workbook has no sheets")]
    MissingSheet,

    /// Serializing the converted ledger workbook failed
    #[error("Failed to write ledger workbook: {0}")]
    WorkbookWrite(#[from] rust_xlsxwriter::XlsxError),

    /// Filesystem error while reading input or preparing the export directory
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The timestamped export name is already taken; never overwrite
    #[error("Export file already exists: {}", .0.display())]
    ExportFileExists(PathBuf),

    // ── Builder misuse ──────────────────────────────────────────────────────

    /// The builder was run without statement bytes and without a file path
    #[error("Statement data or filepath is required")]
    MissingDataAndFilepath,

    /// The builder was run without selecting a bank
    #[error("Bank is required")]
    MissingBank,
}

/// Convenient alias for Result with our main error type
pub type ConvertResult<T> = Result<T, ConvertError>;
