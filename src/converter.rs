use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::adapters::prelude::*;
use crate::errors::{ConvertError, ConvertResult};
use crate::sheet::read_first_sheet;
use crate::types::LedgerRow;
use crate::workbook::LedgerWorkbook;

/// Where converted workbooks land unless the builder overrides it.
pub const DEFAULT_EXPORT_DIR: &str = "export";

/// How many leading rows [`Conversion::preview`] exposes.
const PREVIEW_ROWS: usize = 5;

/// The closed set of supported banks. Adding one means an adapter impl and
/// an arm in [`Bank::convert`]; nothing else changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bank {
    Hyundai,
    Samsung,
}

impl Bank {
    pub const ALL: [Bank; 2] = [Bank::Hyundai, Bank::Samsung];

    /// Stable identifier used in requests and export file names.
    pub fn id(&self) -> &'static str {
        match self {
            Bank::Hyundai => "hyundai",
            Bank::Samsung => "samsung",
        }
    }

    /// Runs this bank's adapter over the first sheet of the uploaded bytes.
    pub fn convert(&self, data: &[u8]) -> ConvertResult<Vec<LedgerRow>> {
        let sheet = read_first_sheet(data)?;
        debug!(bank = %self, sheet_rows = sheet.len(), "read first sheet");

        match self {
            Bank::Hyundai => HyundaiAdapter::convert(&sheet),
            Bank::Samsung => SamsungAdapter::convert(&sheet),
        }
    }

    /// `{bank}_converted_{yyyyMMdd}_{HHmmss}.xlsx`
    pub fn export_file_name(&self, at: DateTime<Local>) -> String {
        format!("{}_converted_{}.xlsx", self.id(), at.format("%Y%m%d_%H%M%S"))
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Bank {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hyundai" => Ok(Bank::Hyundai),
            "samsung" => Ok(Bank::Samsung),
            _ => Err(ConvertError::UnsupportedBank(s.trim().to_string())),
        }
    }
}

/// Outcome of a completed conversion: the canonical rows plus where the
/// serialized ledger workbook was written.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub bank: Bank,
    pub rows: Vec<LedgerRow>,
    pub output_file_name: String,
    pub output_path: PathBuf,
}

impl Conversion {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The first few rows, for upload-response previews.
    pub fn preview(&self) -> &[LedgerRow] {
        &self.rows[..self.rows.len().min(PREVIEW_ROWS)]
    }
}

/// Entry point of the engine.
///
/// ```rust,ignore
/// let conversion = ConversionBuilder::new()
///     .bank_id("samsung")
///     .data(&upload_bytes)
///     .export_dir("export")
///     .export()?;
/// ```
#[derive(Default)]
pub struct ConversionBuilder {
    bank: Option<Bank>,
    bank_id: Option<String>,
    data: Option<Vec<u8>>,
    filepath: Option<PathBuf>,
    export_dir: Option<PathBuf>,
}

impl ConversionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bank(mut self, bank: Bank) -> Self {
        self.bank = Some(bank);
        self
    }

    /// Selects the bank by its textual identifier; unknown identifiers
    /// surface as [`ConvertError::UnsupportedBank`] when the builder runs.
    pub fn bank_id(mut self, id: &str) -> Self {
        self.bank_id = Some(id.to_string());
        self
    }

    pub fn data(mut self, data: &[u8]) -> Self {
        self.data = Some(data.to_vec());
        self
    }

    pub fn filepath(mut self, path: impl Into<PathBuf>) -> Self {
        self.filepath = Some(path.into());
        self
    }

    pub fn export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = Some(dir.into());
        self
    }

    fn resolve_bank(&self) -> ConvertResult<Bank> {
        if let Some(bank) = self.bank {
            return Ok(bank);
        }
        match self.bank_id.as_deref() {
            Some(id) => id.parse(),
            None => Err(ConvertError::MissingBank),
        }
    }

    fn resolve_data(data: Option<Vec<u8>>, filepath: Option<PathBuf>) -> ConvertResult<Vec<u8>> {
        match (data, filepath) {
            (Some(data), _) => Ok(data),
            (None, Some(path)) => Ok(fs::read(path)?),
            (None, None) => Err(ConvertError::MissingDataAndFilepath),
        }
    }

    /// Converts without touching the filesystem export directory.
    pub fn rows(self) -> ConvertResult<Vec<LedgerRow>> {
        let bank = self.resolve_bank()?;
        let data = Self::resolve_data(self.data, self.filepath)?;
        bank.convert(&data)
    }

    /// Full pipeline: convert, assemble the ledger workbook and write it
    /// under the export directory with a timestamped name.
    ///
    /// Bank resolution happens before any file I/O, so an unsupported bank
    /// never leaves an artifact behind. A name collision (same bank, same
    /// second) is surfaced as an error rather than overwriting.
    pub fn export(self) -> ConvertResult<Conversion> {
        let bank = self.resolve_bank()?;
        let export_dir = self.export_dir.unwrap_or_else(|| DEFAULT_EXPORT_DIR.into());

        let data = Self::resolve_data(self.data, self.filepath)?;
        let rows = bank.convert(&data)?;
        info!(bank = %bank, rows = rows.len(), "converted statement");

        let workbook = LedgerWorkbook::assemble(rows.clone());

        fs::create_dir_all(&export_dir)?;
        let output_file_name = bank.export_file_name(Local::now());
        let output_path = export_dir.join(&output_file_name);
        ensure_fresh(&output_path)?;
        workbook.save(&output_path)?;
        info!(file = %output_path.display(), "exported ledger workbook");

        Ok(Conversion {
            bank,
            rows,
            output_file_name,
            output_path,
        })
    }
}

fn ensure_fresh(path: &Path) -> ConvertResult<()> {
    if path.try_exists()? {
        return Err(ConvertError::ExportFileExists(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::{Cell, read_first_sheet};
    use chrono::TimeZone;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use rust_xlsxwriter::Workbook;

    #[rstest]
    #[case("hyundai", Bank::Hyundai)]
    #[case("samsung", Bank::Samsung)]
    #[case("  SAMSUNG  ", Bank::Samsung)]  // trimmed, case insensitive
    fn test_bank_from_str_supported(#[case] input: &str, #[case] expected: Bank) {
        assert_eq!(input.parse::<Bank>().unwrap(), expected);
    }

    #[rstest]
    #[case("woori")]
    #[case("kb")]
    #[case("")]
    fn test_bank_from_str_unsupported(#[case] input: &str) {
        let result = input.parse::<Bank>();
        assert!(matches!(result, Err(ConvertError::UnsupportedBank(_))));
    }

    #[test]
    fn test_bank_serde_ids() {
        let json = serde_json::to_string(&Bank::Hyundai).unwrap();
        assert_eq!(json, "\"hyundai\"");
        let bank: Bank = serde_json::from_str("\"samsung\"").unwrap();
        assert_eq!(bank, Bank::Samsung);
    }

    #[test]
    fn test_export_file_name_format() {
        let at = Local.with_ymd_and_hms(2026, 2, 13, 14, 30, 5).unwrap();
        assert_eq!(
            Bank::Hyundai.export_file_name(at),
            "hyundai_converted_20260213_143005.xlsx"
        );
    }

    fn samsung_statement_bytes() -> Vec<u8> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        let header = ["이용일자", "카드번호", "사용처/가맹점", "이용금액", "결제예정금액"];
        for (c, label) in header.iter().enumerate() {
            sheet.write_string(1, c as u16, *label).unwrap();
        }
        let data = ["20260213", "****-1234", "스타벅스", "", "12,345"];
        for (c, value) in data.iter().enumerate() {
            sheet.write_string(2, c as u16, *value).unwrap();
        }
        // Entirely blank line below the data, as real exports have.
        sheet.write_string(4, 0, "합계").unwrap();
        workbook.save_to_buffer().unwrap()
    }

    #[test]
    fn test_rows_end_to_end() {
        let rows = ConversionBuilder::new()
            .bank(Bank::Samsung)
            .data(&samsung_statement_bytes())
            .rows()
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].card, "삼성카드 1234");
        assert_eq!(rows[0].amount, Decimal::from(12_345));
    }

    #[test]
    fn test_rows_wrong_bank_selected() {
        // Samsung bytes through the Hyundai adapter: recognition failure.
        let result = ConversionBuilder::new()
            .bank(Bank::Hyundai)
            .data(&samsung_statement_bytes())
            .rows();

        assert!(matches!(
            result,
            Err(ConvertError::HeaderRowNotFound(Bank::Hyundai))
        ));
    }

    #[test]
    fn test_rows_missing_bank() {
        let result = ConversionBuilder::new()
            .data(&samsung_statement_bytes())
            .rows();
        assert!(matches!(result, Err(ConvertError::MissingBank)));
    }

    #[test]
    fn test_rows_missing_data_and_filepath() {
        let result = ConversionBuilder::new().bank(Bank::Samsung).rows();
        assert!(matches!(result, Err(ConvertError::MissingDataAndFilepath)));
    }

    #[test]
    fn test_export_unsupported_bank_before_any_io() {
        let dir = tempfile::tempdir().unwrap();
        let export_dir = dir.path().join("export");

        let result = ConversionBuilder::new()
            .bank_id("woori")
            .data(&samsung_statement_bytes())
            .export_dir(export_dir.clone())
            .export();

        assert!(matches!(result, Err(ConvertError::UnsupportedBank(_))));
        assert!(!export_dir.exists());
    }

    #[test]
    fn test_export_writes_ledger_workbook() {
        let dir = tempfile::tempdir().unwrap();

        let conversion = ConversionBuilder::new()
            .bank_id("samsung")
            .data(&samsung_statement_bytes())
            .export_dir(dir.path())
            .export()
            .unwrap();

        assert_eq!(conversion.bank, Bank::Samsung);
        assert_eq!(conversion.row_count(), 1);
        assert_eq!(conversion.preview().len(), 1);
        assert!(conversion.output_file_name.starts_with("samsung_converted_"));
        assert!(conversion.output_file_name.ends_with(".xlsx"));

        let written = std::fs::read(&conversion.output_path).unwrap();
        let sheet = read_first_sheet(&written).unwrap();
        assert_eq!(sheet.len(), 3);
        assert_eq!(sheet[0][0], Cell::Text("2026년도 거래상세내역".to_string()));
        assert_eq!(sheet[1][0], Cell::Text("수입/지출".to_string()));
        assert_eq!(sheet[2][4], Cell::Text("스타벅스".to_string()));
    }

    #[test]
    fn test_export_recognition_failure_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();

        let result = ConversionBuilder::new()
            .bank(Bank::Hyundai)
            .data(&samsung_statement_bytes())
            .export_dir(dir.path())
            .export();

        assert!(matches!(result, Err(ConvertError::HeaderRowNotFound(_))));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_export_reads_statement_from_filepath() {
        let dir = tempfile::tempdir().unwrap();
        let input_path = dir.path().join("statement.xlsx");
        std::fs::write(&input_path, samsung_statement_bytes()).unwrap();

        let rows = ConversionBuilder::new()
            .bank(Bank::Samsung)
            .filepath(input_path.as_path())
            .rows()
            .unwrap();

        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_ensure_fresh_rejects_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("samsung_converted_20260213_143005.xlsx");
        std::fs::write(&path, b"taken").unwrap();

        let result = ensure_fresh(&path);
        assert!(matches!(result, Err(ConvertError::ExportFileExists(_))));
        assert!(ensure_fresh(&dir.path().join("fresh.xlsx")).is_ok());
    }

    #[test]
    fn test_preview_truncates_to_five() {
        let rows: Vec<LedgerRow> = (1..=7)
            .map(|day| {
                LedgerRow::new(
                    "현대카드M".to_string(),
                    &crate::types::ParsedDate { year: 2026, month: 1, day },
                    "가맹점".to_string(),
                    Decimal::from(1_000),
                )
            })
            .collect();

        let conversion = Conversion {
            bank: Bank::Hyundai,
            rows,
            output_file_name: "hyundai_converted_20260101_000000.xlsx".to_string(),
            output_path: PathBuf::from("export/hyundai_converted_20260101_000000.xlsx"),
        };

        assert_eq!(conversion.row_count(), 7);
        assert_eq!(conversion.preview().len(), 5);
        assert_eq!(conversion.preview()[4].date, "2026-01-05");
    }
}
