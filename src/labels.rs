//! Display-string tables shared by every adapter and the ledger assembler.
//!
//! The output schema is a Korean household ledger (가계부); all labels are
//! fixed at compile time and never mutated at runtime.

/// Sheet name of the converted workbook.
pub const LEDGER_SHEET: &str = "가계부";

/// Appended to the title year in row 0 of the output sheet.
pub const LEDGER_TITLE_SUFFIX: &str = "년도 거래상세내역";

/// Fixed 9-column header row of the output sheet.
pub const LEDGER_HEADERS: [&str; 9] = [
    "수입/지출",
    "입출금수단",
    "거래 월",
    "거래일시",
    "가맹점명/내용",
    "금액",
    "카테고리1",
    "카테고리2",
    "비고",
];

/// Ledger entry-type label carried by every converted row.
pub const ENTRY_TYPE_CARD: &str = "신용카드";

/// Suffix of the display month, e.g. `"2월"`.
pub const MONTH_SUFFIX: &str = "월";

/// Prefix of the note column; the ISO date and a closing paren follow.
pub const NOTE_PREFIX: &str = "실제 거래일(";

/// Generic amount column present in both supported layouts, used as the
/// last-resort amount candidate. Not part of any header signature.
pub const FALLBACK_AMOUNT_HEADER: &str = "이용금액";

pub mod hyundai {
    /// Owner prefix stripped from the card label, e.g. `"본인 현대카드M"`.
    pub const CARD_OWNER_PREFIX: &str = "본인 ";

    pub const HEADER_DATE: &str = "이용일";
    pub const HEADER_CARD: &str = "이용카드";
    pub const HEADER_MERCHANT: &str = "이용가맹점";
    pub const HEADER_PRINCIPAL: &str = "결제원금";
}

pub mod samsung {
    /// Card-brand label shown when the card cell has no digits, or as the
    /// prefix of `"삼성카드 1234"` when it does.
    pub const CARD_LABEL: &str = "삼성카드";

    pub const HEADER_DATE: &str = "이용일자";
    pub const HEADER_CARD: &str = "카드번호";
    pub const HEADER_MERCHANT: &str = "사용처/가맹점";
    pub const HEADER_PAYABLE: &str = "결제예정금액";
}
