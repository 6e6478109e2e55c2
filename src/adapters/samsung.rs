use super::layout::HeaderLayout;
use super::traits::BankAdapter;
use crate::converter::Bank;
use crate::fields::parse_compact_date;
use crate::labels::{self, samsung};
use crate::types::ParsedDate;

/// Samsung card statements: compact `YYYYMMDD` dates and a masked card
/// number column that is reduced to its digits behind the brand label.
pub struct SamsungAdapter;

impl BankAdapter for SamsungAdapter {
    const BANK: Bank = Bank::Samsung;

    const LAYOUT: HeaderLayout = HeaderLayout {
        date: samsung::HEADER_DATE,
        card: samsung::HEADER_CARD,
        merchant: samsung::HEADER_MERCHANT,
        amount: samsung::HEADER_PAYABLE,
        fallback_amount: labels::FALLBACK_AMOUNT_HEADER,
    };

    const MERCHANT_AMOUNT_ECHO: bool = false;

    fn parse_date(text: &str) -> Option<ParsedDate> {
        parse_compact_date(text)
    }

    fn normalize_card(raw: &str) -> String {
        let digits: String = raw.trim().chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            samsung::CARD_LABEL.to_string()
        } else {
            format!("{} {}", samsung::CARD_LABEL, digits)
        }
    }
}
