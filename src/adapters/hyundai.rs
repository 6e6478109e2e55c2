use super::layout::HeaderLayout;
use super::traits::BankAdapter;
use crate::converter::Bank;
use crate::fields::parse_korean_date;
use crate::labels::{self, hyundai};
use crate::types::ParsedDate;

/// Hyundai card statements: spelled-out Korean dates, a "본인 " owner
/// prefix on the card column, and merchant cells that echo the amount.
pub struct HyundaiAdapter;

impl BankAdapter for HyundaiAdapter {
    const BANK: Bank = Bank::Hyundai;

    const LAYOUT: HeaderLayout = HeaderLayout {
        date: hyundai::HEADER_DATE,
        card: hyundai::HEADER_CARD,
        merchant: hyundai::HEADER_MERCHANT,
        amount: hyundai::HEADER_PRINCIPAL,
        fallback_amount: labels::FALLBACK_AMOUNT_HEADER,
    };

    const MERCHANT_AMOUNT_ECHO: bool = true;

    fn parse_date(text: &str) -> Option<ParsedDate> {
        parse_korean_date(text)
    }

    fn normalize_card(raw: &str) -> String {
        let card = raw.trim();
        match card.strip_prefix(hyundai::CARD_OWNER_PREFIX) {
            Some(rest) => rest.trim().to_string(),
            None => card.to_string(),
        }
    }
}
