use crate::sheet::Cell;

/// The column vocabulary of one bank's statement layout.
///
/// `date`, `card` and `amount` form the header signature: a row is the
/// header exactly when all three labels appear in it, in any position.
/// `merchant` and `fallback_amount` are resolved opportunistically and may
/// be absent without failing recognition.
#[derive(Debug, Clone, Copy)]
pub struct HeaderLayout {
    pub date: &'static str,
    pub card: &'static str,
    pub merchant: &'static str,
    pub amount: &'static str,
    pub fallback_amount: &'static str,
}

/// Zero-based column indices resolved from a matched header row. `None`
/// means the label was absent and that column contributes no candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnMap {
    pub date: Option<usize>,
    pub card: Option<usize>,
    pub merchant: Option<usize>,
    pub amount: Option<usize>,
    pub fallback_amount: Option<usize>,
}

impl HeaderLayout {
    /// True when the row carries the full header signature.
    pub fn matches(&self, row: &[Cell]) -> bool {
        let cells: Vec<String> = row.iter().map(|c| c.to_text().trim().to_string()).collect();
        [self.date, self.card, self.amount]
            .iter()
            .all(|label| cells.iter().any(|cell| cell == label))
    }

    /// Resolves each labelled column's position within the header row.
    pub fn resolve(&self, row: &[Cell]) -> ColumnMap {
        let cells: Vec<String> = row.iter().map(|c| c.to_text().trim().to_string()).collect();
        let position = |label: &str| cells.iter().position(|cell| cell == label);

        ColumnMap {
            date: position(self.date),
            card: position(self.card),
            merchant: position(self.merchant),
            amount: position(self.amount),
            fallback_amount: position(self.fallback_amount),
        }
    }
}
