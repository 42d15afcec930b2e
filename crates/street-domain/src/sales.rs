//! Sales ledger rows and the trailing-window summary built from them.

use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

/// Length of the trailing summary window, in days. The window start is inclusive.
pub const WINDOW_DAYS: u64 = 180;

/// First date (inclusive) of the summary window ending at `today`.
pub fn window_start(today: NaiveDate) -> NaiveDate {
    today - Days::new(WINDOW_DAYS)
}

/// A ledger row as handed back by the store.
///
/// Loosely typed on purpose: a store may return a null amount or a date string that does
/// not parse, and one bad row must not abort the whole summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaleRow {
    pub amount: Option<Decimal>,
    pub entry_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryEntry {
    pub date: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesSummary {
    #[serde(with = "rust_decimal::serde::float")]
    pub month_total: Decimal,
    pub entries: Vec<SummaryEntry>,
}

/// Reduce window rows (already ordered ascending by date) into a summary.
///
/// Missing amounts count as zero. A missing date is rendered as `today`. A date that does
/// not parse is counted toward the current month.
pub fn summarize_rows<I>(rows: I, today: NaiveDate) -> SalesSummary
where
    I: IntoIterator<Item = SaleRow>,
{
    let mut month_total = Decimal::ZERO;
    let mut entries = Vec::new();

    for row in rows {
        let amount = row.amount.unwrap_or(Decimal::ZERO);
        let date = row
            .entry_date
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| today.to_string());

        let in_current_month = match date.parse::<NaiveDate>() {
            Ok(d) => d.year() == today.year() && d.month() == today.month(),
            Err(_) => true,
        };
        if in_current_month {
            month_total += amount;
        }

        entries.push(SummaryEntry { date, amount });
    }

    SalesSummary {
        month_total,
        entries,
    }
}
