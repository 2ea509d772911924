//! Bill extraction
//!
//! Pulls bill events from the bills calendar over a closed date range.
//! Unlike payday extraction, a retrieval failure here propagates to the
//! caller: income is best-effort, expenses are strict.

use chrono::{Days, NaiveDate};

use crate::calendar::EventSource;
use crate::error::ForecastResult;
use crate::models::BillEvent;
use crate::parse::TitleParser;

/// Extracts bill events from the bills calendar
pub struct BillExtractor<'a> {
    source: &'a dyn EventSource,
    calendar_id: String,
    parser: TitleParser,
}

impl<'a> BillExtractor<'a> {
    pub fn new(source: &'a dyn EventSource, calendar_id: impl Into<String>) -> Self {
        Self {
            source,
            calendar_id: calendar_id.into(),
            parser: TitleParser::new(),
        }
    }

    /// Fetch all bill events with `start <= date <= end`.
    ///
    /// The source is queried with one extra day so that `end` is inclusive.
    /// Events without an all-day date and non-bill titles are skipped; the
    /// result is sorted ascending by date.
    pub fn fetch(&self, start: NaiveDate, end: NaiveDate) -> ForecastResult<Vec<BillEvent>> {
        let raw = self
            .source
            .fetch_events(&self.calendar_id, start, end + Days::new(1))?;

        let mut bills: Vec<BillEvent> = raw
            .into_iter()
            .filter_map(|event| {
                let date = event.all_day_date?;
                let (name, amount) = self.parser.parse_bill(&event.title)?;
                Some(BillEvent { date, name, amount })
            })
            .collect();

        bills.sort_by_key(|b| b.date);
        Ok(bills)
    }
}
