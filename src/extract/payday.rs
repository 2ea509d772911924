//! Payday extraction
//!
//! Pulls payday events from the default calendar and turns them into typed
//! income records. Retrieval failures here are deliberately non-fatal: a
//! projection with partial income data is still worth printing, so errors
//! are downgraded to a warning and whatever was gathered is returned.

use chrono::{Days, NaiveDate};

use crate::calendar::EventSource;
use crate::models::PaydayEvent;
use crate::parse::TitleParser;

/// Days of calendar to request per cycle, assuming bi-weekly pay periods
/// (26 per year), plus a buffer so all needed events are captured.
const DAYS_PER_CYCLE: u64 = 14;
const WINDOW_BUFFER_DAYS: u64 = 30;

/// Extracts payday events from the default calendar
pub struct PaydayExtractor<'a> {
    source: &'a dyn EventSource,
    calendar_id: String,
    parser: TitleParser,
}

impl<'a> PaydayExtractor<'a> {
    pub fn new(source: &'a dyn EventSource, calendar_id: impl Into<String>) -> Self {
        Self {
            source,
            calendar_id: calendar_id.into(),
            parser: TitleParser::new(),
        }
    }

    /// Fetch up to `max_cycles` payday events on or after `today`.
    ///
    /// Events without an all-day date and titles that are not paydays are
    /// skipped. The result is sorted ascending by date and truncated to
    /// `max_cycles` after sorting, so extra matches are discarded no matter
    /// where they appeared in the source order.
    pub fn fetch(&self, today: NaiveDate, max_cycles: usize) -> Vec<PaydayEvent> {
        // Saturate for absurd cycle counts; the window cannot pass the
        // calendar's maximum date.
        let window_days = (max_cycles as u64)
            .saturating_mul(DAYS_PER_CYCLE)
            .saturating_add(WINDOW_BUFFER_DAYS);
        let window_end = today
            .checked_add_days(Days::new(window_days))
            .unwrap_or(NaiveDate::MAX);

        let raw = match self.source.fetch_events(&self.calendar_id, today, window_end) {
            Ok(events) => events,
            Err(e) => {
                eprintln!("Error fetching payday events: {}", e);
                Vec::new()
            }
        };

        let mut paydays: Vec<PaydayEvent> = raw
            .into_iter()
            .filter_map(|event| {
                let date = event.all_day_date?;
                let amount = self.parser.parse_payday(&event.title)?;
                Some(PaydayEvent { date, amount })
            })
            .collect();

        paydays.sort_by_key(|p| p.date);
        paydays.truncate(max_cycles);
        paydays
    }
}
