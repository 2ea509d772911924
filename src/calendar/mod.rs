//! Event source abstraction
//!
//! The extractors only ever talk to an [`EventSource`], so the projection
//! pipeline can be exercised with synthetic events and the real backing
//! store swapped freely. [`JsonFileSource`] is the bundled implementation,
//! reading calendars from a local JSON document.

pub mod json_source;

pub use json_source::JsonFileSource;

use chrono::NaiveDate;

use crate::error::ForecastResult;
use crate::models::RawEvent;

/// A read-only source of calendar events
pub trait EventSource {
    /// Fetch events for one calendar within `[start, end_exclusive)`.
    ///
    /// Events without an all-day date are returned as-is; callers decide
    /// whether to skip them. Fails with `ForecastError::Retrieval` when the
    /// backing store is unreachable or the calendar id is unknown.
    fn fetch_events(
        &self,
        calendar_id: &str,
        start: NaiveDate,
        end_exclusive: NaiveDate,
    ) -> ForecastResult<Vec<RawEvent>>;
}
