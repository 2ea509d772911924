//! JSON-file event source
//!
//! Reads a single JSON document mapping calendar ids to event lists:
//!
//! ```json
//! {
//!   "calendars": {
//!     "primary": [
//!       { "title": "Payday ($1000.00)", "date": "2024-01-15" }
//!     ],
//!     "bills": [
//!       { "title": "Rent ($400.00)", "date": "2024-01-10" }
//!     ]
//!   }
//! }
//! ```
//!
//! Events carrying a "date" are all-day events; entries without one are
//! timed events and survive unfiltered (the extractors skip them).

use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::EventSource;
use crate::error::{ForecastError, ForecastResult};
use crate::models::RawEvent;

#[derive(Debug, Serialize, Deserialize)]
struct EventsDocument {
    #[serde(default)]
    calendars: HashMap<String, Vec<RawEvent>>,
}

/// An [`EventSource`] backed by a local JSON document
#[derive(Debug)]
pub struct JsonFileSource {
    document: EventsDocument,
}

impl JsonFileSource {
    /// Open and parse an events document
    pub fn open(path: &Path) -> ForecastResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ForecastError::Retrieval(format!(
                "Failed to read events file {}: {}",
                path.display(),
                e
            ))
        })?;
        let document: EventsDocument = serde_json::from_str(&contents).map_err(|e| {
            ForecastError::Retrieval(format!(
                "Failed to parse events file {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Self { document })
    }
}

impl EventSource for JsonFileSource {
    fn fetch_events(
        &self,
        calendar_id: &str,
        start: NaiveDate,
        end_exclusive: NaiveDate,
    ) -> ForecastResult<Vec<RawEvent>> {
        let events = self.document.calendars.get(calendar_id).ok_or_else(|| {
            ForecastError::Retrieval(format!("Unknown calendar: {}", calendar_id))
        })?;

        Ok(events
            .iter()
            .filter(|e| match e.all_day_date {
                Some(date) => date >= start && date < end_exclusive,
                None => true,
            })
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fixture() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "calendars": {{
                    "primary": [
                        {{ "title": "Payday ($1000.00)", "date": "2024-01-15" }},
                        {{ "title": "Payday ($1000.00)", "date": "2024-02-15" }},
                        {{ "title": "Dentist" }}
                    ]
                }}
            }}"#
        )
        .unwrap();
        file
    }

    #[test]
    fn test_fetch_filters_by_range() {
        let file = fixture();
        let source = JsonFileSource::open(file.path()).unwrap();

        let events = source
            .fetch_events("primary", date(2024, 1, 1), date(2024, 2, 1))
            .unwrap();
        // One dated event in range plus the undated one
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].all_day_date, Some(date(2024, 1, 15)));
        assert!(events[1].all_day_date.is_none());
    }

    #[test]
    fn test_end_is_exclusive() {
        let file = fixture();
        let source = JsonFileSource::open(file.path()).unwrap();

        let events = source
            .fetch_events("primary", date(2024, 1, 1), date(2024, 1, 15))
            .unwrap();
        assert!(events.iter().all(|e| e.all_day_date.is_none()));
    }

    #[test]
    fn test_unknown_calendar_is_retrieval_error() {
        let file = fixture();
        let source = JsonFileSource::open(file.path()).unwrap();

        let err = source
            .fetch_events("nope", date(2024, 1, 1), date(2024, 2, 1))
            .unwrap_err();
        assert!(err.is_retrieval());
    }

    #[test]
    fn test_missing_file_is_retrieval_error() {
        let err = JsonFileSource::open(Path::new("/nonexistent/events.json")).unwrap_err();
        assert!(err.is_retrieval());
    }
}
