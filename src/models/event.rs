//! Calendar event models
//!
//! `RawEvent` is what an event source hands back; `PaydayEvent` and
//! `BillEvent` are the typed records the extractors produce from raw
//! titles. Only the calendar date of an event participates in any
//! comparison; there is no time-of-day component.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;

/// An event as returned by an event source, before title parsing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEvent {
    /// Display title, e.g. "Payday ($1000.00)" or "Rent ($400.00)"
    pub title: String,

    /// The all-day date, or None for timed events (which are skipped)
    #[serde(default, rename = "date")]
    pub all_day_date: Option<NaiveDate>,
}

impl RawEvent {
    /// Create an all-day event
    pub fn all_day(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            all_day_date: Some(date),
        }
    }

    /// Create a timed event (no all-day date)
    pub fn timed(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            all_day_date: None,
        }
    }
}

/// One income event: a payday with its expected amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaydayEvent {
    pub date: NaiveDate,
    pub amount: Money,
}

/// One scheduled expense: a bill with its name and amount
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillEvent {
    pub date: NaiveDate,
    pub name: String,
    pub amount: Money,
}
