//! paycycle - payday-cycle cash balance forecaster
//!
//! This library projects a cash balance forward across several pay cycles by
//! combining a starting balance with recurring paydays and bills read from
//! two calendar feeds.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, calendar events)
//! - `calendar`: The event source abstraction and the JSON-file source
//! - `parse`: Title parsing (payday and bill patterns)
//! - `extract`: Payday and bill extractors
//! - `projection`: The cycle projector (the core algorithm)
//! - `display`: Terminal rendering
//!
//! Data flows one way: calendar -> extractors -> projector -> display. The
//! projector is pure given its inputs.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use paycycle::models::{Money, PaydayEvent};
//! use paycycle::projection::{project, ProjectionMode};
//!
//! let paydays = vec![PaydayEvent {
//!     date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
//!     amount: Money::from_cents(100_000),
//! }];
//! let today = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
//! let projection = project(
//!     Money::from_cents(50_000),
//!     1,
//!     today,
//!     &paydays,
//!     &[],
//!     ProjectionMode::Detailed,
//! )?;
//! assert_eq!(projection.cycles.len(), 1);
//! # Ok::<(), paycycle::error::ForecastError>(())
//! ```

pub mod calendar;
pub mod config;
pub mod display;
pub mod error;
pub mod extract;
pub mod models;
pub mod parse;
pub mod projection;

pub use error::ForecastError;
