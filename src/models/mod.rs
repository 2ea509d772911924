//! Core data models for paycycle

pub mod event;
pub mod money;

pub use event::{BillEvent, PaydayEvent, RawEvent};
pub use money::{Money, MoneyParseError};
