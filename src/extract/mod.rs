//! Event extraction layer
//!
//! Turns raw calendar events into typed payday and bill records. The two
//! extractors carry different failure contracts: payday retrieval errors
//! are swallowed with a warning, bill retrieval errors propagate.

pub mod bills;
pub mod payday;

pub use bills::BillExtractor;
pub use payday::PaydayExtractor;
