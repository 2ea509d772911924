//! Cycle projection
//!
//! The heart of the forecaster. The timeline is partitioned into
//! payday-bounded cycles: the first cycle runs from today through the first
//! payday, every later cycle from the day after the previous payday through
//! the next one. Bills inside a cycle are deducted in date order, except a
//! bill dated exactly on the payday, which is deliberately excluded from
//! the pre-payday deduction.
//!
//! Each cycle's opening balance is the previous cycle's closing balance, so
//! the projection is a strictly sequential fold over the payday list. Given
//! the same inputs it always produces the same trace.

use chrono::{Days, NaiveDate};

use crate::error::{ForecastError, ForecastResult};
use crate::models::{BillEvent, Money, PaydayEvent};

/// Output variant: full bill-by-bill ledger or pre-payday balances only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionMode {
    Detailed,
    Summary,
}

/// One deducted bill in the detailed ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillLine {
    pub date: NaiveDate,
    pub name: String,
    pub amount: Money,
    /// Running balance immediately after this deduction
    pub balance_after: Money,
}

/// One projected payday cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleTrace {
    /// First day of the cycle (today for the first cycle)
    pub start: NaiveDate,
    /// The payday date; last day of the cycle, inclusive
    pub end: NaiveDate,
    pub payday_amount: Money,
    /// Deducted bills in date order; empty in summary mode
    pub bills: Vec<BillLine>,
    /// Balance on payday, before the payday income lands
    pub pre_payday_balance: Money,
    /// Balance after the payday income lands
    pub post_payday_balance: Money,
}

/// A completed balance projection across one or more cycles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub starting_balance: Money,
    pub requested_cycles: usize,
    pub today: NaiveDate,
    pub mode: ProjectionMode,
    pub cycles: Vec<CycleTrace>,
}

impl Projection {
    /// Whether fewer cycles were produced than requested
    pub fn is_short(&self) -> bool {
        self.cycles.len() < self.requested_cycles
    }
}

/// Project the running balance across payday cycles.
///
/// `paydays` must be sorted ascending (the extractor guarantees this);
/// `bills` likewise. With no payday data at all there is nothing to anchor
/// the cycles on, and `ForecastError::NoPaydayData` is returned. When fewer
/// paydays exist than cycles requested, the projection covers what exists
/// and reports itself short via [`Projection::is_short`].
pub fn project(
    starting_balance: Money,
    requested_cycles: usize,
    today: NaiveDate,
    paydays: &[PaydayEvent],
    bills: &[BillEvent],
    mode: ProjectionMode,
) -> ForecastResult<Projection> {
    if paydays.is_empty() {
        return Err(ForecastError::NoPaydayData);
    }

    let actual_cycles = requested_cycles.min(paydays.len());
    let mut balance = starting_balance;
    let mut cycles = Vec::with_capacity(actual_cycles);

    for (i, payday) in paydays.iter().take(actual_cycles).enumerate() {
        let start = if i == 0 {
            today
        } else {
            paydays[i - 1].date + Days::new(1)
        };
        let end = payday.date;

        // Bills due in this cycle, in date order. A bill dated exactly on
        // payday is not part of the pre-payday deduction.
        let mut lines = Vec::new();
        for bill in bills
            .iter()
            .filter(|b| b.date >= start && b.date <= end && b.date != end)
        {
            balance -= bill.amount;
            if mode == ProjectionMode::Detailed {
                lines.push(BillLine {
                    date: bill.date,
                    name: bill.name.clone(),
                    amount: bill.amount,
                    balance_after: balance,
                });
            }
        }

        let pre_payday_balance = balance;
        balance += payday.amount;

        cycles.push(CycleTrace {
            start,
            end,
            payday_amount: payday.amount,
            bills: lines,
            pre_payday_balance,
            post_payday_balance: balance,
        });
    }

    Ok(Projection {
        starting_balance,
        requested_cycles,
        today,
        mode,
        cycles,
    })
}
