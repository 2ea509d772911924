//! Terminal rendering for projections
//!
//! Detailed mode prints a per-cycle ledger with fixed-width columns;
//! summary mode prints one `date: balance` line per cycle with the
//! pre-payday balance in plain decimal form.

use std::io::Write;

use crate::error::ForecastResult;
use crate::models::Money;
use crate::projection::{CycleTrace, Projection, ProjectionMode};

/// Render a projection in its own mode
pub fn render(projection: &Projection, out: &mut impl Write) -> ForecastResult<()> {
    match projection.mode {
        ProjectionMode::Detailed => render_detailed(projection, out),
        ProjectionMode::Summary => render_summary(projection, out),
    }
}

fn render_detailed(projection: &Projection, out: &mut impl Write) -> ForecastResult<()> {
    writeln!(
        out,
        "Budget calculation starting from {}",
        projection.today.format("%Y-%m-%d")
    )?;
    writeln!(out, "Current balance: {}", projection.starting_balance)?;
    writeln!(
        out,
        "Calculating for {} payday cycles",
        projection.requested_cycles
    )?;
    writeln!(out)?;

    for (i, cycle) in projection.cycles.iter().enumerate() {
        render_cycle(i, cycle, out)?;
    }

    render_shortfall_warning(projection, out)?;
    Ok(())
}

fn render_cycle(index: usize, cycle: &CycleTrace, out: &mut impl Write) -> ForecastResult<()> {
    writeln!(out, "=== Payday Cycle {} ===", index + 1)?;
    writeln!(
        out,
        "Period: {} to {}",
        cycle.start.format("%Y-%m-%d"),
        cycle.end.format("%Y-%m-%d")
    )?;
    writeln!(
        out,
        "Payday: {} (+{})",
        cycle.end.format("%Y-%m-%d"),
        cycle.payday_amount
    )?;
    writeln!(out)?;

    writeln!(
        out,
        "{:<12} {:<30} {:>12} {:>12}",
        "Date", "Description", "Amount", "Balance"
    )?;
    writeln!(
        out,
        "{} {} {} {}",
        "-".repeat(12),
        "-".repeat(30),
        "-".repeat(12),
        "-".repeat(12)
    )?;

    for line in &cycle.bills {
        writeln!(
            out,
            "{:<12} {:<30} {:>12} {:>12}",
            line.date.format("%Y-%m-%d").to_string(),
            line.name,
            (-line.amount).to_string(),
            line.balance_after.to_string()
        )?;
    }

    writeln!(
        out,
        "Balance on {} (before payday): {}",
        cycle.end.format("%Y-%m-%d"),
        cycle.pre_payday_balance
    )?;
    writeln!(
        out,
        "After payday (+{}): {}",
        cycle.payday_amount, cycle.post_payday_balance
    )?;
    writeln!(out)?;
    Ok(())
}

fn render_summary(projection: &Projection, out: &mut impl Write) -> ForecastResult<()> {
    for cycle in &projection.cycles {
        writeln!(
            out,
            "{}: {}",
            cycle.end.format("%Y-%m-%d"),
            cycle.pre_payday_balance.format_plain()
        )?;
    }
    render_shortfall_warning(projection, out)?;
    Ok(())
}

fn render_shortfall_warning(projection: &Projection, out: &mut impl Write) -> ForecastResult<()> {
    if projection.is_short() {
        writeln!(
            out,
            "Warning: Not enough payday events found for {} cycles.",
            projection.requested_cycles
        )?;
    }
    Ok(())
}

/// Announce the default balance and cycle count when no arguments were given
pub fn print_defaults_notice(balance: Money, cycles: usize) {
    println!(
        "Using default values: current balance = {}, payday cycles = {}",
        balance, cycles
    );
}
