use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::Parser;

use paycycle::calendar::JsonFileSource;
use paycycle::config::{ForecastPaths, Settings};
use paycycle::display;
use paycycle::error::{ForecastError, ForecastResult};
use paycycle::extract::{BillExtractor, PaydayExtractor};
use paycycle::models::Money;
use paycycle::projection::{project, ProjectionMode};

const DEFAULT_BALANCE_CENTS: i64 = 50000;
const DEFAULT_CYCLES: usize = 3;

#[derive(Parser)]
#[command(
    name = "paycycle",
    version,
    about = "Forecast your cash balance across payday cycles",
    long_about = "paycycle reads payday and bill events from two calendar feeds \
                  and projects your running balance forward, one payday cycle at \
                  a time. With no arguments it assumes a $500.00 balance and 3 cycles.",
    after_help = "Examples:\n  \
                  paycycle\n  \
                  paycycle 1500.00 2\n  \
                  paycycle --summary 1500.00 2"
)]
struct Cli {
    /// Print only each cycle's pre-payday balance
    #[arg(long)]
    summary: bool,

    /// Path to the JSON events document (overrides the config file)
    #[arg(long, value_name = "PATH", env = "PAYCYCLE_EVENTS_FILE")]
    events: Option<PathBuf>,

    /// Current balance, e.g. 1500.00
    #[arg(value_name = "BALANCE", requires = "cycles")]
    balance: Option<String>,

    /// Number of payday cycles to project (positive integer)
    #[arg(value_name = "CYCLES")]
    cycles: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (balance, cycles) = match (&cli.balance, &cli.cycles) {
        (Some(balance), Some(cycles)) => (parse_balance(balance)?, parse_cycles(cycles)?),
        _ => {
            let balance = Money::from_cents(DEFAULT_BALANCE_CENTS);
            display::print_defaults_notice(balance, DEFAULT_CYCLES);
            (balance, DEFAULT_CYCLES)
        }
    };

    let paths = ForecastPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let events_file = match cli.events {
        Some(path) => path,
        None => settings.resolve_events_file()?,
    };
    let default_calendar_id = settings.resolve_default_calendar_id()?;
    let bills_calendar_id = settings.resolve_bills_calendar_id()?;

    let source = JsonFileSource::open(&events_file)?;
    let today = Local::now().date_naive();
    let mode = if cli.summary {
        ProjectionMode::Summary
    } else {
        ProjectionMode::Detailed
    };

    // Income is best-effort: a payday retrieval failure was already reported
    // as a warning and yields an empty list here.
    let paydays = PaydayExtractor::new(&source, default_calendar_id).fetch(today, cycles);
    let Some(final_payday) = paydays.last() else {
        println!("{}", ForecastError::NoPaydayData);
        return Ok(());
    };

    // Expenses are strict: a bill retrieval failure aborts the run.
    let bills = BillExtractor::new(&source, bills_calendar_id).fetch(today, final_payday.date)?;

    let projection = project(balance, cycles, today, &paydays, &bills, mode)?;
    display::render(&projection, &mut std::io::stdout().lock())?;
    Ok(())
}

fn parse_balance(s: &str) -> ForecastResult<Money> {
    Money::parse(s).map_err(|_| {
        ForecastError::Validation(format!(
            "Invalid current balance amount: '{}'\nUsage: paycycle [--summary] [BALANCE CYCLES]",
            s
        ))
    })
}

fn parse_cycles(s: &str) -> ForecastResult<usize> {
    s.parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| {
            ForecastError::Validation(format!(
                "Invalid number of payday cycles: '{}'\nUsage: paycycle [--summary] [BALANCE CYCLES]",
                s
            ))
        })
}
