use chrono::NaiveDate;
use clap::Args;
use serde_json::{json, Value};

use instalment_core::calendar::{Calendar, CalendarKind};

use super::CalendarArg;

/// Arguments for calendar conversion
#[derive(Args)]
pub struct CalendarDateArgs {
    /// Gregorian date, YYYY-MM-DD
    pub date: NaiveDate,

    /// Target calendar
    #[arg(long, value_enum, default_value = "persian")]
    pub calendar: CalendarArg,
}

pub fn run_calendar_date(args: CalendarDateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let calendar = CalendarKind::from(args.calendar).calendar();
    let date = calendar.to_calendar_date(args.date)?;
    let days = calendar.days_in_month(date.year, date.month)?;

    Ok(json!({
        "result": {
            "date": date.to_string(),
            "calendar": calendar.name(),
            "gregorian": args.date.to_string(),
            "year": date.year,
            "month": date.month,
            "day": date.day,
            "days_in_month": days,
        }
    }))
}
