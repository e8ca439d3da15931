//! Calendar adapters.
//!
//! A [`Calendar`] converts Gregorian dates into its own `(year, month, day)`
//! representation and reports month lengths. The schedule builder only ever
//! talks to this trait, so any calendar with twelve months per year can be
//! plugged in.

pub mod gregorian;
#[cfg(feature = "persian")]
pub mod persian;

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{InstalmentError, InstalmentResult};

pub use gregorian::GregorianCalendar;
#[cfg(feature = "persian")]
pub use persian::PersianCalendar;

pub const MONTHS_PER_YEAR: u32 = 12;

/// A date expressed in some calendar system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

/// `y/m/d`, no zero padding.
impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.year, self.month, self.day)
    }
}

pub trait Calendar: Send + Sync {
    fn name(&self) -> &'static str;

    /// Convert a Gregorian date into this calendar's components.
    fn to_calendar_date(&self, date: NaiveDate) -> InstalmentResult<CalendarDate>;

    /// Number of days in `month` of `year`.
    fn days_in_month(&self, year: i32, month: u32) -> InstalmentResult<u32>;

    /// Advance `date` by `months` calendar months.
    ///
    /// The day is clamped to the length of the target month, so the 31st
    /// of a 31-day month lands on the last day of a shorter one.
    fn add_months(&self, date: CalendarDate, months: u32) -> InstalmentResult<CalendarDate> {
        check_month(date.month)?;
        let offset = i64::from(date.month - 1) + i64::from(months);
        let years = offset / i64::from(MONTHS_PER_YEAR);
        let year = i32::try_from(i64::from(date.year) + years).map_err(|_| {
            InstalmentError::DateError(format!(
                "{date} + {months} months is outside the representable year range"
            ))
        })?;
        let month = (offset % i64::from(MONTHS_PER_YEAR)) as u32 + 1;
        let day = date.day.min(self.days_in_month(year, month)?);
        Ok(CalendarDate { year, month, day })
    }
}

pub(crate) fn check_month(month: u32) -> InstalmentResult<()> {
    if !(1..=MONTHS_PER_YEAR).contains(&month) {
        return Err(InstalmentError::InvalidInput {
            field: "month".into(),
            reason: format!("Month must be between 1 and 12, got {month}"),
        });
    }
    Ok(())
}

/// Selectable calendar implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarKind {
    Gregorian,
    #[cfg(feature = "persian")]
    Persian,
}

/// Persian when compiled in, Gregorian otherwise.
impl Default for CalendarKind {
    fn default() -> Self {
        #[cfg(feature = "persian")]
        return CalendarKind::Persian;
        #[cfg(not(feature = "persian"))]
        return CalendarKind::Gregorian;
    }
}

impl CalendarKind {
    pub fn calendar(self) -> Box<dyn Calendar> {
        match self {
            CalendarKind::Gregorian => Box::new(GregorianCalendar),
            #[cfg(feature = "persian")]
            CalendarKind::Persian => Box::new(PersianCalendar),
        }
    }
}
