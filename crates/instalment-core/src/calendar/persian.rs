//! Solar Hijri (Persian) calendar.
//!
//! Leap years follow the 33-year break table that tracks the astronomical
//! vernal equinox. The table covers years from -61 up to (not including)
//! 3178; anything outside is reported as a [`InstalmentError::DateError`].
//!
//! Months 1-6 have 31 days, months 7-11 have 30, and the last month (Esfand)
//! has 29 days, or 30 in a leap year.

use chrono::{Datelike, NaiveDate};

use super::{check_month, Calendar, CalendarDate};
use crate::{InstalmentError, InstalmentResult};

/// Years in which the 33-year leap cycle restarts with a different phase.
const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

/// Offset between the Persian and Gregorian year numbers at Nowruz.
const YEAR_OFFSET: i32 = 621;

/// Days in the first half of the year (six 31-day months).
const FIRST_HALF_DAYS: i64 = 186;

#[derive(Debug, Clone, Copy, Default)]
pub struct PersianCalendar;

/// Position of a Persian year in its leap cycle.
struct YearInfo {
    /// 0 for a leap year, otherwise years since the last leap year.
    leap: i32,
    /// Gregorian year in which this Persian year begins.
    gregorian_year: i32,
    /// Day of March (Gregorian) on which Farvardin 1 falls.
    march_day: u32,
}

impl PersianCalendar {
    pub fn is_leap_year(&self, year: i32) -> InstalmentResult<bool> {
        Ok(year_info(year)?.leap == 0)
    }

    fn nowruz(&self, info: &YearInfo) -> InstalmentResult<NaiveDate> {
        NaiveDate::from_ymd_opt(info.gregorian_year, 3, info.march_day).ok_or_else(|| {
            InstalmentError::DateError(format!(
                "Nowruz of Gregorian year {} is not representable",
                info.gregorian_year
            ))
        })
    }
}

impl Calendar for PersianCalendar {
    fn name(&self) -> &'static str {
        "persian"
    }

    fn to_calendar_date(&self, date: NaiveDate) -> InstalmentResult<CalendarDate> {
        let mut year = date.year() - YEAR_OFFSET;
        let info = year_info(year)?;
        let mut k = (date - self.nowruz(&info)?).num_days();

        if k >= 0 {
            if k < FIRST_HALF_DAYS {
                return Ok(CalendarDate::new(year, (1 + k / 31) as u32, (k % 31 + 1) as u32));
            }
            k -= FIRST_HALF_DAYS;
        } else {
            // Before Nowruz: the tail of the previous Persian year.
            year -= 1;
            k += 179;
            if info.leap == 1 {
                k += 1;
            }
        }

        Ok(CalendarDate::new(year, (7 + k / 30) as u32, (k % 30 + 1) as u32))
    }

    fn days_in_month(&self, year: i32, month: u32) -> InstalmentResult<u32> {
        check_month(month)?;
        let info = year_info(year)?;
        let days = match month {
            1..=6 => 31,
            7..=11 => 30,
            _ if info.leap == 0 => 30,
            _ => 29,
        };
        Ok(days)
    }
}

fn year_info(year: i32) -> InstalmentResult<YearInfo> {
    let last = BREAKS[BREAKS.len() - 1];
    if year < BREAKS[0] || year >= last {
        return Err(InstalmentError::DateError(format!(
            "Persian year {year} is outside the supported range [{}, {last})",
            BREAKS[0]
        )));
    }

    let gregorian_year = year + YEAR_OFFSET;
    let mut leap_persian = -14;
    let mut previous = BREAKS[0];
    let mut jump = 0;

    for &brk in &BREAKS[1..] {
        jump = brk - previous;
        if year < brk {
            break;
        }
        leap_persian += jump / 33 * 8 + (jump % 33) / 4;
        previous = brk;
    }

    let mut n = year - previous;
    leap_persian += n / 33 * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_persian += 1;
    }

    let leap_gregorian =
        gregorian_year / 4 - (gregorian_year / 100 + 1) * 3 / 4 - 150;
    let march_day = 20 + leap_persian - leap_gregorian;

    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    let mut leap = ((n + 1) % 33 - 1) % 4;
    if leap == -1 {
        leap = 4;
    }

    Ok(YearInfo {
        leap,
        gregorian_year,
        march_day: march_day as u32,
    })
}
