use chrono::{Datelike, NaiveDate};

use super::{check_month, Calendar, CalendarDate};
use crate::{InstalmentError, InstalmentResult};

/// Proleptic Gregorian calendar, backed by chrono.
#[derive(Debug, Clone, Copy, Default)]
pub struct GregorianCalendar;

impl Calendar for GregorianCalendar {
    fn name(&self) -> &'static str {
        "gregorian"
    }

    fn to_calendar_date(&self, date: NaiveDate) -> InstalmentResult<CalendarDate> {
        Ok(CalendarDate::new(date.year(), date.month(), date.day()))
    }

    fn days_in_month(&self, year: i32, month: u32) -> InstalmentResult<u32> {
        check_month(month)?;
        let first = first_of_month(year, month)?;
        let next = if month == 12 {
            first_of_month(year + 1, 1)?
        } else {
            first_of_month(year, month + 1)?
        };
        Ok((next - first).num_days() as u32)
    }
}

fn first_of_month(year: i32, month: u32) -> InstalmentResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| InstalmentError::DateError(format!("{year}-{month:02} is out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_lengths() {
        let cal = GregorianCalendar;
        assert_eq!(cal.days_in_month(2023, 1).unwrap(), 31);
        assert_eq!(cal.days_in_month(2023, 4).unwrap(), 30);
        assert_eq!(cal.days_in_month(2023, 12).unwrap(), 31);
    }

    #[test]
    fn test_february_leap_rules() {
        let cal = GregorianCalendar;
        assert_eq!(cal.days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(cal.days_in_month(2023, 2).unwrap(), 28);
        assert_eq!(cal.days_in_month(1900, 2).unwrap(), 28);
        assert_eq!(cal.days_in_month(2000, 2).unwrap(), 29);
    }

    #[test]
    fn test_to_calendar_date_is_passthrough() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
        let cd = GregorianCalendar.to_calendar_date(date).unwrap();
        assert_eq!(cd, CalendarDate::new(2026, 10, 14));
    }

    #[test]
    fn test_month_zero_rejected() {
        assert!(GregorianCalendar.days_in_month(2024, 0).is_err());
    }
}
