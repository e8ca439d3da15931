pub mod calendar;
pub mod facility;

use clap::ValueEnum;
use instalment_core::calendar::CalendarKind;

/// Calendar selection on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CalendarArg {
    Gregorian,
    Persian,
}

impl From<CalendarArg> for CalendarKind {
    fn from(arg: CalendarArg) -> Self {
        match arg {
            CalendarArg::Gregorian => CalendarKind::Gregorian,
            CalendarArg::Persian => CalendarKind::Persian,
        }
    }
}
