pub mod engine;
pub mod rounding;
pub mod schedule;

pub use engine::{
    annuity_payment, compute_installment_amount, compute_profit_share, compute_remaining_balance,
    period_rate, periods_per_year,
};
pub use rounding::{apply_rounding, RoundingPolicy};
pub use schedule::{build_schedule, validate_request, ScheduleBuilder};
