use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, trace};

use super::engine::{
    compute_installment_amount, compute_profit_share, compute_remaining_balance, overflow,
    MAX_INSTALLMENTS,
};
use super::rounding::RoundingPolicy;
use crate::calendar::Calendar;
use crate::error::InstalmentError;
use crate::types::{Installment, LoanRequest, Schedule};
use crate::InstalmentResult;

/// Drives the engine across every installment of a loan.
///
/// The builder holds no mutable state. Due dates are measured from an
/// explicit reference date, so the same request always yields the same
/// schedule.
pub struct ScheduleBuilder<'a> {
    calendar: &'a dyn Calendar,
    reference: NaiveDate,
    rounding: RoundingPolicy,
}

impl<'a> ScheduleBuilder<'a> {
    pub fn new(calendar: &'a dyn Calendar, reference: NaiveDate) -> Self {
        Self {
            calendar,
            reference,
            rounding: RoundingPolicy::Exact,
        }
    }

    pub fn with_rounding(mut self, rounding: RoundingPolicy) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn rounding(&self) -> RoundingPolicy {
        self.rounding
    }

    pub fn build(&self, request: &LoanRequest) -> InstalmentResult<Schedule> {
        validate_request(request)?;

        let count = request.count_of_loan as u32;
        let period = request.duration_of_loan_payment as u32;
        let principal = request.whole_amount;

        debug!(
            principal = %principal,
            profit_rate = request.profit_rate,
            count,
            period_months = period,
            calendar = self.calendar.name(),
            rounding = ?self.rounding,
            "building installment schedule"
        );

        let amount = self.rounding.apply(compute_installment_amount(
            principal,
            request.profit_rate,
            request.count_of_loan,
            request.duration_of_loan_payment,
        )?)?;
        amount.checked_mul(Decimal::from(count)).ok_or_else(|| {
            InstalmentError::FinancialImpossibility(format!(
                "{count} installments of {amount} overflow a Decimal"
            ))
        })?;

        let start = self.calendar.to_calendar_date(self.reference)?;
        let mut facility_list = Vec::with_capacity(count as usize);

        for index in 1..=count {
            let paid = amount
                .checked_mul(Decimal::from(index - 1))
                .ok_or_else(|| overflow("principal paid"))?;

            let months = index.checked_mul(period).ok_or_else(|| {
                InstalmentError::DateError(format!(
                    "installment {index} lies {period} x {index} months out, beyond the calendar range"
                ))
            })?;
            let due = self.calendar.add_months(start, months)?;
            let days = self.calendar.days_in_month(due.year, due.month)?;

            let share = self.rounding.apply(compute_profit_share(
                principal,
                request.profit_rate,
                request.duration_of_loan_payment,
                paid,
                days,
            )?)?;
            let original = amount
                .checked_sub(share)
                .ok_or_else(|| overflow("principal portion"))?;

            let (remain, remain_original) = if index == count {
                (Decimal::ZERO, Decimal::ZERO)
            } else {
                let residual = self
                    .rounding
                    .apply(compute_remaining_balance(count, amount, index)?)?;
                let remain = residual
                    .checked_add(share)
                    .ok_or_else(|| overflow("remaining amount"))?;
                (remain, residual)
            };

            trace!(index, due = %due, days, share = %share, remain = %remain, "installment");

            facility_list.push(Installment {
                id: index,
                amount,
                share_amount: share,
                original_amount: original,
                remain_amount: remain,
                remain_original_amount: remain_original,
                due_date: due.to_string(),
            });
        }

        let schedule = Schedule {
            facility_list,
            facility_amount: amount,
        };

        debug!(
            facility_amount = %schedule.facility_amount,
            total_whole = %schedule.total_whole_amount(),
            total_share = %schedule.total_share_amount(),
            "schedule complete"
        );

        Ok(schedule)
    }
}

/// Build a schedule in one call.
pub fn build_schedule(
    request: &LoanRequest,
    rounding_enabled: bool,
    calendar: &dyn Calendar,
    reference: NaiveDate,
) -> InstalmentResult<Schedule> {
    ScheduleBuilder::new(calendar, reference)
        .with_rounding(RoundingPolicy::from_enabled(rounding_enabled))
        .build(request)
}

/// Reject a request before any installment is computed.
pub fn validate_request(request: &LoanRequest) -> InstalmentResult<()> {
    if request.count_of_loan <= 0 || request.count_of_loan > MAX_INSTALLMENTS {
        return Err(InstalmentError::InvalidInstallmentCount {
            count: i64::from(request.count_of_loan),
        });
    }
    if request.duration_of_loan_payment <= 0 {
        return Err(InstalmentError::InvalidDuration {
            months: i64::from(request.duration_of_loan_payment),
        });
    }
    if request.whole_amount <= Decimal::ZERO {
        return Err(InstalmentError::InvalidPrincipal {
            amount: request.whole_amount,
        });
    }
    if request.profit_rate < 0 {
        return Err(InstalmentError::NegativeRate {
            rate: i64::from(request.profit_rate),
        });
    }
    Ok(())
}
