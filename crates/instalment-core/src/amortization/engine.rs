//! Level-payment arithmetic.
//!
//! Every function here is pure. Amounts are `Decimal`; the only inputs kept
//! integral are the ones the request carries as integers (rate percent,
//! counts, months, day counts).

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::error::InstalmentError;
use crate::types::{Money, Rate};
use crate::InstalmentResult;

/// Day basis of the profit accrual.
pub const DAYS_PER_YEAR: u32 = 365;

/// Upper bound on installments, one per day of the accrual year.
pub const MAX_INSTALLMENTS: i32 = 365;

/// Decimal places kept on computed amounts. Keeps sums and differences of
/// amounts below 10^18 exact within the 28-digit mantissa.
pub const MONEY_SCALE: u32 = 10;

const PERCENT: Decimal = dec!(100);

/// `floor(365 / installment_count)`
pub fn periods_per_year(installment_count: i32) -> InstalmentResult<u32> {
    if installment_count <= 0 || installment_count > MAX_INSTALLMENTS {
        return Err(InstalmentError::InvalidInstallmentCount {
            count: i64::from(installment_count),
        });
    }
    Ok(DAYS_PER_YEAR / installment_count as u32)
}

/// Per-period rate `s = rate / (periods_per_year * 100)`.
pub fn period_rate(annual_rate_percent: i32, installment_count: i32) -> InstalmentResult<Rate> {
    if annual_rate_percent < 0 {
        return Err(InstalmentError::NegativeRate {
            rate: i64::from(annual_rate_percent),
        });
    }
    let per = periods_per_year(installment_count)?;
    Ok(Decimal::from(annual_rate_percent) / (Decimal::from(per) * PERCENT))
}

/// Annuity payment `s * P * (1+s)^n / ((1+s)^n - 1)`.
///
/// Returns [`InstalmentError::ZeroRateSingularity`] when the denominator is
/// zero; the formula has no value at `s = 0` even though its limit is `P / n`.
pub fn annuity_payment(principal: Money, rate: Rate, periods: u32) -> InstalmentResult<Money> {
    let growth = (Decimal::ONE + rate)
        .checked_powu(u64::from(periods))
        .ok_or_else(|| overflow("(1+s)^n"))?;
    let denominator = growth - Decimal::ONE;
    if denominator.is_zero() {
        return Err(InstalmentError::ZeroRateSingularity);
    }

    let future = principal
        .checked_mul(growth)
        .ok_or_else(|| overflow("principal * (1+s)^n"))?;
    let ratio = future
        .checked_div(denominator)
        .ok_or_else(|| overflow("annuity factor"))?;
    rate.checked_mul(ratio)
        .ok_or_else(|| overflow("installment amount"))
}

/// Constant installment amount for a level-payment loan.
///
/// `period_months` does not enter the formula; the per-period rate is
/// derived from the installment count alone. It is still validated so a
/// schedule can never be built from a degenerate spacing.
pub fn compute_installment_amount(
    principal: Money,
    annual_rate_percent: i32,
    installment_count: i32,
    period_months: i32,
) -> InstalmentResult<Money> {
    if principal <= Decimal::ZERO {
        return Err(InstalmentError::InvalidPrincipal { amount: principal });
    }
    if period_months <= 0 {
        return Err(InstalmentError::InvalidDuration {
            months: i64::from(period_months),
        });
    }
    let rate = period_rate(annual_rate_percent, installment_count)?;
    let periods = installment_count as u32;

    let amount = match annuity_payment(principal, rate, periods) {
        Err(InstalmentError::ZeroRateSingularity) => principal / Decimal::from(periods),
        other => other?,
    };
    Ok(amount.round_dp(MONEY_SCALE))
}

/// Profit accrued on the outstanding principal over one installment period:
/// `(rate/100) * days * period_months * (principal - paid) / 365`.
///
/// `days_in_accrual_month` is the length of the installment's own due month.
pub fn compute_profit_share(
    principal: Money,
    annual_rate_percent: i32,
    period_months: i32,
    principal_paid_so_far: Money,
    days_in_accrual_month: u32,
) -> InstalmentResult<Money> {
    if annual_rate_percent < 0 {
        return Err(InstalmentError::NegativeRate {
            rate: i64::from(annual_rate_percent),
        });
    }
    if period_months <= 0 {
        return Err(InstalmentError::InvalidDuration {
            months: i64::from(period_months),
        });
    }

    let outstanding = principal - principal_paid_so_far;
    let accrual = (Decimal::from(annual_rate_percent) / PERCENT)
        .checked_mul(Decimal::from(days_in_accrual_month))
        .and_then(|x| x.checked_mul(Decimal::from(period_months)))
        .and_then(|x| x.checked_mul(outstanding))
        .ok_or_else(|| overflow("profit share"))?;
    Ok((accrual / Decimal::from(DAYS_PER_YEAR)).round_dp(MONEY_SCALE))
}

/// Nominal balance left after `installment_index` level payments:
/// `amount * count - amount * index`.
pub fn compute_remaining_balance(
    installment_count: u32,
    installment_amount: Money,
    installment_index: u32,
) -> InstalmentResult<Money> {
    let total = installment_amount
        .checked_mul(Decimal::from(installment_count))
        .ok_or_else(|| overflow("nominal total"))?;
    let paid = installment_amount
        .checked_mul(Decimal::from(installment_index))
        .ok_or_else(|| overflow("nominal paid"))?;
    total
        .checked_sub(paid)
        .ok_or_else(|| overflow("remaining balance"))
}

pub(crate) fn overflow(context: &str) -> InstalmentError {
    InstalmentError::FinancialImpossibility(format!("Decimal overflow computing {context}"))
}
