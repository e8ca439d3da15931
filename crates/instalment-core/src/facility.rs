//! The two facility operations: an exact schedule and a rounded one.
//!
//! Both validate the request, build the schedule and wrap it in the
//! [`ComputationOutput`] envelope with non-fatal warnings attached.

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::warn;

use crate::amortization::{period_rate, periods_per_year, RoundingPolicy, ScheduleBuilder};
use crate::calendar::{Calendar, CalendarKind};
use crate::types::*;
use crate::InstalmentResult;

/// Options shared by both operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FacilityOptions {
    #[serde(default)]
    pub calendar: CalendarKind,
    /// Date the schedule is measured from. Today's local date when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_date: Option<NaiveDate>,
}

impl FacilityOptions {
    pub fn new(calendar: CalendarKind, reference_date: NaiveDate) -> Self {
        Self {
            calendar,
            reference_date: Some(reference_date),
        }
    }
}

/// Schedule with no rounding.
pub fn get_facility_info(
    request: &LoanRequest,
    options: &FacilityOptions,
) -> InstalmentResult<ComputationOutput<Schedule>> {
    compute_facility(request, options, RoundingPolicy::Exact)
}

/// Schedule with amount, share and remaining balance rounded up to 100.
pub fn get_facility_info_with_rounding(
    request: &LoanRequest,
    options: &FacilityOptions,
) -> InstalmentResult<ComputationOutput<Schedule>> {
    compute_facility(request, options, RoundingPolicy::CeilingHundred)
}

fn compute_facility(
    request: &LoanRequest,
    options: &FacilityOptions,
    rounding: RoundingPolicy,
) -> InstalmentResult<ComputationOutput<Schedule>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let reference = options
        .reference_date
        .unwrap_or_else(|| Local::now().date_naive());
    let calendar = options.calendar.calendar();

    let builder = ScheduleBuilder::new(calendar.as_ref(), reference).with_rounding(rounding);
    let schedule = builder.build(request)?;
    let rounding = builder.rounding();

    if request.profit_rate == 0 {
        warnings.push(
            "Zero profit rate: installment amount is principal divided by installment count"
                .into(),
        );
    }
    for installment in &schedule.facility_list {
        if installment.share_amount < Decimal::ZERO {
            warnings.push(format!(
                "Installment {} has a negative profit share ({}): nominal principal paid exceeds the loan amount",
                installment.id, installment.share_amount
            ));
        }
    }
    for w in &warnings {
        warn!("{w}");
    }

    // Both are valid once the build has succeeded.
    let per = periods_per_year(request.count_of_loan)?;
    let rate = period_rate(request.profit_rate, request.count_of_loan)?;

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "calendar": calendar.name(),
        "reference_date": reference.to_string(),
        "rounding": rounding,
        "periods_per_year": per,
        "period_rate": rate.to_string(),
        "day_count": "actual days of due month / 365",
    });

    let methodology = if rounding.is_enabled() {
        "Level-payment annuity schedule, ceiling-rounded to 100"
    } else {
        "Level-payment annuity schedule"
    };

    Ok(with_metadata(
        methodology,
        &assumptions,
        warnings,
        elapsed,
        schedule,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InstalmentError;
    use rust_decimal_macros::dec;

    fn options() -> FacilityOptions {
        FacilityOptions::new(
            CalendarKind::Gregorian,
            NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
        )
    }

    fn request() -> LoanRequest {
        LoanRequest {
            whole_amount: dec!(12_000_000),
            profit_rate: 18,
            count_of_loan: 12,
            duration_of_loan_payment: 1,
        }
    }

    #[test]
    fn test_envelope_populated() {
        let out = get_facility_info(&request(), &options()).unwrap();
        assert_eq!(out.result.facility_list.len(), 12);
        assert_eq!(out.metadata.precision, "rust_decimal_128bit");
        assert_eq!(out.assumptions["periods_per_year"], serde_json::json!(30));
        assert_eq!(out.assumptions["calendar"], serde_json::json!("gregorian"));
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_rounded_variant_methodology() {
        let out = get_facility_info_with_rounding(&request(), &options()).unwrap();
        assert!(out.methodology.contains("rounded"));
        assert_eq!(out.assumptions["rounding"], serde_json::json!("ceiling_hundred"));
        assert_eq!(out.result.facility_amount, dec!(1_039_500));
    }

    #[test]
    fn test_zero_rate_warning() {
        let mut req = request();
        req.profit_rate = 0;
        let out = get_facility_info(&req, &options()).unwrap();
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn test_negative_share_warning() {
        // At 300% the nominal payments overtake the principal before the end.
        let req = LoanRequest {
            whole_amount: dec!(1_000_000),
            profit_rate: 300,
            count_of_loan: 12,
            duration_of_loan_payment: 1,
        };
        let out = get_facility_info(&req, &options()).unwrap();
        assert!(out.warnings.iter().any(|w| w.contains("negative profit share")));
    }

    #[test]
    fn test_errors_propagate() {
        let mut req = request();
        req.count_of_loan = 0;
        let err = get_facility_info(&req, &options()).unwrap_err();
        assert!(matches!(err, InstalmentError::InvalidInstallmentCount { count: 0 }));
    }
}
