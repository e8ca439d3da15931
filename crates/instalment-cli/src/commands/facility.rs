use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::debug;

use instalment_core::facility::{self, FacilityOptions};
use instalment_core::LoanRequest;

use super::CalendarArg;
use crate::input;

/// Arguments shared by both schedule commands
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct FacilityArgs {
    /// Path to a JSON or YAML loan request (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Total principal
    #[arg(long, alias = "principal")]
    pub whole_amount: Option<Decimal>,

    /// Annual profit rate in whole percent (18 = 18%)
    #[arg(long, alias = "rate")]
    pub profit_rate: Option<i32>,

    /// Number of installments (1-365)
    #[arg(long, alias = "count")]
    pub count_of_loan: Option<i32>,

    /// Months between installments
    #[arg(long, alias = "duration")]
    pub duration_of_loan_payment: Option<i32>,

    /// Calendar used for due dates and accrual day counts
    #[arg(long, value_enum, default_value = "persian")]
    pub calendar: CalendarArg,

    /// Date the schedule starts from, YYYY-MM-DD (default: today)
    #[arg(long)]
    pub reference_date: Option<NaiveDate>,
}

pub fn run_facility_info(args: FacilityArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let (request, options) = resolve(args)?;
    let output = facility::get_facility_info(&request, &options)?;
    Ok(serde_json::to_value(output)?)
}

pub fn run_facility_info_rounded(args: FacilityArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let (request, options) = resolve(args)?;
    let output = facility::get_facility_info_with_rounding(&request, &options)?;
    Ok(serde_json::to_value(output)?)
}

fn resolve(args: FacilityArgs) -> Result<(LoanRequest, FacilityOptions), Box<dyn std::error::Error>> {
    let options = FacilityOptions {
        calendar: args.calendar.into(),
        reference_date: args.reference_date,
    };
    let request = loan_request(args)?;
    debug!(?request, ?options, "resolved facility request");
    Ok((request, options))
}

fn loan_request(args: FacilityArgs) -> Result<LoanRequest, Box<dyn std::error::Error>> {
    let request = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(request) = input::stdin::read_stdin()? {
        request
    } else {
        LoanRequest {
            whole_amount: args
                .whole_amount
                .ok_or("--whole-amount is required (or provide --input)")?,
            profit_rate: args
                .profit_rate
                .ok_or("--profit-rate is required (or provide --input)")?,
            count_of_loan: args
                .count_of_loan
                .ok_or("--count-of-loan is required (or provide --input)")?,
            duration_of_loan_payment: args
                .duration_of_loan_payment
                .ok_or("--duration-of-loan-payment is required (or provide --input)")?,
        }
    };
    Ok(request)
}
