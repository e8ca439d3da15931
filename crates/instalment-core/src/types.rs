use rust_decimal::Decimal;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.006 = 0.6% per period). Never as percentages.
pub type Rate = Decimal;

/// Parameters of a fixed-rate, fixed-term loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanRequest {
    /// Total principal.
    pub whole_amount: Money,
    /// Annual profit rate as a whole percent (18 = 18%).
    pub profit_rate: i32,
    /// Number of installments, 1..=365.
    pub count_of_loan: i32,
    /// Months between consecutive installments.
    pub duration_of_loan_payment: i32,
}

/// One scheduled payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Installment {
    /// 1-based sequence number.
    pub id: u32,
    pub amount: Money,
    /// Profit portion.
    pub share_amount: Money,
    /// Principal portion, `amount - share_amount`.
    pub original_amount: Money,
    /// Outstanding balance including this period's profit. Zero on the last installment.
    pub remain_amount: Money,
    /// Outstanding principal-only balance. Zero on the last installment.
    pub remain_original_amount: Money,
    /// `y/m/d` in the schedule's calendar.
    pub due_date: String,
}

/// A complete installment schedule.
///
/// The totals are always summed from `facility_list` and are never stored,
/// so they cannot drift from the installments actually returned.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub facility_list: Vec<Installment>,
    /// The constant installment amount.
    pub facility_amount: Money,
}

impl Schedule {
    /// Sum of installment amounts.
    pub fn total_whole_amount(&self) -> Money {
        self.facility_list.iter().map(|i| i.amount).sum()
    }

    pub fn total_share_amount(&self) -> Money {
        self.facility_list.iter().map(|i| i.share_amount).sum()
    }

    pub fn total_original_amount(&self) -> Money {
        self.facility_list.iter().map(|i| i.original_amount).sum()
    }
}

impl Serialize for Schedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Schedule", 5)?;
        state.serialize_field("facilityList", &self.facility_list)?;
        state.serialize_field("facilityAmount", &self.facility_amount)?;
        state.serialize_field("totalWholeAmount", &self.total_whole_amount())?;
        state.serialize_field("totalShareAmount", &self.total_share_amount())?;
        state.serialize_field("totalOriginalAmount", &self.total_original_amount())?;
        state.end()
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn installment(id: u32, amount: Money, share: Money) -> Installment {
        Installment {
            id,
            amount,
            share_amount: share,
            original_amount: amount - share,
            remain_amount: Decimal::ZERO,
            remain_original_amount: Decimal::ZERO,
            due_date: "1403/2/1".into(),
        }
    }

    #[test]
    fn test_totals_are_sums() {
        let schedule = Schedule {
            facility_list: vec![
                installment(1, dec!(500), dec!(120)),
                installment(2, dec!(500), dec!(60)),
            ],
            facility_amount: dec!(500),
        };
        assert_eq!(schedule.total_whole_amount(), dec!(1000));
        assert_eq!(schedule.total_share_amount(), dec!(180));
        assert_eq!(schedule.total_original_amount(), dec!(820));
    }

    #[test]
    fn test_schedule_serializes_camel_case_with_totals() {
        let schedule = Schedule {
            facility_list: vec![installment(1, dec!(500), dec!(120))],
            facility_amount: dec!(500),
        };
        let json = serde_json::to_value(&schedule).unwrap();
        assert_eq!(json["totalShareAmount"], serde_json::json!("120"));
        assert_eq!(json["facilityList"][0]["remainOriginalAmount"], serde_json::json!("0"));
        assert_eq!(json["facilityList"][0]["dueDate"], serde_json::json!("1403/2/1"));
    }

    #[test]
    fn test_request_accepts_json_numbers() {
        let request: LoanRequest = serde_json::from_str(
            r#"{"wholeAmount": 12000000, "profitRate": 18, "countOfLoan": 12, "durationOfLoanPayment": 1}"#,
        )
        .unwrap();
        assert_eq!(request.whole_amount, dec!(12000000));
        assert_eq!(request.count_of_loan, 12);
    }
}
