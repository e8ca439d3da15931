use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstalmentError {
    #[error("Invalid installment count: {count} (must be between 1 and 365)")]
    InvalidInstallmentCount { count: i64 },

    #[error("Invalid payment duration: {months} months (must be at least 1)")]
    InvalidDuration { months: i64 },

    #[error("Invalid principal: {amount} (must be positive)")]
    InvalidPrincipal { amount: Decimal },

    #[error("Negative profit rate: {rate}%")]
    NegativeRate { rate: i64 },

    #[error("Zero-rate singularity: annuity denominator (1+s)^n - 1 is zero")]
    ZeroRateSingularity,

    #[error("Invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Financial impossibility: {0}")]
    FinancialImpossibility(String),

    #[error("Date error: {0}")]
    DateError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for InstalmentError {
    fn from(e: serde_json::Error) -> Self {
        InstalmentError::SerializationError(e.to_string())
    }
}
