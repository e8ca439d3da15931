pub mod amortization;
pub mod calendar;
pub mod error;
pub mod facility;
pub mod types;

pub use error::InstalmentError;
pub use types::*;

/// Standard result type for all instalment operations
pub type InstalmentResult<T> = Result<T, InstalmentError>;
