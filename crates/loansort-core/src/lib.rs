pub mod error;
pub mod time_value;
pub mod types;

#[cfg(feature = "emi")]
pub mod emi;

#[cfg(feature = "sorting")]
pub mod sorting;

pub use error::LoansortError;
pub use types::*;

/// Standard result type for all loansort operations
pub type LoansortResult<T> = Result<T, LoansortError>;
