pub mod error;
pub mod types;
pub mod underwriting;

pub use error::UnderwritingError;
pub use types::*;
pub use underwriting::decision::{assess_application, decide, CreditDecision, DecisionOptions};

/// Standard result type for all underwriting operations
pub type UnderwritingResult<T> = Result<T, UnderwritingError>;
