//! Answer parser implementations, one per kind of question.

pub mod benefits;
pub mod credit_score;
pub mod income;
pub mod primary_use;
pub mod spending;

// Re-export for convenience
pub use benefits::{join_selections, split_selections, BenefitsParser};
pub use credit_score::CreditScoreParser;
pub use income::IncomeParser;
pub use primary_use::PrimaryUseParser;
pub use spending::SpendingParser;
