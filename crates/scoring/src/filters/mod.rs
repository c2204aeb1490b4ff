//! Filter implementations for the ranking pipeline.

pub mod eligibility_floor;

// Re-export for convenience
pub use eligibility_floor::EligibilityFloorFilter;
