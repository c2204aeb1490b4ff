//! Sub-score components. Each is capped independently and the caps sum to
//! the 125-point scale.

pub mod eligibility;
pub mod preference;
pub mod spending;

pub use eligibility::EligibilityScore;
pub use preference::PreferenceFitScore;
pub use spending::SpendingFitScore;
