pub mod engine;
pub mod tier;
pub mod validation;
pub mod weights;

pub use engine::{calculate_breakdown, ScoreBreakdown};
pub use tier::Tier;
pub use validation::validate_weights;
pub use weights::ScoringWeights;
