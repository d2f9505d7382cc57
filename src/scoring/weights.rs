use serde::{Deserialize, Serialize};

/// Category weights for the composite score.
///
/// Each weight is the share a category contributes to the overall social
/// score. Weights must be non-negative and sum to 1.0; this is checked at
/// startup by [`validate_weights`](super::validate_weights), not here.
///
/// Fields within a category are always weighted equally, so only the
/// category level is configurable.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   engagement: 0.25
///   content: 0.2
///   trust: 0.2
///   impact: 0.15
///   monetization: 0.1
///   governance: 0.1
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringWeights {
    pub engagement: f64,
    pub content: f64,
    pub trust: f64,
    pub impact: f64,
    pub monetization: f64,
    pub governance: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            engagement: 0.25,
            content: 0.20,
            trust: 0.20,
            impact: 0.15,
            monetization: 0.10,
            governance: 0.10,
        }
    }
}

impl ScoringWeights {
    /// Sum of all six category weights. 1.0 for any valid weight set.
    pub fn total(&self) -> f64 {
        self.engagement + self.content + self.trust + self.impact + self.monetization + self.governance
    }
}
