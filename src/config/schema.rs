use serde::{Deserialize, Serialize};

use crate::scoring::ScoringWeights;

/// Top-level file configuration. Every field is optional; command-line
/// flags take precedence over the file, built-in defaults apply last.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Number of users to generate per batch (default 100).
    pub users: Option<usize>,
    /// RNG seed for reproducible batches. Unset means OS entropy.
    pub seed: Option<u64>,
    /// Export path for the results artifact.
    pub output: Option<String>,
    /// Category weight overrides.
    pub scoring: Option<ScoringWeights>,
}
