//! Batch driver: score a set of users and summarize the results.

use serde::Serialize;

use crate::metrics::UserMetrics;
use crate::scoring::{calculate_breakdown, ScoreBreakdown, ScoringWeights, Tier};

/// One output row: a user id with its computed breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredUser {
    #[serde(flatten)]
    pub breakdown: ScoreBreakdown,
    pub user_id: String,
}

/// Score every user in the batch, preserving input order.
///
/// Scoring is pure, so the whole batch either completes or the process has a
/// logic bug; there is no per-user skip or recovery path.
pub fn score_users(users: &[UserMetrics], weights: &ScoringWeights) -> Vec<ScoredUser> {
    users
        .iter()
        .map(|user| ScoredUser {
            breakdown: calculate_breakdown(
                &user.engagement,
                &user.content,
                &user.trust,
                &user.impact,
                &user.monetization,
                &user.governance,
                weights,
            ),
            user_id: user.user_id.clone(),
        })
        .collect()
}

/// Aggregate statistics over a scored batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub user_count: usize,
    pub mean_social_score: f64,
    /// Count per tier, in descending prestige order. Tiers with no users
    /// are included with a zero count.
    pub tier_counts: Vec<(Tier, usize)>,
    /// Mean per-category score, keyed by the exported column name.
    pub component_means: Vec<(&'static str, f64)>,
}

impl Summary {
    pub fn from_rows(rows: &[ScoredUser]) -> Summary {
        let n = rows.len();
        let mean = |f: fn(&ScoreBreakdown) -> f64| -> f64 {
            if n == 0 {
                0.0
            } else {
                rows.iter().map(|r| f(&r.breakdown)).sum::<f64>() / n as f64
            }
        };

        let tier_counts = Tier::ALL
            .iter()
            .map(|&tier| {
                let count = rows.iter().filter(|r| r.breakdown.tier == tier).count();
                (tier, count)
            })
            .collect();

        Summary {
            user_count: n,
            mean_social_score: mean(|b| b.social_score),
            tier_counts,
            component_means: vec![
                ("engagement_score", mean(|b| b.engagement_score)),
                ("content_score", mean(|b| b.content_score)),
                ("trust_score", mean(|b| b.trust_score)),
                ("impact_score", mean(|b| b.impact_score)),
                ("monetization_score", mean(|b| b.monetization_score)),
                ("governance_score", mean(|b| b.governance_score)),
            ],
        }
    }
}
