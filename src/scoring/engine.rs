use serde::Serialize;

use super::tier::Tier;
use super::weights::ScoringWeights;
use crate::metrics::{
    ContentQuality, EngagementMetrics, GovernanceParticipation, MonetizationPotential,
    SocialImpact, Trustworthiness,
};

/// Per-category and composite scores for one user, plus the tier label.
///
/// Derived once by [`calculate_breakdown`] and never mutated. Serializes
/// with the stable field names the export contract expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub engagement_score: f64,
    pub content_score: f64,
    pub trust_score: f64,
    pub impact_score: f64,
    pub monetization_score: f64,
    pub governance_score: f64,
    pub social_score: f64,
    pub tier: Tier,
}

/// Compute the full score breakdown for one user.
///
/// Pure and deterministic: no I/O, no validation, no clamping. Each category
/// score is the equally-weighted mean of that category's fields; the social
/// score is the weighted combination of the six category scores. Out-of-range
/// inputs propagate through the linear formulas unchanged, so callers that
/// need bounded output must clamp when constructing the inputs.
pub fn calculate_breakdown(
    engagement: &EngagementMetrics,
    content: &ContentQuality,
    trust: &Trustworthiness,
    impact: &SocialImpact,
    monetization: &MonetizationPotential,
    governance: &GovernanceParticipation,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let engagement_score = engagement_score(engagement);
    let content_score = content_score(content);
    let trust_score = trust_score(trust);
    let impact_score = impact_score(impact);
    let monetization_score = monetization_score(monetization);
    let governance_score = governance_score(governance);

    let social_score = weights.engagement * engagement_score
        + weights.content * content_score
        + weights.trust * trust_score
        + weights.impact * impact_score
        + weights.monetization * monetization_score
        + weights.governance * governance_score;

    ScoreBreakdown {
        engagement_score,
        content_score,
        trust_score,
        impact_score,
        monetization_score,
        governance_score,
        social_score,
        tier: Tier::from_score(social_score),
    }
}

fn engagement_score(m: &EngagementMetrics) -> f64 {
    (m.engagement_rate + m.interaction_quality + m.growth_rate) / 3.0
}

fn content_score(m: &ContentQuality) -> f64 {
    (m.frequency + m.originality + m.diversity) / 3.0
}

fn trust_score(m: &Trustworthiness) -> f64 {
    (m.trust_score + m.verified_followers + m.reputation_index) / 3.0
}

fn impact_score(m: &SocialImpact) -> f64 {
    (m.network_influence + m.trend_setting + m.mentions_reposts) / 3.0
}

fn monetization_score(m: &MonetizationPotential) -> f64 {
    (m.token_transactions + m.crowdfunding + m.endorsement_success) / 3.0
}

fn governance_score(m: &GovernanceParticipation) -> f64 {
    (m.voting_activity + m.proposal_contribution) / 2.0
}
