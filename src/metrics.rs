//! Raw metric records for the six scoring categories.
//!
//! All fields are conventionally in [0,1]. Producers clamp to at most 1.0;
//! there is no enforced lower bound, so negative values can reach the engine
//! and flow through the linear formulas unchanged.

/// Engagement category: how actively an account is interacted with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngagementMetrics {
    pub engagement_rate: f64,
    pub interaction_quality: f64,
    pub growth_rate: f64,
}

/// Content category: posting behavior and content variety.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentQuality {
    pub frequency: f64,
    pub originality: f64,
    pub diversity: f64,
}

/// Trust category: verification and reputation signals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trustworthiness {
    pub trust_score: f64,
    pub verified_followers: f64,
    pub reputation_index: f64,
}

/// Impact category: reach and influence signals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SocialImpact {
    pub network_influence: f64,
    pub trend_setting: f64,
    pub mentions_reposts: f64,
}

/// Monetization category: economic activity signals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonetizationPotential {
    pub token_transactions: f64,
    pub crowdfunding: f64,
    pub endorsement_success: f64,
}

/// Governance category: participation in collective decisions.
/// The only two-field category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GovernanceParticipation {
    pub voting_activity: f64,
    pub proposal_contribution: f64,
}

/// One user's complete metric set: the input bundle the engine consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct UserMetrics {
    pub user_id: String,
    pub engagement: EngagementMetrics,
    pub content: ContentQuality,
    pub trust: Trustworthiness,
    pub impact: SocialImpact,
    pub monetization: MonetizationPotential,
    pub governance: GovernanceParticipation,
}

impl UserMetrics {
    /// Build a bundle where every field of every category holds `value`.
    /// Handy for edge-case tests (all-zeros, all-ones).
    pub fn uniform(user_id: impl Into<String>, value: f64) -> Self {
        UserMetrics {
            user_id: user_id.into(),
            engagement: EngagementMetrics {
                engagement_rate: value,
                interaction_quality: value,
                growth_rate: value,
            },
            content: ContentQuality {
                frequency: value,
                originality: value,
                diversity: value,
            },
            trust: Trustworthiness {
                trust_score: value,
                verified_followers: value,
                reputation_index: value,
            },
            impact: SocialImpact {
                network_influence: value,
                trend_setting: value,
                mentions_reposts: value,
            },
            monetization: MonetizationPotential {
                token_transactions: value,
                crowdfunding: value,
                endorsement_success: value,
            },
            governance: GovernanceParticipation {
                voting_activity: value,
                proposal_contribution: value,
            },
        }
    }
}
