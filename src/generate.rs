//! Synthetic sample-user generator.
//!
//! Produces batches of plausible-looking metric bundles for demo runs and
//! benchmarking. Each user gets a base quality factor so their categories
//! correlate instead of being independent noise.

use rand::Rng;

use crate::metrics::{
    ContentQuality, EngagementMetrics, GovernanceParticipation, MonetizationPotential,
    SocialImpact, Trustworthiness, UserMetrics,
};

/// Generate `count` sample users from the supplied RNG.
///
/// The RNG is injected so callers control reproducibility: a seeded
/// `StdRng` gives identical batches across runs, entropy gives fresh data.
/// User ids are `user_1` through `user_{count}`, unique within the batch.
pub fn generate_users<R: Rng>(count: usize, rng: &mut R) -> Vec<UserMetrics> {
    (0..count).map(|i| generate_user(i, rng)).collect()
}

fn generate_user<R: Rng>(index: usize, rng: &mut R) -> UserMetrics {
    // Base quality factor, shared across categories for correlation
    let base = rng.gen_range(0.3..0.9);

    UserMetrics {
        user_id: format!("user_{}", index + 1),
        engagement: EngagementMetrics {
            engagement_rate: jitter(rng, base, 0.2),
            interaction_quality: jitter(rng, base, 0.1),
            growth_rate: jitter(rng, base, 0.15),
        },
        content: ContentQuality {
            frequency: jitter(rng, base, 0.1),
            originality: jitter(rng, base, 0.2),
            diversity: jitter(rng, base, 0.15),
        },
        trust: Trustworthiness {
            trust_score: jitter(rng, base, 0.1),
            verified_followers: jitter(rng, base, 0.2),
            reputation_index: jitter(rng, base, 0.15),
        },
        impact: SocialImpact {
            network_influence: jitter(rng, base, 0.2),
            trend_setting: jitter(rng, base, 0.15),
            mentions_reposts: jitter(rng, base, 0.1),
        },
        monetization: MonetizationPotential {
            token_transactions: jitter(rng, base, 0.2),
            crowdfunding: jitter(rng, base, 0.15),
            endorsement_success: jitter(rng, base, 0.1),
        },
        governance: GovernanceParticipation {
            voting_activity: jitter(rng, base, 0.2),
            proposal_contribution: jitter(rng, base, 0.15),
        },
    }
}

/// Offset `base` by up to `spread` in either direction, capped at 1.0.
/// No lower cap: the scoring engine handles anything below zero, though
/// with base >= 0.3 and spread <= 0.2 the floor never goes negative.
fn jitter<R: Rng>(rng: &mut R, base: f64, spread: f64) -> f64 {
    (base + rng.gen_range(-spread..spread)).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_generates_requested_count() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate_users(0, &mut rng).len(), 0);
        assert_eq!(generate_users(100, &mut rng).len(), 100);
    }

    #[test]
    fn test_user_ids_unique_and_one_based() {
        let mut rng = StdRng::seed_from_u64(7);
        let users = generate_users(100, &mut rng);

        let ids: HashSet<&str> = users.iter().map(|u| u.user_id.as_str()).collect();
        assert_eq!(ids.len(), 100);
        assert_eq!(users[0].user_id, "user_1");
        assert_eq!(users[99].user_id, "user_100");
    }

    #[test]
    fn test_fields_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for user in generate_users(200, &mut rng) {
            let fields = [
                user.engagement.engagement_rate,
                user.engagement.interaction_quality,
                user.engagement.growth_rate,
                user.content.frequency,
                user.content.originality,
                user.content.diversity,
                user.trust.trust_score,
                user.trust.verified_followers,
                user.trust.reputation_index,
                user.impact.network_influence,
                user.impact.trend_setting,
                user.impact.mentions_reposts,
                user.monetization.token_transactions,
                user.monetization.crowdfunding,
                user.monetization.endorsement_success,
                user.governance.voting_activity,
                user.governance.proposal_contribution,
            ];
            for field in fields {
                assert!(field <= 1.0, "field {} above cap for {}", field, user.user_id);
                // base in [0.3, 0.9) with spread at most 0.2 keeps a 0.1 floor
                assert!(field > 0.0, "field {} not positive for {}", field, user.user_id);
            }
        }
    }

    #[test]
    fn test_same_seed_same_batch() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        assert_eq!(generate_users(50, &mut a), generate_users(50, &mut b));
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = StdRng::seed_from_u64(1);
        let mut b = StdRng::seed_from_u64(2);
        assert_ne!(generate_users(10, &mut a), generate_users(10, &mut b));
    }
}
