use serde::Serialize;
use std::fmt;

/// Score required for the Elite tier.
pub const ELITE_MIN: f64 = 0.8;
/// Score required for the High tier.
pub const HIGH_MIN: f64 = 0.6;
/// Score required for the Medium tier.
pub const MEDIUM_MIN: f64 = 0.4;

/// Discrete prestige band derived from the social score.
///
/// Bands are closed-open and cover every real number: anything below
/// `MEDIUM_MIN` (including negatives and NaN) is Low, anything at or above
/// `ELITE_MIN` (including values past 1.0) is Elite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Tier {
    Low,
    Medium,
    High,
    Elite,
}

impl Tier {
    /// All tiers in descending prestige order, for display.
    pub const ALL: [Tier; 4] = [Tier::Elite, Tier::High, Tier::Medium, Tier::Low];

    pub fn from_score(score: f64) -> Tier {
        if score >= ELITE_MIN {
            Tier::Elite
        } else if score >= HIGH_MIN {
            Tier::High
        } else if score >= MEDIUM_MIN {
            Tier::Medium
        } else {
            Tier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Elite => "Elite",
            Tier::High => "High",
            Tier::Medium => "Medium",
            Tier::Low => "Low",
        }
    }

    /// Get a description for a tier
    pub fn description(&self) -> &'static str {
        match self {
            Tier::Elite => "Top-scoring accounts with strong signals across categories",
            Tier::High => "Consistently above-average accounts",
            Tier::Medium => "Average accounts with room to grow",
            Tier::Low => "Accounts with weak or sparse signals",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(Tier::from_score(1.0), Tier::Elite);
        assert_eq!(Tier::from_score(0.8), Tier::Elite);
        assert_eq!(Tier::from_score(0.79), Tier::High);
        assert_eq!(Tier::from_score(0.6), Tier::High);
        assert_eq!(Tier::from_score(0.59), Tier::Medium);
        assert_eq!(Tier::from_score(0.4), Tier::Medium);
        assert_eq!(Tier::from_score(0.39), Tier::Low);
        assert_eq!(Tier::from_score(0.0), Tier::Low);
    }

    #[test]
    fn test_tier_total_outside_unit_interval() {
        // Every real maps to exactly one tier, including out-of-range scores
        assert_eq!(Tier::from_score(-0.5), Tier::Low);
        assert_eq!(Tier::from_score(1.7), Tier::Elite);
        assert_eq!(Tier::from_score(f64::NAN), Tier::Low);
    }

    #[test]
    fn test_tier_monotonic_in_score() {
        let mut score = -0.5;
        let mut last = Tier::from_score(score);
        while score <= 1.5 {
            let tier = Tier::from_score(score);
            assert!(tier >= last, "tier regressed at score {}", score);
            last = tier;
            score += 0.01;
        }
    }

    #[test]
    fn test_tier_labels() {
        assert_eq!(Tier::Elite.to_string(), "Elite");
        assert_eq!(Tier::High.to_string(), "High");
        assert_eq!(Tier::Medium.to_string(), "Medium");
        assert_eq!(Tier::Low.to_string(), "Low");
    }

    #[test]
    fn test_all_is_descending_prestige() {
        for pair in Tier::ALL.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }
}
