use super::weights::ScoringWeights;

/// Tolerance for the weight-sum check. Weights come from YAML written by
/// hand, so exact float equality is too strict.
const SUM_TOLERANCE: f64 = 1e-6;

/// Validate scoring weights at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_weights(weights: &ScoringWeights) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let named = [
        ("scoring.engagement", weights.engagement),
        ("scoring.content", weights.content),
        ("scoring.trust", weights.trust),
        ("scoring.impact", weights.impact),
        ("scoring.monetization", weights.monetization),
        ("scoring.governance", weights.governance),
    ];

    for (name, value) in named {
        if !value.is_finite() {
            errors.push(format!("{}: must be a finite number", name));
        } else if value < 0.0 {
            errors.push(format!("{}: must be non-negative, got {}", name, value));
        }
    }

    let total = weights.total();
    if total.is_finite() && (total - 1.0).abs() > SUM_TOLERANCE {
        errors.push(format!(
            "scoring: category weights must sum to 1.0, got {:.6}",
            total
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_are_valid() {
        assert!(validate_weights(&ScoringWeights::default()).is_ok());
    }

    #[test]
    fn test_negative_weight_rejected() {
        let weights = ScoringWeights {
            engagement: -0.1,
            content: 0.55,
            ..ScoringWeights::default()
        };
        let errors = validate_weights(&weights).unwrap_err();
        assert!(errors[0].contains("scoring.engagement"));
        assert!(errors[0].contains("non-negative"));
    }

    #[test]
    fn test_bad_sum_rejected() {
        let weights = ScoringWeights {
            engagement: 0.5,
            ..ScoringWeights::default()
        };
        let errors = validate_weights(&weights).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("sum to 1.0"));
    }

    #[test]
    fn test_sum_tolerance_allows_rounding() {
        // 0.1 + 0.2 style float noise must not trip validation
        let weights = ScoringWeights {
            engagement: 0.25 + 1e-9,
            ..ScoringWeights::default()
        };
        assert!(validate_weights(&weights).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let weights = ScoringWeights {
            engagement: -0.25, // Error 1
            governance: -0.10, // Error 2
            ..ScoringWeights::default()
        };
        let errors = validate_weights(&weights).unwrap_err();
        // Two negative weights plus the resulting broken sum
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_non_finite_weight_rejected() {
        let weights = ScoringWeights {
            trust: f64::NAN,
            ..ScoringWeights::default()
        };
        let errors = validate_weights(&weights).unwrap_err();
        assert!(errors[0].contains("scoring.trust"));
        assert!(errors[0].contains("finite"));
    }
}
