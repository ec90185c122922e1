//! Fixed-threshold interpretation of correlation results.
//!
//! Every mapping here is a pure total function of the coefficient and
//! p-value; the thresholds are design constants, not user-tunable.

use serde::{Deserialize, Serialize};

/// Significance level shared by the normality and correlation verdicts.
pub const ALPHA: f64 = 0.05;

/// The correlation method chosen by the caller.
///
/// Always caller-supplied: the normality test's recommendation is advisory
/// only and never overrides an explicit choice.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
pub enum Method {
    Pearson,
    Spearman,
}

/// Strength bucket for a correlation coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

impl Strength {
    /// |r| < 0.30 is weak, below 0.70 moderate, otherwise strong.
    #[must_use]
    pub fn from_coefficient(coefficient: f64) -> Self {
        let r = coefficient.abs();
        if r < 0.30 {
            Self::Weak
        } else if r < 0.70 {
            Self::Moderate
        } else {
            Self::Strong
        }
    }
}

/// Direction of a correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Direction {
    Positive,
    Negative,
}

impl Direction {
    /// Positive iff the coefficient is strictly greater than zero.
    ///
    /// A coefficient of exactly zero lands in the negative bucket. A zero
    /// coefficient is always reported as weak and non-significant, so the
    /// bucket never reaches a user as a directional claim on its own.
    #[must_use]
    pub fn from_coefficient(coefficient: f64) -> Self {
        if coefficient > 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

/// The categorical verdict derived from a coefficient and p-value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub strength: Strength,
    pub direction: Direction,
    pub significant: bool,
}

impl Verdict {
    #[must_use]
    pub fn new(coefficient: f64, p_value: f64) -> Self {
        Self {
            strength: Strength::from_coefficient(coefficient),
            direction: Direction::from_coefficient(coefficient),
            significant: p_value < ALPHA,
        }
    }
}

/// Composes the human-facing summary sentence for a verdict.
///
/// Total over all combinations of the three categorical axes: when the
/// result is not significant, every strength/direction pairing collapses to
/// the same "no significant correlation" sentence.
#[must_use]
pub fn summary_sentence(verdict: Verdict, x: &str, y: &str) -> String {
    if !verdict.significant {
        return format!("No statistically significant correlation was found between {x} and {y}.");
    }
    let strength = match verdict.strength {
        Strength::Weak => "weak",
        Strength::Moderate => "moderate",
        Strength::Strong => "strong",
    };
    let direction = match verdict.direction {
        Direction::Positive => "positive",
        Direction::Negative => "negative",
    };
    format!("There is a {strength} {direction} correlation between {x} and {y}.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_thresholds() {
        assert_eq!(Strength::from_coefficient(0.0), Strength::Weak);
        assert_eq!(Strength::from_coefficient(-0.29), Strength::Weak);
        assert_eq!(Strength::from_coefficient(0.30), Strength::Moderate);
        assert_eq!(Strength::from_coefficient(-0.69), Strength::Moderate);
        assert_eq!(Strength::from_coefficient(0.70), Strength::Strong);
        assert_eq!(Strength::from_coefficient(-1.0), Strength::Strong);
    }

    #[test]
    fn test_direction_zero_is_negative() {
        assert_eq!(Direction::from_coefficient(0.0), Direction::Negative);
        assert_eq!(Direction::from_coefficient(1e-9), Direction::Positive);
        assert_eq!(Direction::from_coefficient(-0.5), Direction::Negative);
    }

    #[test]
    fn test_moderate_positive_significant() {
        let verdict = Verdict::new(0.5, 0.01);
        assert_eq!(verdict.strength, Strength::Moderate);
        assert_eq!(verdict.direction, Direction::Positive);
        assert!(verdict.significant);
    }

    #[test]
    fn test_strong_negative_not_significant() {
        let verdict = Verdict::new(-0.8, 0.2);
        assert_eq!(verdict.strength, Strength::Strong);
        assert_eq!(verdict.direction, Direction::Negative);
        assert!(!verdict.significant);
    }

    #[test]
    fn test_summary_sentence_total() {
        // Every combination of the three axes yields a non-empty sentence
        for strength in [Strength::Weak, Strength::Moderate, Strength::Strong] {
            for direction in [Direction::Positive, Direction::Negative] {
                for significant in [true, false] {
                    let verdict = Verdict {
                        strength,
                        direction,
                        significant,
                    };
                    let sentence = summary_sentence(verdict, "height", "weight");
                    assert!(sentence.contains("height") && sentence.contains("weight"));
                }
            }
        }
    }

    #[test]
    fn test_summary_sentence_wording() {
        let verdict = Verdict::new(0.85, 0.001);
        assert_eq!(
            summary_sentence(verdict, "a", "b"),
            "There is a strong positive correlation between a and b."
        );
        let verdict = Verdict::new(0.85, 0.8);
        assert_eq!(
            summary_sentence(verdict, "a", "b"),
            "No statistically significant correlation was found between a and b."
        );
    }

    #[test]
    fn test_method_from_str() {
        assert_eq!("Pearson".parse::<Method>().unwrap(), Method::Pearson);
        assert_eq!("spearman".parse::<Method>().unwrap(), Method::Spearman);
    }
}
