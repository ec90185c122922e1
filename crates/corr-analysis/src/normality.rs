//! Normality verdicts and method recommendations.

use corr_stats::shapiro::ShapiroWilk;
use serde::{Deserialize, Serialize};

use crate::interpret::{ALPHA, Method};

/// Verdict of a normality test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum NormalityVerdict {
    /// No evidence against normality (p ≥ 0.05).
    Normal,
    /// The distribution departs from normal (p < 0.05).
    NotNormal,
}

impl NormalityVerdict {
    /// Pure function of the p-value: `NotNormal` iff p < 0.05.
    #[must_use]
    pub fn from_p_value(p_value: f64) -> Self {
        if p_value < ALPHA {
            Self::NotNormal
        } else {
            Self::Normal
        }
    }

    /// The advisory method recommendation attached to the verdict.
    ///
    /// Spearman is robust to non-normal marginals; Pearson is admissible
    /// under normality. Advisory only — it never overrides the caller's
    /// explicit method choice.
    #[must_use]
    pub fn recommended_method(self) -> Method {
        match self {
            Self::Normal => Method::Pearson,
            Self::NotNormal => Method::Spearman,
        }
    }
}

/// Outcome of a Shapiro–Wilk test on one variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalityResult {
    pub variable: String,
    pub statistic: f64,
    pub p_value: f64,
    pub verdict: NormalityVerdict,
    pub recommended_method: Method,
}

impl NormalityResult {
    #[must_use]
    pub fn new(variable: String, test: ShapiroWilk) -> Self {
        let verdict = NormalityVerdict::from_p_value(test.p_value);
        Self {
            variable,
            statistic: test.statistic,
            p_value: test.p_value,
            verdict,
            recommended_method: verdict.recommended_method(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_is_pure_function_of_p() {
        for p in [0.0, 0.01, 0.049_999] {
            assert_eq!(NormalityVerdict::from_p_value(p), NormalityVerdict::NotNormal);
        }
        for p in [0.05, 0.051, 0.5, 1.0] {
            assert_eq!(NormalityVerdict::from_p_value(p), NormalityVerdict::Normal);
        }
    }

    #[test]
    fn test_recommendations() {
        assert_eq!(
            NormalityVerdict::Normal.recommended_method(),
            Method::Pearson
        );
        assert_eq!(
            NormalityVerdict::NotNormal.recommended_method(),
            Method::Spearman
        );
    }
}
