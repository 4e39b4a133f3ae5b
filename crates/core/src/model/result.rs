use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::format::format_completion_time;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ResultError {
    #[error("percentage is not a finite number: {0}")]
    NonFinitePercentage(f64),
}

/// Score payload returned by the submission endpoint.
///
/// Unknown fields are ignored; every listed field is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    pub score: u32,
    pub total: u32,
    pub percentage: f64,
    pub level: String,
    pub message: String,
}

impl QuizResult {
    /// # Errors
    ///
    /// Returns `ResultError::NonFinitePercentage` when the percentage cannot be banded.
    pub fn validate(self) -> Result<Self, ResultError> {
        if !self.percentage.is_finite() {
            return Err(ResultError::NonFinitePercentage(self.percentage));
        }
        Ok(self)
    }
}

/// Lower edges (inclusive) of the three upper result bands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandThresholds {
    pub top: f64,
    pub second: f64,
    pub third: f64,
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            top: 80.0,
            second: 60.0,
            third: 40.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultBand {
    Excellent,
    VeryGood,
    NotBad,
    Beginner,
}

impl ResultBand {
    #[must_use]
    pub fn from_percentage(percentage: f64, thresholds: &BandThresholds) -> Self {
        if percentage >= thresholds.top {
            Self::Excellent
        } else if percentage >= thresholds.second {
            Self::VeryGood
        } else if percentage >= thresholds.third {
            Self::NotBad
        } else {
            Self::Beginner
        }
    }

    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Excellent => "fas fa-trophy fa-4x text-warning",
            Self::VeryGood => "fas fa-medal fa-4x text-success",
            Self::NotBad => "fas fa-thumbs-up fa-4x text-primary",
            Self::Beginner => "fas fa-seedling fa-4x text-info",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent! 🏆",
            Self::VeryGood => "Very good! 🥇",
            Self::NotBad => "Not bad! 👍",
            Self::Beginner => "It's a start! 🌱",
        }
    }

    #[must_use]
    pub fn ring_color(self) -> &'static str {
        match self {
            Self::Excellent => "#28a745",
            Self::VeryGood => "#007bff",
            Self::NotBad => "#fd7e14",
            Self::Beginner => "#dc3545",
        }
    }

    /// Only the top band gets the confetti.
    #[must_use]
    pub fn celebrates(self) -> bool {
        self == Self::Excellent
    }
}

/// Everything the results screen shows, already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsPresentation {
    pub band: ResultBand,
    pub percentage: f64,
    pub percentage_label: String,
    pub fraction_label: String,
    pub level: String,
    pub message: String,
    pub completion_time: String,
}

impl ResultsPresentation {
    #[must_use]
    pub fn build(result: &QuizResult, elapsed_seconds: u64, thresholds: &BandThresholds) -> Self {
        let percentage = result.percentage.clamp(0.0, 100.0);
        Self {
            band: ResultBand::from_percentage(result.percentage, thresholds),
            percentage,
            percentage_label: format!("{}%", percentage.round()),
            fraction_label: format!("{}/{}", result.score, result.total),
            level: result.level.clone(),
            message: result.message.clone(),
            completion_time: format_completion_time(elapsed_seconds),
        }
    }

    /// Sweep of the score ring in degrees, starting at twelve o'clock.
    #[must_use]
    pub fn ring_sweep_degrees(&self) -> f64 {
        360.0 * self.percentage / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band(p: f64) -> ResultBand {
        ResultBand::from_percentage(p, &BandThresholds::default())
    }

    #[test]
    fn band_edges_are_inclusive_below() {
        assert_eq!(band(100.0), ResultBand::Excellent);
        assert_eq!(band(80.0), ResultBand::Excellent);
        assert_eq!(band(79.999), ResultBand::VeryGood);
        assert_eq!(band(60.0), ResultBand::VeryGood);
        assert_eq!(band(59.999), ResultBand::NotBad);
        assert_eq!(band(40.0), ResultBand::NotBad);
        assert_eq!(band(39.999), ResultBand::Beginner);
        assert_eq!(band(0.0), ResultBand::Beginner);
    }

    #[test]
    fn custom_thresholds_move_the_edges() {
        let thresholds = BandThresholds {
            top: 90.0,
            second: 70.0,
            third: 50.0,
        };
        assert_eq!(
            ResultBand::from_percentage(85.0, &thresholds),
            ResultBand::VeryGood
        );
    }

    #[test]
    fn result_ignores_extra_fields_and_requires_known_ones() {
        let parsed: QuizResult = serde_json::from_str(
            r#"{"success":true,"score":4,"total":5,"percentage":80.0,"message":"Great","level":"Eco Hero"}"#,
        )
        .unwrap();
        assert_eq!(parsed.score, 4);
        assert_eq!(parsed.level, "Eco Hero");

        let missing = serde_json::from_str::<QuizResult>(r#"{"score":4,"total":5}"#);
        assert!(missing.is_err());
    }

    #[test]
    fn presentation_formats_labels() {
        let result = QuizResult {
            score: 3,
            total: 5,
            percentage: 60.0,
            level: "Nature Guardian".into(),
            message: "Well done".into(),
        };
        let view = ResultsPresentation::build(&result, 75, &BandThresholds::default());
        assert_eq!(view.band, ResultBand::VeryGood);
        assert_eq!(view.percentage_label, "60%");
        assert_eq!(view.fraction_label, "3/5");
        assert_eq!(view.completion_time, "1:15");
        assert!((view.ring_sweep_degrees() - 216.0).abs() < f64::EPSILON);
        assert!(!view.band.celebrates());
    }

    #[test]
    fn non_finite_percentage_is_rejected() {
        let result = QuizResult {
            score: 0,
            total: 5,
            percentage: f64::NAN,
            level: String::new(),
            message: String::new(),
        };
        assert!(result.validate().is_err());
    }
}
