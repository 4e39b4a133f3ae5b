mod ids;
mod quiz;
mod result;

pub use ids::{QuestionId, QuestionIdError};
pub use quiz::{QuizConfig, QuizError, QuizSession, SubmissionState};
pub use result::{BandThresholds, QuizResult, ResultBand, ResultError, ResultsPresentation};
