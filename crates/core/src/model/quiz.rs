use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{BandThresholds, QuestionId};

/// Tunables for one quiz.
///
/// The band thresholds and the auto-advance delay are presentation choices,
/// so they live here instead of being baked into the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuizConfig {
    pub total_questions: u32,
    pub auto_advance_delay: Duration,
    pub tick_interval: Duration,
    pub bands: BandThresholds,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            total_questions: 5,
            auto_advance_delay: Duration::from_millis(800),
            tick_interval: Duration::from_secs(1),
            bands: BandThresholds::default(),
        }
    }
}

impl QuizConfig {
    #[must_use]
    pub fn with_total_questions(mut self, total: u32) -> Self {
        self.total_questions = total.max(1);
        self
    }

    #[must_use]
    pub fn with_auto_advance_delay(mut self, delay: Duration) -> Self {
        self.auto_advance_delay = delay;
        self
    }

    #[must_use]
    pub fn with_bands(mut self, bands: BandThresholds) -> Self {
        self.bands = bands;
        self
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("question {question} has not been shown yet")]
    QuestionNotShown { question: QuestionId },

    #[error("quiz is locked while {state:?}")]
    Locked { state: SubmissionState },

    #[error("quiz has not been started")]
    NotStarted,

    #[error("empty answer for question {question}")]
    EmptyAnswer { question: QuestionId },

    #[error("missing answers for questions {}", join_numbers(missing))]
    Incomplete { missing: Vec<u32> },
}

fn join_numbers(numbers: &[u32]) -> String {
    numbers
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Lifecycle of one quiz attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    NotStarted,
    InProgress,
    Submitting,
    Completed,
    Failed,
}

impl SubmissionState {
    /// Answers and navigation are frozen while a submission is in flight or done.
    #[must_use]
    pub fn is_locked(self) -> bool {
        matches!(self, Self::Submitting | Self::Completed)
    }

    /// States from which a submit may be attempted.
    #[must_use]
    pub fn accepts_submit(self) -> bool {
        matches!(self, Self::InProgress | Self::Failed)
    }
}

/// Mutable state of one quiz attempt.
///
/// Holds no references to any rendering environment; the controller in the
/// services crate drives it and mirrors every change into a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    total_questions: u32,
    current_question: u32,
    furthest_shown: u32,
    answers: BTreeMap<QuestionId, String>,
    elapsed_seconds: u64,
    state: SubmissionState,
    started_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    #[must_use]
    pub fn new(total_questions: u32) -> Self {
        Self {
            total_questions: total_questions.max(1),
            current_question: 1,
            furthest_shown: 1,
            answers: BTreeMap::new(),
            elapsed_seconds: 0,
            state: SubmissionState::NotStarted,
            started_at: None,
        }
    }

    /// A fresh attempt: question 1, no answers, no elapsed time.
    #[must_use]
    pub fn started(total_questions: u32, started_at: DateTime<Utc>) -> Self {
        Self {
            state: SubmissionState::InProgress,
            started_at: Some(started_at),
            ..Self::new(total_questions)
        }
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn current_question(&self) -> u32 {
        self.current_question
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current_question == self.total_questions
    }

    #[must_use]
    pub fn answers(&self) -> &BTreeMap<QuestionId, String> {
        &self.answers
    }

    #[must_use]
    pub fn answer(&self, question: QuestionId) -> Option<&str> {
        self.answers.get(&question).map(String::as_str)
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    #[must_use]
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn set_state(&mut self, state: SubmissionState) {
        self.state = state;
    }

    pub fn set_elapsed_seconds(&mut self, seconds: u64) {
        self.elapsed_seconds = seconds;
    }

    /// Record an answer, replacing any previous one for the same question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Locked` while submitting or completed,
    /// `QuizError::NotStarted` before the first start,
    /// `QuizError::QuestionNotShown` for a question the user cannot have seen,
    /// and `QuizError::EmptyAnswer` for an empty value.
    pub fn record_answer(
        &mut self,
        question: QuestionId,
        value: impl Into<String>,
    ) -> Result<(), QuizError> {
        if self.state == SubmissionState::NotStarted {
            return Err(QuizError::NotStarted);
        }
        if self.state.is_locked() {
            return Err(QuizError::Locked { state: self.state });
        }
        if question.number() > self.furthest_shown {
            return Err(QuizError::QuestionNotShown { question });
        }
        let value = value.into();
        if value.is_empty() {
            return Err(QuizError::EmptyAnswer { question });
        }
        self.answers.insert(question, value);
        Ok(())
    }

    /// Move the current question by `delta`, clamped to `[1, total]`.
    ///
    /// Returns `false` when the clamped target equals the current question.
    pub fn step(&mut self, delta: i64) -> bool {
        let target = i64::from(self.current_question)
            .saturating_add(delta)
            .clamp(1, i64::from(self.total_questions));
        let target = u32::try_from(target).unwrap_or(1);
        if target == self.current_question {
            return false;
        }
        self.current_question = target;
        self.furthest_shown = self.furthest_shown.max(target);
        true
    }

    /// Question numbers without an answer, ascending.
    #[must_use]
    pub fn missing_questions(&self) -> Vec<u32> {
        (1..=self.total_questions)
            .filter(|number| {
                !self
                    .answers
                    .iter()
                    .any(|(question, value)| question.number() == *number && !value.is_empty())
            })
            .collect()
    }
}
