use std::time::Duration;

use chrono::{DateTime, Utc};

use eco_core::format::format_timer;
use eco_core::model::{
    QuestionId, QuizConfig, QuizError, QuizResult, QuizSession, ResultsPresentation,
    SubmissionState,
};
use eco_core::time::whole_seconds_between;

use super::submit::{QuizSubmitter, SubmissionRequest};
use super::view::QuizView;
use crate::Clock;
use crate::error::SubmitError;
use crate::notifications::NotificationKind;

const SUBMIT_FAILED_MESSAGE: &str = "Could not submit the quiz. Please try again.";

/// Token handed out by `select_answer`; the caller waits `delay` and then
/// passes it back to `auto_advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAdvance {
    epoch: u64,
    pub delay: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoAdvance {
    Advanced,
    FocusedSubmit,
    /// The attempt was restarted or locked in the meantime.
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Completed(ResultsPresentation),
    Failed,
    /// The response arrived for an attempt that is no longer submitting.
    Discarded,
}

/// State machine for one quiz widget.
///
/// `NotStarted → InProgress → Submitting → Completed | Failed`. A failed
/// attempt stays interactive with its answers; `restart` always begins a
/// fresh attempt. Every visible change goes through the injected `QuizView`.
pub struct QuizController<V> {
    config: QuizConfig,
    clock: Clock,
    view: V,
    session: QuizSession,
    ticking: bool,
    epoch: u64,
}

impl<V: QuizView> QuizController<V> {
    #[must_use]
    pub fn new(config: QuizConfig, clock: Clock, view: V) -> Self {
        Self {
            session: QuizSession::new(config.total_questions),
            config,
            clock,
            view,
            ticking: false,
            epoch: 0,
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    /// Begin a fresh attempt at question 1 and start the elapsed-time tick.
    pub fn start(&mut self) {
        if !self.view.is_mounted() {
            tracing::debug!("quiz view not mounted; skipping start");
            return;
        }

        let total = self.config.total_questions;
        self.session = QuizSession::started(total, self.clock.now());
        self.ticking = true;
        self.epoch += 1;

        self.view.set_progress(1, total);
        self.view.set_timer(&format_timer(0));
        self.view.show_question(1);
        tracing::info!(total_questions = total, "quiz started");
    }

    /// Refresh the elapsed time from the controller's clock.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        self.tick_at(now);
    }

    /// Refresh the elapsed time as of `now`. No-op once the tick is stopped.
    pub fn tick_at(&mut self, now: DateTime<Utc>) {
        if !self.ticking {
            return;
        }
        let Some(started_at) = self.session.started_at() else {
            return;
        };
        let elapsed = whole_seconds_between(started_at, now);
        self.session.set_elapsed_seconds(elapsed);
        self.view.set_timer(&format_timer(elapsed));
    }

    /// Record an answer and schedule the auto-advance.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` if the attempt is locked or the question has not
    /// been shown yet.
    pub fn select_answer(
        &mut self,
        question: QuestionId,
        value: &str,
    ) -> Result<PendingAdvance, QuizError> {
        self.session.record_answer(question, value)?;
        self.view.mark_selected(question, value);
        Ok(PendingAdvance {
            epoch: self.epoch,
            delay: self.config.auto_advance_delay,
        })
    }

    /// Complete a scheduled auto-advance: next question, or focus submit on the last one.
    pub fn auto_advance(&mut self, pending: PendingAdvance) -> AutoAdvance {
        if pending.epoch != self.epoch || self.session.state().is_locked() {
            return AutoAdvance::Ignored;
        }
        if self.session.is_last_question() {
            self.view.focus_submit();
            return AutoAdvance::FocusedSubmit;
        }
        self.next();
        AutoAdvance::Advanced
    }

    /// Move by `delta` questions, clamped to the quiz. Returns whether anything moved.
    pub fn go_to_question(&mut self, delta: i64) -> bool {
        let state = self.session.state();
        if state == SubmissionState::NotStarted || state.is_locked() {
            return false;
        }
        if !self.session.step(delta) {
            return false;
        }
        let current = self.session.current_question();
        self.view.show_question(current);
        self.view.set_progress(current, self.session.total_questions());
        true
    }

    pub fn next(&mut self) -> bool {
        self.go_to_question(1)
    }

    pub fn previous(&mut self) -> bool {
        self.go_to_question(-1)
    }

    /// Validate completeness, freeze the timer at its last tick and lock the attempt.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Incomplete` listing missing question numbers (the
    /// user is notified, nothing else changes), or `QuizError::Locked` /
    /// `QuizError::NotStarted` when no submit is possible.
    pub fn begin_submit(&mut self) -> Result<SubmissionRequest, QuizError> {
        let state = self.session.state();
        if state == SubmissionState::NotStarted {
            return Err(QuizError::NotStarted);
        }
        if !state.accepts_submit() {
            return Err(QuizError::Locked { state });
        }

        let missing = self.session.missing_questions();
        if !missing.is_empty() {
            let list = missing
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            self.view.notify(
                &format!("Please answer every question. Missing questions: {list}"),
                NotificationKind::Warning,
            );
            return Err(QuizError::Incomplete { missing });
        }

        self.ticking = false;
        self.session.set_state(SubmissionState::Submitting);
        self.view.set_submit_busy(true);

        tracing::info!(
            answered = self.session.answers().len(),
            elapsed_seconds = self.session.elapsed_seconds(),
            "submitting quiz"
        );
        Ok(SubmissionRequest {
            answers: self.session.answers().clone(),
            time_elapsed: self.session.elapsed_seconds(),
        })
    }

    /// Apply the submission response.
    pub fn finish_submit(&mut self, outcome: Result<QuizResult, SubmitError>) -> SubmitOutcome {
        if self.session.state() != SubmissionState::Submitting {
            tracing::debug!(state = ?self.session.state(), "dropping stale quiz response");
            return SubmitOutcome::Discarded;
        }

        match outcome {
            Ok(result) => {
                self.session.set_state(SubmissionState::Completed);
                SubmitOutcome::Completed(self.render_results(&result))
            }
            Err(err) => {
                tracing::warn!(error = %err, "quiz submission failed");
                self.session.set_state(SubmissionState::Failed);
                self.view.notify(SUBMIT_FAILED_MESSAGE, NotificationKind::Danger);
                self.view.set_submit_busy(false);
                SubmitOutcome::Failed
            }
        }
    }

    /// Submit the attempt through `submitter`. No retries.
    ///
    /// # Errors
    ///
    /// Returns the `begin_submit` errors; transport failures are reported
    /// as `SubmitOutcome::Failed` instead.
    pub async fn submit(
        &mut self,
        submitter: &dyn QuizSubmitter,
    ) -> Result<SubmitOutcome, QuizError> {
        let request = self.begin_submit()?;
        let outcome = submitter.submit(&request).await;
        Ok(self.finish_submit(outcome))
    }

    /// Show the results screen for `result`.
    pub fn render_results(&mut self, result: &QuizResult) -> ResultsPresentation {
        let presentation = ResultsPresentation::build(
            result,
            self.session.elapsed_seconds(),
            &self.config.bands,
        );
        self.view.show_results(&presentation);
        if presentation.band.celebrates() {
            self.view.celebrate();
        }
        presentation
    }

    /// Throw the current attempt away and start over.
    pub fn restart(&mut self) {
        self.ticking = false;
        self.epoch += 1;
        self.session = QuizSession::new(self.config.total_questions);
        self.view.reset();
        self.start();
    }
}
