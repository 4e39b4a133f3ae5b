use std::collections::BTreeMap;

use eco_core::model::{QuestionId, ResultsPresentation};
use services::{NotificationKind, QuizView};

/// A message the controller raised that the page still has to display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingNotice {
    pub message: String,
    pub kind: NotificationKind,
}

/// Everything the quiz page renders, written by the controller through `QuizView`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuizScreenVm {
    visible_question: u32,
    current: u32,
    total: u32,
    timer_label: String,
    selections: BTreeMap<QuestionId, String>,
    submit_busy: bool,
    focus_submit_requests: u32,
    results: Option<ResultsPresentation>,
    celebrations: u32,
    outbox: Vec<PendingNotice>,
}

impl QuizScreenVm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn visible_question(&self) -> u32 {
        self.visible_question
    }

    #[must_use]
    pub fn current(&self) -> u32 {
        self.current
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn timer_label(&self) -> &str {
        &self.timer_label
    }

    #[must_use]
    pub fn selection(&self, question: QuestionId) -> Option<&str> {
        self.selections.get(&question).map(String::as_str)
    }

    #[must_use]
    pub fn submit_busy(&self) -> bool {
        self.submit_busy
    }

    /// Bumped every time the submit button should take focus.
    #[must_use]
    pub fn focus_submit_requests(&self) -> u32 {
        self.focus_submit_requests
    }

    #[must_use]
    pub fn results(&self) -> Option<&ResultsPresentation> {
        self.results.as_ref()
    }

    #[must_use]
    pub fn celebrations(&self) -> u32 {
        self.celebrations
    }

    /// Width of the progress bar, `0..=100`.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.current) / f64::from(self.total) * 100.0
    }

    #[must_use]
    pub fn prev_disabled(&self) -> bool {
        self.current <= 1
    }

    /// On the last question the next button gives way to submit.
    #[must_use]
    pub fn show_submit(&self) -> bool {
        self.total > 0 && self.current == self.total
    }

    pub fn take_notifications(&mut self) -> Vec<PendingNotice> {
        std::mem::take(&mut self.outbox)
    }
}

impl QuizView for QuizScreenVm {
    fn show_question(&mut self, question: u32) {
        self.visible_question = question;
    }

    fn set_progress(&mut self, current: u32, total: u32) {
        self.current = current;
        self.total = total;
    }

    fn set_timer(&mut self, label: &str) {
        label.clone_into(&mut self.timer_label);
    }

    fn mark_selected(&mut self, question: QuestionId, value: &str) {
        self.selections.insert(question, value.to_string());
    }

    fn focus_submit(&mut self) {
        self.focus_submit_requests += 1;
    }

    fn set_submit_busy(&mut self, busy: bool) {
        self.submit_busy = busy;
    }

    fn notify(&mut self, message: &str, kind: NotificationKind) {
        self.outbox.push(PendingNotice {
            message: message.to_string(),
            kind,
        });
    }

    fn show_results(&mut self, results: &ResultsPresentation) {
        self.results = Some(results.clone());
    }

    fn celebrate(&mut self) {
        self.celebrations += 1;
    }

    fn reset(&mut self) {
        self.selections.clear();
        self.results = None;
        self.submit_busy = false;
        self.outbox.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eco_core::time::fixed_clock;
    use eco_core::model::QuizConfig;
    use services::QuizController;

    fn q(n: u32) -> QuestionId {
        QuestionId::new(n).unwrap()
    }

    #[test]
    fn start_shows_first_question_with_fresh_timer() {
        let mut controller =
            QuizController::new(QuizConfig::default(), fixed_clock(), QuizScreenVm::new());
        controller.start();

        let vm = controller.view();
        assert_eq!(vm.visible_question(), 1);
        assert_eq!(vm.timer_label(), "0:00");
        assert!(vm.prev_disabled());
        assert!(!vm.show_submit());
        assert!((vm.progress_percent() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn last_question_swaps_next_for_submit() {
        let mut controller =
            QuizController::new(QuizConfig::default(), fixed_clock(), QuizScreenVm::new());
        controller.start();
        for _ in 0..4 {
            assert!(controller.next());
        }

        let vm = controller.view();
        assert_eq!(vm.current(), 5);
        assert!(vm.show_submit());
        assert!(!vm.prev_disabled());
    }

    #[test]
    fn incomplete_submit_queues_a_warning_once() {
        let mut controller =
            QuizController::new(QuizConfig::default(), fixed_clock(), QuizScreenVm::new());
        controller.start();
        controller.select_answer(q(1), "b").unwrap();
        assert!(controller.begin_submit().is_err());

        let notices = controller.view_mut().take_notifications();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NotificationKind::Warning);
        assert!(notices[0].message.ends_with("2, 3, 4, 5"));
        assert!(controller.view_mut().take_notifications().is_empty());
    }

    #[test]
    fn reset_clears_selections_and_results() {
        let mut vm = QuizScreenVm::new();
        vm.mark_selected(q(2), "c");
        vm.set_submit_busy(true);
        assert_eq!(vm.selection(q(2)), Some("c"));

        vm.reset();
        assert_eq!(vm.selection(q(2)), None);
        assert!(!vm.submit_busy());
        assert!(vm.results().is_none());
    }
}
