use eco_core::model::{QuestionId, ResultsPresentation};

use crate::notifications::NotificationKind;

/// Rendering capability the quiz controller drives.
///
/// The controller never looks anything up in the page; whatever renders the
/// quiz implements this trait, and tests plug in a recording fake.
pub trait QuizView {
    /// Whether the anchors the quiz needs are present. When this is `false`
    /// the controller does nothing on start.
    fn is_mounted(&self) -> bool {
        true
    }

    /// Make `question` the only visible question card.
    fn show_question(&mut self, question: u32);

    /// Counter, progress bar and prev/next/submit visibility.
    fn set_progress(&mut self, current: u32, total: u32);

    /// Running timer label, already formatted.
    fn set_timer(&mut self, label: &str);

    /// Highlight `value` as the chosen option of `question`.
    fn mark_selected(&mut self, question: QuestionId, value: &str);

    fn focus_submit(&mut self);

    /// Disable the submit action and show a busy label, or restore it.
    fn set_submit_busy(&mut self, busy: bool);

    fn notify(&mut self, message: &str, kind: NotificationKind);

    /// Hide the question flow and show the results screen.
    fn show_results(&mut self, results: &ResultsPresentation);

    fn celebrate(&mut self);

    /// Clear selections, hide results and show the question flow again.
    fn reset(&mut self);
}
