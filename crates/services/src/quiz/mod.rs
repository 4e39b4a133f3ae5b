mod controller;
mod submit;
mod view;

pub use controller::{AutoAdvance, PendingAdvance, QuizController, SubmitOutcome};
pub use submit::{
    DEFAULT_API_URL, HttpQuizSubmitter, QuizSubmitter, SUBMIT_PATH, SubmissionRequest,
    SubmitConfig, parse_result,
};
pub use view::QuizView;
