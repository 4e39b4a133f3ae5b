mod quiz_vm;

pub use quiz_vm::{PendingNotice, QuizScreenVm};
