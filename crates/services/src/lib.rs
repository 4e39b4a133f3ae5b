#![forbid(unsafe_code)]

pub mod clipboard;
pub mod confetti;
pub mod debounce;
pub mod error;
pub mod facts;
pub mod notifications;
pub mod quiz;

pub use eco_core::Clock;

pub use clipboard::{ClipboardBackend, CopyMethod, copy_to_clipboard};
pub use debounce::{DebounceTicket, DebouncedFn, Debouncer};
pub use error::{ClipboardError, SubmitError};
pub use notifications::{Notification, NotificationCenter, NotificationId, NotificationKind};
pub use quiz::{
    AutoAdvance, HttpQuizSubmitter, PendingAdvance, QuizController, QuizSubmitter, QuizView,
    SubmissionRequest, SubmitConfig, SubmitOutcome,
};
