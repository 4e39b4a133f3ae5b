use std::sync::Arc;

use eco_core::model::QuizConfig;
use services::{Clock, QuizSubmitter};

pub trait UiApp: Send + Sync {
    fn quiz_config(&self) -> QuizConfig;
    fn clock(&self) -> Clock;

    fn quiz_submitter(&self) -> Arc<dyn QuizSubmitter>;
}

#[derive(Clone)]
pub struct AppContext {
    quiz_config: QuizConfig,
    clock: Clock,
    quiz_submitter: Arc<dyn QuizSubmitter>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_config: app.quiz_config(),
            clock: app.clock(),
            quiz_submitter: app.quiz_submitter(),
        }
    }

    #[must_use]
    pub fn quiz_config(&self) -> QuizConfig {
        self.quiz_config
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn quiz_submitter(&self) -> Arc<dyn QuizSubmitter> {
        Arc::clone(&self.quiz_submitter)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
