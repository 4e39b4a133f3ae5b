mod page;
mod question;
mod results;

pub use page::QuizPage;
#[cfg(test)]
pub(crate) use page::{QuizIntent, QuizTestHandles};
