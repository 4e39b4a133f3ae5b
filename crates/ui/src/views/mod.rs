mod home;
mod quiz;

pub use home::HomeView;
pub use quiz::QuizPage;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
