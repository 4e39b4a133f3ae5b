use std::time::Duration;

use rand::Rng;
use rand::seq::IndexedRandom;

pub const CONFETTI_COLORS: &[&str] = &["#28a745", "#007bff", "#fd7e14", "#e83e8c", "#6f42c1"];
pub const CONFETTI_PIECES: usize = 50;
/// Fall animation length; the burst is removed afterwards.
pub const CONFETTI_LIFETIME: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    pub color: &'static str,
    pub left_percent: f64,
}

#[must_use]
pub fn confetti_burst(rng: &mut impl Rng) -> Vec<ConfettiPiece> {
    (0..CONFETTI_PIECES)
        .map(|_| ConfettiPiece {
            color: CONFETTI_COLORS.choose(rng).copied().unwrap_or("#28a745"),
            left_percent: rng.random_range(0.0..100.0),
        })
        .collect()
}

/// A burst drawn from the thread-local generator.
#[must_use]
pub fn random_burst() -> Vec<ConfettiPiece> {
    confetti_burst(&mut rand::rng())
}
