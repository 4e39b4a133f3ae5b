use rand::Rng;
use rand::seq::IndexedRandom;

use eco_core::content::{FACTS, TIPS};

#[must_use]
pub fn random_fact(rng: &mut impl Rng) -> &'static str {
    FACTS.choose(rng).copied().unwrap_or_default()
}

#[must_use]
pub fn random_tip(rng: &mut impl Rng) -> &'static str {
    TIPS.choose(rng).copied().unwrap_or_default()
}

/// A fact picked from the thread-local generator, for the home page.
#[must_use]
pub fn fact_of_the_moment() -> &'static str {
    random_fact(&mut rand::rng())
}

#[must_use]
pub fn tip_of_the_moment() -> &'static str {
    random_tip(&mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn picks_come_from_the_tables() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            assert!(FACTS.contains(&random_fact(&mut rng)));
            assert!(TIPS.contains(&random_tip(&mut rng)));
        }
    }
}
