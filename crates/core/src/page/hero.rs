use std::time::Duration;

/// Hero elements in entrance order.
pub const HERO_SELECTORS: &[&str] = &[".hero-content h1", ".hero-content p", ".hero-buttons"];

/// Entrance delay for the `index`-th hero element.
#[must_use]
pub fn hero_delay(index: usize) -> Duration {
    let index = u64::try_from(index).unwrap_or(u64::MAX / 200);
    Duration::from_millis(index.saturating_mul(200).saturating_add(300))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger() {
        assert_eq!(hero_delay(0), Duration::from_millis(300));
        assert_eq!(hero_delay(2), Duration::from_millis(700));
    }
}
