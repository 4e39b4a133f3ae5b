//! Environment-free pieces of the page enhancements.
//!
//! The UI crate turns these into observers, listeners and components; the
//! arithmetic and the one-shot bookkeeping live here so they can be tested
//! without a webview.

mod anchors;
mod counter;
mod hero;
mod navbar;
mod reveal;

pub use anchors::anchor_target;
pub use counter::{
    COUNTER_OBSERVER, CounterAnimation, CounterFrames, CounterTracker, format_counter,
};
pub use hero::{HERO_SELECTORS, hero_delay};
pub use navbar::{NAVBAR_SCROLL_THRESHOLD, NavbarState};
pub use reveal::{REVEAL_OBSERVER, RevealKind, RevealState};

/// Intersection observer settings: visible ratio plus a bottom de-trigger band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub bottom_margin_px: u32,
}

impl ObserverOptions {
    /// `rootMargin` string for `IntersectionObserver`.
    #[must_use]
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }
}
