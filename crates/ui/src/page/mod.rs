//! Dioxus wiring for the site-wide enhancements.

mod clipboard;
mod counter;
mod links;
mod navbar;
mod notifications;
mod reveal;
pub(crate) mod scripts;

pub use clipboard::{CopyButton, EvalClipboard};
pub use counter::AnimatedCounter;
pub use links::SmoothLink;
pub use navbar::Navbar;
pub use notifications::{NotificationStack, push_notification};
pub use reveal::RevealCard;

use dioxus::document::eval;
use dioxus::prelude::*;

/// Bind hero stagger, tooltips and modal autofocus once the page is mounted.
pub fn use_page_enhancements() {
    use_effect(|| {
        let _ = eval(&scripts::page_enhancements_script());
    });
}
