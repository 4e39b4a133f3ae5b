use dioxus::document::eval;
use dioxus::prelude::*;

use eco_core::page::{COUNTER_OBSERVER, CounterAnimation, CounterTracker, format_counter};

use super::scripts::visibility_script;

/// A statistic that counts up from zero the first time it scrolls into view.
#[component]
pub fn AnimatedCounter(
    id: &'static str,
    target: f64,
    #[props(default)] suffix: &'static str,
    label: &'static str,
) -> Element {
    let mut tracker = use_context::<Signal<CounterTracker>>();
    let mut text = use_signal(move || {
        let start = if tracker.peek().has_fired(id) { target } else { 0.0 };
        format_counter(start, target)
    });

    use_future(move || async move {
        if tracker.peek().has_fired(id) {
            return;
        }
        let mut visible = eval(&visibility_script(id, COUNTER_OBSERVER));
        if !matches!(visible.recv::<bool>().await, Ok(true)) {
            return;
        }
        if !tracker.write().trigger(id) {
            return;
        }
        let animation = CounterAnimation::new(target);
        for frame in animation.frames() {
            text.set(frame);
            tokio::time::sleep(animation.frame_interval()).await;
        }
    });

    rsx! {
        div { class: "stat-number",
            span { id: "{id}", "{text}" }
            "{suffix}"
        }
        p { class: "stat-label", "{label}" }
    }
}
