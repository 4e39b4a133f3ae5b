use dioxus::document::eval;
use dioxus::prelude::*;

use eco_core::page::{REVEAL_OBSERVER, RevealKind, RevealState};

use super::scripts::visibility_script;

/// A card that fades in once it is 10% visible and stays shown.
#[component]
pub fn RevealCard(
    id: &'static str,
    kind: RevealKind,
    #[props(default)] class: &'static str,
    children: Element,
) -> Element {
    let mut state = use_signal(RevealState::default);

    use_future(move || async move {
        let mut visible = eval(&visibility_script(id, REVEAL_OBSERVER));
        if let Ok(intersecting) = visible.recv::<bool>().await {
            let next = state.peek().observe(intersecting);
            state.set(next);
        }
    });

    let revealed = if state().is_revealed() { " is-revealed" } else { "" };
    rsx! {
        div { class: "{kind.class()} reveal{revealed} {class}", id: "{id}",
            {children}
        }
    }
}
