use dioxus::document::eval;
use dioxus::prelude::*;

use eco_core::page::anchor_target;

use super::scripts::scroll_into_view_script;

/// An in-page link that scrolls smoothly to its target; a bare `#` is left alone.
#[component]
pub fn SmoothLink(
    href: &'static str,
    #[props(default)] class: &'static str,
    children: Element,
) -> Element {
    let target = anchor_target(href);
    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            onclick: move |evt: MouseEvent| {
                if let Some(id) = target {
                    evt.prevent_default();
                    let _ = eval(&scroll_into_view_script(id));
                }
            },
            {children}
        }
    }
}
