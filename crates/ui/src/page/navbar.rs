use std::time::Duration;

use dioxus::document::eval;
use dioxus::prelude::*;
use dioxus_router::{Link, use_route};

use eco_core::format::current_page;
use eco_core::page::NavbarState;
use services::Debouncer;

use super::scripts::scroll_listener_script;
use crate::routes::Route;

const SCROLL_SETTLE: Duration = Duration::from_millis(10);

#[component]
pub fn Navbar() -> Element {
    let mut state = use_signal(NavbarState::default);
    let mut menu_open = use_signal(|| false);
    let debouncer = use_signal(|| Debouncer::<f64>::new(SCROLL_SETTLE));

    use_future(move || async move {
        let mut listener = eval(scroll_listener_script());
        while let Ok(scroll_y) = listener.recv::<f64>().await {
            let mut debouncer = debouncer;
            let ticket = debouncer.write().call(scroll_y);
            spawn(async move {
                tokio::time::sleep(ticket.wait).await;
                if let Some(scroll_y) = debouncer.write().fire(ticket) {
                    let next = NavbarState::from_scroll(scroll_y);
                    if *state.peek() != next {
                        state.set(next);
                    }
                }
            });
        }
    });

    let collapse_class = if menu_open() {
        "collapse navbar-collapse show"
    } else {
        "collapse navbar-collapse"
    };
    let page = current_page(&use_route::<Route>().to_string());
    let link_class = |name: &str| {
        if page == name { "nav-link active" } else { "nav-link" }
    };
    let home_class = link_class("index").to_string();
    let quiz_class = link_class("quiz").to_string();
    let close_menu = move |_: MouseEvent| menu_open.set(false);

    rsx! {
        nav { class: "{state().class()} navbar-expand-lg fixed-top", id: "main-navbar",
            div { class: "container",
                Link { class: "navbar-brand".to_string(), to: Route::Home {},
                    i { class: "fas fa-leaf" }
                    " EcoAlerte"
                }
                button {
                    class: "navbar-toggler",
                    r#type: "button",
                    aria_expanded: "{menu_open()}",
                    aria_label: "Toggle navigation",
                    onclick: move |_| menu_open.toggle(),
                    span { class: "navbar-toggler-icon" }
                }
                div { class: "{collapse_class}",
                    ul { class: "navbar-nav ms-auto",
                        li { class: "nav-item",
                            Link { class: home_class, to: Route::Home {}, onclick: close_menu, "Home" }
                        }
                        li { class: "nav-item",
                            Link { class: quiz_class, to: Route::Quiz {}, onclick: close_menu, "Quiz" }
                        }
                    }
                }
            }
        }
    }
}
