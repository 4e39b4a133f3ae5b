use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use eco_core::page::CounterTracker;
use services::NotificationCenter;

use crate::context::AppContext;
use crate::page::{Navbar, NotificationStack};
use crate::views::{HomeView, QuizPage};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/quiz", QuizPage)] Quiz {},
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let clock = ctx.clock();
    use_context_provider(|| Signal::new(NotificationCenter::new(clock)));
    use_context_provider(|| Signal::new(CounterTracker::default()));

    rsx! {
        Navbar {}
        main { class: "content",
            Outlet::<Route> {}
        }
        footer { class: "footer",
            div { class: "container",
                p { "EcoAlerte · Small steps, big impact." }
            }
        }
        NotificationStack {}
    }
}
