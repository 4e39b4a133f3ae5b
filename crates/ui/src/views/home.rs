use dioxus::prelude::*;
use dioxus_router::Link;

use eco_core::format::format_number;
use eco_core::page::RevealKind;
use services::facts::{fact_of_the_moment, tip_of_the_moment};

use crate::page::{AnimatedCounter, CopyButton, RevealCard, SmoothLink, use_page_enhancements};
use crate::routes::Route;

const OCEAN_PLASTIC_TONNES: f64 = 8_000_000.0;

#[component]
pub fn HomeView() -> Element {
    use_page_enhancements();
    let mut fact = use_signal(fact_of_the_moment);
    let tip = use_signal(tip_of_the_moment);
    let plastic = format_number(OCEAN_PLASTIC_TONNES);

    rsx! {
        section { class: "hero-section", id: "top",
            div { class: "container hero-content",
                h1 { class: "display-4", "Act today for tomorrow's planet" }
                p { class: "lead",
                    "Learn how everyday choices shape the climate, then test yourself with a five-question quiz."
                }
                div { class: "hero-buttons",
                    Link { class: "btn btn-success btn-lg".to_string(), to: Route::Quiz {},
                        i { class: "fas fa-play" }
                        " Take the quiz"
                    }
                    SmoothLink { href: "#facts", class: "btn btn-outline-light btn-lg", "Learn more" }
                }
            }
        }

        section { class: "stats-section container", id: "stats",
            div { class: "row",
                RevealCard { id: "stat-card-plastic", kind: RevealKind::Stat, class: "col-md-4",
                    AnimatedCounter { id: "stat-plastic", target: 8.0, suffix: "M t", label: "Plastic reaching the oceans each year" }
                }
                RevealCard { id: "stat-card-food", kind: RevealKind::Stat, class: "col-md-4",
                    AnimatedCounter { id: "stat-food", target: 33.0, suffix: "%", label: "Food produced that is never eaten" }
                }
                RevealCard { id: "stat-card-transport", kind: RevealKind::Stat, class: "col-md-4",
                    AnimatedCounter { id: "stat-transport", target: 24.0, suffix: "%", label: "CO2 emissions from transport" }
                }
            }
        }

        section { class: "features-section container", id: "facts",
            h2 { class: "section-title", "Why it matters" }
            div { class: "row",
                RevealCard { id: "feature-oceans", kind: RevealKind::Feature, class: "col-md-6",
                    i { class: "fas fa-water fa-2x" }
                    h3 { "Oceans" }
                    p { "About {plastic} tonnes of plastic end up in the sea every year." }
                }
                RevealCard { id: "feature-energy", kind: RevealKind::Feature, class: "col-md-6",
                    i { class: "fas fa-lightbulb fa-2x" }
                    h3 { "Energy" }
                    p { "An LED bulb uses about 80% less energy than an incandescent one." }
                }
            }

            RevealCard { id: "fun-fact", kind: RevealKind::FunFact,
                h3 { i { class: "fas fa-info-circle" } " Did you know?" }
                p { class: "fun-fact-text", "{fact}" }
                div { class: "fun-fact-actions",
                    button {
                        class: "btn btn-link",
                        r#type: "button",
                        onclick: move |_| fact.set(fact_of_the_moment()),
                        "Another fact"
                    }
                    CopyButton { text: fact().to_string(), label: "Copy fact" }
                }
            }
        }

        section { class: "actions-section container", id: "act",
            h2 { class: "section-title", "What you can do" }
            div { class: "row",
                RevealCard { id: "action-tip", kind: RevealKind::Action, class: "col-md-6",
                    h3 { i { class: "fas fa-seedling" } " Tip of the day" }
                    p { "{tip}" }
                }
                RevealCard { id: "info-quiz", kind: RevealKind::Info, class: "col-md-6",
                    h3 { i { class: "fas fa-question-circle" } " Ready to check?" }
                    p { "Five questions, about a minute. Your score tells you where you stand." }
                    Link { class: "btn btn-success".to_string(), to: Route::Quiz {}, "Start the quiz" }
                }
            }
        }
    }
}
