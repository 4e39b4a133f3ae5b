use std::f64::consts::PI;

use dioxus::prelude::*;

use eco_core::model::ResultsPresentation;
use services::confetti::ConfettiPiece;

const RING_RADIUS: f64 = 80.0;

/// Length of the visible arc and of the whole ring, for `stroke-dasharray`.
fn ring_dash(results: &ResultsPresentation) -> (f64, f64) {
    let circumference = 2.0 * PI * RING_RADIUS;
    (circumference * results.ring_sweep_degrees() / 360.0, circumference)
}

#[component]
pub(crate) fn ResultsPanel(results: ResultsPresentation, on_restart: EventHandler<()>) -> Element {
    let (arc, circumference) = ring_dash(&results);
    let band = results.band;

    rsx! {
        section { class: "results-section", id: "quiz-results",
            div { class: "results-header",
                i { class: "{band.icon_class()}", id: "results-emoji" }
                h2 { id: "results-title", "{band.title()}" }
            }
            div { class: "score-ring",
                svg { width: "200", height: "200", view_box: "0 0 200 200",
                    circle { cx: "100", cy: "100", r: "{RING_RADIUS}", fill: "none", stroke: "#e9ecef", stroke_width: "12" }
                    circle {
                        cx: "100",
                        cy: "100",
                        r: "{RING_RADIUS}",
                        fill: "none",
                        stroke: "{band.ring_color()}",
                        stroke_width: "12",
                        stroke_linecap: "round",
                        stroke_dasharray: "{arc:.2} {circumference:.2}",
                        transform: "rotate(-90 100 100)",
                    }
                }
                div { class: "score-ring__label",
                    span { id: "score-percentage", "{results.percentage_label}" }
                    span { id: "score-fraction", "{results.fraction_label}" }
                }
            }
            p { class: "eco-level", id: "eco-level", "{results.level}" }
            p { class: "results-message", id: "results-message", "{results.message}" }
            div { class: "completion-time",
                small { class: "text-muted",
                    i { class: "fas fa-clock" }
                    " Completion time: {results.completion_time}"
                }
            }
            button {
                class: "btn btn-success btn-lg",
                id: "quiz-restart",
                r#type: "button",
                onclick: move |_| on_restart.call(()),
                i { class: "fas fa-redo" }
                " Try again"
            }
        }
    }
}

#[component]
pub(super) fn Confetti(pieces: Vec<ConfettiPiece>) -> Element {
    rsx! {
        div { class: "confetti-layer", aria_hidden: "true",
            for (index, piece) in pieces.iter().enumerate() {
                div {
                    key: "{index}",
                    class: "confetti-piece",
                    style: "background: {piece.color}; left: {piece.left_percent:.2}%;",
                }
            }
        }
    }
}
