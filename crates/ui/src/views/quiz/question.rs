use dioxus::prelude::*;

use eco_core::content::QuizQuestion;
use eco_core::model::QuestionId;

fn option_class(selected: Option<&str>, value: &str) -> &'static str {
    if selected == Some(value) {
        "answer-option selected"
    } else {
        "answer-option"
    }
}

#[component]
pub(super) fn QuestionCard(
    question: QuizQuestion,
    active: bool,
    #[props(!optional)] selected: Option<String>,
    on_select: EventHandler<(QuestionId, String)>,
) -> Element {
    let Ok(id) = QuestionId::new(question.number) else {
        return rsx! {};
    };
    let card_class = if active { "question-card active" } else { "question-card" };

    rsx! {
        div { class: card_class, id: "question-{question.number}", hidden: !active,
            h3 { class: "question-title", "Question {question.number}" }
            p { class: "question-text", "{question.prompt}" }
            div { class: "answer-options", role: "radiogroup",
                for (value, text) in question.options.iter().copied() {
                    label { key: "{value}", class: option_class(selected.as_deref(), value),
                        input {
                            r#type: "radio",
                            name: "{id}",
                            value: "{value}",
                            checked: selected.as_deref() == Some(value),
                            onchange: move |_| on_select.call((id, value.to_string())),
                        }
                        span { class: "answer-text", "{text}" }
                    }
                }
            }
        }
    }
}
