use dioxus::document::eval;
use dioxus::prelude::*;

use eco_core::content::QUESTIONS;
use eco_core::model::QuestionId;
use services::confetti::{CONFETTI_LIFETIME, ConfettiPiece, random_burst};
use services::{AutoAdvance, NotificationCenter, QuizController, SubmitOutcome};

use super::question::QuestionCard;
use super::results::{Confetti, ResultsPanel};
use crate::context::AppContext;
use crate::page::push_notification;
use crate::page::scripts::{
    focus_first_answer_script, focus_script, scroll_into_view_script, scroll_to_top_script,
};
use crate::vm::QuizScreenVm;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

const SUBMIT_BUTTON_ID: &str = "quiz-submit";
const RESULTS_ID: &str = "quiz-results";

type Controller = QuizController<QuizScreenVm>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum QuizIntent {
    Select(QuestionId, String),
    Next,
    Previous,
    Submit,
    Restart,
}

/// Move controller notifications into the page banners.
fn flush_notices(mut controller: Signal<Controller>, center: Signal<NotificationCenter>) {
    let notices = controller.write().view_mut().take_notifications();
    for notice in notices {
        push_notification(center, notice.message, notice.kind);
    }
}

#[component]
pub fn QuizPage() -> Element {
    let ctx = use_context::<AppContext>();
    let center = use_context::<Signal<NotificationCenter>>();
    let config = ctx.quiz_config();
    let clock = ctx.clock();
    let submitter = ctx.quiz_submitter();

    let controller = use_signal(move || {
        let mut controller = QuizController::new(config, clock, QuizScreenVm::new());
        controller.start();
        controller
    });
    let confetti = use_signal(|| None::<Vec<ConfettiPiece>>);

    use_effect(|| {
        let _ = eval(focus_first_answer_script());
    });

    use_future(move || async move {
        let mut controller = controller;
        loop {
            tokio::time::sleep(config.tick_interval).await;
            if controller.peek().is_ticking() {
                controller.write().tick();
            }
        }
    });

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut controller = controller;
        let mut confetti = confetti;

        match intent {
            QuizIntent::Select(question, value) => {
                let pending = match controller.write().select_answer(question, &value) {
                    Ok(pending) => pending,
                    Err(err) => {
                        tracing::debug!(error = %err, "answer ignored");
                        return;
                    }
                };
                spawn(async move {
                    tokio::time::sleep(pending.delay).await;
                    if controller.write().auto_advance(pending) == AutoAdvance::FocusedSubmit {
                        let _ = eval(&focus_script(SUBMIT_BUTTON_ID));
                    }
                });
            }
            QuizIntent::Next => {
                controller.write().next();
            }
            QuizIntent::Previous => {
                controller.write().previous();
            }
            QuizIntent::Submit => {
                let request = controller.write().begin_submit();
                flush_notices(controller, center);
                let request = match request {
                    Ok(request) => request,
                    Err(err) => {
                        tracing::debug!(error = %err, "quiz not submitted");
                        return;
                    }
                };
                let submitter = submitter.clone();
                spawn(async move {
                    let response = submitter.submit(&request).await;
                    let celebrations = controller.peek().view().celebrations();
                    let outcome = controller.write().finish_submit(response);
                    flush_notices(controller, center);
                    if !matches!(outcome, SubmitOutcome::Completed(_)) {
                        return;
                    }
                    let _ = eval(&scroll_into_view_script(RESULTS_ID));
                    if controller.peek().view().celebrations() > celebrations {
                        confetti.set(Some(random_burst()));
                        spawn(async move {
                            tokio::time::sleep(CONFETTI_LIFETIME).await;
                            confetti.set(None);
                        });
                    }
                });
            }
            QuizIntent::Restart => {
                controller.write().restart();
                confetti.set(None);
                let _ = eval(scroll_to_top_script());
                let _ = eval(focus_first_answer_script());
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, controller);
            }
        }
    }

    let on_key = move |evt: KeyboardEvent| {
        let modifiers = evt.modifiers();
        if modifiers.contains(Modifiers::CONTROL) || modifiers.contains(Modifiers::SHIFT) {
            return;
        }
        match evt.key() {
            Key::ArrowRight => dispatch_intent.call(QuizIntent::Next),
            Key::ArrowLeft => dispatch_intent.call(QuizIntent::Previous),
            _ => {}
        }
    };

    let vm = controller.read().view().clone();
    let total = vm.total();
    let progress_label = format!("Question {} of {total}", vm.current());
    let progress_style = format!("width: {:.0}%;", vm.progress_percent());
    let submit_label = if vm.submit_busy() { " Submitting..." } else { " Finish the quiz" };
    let pieces = confetti();

    rsx! {
        div { class: "page quiz-page container", id: "quiz-root", tabindex: "0", onkeydown: on_key,
            header { class: "quiz-header",
                h1 { class: "quiz-title", "Environment quiz" }
                div { class: "quiz-meta",
                    span { class: "quiz-counter", id: "question-counter", "{progress_label}" }
                    span { class: "quiz-timer", id: "quiz-timer",
                        i { class: "fas fa-clock" }
                        " {vm.timer_label()}"
                    }
                }
                div { class: "progress",
                    div {
                        class: "progress-bar bg-success",
                        role: "progressbar",
                        style: "{progress_style}",
                        aria_valuenow: "{vm.current()}",
                        aria_valuemin: "0",
                        aria_valuemax: "{total}",
                    }
                }
            }

            if let Some(results) = vm.results().cloned() {
                ResultsPanel {
                    results,
                    on_restart: move |()| dispatch_intent.call(QuizIntent::Restart),
                }
            } else {
                div { class: "quiz-container", id: "quiz-container",
                    for question in QUESTIONS.iter().take(total as usize).copied() {
                        QuestionCard {
                            key: "{question.number}",
                            question,
                            active: vm.visible_question() == question.number,
                            selected: QuestionId::new(question.number)
                                .ok()
                                .and_then(|id| vm.selection(id))
                                .map(str::to_string),
                            on_select: move |(id, value): (QuestionId, String)| dispatch_intent.call(QuizIntent::Select(id, value)),
                        }
                    }
                }
                nav { class: "quiz-navigation",
                    button {
                        class: "btn btn-outline-secondary",
                        id: "quiz-prev",
                        r#type: "button",
                        disabled: vm.prev_disabled(),
                        onclick: move |_| dispatch_intent.call(QuizIntent::Previous),
                        i { class: "fas fa-arrow-left" }
                        " Previous"
                    }
                    if vm.show_submit() {
                        button {
                            class: "btn btn-success",
                            id: SUBMIT_BUTTON_ID,
                            r#type: "button",
                            disabled: vm.submit_busy(),
                            onclick: move |_| dispatch_intent.call(QuizIntent::Submit),
                            if vm.submit_busy() {
                                i { class: "fas fa-spinner fa-spin" }
                            } else {
                                i { class: "fas fa-check" }
                            }
                            "{submit_label}"
                        }
                    } else {
                        button {
                            class: "btn btn-success",
                            id: "quiz-next",
                            r#type: "button",
                            onclick: move |_| dispatch_intent.call(QuizIntent::Next),
                            "Next "
                            i { class: "fas fa-arrow-right" }
                        }
                    }
                }
            }

            if let Some(pieces) = pieces {
                Confetti { pieces }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    controller: Rc<RefCell<Option<Signal<Controller>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, controller: Signal<Controller>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.controller.borrow_mut() = Some(controller);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn controller(&self) -> Signal<Controller> {
        (*self.controller.borrow()).expect("quiz controller registered")
    }
}
