use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use eco_core::model::{QuizConfig, QuizResult};
use eco_core::page::CounterTracker;
use eco_core::time::fixed_clock;
use services::{Clock, NotificationCenter, QuizSubmitter, SubmissionRequest, SubmitError};

use crate::context::{UiApp, build_app_context};
use crate::page::NotificationStack;
use crate::views::quiz::QuizTestHandles;
use crate::views::{HomeView, QuizPage};

/// Answers every submission with `reply`, or a 503 when there is none.
pub struct StubSubmitter {
    reply: Option<QuizResult>,
    pub requests: Mutex<Vec<SubmissionRequest>>,
}

impl StubSubmitter {
    pub fn replying(result: QuizResult) -> Self {
        Self {
            reply: Some(result),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl QuizSubmitter for StubSubmitter {
    async fn submit(&self, request: &SubmissionRequest) -> Result<QuizResult, SubmitError> {
        self.requests.lock().unwrap().push(request.clone());
        self.reply
            .clone()
            .ok_or_else(|| SubmitError::Other("service unavailable".to_string()))
    }
}

#[derive(Clone)]
struct TestApp {
    submitter: Arc<StubSubmitter>,
    clock: Clock,
}

impl UiApp for TestApp {
    fn quiz_config(&self) -> QuizConfig {
        QuizConfig::default()
    }

    fn clock(&self) -> Clock {
        self.clock
    }

    fn quiz_submitter(&self) -> Arc<dyn QuizSubmitter> {
        self.submitter.clone()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Quiz,
}

/// Whether the quiz page is mounted next to the banner stack.
#[derive(Clone, Copy)]
struct QuizMounted(Signal<bool>);

#[derive(Clone, Default)]
struct QuizMountedSlot(Rc<RefCell<Option<Signal<bool>>>>);

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    quiz_handles: Option<QuizTestHandles>,
    quiz_mounted: QuizMountedSlot,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| Signal::new(NotificationCenter::new(fixed_clock())));
    use_context_provider(|| Signal::new(CounterTracker::default()));
    use_context_provider(|| props.view);
    let QuizMounted(mounted) = use_context_provider(|| QuizMounted(Signal::new(true)));
    *props.quiz_mounted.0.borrow_mut() = Some(mounted);
    if let Some(handles) = props.quiz_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    let QuizMounted(mounted) = use_context::<QuizMounted>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Quiz => rsx! {
            if mounted() {
                QuizPage {}
            }
            NotificationStack {}
        },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub submitter: Arc<StubSubmitter>,
    pub quiz_handles: Option<QuizTestHandles>,
    quiz_mounted: QuizMountedSlot,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Unmount the quiz page, as navigating away would, keeping the banners.
    pub fn leave_quiz(&mut self) {
        let mounted = *self.quiz_mounted.0.borrow();
        if let Some(mut mounted) = mounted {
            self.dom.in_runtime(|| mounted.set(false));
        }
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Run `f` inside the dom's runtime, then let the dom catch up.
    pub fn act(&mut self, f: impl FnOnce(&QuizTestHandles)) {
        let handles = self.quiz_handles.clone().expect("quiz handles");
        self.dom.in_runtime(|| f(&handles));
        drive_dom(&mut self.dom);
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, submitter: StubSubmitter) -> ViewHarness {
    setup_view_harness_at(view, submitter, fixed_clock())
}

/// Like `setup_view_harness`, but the app clock reads `clock` while banners
/// are still stamped at the fixed test time.
pub fn setup_view_harness_at(
    view: ViewKind,
    submitter: StubSubmitter,
    clock: Clock,
) -> ViewHarness {
    let submitter = Arc::new(submitter);
    let quiz_handles = match view {
        ViewKind::Quiz => Some(QuizTestHandles::default()),
        ViewKind::Home => None,
    };
    let app = Arc::new(TestApp {
        submitter: Arc::clone(&submitter),
        clock,
    });

    let quiz_mounted = QuizMountedSlot::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            quiz_handles: quiz_handles.clone(),
            quiz_mounted: quiz_mounted.clone(),
        },
    );

    ViewHarness {
        dom,
        submitter,
        quiz_handles,
        quiz_mounted,
    }
}
