use dioxus::prelude::ReadableExt;
use eco_core::content::FACTS;
use eco_core::model::{QuestionId, QuizResult, SubmissionState};
use eco_core::time::fixed_clock;

use super::quiz::QuizIntent;
use super::test_harness::{StubSubmitter, ViewKind, setup_view_harness, setup_view_harness_at};

fn eco_hero() -> QuizResult {
    QuizResult {
        score: 4,
        total: 5,
        percentage: 80.0,
        level: "Eco Hero".to_string(),
        message: "Great".to_string(),
    }
}

fn q(n: u32) -> QuestionId {
    QuestionId::new(n).unwrap()
}

const ANSWERS: [&str; 5] = ["a", "b", "a", "c", "b"];

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_sections() {
    let mut harness = setup_view_harness(ViewKind::Home, StubSubmitter::failing());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Act today for tomorrow"), "missing hero in {html}");
    assert!(html.contains("Did you know?"), "missing fact card in {html}");
    assert!(FACTS.iter().any(|fact| html.contains(fact)), "missing fact in {html}");
    assert!(html.contains("About 8.0M tonnes"), "missing formatted number in {html}");
    assert!(html.contains("stat-card reveal"), "missing hidden stat card in {html}");
    assert!(!html.contains("is-revealed"), "cards revealed too early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_starts_on_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz, StubSubmitter::failing());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Question 1 of 5"), "missing counter in {html}");
    assert!(html.contains("0:00"), "missing timer in {html}");
    assert!(html.contains("question-card active"), "missing active card in {html}");
    assert!(html.contains("quiz-next"), "missing next button in {html}");
    assert!(!html.contains("quiz-submit"), "submit shown too early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_submits_and_shows_results() {
    let mut harness = setup_view_harness(ViewKind::Quiz, StubSubmitter::replying(eco_hero()));
    harness.rebuild();

    for (index, value) in ANSWERS.iter().enumerate() {
        let number = u32::try_from(index).unwrap() + 1;
        harness.act(|handles| {
            handles
                .dispatch()
                .call(QuizIntent::Select(q(number), (*value).to_string()));
        });
        if number < 5 {
            harness.act(|handles| handles.dispatch().call(QuizIntent::Next));
        }
    }
    let html = harness.render();
    assert!(html.contains("quiz-submit"), "missing submit button in {html}");

    harness.act(|handles| handles.dispatch().call(QuizIntent::Submit));
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("80%"), "missing percentage in {html}");
    assert!(html.contains("4/5"), "missing fraction in {html}");
    assert!(html.contains("Excellent!"), "missing title in {html}");
    assert!(html.contains("Eco Hero"), "missing level in {html}");
    assert!(
        html.contains(r#"class="fas fa-trophy fa-4x text-warning""#),
        "wrong band icon in {html}"
    );
    assert_eq!(html.matches("fa-4x").count(), 1, "duplicated icon size in {html}");

    let requests = harness.submitter.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].answers.len(), 5);
    assert_eq!(requests[0].answers.get(&q(4)).map(String::as_str), Some("c"));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_keeps_answers_after_failed_submit() {
    let mut harness = setup_view_harness(ViewKind::Quiz, StubSubmitter::failing());
    harness.rebuild();

    for (index, value) in ANSWERS.iter().enumerate() {
        let number = u32::try_from(index).unwrap() + 1;
        harness.act(|handles| {
            handles
                .dispatch()
                .call(QuizIntent::Select(q(number), (*value).to_string()));
            handles.dispatch().call(QuizIntent::Next);
        });
    }
    harness.act(|handles| handles.dispatch().call(QuizIntent::Submit));
    harness.drive_async().await;

    let controller = harness.quiz_handles.clone().unwrap().controller();
    let (state, answered) = harness.dom.in_runtime(|| {
        let controller = controller.peek();
        (controller.session().state(), controller.session().answers().len())
    });
    assert_eq!(state, SubmissionState::Failed);
    assert_eq!(answered, 5);

    let html = harness.render();
    assert!(html.contains("Could not submit the quiz"), "missing error banner in {html}");
    assert!(!html.contains("quiz-results"), "results shown after failure in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_warns_about_missing_answers() {
    let mut harness = setup_view_harness(ViewKind::Quiz, StubSubmitter::failing());
    harness.rebuild();

    harness.act(|handles| {
        handles
            .dispatch()
            .call(QuizIntent::Select(q(1), "a".to_string()));
    });
    harness.act(|handles| handles.dispatch().call(QuizIntent::Submit));

    let html = harness.render();
    assert!(
        html.contains("Missing questions: 2, 3, 4, 5"),
        "missing warning in {html}"
    );
    assert!(harness.submitter.requests.lock().unwrap().is_empty());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn warning_banner_expires_after_leaving_the_quiz() {
    let mut clock = fixed_clock();
    clock.advance(chrono::Duration::seconds(6));
    let mut harness = setup_view_harness_at(ViewKind::Quiz, StubSubmitter::failing(), clock);
    harness.rebuild();

    harness.act(|handles| handles.dispatch().call(QuizIntent::Submit));
    let html = harness.render();
    assert!(html.contains("Missing questions"), "missing warning in {html}");

    harness.leave_quiz();
    let html = harness.render();
    assert!(!html.contains("quiz-next"), "quiz still mounted in {html}");
    assert!(html.contains("Missing questions"), "banner dropped early in {html}");

    for _ in 0..20 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(!html.contains("Missing questions"), "banner never expired in {html}");
}
