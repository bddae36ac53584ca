use services::PhaseKind;

use super::test_harness::setup_game_harness;
use crate::vm::GameIntent;

#[tokio::test(flavor = "current_thread")]
async fn start_screen_offers_the_start_action() {
    let mut harness = setup_game_harness(1);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Waku Waku Math"), "missing title in {html}");
    assert!(html.contains("Start!"), "missing start action in {html}");
    assert!(html.contains("Score"), "missing stat tiles in {html}");
    assert!(
        !html.contains("answer-input"),
        "input should not render before play in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn advancing_serves_a_question() {
    let mut harness = setup_game_harness(1);
    harness.rebuild();

    harness.handles.dispatch().call(GameIntent::Advance);
    harness.drive();

    let html = harness.render();
    assert!(html.contains("= ?"), "missing question in {html}");
    assert!(html.contains("answer-input"), "missing input in {html}");
    assert!(html.contains("Check answer"), "missing submit label in {html}");
    assert!(
        html.contains("5 more to clear level 1!"),
        "missing progress label in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn a_wrong_answer_reveals_the_correct_result() {
    let mut harness = setup_game_harness(1);
    harness.rebuild();
    harness.handles.dispatch().call(GameIntent::Advance);
    harness.drive();

    // Correct answers are never negative, so this is always wrong.
    harness
        .handles
        .dispatch()
        .call(GameIntent::SetPending("-1".to_string()));
    harness.handles.dispatch().call(GameIntent::SubmitAnswer);
    harness.drive();

    let html = harness.render();
    assert!(html.contains("Not quite"), "missing feedback in {html}");
    assert!(
        html.contains("feedback--incorrect"),
        "missing tone class in {html}"
    );
    assert!(
        html.contains("Answered 1 · 0% correct"),
        "missing summary in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn a_correct_answer_scores_points() {
    let mut harness = setup_game_harness(1);
    harness.rebuild();
    harness.handles.dispatch().call(GameIntent::Advance);
    harness.drive();

    let answer = {
        let vm = harness.handles.vm();
        let guard = vm.read();
        assert_eq!(guard.phase_kind(), PhaseKind::Playing);
        guard.problem().expect("a problem should be live").answer()
    };

    harness
        .handles
        .dispatch()
        .call(GameIntent::SetPending(answer.to_string()));
    harness.handles.dispatch().call(GameIntent::SubmitAnswer);
    harness.drive();

    let html = harness.render();
    assert!(html.contains("Correct! Great job!"), "missing praise in {html}");
    assert!(
        html.contains("feedback--correct"),
        "missing tone class in {html}"
    );
    assert!(
        html.contains("Answered 1 · 100% correct"),
        "missing summary in {html}"
    );
    assert!(html.contains("Next problem"), "missing advance label in {html}");

    let vm = harness.handles.vm();
    assert_eq!(vm.read().score(), 10);
}
