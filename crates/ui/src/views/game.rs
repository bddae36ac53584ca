use dioxus::document::eval;
use dioxus::prelude::*;
use keyboard_types::Key;

use services::PhaseKind;

use crate::context::AppContext;
use crate::theme::LevelTheme;
use crate::vm::{GameIntent, GameVm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// How long the feedback banner keeps its pop-in class.
const FEEDBACK_FLASH_MS: u64 = 500;

fn focus_target_for_phase(kind: PhaseKind) -> &'static str {
    match kind {
        PhaseKind::Playing => "answer-input",
        PhaseKind::Start | PhaseKind::Feedback | PhaseKind::LevelUp => "action-button",
    }
}

#[component]
pub fn GameView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_signal(|| GameVm::new(ctx.start_level(), ctx.seed()));
    let flash = use_signal(|| false);
    let mut last_focus = use_signal(|| None::<PhaseKind>);

    let dispatch = use_callback(move |intent: GameIntent| {
        let mut vm = vm;
        let evaluated = matches!(intent, GameIntent::SubmitAnswer);
        vm.write().dispatch(intent);

        // The flash timer toggles a purely visual flag; game state is
        // settled before it is even scheduled.
        if evaluated && vm.read().feedback().is_some() {
            let mut flash = flash;
            flash.set(true);
            spawn(async move {
                tokio::time::sleep(std::time::Duration::from_millis(FEEDBACK_FLASH_MS)).await;
                flash.set(false);
            });
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<GameTestHandles>() {
                handles.register(dispatch, vm);
            }
        }
    }

    use_effect(move || {
        let kind = vm.read().phase_kind();
        if last_focus() == Some(kind) {
            return;
        }
        last_focus.set(Some(kind));
        let target = focus_target_for_phase(kind);
        let js = format!("document.getElementById({target:?})?.focus();");
        let _ = eval(&js);
    });

    let on_action = use_callback(move |()| {
        let intent = match vm.read().phase_kind() {
            PhaseKind::Playing => GameIntent::SubmitAnswer,
            _ => GameIntent::Advance,
        };
        dispatch.call(intent);
    });

    let on_root_key = use_callback(move |evt: KeyboardEvent| {
        if evt.data.key() != Key::Enter {
            return;
        }
        let kind = vm.read().phase_kind();
        if matches!(
            kind,
            PhaseKind::Start | PhaseKind::Feedback | PhaseKind::LevelUp
        ) {
            evt.prevent_default();
            dispatch.call(GameIntent::Advance);
        }
    });

    let on_input_key = use_callback(move |evt: KeyboardEvent| {
        if evt.data.key() == Key::Enter {
            evt.prevent_default();
            // Keep the submit keystroke from reaching the root handler,
            // which would advance straight past the feedback it just caused.
            evt.stop_propagation();
            dispatch.call(GameIntent::SubmitAnswer);
        }
    });

    let vm_guard = vm.read();
    let kind = vm_guard.phase_kind();
    let theme = LevelTheme::for_level(vm_guard.level());
    let score = vm_guard.score();
    let level = vm_guard.level();
    let streak = vm_guard.streak();
    let question = vm_guard.problem().map(|p| p.question_text().to_string());
    let pending = vm_guard.pending_answer().to_string();
    let feedback = vm_guard.feedback().cloned();
    let banner = vm_guard.banner().map(ToString::to_string);
    let action_label = vm_guard.action_label();
    let can_act = vm_guard.can_act();
    let progress_style = format!("width: {:.0}%;", vm_guard.progress().fraction() * 100.0);
    let remaining_label = vm_guard.remaining_label();
    let summary_line = vm_guard.summary_line();
    drop(vm_guard);

    let feedback_class = feedback.as_ref().map_or_else(String::new, |feedback| {
        let tone = if feedback.outcome.is_correct() {
            "feedback--correct"
        } else {
            "feedback--incorrect"
        };
        let pop = if flash() { " feedback--flash" } else { "" };
        format!("feedback {tone}{pop}")
    });

    rsx! {
        div {
            class: "page game-page {theme.css_class}",
            id: "game-root",
            tabindex: "0",
            onkeydown: on_root_key,
            div { class: "game-card", role: "application",
                header { class: "game-card__header",
                    h1 { class: "game-card__title", "Waku Waku Math" }
                }
                div { class: "stats", aria_live: "polite",
                    StatTile { label: "Score", value: score.to_string() }
                    StatTile { label: "Level", value: level.to_string() }
                    StatTile { label: "Streak", value: streak.to_string() }
                }
                if kind == PhaseKind::Start {
                    div { class: "welcome",
                        span { class: "mascot", aria_hidden: "true", "{theme.mascot_emoji}" }
                        p { class: "welcome__text",
                            "Solve problems, build streaks, clear all five levels!"
                        }
                    }
                }
                if let Some(question) = question {
                    div { class: "question-area",
                        span { class: "mascot", aria_hidden: "true", "{theme.mascot_emoji}" }
                        p {
                            class: "question",
                            id: "question-text",
                            aria_live: "polite",
                            "{question}"
                        }
                        input {
                            class: "answer-input",
                            id: "answer-input",
                            r#type: "number",
                            value: "{pending}",
                            placeholder: "Your answer",
                            aria_label: "Answer entry",
                            aria_describedby: "question-text",
                            disabled: kind != PhaseKind::Playing,
                            oninput: move |evt| dispatch.call(GameIntent::SetPending(evt.value())),
                            onkeydown: on_input_key,
                        }
                    }
                }
                if let Some(banner) = banner {
                    p { class: "banner", role: "status", "{banner}" }
                }
                if let Some(feedback) = feedback {
                    p {
                        class: "{feedback_class}",
                        role: "alert",
                        aria_live: "assertive",
                        "{feedback.message}"
                    }
                }
                div { class: "action-row",
                    ActionButton {
                        label: action_label,
                        disabled: !can_act,
                        on_press: on_action,
                    }
                }
                if kind != PhaseKind::Start {
                    div { class: "progress-track", aria_hidden: "true",
                        div { class: "progress-fill", style: "{progress_style}" }
                    }
                    p { class: "progress-label", aria_live: "polite", "{remaining_label}" }
                }
                footer { class: "game-card__footer", "{summary_line}" }
            }
        }
    }
}

#[component]
fn StatTile(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "stat",
            span { class: "stat__label", "{label}" }
            span { class: "stat__value", "{value}" }
        }
    }
}

#[component]
fn ActionButton(label: &'static str, disabled: bool, on_press: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "action-button",
            id: "action-button",
            r#type: "button",
            disabled: disabled,
            onclick: move |_| on_press.call(()),
            "{label}"
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct GameTestHandles {
    dispatch: Rc<RefCell<Option<Callback<GameIntent>>>>,
    vm: Rc<RefCell<Option<Signal<GameVm>>>>,
}

#[cfg(test)]
impl GameTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<GameIntent>, vm: Signal<GameVm>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<GameIntent> {
        (*self.dispatch.borrow()).expect("game dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<GameVm> {
        (*self.vm.borrow()).expect("game vm registered")
    }
}
