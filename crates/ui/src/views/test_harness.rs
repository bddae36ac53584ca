use dioxus::core::NoOpMutations;
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::game::GameTestHandles;
use crate::views::GameView;

/// Seed for harness sessions; the smoke tests read the live problem back
/// through the handles instead of predicting draws.
const HARNESS_SEED: u64 = 11;

#[derive(Props, Clone)]
struct GameHarnessProps {
    start_level: u32,
    handles: GameTestHandles,
}

impl PartialEq for GameHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for GameHarnessProps {}

#[component]
fn GameHarness(props: GameHarnessProps) -> Element {
    use_context_provider(|| AppContext::new(props.start_level, Some(HARNESS_SEED)));
    use_context_provider(|| props.handles.clone());
    rsx! { GameView {} }
}

pub struct GameViewHarness {
    pub dom: VirtualDom,
    pub handles: GameTestHandles,
}

impl GameViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn drive(&mut self) {
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_game_harness(start_level: u32) -> GameViewHarness {
    let handles = GameTestHandles::default();
    let dom = VirtualDom::new_with_props(
        GameHarness,
        GameHarnessProps {
            start_level,
            handles: handles.clone(),
        },
    );

    GameViewHarness { dom, handles }
}
