//! Step 3 route: the finished newspaper

use dioxus::prelude::*;

use crate::state::Platform;
use crate::ui::presentation::components::newspaper::Newspaper;
use crate::ui::presentation::state::WizardState;
use crate::ui::views::Step3View;

#[component]
pub fn Step3Route() -> Element {
    let navigator = use_navigator();
    let platform = use_context::<Platform>();
    let mut session = use_context::<WizardState>().session;
    let mut view = use_signal(Step3View::new);

    // Runs once: nothing here subscribes to the session
    use_effect(move || {
        let parent_frame = platform.parent_frame();
        view.write().on_enter(&session.peek(), parent_frame.as_ref());
    });

    let page = view.read().page(&session.read());

    rsx! {
        div {
            class: "screen step3",
            Newspaper { page }
            div {
                class: "actions",
                span {}
                button {
                    class: "btn",
                    onclick: move |_| {
                        let route = view.write().start_new(&mut session.write());
                        navigator.push(route);
                    },
                    "Start a New Article"
                }
            }
        }
    }
}
