//! Intro screen route

use dioxus::prelude::*;

use crate::ui::presentation::state::WizardState;
use crate::ui::views::IntroView;

#[component]
pub fn IntroRoute() -> Element {
    let navigator = use_navigator();
    let mut session = use_context::<WizardState>().session;
    let mut view = use_signal(IntroView::new);
    let mut error = use_signal(|| None::<String>);

    use_effect(move || view.write().on_enter(&mut session.write()));

    let selected = session.read().level();
    let levels = view.read().levels();

    rsx! {
        div {
            class: "screen intro",
            h1 { "News Creator" }
            p { "Create your own English newspaper. Pick a level to begin." }

            div {
                class: "levels",
                for level in levels.iter().copied() {
                    button {
                        key: "{level}",
                        class: if selected == Some(level) { "level selected" } else { "level" },
                        onclick: move |_| {
                            view.write().select_level(&mut session.write(), level);
                            error.set(None);
                        },
                        "{level.display_name()}"
                    }
                }
            }

            if let Some(message) = error() {
                div { class: "error", "{message}" }
            }

            div {
                class: "actions",
                span {}
                button {
                    class: "btn",
                    onclick: move |_| {
                        let result = view.read().start(&session.read());
                        match result {
                            Ok(route) => {
                                navigator.push(route);
                            }
                            Err(e) => error.set(Some(e.to_string())),
                        }
                    },
                    "Start"
                }
            }
        }
    }
}
