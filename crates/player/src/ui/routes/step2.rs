//! Step 2 route: article editing and the illustration choice
//!
//! Generation runs in spawned tasks. Each task works on a copy of the
//! session and the view and writes both back when it finishes, so no signal
//! stays borrowed across an await. Editing is locked while a task runs.

use dioxus::prelude::*;
use newsdesk_engine::GenerationClient;

use crate::ui::presentation::components::newspaper::NewsPhoto;
use crate::ui::presentation::state::WizardState;
use crate::ui::views::Step2View;

const WRITING: &str = "Writing your article...";
const DRAWING: &str = "Drawing the pictures...";

#[component]
pub fn Step2Route() -> Element {
    let navigator = use_navigator();
    let client = use_context::<GenerationClient>();
    let mut session = use_context::<WizardState>().session;
    let mut view = use_signal(Step2View::new);
    let mut busy = use_signal(|| None::<&'static str>);
    let mut error = use_signal(|| None::<String>);

    let article_client = client.clone();
    use_effect(move || {
        let client = article_client.clone();
        spawn(async move {
            busy.set(Some(WRITING));
            let mut working = session.peek().clone();
            let mut controller = view.peek().clone();
            controller.on_enter(&mut working, &client).await;
            session.set(working);
            view.set(controller);
            busy.set(None);
        });
    });

    let generate_images = move |_: MouseEvent| {
        if busy.peek().is_some() {
            return;
        }
        let client = client.clone();
        spawn(async move {
            busy.set(Some(DRAWING));
            let mut working = session.peek().clone();
            let mut controller = view.peek().clone();
            if let Err(e) = controller.generate_images(&mut working, &client).await {
                tracing::debug!(error = %e, "Illustrations not stored");
            }
            session.set(working);
            view.set(controller);
            busy.set(None);
        });
    };

    let notice = view.read().notice().map(str::to_string);
    let step2 = session.read().step2().clone();
    let locked = busy().is_some();
    let can_advance = step2.can_advance() && !locked;
    let word_count = step2.article.word_count();

    rsx! {
        div {
            class: "screen step2",
            h1 { "Step 2. Write the article and select an image" }

            if let Some(message) = notice {
                div {
                    class: "notice",
                    span { "{message}" }
                    button {
                        class: "btn secondary",
                        onclick: move |_| view.write().dismiss_notice(),
                        "OK"
                    }
                }
            }

            if let Some(message) = busy() {
                p { class: "busy", "{message}" }
            }

            div {
                class: "field",
                label { "Headline" }
                input {
                    r#type: "text",
                    value: "{step2.article.headline}",
                    disabled: locked,
                    oninput: move |e| view.write().edit_headline(&mut session.write(), e.value()),
                }
            }

            div {
                class: "field",
                label { "Article" }
                textarea {
                    value: "{step2.article.content}",
                    disabled: locked,
                    oninput: move |e| view.write().edit_content(&mut session.write(), e.value()),
                }
                span { class: "word-count", "{word_count} words" }
            }

            div {
                class: "actions",
                span {}
                button {
                    class: "btn",
                    disabled: locked,
                    onclick: generate_images,
                    "Generate Images"
                }
            }

            if !step2.images.is_empty() {
                div {
                    class: "gallery",
                    for (index, image) in step2.images.iter().enumerate() {
                        button {
                            key: "{image}",
                            class: if step2.selected_image_index == Some(index) { "selected" } else { "" },
                            disabled: locked,
                            onclick: move |_| {
                                view.write().select_image(&mut session.write(), index);
                                error.set(None);
                            },
                            NewsPhoto {
                                src: image.to_string(),
                                alt: format!("Illustration {}", index + 1),
                            }
                        }
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
                    disabled: !can_advance,
                    onclick: move |_| {
                        let result = view.read().next(&session.read());
                        match result {
                            Ok(route) => {
                                navigator.push(route);
                            }
                            Err(e) => error.set(Some(e.to_string())),
                        }
                    },
                    "Next"
                }
            }
        }
    }
}
