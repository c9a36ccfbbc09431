//! Step 1 route: the planning form

use dioxus::prelude::*;
use newsdesk_domain::common::{format_form_date, parse_form_date};

use crate::ui::presentation::state::WizardState;
use crate::ui::views::Step1View;

#[component]
pub fn Step1Route() -> Element {
    let navigator = use_navigator();
    let mut session = use_context::<WizardState>().session;
    let mut view = use_signal(Step1View::new);
    let mut error = use_signal(|| None::<String>);

    use_effect(move || view.write().on_enter(&mut session.write()));

    let (form, categories, summaries) = {
        let current = view.read();
        (
            current.form().clone(),
            current.categories(),
            current.event_summaries(),
        )
    };
    let date_value = form.date.map(format_form_date).unwrap_or_default();

    rsx! {
        div {
            class: "screen step1",
            h1 { "Step 1. Plan your article" }

            div {
                class: "field",
                label { "Category" }
                select {
                    value: "{form.category}",
                    onchange: move |e| view.write().set_category(e.value()),
                    option { value: "", "Choose a category" }
                    for category in categories.iter().copied() {
                        option {
                            key: "{category}",
                            value: "{category}",
                            selected: form.category == category,
                            "{category}"
                        }
                    }
                }
            }

            div {
                class: "field",
                label { "What happened" }
                select {
                    value: "{form.event_summary}",
                    disabled: summaries.is_empty(),
                    onchange: move |e| view.write().set_event_summary(e.value()),
                    option { value: "", "Choose an event" }
                    for summary in summaries.iter().copied() {
                        option {
                            key: "{summary}",
                            value: "{summary}",
                            selected: form.event_summary == summary,
                            "{summary}"
                        }
                    }
                }
            }

            div {
                class: "field",
                label { "When" }
                input {
                    r#type: "date",
                    value: "{date_value}",
                    oninput: move |e| view.write().set_date(parse_form_date(&e.value()).ok()),
                }
            }

            div {
                class: "field",
                label { "Who" }
                input {
                    r#type: "text",
                    value: "{form.who}",
                    placeholder: "Who is the story about?",
                    oninput: move |e| view.write().set_who(e.value()),
                }
            }

            div {
                class: "field",
                label { "Where" }
                input {
                    r#type: "text",
                    value: "{form.where_}",
                    placeholder: "Where did it happen?",
                    oninput: move |e| view.write().set_where(e.value()),
                }
            }

            div {
                class: "field",
                label { "Anything else? (optional)" }
                textarea {
                    value: "{form.extra}",
                    oninput: move |e| view.write().set_extra(e.value()),
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
                        let result = view.read().submit(&mut session.write());
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
