//! Presentation: the Dioxus app, the routes and view controllers behind it,
//! and a terminal front end that drives the same views.

use dioxus::prelude::*;
use newsdesk_engine::GenerationClient;

use crate::state::Platform;

pub mod error;
pub mod presentation;
pub mod routes;
#[cfg(not(target_arch = "wasm32"))]
pub mod terminal;
pub mod views;

pub use error::ViewError;
pub use routes::Route;

/// Stylesheet for the wizard screens and the printed page.
pub const STYLES: &str = include_str!("../../assets/newsdesk.css");

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/player/src/main.rs`).
    let platform = use_context::<Platform>();
    let client = use_context::<GenerationClient>();

    // Must be created inside an active Dioxus runtime.
    use_context_provider(|| presentation::state::WizardState::new(platform.clock()));

    use_hook(move || {
        spawn(async move {
            if !client.check_health().await {
                tracing::warn!("Generation backend not reachable, articles may fall back to templates");
            }
        })
    });

    rsx! {
        style { dangerous_inner_html: STYLES }
        Router::<routes::Route> {}
    }
}
