//! Newsdesk player: the article wizard.
//!
//! Session state, host adapters, the viewport scaler, step views, the Dioxus
//! app and a terminal front end. Host-specific code is selected at compile
//! time via `cfg`.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod state;
pub mod ui;

pub use state::{Platform, WizardSession};
pub use ui::{Route, ViewError};
