//! Wizard state shared by every route

use std::sync::Arc;

use dioxus::prelude::*;
use newsdesk_engine::infrastructure::ports::ClockPort;

use crate::state::WizardSession;

/// The session of the running wizard, held in a signal so every route
/// re-renders when it changes.
#[derive(Clone, Copy)]
pub struct WizardState {
    pub session: Signal<WizardSession>,
}

impl WizardState {
    /// Must be called inside an active Dioxus runtime.
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self {
            session: Signal::new(WizardSession::new(clock)),
        }
    }
}
