//! Dioxus presentation: shared components and signal-backed state.

pub mod components;
pub mod state;
