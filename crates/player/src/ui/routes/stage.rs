//! Fixed-size stage that every screen is laid out on.
//!
//! The viewport scaler binds to the `#stage` element once it is mounted and
//! lets go of its resize listener when the layout unmounts.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use super::Route;
use crate::application::services::{ScalingConfig, ViewportScaler};
use crate::infrastructure::platform::create_viewport_surface;
use crate::state::Platform;

#[component]
pub fn Stage() -> Element {
    let platform = use_context::<Platform>();
    let scaler = use_hook(|| Rc::new(RefCell::new(None::<ViewportScaler>)));

    let scaler_for_effect = scaler.clone();
    use_effect(move || {
        let mut slot = scaler_for_effect.borrow_mut();
        if slot.is_some() {
            return;
        }
        let mut created = ViewportScaler::new(platform.host(), create_viewport_surface());
        if let Err(e) = created.initialize(ScalingConfig::default()) {
            tracing::warn!(error = %e, "Viewport scaling unavailable");
        }
        *slot = Some(created);
    });

    use_drop(move || {
        scaler.borrow_mut().take();
    });

    rsx! {
        div {
            id: "stage",
            class: "stage",
            Outlet::<Route> {}
        }
    }
}
