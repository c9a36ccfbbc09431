//! Browser platform implementations using web-sys
//!
//! Configuration is read from `window.__ENV__`, which the hosting page
//! injects before the module loads.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use js_sys::{Object, Reflect};
use newsdesk_engine::infrastructure::clock::SystemClock;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use crate::ports::outbound::{
    HostCapabilities, HostKind, HostMessage, ListenerHandle, ParentFramePort, PlatformError,
    ScaleLayout, ViewportSize, ViewportSurface,
};
use crate::state::Platform;

const ENV_GLOBAL: &str = "__ENV__";
const ENV_MODE_KEY: &str = "MODE";

// =============================================================================
// Host
// =============================================================================

/// Browser host reading `window.__ENV__`
#[derive(Clone, Default)]
pub struct BrowserHost;

fn env_object() -> Option<JsValue> {
    let window = web_sys::window()?;
    let env = Reflect::get(&window, &JsValue::from_str(ENV_GLOBAL)).ok()?;
    if env.is_undefined() || env.is_null() {
        None
    } else {
        Some(env)
    }
}

impl HostCapabilities for BrowserHost {
    fn kind(&self) -> HostKind {
        HostKind::Browser
    }

    fn is_interactive(&self) -> bool {
        web_sys::window().and_then(|w| w.document()).is_some()
    }

    fn env_var(&self, key: &str) -> Option<String> {
        let env = env_object()?;
        Reflect::get(&env, &JsValue::from_str(key))
            .ok()?
            .as_string()
            .filter(|value| !value.trim().is_empty())
    }

    fn is_dev_mode(&self) -> bool {
        self.env_var(ENV_MODE_KEY).as_deref() == Some("development")
    }

    fn page_origin(&self) -> Option<String> {
        web_sys::window()?.location().origin().ok()
    }
}

// =============================================================================
// Parent frame
// =============================================================================

/// Parent frame reached through `window.parent`
#[derive(Clone, Default)]
pub struct BrowserParentFrame;

impl BrowserParentFrame {
    fn parent_window() -> Option<web_sys::Window> {
        let window = web_sys::window()?;
        let parent = window.parent().ok().flatten()?;
        if Object::is(&parent, &window) {
            None
        } else {
            Some(parent)
        }
    }
}

impl ParentFramePort for BrowserParentFrame {
    fn is_embedded(&self) -> bool {
        Self::parent_window().is_some()
    }

    fn post_message(&self, message: &HostMessage, target_origin: &str) -> Result<(), PlatformError> {
        let Some(parent) = Self::parent_window() else {
            return Ok(());
        };
        let json = message.to_json()?;
        let value = js_sys::JSON::parse(&json)
            .map_err(|e| PlatformError::Serialization(format!("{:?}", e)))?;
        parent
            .post_message(&value, target_origin)
            .map_err(|e| PlatformError::PostFailed(format!("{:?}", e)))
    }
}

// =============================================================================
// Viewport surface
// =============================================================================

/// The page document, laid out by the viewport scaler.
#[derive(Default)]
pub struct BrowserViewportSurface {
    container: RefCell<Option<HtmlElement>>,
    listeners: RefCell<HashMap<u64, Closure<dyn Fn()>>>,
    next_handle: Cell<u64>,
}

impl BrowserViewportSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        tracing::warn!(property, error = ?e, "Failed to set container style");
    }
}

impl ViewportSurface for BrowserViewportSurface {
    fn viewport_size(&self) -> ViewportSize {
        let Some(window) = web_sys::window() else {
            return ViewportSize::new(0.0, 0.0);
        };
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        ViewportSize::new(width, height)
    }

    fn bind_container(&self, container_id: &str) -> bool {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(container_id))
            .and_then(|e| e.dyn_into::<HtmlElement>().ok());
        let found = element.is_some();
        *self.container.borrow_mut() = element;
        found
    }

    fn unbind_container(&self) {
        self.container.borrow_mut().take();
    }

    fn apply_layout(&self, layout: &ScaleLayout) {
        let container = self.container.borrow();
        let Some(element) = container.as_ref() else {
            return;
        };
        set_style(element, "width", &format!("{}px", layout.design.width));
        set_style(element, "height", &format!("{}px", layout.design.height));
        set_style(element, "position", "absolute");
        set_style(element, "left", &format!("{}px", layout.left));
        set_style(element, "top", &format!("{}px", layout.top));
        set_style(element, "transform-origin", "top left");
        set_style(element, "transform", &format!("scale({})", layout.scale));
    }

    fn add_resize_listener(&self, callback: Box<dyn Fn()>) -> ListenerHandle {
        let id = self.next_handle.get() + 1;
        self.next_handle.set(id);

        let closure = Closure::wrap(callback);
        if let Some(window) = web_sys::window() {
            if let Err(e) = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            {
                tracing::warn!(error = ?e, "Failed to register resize listener");
            }
        }
        self.listeners.borrow_mut().insert(id, closure);
        ListenerHandle(id)
    }

    fn remove_resize_listener(&self, handle: ListenerHandle) {
        let Some(closure) = self.listeners.borrow_mut().remove(&handle.0) else {
            return;
        };
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
    }
}

/// Create platform services for the browser
pub fn create_platform() -> Platform {
    Platform::new(BrowserHost, BrowserParentFrame, SystemClock::new())
}

pub fn create_viewport_surface() -> Option<Rc<dyn ViewportSurface>> {
    web_sys::window()?;
    Some(Rc::new(BrowserViewportSurface::new()))
}
