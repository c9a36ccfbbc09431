//! ViewportSurface - the document the scaler lays out.
//!
//! Only the browser has a real implementation. Everything is `&self` because
//! the browser side mutates DOM state through shared handles.

/// Width and height in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Where and how large the design-resolution container is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleLayout {
    pub scale: f64,
    pub left: f64,
    pub top: f64,
    /// Unscaled container size
    pub design: ViewportSize,
}

/// Identifies a registered resize listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle(pub u64);

pub trait ViewportSurface {
    fn viewport_size(&self) -> ViewportSize;

    /// Binds the element with this id as the scaled container.
    /// Returns false when no such element exists.
    fn bind_container(&self, container_id: &str) -> bool;

    fn unbind_container(&self);

    /// Sizes, positions and transforms the bound container.
    fn apply_layout(&self, layout: &ScaleLayout);

    fn add_resize_listener(&self, callback: Box<dyn Fn()>) -> ListenerHandle;

    fn remove_resize_listener(&self, handle: ListenerHandle);
}
