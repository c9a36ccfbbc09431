//! Viewport scaler for fixed-resolution pages
//!
//! This service keeps a design-resolution container (1280×800 by default)
//! fitted to the window:
//! - Scales uniformly so the whole container stays visible
//! - Centers it horizontally, pinned to the top
//! - Re-fits on every window resize until cleaned up
//!
//! On hosts without a document (the terminal) it does nothing.

use std::cell::Cell;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use crate::ports::outbound::{
    HostCapabilities, ListenerHandle, ScaleLayout, ViewportSize, ViewportSurface,
};

pub const DEFAULT_DESIGN_WIDTH: u32 = 1280;
pub const DEFAULT_DESIGN_HEIGHT: u32 = 800;
pub const DEFAULT_CONTAINER_ID: &str = "stage";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalingConfig {
    pub design_width: u32,
    pub design_height: u32,
    /// Element id of the container to scale
    pub container_id: String,
    /// Log every recomputed layout
    pub enable_log: bool,
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            design_width: DEFAULT_DESIGN_WIDTH,
            design_height: DEFAULT_DESIGN_HEIGHT,
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            enable_log: false,
        }
    }
}

impl ScalingConfig {
    fn design(&self) -> ViewportSize {
        ViewportSize::new(
            f64::from(self.design_width),
            f64::from(self.design_height),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScalingError {
    #[error("Scaling container '{0}' not found")]
    ContainerNotFound(String),
}

/// Uniform fit of `design` into `viewport`, centered horizontally.
pub fn compute_layout(viewport: ViewportSize, design: ViewportSize) -> ScaleLayout {
    if design.width <= 0.0 || design.height <= 0.0 {
        return ScaleLayout {
            scale: 1.0,
            left: 0.0,
            top: 0.0,
            design,
        };
    }

    let scale = (viewport.width / design.width).min(viewport.height / design.height);
    ScaleLayout {
        scale,
        left: (viewport.width - design.width * scale) / 2.0,
        top: 0.0,
        design,
    }
}

fn refit(surface: &dyn ViewportSurface, design: ViewportSize, scale: &Cell<f64>, log: bool) {
    let viewport = surface.viewport_size();
    let layout = compute_layout(viewport, design);
    surface.apply_layout(&layout);
    scale.set(layout.scale);

    if log {
        tracing::debug!(
            viewport_width = viewport.width,
            viewport_height = viewport.height,
            scale = layout.scale,
            left = layout.left,
            "Viewport rescaled"
        );
    }
}

pub struct ViewportScaler {
    host: Arc<dyn HostCapabilities>,
    surface: Option<Rc<dyn ViewportSurface>>,
    config: ScalingConfig,
    scale: Rc<Cell<f64>>,
    // Present while a resize listener is registered
    listener: Option<ListenerHandle>,
    bound: bool,
}

impl ViewportScaler {
    pub fn new(host: Arc<dyn HostCapabilities>, surface: Option<Rc<dyn ViewportSurface>>) -> Self {
        Self {
            host,
            surface,
            config: ScalingConfig::default(),
            scale: Rc::new(Cell::new(1.0)),
            listener: None,
            bound: false,
        }
    }

    /// Binds the container, fits it once and keeps it fitted on resize.
    ///
    /// A non-interactive host is not an error; the call just returns.
    /// Calling again replaces the previous binding.
    pub fn initialize(&mut self, config: ScalingConfig) -> Result<(), ScalingError> {
        self.cleanup();
        self.config = config;

        let surface = match (&self.surface, self.host.is_interactive()) {
            (Some(surface), true) => surface.clone(),
            _ => {
                tracing::debug!("No document to scale, viewport scaler disabled");
                return Ok(());
            }
        };

        if !surface.bind_container(&self.config.container_id) {
            tracing::warn!(
                container_id = %self.config.container_id,
                "Scaling container not found"
            );
            return Err(ScalingError::ContainerNotFound(
                self.config.container_id.clone(),
            ));
        }
        self.bound = true;

        let design = self.config.design();
        refit(surface.as_ref(), design, &self.scale, self.config.enable_log);

        let weak: Weak<dyn ViewportSurface> = Rc::downgrade(&surface);
        let scale = self.scale.clone();
        let log = self.config.enable_log;
        let handle = surface.add_resize_listener(Box::new(move || {
            if let Some(surface) = weak.upgrade() {
                refit(surface.as_ref(), design, &scale, log);
            }
        }));
        self.listener = Some(handle);

        tracing::info!(
            container_id = %self.config.container_id,
            design_width = self.config.design_width,
            design_height = self.config.design_height,
            scale = self.scale.get(),
            "Viewport scaler initialized"
        );
        Ok(())
    }

    /// Recomputes and applies the layout for the current viewport.
    pub fn on_resize(&self) {
        if !self.bound {
            return;
        }
        if let Some(surface) = &self.surface {
            refit(
                surface.as_ref(),
                self.config.design(),
                &self.scale,
                self.config.enable_log,
            );
        }
    }

    pub fn current_scale(&self) -> f64 {
        self.scale.get()
    }

    pub fn is_active(&self) -> bool {
        self.bound
    }

    /// Removes the listener and releases the container. Safe to call twice.
    pub fn cleanup(&mut self) {
        if let Some(surface) = &self.surface {
            if let Some(handle) = self.listener.take() {
                surface.remove_resize_listener(handle);
            }
            if self.bound {
                surface.unbind_container();
            }
        }
        self.listener = None;
        self.bound = false;
        self.scale.set(1.0);
    }
}

impl Drop for ViewportScaler {
    fn drop(&mut self) {
        self.cleanup();
    }
}
