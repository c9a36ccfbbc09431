//! Platform-specific implementations
//!
//! This module provides the host implementations of the port traits defined
//! in ports/outbound/.
//!
//! The correct platform is selected at compile time based on the target architecture.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

pub mod mock;

#[cfg(target_arch = "wasm32")]
pub use wasm::{
    create_platform, create_viewport_surface, BrowserHost, BrowserParentFrame,
    BrowserViewportSurface,
};

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::{
    create_platform, create_viewport_surface, DesktopHost, DesktopParentFrame, ENV_MODE_VAR,
};

// Fixed implementations remain available via `crate::infrastructure::platform::mock`.
