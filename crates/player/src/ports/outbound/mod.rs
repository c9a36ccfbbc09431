//! Outbound ports - Interfaces for the host environment
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing views and services to interact with the host without depending on
//! concrete implementations.

pub mod platform;
pub mod viewport_port;

pub use platform::{
    HostCapabilities, HostKind, HostMessage, ParentFramePort, PlatformError, ANY_ORIGIN,
};
pub use viewport_port::{ListenerHandle, ScaleLayout, ViewportSize, ViewportSurface};

#[cfg(test)]
pub use platform::{MockHostCapabilities, MockParentFramePort};
