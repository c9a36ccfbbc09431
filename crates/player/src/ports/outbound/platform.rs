//! Host abstraction ports
//!
//! These traits abstract what differs between the places the wizard runs so
//! that:
//! 1. Views and services stay host-agnostic
//! 2. Host-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with fixed implementations
//!
//! NOTE: The `Platform` struct (DI container) that aggregates these traits
//! lives in `state/platform.rs`, not here.

use serde::Serialize;

/// Which implementation is serving the capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKind {
    /// Native process (desktop window or terminal)
    Desktop,
    /// Browser page, possibly inside a parent frame
    Browser,
    /// Fixed in-memory configuration
    Static,
}

/// What the current host can do, queried instead of sniffing the runtime.
#[cfg_attr(test, mockall::automock)]
pub trait HostCapabilities: Send + Sync {
    fn kind(&self) -> HostKind;

    /// True when there is a document to lay out (browser embedding).
    fn is_interactive(&self) -> bool;

    /// Host-provided configuration value; blank values read as unset.
    fn env_var(&self, key: &str) -> Option<String>;

    fn is_dev_mode(&self) -> bool;

    /// Origin of the page the app was served from, if there is one.
    fn page_origin(&self) -> Option<String>;
}

/// Message posted to an embedding parent frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostMessage {
    pub op: &'static str,
    pub data: serde_json::Map<String, serde_json::Value>,
    pub from: &'static str,
}

impl HostMessage {
    /// Sent once when the finished newspaper is shown.
    pub fn content_finished() -> Self {
        Self {
            op: "contentFinished",
            data: serde_json::Map::new(),
            from: "child",
        }
    }

    pub fn to_json(&self) -> Result<String, PlatformError> {
        serde_json::to_string(self).map_err(|e| PlatformError::Serialization(e.to_string()))
    }
}

/// Any origin may receive the message.
pub const ANY_ORIGIN: &str = "*";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
    #[error("Failed to serialize host message: {0}")]
    Serialization(String),
    #[error("Failed to post message to parent frame: {0}")]
    PostFailed(String),
}

/// Outward notification hook towards an embedding host.
#[cfg_attr(test, mockall::automock)]
pub trait ParentFramePort: Send + Sync {
    /// True when running inside a frame owned by another page.
    fn is_embedded(&self) -> bool;

    fn post_message(&self, message: &HostMessage, target_origin: &str)
        -> Result<(), PlatformError>;
}
