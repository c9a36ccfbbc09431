//! Desktop platform implementations
//!
//! The native host: configuration comes from the process environment (after
//! `.env` loading), there is no document to scale and no parent frame.

use std::rc::Rc;

use newsdesk_engine::infrastructure::clock::SystemClock;

use crate::ports::outbound::{
    HostCapabilities, HostKind, HostMessage, ParentFramePort, PlatformError, ViewportSurface,
};
use crate::state::Platform;

/// Selects development behaviour, e.g. `NEWSDESK_ENV=development`.
pub const ENV_MODE_VAR: &str = "NEWSDESK_ENV";

/// Desktop host reading the process environment
#[derive(Clone, Default)]
pub struct DesktopHost;

impl HostCapabilities for DesktopHost {
    fn kind(&self) -> HostKind {
        HostKind::Desktop
    }

    fn is_interactive(&self) -> bool {
        false
    }

    fn env_var(&self, key: &str) -> Option<String> {
        std::env::var(key)
            .ok()
            .filter(|value| !value.trim().is_empty())
    }

    fn is_dev_mode(&self) -> bool {
        self.env_var(ENV_MODE_VAR)
            .is_some_and(|mode| is_dev_mode_name(&mode))
    }

    fn page_origin(&self) -> Option<String> {
        None
    }
}

pub(crate) fn is_dev_mode_name(mode: &str) -> bool {
    matches!(
        mode.trim().to_ascii_lowercase().as_str(),
        "development" | "dev"
    )
}

/// Desktop parent frame (never embedded)
#[derive(Clone, Default)]
pub struct DesktopParentFrame;

impl ParentFramePort for DesktopParentFrame {
    fn is_embedded(&self) -> bool {
        false
    }

    fn post_message(
        &self,
        message: &HostMessage,
        _target_origin: &str,
    ) -> Result<(), PlatformError> {
        // No parent to notify
        tracing::debug!(op = message.op, "Host message dropped, not embedded");
        Ok(())
    }
}

/// Create platform services for desktop
pub fn create_platform() -> Platform {
    Platform::new(DesktopHost, DesktopParentFrame, SystemClock::new())
}

/// The terminal has no document to scale.
pub fn create_viewport_surface() -> Option<Rc<dyn ViewportSurface>> {
    None
}
