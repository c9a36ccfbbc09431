//! Fixed, in-memory platform implementations
//!
//! Used when embedding the wizard with explicit configuration and by tests.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::ports::outbound::{
    HostCapabilities, HostKind, HostMessage, ParentFramePort, PlatformError,
};

/// Host whose answers are set up front.
#[derive(Debug, Clone, Default)]
pub struct StaticHost {
    interactive: bool,
    dev_mode: bool,
    env: HashMap<String, String>,
    origin: Option<String>,
}

impl StaticHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = dev_mode;
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }
}

impl HostCapabilities for StaticHost {
    fn kind(&self) -> HostKind {
        HostKind::Static
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn env_var(&self, key: &str) -> Option<String> {
        self.env
            .get(key)
            .filter(|value| !value.trim().is_empty())
            .cloned()
    }

    fn is_dev_mode(&self) -> bool {
        self.dev_mode
    }

    fn page_origin(&self) -> Option<String> {
        self.origin.clone()
    }
}

/// Parent frame that records what was posted.
#[derive(Debug, Default)]
pub struct RecordingParentFrame {
    embedded: bool,
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingParentFrame {
    pub fn embedded() -> Self {
        Self {
            embedded: true,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn detached() -> Self {
        Self::default()
    }

    /// `(json, target_origin)` pairs in posting order.
    pub fn sent(&self) -> Vec<(String, String)> {
        match self.sent.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl ParentFramePort for RecordingParentFrame {
    fn is_embedded(&self) -> bool {
        self.embedded
    }

    fn post_message(&self, message: &HostMessage, target_origin: &str) -> Result<(), PlatformError> {
        let json = message.to_json()?;
        let mut sent = self
            .sent
            .lock()
            .map_err(|e| PlatformError::PostFailed(e.to_string()))?;
        sent.push((json, target_origin.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_host_treats_blank_values_as_unset() {
        let host = StaticHost::new()
            .with_env("A", "value")
            .with_env("B", "   ");
        assert_eq!(host.env_var("A").as_deref(), Some("value"));
        assert_eq!(host.env_var("B"), None);
        assert_eq!(host.env_var("C"), None);
    }

    #[test]
    fn test_recording_frame_keeps_messages() {
        let frame = RecordingParentFrame::embedded();
        frame
            .post_message(&HostMessage::content_finished(), "*")
            .unwrap();
        assert_eq!(frame.sent().len(), 1);
        assert_eq!(frame.sent()[0].1, "*");
    }
}
