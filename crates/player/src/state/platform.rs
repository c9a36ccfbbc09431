//! Platform DI Container
//!
//! This module provides the `Platform` struct - a dependency injection container
//! that aggregates the host-specific services behind port traits.
//!
//! Usage:
//! - Created by `create_platform()` in infrastructure/platform/desktop.rs or wasm.rs
//! - Handed to the composition root, which passes pieces to views and services

use std::sync::Arc;

use newsdesk_engine::infrastructure::ports::ClockPort;

use crate::ports::outbound::{HostCapabilities, HostKind, ParentFramePort};

/// Unified platform services container
#[derive(Clone)]
pub struct Platform {
    host: Arc<dyn HostCapabilities>,
    parent_frame: Arc<dyn ParentFramePort>,
    clock: Arc<dyn ClockPort>,
}

impl Platform {
    /// Create a new Platform with the given providers
    pub fn new<H, P, C>(host: H, parent_frame: P, clock: C) -> Self
    where
        H: HostCapabilities + 'static,
        P: ParentFramePort + 'static,
        C: ClockPort + 'static,
    {
        Self {
            host: Arc::new(host),
            parent_frame: Arc::new(parent_frame),
            clock: Arc::new(clock),
        }
    }

    pub fn host(&self) -> Arc<dyn HostCapabilities> {
        self.host.clone()
    }

    pub fn parent_frame(&self) -> Arc<dyn ParentFramePort> {
        self.parent_frame.clone()
    }

    pub fn clock(&self) -> Arc<dyn ClockPort> {
        self.clock.clone()
    }

    // -------------------------------------------------------------------------
    // Host capability shortcuts
    // -------------------------------------------------------------------------

    pub fn kind(&self) -> HostKind {
        self.host.kind()
    }

    pub fn is_interactive(&self) -> bool {
        self.host.is_interactive()
    }

    pub fn env_var(&self, key: &str) -> Option<String> {
        self.host.env_var(key)
    }

    pub fn is_dev_mode(&self) -> bool {
        self.host.is_dev_mode()
    }
}
