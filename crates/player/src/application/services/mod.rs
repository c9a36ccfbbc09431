//! Application services
//!
//! Services depend on port traits, not concrete infrastructure
//! implementations.

pub mod viewport_scaler;

pub use viewport_scaler::{compute_layout, ScalingConfig, ScalingError, ViewportScaler};
