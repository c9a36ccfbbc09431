//! Application layer: services that coordinate ports on behalf of the views.

pub mod services;
