//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Text generation (could swap the OpenAI-compatible proxy for another vendor)
//! - Image generation (same)
//! - Clock (for testing)

mod error;
mod external;
mod testing;

pub use error::{ImageGenError, LlmError};
pub use external::{
    FinishReason, ImageGenPort, ImageRequest, ImageResult, LlmPort, LlmRequest, LlmResponse,
    DEFAULT_IMAGE_QUALITY, DEFAULT_IMAGE_SIZE,
};
pub use testing::ClockPort;

#[cfg(any(test, feature = "testing"))]
pub use external::{MockImageGenPort, MockLlmPort};
#[cfg(any(test, feature = "testing"))]
pub use testing::MockClockPort;
