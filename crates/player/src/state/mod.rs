//! State owned by the composition root: the platform container and the
//! wizard session.

pub mod platform;
pub mod session;

pub use platform::Platform;
pub use session::WizardSession;
