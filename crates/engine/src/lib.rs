//! Newsdesk Engine library.
//!
//! Talks to the external AI backend on behalf of the wizard: writes the
//! article text and asks for candidate illustrations.
//!
//! ## Structure
//!
//! - `use_cases/` - Prompting, parsing, fallback and parallel image requests
//! - `infrastructure/` - External dependency implementations (ports + adapters)

pub mod infrastructure;
pub mod use_cases;

pub use use_cases::{GenerationClient, GenerationError};
