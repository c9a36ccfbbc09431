//! Newsdesk domain types.
//!
//! Levels, the data each wizard step produces, the local pick-list catalog,
//! and the invariants on them. No I/O lives here.

pub mod catalog;
pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{
    missing_fields, word_count, Article, RequiredField, Step1Data, Step1Patch, Step2Data,
    Step2Patch, MAX_IMAGES,
};
pub use error::DomainError;
pub use ids::SessionId;
pub use value_objects::{
    ImageRef, LengthPolicy, WizardLevel, IMAGE_ERROR_PLACEHOLDER, PLACEHOLDER_IMAGE_1,
    PLACEHOLDER_IMAGE_2,
};
