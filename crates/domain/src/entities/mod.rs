//! Wizard entities: the data each step produces.

mod article;
mod step1;
mod step2;

pub use article::{word_count, Article};
pub use step1::{missing_fields, RequiredField, Step1Data, Step1Patch};
pub use step2::{Step2Data, Step2Patch, MAX_IMAGES};
