//! Value objects: immutable, validated domain values.

mod image_ref;
mod level;

pub use image_ref::{
    ImageRef, IMAGE_ERROR_PLACEHOLDER, PLACEHOLDER_IMAGE_1, PLACEHOLDER_IMAGE_2,
};
pub use level::{LengthPolicy, WizardLevel};
