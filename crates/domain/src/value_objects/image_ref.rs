use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder shown in an empty image slot or when generation failed.
pub const PLACEHOLDER_IMAGE_1: &str = "https://via.placeholder.com/400x300?text=Image+1";
pub const PLACEHOLDER_IMAGE_2: &str = "https://via.placeholder.com/400x300?text=Image+2";

/// Substituted at render time when an image reference fails to load.
pub const IMAGE_ERROR_PLACEHOLDER: &str = "https://via.placeholder.com/800x400?text=Image+Error";

/// Reference to an illustration, as returned by the image backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The pair shown when image generation produced nothing usable.
    pub fn placeholder_pair() -> Vec<ImageRef> {
        vec![
            ImageRef::new(PLACEHOLDER_IMAGE_1),
            ImageRef::new(PLACEHOLDER_IMAGE_2),
        ]
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
