//! Step 2 of the wizard: generated article and the illustration choice.

use serde::{Deserialize, Serialize};

use super::Article;
use crate::value_objects::ImageRef;

/// At most this many candidate illustrations are offered.
pub const MAX_IMAGES: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step2Data {
    pub article: Article,
    pub images: Vec<ImageRef>,
    pub selected_image_index: Option<usize>,
}

impl Step2Data {
    /// Shallow merge at the top level. A patched `article` or `images`
    /// replaces the whole nested value.
    pub fn apply(&mut self, patch: Step2Patch) {
        if let Some(article) = patch.article {
            self.article = article;
        }
        if let Some(images) = patch.images {
            self.images = images;
        }
        if let Some(selected) = patch.selected_image_index {
            self.selected_image_index = selected;
        }
    }

    pub fn selected_image(&self) -> Option<&ImageRef> {
        self.selected_image_index
            .and_then(|index| self.images.get(index))
    }

    /// Leaving this step needs a selection that points at a real image.
    pub fn can_advance(&self) -> bool {
        self.selected_image().is_some()
    }
}

/// Partial update for [`Step2Data`].
///
/// `selected_image_index` is doubly optional: `Some(None)` clears the
/// selection, `None` leaves it alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Step2Patch {
    pub article: Option<Article>,
    pub images: Option<Vec<ImageRef>>,
    pub selected_image_index: Option<Option<usize>>,
}

impl Step2Patch {
    pub fn article(mut self, article: Article) -> Self {
        self.article = Some(article);
        self
    }

    pub fn images(mut self, images: Vec<ImageRef>) -> Self {
        self.images = Some(images);
        self
    }

    pub fn selected_image_index(mut self, index: Option<usize>) -> Self {
        self.selected_image_index = Some(index);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let data = Step2Data::default();
        assert!(data.article.is_blank());
        assert!(data.images.is_empty());
        assert_eq!(data.selected_image_index, None);
        assert!(!data.can_advance());
    }

    #[test]
    fn test_apply_is_shallow() {
        let mut data = Step2Data::default();
        data.apply(Step2Patch::default().images(vec![ImageRef::new("a"), ImageRef::new("b")]));
        data.apply(Step2Patch::default().article(Article::new("H", "C")));
        assert_eq!(data.images.len(), 2);
        assert_eq!(data.article.headline, "H");

        // A new article replaces the old one entirely.
        data.apply(Step2Patch::default().article(Article::new("", "Only content")));
        assert_eq!(data.article.headline, "");
    }

    #[test]
    fn test_can_advance_requires_valid_index() {
        let mut data = Step2Data::default();
        data.selected_image_index = Some(0);
        assert!(!data.can_advance(), "index into empty images must not advance");

        data.images = vec![ImageRef::new("a")];
        assert!(data.can_advance());

        data.selected_image_index = Some(1);
        assert!(!data.can_advance());
    }

    #[test]
    fn test_patch_can_clear_selection() {
        let mut data = Step2Data {
            images: vec![ImageRef::new("a")],
            selected_image_index: Some(0),
            ..Default::default()
        };
        data.apply(Step2Patch::default());
        assert_eq!(data.selected_image_index, Some(0));
        data.apply(Step2Patch::default().selected_image_index(None));
        assert_eq!(data.selected_image_index, None);
    }
}
