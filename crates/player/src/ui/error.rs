use newsdesk_domain::RequiredField;
use newsdesk_engine::GenerationError;

/// Reasons a view refuses to move on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    #[error("Please choose a level first")]
    LevelNotSelected,

    #[error("Please fill in: {}", labels(.0))]
    MissingFields(Vec<RequiredField>),

    #[error("Write or generate the article first")]
    ArticleMissing,

    #[error("Please select an image")]
    ImageNotSelected,

    #[error("Image generation failed: {0}")]
    ImageGeneration(#[source] GenerationError),
}

fn labels(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(RequiredField::label)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message_lists_labels() {
        let err = ViewError::MissingFields(vec![RequiredField::Category, RequiredField::Who]);
        assert_eq!(err.to_string(), "Please fill in: Category, Who");
    }
}
