use thiserror::Error;

use crate::model::story::StoryField;

/// Raised by `commit_details` when one or more fields are blank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields before saving (missing: {})", list_fields(.0))]
    MissingFields(Vec<StoryField>),
}

/// Failure of a single completion request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("{0}")]
    RequestFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("Please set the story details first.")]
    NotReady,

    #[error("Error generating story: {0}")]
    UpstreamFailure(#[from] ClientError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("Write a story before extracting keywords.")]
    NoStory,

    #[error("Error extracting keywords: {0}")]
    UpstreamFailure(#[from] ClientError),
}

/// Startup configuration problems. A missing credential disables the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("API key not found. Set OPENAI_API_KEY in your environment or .env file.")]
    MissingCredential,

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

fn list_fields(fields: &[StoryField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_names_missing_fields() {
        let err = ValidationError::MissingFields(vec![StoryField::Style, StoryField::MainEvent]);
        assert_eq!(
            err.to_string(),
            "Please fill in all fields before saving (missing: Style, Main Event)"
        );
    }

    #[test]
    fn upstream_failures_keep_client_detail() {
        let err: GenerationError = ClientError::RequestFailed("timeout".into()).into();
        assert_eq!(err.to_string(), "Error generating story: timeout");

        let err: ExtractionError = ClientError::RequestFailed("401".into()).into();
        match err {
            ExtractionError::UpstreamFailure(ClientError::RequestFailed(d)) => assert_eq!(d, "401"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
