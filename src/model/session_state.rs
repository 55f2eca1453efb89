use crate::model::story::StoryParameters;

/// Everything one interactive session has produced so far.
///
/// Lives only as long as the window; nothing here is written to disk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub details_committed: bool,
    pub story_parameters: Option<StoryParameters>,
    pub generated_story: Option<String>,
    pub generated_keywords: Option<String>,
}

impl SessionState {
    /// The stored story, if one exists and is not blank.
    pub fn story(&self) -> Option<&str> {
        self.generated_story
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }

    pub fn keywords(&self) -> Option<&str> {
        self.generated_keywords.as_deref()
    }

    pub fn can_generate(&self) -> bool {
        self.details_committed && self.story_parameters.is_some()
    }

    pub fn can_extract(&self) -> bool {
        self.story().is_some()
    }
}
