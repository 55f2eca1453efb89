use crate::error::{ExtractionError, GenerationError, ValidationError};
use crate::model::session_state::SessionState;
use crate::model::story::StoryDraft;

pub enum EngineCommand {
    CommitDetails(StoryDraft),
    GenerateStory,
    ExtractKeywords,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    DetailsCommitted,
    DetailsRejected(ValidationError),
    StoryGenerated,
    StoryFailed(GenerationError),
    KeywordsExtracted,
    KeywordsFailed(ExtractionError),
}

pub enum EngineResponse {
    /// Sent once per command, with the session as it stands afterwards.
    ActionCompleted {
        outcome: ActionOutcome,
        state: SessionState,
    },
}
