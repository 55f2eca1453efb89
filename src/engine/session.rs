use tracing::{info, warn};

use crate::engine::llm_client::CompletionClient;
use crate::engine::prompt_builder::{PromptBuilder, PromptRequest};
use crate::error::{ClientError, ExtractionError, GenerationError, ValidationError};
use crate::model::session_state::SessionState;
use crate::model::story::{StoryDraft, StoryParameters};

/// Gates the three user actions and owns their results for one session.
///
/// Every action either succeeds and updates exactly the fields it owns, or
/// fails and leaves the state as it was.
pub struct SessionController {
    client: Box<dyn CompletionClient>,
    state: SessionState,
}

impl SessionController {
    pub fn new(client: Box<dyn CompletionClient>) -> Self {
        Self {
            client,
            state: SessionState::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn commit_details(
        &mut self,
        setting: &str,
        style: &str,
        characters: &str,
        main_event: &str,
    ) -> Result<(), ValidationError> {
        let draft = StoryDraft {
            setting: setting.to_string(),
            style: style.to_string(),
            characters: characters.to_string(),
            main_event: main_event.to_string(),
        };

        let missing = draft.missing_fields();
        if !missing.is_empty() {
            warn!(?missing, "story details incomplete");
            return Err(ValidationError::MissingFields(missing));
        }

        // Re-committing leaves any generated story and keywords in place.
        self.state.story_parameters = Some(StoryParameters::from_complete_draft(&draft));
        self.state.details_committed = true;
        info!("story details committed");
        Ok(())
    }

    pub fn generate_story(&mut self) -> Result<String, GenerationError> {
        let params = match (&self.state.story_parameters, self.state.details_committed) {
            (Some(params), true) => params,
            _ => return Err(GenerationError::NotReady),
        };

        let request = PromptBuilder::story(params);
        info!(model = %request.params.model, "generating story");

        let story = self.send(&request)?;
        info!(chars = story.len(), "story generated");

        self.state.generated_story = Some(story.clone());
        self.state.generated_keywords = None;
        Ok(story)
    }

    pub fn extract_keywords(&mut self) -> Result<String, ExtractionError> {
        let story = self.state.story().ok_or(ExtractionError::NoStory)?;

        let request = PromptBuilder::keywords(story);
        info!(model = %request.params.model, "extracting keywords");

        let keywords = self.send(&request)?;
        info!(lines = keywords.lines().count(), "keywords extracted");

        self.state.generated_keywords = Some(keywords.clone());
        Ok(keywords)
    }

    fn send(&self, request: &PromptRequest) -> Result<String, ClientError> {
        self.client
            .complete(request.system_message, &request.user_prompt, &request.params)
    }
}
