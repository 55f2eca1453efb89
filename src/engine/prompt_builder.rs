use crate::engine::llm_client::CompletionParams;
use crate::model::story::StoryParameters;

pub const STORY_MODEL: &str = "gpt-4o";
pub const KEYWORD_MODEL: &str = "gpt-4o";

pub const STORY_SYSTEM_MESSAGE: &str = "You are a skilled and respectful short story writer for students. \
Write in simple English and make the story easy to follow.";

pub const KEYWORD_SYSTEM_MESSAGE: &str =
    "You are a language assistant specializing in vocabulary learning.";

/// A fully composed request: what to say and how to sample.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptRequest {
    pub system_message: &'static str,
    pub user_prompt: String,
    pub params: CompletionParams,
}

/// Builds the two prompts sent to the completion endpoint.
/// Pure text formatting: no networking, no session logic.
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn story(params: &StoryParameters) -> PromptRequest {
        let mut prompt = String::new();

        prompt.push_str(
            "You are a creative story-writing assistant for middle school students. \
Your task is to generate a short, engaging, and respectful story in simple English \
based on the following details provided by the student:\n\n",
        );
        push_story_details(&mut prompt, params);
        prompt.push_str("\n\n");
        prompt.push_str(
            "INSTRUCTIONS:\n\
- MOST IMPORTANT! Use simple and clear English (easy for non-native speakers).\n\
- Ensure the story is age-appropriate for middle school students.\n\
- Make the story exciting, engaging, and imaginative.\n\
- Structure the story with a clear beginning, middle, and end.\n\
- Use vivid but simple descriptions to bring the story to life.\n\
- DO NOT exceed 20 sentences.\n\n",
        );
        prompt.push_str(
            "Write the story in a fun and easy-to-understand way. \
Keep sentences natural and engaging.\n\n",
        );
        prompt.push_str("STORY:\n");

        PromptRequest {
            system_message: STORY_SYSTEM_MESSAGE,
            user_prompt: prompt,
            params: story_params(),
        }
    }

    pub fn keywords(story: &str) -> PromptRequest {
        let mut prompt = String::new();

        prompt.push_str(
            "Find the most difficult words in this story that middle school students \
might not understand, and translate them into Chinese:\n\n",
        );
        prompt.push_str("### Story:\n");
        prompt.push_str(story);
        prompt.push_str("\n\n");
        prompt.push_str("Provide only the keywords, one keyword per line, in this format:\n\n");
        prompt.push_str("Word (English) | Translation (Chinese)\n");

        PromptRequest {
            system_message: KEYWORD_SYSTEM_MESSAGE,
            user_prompt: prompt,
            params: keyword_params(),
        }
    }
}

pub fn story_params() -> CompletionParams {
    CompletionParams {
        model: STORY_MODEL.into(),
        max_tokens: 750,
        temperature: 0.7,
        frequency_penalty: 0.5,
        presence_penalty: 0.3,
    }
}

pub fn keyword_params() -> CompletionParams {
    CompletionParams {
        model: KEYWORD_MODEL.into(),
        max_tokens: 200,
        temperature: 0.5,
        frequency_penalty: 0.0,
        presence_penalty: 0.0,
    }
}

fn push_story_details(prompt: &mut String, params: &StoryParameters) {
    prompt.push_str(&format!("**Setting:** {}\n", params.setting()));
    prompt.push_str(&format!("**Style:** {}\n", params.style()));
    prompt.push_str(&format!("**Characters:** {}\n", params.characters()));
    prompt.push_str(&format!("**Main Event:** {}", params.main_event()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::story::StoryDraft;

    fn spaceship() -> StoryParameters {
        StoryParameters::from_complete_draft(&StoryDraft {
            setting: "a spaceship".into(),
            style: "sci-fi".into(),
            characters: "Mia".into(),
            main_event: "engine failure".into(),
        })
    }

    #[test]
    fn story_prompt_embeds_every_parameter() {
        let req = PromptBuilder::story(&spaceship());

        assert!(req.user_prompt.contains("**Setting:** a spaceship\n"));
        assert!(req.user_prompt.contains("**Style:** sci-fi\n"));
        assert!(req.user_prompt.contains("**Characters:** Mia\n"));
        assert!(req.user_prompt.contains("**Main Event:** engine failure"));
        assert!(req.user_prompt.contains("DO NOT exceed 20 sentences."));
        assert!(req.user_prompt.contains("clear beginning, middle, and end"));
        assert!(req.user_prompt.ends_with("STORY:\n"));
        assert_eq!(req.system_message, STORY_SYSTEM_MESSAGE);
    }

    #[test]
    fn story_call_site_parameters() {
        let p = PromptBuilder::story(&spaceship()).params;
        assert_eq!(p.model, "gpt-4o");
        assert_eq!(p.max_tokens, 750);
        assert_eq!(p.temperature, 0.7);
        assert_eq!(p.frequency_penalty, 0.5);
        assert_eq!(p.presence_penalty, 0.3);
    }

    #[test]
    fn keyword_prompt_embeds_full_story() {
        let story = "Mia fixed the engine.\nThe ship was saved.";
        let req = PromptBuilder::keywords(story);

        assert!(req.user_prompt.contains(&format!("### Story:\n{story}\n\n")));
        assert!(req.user_prompt.contains("translate them into Chinese"));
        assert!(req.user_prompt.ends_with("Word (English) | Translation (Chinese)\n"));
        assert_eq!(req.system_message, KEYWORD_SYSTEM_MESSAGE);
        assert_eq!(req.params.max_tokens, 200);
        assert_eq!(req.params.temperature, 0.5);
    }
}
