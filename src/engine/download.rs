use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::model::session_state::SessionState;

pub const STORY_FILE_NAME: &str = "AI_Generated_Story.txt";

/// The story as offered for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryDownload {
    pub file_name: &'static str,
    pub contents: String,
}

impl StoryDownload {
    pub fn from_state(state: &SessionState) -> Option<Self> {
        state.story().map(|story| Self {
            file_name: STORY_FILE_NAME,
            contents: story.to_string(),
        })
    }

    /// Writes the story bytes as-is. No newline is appended.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        fs::write(path, self.contents.as_bytes())
            .with_context(|| format!("failed to write story to {}", path.display()))
    }
}
