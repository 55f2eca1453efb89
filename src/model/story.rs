#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryField {
    Setting,
    Style,
    Characters,
    MainEvent,
}

impl StoryField {
    pub const ALL: [StoryField; 4] = [
        StoryField::Setting,
        StoryField::Style,
        StoryField::Characters,
        StoryField::MainEvent,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StoryField::Setting => "Setting",
            StoryField::Style => "Style",
            StoryField::Characters => "Characters",
            StoryField::MainEvent => "Main Event",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            StoryField::Setting => "🌍",
            StoryField::Style => "🎭",
            StoryField::Characters => "👥",
            StoryField::MainEvent => "📌",
        }
    }

    /// Characters and main event get a multi-line box.
    pub fn is_long_form(&self) -> bool {
        matches!(self, StoryField::Characters | StoryField::MainEvent)
    }

    pub fn hint(&self) -> &'static str {
        match self {
            StoryField::Setting => "e.g., Shanghai Thomas School, a bilingual school.",
            StoryField::Style => "e.g., Fantasy, like Harry Potter",
            StoryField::Characters => "e.g., Ellen, a new student in the school.",
            StoryField::MainEvent => {
                "e.g., Middle school students discover a secret room by accident!"
            }
        }
    }
}

/// Raw form input, edited freely by the user before commit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryDraft {
    pub setting: String,
    pub style: String,
    pub characters: String,
    pub main_event: String,
}

impl StoryDraft {
    pub fn field(&self, field: StoryField) -> &str {
        match field {
            StoryField::Setting => &self.setting,
            StoryField::Style => &self.style,
            StoryField::Characters => &self.characters,
            StoryField::MainEvent => &self.main_event,
        }
    }

    pub fn field_mut(&mut self, field: StoryField) -> &mut String {
        match field {
            StoryField::Setting => &mut self.setting,
            StoryField::Style => &mut self.style,
            StoryField::Characters => &mut self.characters,
            StoryField::MainEvent => &mut self.main_event,
        }
    }

    pub fn missing_fields(&self) -> Vec<StoryField> {
        StoryField::ALL
            .into_iter()
            .filter(|f| self.field(*f).trim().is_empty())
            .collect()
    }
}

/// Committed parameters. Only constructed from a fully filled draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryParameters {
    setting: String,
    style: String,
    characters: String,
    main_event: String,
}

impl StoryParameters {
    pub(crate) fn from_complete_draft(draft: &StoryDraft) -> Self {
        Self {
            setting: draft.setting.trim().to_string(),
            style: draft.style.trim().to_string(),
            characters: draft.characters.trim().to_string(),
            main_event: draft.main_event.trim().to_string(),
        }
    }

    pub fn setting(&self) -> &str {
        &self.setting
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn characters(&self) -> &str {
        &self.characters
    }

    pub fn main_event(&self) -> &str {
        &self.main_event
    }
}
