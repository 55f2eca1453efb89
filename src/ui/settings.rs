use egui::Color32;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const HEADER: &str = "Header";
pub const ACCENT: &str = "Accent";
pub const STORY_CARD: &str = "StoryCard";
pub const KEYWORD_CARD: &str = "KeywordCard";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UiSettings {
    pub ui_scale: f32,

    // Role → color mapping
    pub colors: HashMap<String, [u8; 4]>,
}

impl Default for UiSettings {
    fn default() -> Self {
        let mut colors = HashMap::new();

        colors.insert(HEADER.into(), [10, 47, 107, 255]);
        colors.insert(ACCENT.into(), [160, 32, 64, 255]);
        colors.insert(STORY_CARD.into(), [30, 58, 138, 255]);
        colors.insert(KEYWORD_CARD.into(), [160, 32, 64, 255]);

        Self {
            ui_scale: 1.0,
            colors,
        }
    }
}

impl UiSettings {
    pub fn color(&self, key: &str) -> Color32 {
        self.colors
            .get(key)
            .map(|c| Color32::from_rgba_unmultiplied(c[0], c[1], c[2], c[3]))
            .unwrap_or(Color32::WHITE)
    }

    pub fn set_color(&mut self, key: &str, color: Color32) {
        self.colors.insert(
            key.to_string(),
            [color.r(), color.g(), color.b(), color.a()],
        );
    }

    /// Keeps a hand-edited settings file from making the window unusable.
    pub fn clamped(mut self) -> Self {
        if !self.ui_scale.is_finite() {
            self.ui_scale = 1.0;
        }
        self.ui_scale = self.ui_scale.clamp(0.75, 2.0);
        self
    }
}
