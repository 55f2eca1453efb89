use eframe::egui;

use crate::engine::protocol::EngineCommand;
use crate::model::story::StoryField;
use crate::ui::app::{notice, PendingAction, StoryApp};
use crate::ui::settings::{ACCENT, HEADER, KEYWORD_CARD, STORY_CARD};

pub fn draw_left_panel(ctx: &egui::Context, app: &mut StoryApp) {
    let mut commit_now = false;
    let ready = app.is_ready();

    egui::SidePanel::left("story_setup")
        .resizable(false)
        .default_width(280.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("📌 Story Setup");
                ui.separator();

                for field in StoryField::ALL {
                    ui.label(format!("{} {}", field.icon(), field.label()));

                    let text = app.ui.draft.field_mut(field);
                    let edit = if field.is_long_form() {
                        egui::TextEdit::multiline(text).desired_rows(3)
                    } else {
                        egui::TextEdit::singleline(text)
                    };
                    ui.add(edit.hint_text(field.hint()).desired_width(f32::INFINITY));
                    ui.add_space(4.0);
                }

                ui.add_space(6.0);

                let button = egui::Button::new("✅ Set Story Details")
                    .min_size(egui::vec2(ui.available_width(), 32.0));
                if ui.add_enabled(ready, button).clicked() {
                    commit_now = true;
                }

                if app.ui.pending == Some(PendingAction::Commit) {
                    ui.spinner();
                }

                if let Some(n) = &app.ui.sidebar_notice {
                    ui.add_space(6.0);
                    notice(ui, n);
                }

                ui.add_space(10.0);
                ui.collapsing("💡 How to Fill These In", |ui| {
                    ui.label("• Setting: Where does the story happen? (e.g., A futuristic city)");
                    ui.label("• Style: What genre? (e.g., Adventure, Sci-Fi, Mystery)");
                    ui.label("• Characters: Who is in the story? (e.g., Caroline, a young scientist)");
                    ui.label(
                        "• Main Event: What is the central event? (e.g., The scientists discover an alien baby!)",
                    );
                });

                ui.collapsing("🎨 Appearance", |ui| {
                    draw_appearance(ui, app);
                });
            });
        });

    if commit_now {
        let draft = app.ui.draft.clone();
        app.send_command(EngineCommand::CommitDetails(draft), PendingAction::Commit);
    }
}

fn draw_appearance(ui: &mut egui::Ui, app: &mut StoryApp) {
    let settings = &mut app.ui.settings;

    ui.label("UI Scale");
    if ui
        .add(egui::Slider::new(&mut settings.ui_scale, 0.75..=2.0))
        .changed()
    {
        app.ui.settings_dirty = true;
    }

    for (key, label) in [
        (HEADER, "Header"),
        (ACCENT, "Accent"),
        (STORY_CARD, "Story card"),
        (KEYWORD_CARD, "Keyword card"),
    ] {
        let mut color = settings.color(key);
        ui.horizontal(|ui| {
            if ui.color_edit_button_srgba(&mut color).changed() {
                settings.set_color(key, color);
                app.ui.settings_dirty = true;
            }
            ui.label(label);
        });
    }
}
