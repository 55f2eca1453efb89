use eframe::egui;
use egui::{Color32, RichText};
use tracing::{error, info};

use crate::engine::download::StoryDownload;
use crate::engine::protocol::EngineCommand;
use crate::model::message::Notice;
use crate::ui::app::{card, notice, PendingAction, StoryApp};
use crate::ui::settings::{ACCENT, HEADER, KEYWORD_CARD, STORY_CARD};

pub const FOOTER_CREDIT: &str =
    "© Created by Nadia Urban for Shanghai Thomas School.\nPowered by GPT-4o for creative storytelling.";

enum CenterAction {
    WriteStory,
    ExtractKeywords,
    Download,
}

pub fn draw_center_panel(ctx: &egui::Context, app: &mut StoryApp) {
    draw_header(ctx, app);
    draw_footer(ctx, app);

    let mut action: Option<CenterAction> = None;

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                if let Some(err) = &app.ui.startup_error {
                    notice(ui, &Notice::error(format!("⚠️ {err}")));
                    ui.add_space(10.0);
                }

                let can_write = app.is_ready() && app.ui.session.can_generate();
                let write = ui
                    .add_enabled(
                        can_write,
                        egui::Button::new(RichText::new("📝 Write Your Story").size(18.0)),
                    )
                    .on_disabled_hover_text("Set the story details first.");
                if write.clicked() {
                    action = Some(CenterAction::WriteStory);
                }

                if app.ui.pending == Some(PendingAction::Story) {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Creating your story... ✨");
                    });
                }

                if let Some(n) = &app.ui.main_notice {
                    ui.add_space(6.0);
                    notice(ui, n);
                }

                let Some(story) = app.ui.session.story() else {
                    return;
                };

                ui.add_space(12.0);
                ui.heading("📖 Your AI-Generated Story:");
                card(ui, app.ui.settings.color(STORY_CARD), |ui| {
                    ui.label(
                        RichText::new(story)
                            .size(16.0)
                            .color(Color32::from_rgb(51, 51, 51)),
                    );
                });

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(!app.ui.is_busy(), egui::Button::new("📥 Download the Story"))
                        .clicked()
                    {
                        action = Some(CenterAction::Download);
                    }

                    let can_extract = app.is_ready() && app.ui.session.can_extract();
                    if ui
                        .add_enabled(
                            can_extract,
                            egui::Button::new("🔍 Show Keywords & Translations"),
                        )
                        .clicked()
                    {
                        action = Some(CenterAction::ExtractKeywords);
                    }
                });

                if app.ui.pending == Some(PendingAction::Keywords) {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Extracting keywords...");
                    });
                }

                if let Some(raw) = app.ui.session.keywords() {
                    ui.add_space(12.0);
                    ui.heading("📖 Key Vocabulary & Translations:");
                    card(ui, app.ui.settings.color(KEYWORD_CARD), |ui| {
                        if app.ui.keywords.is_empty() {
                            ui.monospace(raw);
                            return;
                        }

                        egui::Grid::new("keyword_table")
                            .striped(true)
                            .num_columns(2)
                            .spacing([24.0, 6.0])
                            .show(ui, |ui| {
                                ui.label(RichText::new("Word (English)").strong());
                                ui.label(RichText::new("Translation (Chinese)").strong());
                                ui.end_row();

                                for entry in &app.ui.keywords {
                                    ui.label(entry.word.as_str());
                                    ui.label(entry.translation.as_str());
                                    ui.end_row();
                                }
                            });
                    });
                }
            });
    });

    match action {
        Some(CenterAction::WriteStory) => {
            app.send_command(EngineCommand::GenerateStory, PendingAction::Story);
        }
        Some(CenterAction::ExtractKeywords) => {
            app.send_command(EngineCommand::ExtractKeywords, PendingAction::Keywords);
        }
        Some(CenterAction::Download) => download_story(app),
        None => {}
    }
}

fn draw_header(ctx: &egui::Context, app: &StoryApp) {
    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.add_space(8.0);
        egui::Frame::new()
            .fill(app.ui.settings.color(HEADER))
            .corner_radius(egui::CornerRadius::same(10))
            .inner_margin(egui::Margin::same(15))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("📖 Storytelling with AI")
                            .size(32.0)
                            .strong()
                            .color(Color32::WHITE),
                    );
                });
            });

        ui.vertical_centered(|ui| {
            ui.add_space(6.0);
            ui.label(
                RichText::new("🖊️ Create a unique story using AI!")
                    .size(18.0)
                    .strong()
                    .color(app.ui.settings.color(HEADER)),
            );
            ui.label("Enter the story details and let the AI craft a creative story!");
        });
        ui.add_space(6.0);
    });
}

fn draw_footer(ctx: &egui::Context, app: &StoryApp) {
    egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.label(
            RichText::new(FOOTER_CREDIT)
                .small()
                .color(app.ui.settings.color(ACCENT)),
        );
        ui.add_space(4.0);
    });
}

fn download_story(app: &mut StoryApp) {
    let Some(download) = StoryDownload::from_state(&app.ui.session) else {
        return;
    };

    let Some(path) = rfd::FileDialog::new()
        .set_file_name(download.file_name)
        .add_filter("Text", &["txt"])
        .save_file()
    else {
        return;
    };

    match download.save_to(&path) {
        Ok(()) => {
            info!(path = %path.display(), "story saved");
            app.ui.main_notice = Some(Notice::success(format!(
                "📥 Story saved to {}",
                path.display()
            )));
        }
        Err(e) => {
            error!(error = %e, "story download failed");
            app.ui.main_notice = Some(Notice::error(format!("❌ {e:#}")));
        }
    }
}
