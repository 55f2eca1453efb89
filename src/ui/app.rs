use eframe::egui;
use std::sync::mpsc;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::engine::engine::Engine;
use crate::engine::keyword_parser::parse_keywords;
use crate::engine::llm_client::CompletionClient;
use crate::engine::protocol::{ActionOutcome, EngineCommand, EngineResponse};
use crate::engine::session::SessionController;
use crate::error::{ExtractionError, GenerationError};
use crate::model::keyword::KeywordEntry;
use crate::model::message::{Notice, NoticeLevel};
use crate::model::session_state::SessionState;
use crate::model::story::StoryDraft;
use crate::ui::center_panel::draw_center_panel;
use crate::ui::left_panel::draw_left_panel;
use crate::ui::settings::UiSettings;
use crate::ui::settings_io;

/* =========================
   UI State
   ========================= */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    Commit,
    Story,
    Keywords,
}

#[derive(Default)]
pub struct UiState {
    pub draft: StoryDraft,

    /// Last snapshot received from the engine.
    pub session: SessionState,
    pub keywords: Vec<KeywordEntry>,

    pub pending: Option<PendingAction>,
    pub sidebar_notice: Option<Notice>,
    pub main_notice: Option<Notice>,
    pub startup_error: Option<String>,

    pub settings: UiSettings,
    pub settings_dirty: bool,
}

impl UiState {
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn apply(&mut self, outcome: ActionOutcome, state: SessionState) {
        self.pending = None;
        self.keywords = state.keywords().map(parse_keywords).unwrap_or_default();
        self.session = state;

        match outcome {
            ActionOutcome::DetailsCommitted => {
                self.sidebar_notice =
                    Some(Notice::success("✅ Story details saved! Now generate your story."));
            }
            ActionOutcome::DetailsRejected(e) => {
                self.sidebar_notice = Some(Notice::warning(format!("⚠️ {e}")));
            }
            ActionOutcome::StoryGenerated | ActionOutcome::KeywordsExtracted => {
                self.main_notice = None;
            }
            ActionOutcome::StoryFailed(e @ GenerationError::NotReady) => {
                self.main_notice = Some(Notice::warning(format!("⚠️ {e}")));
            }
            ActionOutcome::StoryFailed(e) => {
                self.main_notice = Some(Notice::error(format!("❌ {e}")));
            }
            ActionOutcome::KeywordsFailed(e @ ExtractionError::NoStory) => {
                self.main_notice = Some(Notice::warning(format!("⚠️ {e}")));
            }
            ActionOutcome::KeywordsFailed(e) => {
                self.main_notice = Some(Notice::error(format!("❌ {e}")));
            }
        }
    }
}

/* =========================
   App
   ========================= */

struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    resp_rx: mpsc::Receiver<EngineResponse>,
}

pub struct StoryApp {
    pub ui: UiState,
    engine: Option<EngineHandle>,
}

impl StoryApp {
    /// Starts the session engine, or records why it could not be started.
    pub fn new(backend: Result<Box<dyn CompletionClient>, String>, settings: UiSettings) -> Self {
        let mut ui = UiState {
            settings,
            ..Default::default()
        };

        let engine = match backend {
            Ok(client) => {
                let (cmd_tx, cmd_rx) = mpsc::channel();
                let (resp_tx, resp_rx) = mpsc::channel();

                std::thread::spawn(move || {
                    let session = SessionController::new(client);
                    let mut engine = Engine::new(cmd_rx, resp_tx, session);
                    engine.run();
                });

                Some(EngineHandle { cmd_tx, resp_rx })
            }
            Err(e) => {
                ui.startup_error = Some(e);
                None
            }
        };

        Self { ui, engine }
    }

    pub fn is_ready(&self) -> bool {
        self.engine.is_some() && !self.ui.is_busy()
    }

    pub fn send_command(&mut self, cmd: EngineCommand, pending: PendingAction) {
        let Some(engine) = &self.engine else {
            warn!(?pending, "action ignored: no engine");
            return;
        };

        if self.ui.is_busy() {
            return;
        }

        info!(?pending, "action requested");
        if engine.cmd_tx.send(cmd).is_err() {
            error!("engine channel closed");
            self.engine = None;
            self.ui.main_notice = Some(Notice::error("❌ The story engine stopped unexpectedly."));
            return;
        }

        self.ui.pending = Some(pending);
    }

    pub fn poll_engine(&mut self) {
        let Some(engine) = &self.engine else {
            return;
        };

        let mut responses = Vec::new();
        let mut disconnected = false;
        loop {
            match engine.resp_rx.try_recv() {
                Ok(resp) => responses.push(resp),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        if disconnected {
            error!("engine stopped");
            self.engine = None;
            self.ui.pending = None;
            self.ui.main_notice = Some(Notice::error("❌ The story engine stopped unexpectedly."));
        }

        for resp in responses {
            match resp {
                EngineResponse::ActionCompleted { outcome, state } => {
                    self.ui.apply(outcome, state);
                }
            }
        }
    }

    fn persist_settings(&mut self) {
        if !self.ui.settings_dirty {
            return;
        }
        self.ui.settings_dirty = false;

        if let Err(e) = settings_io::save_settings(&self.ui.settings) {
            warn!(error = %e, "could not save UI settings");
        }
    }
}

/* =========================
   egui App
   ========================= */

impl eframe::App for StoryApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        ctx.set_pixels_per_point(self.ui.settings.ui_scale);

        self.poll_engine();

        draw_left_panel(ctx, self);
        draw_center_panel(ctx, self);

        self.persist_settings();

        if self.ui.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

/* =========================
   UI Helpers
   ========================= */

pub fn notice(ui: &mut egui::Ui, notice: &Notice) {
    let color = match notice.level {
        NoticeLevel::Success => egui::Color32::from_rgb(46, 139, 87),
        NoticeLevel::Warning => egui::Color32::from_rgb(204, 140, 20),
        NoticeLevel::Error => egui::Color32::from_rgb(200, 50, 50),
    };

    egui::Frame::new()
        .fill(color)
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(10, 6))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(&notice.text).color(egui::Color32::WHITE));
        });
}

pub fn card<R>(
    ui: &mut egui::Ui,
    accent: egui::Color32,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::new()
        .fill(egui::Color32::from_rgb(249, 249, 249))
        .stroke(egui::Stroke::new(2.0, accent))
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::same(16))
        .show(ui, add_contents)
        .inner
}
