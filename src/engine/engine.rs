use std::sync::mpsc::{Receiver, Sender};

use tracing::{debug, info};

use crate::engine::protocol::{ActionOutcome, EngineCommand, EngineResponse};
use crate::engine::session::SessionController;

/// Single writer for one session. Handles commands strictly one at a time.
pub struct Engine {
    rx: Receiver<EngineCommand>,
    tx: Sender<EngineResponse>,
    session: SessionController,
}

impl Engine {
    pub fn new(
        rx: Receiver<EngineCommand>,
        tx: Sender<EngineResponse>,
        session: SessionController,
    ) -> Self {
        Self { rx, tx, session }
    }

    pub fn run(&mut self) {
        while let Ok(cmd) = self.rx.recv() {
            let outcome = self.handle(cmd);
            debug!(?outcome, "action finished");

            let resp = EngineResponse::ActionCompleted {
                outcome,
                state: self.session.state().clone(),
            };

            if self.tx.send(resp).is_err() {
                break;
            }
        }

        info!("engine stopped");
    }

    fn handle(&mut self, cmd: EngineCommand) -> ActionOutcome {
        match cmd {
            EngineCommand::CommitDetails(d) => match self.session.commit_details(
                &d.setting,
                &d.style,
                &d.characters,
                &d.main_event,
            ) {
                Ok(()) => ActionOutcome::DetailsCommitted,
                Err(e) => ActionOutcome::DetailsRejected(e),
            },

            EngineCommand::GenerateStory => match self.session.generate_story() {
                Ok(_) => ActionOutcome::StoryGenerated,
                Err(e) => ActionOutcome::StoryFailed(e),
            },

            EngineCommand::ExtractKeywords => match self.session.extract_keywords() {
                Ok(_) => ActionOutcome::KeywordsExtracted,
                Err(e) => ActionOutcome::KeywordsFailed(e),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::testing::MockCompletionClient;
    use crate::error::{ClientError, ExtractionError, GenerationError};
    use crate::model::story::StoryDraft;
    use std::sync::mpsc;
    use std::thread;

    fn spawn(client: MockCompletionClient) -> (Sender<EngineCommand>, Receiver<EngineResponse>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        thread::spawn(move || {
            let session = SessionController::new(Box::new(client));
            Engine::new(cmd_rx, resp_tx, session).run();
        });

        (cmd_tx, resp_rx)
    }

    fn roundtrip(
        tx: &Sender<EngineCommand>,
        rx: &Receiver<EngineResponse>,
        cmd: EngineCommand,
    ) -> (ActionOutcome, crate::model::session_state::SessionState) {
        tx.send(cmd).unwrap();
        match rx.recv().unwrap() {
            EngineResponse::ActionCompleted { outcome, state } => (outcome, state),
        }
    }

    fn spaceship() -> StoryDraft {
        StoryDraft {
            setting: "a spaceship".into(),
            style: "sci-fi".into(),
            characters: "Mia".into(),
            main_event: "engine failure".into(),
        }
    }

    #[test]
    fn full_flow_reports_each_step() {
        let (tx, rx) = spawn(MockCompletionClient::new(vec![
            Ok("Mia fixed the engine.".into()),
            Ok("engine | 发动机".into()),
        ]));

        let (outcome, _) = roundtrip(&tx, &rx, EngineCommand::GenerateStory);
        assert_eq!(outcome, ActionOutcome::StoryFailed(GenerationError::NotReady));

        let (outcome, state) = roundtrip(&tx, &rx, EngineCommand::CommitDetails(spaceship()));
        assert_eq!(outcome, ActionOutcome::DetailsCommitted);
        assert!(state.details_committed);

        let (outcome, state) = roundtrip(&tx, &rx, EngineCommand::GenerateStory);
        assert_eq!(outcome, ActionOutcome::StoryGenerated);
        assert_eq!(state.story(), Some("Mia fixed the engine."));

        let (outcome, state) = roundtrip(&tx, &rx, EngineCommand::ExtractKeywords);
        assert_eq!(outcome, ActionOutcome::KeywordsExtracted);
        assert_eq!(state.keywords(), Some("engine | 发动机"));
    }

    #[test]
    fn upstream_failure_is_reported_not_raised() {
        let (tx, rx) = spawn(MockCompletionClient::new(vec![
            Ok("A story.".into()),
            Err(ClientError::RequestFailed("timeout".into())),
        ]));

        roundtrip(&tx, &rx, EngineCommand::CommitDetails(spaceship()));
        roundtrip(&tx, &rx, EngineCommand::GenerateStory);
        let (outcome, state) = roundtrip(&tx, &rx, EngineCommand::ExtractKeywords);

        assert_eq!(
            outcome,
            ActionOutcome::KeywordsFailed(ExtractionError::UpstreamFailure(
                ClientError::RequestFailed("timeout".into())
            ))
        );
        assert_eq!(state.story(), Some("A story."));
        assert!(state.keywords().is_none());
    }
}
