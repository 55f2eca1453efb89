//! Scripted completion backend for tests that must not touch the network.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::engine::llm_client::{CompletionClient, CompletionParams};
use crate::error::ClientError;

/// A recorded call to the mock client.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub system_message: String,
    pub user_prompt: String,
    pub params: CompletionParams,
}

/// Returns queued results in order and records every request.
///
/// Clones share the same queue and call log, so a test can keep one handle
/// while the controller owns another.
#[derive(Clone, Default)]
pub struct MockCompletionClient {
    responses: Arc<Mutex<VecDeque<Result<String, ClientError>>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockCompletionClient {
    pub fn new(responses: Vec<Result<String, ClientError>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses.into())),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl CompletionClient for MockCompletionClient {
    fn complete(
        &self,
        system_message: &str,
        user_prompt: &str,
        params: &CompletionParams,
    ) -> Result<String, ClientError> {
        self.calls.lock().unwrap().push(RecordedCall {
            system_message: system_message.to_string(),
            user_prompt: user_prompt.to_string(),
            params: params.clone(),
        });

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::RequestFailed("no scripted response".into())))
    }
}
