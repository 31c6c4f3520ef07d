//! In-memory `CompletionBackend` for tests: records every prompt it receives
//! and answers with a scripted reply.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{CompletionBackend, LlmError};

#[derive(Debug, Clone)]
pub enum StubReply {
    Text(String),
    Api { status: u16, message: String },
    Empty,
}

pub struct StubBackend {
    reply: Mutex<StubReply>,
    prompts: Mutex<Vec<String>>,
}

impl StubBackend {
    pub fn replying(text: &str) -> Self {
        Self::with_reply(StubReply::Text(text.to_string()))
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self::with_reply(StubReply::Api {
            status,
            message: message.to_string(),
        })
    }

    pub fn with_reply(reply: StubReply) -> Self {
        Self {
            reply: Mutex::new(reply),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn set_reply(&self, reply: StubReply) {
        *self.reply.lock().unwrap() = reply;
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CompletionBackend for StubBackend {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let reply = self.reply.lock().unwrap().clone();
        match reply {
            StubReply::Text(text) => Ok(text),
            StubReply::Api { status, message } => Err(LlmError::Api { status, message }),
            StubReply::Empty => Err(LlmError::EmptyContent),
        }
    }
}
