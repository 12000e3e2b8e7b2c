//! Deterministic stand-in for the chat-completion API, used by router tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use super::{ChatCompletions, LlmError, UpstreamChatRequest};

#[derive(Debug, Clone)]
pub enum StubReply {
    /// 2xx with this raw body.
    Body(String),
    /// Upstream rejection with status and body.
    Status(u16, String),
}

pub struct StubUpstream {
    reply: StubReply,
    calls: AtomicUsize,
    last_request: Mutex<Option<UpstreamChatRequest>>,
}

impl StubUpstream {
    pub fn new(reply: StubReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        })
    }

    /// Replies with a single choice whose message content is `content`.
    pub fn with_content(content: &str) -> Arc<Self> {
        Self::new(StubReply::Body(
            json!({"choices": [{"message": {"role": "assistant", "content": content}}]})
                .to_string(),
        ))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<UpstreamChatRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatCompletions for StubUpstream {
    async fn complete(&self, request: &UpstreamChatRequest) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        match &self.reply {
            StubReply::Body(body) => Ok(body.clone()),
            StubReply::Status(status, body) => Err(LlmError::Api {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}
