// Scripted transport for driving the editor without a backend
use crate::transport::Transport;
use netcanvas_core::{Error, Result};
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};

/// A request seen by [`ScriptedTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub body: Value,
}

/// Transport that answers from per-path queues of canned replies and records
/// every request. A path with no queued reply fails with a transport error.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<HashMap<String, VecDeque<Result<Value>>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, path: &str, reply: Result<Value>) {
        self.replies
            .lock()
            .entry(path.to_string())
            .or_default()
            .push_back(reply);
    }

    pub fn reply_ok(&self, path: &str, body: Value) {
        self.reply(path, Ok(body));
    }

    /// Queue a non-2xx answer whose text body is `detail`.
    pub fn reply_status(&self, path: &str, status: u16, detail: &str) {
        self.reply(
            path,
            Err(Error::Backend {
                status,
                detail: detail.to_string(),
            }),
        );
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .iter()
            .filter(|r| r.path == path)
            .cloned()
            .collect()
    }

    fn answer(&self, method: &'static str, path: &str, body: Value) -> Result<Value> {
        self.requests.lock().push(RecordedRequest {
            method,
            path: path.to_string(),
            body,
        });
        self.replies
            .lock()
            .get_mut(path)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Err(Error::Transport(format!("no scripted reply for {}", path))))
    }
}

impl Transport for ScriptedTransport {
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value> {
        self.answer("POST", path, body.clone())
    }

    async fn get_json(&self, path: &str) -> Result<Value> {
        self.answer("GET", path, Value::Null)
    }
}
