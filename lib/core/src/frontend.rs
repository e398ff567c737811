// User-facing side effects: notifications, prompts and external navigation
use parking_lot::Mutex;
use std::collections::VecDeque;

/// The page surface the controller talks to.
///
/// `alert` must be visible to the user immediately; a silently logged failure
/// would let the canvas drift from the backend unnoticed.
pub trait Frontend: Send + Sync {
    fn alert(&self, message: &str);

    /// Ask for a value, pre-filled with `default`. `None` means the user cancelled.
    fn prompt(&self, message: &str, default: &str) -> Option<String>;

    /// Open an external view (terminal, capture viewer) in a new window.
    fn open(&self, location: &str);
}

/// Headless frontend that records every interaction.
///
/// Prompts are answered from a queue of scripted replies; an exhausted queue
/// accepts the suggested default.
#[derive(Default)]
pub struct RecordingFrontend {
    alerts: Mutex<Vec<String>>,
    opened: Mutex<Vec<String>>,
    prompts: Mutex<Vec<String>>,
    replies: Mutex<VecDeque<Option<String>>>,
}

impl RecordingFrontend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the answer for the next prompt (`None` cancels it).
    pub fn reply_with(&self, reply: Option<&str>) {
        self.replies.lock().push_back(reply.map(str::to_string));
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().clone()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

impl Frontend for RecordingFrontend {
    fn alert(&self, message: &str) {
        self.alerts.lock().push(message.to_string());
    }

    fn prompt(&self, message: &str, default: &str) -> Option<String> {
        self.prompts.lock().push(message.to_string());
        match self.replies.lock().pop_front() {
            Some(reply) => reply,
            None => Some(default.to_string()),
        }
    }

    fn open(&self, location: &str) {
        self.opened.lock().push(location.to_string());
    }
}
