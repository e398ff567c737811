use serde::{Deserialize, Serialize};

/// Configuration for a [`TopologyEditor`](crate::TopologyEditor)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Terminal view location is `<terminal_prefix><node label>`.
    pub terminal_prefix: String,
    /// Capture viewer location is `<capture_viewer_prefix><capture handle>`.
    pub capture_viewer_prefix: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            terminal_prefix: "/xterm/".to_string(),
            capture_viewer_prefix: "/capture/view?file=".to_string(),
        }
    }
}
