use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{detail}")]
    Backend { status: u16, detail: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("No nodes selected, cannot add edge")]
    NoNodesSelected,

    #[error("More than 2 nodes selected ({0}), cannot add edge")]
    TooManyNodesSelected(usize),

    #[error("Cancelled by user")]
    Cancelled,

    #[error("Node already exists: {0}")]
    NodeExists(String),

    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Cannot add a {0} node from the canvas")]
    UnsupportedNodeKind(String),

    #[error("Edge not found: {0}")]
    EdgeNotFound(String),

    #[error("Packet capture is not running on link {0}")]
    CaptureNotRunning(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// True for failures that originate from the backend call itself, as opposed
    /// to local validation before any call was issued.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Error::Backend { .. } | Error::Transport(_) | Error::Decode(_) | Error::MalformedResponse(_)
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
