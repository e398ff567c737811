use crate::endpoint::Endpoint;
use crate::transport::Transport;
use netcanvas_core::{Error, Frontend, Result};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Outbound calls to the emulation backend.
///
/// Every failed call is reported to the user through the [`Frontend`] before the
/// error is returned, so callers only need an early return.
pub struct RemoteGateway<T, F> {
    transport: T,
    frontend: Arc<F>,
}

impl<T: Transport, F: Frontend> RemoteGateway<T, F> {
    pub fn new(transport: T, frontend: Arc<F>) -> Self {
        Self { transport, frontend }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn frontend(&self) -> &Arc<F> {
        &self.frontend
    }

    /// POST `payload` as JSON to `endpoint` and return the decoded body.
    pub async fn call<P>(&self, endpoint: Endpoint, payload: &P) -> Result<Value>
    where
        P: Serialize + ?Sized,
    {
        let body = match serde_json::to_value(payload) {
            Ok(body) => body,
            Err(e) => return Err(self.report(endpoint, e.into())),
        };

        debug!(endpoint = %endpoint, "calling backend");
        match self.transport.post_json(endpoint.path(), &body).await {
            Ok(value) => {
                debug!(endpoint = %endpoint, "backend call succeeded");
                Ok(value)
            }
            Err(e) => Err(self.report(endpoint, e)),
        }
    }

    /// GET `endpoint` and return the decoded body.
    pub async fn fetch(&self, endpoint: Endpoint) -> Result<Value> {
        debug!(endpoint = %endpoint, "fetching from backend");
        self.transport
            .get_json(endpoint.path())
            .await
            .map_err(|e| self.report(endpoint, e))
    }

    /// Surface a failure of `endpoint` to the user and hand the error back.
    pub fn report(&self, endpoint: Endpoint, error: Error) -> Error {
        warn!(endpoint = %endpoint, error = %error, "backend call failed");
        self.frontend
            .alert(&format!("Error while {}: {}", endpoint.action(), error));
        error
    }
}

/// JSON truthiness: `null`, `false`, `0` and `""` are falsy, everything else
/// (including empty arrays and objects) is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
