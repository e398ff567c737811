// Packet capture lifecycle bound to a link
//
// An edge is capturing exactly when its `capture` attribute is present. Start
// sets it from the backend's handle, a successful stop removes it, and a failed
// stop leaves it in place since the capture is presumed still running.
use crate::editor::TopologyEditor;
use netcanvas_core::{Error, Frontend, GraphEdge, GraphStore, Result};
use netcanvas_gateway::{is_truthy, Endpoint, Transport};
use serde::Deserialize;
use tracing::info;

#[derive(Deserialize)]
struct StartCaptureResponse {
    capture: String,
}

impl<S, T, F> TopologyEditor<S, T, F>
where
    S: GraphStore,
    T: Transport,
    F: Frontend,
{
    fn capture_target(&self, edge_id: &str) -> Result<GraphEdge> {
        self.store
            .edge(edge_id)
            .ok_or_else(|| self.notify(Error::EdgeNotFound(edge_id.to_string())))
    }

    /// Start capturing on a link. Returns the capture handle, or `None` when no
    /// link was given.
    pub async fn start_capture(&self, edge_id: Option<&str>) -> Result<Option<String>> {
        let Some(edge_id) = edge_id else {
            return Ok(None);
        };
        let edge = self.capture_target(edge_id)?;

        let body = self.gateway.call(Endpoint::StartCapture, &edge).await?;
        let response: StartCaptureResponse = serde_json::from_value(body)
            .ok()
            .filter(|r: &StartCaptureResponse| !r.capture.is_empty())
            .ok_or_else(|| {
                self.gateway.report(
                    Endpoint::StartCapture,
                    Error::MalformedResponse("missing capture handle".to_string()),
                )
            })?;

        self.store
            .set_capture(&edge.id, &response.capture)
            .map_err(|e| self.notify(e))?;
        info!(edge = %edge.id, capture = %response.capture, "packet capture started");
        Ok(Some(response.capture))
    }

    /// Stop capturing on a link. Returns `false` when no link was given.
    ///
    /// The current edge data is sent even when no capture is recorded, so a
    /// repeated stop still converges on an idle link.
    pub async fn stop_capture(&self, edge_id: Option<&str>) -> Result<bool> {
        let Some(edge_id) = edge_id else {
            return Ok(false);
        };
        let edge = self.capture_target(edge_id)?;

        let body = self.gateway.call(Endpoint::StopCapture, &edge).await?;
        if !is_truthy(&body) {
            return Err(self.gateway.report(
                Endpoint::StopCapture,
                Error::MalformedResponse("empty response".to_string()),
            ));
        }

        self.store.clear_capture(&edge.id).map_err(|e| self.notify(e))?;
        info!(edge = %edge.id, "packet capture stopped");
        Ok(true)
    }

    /// Open the capture viewer for a capturing link. Purely local.
    ///
    /// Returns the opened location, or `None` when no link was given.
    pub fn view_capture(&self, edge_id: Option<&str>) -> Result<Option<String>> {
        let Some(edge_id) = edge_id else {
            return Ok(None);
        };
        let edge = self.capture_target(edge_id)?;
        let handle = edge
            .capture
            .ok_or_else(|| self.notify(Error::CaptureNotRunning(edge.id.clone())))?;

        let location = self.capture_location(&handle);
        self.frontend().open(&location);
        Ok(Some(location))
    }
}
