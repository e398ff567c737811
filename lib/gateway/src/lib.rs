//! # netcanvas Gateway
//!
//! Remote call gateway between the netcanvas editor and the network-emulation
//! backend.
//!
//! - [`Endpoint`] - The backend routes and the action each one performs
//! - [`Transport`] - Wire seam, with [`HttpTransport`] as the `reqwest` implementation
//! - [`RemoteGateway`] - JSON POST calls whose failures are surfaced to the user
//!
//! ## Example
//!
//! ```rust,no_run
//! use netcanvas_core::RecordingFrontend;
//! use netcanvas_gateway::{Endpoint, HttpTransport, RemoteGateway};
//! use std::sync::Arc;
//!
//! # async fn run() -> netcanvas_core::Result<()> {
//! let gateway = RemoteGateway::new(
//!     HttpTransport::new("http://127.0.0.1:8050"),
//!     Arc::new(RecordingFrontend::new()),
//! );
//! let body = gateway
//!     .call(Endpoint::AddLink, &serde_json::json!({"node1": "h1", "node2": "s1"}))
//!     .await?;
//! println!("{}", body["intf1"]);
//! # Ok(())
//! # }
//! ```

pub mod endpoint;
pub mod transport;
pub mod gateway;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use endpoint::Endpoint;
pub use transport::{HttpTransport, Transport};
pub use gateway::{is_truthy, RemoteGateway};
