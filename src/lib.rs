//! # netcanvas
//!
//! Interaction controller for an interactive network-topology editor.
//!
//! netcanvas lets a user build a virtual network on a canvas (hosts, switches,
//! links, groups) and keeps that canvas in step with a network-emulation
//! backend. Every edit is confirmed by the backend before the graph changes;
//! when a call fails the user is told immediately and the canvas stays as it was.
//!
//! ## Quick Start
//!
//! ### From the command line
//!
//! ```bash
//! netcanvas --backend http://127.0.0.1:8050 add-host --x 120 --y 80
//! netcanvas add-link h1 s1
//! netcanvas start-capture --interface h1-eth0
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use netcanvas::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn run() -> netcanvas::Result<()> {
//! let store = Arc::new(MemoryGraph::new());
//! let gateway = RemoteGateway::new(
//!     HttpTransport::new("http://127.0.0.1:8050"),
//!     Arc::new(RecordingFrontend::new()),
//! );
//! let editor = TopologyEditor::new(store.clone(), gateway, EditorConfig::default());
//!
//! editor.load_topology().await?;
//! let host = editor.add_host(Position::new(120.0, 80.0)).await?;
//! store.select(&host.id)?;
//! editor.add_link().await?; // self-loop on the new host
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Structure
//!
//! - `netcanvas-core` - Graph model, graph store, selection rules, errors, frontend seam
//! - `netcanvas-gateway` - JSON-over-HTTP calls to the emulation backend
//! - `netcanvas-editor` - Edit operations, packet capture lifecycle, navigation, topology sync

// Re-export core types
pub use netcanvas_core::{
    Error, Result,
    GraphNode, GraphEdge, NodeId, EdgeId, NodeKind, Position,
    GraphStore, MemoryGraph,
    Frontend, RecordingFrontend,
    LinkEndpoints, resolve_link_endpoints,
};

// Re-export gateway
pub use netcanvas_gateway::{Endpoint, HttpTransport, RemoteGateway, Transport};

// Re-export editor
pub use netcanvas_editor::{EditorConfig, TopologyEditor, TopologySummary};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Error, Result,
        GraphNode, GraphEdge, NodeKind, Position,
        GraphStore, MemoryGraph,
        Frontend, RecordingFrontend,
        HttpTransport, RemoteGateway, Transport,
        EditorConfig, TopologyEditor, TopologySummary,
    };
}
