//! # netcanvas Editor
//!
//! Edit operations for the netcanvas topology editor.
//!
//! A [`TopologyEditor`] turns user gestures into backend calls and mirrors the
//! confirmed result into the graph store:
//!
//! - **Nodes**: [`TopologyEditor::add_host`], [`TopologyEditor::add_switch`]
//! - **Links**: [`TopologyEditor::add_link`] between the selected nodes
//! - **Groups**: [`TopologyEditor::add_group`] around the selected nodes
//! - **Packet capture**: start, stop and view a capture bound to a link
//! - **Navigation**: terminals for nodes, viewers for captures
//! - **Topology sync**: [`TopologyEditor::load_topology`] seeds the store from the backend
//!
//! ## Example
//!
//! ```rust,no_run
//! use netcanvas_core::{GraphStore, MemoryGraph, Position, RecordingFrontend};
//! use netcanvas_editor::{EditorConfig, TopologyEditor};
//! use netcanvas_gateway::{HttpTransport, RemoteGateway};
//! use std::sync::Arc;
//!
//! # async fn run() -> netcanvas_core::Result<()> {
//! let frontend = Arc::new(RecordingFrontend::new());
//! let gateway = RemoteGateway::new(HttpTransport::new("http://127.0.0.1:8050"), frontend);
//! let store = Arc::new(MemoryGraph::new());
//! let editor = TopologyEditor::new(store.clone(), gateway, EditorConfig::default());
//!
//! let h1 = editor.add_host(Position::new(100.0, 80.0)).await?;
//! let s1 = editor.add_switch(Position::new(220.0, 80.0)).await?;
//! store.select(&h1.id)?;
//! store.select(&s1.id)?;
//! let link = editor.add_link().await?;
//! editor.start_capture(Some(&link.id)).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod editor;
pub mod nodes;
pub mod links;
pub mod groups;
pub mod capture;
pub mod navigation;
pub mod topology;

pub use config::EditorConfig;
pub use editor::TopologyEditor;
pub use groups::sanitize_group_name;
pub use topology::TopologySummary;
