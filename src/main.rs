use anyhow::{anyhow, bail};
use clap::{Parser, Subcommand};
use netcanvas::{
    EditorConfig, Error, GraphStore, HttpTransport, MemoryGraph, Position, RemoteGateway,
    TopologyEditor,
};
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod console;

use console::ConsoleFrontend;

type Editor = TopologyEditor<MemoryGraph, HttpTransport, ConsoleFrontend>;

/// Edit a network-emulation topology from the terminal
#[derive(Parser, Debug)]
#[command(name = "netcanvas")]
#[command(about = "Edit a network-emulation topology", long_about = None)]
struct Args {
    /// Base URL of the emulation backend
    #[arg(long, default_value = "http://127.0.0.1:8050")]
    backend: String,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Prefix of terminal view locations
    #[arg(long, default_value = "/xterm/")]
    terminal_prefix: String,

    /// Prefix of capture viewer locations
    #[arg(long, default_value = "/capture/view?file=")]
    capture_viewer_prefix: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the topology as the canvas sees it
    Topology,
    /// Add a host at a canvas position
    AddHost {
        #[arg(long, default_value_t = 0.0)]
        x: f64,
        #[arg(long, default_value_t = 0.0)]
        y: f64,
    },
    /// Add a switch at a canvas position
    AddSwitch {
        #[arg(long, default_value_t = 0.0)]
        x: f64,
        #[arg(long, default_value_t = 0.0)]
        y: f64,
    },
    /// Link two nodes, or one node to itself
    AddLink {
        #[arg(required = true, num_args = 1..)]
        nodes: Vec<String>,
    },
    /// Group nodes under a new group node
    AddGroup {
        /// Group name; prompts when omitted
        #[arg(long)]
        name: Option<String>,
        nodes: Vec<String>,
    },
    /// Start a packet capture on the link owning an interface
    StartCapture {
        #[arg(long)]
        interface: String,
        /// Open the capture viewer once the capture is running
        #[arg(long)]
        view: bool,
    },
    /// Stop the packet capture on the link owning an interface
    StopCapture {
        #[arg(long)]
        interface: String,
    },
    /// Open terminals for nodes
    Terminal {
        #[arg(required = true)]
        nodes: Vec<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting netcanvas v{}", env!("CARGO_PKG_VERSION"));
    info!("Backend: {}", args.backend);

    let preset = match &args.command {
        Command::AddGroup { name, .. } => name.clone(),
        _ => None,
    };
    let frontend = Arc::new(ConsoleFrontend::new(&args.backend, preset));
    let gateway = RemoteGateway::new(HttpTransport::new(args.backend.as_str()), frontend);
    let config = EditorConfig {
        terminal_prefix: args.terminal_prefix,
        capture_viewer_prefix: args.capture_viewer_prefix,
    };
    let editor = TopologyEditor::new(Arc::new(MemoryGraph::new()), gateway, config);

    let result = match editor.load_topology().await {
        Ok(summary) => {
            info!(
                "Topology loaded: {} nodes, {} groups, {} links",
                summary.nodes_added, summary.groups_added, summary.edges_added
            );
            run(&editor, args.command).await
        }
        Err(e) => Err(e.into()),
    };

    match result {
        // editor errors have already been shown to the user by the frontend
        Err(e) if e.downcast_ref::<Error>().is_some() => std::process::exit(1),
        other => other,
    }
}

async fn run(editor: &Editor, command: Command) -> anyhow::Result<()> {
    let store = editor.store();
    match command {
        Command::Topology => {
            let topology = serde_json::json!({
                "nodes": store.nodes(),
                "edges": store.edges(),
            });
            println!("{}", serde_json::to_string_pretty(&topology)?);
        }
        Command::AddHost { x, y } => {
            let node = editor.add_host(Position::new(x, y)).await?;
            println!("{}", serde_json::to_string_pretty(&node)?);
        }
        Command::AddSwitch { x, y } => {
            let node = editor.add_switch(Position::new(x, y)).await?;
            println!("{}", serde_json::to_string_pretty(&node)?);
        }
        Command::AddLink { nodes } => {
            select_all(store, &nodes)?;
            let edge = editor.add_link().await?;
            println!("{}", serde_json::to_string_pretty(&edge)?);
        }
        Command::AddGroup { nodes, .. } => {
            select_all(store, &nodes)?;
            match editor.add_group().await {
                Ok(group) => println!("{}", serde_json::to_string_pretty(&group)?),
                Err(Error::Cancelled) => info!("Group creation cancelled"),
                Err(e) => return Err(e.into()),
            }
        }
        Command::StartCapture { interface, view } => {
            let edge_id = edge_for_interface(store, &interface)?;
            if let Some(handle) = editor.start_capture(Some(&edge_id)).await? {
                println!("capture {}", handle);
            }
            if view {
                editor.view_capture(Some(&edge_id))?;
            }
        }
        Command::StopCapture { interface } => {
            let edge_id = edge_for_interface(store, &interface)?;
            editor.stop_capture(Some(&edge_id)).await?;
        }
        Command::Terminal { nodes } => {
            select_all(store, &nodes)?;
            editor.open_terminal();
        }
    }
    Ok(())
}

fn select_all(store: &MemoryGraph, nodes: &[String]) -> anyhow::Result<()> {
    for node in nodes {
        store
            .select(node)
            .map_err(|_| anyhow!("Unknown node: {}", node))?;
    }
    Ok(())
}

fn edge_for_interface(store: &MemoryGraph, interface: &str) -> anyhow::Result<String> {
    let edge = store
        .edges()
        .into_iter()
        .find(|e| e.source_interface == interface || e.target_interface == interface);
    match edge {
        Some(edge) => Ok(edge.id),
        None => bail!("No link uses interface {}", interface),
    }
}
