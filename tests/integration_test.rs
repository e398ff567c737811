// Integration tests for netcanvas against a fake emulation backend
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use netcanvas::prelude::*;
use netcanvas_gateway::testing::ScriptedTransport;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::Arc;

/// Just enough of the emulation backend to answer the editor's calls.
#[derive(Default)]
struct FakeBackend {
    nodes: Mutex<Vec<(String, String)>>,
    links: Mutex<Vec<(String, String, String, String)>>,
    ports: Mutex<HashMap<String, usize>>,
    groups: Mutex<HashMap<String, Vec<String>>>,
    content_types: Mutex<Vec<String>>,
}

impl FakeBackend {
    fn with_nodes(nodes: &[(&str, &str)]) -> Self {
        let backend = Self::default();
        *backend.nodes.lock() = nodes
            .iter()
            .map(|(n, t)| (n.to_string(), t.to_string()))
            .collect();
        backend
    }

    fn has_node(&self, name: &str) -> bool {
        self.nodes.lock().iter().any(|(n, _)| n == name)
    }

    fn next_interface(&self, node: &str) -> String {
        let mut ports = self.ports.lock();
        let port = ports.entry(node.to_string()).or_insert(0);
        let name = format!("{}-eth{}", node, port);
        *port += 1;
        name
    }

    fn record(&self, req: &HttpRequest) {
        let content_type = req
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        self.content_types.lock().push(content_type);
    }
}

type Backend = web::Data<Arc<FakeBackend>>;

async fn topology(backend: Backend) -> HttpResponse {
    let nodes: Vec<Value> = backend
        .nodes
        .lock()
        .iter()
        .map(|(name, kind)| json!({"name": name, "type": kind}))
        .collect();
    let links: Vec<Value> = backend
        .links
        .lock()
        .iter()
        .map(|(s, t, i1, i2)| json!({"source": s, "target": t, "intf1": i1, "intf2": i2}))
        .collect();
    HttpResponse::Ok().json(json!({"nodes": nodes, "links": links}))
}

async fn add_node(backend: Backend, req: HttpRequest, body: web::Json<Value>) -> HttpResponse {
    backend.record(&req);
    for field in ["name", "type"] {
        if body.get(field).and_then(Value::as_str).unwrap_or_default().is_empty() {
            return HttpResponse::BadRequest().body(format!("Missing field {} on request", field));
        }
    }
    let name = body["name"].as_str().unwrap_or_default().to_string();
    if backend.has_node(&name) {
        return HttpResponse::BadRequest().body(format!("Node already exists: {}", name));
    }
    let kind = body["type"].as_str().unwrap_or_default().to_string();
    backend.nodes.lock().push((name, kind));
    HttpResponse::Ok().json(json!({"result": "ok"}))
}

async fn add_link(backend: Backend, req: HttpRequest, body: web::Json<Value>) -> HttpResponse {
    backend.record(&req);
    let mut ends = Vec::new();
    for field in ["node1", "node2"] {
        let node = body.get(field).and_then(Value::as_str).unwrap_or_default();
        if !backend.has_node(node) {
            return HttpResponse::BadRequest().body(format!("Node does not exist: {}", node));
        }
        ends.push(node.to_string());
    }
    let intf1 = backend.next_interface(&ends[0]);
    let intf2 = backend.next_interface(&ends[1]);
    backend
        .links
        .lock()
        .push((ends[0].clone(), ends[1].clone(), intf1.clone(), intf2.clone()));
    HttpResponse::Ok().json(json!({"intf1": intf1, "intf2": intf2}))
}

async fn add_group(backend: Backend, req: HttpRequest, body: web::Json<Value>) -> HttpResponse {
    backend.record(&req);
    let group = body["group"].as_str().unwrap_or_default().to_string();
    let members = body["nodes"]
        .as_array()
        .map(|a| a.iter().filter_map(Value::as_str).map(str::to_string).collect())
        .unwrap_or_default();
    backend.groups.lock().insert(group, members);
    HttpResponse::Ok().json(json!({"result": "ok"}))
}

async fn start_capture(backend: Backend, req: HttpRequest, body: web::Json<Value>) -> HttpResponse {
    backend.record(&req);
    match body.get("source_interface").and_then(Value::as_str) {
        Some(intf) => HttpResponse::Ok().json(json!({"capture": format!("/tmp/{}.pcap", intf)})),
        None => HttpResponse::BadRequest().body("Invalid link"),
    }
}

async fn stop_capture(backend: Backend, req: HttpRequest, _body: web::Json<Value>) -> HttpResponse {
    backend.record(&req);
    HttpResponse::Ok().json(json!({"result": "ok"}))
}

fn spawn_backend(backend: Arc<FakeBackend>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(backend.clone()))
            .route("/topology", web::get().to(topology))
            .route("/add_node", web::post().to(add_node))
            .route("/add_link", web::post().to(add_link))
            .route("/add_group", web::post().to(add_group))
            .route("/start_capture", web::post().to(start_capture))
            .route("/stop_capture", web::post().to(stop_capture))
    })
    .workers(1)
    .listen(listener)
    .expect("Failed to listen")
    .run();
    tokio::spawn(server);
    format!("http://127.0.0.1:{}", port)
}

type HttpEditor = TopologyEditor<MemoryGraph, HttpTransport, RecordingFrontend>;

fn http_editor(base_url: &str) -> (HttpEditor, Arc<MemoryGraph>, Arc<RecordingFrontend>) {
    let store = Arc::new(MemoryGraph::new());
    let frontend = Arc::new(RecordingFrontend::new());
    let gateway = RemoteGateway::new(HttpTransport::new(base_url), frontend.clone());
    let editor = TopologyEditor::new(store.clone(), gateway, EditorConfig::default());
    (editor, store, frontend)
}

#[tokio::test]
async fn test_editing_session_stays_in_sync() {
    let backend = Arc::new(FakeBackend::with_nodes(&[("h1", "host"), ("s1", "switch")]));
    let url = spawn_backend(backend.clone());
    let (editor, store, frontend) = http_editor(&url);

    let summary = editor.load_topology().await.unwrap();
    assert_eq!(summary.nodes_added, 2);

    let h2 = editor.add_host(Position::new(40.0, 40.0)).await.unwrap();
    assert_eq!(h2.id, "h2");
    assert!(backend.has_node("h2"));

    store.select("h1").unwrap();
    store.select("s1").unwrap();
    let link = editor.add_link().await.unwrap();
    assert_eq!(link.source_interface, "h1-eth0");
    assert_eq!(link.target_interface, "s1-eth0");
    assert_eq!(link.slabel, "eth0");

    store.clear_selection();
    store.select("h2").unwrap();
    store.select("s1").unwrap();
    let second = editor.add_link().await.unwrap();
    assert_eq!(second.tlabel, "eth1");

    store.clear_selection();
    store.select("h1").unwrap();
    store.select("h2").unwrap();
    frontend.reply_with(Some("lab"));
    let group = editor.add_group().await.unwrap();
    assert_eq!(group.id, "lab");
    assert_eq!(backend.groups.lock()["lab"], vec!["h1", "h2"]);
    assert_eq!(store.children("lab").len(), 2);

    let handle = editor.start_capture(Some(&link.id)).await.unwrap().unwrap();
    assert_eq!(handle, "/tmp/h1-eth0.pcap");
    let location = editor.view_capture(Some(&link.id)).unwrap().unwrap();
    assert_eq!(location, "/capture/view?file=/tmp/h1-eth0.pcap");

    assert!(editor.stop_capture(Some(&link.id)).await.unwrap());
    assert!(store.edge(&link.id).unwrap().capture.is_none());
    assert!(editor.view_capture(Some(&link.id)).is_err());

    // every POST carried a JSON body
    let content_types = backend.content_types.lock().clone();
    assert!(!content_types.is_empty());
    assert!(content_types.iter().all(|c| c.starts_with("application/json")));

    // only the failed view was alerted
    assert_eq!(frontend.alerts().len(), 1);
}

#[tokio::test]
async fn test_backend_rejection_is_plain_text() {
    let backend = Arc::new(FakeBackend::with_nodes(&[("h1", "host")]));
    let url = spawn_backend(backend.clone());
    // skip the topology load so the derived name collides with the backend
    let (editor, store, frontend) = http_editor(&url);

    let err = editor.add_host(Position::new(0.0, 0.0)).await.unwrap_err();
    assert_eq!(
        err,
        Error::Backend {
            status: 400,
            detail: "Node already exists: h1".to_string()
        }
    );
    assert_eq!(store.node_count(), 0);
    assert_eq!(
        frontend.alerts(),
        vec!["Error while adding node: Node already exists: h1"]
    );
}

#[tokio::test]
async fn test_link_to_unknown_node_adds_nothing() {
    let backend = Arc::new(FakeBackend::with_nodes(&[("h1", "host")]));
    let url = spawn_backend(backend.clone());
    let (editor, store, frontend) = http_editor(&url);

    // the canvas knows a node the backend has never heard of
    store.add_node(GraphNode::new("h9", NodeKind::Host)).unwrap();
    store.select("h9").unwrap();

    assert!(editor.add_link().await.is_err());
    assert_eq!(store.edge_count(), 0);
    assert!(backend.links.lock().is_empty());
    assert_eq!(
        frontend.alerts(),
        vec!["Error while adding link: Node does not exist: h9"]
    );
}

#[tokio::test]
async fn test_reload_after_edits_converges() {
    let backend = Arc::new(FakeBackend::with_nodes(&[("h1", "host"), ("h2", "host")]));
    let url = spawn_backend(backend.clone());
    let (editor, store, _frontend) = http_editor(&url);

    editor.load_topology().await.unwrap();
    store.select("h1").unwrap();
    store.select("h2").unwrap();
    editor.add_link().await.unwrap();

    let summary = editor.load_topology().await.unwrap();
    assert_eq!(summary, TopologySummary::default());
    assert_eq!(store.node_count(), 2);
    assert_eq!(store.edge_count(), 1);
}

#[tokio::test]
async fn test_cancelled_group_and_arity_errors_touch_nothing() {
    let store = Arc::new(MemoryGraph::new());
    let frontend = Arc::new(RecordingFrontend::new());
    let gateway = RemoteGateway::new(ScriptedTransport::new(), frontend.clone());
    let editor = TopologyEditor::new(store.clone(), gateway, EditorConfig::default());

    for name in ["h1", "h2", "s1"] {
        let kind = if name.starts_with('h') { NodeKind::Host } else { NodeKind::Switch };
        store.add_node(GraphNode::new(name, kind)).unwrap();
        store.select(name).unwrap();
    }

    frontend.reply_with(None);
    assert_eq!(editor.add_group().await.unwrap_err(), Error::Cancelled);
    assert_eq!(editor.add_link().await.unwrap_err(), Error::TooManyNodesSelected(3));

    store.clear_selection();
    assert_eq!(editor.add_link().await.unwrap_err(), Error::NoNodesSelected);

    assert!(editor.gateway().transport().requests().is_empty());
    assert_eq!(store.node_count(), 3);
    assert_eq!(store.edge_count(), 0);
    assert_eq!(
        frontend.alerts(),
        vec![
            "Error: More than 2 nodes selected (3), cannot add edge",
            "Error: No nodes selected, cannot add edge",
        ]
    );
}
