//! End-to-end flow: app actor + network actor against a local backend

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use imagegen_tui::{AppActor, GeneratorState, NetworkActor, RenderState, UiEvent};

#[derive(Clone, Default)]
struct Backend {
    calls: Arc<AtomicUsize>,
}

async fn handle_generate(
    State(backend): State<Backend>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    backend.calls.fetch_add(1, Ordering::SeqCst);
    let prompt = body["prompt"].as_str().unwrap_or_default().to_string();
    match prompt.as_str() {
        "fail" => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "pipeline crashed" })),
        ),
        "legacy" => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "paths": ["/static/generated_images/generated_image_1.png"]
            })),
        ),
        _ => (
            StatusCode::OK,
            Json(json!({ "image_url": format!("http://x/{}.png", prompt) })),
        ),
    }
}

async fn spawn_backend() -> (String, Backend) {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let backend = Backend::default();
    let app = Router::new()
        .route("/generate", post(handle_generate))
        .with_state(backend.clone());
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://{addr}/generate"), backend)
}

struct App {
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: mpsc::UnboundedReceiver<RenderState>,
}

impl App {
    async fn start(endpoint: &str) -> Self {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (resp_tx, resp_rx) = mpsc::unbounded_channel();
        let (render_tx, render_rx) = mpsc::unbounded_channel();

        tokio::spawn(NetworkActor::new(endpoint, None, resp_tx).run(cmd_rx));
        let state = GeneratorState::new(endpoint, Default::default());
        tokio::spawn(AppActor::new(state, cmd_tx, render_tx).run(ui_rx, resp_rx));

        let mut app = App { ui_tx, render_rx };
        app.next().await;
        app
    }

    async fn next(&mut self) -> RenderState {
        tokio::time::timeout(Duration::from_secs(5), self.render_rx.recv())
            .await
            .expect("render state in time")
            .expect("app actor alive")
    }

    async fn set_prompt(&mut self, prompt: &str) {
        self.ui_tx.send(UiEvent::ClearPrompt).unwrap();
        self.next().await;
        self.ui_tx.send(UiEvent::StartEditing).unwrap();
        self.next().await;
        for c in prompt.chars() {
            self.ui_tx.send(UiEvent::CharInput(c)).unwrap();
            self.next().await;
        }
    }

    /// Submit and return (state right after submit, state once settled)
    async fn submit(&mut self) -> (RenderState, RenderState) {
        self.ui_tx.send(UiEvent::Submit).unwrap();
        let started = self.next().await;
        if !started.is_loading {
            return (started.clone(), started);
        }
        let settled = self.next().await;
        (started, settled)
    }
}

#[tokio::test]
async fn empty_prompt_never_reaches_backend() {
    let (endpoint, backend) = spawn_backend().await;
    let mut app = App::start(&endpoint).await;

    let (started, _) = app.submit().await;
    assert!(!started.is_loading);
    assert_eq!(started.error.as_deref(), Some("Please enter a prompt."));

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn successful_generation_displays_url() {
    let (endpoint, backend) = spawn_backend().await;
    let mut app = App::start(&endpoint).await;

    app.set_prompt("y").await;
    let (started, settled) = app.submit().await;
    assert!(started.is_loading);
    assert!(!settled.is_loading);
    assert_eq!(settled.image_url.as_deref(), Some("http://x/y.png"));
    assert_eq!(settled.error, None);
    assert_eq!(settled.meta.status_code, Some(200));
    assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn server_error_shows_generic_message_and_keeps_image() {
    let (endpoint, _backend) = spawn_backend().await;
    let mut app = App::start(&endpoint).await;

    app.set_prompt("first").await;
    let (_, ok) = app.submit().await;
    assert_eq!(ok.image_url.as_deref(), Some("http://x/first.png"));

    app.set_prompt("fail").await;
    let (started, failed) = app.submit().await;
    assert!(started.is_loading);
    assert_eq!(started.error, None);
    assert!(!failed.is_loading);
    assert_eq!(
        failed.error.as_deref(),
        Some("Failed to generate image. Try again.")
    );
    assert_eq!(failed.image_url.as_deref(), Some("http://x/first.png"));
    assert_eq!(failed.meta.status_code, Some(500));
}

#[tokio::test]
async fn second_submit_overrides_first() {
    let (endpoint, backend) = spawn_backend().await;
    let mut app = App::start(&endpoint).await;

    app.set_prompt("fail").await;
    let (_, failed) = app.submit().await;
    assert!(failed.error.is_some());

    app.set_prompt("owl").await;
    let (_, settled) = app.submit().await;
    assert_eq!(settled.error, None);
    assert_eq!(settled.image_url.as_deref(), Some("http://x/owl.png"));
    assert_eq!(backend.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn legacy_paths_response_is_resolved() {
    let (endpoint, _backend) = spawn_backend().await;
    let mut app = App::start(&endpoint).await;

    app.set_prompt("legacy").await;
    let (_, settled) = app.submit().await;
    let expected = endpoint.replace("/generate", "/static/generated_images/generated_image_1.png");
    assert_eq!(settled.image_url.as_deref(), Some(expected.as_str()));
}

#[tokio::test]
async fn unreachable_backend_fails_once() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let endpoint = format!("http://{}/generate", listener.local_addr().unwrap());
    drop(listener);

    let mut app = App::start(&endpoint).await;
    app.set_prompt("fox").await;
    let (started, settled) = app.submit().await;
    assert!(started.is_loading);
    assert!(!settled.is_loading);
    assert_eq!(
        settled.error.as_deref(),
        Some("Failed to generate image. Try again.")
    );
    assert_eq!(settled.image_url, None);
}
