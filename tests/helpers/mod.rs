use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::task::JoinHandle;

/// A request as seen by the stub server
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

struct StubState {
    status: StatusCode,
    body: String,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// In-process HTTP server answering every request with one canned response
#[allow(dead_code)]
pub struct StubServer {
    pub base_url: String,
    state: Arc<StubState>,
    handle: JoinHandle<()>,
}

#[allow(dead_code)]
impl StubServer {
    pub async fn start(status: u16, body: &str) -> Result<Self> {
        let state = Arc::new(StubState {
            status: StatusCode::from_u16(status).context("invalid stub status")?,
            body: body.to_string(),
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .fallback(respond)
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .context("Failed to bind stub listener")?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            base_url: format!("http://{addr}"),
            state,
            handle,
        })
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn respond(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.requests.lock().unwrap().push(RecordedRequest {
        method,
        path: uri.path().to_string(),
        content_type,
        body,
    });

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}

/// Base URL of a local port with nothing listening on it
#[allow(dead_code)]
pub fn unreachable_base_url() -> Result<String> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").context("Failed to bind probe")?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}"))
}

/// Base URL of a raw server that promises a 1000-byte JSON body, sends a few
/// bytes of it and closes the connection
#[allow(dead_code)]
pub async fn truncated_body_base_url() -> Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .context("Failed to bind truncating listener")?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let mut req = vec![0u8; 8192];
            let _ = stream.read(&mut req).await;
            let _ = stream
                .write_all(
                    b"HTTP/1.1 200 OK\r\n\
                      Content-Type: application/json\r\n\
                      Content-Length: 1000\r\n\r\n\
                      [{\"id\":1",
                )
                .await;
            let _ = stream.shutdown().await;
        }
    });
    Ok(format!("http://{addr}"))
}
