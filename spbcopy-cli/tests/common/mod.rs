//! Mock clipboard service for the binary tests. Mirrors
//! `spbcopy_core::test_support`, which is `#[cfg(test)]` and not visible here.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::Router;
use tokio::sync::Mutex;

/// One request as seen by the mock clipboard service.
#[derive(Debug, Clone)]
pub struct Captured {
    pub path: String,
    pub accept_encoding: Option<String>,
    pub body: Vec<u8>,
}

#[derive(Clone)]
struct Shared {
    status: StatusCode,
    captured: Arc<Mutex<Vec<Captured>>>,
}

pub struct ClipboardService {
    pub addr: SocketAddr,
    captured: Arc<Mutex<Vec<Captured>>>,
    handle: tokio::task::JoinHandle<()>,
}

impl ClipboardService {
    pub async fn start(status: StatusCode) -> Self {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new().fallback(capture).with_state(Shared {
            status,
            captured: captured.clone(),
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        ClipboardService {
            addr,
            captured,
            handle,
        }
    }

    pub async fn captured(&self) -> Vec<Captured> {
        self.captured.lock().await.clone()
    }
}

impl Drop for ClipboardService {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn capture(
    State(shared): State<Shared>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    shared.captured.lock().await.push(Captured {
        path: uri.path().to_string(),
        accept_encoding: headers
            .get(header::ACCEPT_ENCODING)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: body.to_vec(),
    });
    shared.status
}
