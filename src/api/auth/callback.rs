//! Local listener that receives the GitHub login handoff
//!
//! The backend's redirect page POSTs the freshly issued tokens to
//! `http://127.0.0.1:<port>/callback`. The first outcome (tokens, a bad
//! payload, a bind failure or the wait timing out) wins; later ones are
//! rejected so the result can only be delivered once.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, Method, StatusCode};
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};

use crate::config::callback;
use crate::error::{Result, SpaceError};

const WAITING_HTML: &str = "<!DOCTYPE html>
<html>
<head><title>spacectl login</title></head>
<body>
<h1>Waiting for GitHub authentication...</h1>
<p>Complete the sign-in in the other tab. You can close this window afterwards.</p>
</body>
</html>";

/// Tokens pushed by the browser after a successful GitHub sign-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenHandoff {
    pub access_token: String,
    pub refresh_token: String,
    pub user_email: String,
}

/// Resolve-once holder for the login outcome
pub struct ResultSlot {
    sender: Mutex<Option<oneshot::Sender<Result<TokenHandoff>>>>,
}

impl ResultSlot {
    pub fn new() -> (Arc<Self>, oneshot::Receiver<Result<TokenHandoff>>) {
        let (tx, rx) = oneshot::channel();
        let slot = Self {
            sender: Mutex::new(Some(tx)),
        };
        (Arc::new(slot), rx)
    }

    /// Deliver `outcome` unless something already was. Returns whether it was delivered.
    pub fn resolve(&self, outcome: Result<TokenHandoff>) -> bool {
        let sender = match self.sender.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        match sender {
            Some(tx) => {
                // The receiver may already be gone after a timeout
                let _ = tx.send(outcome);
                true
            }
            None => false,
        }
    }

    pub fn is_resolved(&self) -> bool {
        match self.sender.lock() {
            Ok(guard) => guard.is_none(),
            Err(poisoned) => poisoned.into_inner().is_none(),
        }
    }
}

/// Running (or failed-to-start) callback listener
pub struct CallbackReceiver {
    port: u16,
    slot: Arc<ResultSlot>,
    receiver: oneshot::Receiver<Result<TokenHandoff>>,
    shutdown: Option<oneshot::Sender<()>>,
    server: Option<JoinHandle<()>>,
}

impl CallbackReceiver {
    /// Bind `127.0.0.1:<port>` and serve in the background.
    ///
    /// Never fails: a bind error becomes the outcome returned by [`CallbackReceiver::wait`].
    /// Port 0 picks a free port, see [`CallbackReceiver::port`].
    pub async fn start(port: u16) -> Self {
        let (slot, receiver) = ResultSlot::new();

        let listener = match TcpListener::bind(("127.0.0.1", port)).await {
            Ok(listener) => listener,
            Err(e) => {
                slot.resolve(Err(SpaceError::Login(format!(
                    "failed to start callback server on port {}: {}",
                    port, e
                ))));
                return Self {
                    port,
                    slot,
                    receiver,
                    shutdown: None,
                    server: None,
                };
            }
        };
        let port = listener
            .local_addr()
            .map(|addr| addr.port())
            .unwrap_or(port);
        debug!("Callback server listening on 127.0.0.1:{}", port);

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let app = router(slot.clone());
        let server_slot = slot.clone();
        let server = tokio::spawn(async move {
            let serve = axum::serve(listener, app).with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            });
            if let Err(e) = serve.await {
                server_slot.resolve(Err(SpaceError::Login(format!(
                    "callback server error: {}",
                    e
                ))));
            }
        });

        Self {
            port,
            slot,
            receiver,
            shutdown: Some(shutdown_tx),
            server: Some(server),
        }
    }

    /// Bound port
    pub fn port(&self) -> u16 {
        self.port
    }

    /// False when binding failed
    pub fn is_listening(&self) -> bool {
        self.server.is_some()
    }

    /// Wait for the outcome, then release the port
    pub async fn wait(mut self, timeout: Duration) -> Result<TokenHandoff> {
        let outcome = match tokio::time::timeout(timeout, &mut self.receiver).await {
            Ok(received) => received.unwrap_or_else(|_| Err(stopped_error())),
            Err(_) => {
                // Claim the slot so a late callback cannot land after we give up;
                // if one got there first, it is the outcome.
                self.slot.resolve(Err(SpaceError::Login(format!(
                    "timed out after {}s waiting for GitHub authentication",
                    timeout.as_secs()
                ))));
                (&mut self.receiver)
                    .await
                    .unwrap_or_else(|_| Err(stopped_error()))
            }
        };
        self.shutdown().await;
        outcome
    }

    /// Stop the listener, giving in-flight responses a short grace period
    pub async fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(mut server) = self.server.take() {
            if tokio::time::timeout(callback::SHUTDOWN_GRACE, &mut server)
                .await
                .is_err()
            {
                warn!("Callback server did not stop within the grace period, aborting");
                server.abort();
                let _ = server.await;
            }
            debug!("Callback server on port {} stopped", self.port);
        }
    }
}

fn stopped_error() -> SpaceError {
    SpaceError::Login("callback server stopped before a result arrived".to_string())
}

fn router(slot: Arc<ResultSlot>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(waiting_page))
        .route("/callback", post(receive_tokens))
        .layer(cors)
        .with_state(slot)
}

async fn waiting_page() -> Html<&'static str> {
    Html(WAITING_HTML)
}

async fn receive_tokens(
    State(slot): State<Arc<ResultSlot>>,
    body: Bytes,
) -> (StatusCode, Json<Value>) {
    if slot.is_resolved() {
        return already_completed();
    }

    match serde_json::from_slice::<TokenHandoff>(&body) {
        Ok(handoff) => {
            debug!("Received tokens for {}", handoff.user_email);
            if slot.resolve(Ok(handoff)) {
                (StatusCode::OK, Json(json!({"status": "success"})))
            } else {
                already_completed()
            }
        }
        Err(e) => {
            slot.resolve(Err(SpaceError::Login(format!(
                "invalid callback payload: {}",
                e
            ))));
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "invalid request body"})),
            )
        }
    }
}

fn already_completed() -> (StatusCode, Json<Value>) {
    (
        StatusCode::CONFLICT,
        Json(json!({"error": "login already completed"})),
    )
}
