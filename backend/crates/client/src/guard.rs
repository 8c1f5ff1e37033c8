//! Route Guard
//!
//! Protects client-side routes: before a protected page renders, the
//! guard asks the API whether the stored token is still good. While
//! the check runs the page shows a spinner; on failure it shows a
//! countdown and then redirects to the login form.
//!
//! The check runs on a spawned task that is aborted when the guard is
//! dropped, so navigating away mid-check cannot flip the status of a
//! page that no longer exists.

use std::time::Duration;

use serde::Deserialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Seconds the fallback page counts down before redirecting
pub const REDIRECT_COUNTDOWN_SECS: u64 = 3;

/// Guard status for the page to render against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardStatus {
    /// Verification in flight, show the spinner
    Checking,
    /// Token verified, render the protected page
    Allowed,
    /// No token or verification failed: count down, then redirect
    Fallback { redirect_after: Duration },
}

impl GuardStatus {
    fn fallback() -> Self {
        GuardStatus::Fallback {
            redirect_after: Duration::from_secs(REDIRECT_COUNTDOWN_SECS),
        }
    }
}

#[derive(Deserialize)]
struct AuthCheckBody {
    #[serde(default)]
    ok: bool,
}

/// Verifies an access token against the auth API
#[derive(Clone)]
pub struct AuthVerifier {
    http: reqwest::Client,
    base_url: String,
}

impl AuthVerifier {
    /// `base_url` is the auth API prefix, e.g. `http://host/api/v1/auth`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Ask the API whether the token is valid
    ///
    /// Network and decode failures count as not-authorized rather than
    /// erroring: the guard's only two outcomes are render or redirect.
    pub async fn check(&self, token: &str) -> bool {
        let url = format!("{}/user-auth", self.base_url);

        let response = match self
            .http
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, token)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "Auth check request failed");
                return false;
            }
        };

        if !response.status().is_success() {
            return false;
        }

        match response.json::<AuthCheckBody>().await {
            Ok(body) => body.ok,
            Err(e) => {
                tracing::warn!(error = %e, "Auth check returned malformed body");
                false
            }
        }
    }
}

/// A guard instance for one protected page
pub struct RouteGuard {
    status_rx: watch::Receiver<GuardStatus>,
    task: Option<JoinHandle<()>>,
}

impl RouteGuard {
    /// Start guarding with the stored token, if any
    ///
    /// With no token the guard resolves to `Fallback` immediately and
    /// never contacts the server.
    pub fn spawn(verifier: AuthVerifier, token: Option<String>) -> Self {
        let (status_tx, status_rx) = watch::channel(GuardStatus::Checking);

        let Some(token) = token.filter(|t| !t.is_empty()) else {
            status_tx.send_replace(GuardStatus::fallback());
            return Self {
                status_rx,
                task: None,
            };
        };

        let task = tokio::spawn(async move {
            let status = if verifier.check(&token).await {
                GuardStatus::Allowed
            } else {
                GuardStatus::fallback()
            };
            let _ = status_tx.send(status);
        });

        Self {
            status_rx,
            task: Some(task),
        }
    }

    /// Current status without waiting
    pub fn status(&self) -> GuardStatus {
        self.status_rx.borrow().clone()
    }

    /// Wait until the guard leaves `Checking`
    pub async fn resolved(&mut self) -> GuardStatus {
        loop {
            let current = self.status_rx.borrow_and_update().clone();
            if current != GuardStatus::Checking {
                return current;
            }
            if self.status_rx.changed().await.is_err() {
                return self.status_rx.borrow().clone();
            }
        }
    }
}

impl Drop for RouteGuard {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::Json;
    use axum::Router;
    use axum::http::{HeaderMap, StatusCode, header};
    use axum::routing::get;
    use serde_json::json;

    /// Spin up a stub auth API that accepts exactly one token
    async fn stub_api(hits: Arc<AtomicUsize>) -> SocketAddr {
        let app = Router::new().route(
            "/user-auth",
            get(move |headers: HeaderMap| {
                let hits = hits.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    let authed = headers
                        .get(header::AUTHORIZATION)
                        .and_then(|v| v.to_str().ok())
                        == Some("good-token");
                    if authed {
                        (StatusCode::OK, Json(json!({"ok": true})))
                    } else {
                        (StatusCode::UNAUTHORIZED, Json(json!({"success": false})))
                    }
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    #[tokio::test]
    async fn test_no_token_never_calls_server() {
        let hits = Arc::new(AtomicUsize::new(0));
        let addr = stub_api(hits.clone()).await;
        let verifier = AuthVerifier::new(format!("http://{addr}"));

        let mut guard = RouteGuard::spawn(verifier, None);
        let status = guard.resolved().await;

        assert!(matches!(status, GuardStatus::Fallback { .. }));
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_token_is_no_token() {
        let hits = Arc::new(AtomicUsize::new(0));
        let addr = stub_api(hits.clone()).await;
        let verifier = AuthVerifier::new(format!("http://{addr}"));

        let mut guard = RouteGuard::spawn(verifier, Some(String::new()));
        assert!(matches!(guard.resolved().await, GuardStatus::Fallback { .. }));
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_valid_token_is_allowed() {
        let hits = Arc::new(AtomicUsize::new(0));
        let addr = stub_api(hits.clone()).await;
        let verifier = AuthVerifier::new(format!("http://{addr}"));

        let mut guard = RouteGuard::spawn(verifier, Some("good-token".to_string()));
        assert_eq!(guard.resolved().await, GuardStatus::Allowed);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_rejected_token_falls_back_with_countdown() {
        let hits = Arc::new(AtomicUsize::new(0));
        let addr = stub_api(hits.clone()).await;
        let verifier = AuthVerifier::new(format!("http://{addr}"));

        let mut guard = RouteGuard::spawn(verifier, Some("stale-token".to_string()));
        let status = guard.resolved().await;

        assert_eq!(
            status,
            GuardStatus::Fallback {
                redirect_after: Duration::from_secs(REDIRECT_COUNTDOWN_SECS)
            }
        );
    }

    #[tokio::test]
    async fn test_unreachable_server_falls_back() {
        // Nothing is listening on this port
        let verifier = AuthVerifier::new("http://127.0.0.1:1");

        let mut guard = RouteGuard::spawn(verifier, Some("good-token".to_string()));
        assert!(matches!(guard.resolved().await, GuardStatus::Fallback { .. }));
    }

    #[tokio::test]
    async fn test_drop_aborts_check() {
        let hits = Arc::new(AtomicUsize::new(0));
        let addr = stub_api(hits).await;
        let verifier = AuthVerifier::new(format!("http://{addr}"));

        let guard = RouteGuard::spawn(verifier, Some("good-token".to_string()));
        drop(guard);
        // Nothing to assert beyond not hanging or panicking
    }
}
