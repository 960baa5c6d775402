//! Auth gateway: owns the process-wide session and notifies listeners.
//!
//! Session state lives in a `tokio::sync::watch` channel. Views never write
//! it; only gateway operations (sign-in, register, refresh, sign-out) do.
//! Listeners register with `subscribe` at startup and keep the returned
//! `AuthSubscription` until teardown.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::{AuthBackend, BackendError, BackendResult};
use crate::models::Session;

/// Tokens expiring within this margin are refreshed before use.
pub const TOKEN_REFRESH_MARGIN: Duration = Duration::from_secs(60);

struct Inner {
    backend: Arc<dyn AuthBackend>,
    session: watch::Sender<Option<Session>>,
}

/// Cloneable handle to the auth backend and current session.
#[derive(Clone)]
pub struct AuthGateway {
    inner: Arc<Inner>,
}

impl AuthGateway {
    pub fn new(backend: Arc<dyn AuthBackend>) -> Self {
        let (session, _) = watch::channel(None);
        Self {
            inner: Arc::new(Inner { backend, session }),
        }
    }

    /// Verifies credentials and publishes the new session on success.
    ///
    /// # Errors
    /// Returns the backend error; the session is left unchanged.
    pub async fn sign_in(&self, email: &str, password: &str) -> BackendResult<Session> {
        let session = self.inner.backend.sign_in(email, password).await?;
        tracing::info!(uid = %session.uid, "signed in");
        self.publish(Some(session.clone()));
        Ok(session)
    }

    /// Creates an account and publishes its session on success.
    ///
    /// # Errors
    /// Returns the backend error; the session is left unchanged.
    pub async fn register(&self, email: &str, password: &str) -> BackendResult<Session> {
        let session = self.inner.backend.register(email, password).await?;
        tracing::info!(uid = %session.uid, "registered");
        self.publish(Some(session.clone()));
        Ok(session)
    }

    pub fn sign_out(&self) {
        tracing::info!("signed out");
        self.publish(None);
    }

    pub fn current(&self) -> Option<Session> {
        self.inner.session.borrow().clone()
    }

    /// Returns a usable id token, refreshing it first if it is about to expire.
    ///
    /// A refreshed session is republished only if the same user is still
    /// signed in when the refresh completes.
    ///
    /// # Errors
    /// Returns `Unauthenticated` if nobody is signed in, or the refresh error.
    pub async fn fresh_id_token(&self) -> BackendResult<String> {
        let Some(session) = self.current() else {
            return Err(BackendError::unauthenticated());
        };
        if !session.expires_within(TOKEN_REFRESH_MARGIN) {
            return Ok(session.id_token);
        }

        let mut refreshed = self.inner.backend.refresh(&session.refresh_token).await?;
        let token = refreshed.id_token.clone();
        let replaced = self.inner.session.send_if_modified(|current| match current {
            Some(active) if active.uid == refreshed.uid => {
                if refreshed.email.is_none() {
                    refreshed.email = active.email.take();
                }
                *current = Some(refreshed);
                true
            }
            _ => false,
        });
        if replaced {
            tracing::debug!("id token refreshed");
            Ok(token)
        } else {
            Err(BackendError::unauthenticated())
        }
    }

    /// Registers a session listener.
    ///
    /// The callback runs once immediately with the current session, then on
    /// every change. Rapid changes may coalesce, but the last value is always
    /// delivered. Must be called from within a tokio runtime.
    pub fn subscribe<F>(&self, mut callback: F) -> AuthSubscription
    where
        F: FnMut(Option<Session>) + Send + 'static,
    {
        let mut rx = self.inner.session.subscribe();
        let initial = rx.borrow_and_update().clone();
        callback(initial);

        let task = tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let session = rx.borrow_and_update().clone();
                callback(session);
            }
        });
        AuthSubscription { task: Some(task) }
    }

    fn publish(&self, session: Option<Session>) {
        self.inner.session.send_replace(session);
    }
}

/// Handle for a registered session listener. Dropping it unsubscribes.
#[derive(Debug)]
pub struct AuthSubscription {
    task: Option<JoinHandle<()>>,
}

impl AuthSubscription {
    pub fn unsubscribe(mut self) {
        self.cancel();
    }

    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for AuthSubscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Instant;

    use async_trait::async_trait;
    use tokio::sync::mpsc;

    use super::*;
    use crate::backend::BackendErrorKind;

    struct FakeAuth {
        refreshes: AtomicUsize,
        fail_password: &'static str,
        token_ttl: Mutex<Duration>,
    }

    impl FakeAuth {
        fn new() -> Self {
            Self {
                refreshes: AtomicUsize::new(0),
                fail_password: "wrong",
                token_ttl: Mutex::new(Duration::from_secs(3600)),
            }
        }

        fn session(&self, email: &str, token: &str) -> Session {
            Session {
                uid: format!("uid-{email}"),
                email: Some(email.to_string()),
                id_token: token.to_string(),
                refresh_token: "refresh".to_string(),
                expires_at: Instant::now() + *self.token_ttl.lock().unwrap(),
            }
        }
    }

    #[async_trait]
    impl AuthBackend for FakeAuth {
        async fn sign_in(&self, email: &str, password: &str) -> BackendResult<Session> {
            if password == self.fail_password {
                return Err(BackendError::http_status(400, ""));
            }
            Ok(self.session(email, "token-1"))
        }

        async fn register(&self, email: &str, _password: &str) -> BackendResult<Session> {
            Ok(self.session(email, "token-new"))
        }

        async fn refresh(&self, _refresh_token: &str) -> BackendResult<Session> {
            self.refreshes.fetch_add(1, Ordering::SeqCst);
            *self.token_ttl.lock().unwrap() = Duration::from_secs(3600);
            Ok(self.session("a@b.c", "token-2"))
        }
    }

    #[tokio::test]
    async fn test_subscribe_reports_current_then_changes() {
        let gateway = AuthGateway::new(Arc::new(FakeAuth::new()));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let subscription = gateway.subscribe(move |session| {
            let _ = tx.send(session.map(|s| s.uid));
        });

        assert_eq!(rx.recv().await, Some(None));

        gateway.sign_in("a@b.c", "pw").await.unwrap();
        assert_eq!(rx.recv().await, Some(Some("uid-a@b.c".to_string())));

        gateway.sign_out();
        assert_eq!(rx.recv().await, Some(None));

        subscription.unsubscribe();
        gateway.sign_in("a@b.c", "pw").await.unwrap();
        // Task aborted: the sender is dropped and no further values arrive.
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_failed_sign_in_leaves_session_absent() {
        let gateway = AuthGateway::new(Arc::new(FakeAuth::new()));
        let err = gateway.sign_in("a@b.c", "wrong").await.unwrap_err();
        assert_eq!(err.kind, BackendErrorKind::Http);
        assert!(gateway.current().is_none());
    }

    #[tokio::test]
    async fn test_fresh_id_token_requires_session() {
        let gateway = AuthGateway::new(Arc::new(FakeAuth::new()));
        let err = gateway.fresh_id_token().await.unwrap_err();
        assert_eq!(err.kind, BackendErrorKind::Unauthenticated);
    }

    #[tokio::test]
    async fn test_fresh_id_token_refreshes_near_expiry() {
        let backend = Arc::new(FakeAuth::new());
        *backend.token_ttl.lock().unwrap() = Duration::from_secs(10);
        let gateway = AuthGateway::new(Arc::clone(&backend) as Arc<dyn AuthBackend>);
        gateway.sign_in("a@b.c", "pw").await.unwrap();

        let token = gateway.fresh_id_token().await.unwrap();
        assert_eq!(token, "token-2");
        assert_eq!(backend.refreshes.load(Ordering::SeqCst), 1);
        assert_eq!(gateway.current().unwrap().id_token, "token-2");

        // Now valid for an hour: no second refresh.
        let token = gateway.fresh_id_token().await.unwrap();
        assert_eq!(token, "token-2");
        assert_eq!(backend.refreshes.load(Ordering::SeqCst), 1);
    }
}
