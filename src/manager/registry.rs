//! Per-key session pooling.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::config::ManagerConfig;
use crate::error::{Error, Result};
use crate::manager::session::{BoxFuture, Session, SessionKey, SessionTransport};
use crate::op::{OpResult, Request};

/// Factory for session transports.
///
/// Called by the registry exactly once per key; must not perform I/O
/// (sessions are created lazily — a transport connects on first use if it
/// needs to).
pub trait Connector: Send + Sync + 'static {
    /// Build the transport for `key`.
    fn connect(&self, key: &SessionKey, config: &ManagerConfig) -> Arc<dyn SessionTransport>;
}

impl<F> Connector for F
where
    F: Fn(&SessionKey, &ManagerConfig) -> Arc<dyn SessionTransport> + Send + Sync + 'static,
{
    fn connect(&self, key: &SessionKey, config: &ManagerConfig) -> Arc<dyn SessionTransport> {
        self(key, config)
    }
}

/// Connector for builds with no wire transport linked in.
///
/// Every live-mode request fails with a transport error naming the target;
/// stand-in routes never reach a connector, so the demo tools work fully
/// with this in place.
pub struct NullConnector;

impl Connector for NullConnector {
    fn connect(&self, key: &SessionKey, _config: &ManagerConfig) -> Arc<dyn SessionTransport> {
        Arc::new(NullTransport {
            target: key.address.clone(),
        })
    }
}

struct NullTransport {
    target: String,
}

impl SessionTransport for NullTransport {
    fn request<'a>(&'a self, _request: &'a Request) -> BoxFuture<'a, Result<OpResult>> {
        Box::pin(async move {
            Err(Error::transport(
                Some(self.target.clone()),
                "no wire transport configured",
            ))
        })
    }
}

/// Pool of one [`Session`] per `(address, community)` key.
///
/// Sessions are created on first [`acquire`], reused for the process
/// lifetime, and torn down by [`close_all`] at shutdown. The key→session
/// map is the only shared mutable state on the manager side; a single
/// mutex covers insert-on-miss and clear-on-shutdown, so two concurrent
/// first-time acquires for the same key still produce one session.
///
/// This is a cache with no eviction: distinct keys accumulate for the
/// process lifetime (see DESIGN.md for the capacity discussion).
///
/// [`acquire`]: SessionRegistry::acquire
/// [`close_all`]: SessionRegistry::close_all
pub struct SessionRegistry {
    connector: Box<dyn Connector>,
    config: ManagerConfig,
    sessions: Mutex<HashMap<SessionKey, Arc<Session>>>,
}

impl SessionRegistry {
    /// Create a registry.
    pub fn new(config: ManagerConfig, connector: impl Connector) -> Self {
        Self {
            connector: Box::new(connector),
            config,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// The configured operation defaults.
    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// Get the session for `(address, community)`, creating it on first
    /// use. Never blocks on network I/O.
    pub fn acquire(&self, address: &str, community: &str) -> Arc<Session> {
        let key = SessionKey::new(address, community);
        let mut sessions = self.sessions.lock().unwrap();
        sessions
            .entry(key.clone())
            .or_insert_with(|| {
                tracing::debug!(snmp.target = %key, "creating session");
                let transport = self.connector.connect(&key, &self.config);
                Arc::new(Session::new(key.clone(), transport, &self.config))
            })
            .clone()
    }

    /// Close every session and clear the registry. Individual close
    /// failures are logged and swallowed so one bad session cannot block
    /// the rest of shutdown.
    pub async fn close_all(&self) {
        let drained: Vec<Arc<Session>> = {
            let mut sessions = self.sessions.lock().unwrap();
            sessions.drain().map(|(_, session)| session).collect()
        };

        for session in drained {
            if let Err(err) = session.close().await {
                tracing::warn!(
                    snmp.target = %session.key(),
                    error = %err,
                    "session close failed"
                );
            }
        }
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    /// Whether the registry holds no sessions.
    pub fn is_empty(&self) -> bool {
        self.sessions.lock().unwrap().is_empty()
    }
}

impl std::fmt::Debug for SessionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionRegistry")
            .field("config", &self.config)
            .field("sessions", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oid;

    fn registry() -> SessionRegistry {
        SessionRegistry::new(ManagerConfig::default(), NullConnector)
    }

    #[test]
    fn test_acquire_reuses_same_session_for_same_key() {
        let registry = registry();
        let a = registry.acquire("192.0.2.1:161", "public");
        let b = registry.acquire("192.0.2.1:161", "public");
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_acquire_distinct_keys_get_distinct_sessions() {
        let registry = registry();
        let a = registry.acquire("192.0.2.1:161", "public");
        let b = registry.acquire("192.0.2.1:161", "private");
        let c = registry.acquire("192.0.2.2:161", "public");
        assert!(!Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(registry.len(), 3);
    }

    #[tokio::test]
    async fn test_close_all_clears_and_reacquire_creates_fresh() {
        let registry = registry();
        let before = registry.acquire("192.0.2.1:161", "public");

        registry.close_all().await;
        assert!(registry.is_empty());

        let after = registry.acquire("192.0.2.1:161", "public");
        assert!(!Arc::ptr_eq(&before, &after));
    }

    #[tokio::test]
    async fn test_null_connector_fails_requests_with_transport_error() {
        let registry = registry();
        let session = registry.acquire("203.0.113.9:161", "public");
        let err = session
            .request(&Request::get(oid!(1, 3, 6, 1)))
            .await
            .unwrap_err();
        match err {
            Error::Transport { target, .. } => {
                assert_eq!(target.as_deref(), Some("203.0.113.9:161"));
            }
            other => panic!("expected transport error, got {other}"),
        }
    }

    #[test]
    fn test_closure_connector() {
        let registry = SessionRegistry::new(
            ManagerConfig::default(),
            |key: &SessionKey, _config: &ManagerConfig| {
                Arc::new(NullTransport {
                    target: key.address.clone(),
                }) as Arc<dyn SessionTransport>
            },
        );
        let session = registry.acquire("192.0.2.5", "public");
        assert_eq!(session.key().address, "192.0.2.5");
    }
}
